//! Trait seams between the engine, the players, and the training loop

pub mod observer;
pub mod strategy;
pub mod trainer;

pub use observer::Observer;
pub use strategy::Strategy;
pub use trainer::Trainer;
