//! Learnable value model and its on-disk snapshot format

pub mod serialization;
pub mod value;

pub use serialization::{SavedModel, TrainingMetadata};
pub use value::ValueModel;
