use crate::{Result, engine::Board};

/// A move source for one seat of a tournament.
///
/// `candidates` returns every move the strategy considers equally best for
/// the current position; the tournament driver breaks ties uniformly with
/// its own seeded generator. An empty candidate set is surfaced by the
/// driver as [`Error::NoCandidateMoves`](crate::Error::NoCandidateMoves).
pub trait Strategy {
    /// Human-readable name for reporting.
    fn name(&self) -> &str;

    /// The tied-best candidate moves for the current position.
    fn candidates(&mut self, board: &Board) -> Result<Vec<usize>>;

    /// Reseed the strategy's internal generator, if it has one.
    fn set_rng_seed(&mut self, _seed: u64) {}
}
