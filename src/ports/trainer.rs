use crate::{Result, engine::Board};

/// Consumes finished episodes to update a learner.
pub trait Trainer {
    /// Update from a complete episode.
    ///
    /// Implementations fail with
    /// [`Error::IncompleteEpisode`](crate::Error::IncompleteEpisode) when
    /// the board is still in progress.
    fn train(&mut self, board: &Board) -> Result<()>;
}
