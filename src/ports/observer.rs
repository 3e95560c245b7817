use crate::{
    Result,
    engine::{Board, GameOutcome},
    tournament::TournamentStats,
};

/// Observer of tournament progress.
///
/// All methods default to no-ops so implementations override only the
/// events they care about.
pub trait Observer {
    /// Called before a set begins. `total_games` is known only for
    /// fixed-length sets.
    fn on_set_start(&mut self, _total_games: Option<usize>) -> Result<()> {
        Ok(())
    }

    /// Called after every applied move with the board as it now stands.
    fn on_move(&mut self, _board: &Board) -> Result<()> {
        Ok(())
    }

    /// Called after every finished episode with the cumulative stats.
    fn on_game_end(
        &mut self,
        _game_num: u64,
        _outcome: GameOutcome,
        _stats: &TournamentStats,
    ) -> Result<()> {
        Ok(())
    }

    /// Called once the set's stop condition is met.
    fn on_set_end(&mut self, _stats: &TournamentStats) -> Result<()> {
        Ok(())
    }
}
