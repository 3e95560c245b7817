//! Tournament-level behavior across strategies, trainers, and observers

use std::sync::{Arc, Mutex};

use selfplay::{
    engine::{Board, GameOutcome},
    model::ValueModel,
    ports::Observer,
    tournament::{
        MinimaxStrategy, ModelStrategy, ModelTrainer, RandomStrategy, StopCondition, Tournament,
        TournamentStats,
    },
};

#[test]
fn minimax_never_loses_to_random() {
    let mut tournament = Tournament::with_seed(
        Box::new(MinimaxStrategy),
        Box::new(RandomStrategy::with_seed(11)),
        12,
    );
    tournament.play_set(StopCondition::Games(20)).unwrap();

    let stats = tournament.stats();
    assert_eq!(stats.total, 20);
    assert_eq!(stats.wins_o, 0, "random beat the exhaustive search");
}

#[test]
fn minimax_pair_draws_every_game() {
    let mut tournament =
        Tournament::with_seed(Box::new(MinimaxStrategy), Box::new(MinimaxStrategy), 5);
    tournament.play_set(StopCondition::Games(5)).unwrap();

    let stats = tournament.stats();
    assert_eq!(stats.draws, 5);
    assert_eq!(stats.wins_x + stats.wins_o, 0);
}

#[test]
fn self_play_set_trains_both_seats() {
    let seat_x = Arc::new(Mutex::new(ValueModel::new()));
    let seat_o = Arc::new(Mutex::new(ValueModel::new()));

    let mut tournament = Tournament::with_seed(
        Box::new(ModelStrategy::named(seat_x.clone(), "model-x")),
        Box::new(ModelStrategy::named(seat_o.clone(), "model-o")),
        21,
    );
    tournament.add_trainer(Box::new(ModelTrainer::new(seat_x.clone())));
    tournament.add_trainer(Box::new(ModelTrainer::new(seat_o.clone())));

    tournament.play_set(StopCondition::Games(16)).unwrap();

    assert_eq!(seat_x.lock().unwrap().games_trained(), 16);
    assert_eq!(seat_o.lock().unwrap().games_trained(), 16);
    assert!(seat_x.lock().unwrap().states_seen() > 0);
}

#[test]
fn shared_model_learns_through_both_seats() {
    // One model on both seats and in the trainer: the original self-play
    // wiring, where every episode updates the single shared learner once.
    let shared = Arc::new(Mutex::new(ValueModel::new()));

    let mut tournament = Tournament::with_seed(
        Box::new(ModelStrategy::named(shared.clone(), "model-x")),
        Box::new(ModelStrategy::named(shared.clone(), "model-o")),
        33,
    );
    tournament.add_trainer(Box::new(ModelTrainer::new(shared.clone())));

    tournament.play_set(StopCondition::Games(8)).unwrap();
    assert_eq!(shared.lock().unwrap().games_trained(), 8);
}

#[test]
fn observers_see_every_move_and_episode() {
    #[derive(Default)]
    struct Counts {
        moves: usize,
        games: usize,
        set_started: bool,
        set_ended: bool,
    }

    // The observer is boxed into the tournament, so it reports through a
    // shared counter.
    struct CountingObserver(Arc<Mutex<Counts>>);

    impl Observer for CountingObserver {
        fn on_set_start(&mut self, total_games: Option<usize>) -> selfplay::Result<()> {
            assert_eq!(total_games, Some(4));
            self.0.lock().unwrap().set_started = true;
            Ok(())
        }

        fn on_move(&mut self, board: &Board) -> selfplay::Result<()> {
            assert!(!board.move_history().is_empty());
            self.0.lock().unwrap().moves += 1;
            Ok(())
        }

        fn on_game_end(
            &mut self,
            game_num: u64,
            _outcome: GameOutcome,
            stats: &TournamentStats,
        ) -> selfplay::Result<()> {
            assert_eq!(game_num, stats.total);
            self.0.lock().unwrap().games += 1;
            Ok(())
        }

        fn on_set_end(&mut self, stats: &TournamentStats) -> selfplay::Result<()> {
            assert_eq!(stats.total, 4);
            self.0.lock().unwrap().set_ended = true;
            Ok(())
        }
    }

    let counts = Arc::new(Mutex::new(Counts::default()));
    let mut tournament = Tournament::with_seed(
        Box::new(RandomStrategy::with_seed(1)),
        Box::new(RandomStrategy::with_seed(2)),
        3,
    );
    tournament.add_observer(Box::new(CountingObserver(counts.clone())));
    tournament.play_set(StopCondition::Games(4)).unwrap();

    let counts = counts.lock().unwrap();
    assert!(counts.set_started);
    assert!(counts.set_ended);
    assert_eq!(counts.games, 4);
    // Episodes run 5 to 9 plies each.
    assert!(counts.moves >= 4 * 5 && counts.moves <= 4 * 9);
}

#[test]
fn seeded_tournaments_reproduce_exactly() {
    let run = || {
        let mut tournament = Tournament::with_seed(
            Box::new(RandomStrategy::with_seed(100)),
            Box::new(RandomStrategy::with_seed(200)),
            300,
        );
        tournament.play_set(StopCondition::Games(40)).unwrap();
        tournament.stats()
    };

    assert_eq!(run(), run());
}
