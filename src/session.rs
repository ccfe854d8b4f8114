//! Game session: the engine plus everything the driver owns around it.
//!
//! Pause lives here, not in the engine: while paused, ticks are ignored and
//! only `Pause` and `Restart` get through. Engine notifications are drained
//! after every call and fed to the high-score recorder.

use blockfall_core::{dispatch, GameObserver, GameSnapshot, GameState};
use blockfall_scores::{HighScoreStore, HighScores};
use blockfall_term::Hud;
use blockfall_types::{GameAction, GameEvent};

/// Records the final score once per game.
pub struct ScoreRecorder {
    store: HighScoreStore,
    player: String,
    scores: HighScores,
    score: u32,
    last_rank: Option<usize>,
}

impl ScoreRecorder {
    pub fn new(store: HighScoreStore, player: impl Into<String>) -> Self {
        let scores = store.load();
        Self {
            store,
            player: player.into(),
            scores,
            score: 0,
            last_rank: None,
        }
    }

    pub fn scores(&self) -> &HighScores {
        &self.scores
    }

    /// Rank reached by the most recent finished game, if it made the table
    pub fn last_rank(&self) -> Option<usize> {
        self.last_rank
    }
}

impl GameObserver for ScoreRecorder {
    fn on_score_changed(&mut self, score: u32) {
        self.score = score;
    }

    fn on_game_over(&mut self) {
        self.last_rank = match self.store.record(&mut self.scores, &self.player, self.score) {
            Ok(rank) => rank,
            Err(e) => {
                log::warn!("{:#}", e);
                None
            }
        };
        match self.last_rank {
            Some(rank) => log::info!("{} placed #{} with {}", self.player, rank, self.score),
            None => log::info!("score {} did not make the table", self.score),
        }
    }
}

pub struct Session {
    game: GameState,
    paused: bool,
    recorder: ScoreRecorder,
    snapshot: GameSnapshot,
}

impl Session {
    pub fn new(seed: u32, recorder: ScoreRecorder) -> Self {
        let mut session = Self {
            game: GameState::new(seed),
            paused: false,
            recorder,
            snapshot: GameSnapshot::default(),
        };
        session.drain_events();
        session
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn recorder(&self) -> &ScoreRecorder {
        &self.recorder
    }

    /// Apply one input command. Returns whether anything changed.
    pub fn handle(&mut self, action: GameAction) -> bool {
        let changed = match action {
            GameAction::Pause => {
                if self.game.game_over() {
                    return false;
                }
                self.paused = !self.paused;
                log::debug!("paused={}", self.paused);
                true
            }
            GameAction::Restart => {
                self.paused = false;
                self.recorder.last_rank = None;
                self.game.reset();
                true
            }
            _ if self.paused => false,
            _ => self.game.apply_action(action),
        };
        self.drain_events();
        changed
    }

    /// Advance gravity unless paused.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.paused {
            return;
        }
        self.game.tick(elapsed_ms);
        self.drain_events();
    }

    fn drain_events(&mut self) {
        let events: Vec<GameEvent> = self.game.take_events();
        dispatch(&events, &mut self.recorder);
    }

    /// Snapshot and overlay state for the next frame
    pub fn frame(&mut self) -> (&GameSnapshot, Hud<'_>) {
        self.game.snapshot_into(&mut self.snapshot);
        let hud = Hud {
            paused: self.paused,
            high_scores: Some(self.recorder.scores()),
            last_rank: self.recorder.last_rank(),
        };
        (&self.snapshot, hud)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall_types::TICK_MS;

    fn session(dir: &tempfile::TempDir) -> Session {
        let store = HighScoreStore::new(dir.path().join("scores.json"));
        Session::new(7, ScoreRecorder::new(store, "tester"))
    }

    /// Hard-drop until the stack reaches the top.
    fn play_out(session: &mut Session) {
        for _ in 0..500 {
            if session.game().game_over() {
                return;
            }
            session.handle(GameAction::HardDrop);
        }
        panic!("game never ended");
    }

    #[test]
    fn pause_blocks_ticks_and_moves() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(&dir);
        let pos = session.game().position();

        assert!(session.handle(GameAction::Pause));
        session.tick(5_000);
        assert!(!session.handle(GameAction::MoveLeft));
        assert!(!session.handle(GameAction::HardDrop));
        assert_eq!(session.game().position(), pos);
        assert_eq!(session.game().fall_timer_ms(), 0);

        assert!(session.handle(GameAction::Pause));
        session.tick(1_000);
        assert_ne!(session.game().position(), pos);
    }

    #[test]
    fn game_over_records_one_score() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(&dir);

        play_out(&mut session);
        assert_eq!(session.recorder().scores().len(), 1);
        assert_eq!(session.recorder().last_rank(), Some(1));

        // Nothing further is recorded while the game stays over.
        session.handle(GameAction::HardDrop);
        session.tick(10_000);
        assert_eq!(session.recorder().scores().len(), 1);

        let stored = HighScoreStore::new(dir.path().join("scores.json")).load();
        assert_eq!(stored.entries()[0].player_name, "tester");
    }

    #[test]
    fn failed_save_keeps_score_in_memory() {
        let dir = tempfile::tempdir().unwrap();
        let store = HighScoreStore::new(dir.path().join("missing").join("scores.json"));
        let mut session = Session::new(7, ScoreRecorder::new(store, "tester"));

        play_out(&mut session);
        assert_eq!(session.recorder().scores().len(), 1);
        assert_eq!(session.recorder().last_rank(), None);
        assert!(!dir.path().join("missing").exists());
    }

    #[test]
    fn engine_queue_is_empty_between_calls() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(&dir);
        assert!(session.game().pending_events().is_empty());

        for _ in 0..200 {
            session.handle(GameAction::HardDrop);
            session.tick(TICK_MS);
            assert!(session.game().pending_events().is_empty());
            if session.game().game_over() {
                session.handle(GameAction::Restart);
            }
        }
        assert!(session.game().pending_events().is_empty());
    }

    #[test]
    fn pause_is_ignored_after_game_over() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(&dir);
        play_out(&mut session);
        assert!(!session.handle(GameAction::Pause));
        assert!(!session.paused());
    }

    #[test]
    fn restart_unpauses_and_starts_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(&dir);
        play_out(&mut session);

        assert!(session.handle(GameAction::Restart));
        assert!(!session.game().game_over());
        assert_eq!(session.recorder().last_rank(), None);

        session.handle(GameAction::Pause);
        session.handle(GameAction::Restart);
        assert!(!session.paused());
    }

    #[test]
    fn frame_carries_hud_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(&dir);
        session.handle(GameAction::Pause);
        let (snap, hud) = session.frame();
        assert!(hud.paused);
        assert!(!snap.game_over);
        assert!(snap.active.is_some());
    }
}
