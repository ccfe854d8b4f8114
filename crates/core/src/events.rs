//! Engine-to-observer notifications
//!
//! The engine never calls out while it is mutating. It queues [`GameEvent`]s
//! during a command or tick; the driver drains them with
//! [`GameState::take_events`](crate::GameState::take_events) once the call has
//! returned and hands them to any number of [`GameObserver`]s.

use crate::types::GameEvent;

/// Receiver for engine notifications. Every hook defaults to a no-op.
pub trait GameObserver {
    fn on_score_changed(&mut self, _score: u32) {}

    fn on_lines_cleared(&mut self, _count: u32) {}

    fn on_game_over(&mut self) {}
}

/// Deliver `events` to `observer` in order.
pub fn dispatch<O: GameObserver + ?Sized>(events: &[GameEvent], observer: &mut O) {
    for event in events {
        match *event {
            GameEvent::ScoreChanged(score) => observer.on_score_changed(score),
            GameEvent::LinesCleared(count) => observer.on_lines_cleared(count),
            GameEvent::GameOver => observer.on_game_over(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Tally {
        score: u32,
        lines: u32,
        game_overs: u32,
    }

    impl GameObserver for Tally {
        fn on_score_changed(&mut self, score: u32) {
            self.score = score;
        }

        fn on_lines_cleared(&mut self, count: u32) {
            self.lines += count;
        }

        fn on_game_over(&mut self) {
            self.game_overs += 1;
        }
    }

    struct Silent;

    impl GameObserver for Silent {}

    #[test]
    fn dispatch_routes_each_event() {
        let mut tally = Tally::default();
        dispatch(
            &[
                GameEvent::ScoreChanged(100),
                GameEvent::LinesCleared(1),
                GameEvent::ScoreChanged(400),
                GameEvent::LinesCleared(2),
                GameEvent::GameOver,
            ],
            &mut tally,
        );
        assert_eq!(tally.score, 400);
        assert_eq!(tally.lines, 3);
        assert_eq!(tally.game_overs, 1);
    }

    #[test]
    fn default_hooks_ignore_events() {
        let mut silent = Silent;
        dispatch(&[GameEvent::GameOver], &mut silent);
        let observer: &mut dyn GameObserver = &mut silent;
        dispatch(&[GameEvent::ScoreChanged(1)], observer);
    }
}
