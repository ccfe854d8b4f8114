//! Game state module - the engine state machine
//!
//! Ties together board, pieces, RNG and scoring. Handles gravity, movement,
//! rotation with wall kicks, hold, hard drop, locking, line clears and the
//! transition to game over.
//!
//! Every public operation is total: rejected commands return `false` or do
//! nothing, and no call leaves the state half-updated.

use crate::board::Board;
use crate::piece::Piece;
use crate::pieces::spawn_position;
use crate::rng::PieceRandomizer;
use crate::scoring::{fall_interval_ms, level_for_lines, line_clear_points};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// The falling piece together with its board position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub piece: Piece,
    pub pos: Position,
}

impl ActivePiece {
    /// Place `piece` at its spawn position
    pub fn spawn(piece: Piece) -> Self {
        Self {
            pos: spawn_position(piece.mask()),
            piece,
        }
    }

    /// Whether the piece fits on `board` at its current position
    pub fn fits(&self, board: &Board) -> bool {
        board.is_valid_placement(self.piece.mask(), self.pos.x, self.pos.y)
    }
}

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Running,
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    /// `None` only once the game is over
    active: Option<ActivePiece>,
    next: Piece,
    hold: Option<Piece>,
    can_hold: bool,
    randomizer: PieceRandomizer,
    score: u32,
    level: u32,
    lines: u32,
    fall_interval_ms: u32,
    fall_timer_ms: u32,
    game_over: bool,
    /// Notifications not yet drained by the driver
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a running game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut state = Self {
            board: Board::new(),
            active: None,
            next: Piece::new(PieceKind::I),
            hold: None,
            can_hold: true,
            randomizer: PieceRandomizer::new(seed),
            score: 0,
            level: 1,
            lines: 0,
            fall_interval_ms: fall_interval_ms(1),
            fall_timer_ms: 0,
            game_over: false,
            events: Vec::new(),
        };
        state.reset();
        state
    }

    /// Start over: empty board, zeroed counters, fresh current and next piece.
    ///
    /// The RNG stream continues, so consecutive games see different pieces.
    pub fn reset(&mut self) {
        self.board.clear();
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.game_over = false;
        self.fall_interval_ms = fall_interval_ms(self.level);
        self.fall_timer_ms = 0;
        self.hold = None;
        self.can_hold = true;

        let current = Piece::new(self.randomizer.draw());
        self.next = Piece::new(self.randomizer.draw());
        self.active = Some(ActivePiece::spawn(current));

        log::debug!(
            "new game: current={:?} next={:?}",
            current.kind(),
            self.next.kind()
        );
        self.events.push(GameEvent::ScoreChanged(0));
    }

    pub fn phase(&self) -> GamePhase {
        if self.game_over {
            GamePhase::GameOver
        } else {
            GamePhase::Running
        }
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn fall_timer_ms(&self) -> u32 {
        self.fall_timer_ms
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn current_piece(&self) -> Option<&Piece> {
        self.active.as_ref().map(|a| &a.piece)
    }

    pub fn position(&self) -> Option<Position> {
        self.active.map(|a| a.pos)
    }

    pub fn next_piece(&self) -> &Piece {
        &self.next
    }

    pub fn hold_piece(&self) -> Option<&Piece> {
        self.hold.as_ref()
    }

    /// Seed the piece generator was created with
    pub fn seed(&self) -> u32 {
        self.randomizer.seed()
    }

    /// Notifications queued since the last drain
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Drain queued notifications
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advance gravity by `elapsed_ms`.
    ///
    /// Once the accumulated time reaches the fall interval the accumulator is
    /// reset and the piece moves down a row; if it cannot, it locks and the
    /// next piece spawns. Returns true when the piece moved or locked.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.game_over || self.active.is_none() {
            return false;
        }

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms < self.fall_interval_ms {
            return false;
        }

        self.fall_timer_ms = 0;
        if !self.try_move(0, 1) {
            self.lock_piece();
        }
        true
    }

    /// Move the active piece by `(dx, dy)` if the target placement is valid
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let pos = active.pos.offset(dx, dy);
        if !self.board.is_valid_placement(active.piece.mask(), pos.x, pos.y) {
            return false;
        }

        self.active = Some(ActivePiece { pos, ..active });
        true
    }

    /// Rotate the active piece, trying horizontal kicks on the same row.
    ///
    /// The rotated copy is probed at offsets `0, -1, +1, -2, +2`; the first
    /// valid one replaces the live piece. The live piece is untouched when
    /// every probe fails.
    pub fn try_rotate(&mut self, clockwise: bool) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let trial = active.piece.rotated(clockwise);
        for dx in WALL_KICK_OFFSETS {
            let pos = active.pos.offset(dx, 0);
            if self.board.is_valid_placement(trial.mask(), pos.x, pos.y) {
                self.active = Some(ActivePiece { piece: trial, pos });
                return true;
            }
        }

        false
    }

    /// Lowest row the piece can fall to from its current position
    fn landing_y(&self, active: &ActivePiece) -> i8 {
        let mask = active.piece.mask();
        let mut y = active.pos.y;
        while self
            .board
            .is_valid_placement(mask, active.pos.x, y.saturating_add(1))
        {
            y += 1;
        }
        y
    }

    /// Where the active piece would land under an immediate hard drop
    pub fn shadow_position(&self) -> Option<Position> {
        let active = self.active?;
        Some(Position::new(active.pos.x, self.landing_y(&active)))
    }

    /// Drop the active piece to its landing row and lock it at once.
    ///
    /// Returns the number of rows dropped.
    pub fn hard_drop(&mut self) -> u32 {
        let Some(active) = self.active else {
            return 0;
        };

        let landing = self.landing_y(&active);
        self.active = Some(ActivePiece {
            pos: Position::new(active.pos.x, landing),
            ..active
        });
        self.lock_piece();

        (landing - active.pos.y) as u32
    }

    /// Bank the active piece, or swap it with the held one.
    ///
    /// With an empty hold the next piece is promoted; otherwise the held
    /// piece comes back at the spawn position. Either way hold stays
    /// disabled until the next lock. A swap whose incoming piece does not
    /// fit at spawn is rejected.
    pub fn hold(&mut self) -> bool {
        if !self.can_hold {
            return false;
        }

        let Some(active) = self.active else {
            return false;
        };

        let incoming = ActivePiece::spawn(self.hold.unwrap_or(self.next));
        if !incoming.fits(&self.board) {
            log::debug!("hold rejected: {:?} blocked at spawn", incoming.piece.kind());
            return false;
        }

        if self.hold.is_none() {
            self.next = Piece::new(self.randomizer.draw());
        }
        self.hold = Some(Piece::new(active.piece.kind()));
        self.active = Some(incoming);
        self.can_hold = false;

        true
    }

    /// Lock the active piece, clear rows, score, then spawn the next piece.
    ///
    /// If the next piece does not fit at its spawn position the game ends and
    /// a single `GameOver` notification is queued.
    pub fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board.lock(
            active.piece.mask(),
            active.pos.x,
            active.pos.y,
            active.piece.kind().id(),
        );

        let cleared = self.board.clear_full_rows();
        if cleared > 0 {
            self.lines += cleared as u32;

            let level = level_for_lines(self.lines);
            if level != self.level {
                log::info!("level up: {} -> {}", self.level, level);
            }
            self.level = level;
            self.fall_interval_ms = fall_interval_ms(level);

            self.score = self
                .score
                .saturating_add(line_clear_points(cleared, self.level));

            log::debug!(
                "cleared {} rows, score={} lines={}",
                cleared,
                self.score,
                self.lines
            );
            self.events.push(GameEvent::ScoreChanged(self.score));
            self.events.push(GameEvent::LinesCleared(cleared as u32));
        }

        let spawned = ActivePiece::spawn(self.next);
        if !spawned.fits(&self.board) {
            self.game_over = true;
            log::info!(
                "game over: score={} level={} lines={}",
                self.score,
                self.level,
                self.lines
            );
            self.events.push(GameEvent::GameOver);
            return;
        }

        self.active = Some(spawned);
        self.next = Piece::new(self.randomizer.draw());
        self.can_hold = true;
    }

    /// Apply a discrete command from the input layer.
    ///
    /// `Pause` belongs to the driver and is always rejected here.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.try_move(0, 1),
            GameAction::HardDrop => {
                if self.active.is_none() {
                    return false;
                }
                self.hard_drop();
                true
            }
            GameAction::RotateCw => self.try_rotate(true),
            GameAction::RotateCcw => self.try_rotate(false),
            GameAction::Hold => self.hold(),
            GameAction::Pause => false,
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.shadow_y = self.shadow_position().map(|p| p.y);
        out.next = self.next.kind();
        out.hold = self.hold.map(|p| p.kind());
        out.can_hold = self.can_hold;
        out.game_over = self.game_over;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
