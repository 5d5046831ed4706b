//! Session module - orchestrates the full game lifecycle
//!
//! Ties the board, the falling shape, and the RNG together: gravity steps,
//! deferred settlement, spawn-on-lock, game-over detection, and the
//! score/level bookkeeping derived from lines cleared.

use crate::board::Board;
use crate::rng::ShapePicker;
use crate::shape::Shape;
use crate::types::{
    Command, Direction, ShapeKind, BASE_DROP_MS, LEVEL_CAP, POINTS_PER_LINE, SCORE_PER_LEVEL,
};

/// Complete game state.
///
/// Both the periodic driver and the input collaborator mutate the same
/// board/shape pair, so callers must serialize access: one mutating call in
/// flight at a time. No operation blocks internally.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    falling: Shape,
    picker: ShapePicker,
    lines_cleared: u32,
    score: u32,
    level: u32,
    game_over: bool,
}

impl GameSession {
    /// Create a session with an empty board. The opening shape is always a
    /// line; subsequent shapes are drawn uniformly at random.
    pub fn new(seed: u32) -> Self {
        let mut picker = ShapePicker::new(seed);
        let color = picker.next_color();
        Self {
            board: Board::new(),
            falling: Shape::spawn(ShapeKind::Line, color),
            picker,
            lines_cleared: 0,
            score: 0,
            level: 0,
            game_over: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// The currently falling shape (renderer query).
    pub fn falling_shape(&self) -> &Shape {
        &self.falling
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Terminal state flag. One-way: once set it never reverts.
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Gravity interval for the current level, re-read by the driver after
    /// every step.
    pub fn drop_interval_ms(&self) -> u32 {
        BASE_DROP_MS / (self.level + 1)
    }

    /// One gravity step: sweep full rows, update the tallies, then move the
    /// falling shape down one row if it can.
    ///
    /// A blocked shape is left in place; settlement is deferred to
    /// [`GameSession::advance_or_spawn`] so the renderer observes the final
    /// resting frame before a new shape appears.
    pub fn tick(&mut self) {
        if self.game_over {
            return;
        }

        let cleared = self.board.clear_full_lines();
        if cleared > 0 {
            self.lines_cleared += cleared as u32;
            self.score = self.lines_cleared * POINTS_PER_LINE;
            self.level = (self.score / SCORE_PER_LEVEL).min(LEVEL_CAP);
        }

        if self.board.is_valid_move(&self.falling, Direction::Down) {
            self.falling.translate(0, 1);
        }
    }

    /// Settle a blocked shape and bring on its replacement.
    ///
    /// Returns false on game over: either the blocked shape never cleared
    /// the top row, or its replacement spawned straight into a collision up
    /// there. A shape that can still fall is left alone.
    pub fn advance_or_spawn(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        if self.board.is_valid_move(&self.falling, Direction::Down) {
            return true;
        }

        if self.falling.min_grid_y() < 1 {
            self.game_over = true;
            return false;
        }

        self.board.lock_shape(&mut self.falling);

        let kind = self.picker.next_kind();
        let color = self.picker.next_color();
        self.falling = Shape::spawn(kind, color);

        if !self.board.is_valid_move(&self.falling, Direction::Down)
            && self.falling.min_grid_y() < 1
        {
            self.game_over = true;
            return false;
        }
        true
    }

    /// Move the falling shape one cell left. Returns whether state changed.
    pub fn move_left(&mut self) -> bool {
        if self.board.is_valid_move(&self.falling, Direction::Left) {
            self.falling.translate(-1, 0);
            return true;
        }
        false
    }

    /// Move the falling shape one cell right. Returns whether state changed.
    pub fn move_right(&mut self) -> bool {
        if self.board.is_valid_move(&self.falling, Direction::Right) {
            self.falling.translate(1, 0);
            return true;
        }
        false
    }

    /// Move the falling shape one cell down. Returns whether state changed.
    pub fn move_down(&mut self) -> bool {
        if self.board.is_valid_move(&self.falling, Direction::Down) {
            self.falling.translate(0, 1);
            return true;
        }
        false
    }

    /// Rotate the falling shape if its kind's validity predicate allows it.
    pub fn rotate(&mut self) -> bool {
        if self.falling.is_rotation_valid(&self.board) {
            self.falling.rotate();
            return true;
        }
        false
    }

    /// Repeat [`GameSession::move_down`] until blocked.
    pub fn hard_drop(&mut self) -> bool {
        let mut moved = false;
        while self.move_down() {
            moved = true;
        }
        moved
    }

    /// Message-style entry point for input collaborators. Returns whether
    /// the state changed (redraw signal); invalid commands are no-ops.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::MoveDown => self.move_down(),
            Command::Rotate => self.rotate(),
            Command::HardDrop => self.hard_drop(),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, ShapeColor, CELL_SIZE, GRID_HEIGHT, GRID_WIDTH};

    fn fill_row(session: &mut GameSession, y: i32) {
        for x in 0..GRID_WIDTH {
            session.board_mut().set_cell(
                x,
                y,
                Cell::new(ShapeColor::Red, x * CELL_SIZE, y * CELL_SIZE, true, true),
            );
        }
    }

    #[test]
    fn test_new_session_starts_with_a_line() {
        let session = GameSession::new(12345);

        assert_eq!(session.falling_shape().kind(), ShapeKind::Line);
        assert!(!session.game_over());
        assert_eq!(session.score(), 0);
        assert_eq!(session.level(), 0);
        assert_eq!(session.lines_cleared(), 0);
    }

    #[test]
    fn test_tick_moves_shape_down_one_row() {
        let mut session = GameSession::new(1);
        let before = session.falling_shape().max_grid_y();

        session.tick();
        assert_eq!(session.falling_shape().max_grid_y(), before + 1);
    }

    #[test]
    fn test_tick_updates_score_and_level_from_cleared_lines() {
        let mut session = GameSession::new(1);
        fill_row(&mut session, 30);
        fill_row(&mut session, 31);

        session.tick();

        assert_eq!(session.lines_cleared(), 2);
        assert_eq!(session.score(), 20);
        assert_eq!(session.level(), 0);
    }

    #[test]
    fn test_level_follows_score_with_cap() {
        let mut session = GameSession::new(1);

        // 6 cleared lines -> score 60 -> level 1.
        for n in 0..6 {
            fill_row(&mut session, 31 - n);
        }
        session.tick();
        assert_eq!(session.score(), 60);
        assert_eq!(session.level(), 1);
        assert_eq!(session.drop_interval_ms(), 500);

        // Push the tally far past the cap.
        session.lines_cleared = 1000;
        fill_row(&mut session, 31);
        session.tick();
        assert_eq!(session.level(), LEVEL_CAP);
    }

    #[test]
    fn test_settlement_is_deferred_to_advance_or_spawn() {
        let mut session = GameSession::new(1);
        session.hard_drop();

        // The blocked shape is still the falling one after a tick.
        let resting = session.falling_shape().clone();
        session.tick();
        assert_eq!(session.falling_shape(), &resting);
        assert!(session.falling_shape().is_active());

        // advance_or_spawn locks it and spawns a replacement.
        assert!(session.advance_or_spawn());
        assert_ne!(session.falling_shape(), &resting);
        for cell in resting.cells() {
            assert!(session
                .board()
                .is_cell_visible(cell.grid_x(), cell.grid_y()));
        }
    }

    #[test]
    fn test_advance_leaves_a_falling_shape_alone() {
        let mut session = GameSession::new(1);
        let falling = session.falling_shape().clone();

        assert!(session.advance_or_spawn());
        assert_eq!(session.falling_shape(), &falling);
    }

    #[test]
    fn test_game_over_when_blocked_shape_is_stuck_at_top() {
        let mut session = GameSession::new(1);

        // A settled column right under the spawn point: the line's bottom
        // cell (row 2) lands on row 3's blocker without ever leaving the
        // top rows.
        for y in 3..GRID_HEIGHT {
            session.board_mut().set_cell(
                6,
                y,
                Cell::new(ShapeColor::Blue, 6 * CELL_SIZE, y * CELL_SIZE, true, true),
            );
        }

        assert!(!session.advance_or_spawn());
        assert!(session.game_over());

        // The flag is one-way and tick becomes a no-op.
        let frozen = session.falling_shape().clone();
        session.tick();
        assert_eq!(session.falling_shape(), &frozen);
        assert!(!session.advance_or_spawn());
    }

    #[test]
    fn test_game_over_when_replacement_spawn_is_blocked_at_top() {
        let mut session = GameSession::new(1);

        // Park the opening line at the right edge and let it rest on the
        // floor, well away from the spawn area.
        for _ in 0..5 {
            assert!(session.move_right());
        }
        session.hard_drop();

        // Blockers two rows deep under every spawn footprint.
        for y in [2, 3] {
            for x in 4..9 {
                session.board_mut().set_cell(
                    x,
                    y,
                    Cell::new(ShapeColor::Blue, x * CELL_SIZE, y * CELL_SIZE, true, true),
                );
            }
        }

        // The parked shape locks fine (its rows are far below the top),
        // but its replacement spawns blocked without ever leaving row 0.
        assert!(!session.advance_or_spawn());
        assert!(session.game_over());
        assert!(session.falling_shape().min_grid_y() < 1);
    }

    #[test]
    fn test_hard_drop_reaches_floor() {
        let mut session = GameSession::new(1);

        assert!(session.apply(Command::HardDrop));
        assert_eq!(session.falling_shape().max_grid_y(), GRID_HEIGHT - 1);
        assert!(!session.move_down());
    }

    #[test]
    fn test_apply_returns_change_flag() {
        let mut session = GameSession::new(1);

        assert!(session.apply(Command::MoveRight));
        assert!(session.apply(Command::MoveLeft));
        assert!(session.apply(Command::MoveDown));

        // Push to the left wall; the last move fails.
        while session.apply(Command::MoveLeft) {}
        assert!(!session.move_left());
        assert_eq!(session.falling_shape().min_grid_x(), 0);
    }

    #[test]
    fn test_same_seed_same_spawn_sequence() {
        let mut a = GameSession::new(99);
        let mut b = GameSession::new(99);

        for _ in 0..8 {
            a.hard_drop();
            b.hard_drop();
            assert_eq!(a.advance_or_spawn(), b.advance_or_spawn());
            assert_eq!(a.falling_shape().kind(), b.falling_shape().kind());
            assert_eq!(a.falling_shape().color(), b.falling_shape().color());
            if a.game_over() {
                break;
            }
        }
    }
}
