//! Game controller - drives one falling piece at a time
//!
//! The controller owns the board, the piece factory and the progression
//! tracker. An external driver calls [`Game::tick`] every
//! [`Game::fall_delay_ms`] milliseconds and forwards player input through
//! [`Game::command`]. Both are synchronous; nothing here sleeps or spawns.
//!
//! Lifecycle of a piece:
//!
//! ```text
//! Spawning -> Falling -> (Moving | Rotating)* -> Landing -> Spawning
//!                                                   \-> GameOver (spawn blocked)
//! ```

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::factory::PieceFactory;
use crate::piece::Piece;
use crate::progression::Progression;
use crate::scoring::{line_clear_points, placement_points};
use crate::snapshot::{SettledCell, Snapshot};
use crate::types::{
    Command, CommandOutcome, IgnoredReason, PieceKind, TickOutcome, BOARD_HEIGHT, BOARD_WIDTH,
    INITIAL_FALL_DELAY_MS, LEVEL_UP_DELAY_STEP_MS,
};

/// Parameters of a new game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: i16,
    pub height: i16,
    pub initial_fall_delay_ms: i32,
    /// Seed for the piece factory.
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            initial_fall_delay_ms: INITIAL_FALL_DELAY_MS,
            seed: 1,
        }
    }
}

/// What happened when the last piece settled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandingReport {
    pub kind: PieceKind,
    pub rows_cleared: usize,
    /// Placement bonus plus row-clear points.
    pub points: u32,
    pub level_up: bool,
    /// The following spawn was blocked.
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    board: Board,
    factory: PieceFactory,
    current: Piece,
    next: PieceKind,
    progression: Progression,
    fall_delay_ms: i32,
    paused: bool,
    game_over: bool,
    last_landing: Option<LandingReport>,
}

/// Start a game on a `width` x `height` board with default settings
pub fn new_game(width: i16, height: i16) -> Game {
    Game::new(GameConfig {
        width,
        height,
        ..GameConfig::default()
    })
}

impl Game {
    /// Create a game with a seeded random piece factory
    pub fn new(config: GameConfig) -> Self {
        Self::with_factory(config, PieceFactory::seeded(config.seed))
    }

    /// Create a game drawing pieces from `factory`
    pub fn with_factory(config: GameConfig, mut factory: PieceFactory) -> Self {
        let board = Board::new(config.width, config.height);
        let current = PieceFactory::create(factory.next_kind(), config.width);
        let next = factory.next_kind();

        let mut game = Self {
            config,
            board,
            factory,
            current,
            next,
            progression: Progression::new(),
            fall_delay_ms: config.initial_fall_delay_ms,
            paused: false,
            game_over: false,
            last_landing: None,
        };
        game.game_over = !game.spawn_fits();
        game
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The falling piece (the blocked one, after game over)
    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.progression.score()
    }

    pub fn level(&self) -> u32 {
        self.progression.level()
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Milliseconds the driver should wait before the next tick.
    ///
    /// Shrinks by 120 on every level-up with no floor, so it can go negative.
    /// Re-read after every `tick`/`command`. Unchanged while paused.
    pub fn fall_delay_ms(&self) -> i32 {
        self.fall_delay_ms
    }

    /// Take and clear the last landing event.
    pub fn take_last_landing(&mut self) -> Option<LandingReport> {
        self.last_landing.take()
    }

    fn spawn_fits(&self) -> bool {
        self.current
            .offsets()
            .iter()
            .all(|&(x, y)| self.board.can_place(x, y))
    }

    /// Advance the falling piece by one row, landing it if it cannot fall.
    ///
    /// A no-op while paused.
    pub fn tick(&mut self) -> TickOutcome {
        if self.game_over {
            return TickOutcome::GameOver;
        }
        if self.paused {
            return TickOutcome::Continued;
        }

        if self.current.can_translate(&self.board, 0, 1) {
            self.current.translate(0, 1);
            return TickOutcome::Continued;
        }

        self.land();
        if self.game_over {
            TickOutcome::GameOver
        } else {
            TickOutcome::Landed
        }
    }

    /// Apply a player command
    pub fn command(&mut self, command: Command) -> CommandOutcome {
        if self.game_over {
            return CommandOutcome::Ignored(IgnoredReason::GameOver);
        }

        match command {
            Command::TogglePause => {
                self.paused = !self.paused;
                CommandOutcome::Toggled
            }
            _ if self.paused => CommandOutcome::Ignored(IgnoredReason::Paused),
            Command::Left => self.try_move(-1, 0),
            Command::Right => self.try_move(1, 0),
            Command::Down => self.try_move(0, 1),
            Command::Drop => self.hard_drop(),
            Command::Rotate => self.try_rotate(),
        }
    }

    fn try_move(&mut self, dx: i16, dy: i16) -> CommandOutcome {
        if self.current.can_translate(&self.board, dx, dy) {
            self.current.translate(dx, dy);
            return CommandOutcome::Moved;
        }

        if dy == 1 {
            self.land();
            return CommandOutcome::Landed;
        }

        CommandOutcome::Blocked
    }

    fn try_rotate(&mut self) -> CommandOutcome {
        if self.current.can_rotate(&self.board) && self.current.rotate(&self.board) {
            CommandOutcome::Moved
        } else {
            CommandOutcome::Blocked
        }
    }

    fn hard_drop(&mut self) -> CommandOutcome {
        while self.current.can_translate(&self.board, 0, 1) {
            self.current.translate(0, 1);
        }
        self.land();
        CommandOutcome::Landed
    }

    /// Settle the current piece, score it, clear rows and spawn the next one.
    fn land(&mut self) {
        let kind = self.current.kind();
        self.board.settle(&self.current);

        let placement = placement_points(self.progression.level());
        self.progression.update(placement);

        let completed = self.board.count_completed_rows();
        let clear = line_clear_points(completed, self.progression.level());
        self.progression.update(clear);

        let level_up = self.progression.level_up();
        if level_up {
            self.fall_delay_ms -= LEVEL_UP_DELAY_STEP_MS;
        }

        let rows_cleared = self.board.clear_completed_rows();

        self.current = PieceFactory::create(self.next, self.config.width);
        self.next = self.factory.next_kind();
        if !self.spawn_fits() {
            self.game_over = true;
        }

        self.last_landing = Some(LandingReport {
            kind,
            rows_cleared,
            points: placement + clear,
            level_up,
            game_over: self.game_over,
        });
    }

    /// Copy out everything a renderer needs
    pub fn snapshot(&self) -> Snapshot {
        let mut settled: Vec<SettledCell> = self
            .board
            .occupied()
            .map(|((x, y), kind)| SettledCell { x, y, kind })
            .collect();
        settled.sort_by_key(|c| (c.y, c.x));

        let (falling_kind, falling_piece_cells) = if self.game_over {
            (None, Vec::new())
        } else {
            (Some(self.current.kind()), self.current.offsets().to_vec())
        };

        Snapshot {
            width: self.board.width(),
            height: self.board.height(),
            settled,
            falling_kind,
            falling_piece_cells,
            next_piece_kind: self.next,
            score: self.progression.score(),
            level: self.progression.level(),
            fall_delay_ms: self.fall_delay_ms,
            game_over: self.game_over,
            paused: self.paused,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
