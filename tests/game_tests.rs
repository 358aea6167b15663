//! Integration tests for the game controller

use classic_tetris::core::{new_game, Game, GameConfig, PieceFactory};
use classic_tetris::types::{Command, CommandOutcome, IgnoredReason, PieceKind, TickOutcome};

fn scripted(kinds: &[PieceKind]) -> Game {
    Game::with_factory(GameConfig::default(), PieceFactory::scripted(kinds))
}

fn repeat(game: &mut Game, command: Command, times: usize) {
    for _ in 0..times {
        assert_eq!(game.command(command), CommandOutcome::Moved, "{:?}", command);
    }
}

#[test]
fn test_game_lifecycle() {
    let mut game = new_game(10, 20);
    assert!(!game.is_game_over());
    assert!(!game.is_paused());
    assert_eq!(game.score(), 0);
    assert_eq!(game.level(), 1);
    assert_eq!(game.fall_delay_ms(), 1000);

    let before = game.current().offsets();
    assert_eq!(game.tick(), TickOutcome::Continued);
    let after = game.current().offsets();
    for (b, a) in before.iter().zip(after.iter()) {
        assert_eq!((b.0, b.1 + 1), *a);
    }
}

#[test]
fn test_same_seed_same_pieces() {
    let config = GameConfig {
        seed: 777,
        ..GameConfig::default()
    };
    let mut a = Game::new(config);
    let mut b = Game::new(config);

    for _ in 0..20 {
        assert_eq!(a.current().kind(), b.current().kind());
        assert_eq!(a.next_kind(), b.next_kind());
        a.command(Command::Drop);
        b.command(Command::Drop);
        if a.is_game_over() {
            break;
        }
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_ticks_land_piece_on_floor() {
    let mut game = scripted(&[PieceKind::I, PieceKind::J]);

    for _ in 0..19 {
        assert_eq!(game.tick(), TickOutcome::Continued);
    }
    assert_eq!(game.tick(), TickOutcome::Landed);

    let snap = game.snapshot();
    assert_eq!(snap.score, 5);
    assert_eq!(
        snap.occupied_cells().into_iter().collect::<Vec<_>>(),
        vec![(3, 19), (4, 19), (5, 19), (6, 19)]
    );
    assert_eq!(snap.falling_kind, Some(PieceKind::J));
    assert_eq!(snap.next_piece_kind, PieceKind::I);

    let report = game.take_last_landing().unwrap();
    assert_eq!(report.kind, PieceKind::I);
    assert_eq!(report.rows_cleared, 0);
    assert_eq!(report.points, 5);
    assert!(game.take_last_landing().is_none());
}

#[test]
fn test_wall_blocks_sideways_moves() {
    let mut game = scripted(&[PieceKind::I]);
    repeat(&mut game, Command::Left, 3);
    assert_eq!(game.command(Command::Left), CommandOutcome::Blocked);
    assert_eq!(game.current().offsets()[0], (0, 0));

    repeat(&mut game, Command::Right, 6);
    assert_eq!(game.command(Command::Right), CommandOutcome::Blocked);
    assert_eq!(game.current().offsets()[3], (9, 0));
}

#[test]
fn test_rotate_at_spawn_is_blocked() {
    let mut game = scripted(&[PieceKind::I]);
    let before = *game.current();
    assert_eq!(game.command(Command::Rotate), CommandOutcome::Blocked);
    assert_eq!(*game.current(), before);

    game.command(Command::Down);
    game.command(Command::Down);
    assert_eq!(game.command(Command::Rotate), CommandOutcome::Moved);
}

#[test]
fn test_completing_a_row_scores_and_clears() {
    let mut game = scripted(&[PieceKind::I, PieceKind::I, PieceKind::O, PieceKind::T]);

    // I across columns 0..=3
    repeat(&mut game, Command::Left, 3);
    assert_eq!(game.command(Command::Drop), CommandOutcome::Landed);
    assert_eq!(game.score(), 5);

    // I across columns 4..=7
    repeat(&mut game, Command::Right, 1);
    game.command(Command::Drop);
    assert_eq!(game.score(), 10);

    // O in columns 8..=9 completes row 19
    assert_eq!(game.current().kind(), PieceKind::O);
    repeat(&mut game, Command::Right, 4);
    game.command(Command::Drop);

    let report = game.take_last_landing().unwrap();
    assert_eq!(report.rows_cleared, 1);
    assert_eq!(report.points, 5 + 40);
    assert_eq!(game.score(), 55);
    assert_eq!(game.level(), 1);

    let snap = game.snapshot();
    assert_eq!(
        snap.occupied_cells().into_iter().collect::<Vec<_>>(),
        vec![(8, 19), (9, 19)]
    );
    assert_eq!(snap.settled_at(8, 19), Some(PieceKind::O));

    // T lands on the floor next to the leftover O blocks
    assert_eq!(game.current().kind(), PieceKind::T);
    game.command(Command::Drop);
    assert_eq!(game.score(), 60);
    let cells = game.snapshot().occupied_cells();
    for cell in [(4, 18), (5, 18), (6, 18), (5, 19)] {
        assert!(cells.contains(&cell), "missing {:?}", cell);
    }
}

#[test]
fn test_stacking_to_the_top_ends_the_game() {
    let mut game = scripted(&[PieceKind::O]);

    let mut landings = 0;
    while !game.is_game_over() {
        assert_eq!(game.command(Command::Drop), CommandOutcome::Landed);
        landings += 1;
        assert!(landings <= 10);
    }
    assert_eq!(landings, 10);
    assert_eq!(game.score(), 50);
    assert!(game.take_last_landing().unwrap().game_over);

    let snap = game.snapshot();
    assert!(snap.game_over);
    assert_eq!(snap.falling_kind, None);
    assert!(snap.falling_piece_cells.is_empty());
    assert_eq!(snap.settled.len(), 40);

    // Nothing changes after game over.
    for cmd in [
        Command::Left,
        Command::Right,
        Command::Down,
        Command::Drop,
        Command::Rotate,
        Command::TogglePause,
    ] {
        assert_eq!(game.command(cmd), CommandOutcome::Ignored(IgnoredReason::GameOver));
    }
    assert_eq!(game.tick(), TickOutcome::GameOver);
    assert_eq!(game.snapshot(), snap);
}

#[test]
fn test_pause_freezes_state() {
    let mut game = scripted(&[PieceKind::L, PieceKind::Z]);
    game.tick();
    let snap = game.snapshot();

    assert_eq!(game.command(Command::TogglePause), CommandOutcome::Toggled);
    assert!(game.snapshot().paused);
    for _ in 0..5 {
        assert_eq!(game.tick(), TickOutcome::Continued);
    }
    assert_eq!(
        game.command(Command::Drop),
        CommandOutcome::Ignored(IgnoredReason::Paused)
    );
    assert!(game.command(Command::Left).is_ignored());

    let paused = game.snapshot();
    assert_eq!(paused.falling_piece_cells, snap.falling_piece_cells);
    assert_eq!(paused.score, snap.score);
    assert_eq!(paused.fall_delay_ms, snap.fall_delay_ms);

    assert_eq!(game.command(Command::TogglePause), CommandOutcome::Toggled);
    assert!(game.snapshot().playable());
    assert_eq!(game.command(Command::Left), CommandOutcome::Moved);
}

#[test]
fn test_snapshot_tracks_falling_piece() {
    let mut game = scripted(&[PieceKind::S, PieceKind::T]);
    game.command(Command::Down);

    let snap = game.snapshot();
    assert_eq!(snap.width, 10);
    assert_eq!(snap.height, 20);
    assert_eq!(snap.falling_kind, Some(PieceKind::S));
    assert_eq!(snap.falling_piece_cells, game.current().offsets().to_vec());
    assert_eq!(snap.next_piece_kind, PieceKind::T);
    assert!(snap.settled.is_empty());
    assert!(!snap.game_over);
}

#[test]
fn test_narrow_board() {
    let mut game = Game::with_factory(
        GameConfig {
            width: 4,
            height: 6,
            ..GameConfig::default()
        },
        PieceFactory::scripted(&[PieceKind::I]),
    );

    // I spans all four columns; every landing clears its row.
    assert_eq!(game.current().offsets(), [(0, 0), (1, 0), (2, 0), (3, 0)]);
    game.command(Command::Drop);
    let report = game.take_last_landing().unwrap();
    assert_eq!(report.rows_cleared, 1);
    assert_eq!(game.score(), 45);
    assert!(game.board().is_empty());
}
