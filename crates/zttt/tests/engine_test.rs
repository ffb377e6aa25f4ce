//! Tests for threat analysis and the two opening strategies.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use zttt::rules::line_sum;
use zttt::{
    FirstMover, GameError, LINES, Observers, Outcome, P1_VALUE, P2_VALUE, Player, Position, PvC,
    PvP, PvcOptions, ThreatEngine,
};

const SEEDS: std::ops::Range<u64> = 0..6;

fn pvc(first: FirstMover, seed: u64) -> PvC {
    PvC::with_options(
        PvcOptions::default().with_first(first).with_seed(seed),
        Observers::default(),
    )
    .expect("Engine opening")
}

/// Cells that complete a line for `value`, found by scanning all eight lines.
fn brute_force_wins(cells: &[u8; 9], value: u8) -> Vec<Position> {
    let mut wins: Vec<Position> = LINES
        .iter()
        .filter(|&&line| line_sum(cells, line) == 2 * value)
        .flat_map(|line| line.iter().copied().filter(move |&i| cells[i] == 0))
        .filter_map(Position::from_index)
        .collect();
    wins.sort();
    wins.dedup();
    wins
}

/// Plays every opponent sequence against the engine and checks it never loses.
///
/// The game is rebuilt from `prefix` at each node, so the engine sees the same
/// random stream it would in a single uninterrupted game.
fn explore(first: FirstMover, seed: u64, prefix: &mut Vec<Position>, leaves: &mut usize) {
    let mut game = pvc(first, seed);
    for &pos in prefix.iter() {
        game.play(pos).expect("Replayed move");
    }

    let board = game.board();
    if !board.is_in_progress() {
        *leaves += 1;
        assert_ne!(
            board.winner(),
            Some(Outcome::Winner(game.player_side())),
            "{first:?} seed {seed} lost to {prefix:?} (board {:?})",
            board.history()
        );
        return;
    }

    assert_eq!(board.turn(), game.player_side());
    for pos in board.empty_positions().to_vec() {
        prefix.push(pos);
        explore(first, seed, prefix, leaves);
        prefix.pop();
    }
}

#[test]
fn test_engine_first_never_loses() {
    for seed in SEEDS {
        let mut leaves = 0;
        explore(FirstMover::Engine, seed, &mut Vec::new(), &mut leaves);
        assert!(leaves > 0);
    }
}

#[test]
fn test_player_first_never_loses() {
    for seed in SEEDS {
        let mut leaves = 0;
        explore(FirstMover::Player, seed, &mut Vec::new(), &mut leaves);
        assert!(leaves > 0);
    }
}

#[test]
fn test_engine_moves_are_legal_and_alternate() {
    let mut rng = StdRng::seed_from_u64(99);
    for seed in 0..200 {
        let first = if seed % 2 == 0 {
            FirstMover::Engine
        } else {
            FirstMover::Player
        };
        let mut game = pvc(first, seed);

        while game.board().is_in_progress() {
            let before = game.board().move_number();
            let pos = *game
                .board()
                .empty_positions()
                .choose(&mut rng)
                .expect("Empty cell");
            game.play(pos).expect("Legal human move");

            let board = game.board();
            let played = board.move_number() - before;
            assert!(played == 1 || played == 2);
            if board.is_in_progress() {
                assert_eq!(played, 2);
                assert_eq!(board.turn(), game.player_side());
            }
        }
    }
}

#[test]
fn test_winnable_moves_match_full_scan() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..300 {
        let mut game = PvP::new();
        let mut threats = [ThreatEngine::new(Player::One), ThreatEngine::new(Player::Two)];

        while game.board().is_in_progress() {
            let cells = game.board().values();
            for (engine, value) in threats.iter().zip([P1_VALUE, P2_VALUE]) {
                let opponent = if value == P1_VALUE { P2_VALUE } else { P1_VALUE };
                assert_eq!(
                    engine.winnable_moves(&cells).expect("Valid snapshot"),
                    brute_force_wins(&cells, value)
                );
                let danger = engine.danger_move(&cells).expect("Valid snapshot");
                let blocks = brute_force_wins(&cells, opponent);
                match danger {
                    Some(pos) => assert!(blocks.contains(&pos)),
                    None => assert!(blocks.is_empty()),
                }
            }

            let pos = *game
                .board()
                .empty_positions()
                .choose(&mut rng)
                .expect("Empty cell");
            game.play(pos).expect("Legal move");
            for engine in &mut threats {
                engine.record_move(game.board(), pos);
            }
        }
    }
}

#[test]
fn test_fork_corners_are_exactly_the_double_threat_corners() {
    let mut rng = StdRng::seed_from_u64(11);

    for side in [Player::One, Player::Two] {
        for _ in 0..300 {
            let mut game = PvP::new();
            let mut engine = ThreatEngine::new(side);
            let value = engine.engine_value();

            while game.board().is_in_progress() {
                let cells = game.board().values();
                let forks = engine.double_danger_moves(&cells).expect("Valid snapshot");

                for corner in Position::CORNERS {
                    let reported = forks.contains(&corner);
                    if cells[corner.to_index()] != 0 {
                        assert!(!reported, "{corner} is occupied");
                        continue;
                    }

                    let mut after = cells;
                    after[corner.to_index()] = value;
                    let threats = engine
                        .active_lines()
                        .as_slice()
                        .iter()
                        .filter(|&&line| line_sum(&after, line) == 2 * value)
                        .count();
                    assert_eq!(threats >= 2, reported, "{corner} on {cells:?}");
                }
                assert!(forks.iter().all(|p| p.is_corner()));

                let pos = *game
                    .board()
                    .empty_positions()
                    .choose(&mut rng)
                    .expect("Empty cell");
                game.play(pos).expect("Legal move");
                engine.record_move(game.board(), pos);
            }
        }
    }
}

#[test]
fn test_pruned_lines_are_dead() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..300 {
        let mut game = PvP::new();
        let mut engine = ThreatEngine::new(Player::Two);

        while game.board().is_in_progress() {
            let pos = *game
                .board()
                .empty_positions()
                .choose(&mut rng)
                .expect("Empty cell");
            game.play(pos).expect("Legal move");
            engine.record_move(game.board(), pos);

            let cells = game.board().values();
            for line in LINES {
                if !engine.active_lines().contains(&line) {
                    assert!(line.iter().all(|&i| cells[i] != 0), "{line:?} pruned early");
                }
            }
        }
    }
}

#[test]
fn test_malformed_snapshots_rejected() {
    let engine = ThreatEngine::new(Player::One);
    let mut rng = StdRng::seed_from_u64(0);

    assert!(matches!(
        engine.best_move(&[0; 8], &mut rng),
        Err(GameError::BadParameter(_))
    ));
    assert!(matches!(
        engine.winnable_moves(&[0, 0, 0, 0, 7, 0, 0, 0, 0]),
        Err(GameError::BadParameter(_))
    ));
    assert!(matches!(
        engine.danger_move(&[0; 10]),
        Err(GameError::BadParameter(_))
    ));
}

#[test]
fn test_best_move_prefers_win_over_block() {
    let engine = ThreatEngine::new(Player::Two);
    let mut rng = StdRng::seed_from_u64(5);
    let (x, o) = (P1_VALUE, P2_VALUE);

    // Both sides threaten; player two should win on the middle row.
    let cells = [x, x, 0, o, o, 0, x, 0, 0];
    assert_eq!(
        engine.best_move(&cells, &mut rng).expect("Valid snapshot"),
        Some(Position::MiddleRight)
    );

    // Only player one threatens: block.
    let cells = [x, x, 0, 0, o, 0, 0, 0, 0];
    assert_eq!(
        engine.best_move(&cells, &mut rng).expect("Valid snapshot"),
        Some(Position::TopRight)
    );
}
