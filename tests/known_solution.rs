use cross_solitaire::game::{Board, Direction, Move, Position, CENTER};
use cross_solitaire::search::{SearchConfig, SearchOutcome, Solver};

/// The first solution a depth-first search finds from the initial layout
/// when candidates are tried in generation order.
const SOLUTION: [((i32, i32), (i32, i32), (i32, i32)); 31] = [
    ((1, 3), (2, 3), (3, 3)),
    ((2, 1), (2, 2), (2, 3)),
    ((0, 2), (1, 2), (2, 2)),
    ((0, 4), (0, 3), (0, 2)),
    ((2, 3), (2, 2), (2, 1)),
    ((2, 0), (2, 1), (2, 2)),
    ((2, 4), (1, 4), (0, 4)),
    ((2, 6), (2, 5), (2, 4)),
    ((3, 2), (2, 2), (1, 2)),
    ((0, 2), (1, 2), (2, 2)),
    ((3, 0), (3, 1), (3, 2)),
    ((3, 2), (2, 2), (1, 2)),
    ((3, 4), (2, 4), (1, 4)),
    ((0, 4), (1, 4), (2, 4)),
    ((3, 6), (3, 5), (3, 4)),
    ((3, 4), (2, 4), (1, 4)),
    ((5, 2), (4, 2), (3, 2)),
    ((4, 0), (4, 1), (4, 2)),
    ((4, 2), (3, 2), (2, 2)),
    ((1, 2), (2, 2), (3, 2)),
    ((3, 2), (3, 3), (3, 4)),
    ((4, 4), (3, 4), (2, 4)),
    ((1, 4), (2, 4), (3, 4)),
    ((4, 6), (4, 5), (4, 4)),
    ((4, 3), (4, 4), (4, 5)),
    ((6, 4), (5, 4), (4, 4)),
    ((3, 4), (4, 4), (5, 4)),
    ((6, 2), (6, 3), (6, 4)),
    ((6, 4), (5, 4), (4, 4)),
    ((4, 5), (4, 4), (4, 3)),
    ((5, 3), (4, 3), (3, 3)),
];

fn solution() -> Vec<Move> {
    SOLUTION
        .iter()
        .map(|&(o, j, d)| {
            Move::new(
                Position::new(o.0, o.1),
                Position::new(j.0, j.1),
                Position::new(d.0, d.1),
            )
        })
        .collect()
}

fn board_after(moves: &[Move]) -> Board {
    let mut board = Board::new();
    board.replay(moves).expect("prefix of a known solution is legal");
    board
}

#[test]
fn solution_moves_are_axis_jumps() {
    for mv in solution() {
        let is_generated = Direction::ALL
            .iter()
            .any(|&dir| Move::toward(mv.origin(), dir) == mv);
        assert!(is_generated, "{mv} is not a single axis jump");
    }
}

#[test]
fn solution_drives_board_to_target() {
    let mut board = Board::new();
    assert!(!board.is_solved());
    assert_eq!(board.peg_count(), 32);

    for (step, mv) in solution().iter().enumerate() {
        assert!(board.is_legal(mv), "step {} {mv} should be legal", step + 1);
        assert!(!board.is_solved(), "solved too early at step {}", step + 1);
        board.apply(mv);
        assert_eq!(board.peg_count(), 31 - step);
    }

    assert!(board.is_solved());
    assert_eq!(board.peg_count(), 1);
    assert_eq!(
        board.get(CENTER),
        Some(cross_solitaire::game::Cell::Peg)
    );
}

#[test]
fn undoing_solution_in_reverse_restores_initial_layout() {
    let moves = solution();
    let mut board = Board::new();
    for mv in &moves {
        board.apply(mv);
    }
    for (undone, mv) in moves.iter().rev().enumerate() {
        board.undo(mv);
        assert_eq!(board.peg_count(), 2 + undone);
    }
    assert_eq!(board, Board::new());
}

#[test]
fn replay_counts_all_moves() {
    let mut board = Board::new();
    assert_eq!(board.replay(&solution()), Ok(31));
    assert!(board.is_solved());
}

#[test]
fn solver_finds_remaining_moves_near_the_end() {
    let moves = solution();
    let mut board = board_after(&moves[..20]);
    let before = board;

    let report = Solver::default().solve(&mut board);

    assert_eq!(report.outcome, SearchOutcome::Solved(moves[20..].to_vec()));
    assert_eq!(report.nodes, 27);
    assert_eq!(board, before);
}

#[test]
fn solver_backtracks_to_the_same_solution() {
    let moves = solution();
    let mut board = board_after(&moves[..18]);

    let report = Solver::default().solve(&mut board);

    assert_eq!(report.solution(), Some(&moves[18..]));
    assert_eq!(report.nodes, 106_391);
    assert_eq!(board, board_after(&moves[..18]));
}

#[test]
fn node_budget_is_exact() {
    let moves = solution();
    let mut board = board_after(&moves[..20]);

    let mut enough = Solver::new(SearchConfig {
        max_nodes: Some(27),
        ..Default::default()
    });
    assert!(matches!(
        enough.solve(&mut board).outcome,
        SearchOutcome::Solved(_)
    ));

    let mut short = Solver::new(SearchConfig {
        max_nodes: Some(26),
        ..Default::default()
    });
    let report = short.solve(&mut board);
    assert_eq!(report.outcome, SearchOutcome::NodeLimit);
    assert_eq!(report.nodes, 26);
    assert_eq!(board, board_after(&moves[..20]));
}
