//! Static line tables.
//!
//! Lines are index triples in ascending order. For incremental checks each
//! cell also knows the "other two" cells of every line through it: the center
//! sits on 4 lines, corners on 3 and edges on 2.

use super::position::Position;

/// Three board indices forming a winning line.
pub type Line = [usize; 3];

/// The 8 winning lines: rows, columns, diagonals.
pub const LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

const PARTNERS: [&[(usize, usize)]; 9] = [
    &[(1, 2), (4, 8), (3, 6)],
    &[(0, 2), (4, 7)],
    &[(1, 0), (4, 6), (5, 8)],
    &[(0, 6), (4, 5)],
    &[(0, 8), (2, 6), (1, 7), (3, 5)],
    &[(2, 8), (3, 4)],
    &[(3, 0), (4, 2), (7, 8)],
    &[(6, 8), (4, 1)],
    &[(5, 2), (4, 0), (6, 7)],
];

/// The other two cells of every line through `pos`.
pub fn partners(pos: Position) -> &'static [(usize, usize)] {
    PARTNERS[pos.to_index()]
}

/// Rebuilds the canonical (sorted) line through `pos` and its two partners.
pub fn line_through(pos: Position, partners: (usize, usize)) -> Line {
    let mut line = [pos.to_index(), partners.0, partners.1];
    line.sort_unstable();
    line
}

/// The lines through `pos`, canonical form.
pub fn lines_through(pos: Position) -> impl Iterator<Item = Line> {
    partners(pos).iter().map(move |&pair| line_through(pos, pair))
}
