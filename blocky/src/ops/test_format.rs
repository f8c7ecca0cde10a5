use itertools::iproduct;

use crate::{Block, Color, Quad, Rect, WeakBlock};

// macros make formatting nicer

/// this has very little error handling, must be a square with a side length of 1, 2, 4 or 8
#[macro_export]
macro_rules! test_block {
    {$s:literal} => {
        $crate::Block::from_test_format($s)
    };
}

impl Block {
    /// Builds a root block from rows of color letters (`.` for uncolored).
    ///
    /// Quadrants of a single color become leaves, anything else is split
    /// again. First line may be empty, leading/trailing spaces are ignored.
    pub fn from_test_format(s: &str) -> Block {
        let rows: Vec<Vec<Option<Color>>> = s
            .split_ascii_whitespace()
            .map(|row| row.chars().map(parse_cell).collect())
            .collect();
        let size = rows.len();
        assert!(
            size.is_power_of_two() && size <= 8 && rows.iter().all(|row| row.len() == size),
            "expected a square with a side length of 1, 2, 4 or 8"
        );
        build(&rows, (0, 0), size, 0)
    }
}

fn build(rows: &[Vec<Option<Color>>], (row, col): (usize, usize), len: usize, depth: u8) -> Block {
    let first = rows[row][col];
    let uniform = iproduct!(row..row + len, col..col + len).all(|(r, c)| rows[r][c] == first);
    if uniform {
        return Block::new_unchecked(Rect::BOARD, depth, WeakBlock::new(), first);
    }
    let half = len / 2;
    let children = Quad::from_fn(|q| {
        let at = (
            if q.is_north() { row } else { row + half },
            if q.is_west() { col } else { col + half },
        );
        build(rows, at, half, depth + 1)
    });
    let block = Block::new_unchecked(Rect::BOARD, depth, WeakBlock::new(), None);
    block
        .set_children(children)
        .expect("children are built one level down");
    block
}

fn parse_cell(c: char) -> Option<Color> {
    match c {
        '.' => None,
        _ => Some(Color::from_char(c).unwrap_or_else(|| panic!("Invalid color {c:?}"))),
    }
}
