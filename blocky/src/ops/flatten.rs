//! projects the quadtree onto a uniform grid

use std::fmt::Display;
use std::ops::{Index, Range};

use itertools::iproduct;
use tracing::trace_span;

use crate::{Block, Board, Pos};

/// log2 of the coordinate extent of the root block
pub const BASE_DEPTH: u8 = 3;

/// How block coordinates map onto grid cells.
///
/// Boards no deeper than `BASE_DEPTH` have fewer cells than coordinate units,
/// deeper boards have more.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Scale {
    Shrink(i64),
    Grow(i64),
}
impl Scale {
    fn new(max_depth: u8) -> Self {
        let factor = 1 << BASE_DEPTH.abs_diff(max_depth);
        if max_depth <= BASE_DEPTH {
            Self::Shrink(factor)
        } else {
            Self::Grow(factor)
        }
    }
    fn apply(self, pos: Pos) -> Pos {
        match self {
            Self::Shrink(factor) => pos.map(|c| c / factor),
            Self::Grow(factor) => pos.map(|c| c * factor),
        }
    }
}

/// Square grid of the leaves covering each unit cell, indexed `grid[row][col]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Block>,
}
impl Grid {
    pub fn size(&self) -> usize {
        self.size
    }
    pub fn get(&self, row: usize, col: usize) -> Option<&Block> {
        if row < self.size && col < self.size {
            self.cells.get(row * self.size + col)
        } else {
            None
        }
    }
    pub fn rows(&self) -> impl Iterator<Item = &[Block]> {
        self.cells.chunks_exact(self.size)
    }
}
impl Index<usize> for Grid {
    type Output = [Block];
    fn index(&self, row: usize) -> &Self::Output {
        &self.cells[row * self.size..][..self.size]
    }
}
/// one color letter per cell, `.` for uncolored cells
impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for block in row {
                let c = block.color().map_or('.', |color| color.to_char());
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Board {
    /// Stamps every block onto the cells its rect covers, parents before
    /// children, so each cell ends up holding the deepest block covering it.
    ///
    /// Cells no block covers hold the root. The tree is not modified.
    pub fn flatten(&self) -> Grid {
        let size = self.size();
        let _span = trace_span!("flatten", size).entered();

        let scale = Scale::new(self.max_depth());
        let mut cells = vec![self.root().clone(); size * size];
        for block in self.blocks() {
            let rect = block.rect();
            let (nw, se) = (scale.apply(rect.nw()), scale.apply(rect.se()));
            for (row, col) in iproduct!(cell_range(nw.y, se.y, size), cell_range(nw.x, se.x, size)) {
                cells[row * size + col] = block.clone();
            }
        }
        Grid { size, cells }
    }
}

fn cell_range(start: i64, end: i64, size: usize) -> Range<usize> {
    let clamp = |v: i64| usize::try_from(v).unwrap_or(0).min(size);
    clamp(start)..clamp(end)
}

#[cfg(test)]
mod test {
    use unindent::unindent;

    use super::*;
    use crate::{Color, Quadrant};

    fn colored_board(max_depth: u8) -> Board {
        let b = Block::root();
        b.smash(max_depth).expect("leaf");
        for (child, color) in b.children().zip([Color::Red, Color::Blue, Color::Yellow, Color::Green]) {
            child.set_color(Some(color)).expect("leaf");
        }
        let mut board = Board::new(max_depth, Color::Blue).expect("valid config");
        board.set_root(b);
        board
    }
    fn color_at(grid: &Grid, row: usize, col: usize) -> Option<Color> {
        grid[row][col].color()
    }

    #[test]
    fn scale() {
        assert_eq!(Scale::new(1), Scale::Shrink(4));
        assert_eq!(Scale::new(3), Scale::Shrink(1));
        assert_eq!(Scale::new(4), Scale::Grow(2));
        assert_eq!(Scale::new(1).apply(Pos::new(4, 8)), Pos::new(1, 2));
        assert_eq!(Scale::new(5).apply(Pos::new(4, 8)), Pos::new(16, 32));
    }

    #[test]
    fn depth_1() {
        let grid = colored_board(1).flatten();
        assert_eq!(grid.size(), 2);
        assert_eq!(color_at(&grid, 0, 0), Some(Color::Red));
        assert_eq!(color_at(&grid, 0, 1), Some(Color::Blue));
        assert_eq!(color_at(&grid, 1, 1), Some(Color::Yellow));
        assert_eq!(color_at(&grid, 1, 0), Some(Color::Green));
    }

    #[test]
    fn depth_2() {
        let grid = colored_board(2).flatten();
        assert_eq!(color_at(&grid, 0, 0), Some(Color::Red));
        assert_eq!(color_at(&grid, 0, 2), Some(Color::Blue));
        assert_eq!(color_at(&grid, 2, 2), Some(Color::Yellow));
        assert_eq!(color_at(&grid, 2, 0), Some(Color::Green));
    }

    #[test]
    fn depth_3() {
        let grid = colored_board(3).flatten();
        assert_eq!(color_at(&grid, 0, 0), Some(Color::Red));
        assert_eq!(color_at(&grid, 0, 4), Some(Color::Blue));
        assert_eq!(color_at(&grid, 4, 4), Some(Color::Yellow));
        assert_eq!(color_at(&grid, 7, 0), Some(Color::Green));
    }

    #[test]
    fn depth_4() {
        let grid = colored_board(4).flatten();
        assert_eq!(grid.size(), 16);
        assert_eq!(color_at(&grid, 0, 0), Some(Color::Red));
        assert_eq!(color_at(&grid, 0, 10), Some(Color::Blue));
        assert_eq!(color_at(&grid, 15, 15), Some(Color::Yellow));
        assert_eq!(color_at(&grid, 15, 0), Some(Color::Green));
    }

    #[test]
    fn deepest_block_wins() {
        let board = colored_board(2);
        let ne = board.root().child(Quadrant::NE).expect("internal");
        ne.smash(2).expect("leaf");
        for (child, color) in ne.children().zip([Color::White, Color::Gray, Color::Black, Color::Cyan]) {
            child.set_color(Some(color)).expect("leaf");
        }
        let grid = board.flatten();
        assert_eq!(
            grid.to_string(),
            unindent(
                "
                RRWA
                RRCK
                GGYY
                GGYY
                "
            )
        );
        for row in grid.rows() {
            assert!(row.iter().all(Block::is_leaf));
        }
    }

    #[test]
    fn flatten_does_not_mutate() {
        let board = colored_board(3);
        let before = board.blocks();
        let rects: Vec<_> = before.iter().map(Block::rect).collect();
        let _ = board.flatten();
        assert_eq!(board.blocks(), before);
        assert_eq!(board.blocks().iter().map(Block::rect).collect::<Vec<_>>(), rects);
    }

    #[test]
    fn get_is_bounds_checked() {
        let grid = colored_board(1).flatten();
        assert_eq!(grid.get(1, 0).and_then(Block::color), Some(Color::Green));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }
}
