use crate::{Board, Color, Grid};

const CORNER_POINTS: u32 = 2;
const EDGE_POINTS: u32 = 1;

impl Grid {
    /// Corner cells matching `target` are worth 2, other border cells 1,
    /// interior cells nothing.
    pub fn perimeter_score(&self, target: Color) -> u32 {
        let last = self.size().saturating_sub(1);
        let is_target = |(row, col): (usize, usize)| self[row][col].color() == Some(target);

        let corners = [(0, 0), (0, last), (last, 0), (last, last)];
        let edges = (1..last).flat_map(|i| [(0, i), (last, i), (i, 0), (i, last)]);

        let corner_count = corners.into_iter().filter(|cell| is_target(*cell)).count();
        let edge_count = edges.filter(|cell| is_target(*cell)).count();
        // at most 4 * 2^MAX_DEPTH cells
        u32::try_from(corner_count).unwrap_or(u32::MAX) * CORNER_POINTS
            + u32::try_from(edge_count).unwrap_or(u32::MAX) * EDGE_POINTS
    }
}

impl Board {
    pub fn perimeter_score(&self) -> u32 {
        self.flatten().perimeter_score(self.target())
    }
}
