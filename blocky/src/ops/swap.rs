//! exchanges two same-depth subtrees by breadth-first index

use tracing::{debug, trace};

use crate::{Block, Board, Quad, Quadrant, Rejection};

impl Board {
    /// Exchanges the subtrees at breadth-first indices `x` and `y`.
    ///
    /// Both blocks must exist, be at the same depth, and neither may be the
    /// root. Each subtree keeps its shape and colors; rects are recomputed for
    /// the slot it lands in. Rejected swaps leave the tree untouched.
    pub fn swap(&mut self, x: usize, y: usize) -> Result<(), Rejection> {
        if x < 1 || y < 1 || x == y {
            debug!(x, y, "ignored swap of root or same block");
            return Err(Rejection::RootOrSame);
        }
        let (Some(a), Some(b)) = (self.get_block(x), self.get_block(y)) else {
            debug!(x, y, "ignored swap of missing block");
            return Err(Rejection::NoSuchBlock);
        };
        if a.depth() != b.depth() {
            debug!(x, y, x_depth = a.depth(), y_depth = b.depth(), "ignored swap across depths");
            return Err(Rejection::DepthMismatch);
        }
        let (parent_a, mut quad_a, slot_a) = slot(&a, x)?;
        let (parent_b, mut quad_b, slot_b) = slot(&b, y)?;

        trace!(x, y, depth = a.depth(), "swap");
        if parent_a == parent_b {
            quad_a[slot_a] = b;
            quad_a[slot_b] = a;
            parent_a.adopt(quad_a);
        } else {
            quad_a[slot_a] = b;
            quad_b[slot_b] = a;
            parent_a.adopt(quad_a);
            parent_b.adopt(quad_b);
        }
        Ok(())
    }
}

/// the parent of the block at `index`, its children, and the slot holding the
/// block
fn slot(block: &Block, index: usize) -> Result<(Block, Quad<Block>, Quadrant), Rejection> {
    let q = Quadrant::of_bfs_index(index).ok_or(Rejection::RootOrSame)?;
    let family = block
        .parent()
        .and_then(|parent| parent.quad().map(|quad| (parent, quad)));
    match family {
        Some((parent, quad)) if quad[q] == *block => Ok((parent, quad, q)),
        _ => {
            debug!(index, "ignored swap of block without a live parent");
            Err(Rejection::Detached)
        }
    }
}
