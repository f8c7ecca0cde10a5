//! subdivides a leaf into four randomly colored children

use rand::Rng;
use tracing::{debug, trace};

use crate::{Block, Quad, Rejection};

impl Block {
    pub fn smash(&self, max_depth: u8) -> Result<(), Rejection> {
        self.smash_with_rng(max_depth, &mut rand::rng())
    }
    /// Splits a leaf above `max_depth` into four leaves, one level deeper,
    /// each colored uniformly at random from `Color::PALETTE`.
    pub fn smash_with_rng(&self, max_depth: u8, rng: &mut impl Rng) -> Result<(), Rejection> {
        if !self.is_leaf() {
            debug!(depth = self.depth(), "ignored smash of internal block");
            return Err(Rejection::NotALeaf);
        }
        let depth = self.depth();
        if depth >= max_depth {
            debug!(depth, max_depth, "ignored smash at max depth");
            return Err(Rejection::AtMaxDepth);
        }
        let rect = self.rect();
        let children = Quad::from_fn(|q| {
            Block::new_unchecked(rect.quadrant(q), depth + 1, self.weak(), Some(rng.random()))
        });
        trace!(depth, ?rect, "smash");
        self.replace_quad(children);
        Ok(())
    }
}
