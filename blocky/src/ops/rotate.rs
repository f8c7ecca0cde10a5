use tracing::{debug, trace};

use crate::{Block, Rejection};

impl Block {
    /// Moves every child one slot clockwise.
    ///
    /// Subtrees travel whole, with their structure and colors, but their rects
    /// are recomputed from the slots they land in.
    pub fn rotate(&self) -> Result<(), Rejection> {
        let Some(quad) = self.quad() else {
            debug!(depth = self.depth(), "ignored rotate of leaf");
            return Err(Rejection::IsALeaf);
        };
        trace!(depth = self.depth(), "rotate");
        self.replace_quad(quad.rotate_cw());
        self.update_points();
        Ok(())
    }
}
