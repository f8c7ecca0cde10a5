use std::error::Error;
use std::fmt::Display;

/// Why a structural request was ignored.
///
/// Requests that come back with a rejection leave the tree exactly as it was,
/// so callers that don't care are free to drop it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// coordinate outside of `0..=Pos::MAX`
    OutOfBounds,
    /// only leaves carry a color or can be smashed
    NotALeaf,
    /// leaves have no children to rotate or replace
    IsALeaf,
    AtMaxDepth,
    /// a parent must be exactly one level above its child
    ParentDepth,
    /// children must be exactly one level below their parent
    ChildDepth,
    /// the root can't be swapped, nor can a block with itself
    RootOrSame,
    NoSuchBlock,
    DepthMismatch,
    /// the block's parent is no longer alive
    Detached,
}
impl Rejection {
    pub fn reason(self) -> &'static str {
        match self {
            Self::OutOfBounds => "coordinate is outside of the board",
            Self::NotALeaf => "block has children",
            Self::IsALeaf => "block has no children",
            Self::AtMaxDepth => "block is already at the max depth",
            Self::ParentDepth => "parent must be one level above its child",
            Self::ChildDepth => "children must be one level below their parent",
            Self::RootOrSame => "can't swap the root or a block with itself",
            Self::NoSuchBlock => "no block at that position",
            Self::DepthMismatch => "swapped blocks must be at the same depth",
            Self::Detached => "block has no parent",
        }
    }
}
impl Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.reason())
    }
}
impl Error for Rejection {}

/// Invalid board configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardError {
    InvalidMaxDepth(u8),
}
impl Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMaxDepth(depth) => write!(
                f,
                "max depth must be between 1 and {}, got {depth}",
                crate::BoardConfig::MAX_DEPTH
            ),
        }
    }
}
impl Error for BoardError {}
