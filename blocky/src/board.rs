use rand::Rng;
use tracing::{trace, trace_span};

use crate::{Block, BoardError, Color};

/// Settings a board is built from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    /// deepest level blocks can be smashed to
    pub max_depth: u8,
    /// color the perimeter score counts
    pub target: Color,
}
impl BoardConfig {
    pub const MAX_DEPTH: u8 = 6;

    pub fn new(max_depth: u8, target: Color) -> Self {
        Self { max_depth, target }
    }
    pub fn validate(&self) -> Result<(), BoardError> {
        if (1..=Self::MAX_DEPTH).contains(&self.max_depth) {
            Ok(())
        } else {
            Err(BoardError::InvalidMaxDepth(self.max_depth))
        }
    }
}
impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(3, Color::Blue)
    }
}

/// The game board: owns the root of the block tree.
///
/// All structural requests that need positions (swap, lookup) go through the
/// board, everything else is reachable through [`Board::root`].
#[derive(Debug)]
pub struct Board {
    root: Block,
    max_depth: u8,
    target: Color,
}
impl Board {
    pub fn new(max_depth: u8, target: Color) -> Result<Self, BoardError> {
        Self::with_rng(BoardConfig::new(max_depth, target), &mut rand::rng())
    }
    pub fn with_rng(config: BoardConfig, rng: &mut impl Rng) -> Result<Self, BoardError> {
        config.validate()?;
        let mut board = Self {
            root: Block::root(),
            max_depth: config.max_depth,
            target: config.target,
        };
        board.random_init_with_rng(rng);
        Ok(board)
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }
    pub fn target(&self) -> Color {
        self.target
    }
    /// side length of the flattened grid
    pub fn size(&self) -> usize {
        1 << self.max_depth
    }
    pub fn root(&self) -> &Block {
        &self.root
    }
    pub fn set_root(&mut self, root: Block) {
        trace!(depth = root.depth(), "set_root");
        self.root = root;
    }

    pub fn random_init(&mut self) -> Block {
        self.random_init_with_rng(&mut rand::rng())
    }
    /// Rebuilds the tree from a fresh root.
    ///
    /// The root is always smashed. After that, blocks are picked uniformly by
    /// breadth-first index among all blocks so far (internal ones included)
    /// and smashed if they are leaves, until some block reaches the max depth.
    /// Earlier blocks are picked more often than a uniform choice over tree
    /// shapes would.
    pub fn random_init_with_rng(&mut self, rng: &mut impl Rng) -> Block {
        let _span = trace_span!("random_init", max_depth = self.max_depth).entered();

        self.root = Block::root();
        let mut depth_reached = 0;
        let mut block_count = 1;
        if self.root.smash_with_rng(self.max_depth, rng).is_ok() {
            depth_reached = 1;
            block_count += 4;
        }
        while depth_reached < self.max_depth {
            let Some(block) = self.get_block(rng.random_range(0..block_count)) else {
                continue;
            };
            if block.smash_with_rng(self.max_depth, rng).is_ok() {
                block_count += 4;
                depth_reached = depth_reached.max(block.depth() + 1);
            }
        }
        trace!(block_count, "random_init done");
        self.root.clone()
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::Rejection;

    #[test]
    fn config() {
        assert_eq!(BoardConfig::default().validate(), Ok(()));
        assert_eq!(
            BoardConfig::new(0, Color::Red).validate(),
            Err(BoardError::InvalidMaxDepth(0))
        );
        assert_eq!(
            BoardConfig::new(7, Color::Red).validate(),
            Err(BoardError::InvalidMaxDepth(7))
        );
        assert!(Board::new(0, Color::Red).is_err());
    }

    #[test]
    fn init_root_is_internal() {
        let mut board = Board::new(1, Color::Black).expect("valid config");
        assert_eq!(board.root().color(), None);
        assert!(!board.root().is_leaf());
        let root = board.random_init();
        assert_eq!(root.color(), None);
        assert_eq!(&root, board.root());
    }

    #[test]
    fn accessors() {
        let board = Board::new(3, Color::Yellow).expect("valid config");
        assert_eq!(board.max_depth(), 3);
        assert_eq!(board.target(), Color::Yellow);
        assert_eq!(board.size(), 8);
    }

    #[test]
    fn set_root_replaces_tree() {
        let mut board = Board::new(2, Color::Red).expect("valid config");
        let root = Block::root();
        root.smash(1).expect("leaf");
        board.set_root(root.clone());
        assert_eq!(board.root(), &root);
        assert_eq!(board.block_count(), 5);
    }

    proptest! {
        #[test]
        fn init_reaches_max_depth(seed in any::<u64>(), max_depth in 1u8..=4) {
            let mut rng = StdRng::seed_from_u64(seed);
            let board = Board::with_rng(BoardConfig::new(max_depth, Color::Red), &mut rng)
                .expect("valid config");
            let blocks = board.blocks();
            let deepest = blocks.iter().map(Block::depth).max();
            prop_assert_eq!(deepest, Some(max_depth));
            for block in &blocks {
                // all four children or none, color only on leaves
                let count = block.children().count();
                prop_assert!(count == 0 || count == 4);
                prop_assert_eq!(block.color().is_some(), count == 0);
                for child in block.children() {
                    prop_assert_eq!(child.depth(), block.depth() + 1);
                    let parent = child.parent();
                    prop_assert_eq!(parent.as_ref(), Some(block));
                }
            }
        }
    }

    #[test]
    fn smash_through_root_respects_max_depth() {
        let mut rng = StdRng::seed_from_u64(3);
        let board = Board::with_rng(BoardConfig::new(1, Color::Red), &mut rng).expect("valid config");
        for child in board.root().children() {
            assert_eq!(child.smash(board.max_depth()), Err(Rejection::AtMaxDepth));
        }
    }
}
