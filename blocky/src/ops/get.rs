//! breadth-first positional lookup

use std::collections::VecDeque;

use crate::{Block, Board};

impl Board {
    /// Every block in breadth-first order: the root, then each level in turn,
    /// siblings in canonical order.
    pub fn blocks(&self) -> Vec<Block> {
        let mut out = Vec::new();
        let mut queue = VecDeque::from([self.root().clone()]);
        while let Some(block) = queue.pop_front() {
            queue.extend(block.children());
            out.push(block);
        }
        out
    }
    pub fn block_count(&self) -> usize {
        self.blocks().len()
    }
    /// The block at breadth-first index `pos`; index 0 is the root.
    pub fn get_block(&self, pos: usize) -> Option<Block> {
        let mut queue = VecDeque::from([self.root().clone()]);
        let mut index = 0;
        while let Some(block) = queue.pop_front() {
            if index == pos {
                return Some(block);
            }
            queue.extend(block.children());
            index += 1;
        }
        None
    }
}

#[cfg(test)]
mod test {
    use crate::{Block, Board, Color, Quadrant};

    fn board() -> Board {
        let root = Block::root();
        root.smash(2).expect("leaf");
        root.child(Quadrant::SE).expect("internal").smash(2).expect("leaf");
        let mut board = Board::new(2, Color::Blue).expect("valid config");
        board.set_root(root);
        board
    }

    #[test]
    fn root_is_first() {
        let board = board();
        assert_eq!(board.get_block(0).as_ref(), Some(board.root()));
    }

    #[test]
    fn breadth_first_order() {
        let board = board();
        let root = board.root();
        let se = root.child(Quadrant::SE).expect("internal");
        let mut expected = vec![root.clone()];
        expected.extend(root.children());
        expected.extend(se.children());

        assert_eq!(board.blocks(), expected);
        for (pos, block) in expected.iter().enumerate() {
            assert_eq!(board.get_block(pos).as_ref(), Some(block), "pos={pos}");
        }
    }

    #[test]
    fn out_of_range() {
        let board = board();
        assert_eq!(board.block_count(), 9);
        assert_eq!(board.get_block(9), None);
        assert_eq!(board.get_block(usize::MAX), None);
    }

    #[test]
    fn slots_match_enumeration() {
        let board = board();
        for (pos, block) in board.blocks().into_iter().enumerate().skip(1) {
            let q = Quadrant::of_bfs_index(pos).expect("not the root");
            let parent = block.parent().expect("attached");
            assert_eq!(parent.child(q), Some(block), "pos={pos}");
        }
    }
}
