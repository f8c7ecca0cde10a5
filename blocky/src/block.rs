use std::cell::{Ref, RefCell};
use std::fmt::Debug;
use std::hash::Hash;
use std::iter;
use std::rc::{Rc, Weak};

use either::Either;
use tracing::debug;

use crate::{Color, Pos, Quad, Quadrant, Rect, Rejection};

struct BlockData {
    rect: Rect,
    depth: u8,
    parent: WeakBlock,
    children: Option<Quad<Block>>,
    /// always `None` while `children` is `Some`
    color: Option<Color>,
}

/// A node of the board's quadtree.
///
/// `Block` is a shared handle: clones refer to the same node, and equality is
/// identity. A block owns its four children; the link back to its parent is
/// weak so that dropping a subtree (by swapping it out or replacing the root)
/// frees it.
#[derive(Clone)]
pub struct Block(Rc<RefCell<BlockData>>);

impl Block {
    /// a detached leaf without a color
    pub fn new(rect: Rect, depth: u8) -> Result<Self, Rejection> {
        if !rect.in_bounds() {
            return Err(Rejection::OutOfBounds);
        }
        Ok(Self::new_unchecked(rect, depth, WeakBlock::new(), None))
    }
    /// a leaf covering the whole board
    pub fn root() -> Self {
        Self::new_unchecked(Rect::BOARD, 0, WeakBlock::new(), None)
    }
    pub(crate) fn new_unchecked(
        rect: Rect,
        depth: u8,
        parent: WeakBlock,
        color: Option<Color>,
    ) -> Self {
        Self(Rc::new(RefCell::new(BlockData {
            rect,
            depth,
            parent,
            children: None,
            color,
        })))
    }

    fn data(&self) -> Ref<'_, BlockData> {
        self.0.borrow()
    }

    pub fn depth(&self) -> u8 {
        self.data().depth
    }
    pub fn rect(&self) -> Rect {
        self.data().rect
    }
    pub fn top_left(&self) -> Pos {
        self.rect().nw()
    }
    pub fn bot_right(&self) -> Pos {
        self.rect().se()
    }

    pub fn is_leaf(&self) -> bool {
        self.data().children.is_none()
    }
    /// handles to the four children, if any
    pub fn quad(&self) -> Option<Quad<Block>> {
        self.data().children.clone()
    }
    /// children in canonical order, empty for a leaf
    pub fn children(&self) -> impl Iterator<Item = Block> {
        match self.quad() {
            None => Either::Left(iter::empty()),
            Some(quad) => Either::Right(quad.into_iter()),
        }
    }
    pub fn child(&self, q: Quadrant) -> Option<Block> {
        self.data().children.as_ref().map(|quad| quad[q].clone())
    }

    /// `None` for internal blocks, and for leaves that were never colored
    pub fn color(&self) -> Option<Color> {
        self.data().color
    }
    pub fn set_color(&self, color: Option<Color>) -> Result<(), Rejection> {
        let mut data = self.0.borrow_mut();
        if data.children.is_some() {
            debug!(depth = data.depth, ?color, "ignored color on internal block");
            return Err(Rejection::NotALeaf);
        }
        data.color = color;
        Ok(())
    }

    pub fn parent(&self) -> Option<Block> {
        self.data().parent.strong()
    }
    /// Points the weak parent link at `parent`.
    ///
    /// The parent must sit exactly one level above this block. Since a parent
    /// is internal by definition, its color is cleared.
    /// This does not add `self` to the parent's children.
    pub fn set_parent(&self, parent: &Block) -> Result<(), Rejection> {
        if self.depth().checked_sub(1) != Some(parent.depth()) {
            debug!(
                depth = self.depth(),
                parent_depth = parent.depth(),
                "ignored parent at wrong depth"
            );
            return Err(Rejection::ParentDepth);
        }
        parent.0.borrow_mut().color = None;
        self.0.borrow_mut().parent = parent.weak();
        Ok(())
    }

    /// Replaces all four children at once.
    ///
    /// Each child must sit exactly one level below this block. The children
    /// are re-parented to this block and their geometry is recomputed from
    /// their new slots.
    pub fn set_children(&self, children: Quad<Block>) -> Result<(), Rejection> {
        let depth = self.depth();
        let child_depth = depth.checked_add(1);
        if children.iter().any(|child| Some(child.depth()) != child_depth) {
            debug!(depth, "ignored children at wrong depth");
            return Err(Rejection::ChildDepth);
        }
        self.adopt(children);
        Ok(())
    }

    /// Puts `child` into slot `q`, returning the block that was there.
    ///
    /// Only internal blocks have slots to replace; the incoming block must sit
    /// exactly one level below this block. Geometry of the new child's
    /// subtree is recomputed from its new slot.
    pub fn set_child(&self, q: Quadrant, child: Block) -> Result<Block, Rejection> {
        if self.is_leaf() {
            debug!(depth = self.depth(), ?q, "ignored child on leaf");
            return Err(Rejection::IsALeaf);
        }
        if Some(child.depth()) != self.depth().checked_add(1) {
            debug!(depth = self.depth(), child_depth = child.depth(), "ignored child at wrong depth");
            return Err(Rejection::ChildDepth);
        }
        let rect = self.rect().quadrant(q);
        let old = {
            let mut data = self.0.borrow_mut();
            let quad = data.children.as_mut().ok_or(Rejection::IsALeaf)?;
            std::mem::replace(&mut quad[q], child.clone())
        };
        child.0.borrow_mut().parent = self.weak();
        if old != child {
            old.0.borrow_mut().parent = WeakBlock::new();
        }
        child.update_rect(rect);
        Ok(old)
    }

    /// Recomputes the rects of this block's whole subtree from this block's
    /// rect, top down.
    ///
    /// Geometry belongs to a slot, not to the block that happens to sit in it,
    /// so this has to run whenever children are moved between slots.
    pub fn update_points(&self) {
        let (rect, quad) = {
            let data = self.data();
            (data.rect, data.children.clone())
        };
        if let Some(quad) = quad {
            for (q, child) in Quadrant::iter_all().zip(quad) {
                child.update_rect(rect.quadrant(q));
            }
        }
    }
    fn update_rect(&self, rect: Rect) {
        if let Err(rejection) = self
            .set_top_left(rect.nw())
            .and_then(|()| self.set_bot_right(rect.se()))
        {
            debug!(%rejection, ?rect, "ignored geometry update");
        }
        self.update_points();
    }

    pub(crate) fn set_top_left(&self, pos: Pos) -> Result<(), Rejection> {
        if !pos.in_bounds() {
            return Err(Rejection::OutOfBounds);
        }
        self.0.borrow_mut().rect.set_nw(pos);
        Ok(())
    }
    pub(crate) fn set_bot_right(&self, pos: Pos) -> Result<(), Rejection> {
        if !pos.in_bounds() {
            return Err(Rejection::OutOfBounds);
        }
        self.0.borrow_mut().rect.set_se(pos);
        Ok(())
    }

    /// swaps in a new set of children, used by ops that know the result is
    /// structurally valid
    pub(crate) fn replace_quad(&self, quad: Quad<Block>) {
        let mut data = self.0.borrow_mut();
        data.color = None;
        data.children = Some(quad);
    }
    /// Installs `children` without checking their depth: re-parents them and
    /// lays them out in their slots.
    pub(crate) fn adopt(&self, children: Quad<Block>) {
        for child in children.iter() {
            child.0.borrow_mut().parent = self.weak();
        }
        self.replace_quad(children);
        self.update_points();
    }
}

impl PartialEq for Block {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
impl Eq for Block {}
impl Hash for Block {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::ptr::hash(Rc::as_ptr(&self.0), state);
    }
}
impl Debug for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let data = self.data();
        f.debug_struct("Block")
            .field("ptr", &Rc::as_ptr(&self.0))
            .field("depth", &data.depth)
            .field("nw", &data.rect.nw())
            .field("se", &data.rect.se())
            .field("color", &data.color)
            .field("leaf", &data.children.is_none())
            .finish()
    }
}

/// Non-owning link to a block
#[derive(Clone, Default)]
pub struct WeakBlock(Weak<RefCell<BlockData>>);
impl Block {
    pub fn weak(&self) -> WeakBlock {
        WeakBlock(Rc::downgrade(&self.0))
    }
}
impl WeakBlock {
    pub fn new() -> Self {
        Self(Weak::new())
    }
    pub fn strong(&self) -> Option<Block> {
        self.0.upgrade().map(Block)
    }
}
impl Debug for WeakBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "WeakBlock( {:p} )", self.0.as_ptr())
    }
}
