use std::fmt::Debug;

use crate::{Color, Pos, Quad};

/// Handle to a block stored in a [`Tree`](crate::Tree).
///
/// A slot index plus the generation of that slot when the block was inserted.
/// Once the block is removed (a smash drops its old subtree) the slot may be reused,
/// but the generation is bumped so a stale `BlockId` never aliases the new block.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId(u32, u32);
impl BlockId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }
    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
    pub(crate) const fn generation(self) -> u32 {
        self.1
    }
}
impl Debug for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BlockId({}v{})", self.0, self.1)
    }
}

/// either a uniform color or four owned children
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Content {
    Leaf(Color),
    Split(Quad<BlockId>),
}

/// a square region of the board
#[derive(Clone, Debug)]
pub struct BlockNode {
    pub(crate) generation: u32,
    pub(crate) pos: Pos,
    pub(crate) size: i64,
    pub(crate) depth: u8,
    pub(crate) content: Content,
    pub(crate) parent: Option<BlockId>,
    pub(crate) selected: bool,
}
impl BlockNode {
    pub(crate) fn new_leaf(
        generation: u32,
        pos: Pos,
        size: i64,
        depth: u8,
        color: Color,
        parent: Option<BlockId>,
    ) -> Self {
        Self {
            generation,
            pos,
            size,
            depth,
            content: Content::Leaf(color),
            parent,
            selected: false,
        }
    }

    /// top left corner
    pub fn pos(&self) -> Pos {
        self.pos
    }
    pub fn size(&self) -> i64 {
        self.size
    }
    pub fn half_size(&self) -> i64 {
        self.size / 2
    }
    pub fn depth(&self) -> u8 {
        self.depth
    }
    pub fn content(&self) -> &Content {
        &self.content
    }
    /// `None` while subdivided
    pub fn color(&self) -> Option<Color> {
        match self.content {
            Content::Leaf(color) => Some(color),
            Content::Split(_) => None,
        }
    }
    pub fn children(&self) -> Option<&Quad<BlockId>> {
        match &self.content {
            Content::Leaf(_) => None,
            Content::Split(children) => Some(children),
        }
    }
    pub fn is_leaf(&self) -> bool {
        matches!(self.content, Content::Leaf(_))
    }
    pub fn parent(&self) -> Option<BlockId> {
        self.parent
    }
    pub fn is_selected(&self) -> bool {
        self.selected
    }
    /// whether `pos` falls inside this block, edges on the east and south are exclusive
    pub fn contains(&self, pos: Pos) -> bool {
        pos.x >= self.pos.x
            && pos.y >= self.pos.y
            && pos.x < self.pos.x + self.size
            && pos.y < self.pos.y + self.size
    }
}
