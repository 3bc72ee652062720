use tracing::trace_span;

use crate::{Axis, BlockId, Content, Tree};

impl Tree {
    /// mirrors the four children of `id` across `axis`
    ///
    /// only the immediate children change slots, their own subtrees keep their order
    /// and are moved along with them. A leaf is left as is.
    pub fn swap(&mut self, id: BlockId, axis: Axis) {
        let _span = trace_span!("swap", ?id, ?axis).entered();
        let node = self.node_mut(id);
        if let Content::Split(children) = node.content {
            node.content = Content::Split(children.swap(axis));
            self.place_children(id);
        }
    }

    /// rotates the children of `id` a quarter turn, then every descendant the same way
    ///
    /// so the whole subtree turns as one picture. A leaf is left as is.
    pub fn rotate(&mut self, id: BlockId, clockwise: bool) {
        let _span = trace_span!("rotate", ?id, clockwise).entered();
        if self.rotate_slots(id, clockwise) {
            self.place_children(id);
        }
    }
    fn rotate_slots(&mut self, id: BlockId, clockwise: bool) -> bool {
        let node = self.node_mut(id);
        match node.content {
            Content::Leaf(_) => false,
            Content::Split(children) => {
                let children = children.rotate(clockwise);
                node.content = Content::Split(children);
                for child in children {
                    self.rotate_slots(child, clockwise);
                }
                true
            }
        }
    }
}
