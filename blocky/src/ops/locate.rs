use tracing::trace;

use crate::{BlockId, Content, Pos, Quadrant, Tree};

impl Tree {
    /// the leaf under `pos`
    ///
    /// `None` if `pos` is off the board, or lies exactly on the midline of a block it descends through.
    pub fn locate(&self, pos: Pos) -> Option<BlockId> {
        let root = self.node(self.root());
        if !root.contains(pos) {
            return None;
        }
        self.locate_in(self.root(), pos.y, pos.x)
    }
    /// `row` and `column` are relative to the top left corner of `id`
    fn locate_in(&self, id: BlockId, row: i64, column: i64) -> Option<BlockId> {
        let node = self.node(id);
        match node.content() {
            Content::Leaf(_) => Some(id),
            Content::Split(children) => {
                let half = node.half_size();
                let Some(q) = Quadrant::from_local(row, column, half) else {
                    trace!(?id, row, column, "on midline");
                    return None;
                };
                let row = if q.is_north() { row } else { row - half };
                let column = if q.is_west() { column } else { column - half };
                self.locate_in(children[q], row, column)
            }
        }
    }

    /// `id` and its ancestors up to the root
    pub fn path_to_root(&self, id: BlockId) -> Vec<BlockId> {
        std::iter::successors(Some(id), |id| self.node(*id).parent()).collect()
    }
}
