//! Arena that owns every block of a board

use std::fmt::Debug;

use tracing::trace;

use crate::{BlockId, BlockNode, Color, Config, Content, Pos, Quad, Quadrant};

/// The block tree of one board.
///
/// Blocks live in slots, children are owned through `Content::Split`,
/// parents are plain `BlockId` back links.
#[derive(Clone)]
pub struct Tree {
    nodes: Vec<Option<BlockNode>>,
    // last generation per slot, persists across frees
    generations: Vec<u32>,
    free_list: Vec<usize>,
    root: BlockId,
    config: Config,
}
impl Tree {
    /// a board that is a single leaf of `color`
    pub fn new(config: Config, color: Color) -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            root: BlockId::new(0, 0),
            config,
        };
        let size = tree.config.max_size();
        tree.root = tree.insert(|generation| {
            BlockNode::new_leaf(generation, Pos::ORIGIN, size, 0, color, None)
        });
        tree
    }

    pub fn root(&self) -> BlockId {
        self.root
    }
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// whether `id` refers to a block that is still part of this tree
    pub fn is_alive(&self, id: BlockId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(Option::as_ref)
            .is_some_and(|n| n.generation == id.generation())
    }
    pub fn get(&self, id: BlockId) -> Option<&BlockNode> {
        self.nodes
            .get(id.idx())?
            .as_ref()
            .filter(|n| n.generation == id.generation())
    }
    /// panics if `id` is stale
    pub fn node(&self, id: BlockId) -> &BlockNode {
        self.get(id).expect("dangling BlockId")
    }
    pub(crate) fn node_mut(&mut self, id: BlockId) -> &mut BlockNode {
        self.nodes[id.idx()]
            .as_mut()
            .filter(|n| n.generation == id.generation())
            .expect("dangling BlockId")
    }

    #[allow(clippy::cast_possible_truncation)] // slot count is bounded by 4^MAX_DEPTH
    fn insert(&mut self, make: impl FnOnce(u32) -> BlockNode) -> BlockId {
        if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(make(generation));
            BlockId::new(idx as u32, generation)
        } else {
            let generation = 1;
            self.nodes.push(Some(make(generation)));
            self.generations.push(generation);
            BlockId::new((self.nodes.len() - 1) as u32, generation)
        }
    }
    fn remove(&mut self, id: BlockId) {
        let node = self.nodes[id.idx()].take().expect("dangling BlockId");
        if let Content::Split(children) = node.content {
            for child in children {
                self.remove(child);
            }
        }
        self.free_list.push(id.idx());
    }

    /// drops every descendant of `id` and makes it a leaf of `color`
    pub(crate) fn make_leaf(&mut self, id: BlockId, color: Color) {
        let old = std::mem::replace(&mut self.node_mut(id).content, Content::Leaf(color));
        if let Content::Split(children) = old {
            for child in children {
                self.remove(child);
            }
        }
    }

    /// subdivides the leaf `id` into four leaves of the given colors
    pub(crate) fn split(&mut self, id: BlockId, colors: Quad<Color>) -> Quad<BlockId> {
        let node = self.node(id);
        assert!(node.is_leaf(), "only leaves can be split");
        assert!(
            node.depth < self.config.max_depth(),
            "can not split a block at depth {}",
            node.depth
        );
        assert!(node.size % 2 == 0, "block size {} does not halve", node.size);
        let (pos, half, depth) = (node.pos, node.half_size(), node.depth + 1);
        let children = colors.index_map(|q, color| {
            self.insert(|generation| {
                BlockNode::new_leaf(generation, pos + Pos::in_dir(q, half), half, depth, color, Some(id))
            })
        });
        self.node_mut(id).content = Content::Split(children);
        trace!(?id, depth, "split");
        children
    }

    /// moves the children of `id` to match their slots, recursively
    pub(crate) fn place_children(&mut self, id: BlockId) {
        let node = self.node(id);
        let (pos, half) = (node.pos, node.half_size());
        if let Content::Split(children) = node.content {
            for q in Quadrant::iter_all() {
                let child = children[q];
                self.node_mut(child).pos = pos + Pos::in_dir(q, half);
                self.place_children(child);
            }
        }
    }

    /// pre-order walk of `id` and all its descendants, children in slot order
    pub fn walk(&self, id: BlockId) -> Walk<'_> {
        Walk {
            tree: self,
            stack: vec![id],
        }
    }
    /// every leaf of the board in draw order
    pub fn leaves(&self) -> impl Iterator<Item = &BlockNode> {
        self.walk(self.root)
            .map(|(_, node)| node)
            .filter(|node| node.is_leaf())
    }
    /// number of live blocks
    pub fn len(&self) -> usize {
        self.nodes.len() - self.free_list.len()
    }

    /// panics if any structural invariant of the tree is broken
    pub fn validate(&self) {
        let root = self.node(self.root);
        assert_eq!(root.parent, None, "root has a parent");
        assert_eq!(root.depth, 0, "root depth");
        assert_eq!(root.pos, Pos::ORIGIN, "root position");
        assert_eq!(root.size, self.config.max_size(), "root size");
        self.validate_below(self.root);
        assert_eq!(
            self.walk(self.root).count(),
            self.len(),
            "unreachable blocks in arena"
        );
    }
    fn validate_below(&self, id: BlockId) {
        let node = self.node(id);
        assert!(node.size > 0, "{id:?} has size {}", node.size);
        assert!(
            node.depth <= self.config.max_depth(),
            "{id:?} is deeper than max depth"
        );
        if let Content::Split(children) = &node.content {
            assert!(node.size % 2 == 0, "{id:?} size {} does not halve", node.size);
            for q in Quadrant::iter_all() {
                let child = self.node(children[q]);
                assert_eq!(child.parent, Some(id), "parent link of {:?}", children[q]);
                assert_eq!(child.depth, node.depth + 1, "depth of {:?}", children[q]);
                assert_eq!(child.size, node.half_size(), "size of {:?}", children[q]);
                assert_eq!(
                    child.pos,
                    node.pos + Pos::in_dir(q, node.half_size()),
                    "position of {:?}",
                    children[q]
                );
                self.validate_below(children[q]);
            }
        }
    }
}
impl Debug for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tree")
            .field("root", &self.root)
            .field("blocks", &self.len())
            .field("free_list", &self.free_list.len())
            .field("config", &self.config)
            .finish()
    }
}

pub struct Walk<'t> {
    tree: &'t Tree,
    stack: Vec<BlockId>,
}
impl<'t> Iterator for Walk<'t> {
    type Item = (BlockId, &'t BlockNode);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.node(id);
        if let Content::Split(children) = &node.content {
            self.stack
                .extend([children.se, children.sw, children.ne, children.nw]);
        }
        Some((id, node))
    }
}

#[cfg(test)]
mod test {
    use crate::{Color, Config, Pos, Quad, Tree};

    fn colors() -> Quad<Color> {
        Quad {
            nw: Color::DAFFODIL_DELIGHT,
            ne: Color::OLD_OLIVE,
            sw: Color::PACIFIC_POINT,
            se: Color::REAL_RED,
        }
    }

    #[test]
    fn single_leaf() {
        let tree = Tree::new(Config::default(), Color::WHITE);
        tree.validate();
        assert_eq!(tree.len(), 1);
        let root = tree.node(tree.root());
        assert_eq!(root.color(), Some(Color::WHITE));
        assert_eq!(root.size(), 640);
        assert_eq!(tree.leaves().count(), 1);
    }

    #[test]
    fn split_positions() {
        let mut tree = Tree::new(Config::default(), Color::WHITE);
        let children = tree.split(tree.root(), colors());
        let grandchildren = tree.split(children.se, colors());
        tree.validate();
        assert_eq!(tree.len(), 9);
        assert_eq!(tree.node(tree.root()).color(), None);
        assert_eq!(tree.node(children.ne).pos(), Pos::new(320, 0));
        assert_eq!(tree.node(grandchildren.sw).pos(), Pos::new(320, 480));
        assert_eq!(tree.node(grandchildren.sw).size(), 160);
        assert_eq!(tree.node(grandchildren.sw).depth(), 2);
        assert_eq!(tree.node(grandchildren.sw).parent(), Some(children.se));
        assert_eq!(tree.leaves().count(), 7);
    }

    #[test]
    fn stale_ids() {
        let mut tree = Tree::new(Config::default(), Color::WHITE);
        let children = tree.split(tree.root(), colors());
        tree.make_leaf(tree.root(), Color::REAL_RED);
        tree.validate();
        assert!(!tree.is_alive(children.nw));
        assert!(tree.get(children.nw).is_none());

        // slots are reused but old ids stay dead
        let again = tree.split(tree.root(), colors());
        assert!(again.iter().all(|id| tree.is_alive(*id)));
        assert!(children.iter().all(|id| !tree.is_alive(*id)));
        tree.validate();
    }

    #[test]
    #[should_panic(expected = "can not split")]
    fn split_past_max_depth() {
        let config = Config::new(640, 1, vec![Color::WHITE]).unwrap();
        let mut tree = Tree::new(config, Color::WHITE);
        let children = tree.split(tree.root(), colors());
        tree.split(children.nw, colors());
    }
}
