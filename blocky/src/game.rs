use tracing::{debug, trace_span};

use crate::{Axis, BlockId, BlockNode, Color, Config, Pos, RandomSource, Tree};

/// One game session: the board and the selected block.
///
/// Every command is a no-op when its precondition does not hold,
/// the host can send any input without checking first.
#[derive(Clone, Debug)]
pub struct GameState {
    tree: Tree,
    selected: Option<BlockId>,
}
impl GameState {
    pub fn new(tree: Tree) -> Self {
        tree.validate();
        assert!(
            tree.walk(tree.root()).all(|(_, node)| !node.is_selected()),
            "new game starts without a selection"
        );
        Self {
            tree,
            selected: None,
        }
    }
    /// a random board, the root is always subdivided
    pub fn new_random<R: RandomSource + ?Sized>(config: Config, rng: &mut R) -> Self {
        let mut tree = Tree::new(config, Color::WHITE);
        if tree.config().max_depth() > 0 {
            let root = tree.root();
            tree.build_random(root, rng);
        }
        Self::new(tree)
    }
    pub fn new_demo() -> Self {
        Self::new(Tree::fixed_demo())
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }
    pub fn root(&self) -> &BlockNode {
        self.tree.node(self.tree.root())
    }
    pub fn selected_id(&self) -> Option<BlockId> {
        self.selected.filter(|id| self.tree.is_alive(*id))
    }
    pub fn selected(&self) -> Option<&BlockNode> {
        self.selected.and_then(|id| self.tree.get(id))
    }

    /// selects the leaf under board position `(x, y)`
    ///
    /// keeps the old selection if the point is off the board or on a midline
    pub fn select_at(&mut self, x: i64, y: i64) {
        let _span = trace_span!("select_at", x, y).entered();
        match self.tree.locate(Pos::new(x, y)) {
            Some(id) => self.select(id),
            None => debug!("no block at point"),
        }
        self.debug_validate();
    }
    /// moves the selection to the parent of the selected block
    pub fn select_parent(&mut self) {
        let _span = trace_span!("select_parent").entered();
        match self.selected().map(BlockNode::parent) {
            Some(Some(parent)) => self.select(parent),
            Some(None) => debug!("root has no parent"),
            None => debug!("nothing selected"),
        }
        self.debug_validate();
    }
    fn select(&mut self, id: BlockId) {
        if let Some(old) = self.selected_id() {
            self.tree.node_mut(old).selected = false;
        }
        self.tree.node_mut(id).selected = true;
        self.selected = Some(id);
        let node = self.tree.node(id);
        debug!(?id, depth = node.depth(), size = node.size(), "selected");
    }

    pub fn apply_swap(&mut self, axis: Axis) {
        if let Some(id) = self.selected_for("swap") {
            self.tree.swap(id, axis);
            self.debug_validate();
        }
    }
    pub fn apply_rotate(&mut self, clockwise: bool) {
        if let Some(id) = self.selected_for("rotate") {
            self.tree.rotate(id, clockwise);
            self.debug_validate();
        }
    }
    /// regenerates everything below the selected block
    ///
    /// never the root, and never a block at max depth
    pub fn apply_smash<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        let Some(id) = self.selected_for("smash") else {
            return;
        };
        let depth = self.tree.node(id).depth();
        if depth == 0 || depth >= self.tree.config().max_depth() {
            debug!(?id, depth, "smash ignored");
            return;
        }
        self.tree.build_random(id, rng);
        self.debug_validate();
    }

    /// drops a selection that no longer points into the tree
    fn selected_for(&mut self, command: &'static str) -> Option<BlockId> {
        let id = self.selected_id();
        if id.is_none() {
            self.selected = None;
            debug!(command, "nothing selected");
        }
        id
    }

    /// panics if the tree or the selection is inconsistent
    pub fn validate(&self) {
        self.tree.validate();
        let flagged: Vec<BlockId> = self
            .tree
            .walk(self.tree.root())
            .filter(|(_, node)| node.is_selected())
            .map(|(id, _)| id)
            .collect();
        match self.selected_id() {
            Some(id) => assert_eq!(flagged, [id], "selection flag"),
            None => assert!(flagged.is_empty(), "selection flag without selection"),
        }
    }
    fn debug_validate(&self) {
        if cfg!(debug_assertions) {
            self.validate();
        }
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use crate::{test_tree, Axis, Color, Config, GameState, Pos, Tree};

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn starts_unselected() {
        let game = GameState::new_demo();
        assert!(game.selected().is_none());
        assert_eq!(game.root().size(), 640);
        game.validate();
    }

    #[test]
    fn select_at_demo() {
        let mut game = GameState::new_demo();
        game.select_at(10, 10);
        let selected = game.selected().unwrap();
        assert_eq!((selected.pos(), selected.size()), (Pos::new(0, 0), 160));

        game.select_at(500, 500);
        let selected = game.selected().unwrap();
        assert_eq!((selected.pos(), selected.size()), (Pos::new(320, 320), 320));
        assert_eq!(selected.color(), Some(Color::REAL_RED));

        game.select_at(170, 10);
        let selected = game.selected().unwrap();
        assert_eq!((selected.pos(), selected.size()), (Pos::new(160, 0), 160));
        assert_eq!(selected.color(), Some(Color::OLD_OLIVE));
        game.validate();
    }

    #[test]
    fn select_misses_keep_selection() {
        let mut game = GameState::new_demo();
        game.select_at(320, 10);
        assert!(game.selected().is_none());

        game.select_at(500, 500);
        let before = game.selected_id();
        game.select_at(700, 10);
        game.select_at(-5, 10);
        game.select_at(320, 320);
        assert_eq!(game.selected_id(), before);
        game.validate();
    }

    #[test]
    fn select_parent() {
        let mut game = GameState::new_demo();
        game.select_parent();
        assert!(game.selected().is_none());

        game.select_at(10, 10);
        let leaf = game.selected_id().unwrap();
        game.select_parent();
        let parent = game.selected_id().unwrap();
        assert_eq!(game.tree().node(leaf).parent(), Some(parent));
        assert!(!game.tree().node(leaf).is_selected());
        assert!(game.tree().node(parent).is_selected());
        assert_eq!(game.selected().unwrap().size(), 320);

        game.select_parent();
        assert_eq!(game.selected_id(), Some(game.tree().root()));
        game.select_parent();
        assert_eq!(game.selected_id(), Some(game.tree().root()));
        assert!(game.root().is_selected());
        game.validate();
    }

    #[test]
    fn commands_without_selection() {
        let mut game = GameState::new_demo();
        let before = game.tree().to_test_format();
        game.apply_swap(Axis::Horizontal);
        game.apply_rotate(true);
        game.apply_smash(&mut rng());
        assert_eq!(game.tree().to_test_format(), before);
    }

    #[test]
    fn swap_and_rotate_selected() {
        let mut game = GameState::new_demo();
        game.select_at(10, 10);
        game.select_parent();
        game.apply_swap(Axis::Vertical);
        assert_eq!(
            game.tree().to_test_format().lines().nth(1),
            Some("  [b r y o]")
        );
        // selection follows the block, not the position
        assert_eq!(game.selected().unwrap().pos(), Pos::new(0, 0));
        game.apply_rotate(false);
        assert_eq!(
            game.tree().to_test_format().lines().nth(1),
            Some("  [r o b y]")
        );
        game.validate();

        // on a leaf nothing happens
        game.select_at(500, 500);
        let before = game.tree().to_test_format();
        game.apply_swap(Axis::Horizontal);
        game.apply_rotate(true);
        assert_eq!(game.tree().to_test_format(), before);
    }

    #[test]
    fn smash_guards() {
        let mut game = GameState::new_demo();
        game.select_at(10, 10);
        game.select_parent();
        game.select_parent();
        let before = game.tree().to_test_format();
        game.apply_smash(&mut rng());
        assert_eq!(game.tree().to_test_format(), before, "root is never smashed");

        let config = Config::new(640, 2, vec![Color::REAL_RED]).unwrap();
        let mut game = GameState::new(test_tree! {config, "[[y o b r] o b r]"});
        game.select_at(10, 10);
        assert_eq!(game.selected().unwrap().depth(), 2);
        let before = game.tree().to_test_format();
        game.apply_smash(&mut rng());
        assert_eq!(game.tree().to_test_format(), before, "max depth is never smashed");
    }

    #[test]
    fn smash_keeps_block() {
        let config = Config::new(640, 2, vec![Color::REAL_RED]).unwrap();
        let mut game = GameState::new(test_tree! {config, "[[y o b r] o b r]"});
        game.select_at(500, 500);
        game.apply_smash(&mut rng());
        let selected = game.selected().unwrap();
        assert!(selected.is_selected());
        assert_eq!((selected.pos(), selected.size(), selected.depth()), (Pos::new(320, 320), 320, 1));
        // with a single color and max depth 2 the outcome is fixed
        assert_eq!(game.tree().to_test_format().lines().nth(4), Some("  [r r r r]"));
        game.validate();

        // smashing an already split block drops its old children
        game.select_at(10, 10);
        game.select_parent();
        let old = *game.selected().unwrap().children().unwrap();
        game.apply_smash(&mut rng());
        assert!(old.iter().all(|id| !game.tree().is_alive(*id)));
        assert_eq!(game.tree().to_test_format().lines().nth(1), Some("  [r r r r]"));
        game.validate();
    }

    #[test]
    fn random_board() {
        let game = GameState::new_random(Config::default(), &mut rng());
        assert!(!game.root().is_leaf());
        assert!(game.selected().is_none());
        game.validate();

        let again = GameState::new_random(Config::default(), &mut rng());
        assert_eq!(game.tree().to_test_format(), again.tree().to_test_format());

        let flat = Config::new(640, 0, vec![Color::REAL_RED]).unwrap();
        let game = GameState::new_random(flat, &mut rng());
        assert!(game.root().is_leaf());
        game.validate();
    }

    #[derive(Clone, Debug)]
    enum Command {
        SelectAt(i64, i64),
        SelectParent,
        Swap(Axis),
        Rotate(bool),
        Smash,
    }
    fn command() -> impl Strategy<Value = Command> {
        prop_oneof![
            (-10..650_i64, -10..650_i64).prop_map(|(x, y)| Command::SelectAt(x, y)),
            Just(Command::SelectParent),
            prop_oneof![Just(Axis::Horizontal), Just(Axis::Vertical)].prop_map(Command::Swap),
            any::<bool>().prop_map(Command::Rotate),
            Just(Command::Smash),
        ]
    }

    proptest! {
        #[test]
        fn commands_keep_invariants(seed in any::<u64>(), commands in prop::collection::vec(command(), 1..64)) {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut game = GameState::new_random(Config::default(), &mut rng);
            for command in commands {
                match command {
                    Command::SelectAt(x, y) => game.select_at(x, y),
                    Command::SelectParent => game.select_parent(),
                    Command::Swap(axis) => game.apply_swap(axis),
                    Command::Rotate(clockwise) => game.apply_rotate(clockwise),
                    Command::Smash => game.apply_smash(&mut rng),
                }
                game.validate();
                if let Some(selected) = game.selected() {
                    prop_assert!(selected.is_selected());
                    prop_assert!(selected.depth() <= game.tree().config().max_depth());
                }
            }
        }

        #[test]
        fn rotate_four_times_is_identity(seed in any::<u64>(), x in 0..640_i64, y in 0..640_i64) {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut game = GameState::new_random(Config::default(), &mut rng);
            game.select_at(x, y);
            game.select_parent();
            let before = game.tree().to_test_format();
            for _ in 0..4 {
                game.apply_rotate(true);
            }
            prop_assert_eq!(game.tree().to_test_format(), before.clone());
            game.apply_rotate(false);
            game.apply_rotate(true);
            prop_assert_eq!(game.tree().to_test_format(), before);
        }

        #[test]
        fn swap_twice_is_identity(seed in any::<u64>(), horizontal in any::<bool>()) {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut game = GameState::new_random(Config::default(), &mut rng);
            let axis = if horizontal { Axis::Horizontal } else { Axis::Vertical };
            game.select_at(1, 1);
            game.select_parent();
            let before = game.tree().to_test_format();
            game.apply_swap(axis);
            game.apply_swap(axis);
            prop_assert_eq!(game.tree().to_test_format(), before);
        }
    }

    #[test]
    fn fixed_tree_locator() {
        let tree = Tree::fixed_demo();
        let mut game = GameState::new(tree);
        game.select_at(170, 10);
        let id = game.selected_id().unwrap();
        assert_eq!(game.tree().locate(Pos::new(170, 10)), Some(id));
    }
}
