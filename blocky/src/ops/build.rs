use tracing::{debug, trace_span};

use crate::{BlockId, Color, Config, Quad, Tree};

/// the draws random subdivision needs
///
/// Any `rand::Rng` is one, tests can also script exact sequences.
pub trait RandomSource {
    /// uniform in `0..len`, `len` is never 0
    fn color_index(&mut self, len: usize) -> usize;
    /// uniform in `[0, 1)`
    fn unit(&mut self) -> f64;
}
impl<R: rand::Rng> RandomSource for R {
    fn color_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
    fn unit(&mut self) -> f64 {
        self.random()
    }
}

/// chance that a new generation of children at `depth` is subdivided again
pub fn continue_chance(depth: u8) -> f64 {
    (-0.25 * f64::from(depth)).exp()
}

impl Tree {
    /// replaces whatever is below `id` with four random children,
    /// and maybe (all at once) subdivides those again
    ///
    /// The caller decides whether `id` may be rebuilt.
    /// Panics if `id` is already at max depth, since its children could not exist.
    pub fn build_random<R: RandomSource + ?Sized>(&mut self, id: BlockId, rng: &mut R) {
        let _span = trace_span!("build_random", ?id).entered();
        let dropped = self.walk(id).count() - 1;
        self.make_leaf(id, Color::WHITE);
        self.build_random_below(id, rng);
        let built = self.walk(id).count() - 1;
        debug!(?id, dropped, built, "rebuilt");
    }
    fn build_random_below<R: RandomSource + ?Sized>(&mut self, id: BlockId, rng: &mut R) {
        let palette = self.config().palette();
        let colors = Quad::from_fn(|_| palette.get(rng.color_index(palette.len())));
        let children = self.split(id, colors);

        let child_depth = self.node(id).depth() + 1;
        if child_depth < self.config().max_depth() && rng.unit() < continue_chance(child_depth) {
            for child in children {
                self.build_random_below(child, rng);
            }
        }
    }

    /// A fixed board for demos and tests.
    ///
    /// Default config, the root is split into yellow, olive, blue and red
    /// and the yellow (north west) quadrant is split the same way again.
    pub fn fixed_demo() -> Self {
        let colors = Quad {
            nw: Color::DAFFODIL_DELIGHT,
            ne: Color::OLD_OLIVE,
            sw: Color::PACIFIC_POINT,
            se: Color::REAL_RED,
        };
        let mut tree = Tree::new(Config::default(), Color::WHITE);
        let children = tree.split(tree.root(), colors);
        tree.split(children.nw, colors);
        tree
    }
}
