use itertools::Itertools;

use crate::{BlockId, Color, Config, Content, Quad, Quadrant, Tree};

// macros make formatting nicer

/// this has very little error handling, see `Tree::from_test_format`
#[macro_export]
macro_rules! test_tree {
    {$s:literal} => {
        $crate::Tree::from_test_format($crate::Config::default(), $s)
    };
    {$config:expr, $s:literal} => {
        $crate::Tree::from_test_format($config, $s)
    };
}

impl Tree {
    /// expects a leaf color or `[nw ne sw se]` with each child in the same format
    ///
    /// leaf colors are `y` `o` `r` `b` `w` `k` or `#rrggbb`, whitespace is ignored
    pub fn from_test_format(config: Config, s: &str) -> Tree {
        let spaced = s.replace('[', " [ ").replace(']', " ] ");
        let mut tokens = spaced.split_ascii_whitespace();
        let mut tree = Tree::new(config, Color::WHITE);
        let root = tree.root();
        parse_into(&mut tree, root, &mut tokens);
        assert_eq!(tokens.next(), None, "trailing input");
        tree
    }

    /// writes the tree in the format `from_test_format` reads
    ///
    /// A split block whose children are all leaves goes on one line,
    /// other split blocks put each child on its own indented line.
    pub fn to_test_format(&self) -> String {
        let mut out = String::new();
        self.write_block(self.root(), 0, &mut out);
        out
    }
    fn write_block(&self, id: BlockId, indent: usize, out: &mut String) {
        out.extend(std::iter::repeat(' ').take(indent));
        match self.node(id).content() {
            Content::Leaf(color) => out.push_str(&color_name(*color)),
            Content::Split(children) => {
                let leaves: Option<Vec<Color>> =
                    children.iter().map(|c| self.node(*c).color()).collect();
                if let Some(leaves) = leaves {
                    out.push('[');
                    out.push_str(&leaves.into_iter().map(color_name).join(" "));
                    out.push(']');
                } else {
                    out.push_str("[\n");
                    for child in children.iter() {
                        self.write_block(*child, indent + 2, out);
                    }
                    out.extend(std::iter::repeat(' ').take(indent));
                    out.push(']');
                }
            }
        }
        out.push('\n');
    }
}

fn parse_into<'s>(tree: &mut Tree, id: BlockId, tokens: &mut impl Iterator<Item = &'s str>) {
    match tokens.next().expect("block") {
        "[" => {
            let children = tree.split(id, Quad::from_fn(|_| Color::WHITE));
            for q in Quadrant::iter_all() {
                parse_into(tree, children[q], tokens);
            }
            assert_eq!(tokens.next(), Some("]"), "need exactly 4 children");
        }
        name => tree.node_mut(id).content = Content::Leaf(parse_color(name)),
    }
}

fn parse_color(name: &str) -> Color {
    match name {
        "y" => Color::DAFFODIL_DELIGHT,
        "o" => Color::OLD_OLIVE,
        "r" => Color::REAL_RED,
        "b" => Color::PACIFIC_POINT,
        "w" => Color::WHITE,
        "k" => Color::BLACK,
        _ => {
            let hex = name.strip_prefix('#').expect("color name or #rrggbb");
            assert_eq!(hex.len(), 6, "invalid color {name}");
            Color::from_rgb_u32(u32::from_str_radix(hex, 16).expect("hex color"))
        }
    }
}
fn color_name(color: Color) -> String {
    match color {
        Color::DAFFODIL_DELIGHT => "y".to_owned(),
        Color::OLD_OLIVE => "o".to_owned(),
        Color::REAL_RED => "r".to_owned(),
        Color::PACIFIC_POINT => "b".to_owned(),
        Color::WHITE => "w".to_owned(),
        Color::BLACK => "k".to_owned(),
        _ => format!("#{:06x}", color.to_rgb_u32()),
    }
}
