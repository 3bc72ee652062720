use std::fmt::Debug;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
/// An opaque rgb color of a leaf block
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}
impl Color {
    pub const DAFFODIL_DELIGHT: Self = Self::rgb(255, 211, 92);
    pub const OLD_OLIVE: Self = Self::rgb(138, 151, 71);
    pub const REAL_RED: Self = Self::rgb(199, 44, 58);
    pub const PACIFIC_POINT: Self = Self::rgb(1, 128, 181);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// border of the selected block
    pub const TEMPTING_TURQUOISE: Self = Self::rgb(75, 196, 213);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
    /// packs as `0xrrggbb`
    pub fn to_rgb_u32(self) -> u32 {
        u32::from(self.r) << 16 | u32::from(self.g) << 8 | u32::from(self.b)
    }
    pub fn from_rgb_u32(rgb: u32) -> Self {
        let [_, r, g, b] = rgb.to_be_bytes();
        Self { r, g, b }
    }
}
impl Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self { r, g, b } = self;
        write!(f, "Color(#{r:02x}{g:02x}{b:02x})")
    }
}

/// the finite set of colors leaves are drawn from
///
/// never empty, see `Palette::new`
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Palette {
    colors: Vec<Color>,
}
impl Palette {
    pub fn new(colors: Vec<Color>) -> Option<Self> {
        if colors.is_empty() {
            None
        } else {
            Some(Self { colors })
        }
    }
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
    pub fn len(&self) -> usize {
        self.colors.len()
    }
    /// panics if `index >= self.len()`
    pub fn get(&self, index: usize) -> Color {
        self.colors[index]
    }
    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }
}
impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: vec![
                Color::DAFFODIL_DELIGHT,
                Color::OLD_OLIVE,
                Color::REAL_RED,
                Color::PACIFIC_POINT,
            ],
        }
    }
}
