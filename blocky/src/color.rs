use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

/// Color of a leaf block
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    White,
    Gray,
    Black,
    Cyan,
}
impl Color {
    /// colors handed out to freshly smashed blocks
    pub const PALETTE: [Color; 4] = [Self::Red, Self::Green, Self::Blue, Self::Yellow];

    /// one letter name used by the test format
    pub fn to_char(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Yellow => 'Y',
            Self::White => 'W',
            Self::Gray => 'A',
            Self::Black => 'K',
            Self::Cyan => 'C',
        }
    }
    pub fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'R' => Self::Red,
            'G' => Self::Green,
            'B' => Self::Blue,
            'Y' => Self::Yellow,
            'W' => Self::White,
            'A' => Self::Gray,
            'K' => Self::Black,
            'C' => Self::Cyan,
            _ => return None,
        })
    }
}

/// uniform over `Color::PALETTE`
impl Distribution<Color> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        Color::PALETTE[rng.random_range(0..Color::PALETTE.len())]
    }
}
