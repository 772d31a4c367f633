/// An opaque-by-default RGBA colour with 8 bits per channel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[must_use]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_sets_full_alpha() {
        let colour = Colour::opaque(1, 2, 3);

        assert_eq!(colour, Colour { r: 1, g: 2, b: 3, a: 255 });
    }

    #[test]
    fn test_to_rgba_channel_order() {
        assert_eq!(Colour::opaque(0, 54, 76).to_rgba(), [0, 54, 76, 255]);
    }
}
