//! Display colors exposed by rules for the external renderer.
//!
//! The core owns the state→color *mapping* (each rule declares its
//! palette) but none of the rendering itself; the renderer consumes
//! these values however it likes.

/// An 8-bit RGB triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// White.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    /// Black.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// Grey.
    pub const GREY: Rgb = Rgb::new(128, 128, 128);
    /// Yellow.
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    /// Green.
    pub const GREEN: Rgb = Rgb::new(0, 128, 0);
    /// Red.
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    /// Blue.
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    /// Aquamarine.
    pub const AQUAMARINE: Rgb = Rgb::new(127, 255, 212);

    /// Construct from channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_constants_round_trip() {
        assert_eq!(Rgb::RED, Rgb::new(255, 0, 0));
        assert_ne!(Rgb::GREEN, Rgb::BLUE);
    }
}
