//! RGB triples and the colors derived from them

use std::fmt::Display;

use owo_colors::OwoColorize;
use rand::Rng;

use crate::options::Blend;
use crate::Pcg;

/// A color as three 8 bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Sample every channel independently and uniformly
    pub(crate) fn random(rng: &mut Pcg) -> Self {
        Self {
            r: rng.gen(),
            g: rng.gen(),
            b: rng.gen(),
        }
    }

    /// Lighter variant, each channel moved toward 255 by `blend.tint()`
    pub fn tint(self, blend: Blend) -> Self {
        let f = blend.tint();
        self.map(|v| round_channel(v + (255.0 - v) * f))
    }

    /// Darker variant, each channel scaled by `blend.shade()`
    pub fn shade(self, blend: Blend) -> Self {
        let f = blend.shade();
        self.map(|v| round_channel(v * f))
    }

    fn map(self, f: impl Fn(f64) -> u8) -> Self {
        Self {
            r: f(self.r as f64),
            g: f(self.g as f64),
            b: f(self.b as f64),
        }
    }

    /// Perceived brightness, scaled by 1000 to stay in integers
    ///
    /// `299 R + 587 G + 114 B`, so the result is in `0..=255_000`.
    pub fn luminance_milli(self) -> u32 {
        299 * self.r as u32 + 587 * self.g as u32 + 114 * self.b as u32
    }

    /// Foreground that reads best on top of this color
    pub fn on_color(self) -> OnColor {
        if self.luminance_milli() >= 128_000 {
            OnColor::Black
        } else {
            OnColor::White
        }
    }

    /// `#rrggbb`, lowercase
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `rgba(r, g, b, a)`
    ///
    /// The alpha is written as given, even outside `[0, 1]`.
    pub fn to_rgba(self, opacity: f64) -> String {
        format!("rgba({}, {}, {}, {opacity})", self.r, self.g, self.b)
    }
}

// already in 0..=255 for fractions in [0, 1]
fn round_channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for owo_colors::DynColors {
    fn from(c: Rgb) -> Self {
        owo_colors::DynColors::Rgb(c.r, c.g, c.b)
    }
}

/// Text color with the best contrast over a background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OnColor {
    Black,
    White,
}

impl OnColor {
    pub fn as_str(self) -> &'static str {
        match self {
            OnColor::Black => "black",
            OnColor::White => "white",
        }
    }

    pub(crate) fn ansi(self) -> owo_colors::AnsiColors {
        match self {
            OnColor::Black => owo_colors::AnsiColors::Black,
            OnColor::White => owo_colors::AnsiColors::White,
        }
    }
}

impl Display for OnColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.as_str().fmt(f)
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hex = self.to_hex();
        if f.alternate() {
            return f.write_str(&hex);
        }
        let bg = owo_colors::DynColors::from(*self);
        write!(f, "{}", hex.on_color(bg).color(Rgb::on_color(*self).ansi()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0 => 102 ; "black")]
    #[test_case(255 => 255 ; "white")]
    #[test_case(100 => 162 ; "mid")]
    #[test_case(1 => 103 ; "rounds half up")]
    fn tint_channel(v: u8) -> u8 {
        Rgb::new(v, v, v).tint(Blend::default()).r
    }

    #[test_case(0 => 0 ; "black")]
    #[test_case(255 => 102 ; "white")]
    #[test_case(101 => 40 ; "rounds down")]
    #[test_case(104 => 42 ; "rounds up")]
    fn shade_channel(v: u8) -> u8 {
        Rgb::new(v, v, v).shade(Blend::default()).r
    }

    #[test_case(Rgb::new(0, 0, 0) => OnColor::White ; "black bg")]
    #[test_case(Rgb::new(255, 255, 255) => OnColor::Black ; "white bg")]
    #[test_case(Rgb::new(128, 128, 128) => OnColor::Black ; "threshold is inclusive")]
    #[test_case(Rgb::new(127, 128, 128) => OnColor::White ; "just below threshold")]
    #[test_case(Rgb::new(0, 255, 0) => OnColor::Black ; "green is bright")]
    #[test_case(Rgb::new(0, 0, 255) => OnColor::White ; "blue is dark")]
    fn contrast(c: Rgb) -> OnColor {
        c.on_color()
    }

    #[test_case(Rgb::new(0, 0, 0) => "#000000" ; "zero padded")]
    #[test_case(Rgb::new(104, 245, 56) => "#68f538" ; "lowercase")]
    #[test_case(Rgb::new(255, 255, 255) => "#ffffff" ; "max")]
    fn hex(c: Rgb) -> String {
        c.to_hex()
    }

    #[test_case(1.0 => "rgba(159, 112, 193, 1)" ; "opaque")]
    #[test_case(0.8 => "rgba(159, 112, 193, 0.8)" ; "translucent")]
    #[test_case(1.5 => "rgba(159, 112, 193, 1.5)" ; "out of range kept")]
    #[test_case(-0.25 => "rgba(159, 112, 193, -0.25)" ; "negative kept")]
    #[test_case(f64::INFINITY => "rgba(159, 112, 193, inf)" ; "infinity kept")]
    fn rgba(a: f64) -> String {
        Rgb::new(159, 112, 193).to_rgba(a)
    }

    #[test]
    fn zero_blend_is_identity_for_tint() {
        let c = Rgb::new(12, 200, 77);
        let blend = Blend::new(0.0, 1.0).unwrap();
        assert_eq!(c.tint(blend), c);
        assert_eq!(c.shade(blend), c);
    }

    #[test]
    fn alternate_display_is_plain_hex() {
        assert_eq!(format!("{:#}", Rgb::new(1, 2, 3)), "#010203");
    }

    #[test_case(Rgb::new(0, 0, 0) => true ; "dark")]
    #[test_case(Rgb::new(255, 255, 255) => true ; "light")]
    fn colored_display_contains_hex(c: Rgb) -> bool {
        format!("{c}").contains(&c.to_hex())
    }
}
