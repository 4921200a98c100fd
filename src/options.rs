//! Generation options

use std::fmt::Display;
use std::str::FromStr;

use crate::Error;

/// How a color is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    /// `#rrggbb`
    #[default]
    Hex,
    /// `rgba(r, g, b, a)`
    Rgba,
}

impl Format {
    /// Parse a format name, falling back to [`Format::Hex`] for anything unknown
    pub fn from_name_lossy(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hex" => Ok(Format::Hex),
            "rgba" => Ok(Format::Rgba),
            _ => Err(Error::Format(format!("unknown format: {s:?}"))),
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Hex => f.write_str("hex"),
            Format::Rgba => f.write_str("rgba"),
        }
    }
}

/// Which variants of the sampled color are returned, and in which order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorType {
    /// The sampled color
    #[default]
    Solo,
    Tint,
    Shade,
    /// `[solo, tint]`
    SoloTint,
    /// `[solo, shade]`
    SoloShade,
    /// `[tint, shade]`
    TintShade,
    /// `[solo, tint, shade]`
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Variant {
    Solo,
    Tint,
    Shade,
}

impl ColorType {
    /// Parse a type name, falling back to [`ColorType::Solo`] for anything unknown
    pub fn from_name_lossy(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// Whether the result is a list instead of a single color
    pub fn is_group(self) -> bool {
        self.variants().len() > 1
    }

    pub(crate) fn variants(self) -> &'static [Variant] {
        use Variant::*;
        match self {
            ColorType::Solo => &[Solo],
            ColorType::Tint => &[Tint],
            ColorType::Shade => &[Shade],
            ColorType::SoloTint => &[Solo, Tint],
            ColorType::SoloShade => &[Solo, Shade],
            ColorType::TintShade => &[Tint, Shade],
            ColorType::All => &[Solo, Tint, Shade],
        }
    }
}

impl FromStr for ColorType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = match s {
            "solo" => ColorType::Solo,
            "tint" => ColorType::Tint,
            "shade" => ColorType::Shade,
            "soloTint" => ColorType::SoloTint,
            "soloShade" => ColorType::SoloShade,
            "tintShade" => ColorType::TintShade,
            "all" | "soloTintShade" => ColorType::All,
            _ => return Err(Error::ColorType(format!("unknown color type: {s:?}"))),
        };
        Ok(t)
    }
}

impl Display for ColorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ColorType::Solo => "solo",
            ColorType::Tint => "tint",
            ColorType::Shade => "shade",
            ColorType::SoloTint => "soloTint",
            ColorType::SoloShade => "soloShade",
            ColorType::TintShade => "tintShade",
            ColorType::All => "all",
        };
        f.write_str(s)
    }
}

/// Blend fractions used to derive the tint and the shade
///
/// Both are in `[0, 1]`. A tint moves every channel that fraction of the way
/// to 255, a shade multiplies every channel by its fraction.
///
/// ```
/// use tintshade::Blend;
/// let blend = Blend::default();
/// assert_eq!(blend.tint(), 0.4);
/// assert_eq!(blend.shade(), 0.4);
/// assert!(Blend::new(1.2, 0.4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blend {
    tint: f64,
    shade: f64,
}

impl Blend {
    pub const DEFAULT_FRACTION: f64 = 0.4;

    pub fn new(tint: f64, shade: f64) -> Result<Self, Error> {
        check_fraction(tint, "tint")?;
        check_fraction(shade, "shade")?;
        Ok(Self { tint, shade })
    }

    pub fn tint(&self) -> f64 {
        self.tint
    }

    pub fn shade(&self) -> f64 {
        self.shade
    }
}

fn check_fraction(v: f64, name: &str) -> Result<(), Error> {
    if (0.0..=1.0).contains(&v) {
        Ok(())
    } else {
        Err(Error::Blend(format!("{name} fraction must be in [0, 1], got {v}")))
    }
}

impl Default for Blend {
    fn default() -> Self {
        Self {
            tint: Self::DEFAULT_FRACTION,
            shade: Self::DEFAULT_FRACTION,
        }
    }
}

/// What to generate
///
/// ```
/// use tintshade::{ColorType, Format, Options};
/// let opts = Options::default();
/// assert_eq!(opts.format, Format::Hex);
/// assert_eq!(opts.color_type, ColorType::Solo);
/// assert_eq!(opts.opacity, 1.0);
///
/// let opts = Options::new().format(Format::Rgba).opacity(0.8);
/// assert_eq!(opts.opacity, 0.8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    pub format: Format,
    pub color_type: ColorType,
    /// Alpha for [`Format::Rgba`], ignored otherwise
    ///
    /// It is not validated.
    pub opacity: f64,
    /// See [`Blend`]
    pub blend: Blend,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            format: Format::Hex,
            color_type: ColorType::Solo,
            opacity: 1.0,
            blend: Blend::default(),
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn color_type(mut self, color_type: ColorType) -> Self {
        self.color_type = color_type;
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn blend(mut self, blend: Blend) -> Self {
        self.blend = blend;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("solo" => ColorType::Solo)]
    #[test_case("tint" => ColorType::Tint)]
    #[test_case("shade" => ColorType::Shade)]
    #[test_case("soloTint" => ColorType::SoloTint)]
    #[test_case("soloShade" => ColorType::SoloShade)]
    #[test_case("tintShade" => ColorType::TintShade)]
    #[test_case("all" => ColorType::All)]
    #[test_case("soloTintShade" => ColorType::All ; "all alias")]
    fn parse_type(s: &str) -> ColorType {
        s.parse().expect("failed to parse")
    }

    #[test_case("" ; "empty")]
    #[test_case("Solo" ; "case sensitive")]
    #[test_case("rainbow" ; "unknown")]
    fn lossy_type_falls_back_to_solo(s: &str) {
        assert!(s.parse::<ColorType>().is_err());
        assert_eq!(ColorType::from_name_lossy(s), ColorType::Solo);
    }

    #[test_case("hex" => Format::Hex)]
    #[test_case("rgba" => Format::Rgba)]
    #[test_case("hsl" => Format::Hex ; "unknown")]
    #[test_case("RGBA" => Format::Hex ; "case sensitive")]
    fn lossy_format(s: &str) -> Format {
        Format::from_name_lossy(s)
    }

    #[test]
    fn strict_format_error() {
        let err = "hsl".parse::<Format>().unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }

    #[test]
    fn error_messages_have_one_prefix() {
        let err = "bogus".parse::<ColorType>().unwrap_err();
        assert_eq!(err.to_string(), r#"unknown color type: "bogus""#);
        let err = "hsl".parse::<Format>().unwrap_err();
        assert_eq!(err.to_string(), r#"unknown format: "hsl""#);
        let err = Blend::new(2.0, 0.4).unwrap_err();
        assert_eq!(err.to_string(), "tint fraction must be in [0, 1], got 2");
    }

    #[test]
    fn display_round_trips_names() {
        for t in [
            ColorType::Solo,
            ColorType::Tint,
            ColorType::Shade,
            ColorType::SoloTint,
            ColorType::SoloShade,
            ColorType::TintShade,
            ColorType::All,
        ] {
            assert_eq!(t.to_string().parse::<ColorType>().unwrap(), t);
        }
    }

    #[test_case(ColorType::Solo => false)]
    #[test_case(ColorType::Shade => false)]
    #[test_case(ColorType::TintShade => true)]
    #[test_case(ColorType::All => true)]
    fn group(t: ColorType) -> bool {
        t.is_group()
    }

    #[test_case(-0.1, 0.4 ; "negative tint")]
    #[test_case(0.4, 1.01 ; "shade too big")]
    #[test_case(f64::NAN, 0.4 ; "nan")]
    fn bad_blend(tint: f64, shade: f64) {
        assert!(matches!(Blend::new(tint, shade), Err(Error::Blend(_))));
    }

    #[test]
    fn blend_bounds_are_inclusive() {
        let b = Blend::new(0.0, 1.0).unwrap();
        assert_eq!((b.tint(), b.shade()), (0.0, 1.0));
    }
}
