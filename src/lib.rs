//! Random colors with their tint, shade and readable foreground
//!
//! Generate once with [`generate`] or keep a [`Generator`] around, optionally
//! seeded, to get reproducible colors.
//!
//! ```
//! use tintshade::{generate, ColorType, Format, Options};
//!
//! let opts = Options::new()
//!     .format(Format::Rgba)
//!     .color_type(ColorType::All)
//!     .opacity(0.8);
//! let colors = generate(&opts).into_plain();
//! assert_eq!(colors.colors().len(), 3);
//! assert!(colors.colors().iter().all(|c| c.ends_with(", 0.8)")));
//! ```
//!
//! All [`Display`](std::fmt::Display) implementations of the crate *may*
//! output ANSI color codes. Use something like
//! [anstream](https://docs.rs/anstream/) if you dont want colors.

mod delimit;
pub mod options;
pub mod rgb;
mod swatch;

use rand::SeedableRng;
use rand_pcg::Pcg64 as Pcg;

pub use delimit::delimit;
pub use options::{Blend, ColorType, Format, Options};
pub use rgb::{OnColor, Rgb};
pub use swatch::{ColorResult, PlainResult, Swatch};

use options::Variant;

macro_rules! regex {
    ($re:literal $(,)?) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::Regex::new($re).unwrap())
    }};
}
pub(crate) use regex;

/// Generate a color with a fresh generator
///
/// Never fails: every [`Options`] value is valid.
pub fn generate(options: &Options) -> ColorResult {
    Generator::new().generate(options)
}

/// Color generator
#[derive(Debug, Clone, PartialEq)]
pub struct Generator {
    rng: Pcg,
}

impl Generator {
    /// Create a new generator
    ///
    /// Seed is autogenerated form entropy.
    pub fn new() -> Self {
        Self {
            rng: Pcg::from_entropy(),
        }
    }

    /// Create a new generator with a seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Pcg::seed_from_u64(seed),
        }
    }

    /// Sample a color and derive the variants asked in `options`
    pub fn generate(&mut self, options: &Options) -> ColorResult {
        let solo = Rgb::random(&mut self.rng);
        let swatch = |variant: &Variant| {
            let rgb = match variant {
                Variant::Solo => solo,
                Variant::Tint => solo.tint(options.blend),
                Variant::Shade => solo.shade(options.blend),
            };
            Swatch::new(rgb, options.format, options.opacity)
        };

        match options.color_type.variants() {
            [single] => ColorResult::One(swatch(single)),
            many => ColorResult::Many(many.iter().map(swatch).collect()),
        }
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

/// Error from the strict parsers and [`Blend::new`]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Format(String),
    #[error("{0}")]
    ColorType(String),
    #[error("{0}")]
    Blend(String),
}
