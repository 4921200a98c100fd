use std::fmt::Display;

use owo_colors::OwoColorize;

use crate::options::Format;
use crate::rgb::{OnColor, Rgb};

/// A generated color and the foreground that reads best on it
///
/// The [`Display`] [alternate modifier](std::fmt#sign0) will only print
/// [`Swatch::color`].
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    /// Channels the color was written from
    pub rgb: Rgb,
    /// The color, written in the requested [`Format`]
    pub color: String,
    pub on_color: OnColor,
}

impl Swatch {
    pub(crate) fn new(rgb: Rgb, format: Format, opacity: f64) -> Self {
        let color = match format {
            Format::Hex => rgb.to_hex(),
            Format::Rgba => rgb.to_rgba(opacity),
        };
        Self {
            rgb,
            color,
            on_color: rgb.on_color(),
        }
    }
}

impl Display for Swatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            return f.write_str(&self.color);
        }
        let bg = owo_colors::DynColors::from(self.rgb);
        let label = format!(" {} ", self.color);
        write!(
            f,
            "{} {}",
            label.on_color(bg).color(self.on_color.ansi()),
            self.on_color.dimmed()
        )
    }
}

/// Output of a generation
///
/// Single variants ([`Solo`](crate::ColorType::Solo),
/// [`Tint`](crate::ColorType::Tint), [`Shade`](crate::ColorType::Shade))
/// give [`ColorResult::One`], the rest a list in the order of the type name.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorResult {
    One(Swatch),
    Many(Vec<Swatch>),
}

impl ColorResult {
    pub fn swatches(&self) -> &[Swatch] {
        match self {
            ColorResult::One(s) => std::slice::from_ref(s),
            ColorResult::Many(v) => v,
        }
    }

    /// Drop the contrast information and keep only the color strings
    pub fn into_plain(self) -> PlainResult {
        match self {
            ColorResult::One(s) => PlainResult::One(s.color),
            ColorResult::Many(v) => PlainResult::Many(v.into_iter().map(|s| s.color).collect()),
        }
    }
}

impl Display for ColorResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut it = self.swatches().iter();
        if let Some(first) = it.next() {
            first.fmt(f)?;
        }
        for s in it {
            f.write_str(" ")?;
            s.fmt(f)?;
        }
        Ok(())
    }
}

/// Color strings only, see [`ColorResult::into_plain`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlainResult {
    One(String),
    Many(Vec<String>),
}

impl PlainResult {
    pub fn colors(&self) -> &[String] {
        match self {
            PlainResult::One(s) => std::slice::from_ref(s),
            PlainResult::Many(v) => v,
        }
    }
}
