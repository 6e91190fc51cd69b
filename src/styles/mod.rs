//! Single-card style renderers and the closed style registry.
//!
//! Every style runs the same step sequence against a fresh canvas: background, photo, brand mark,
//! spec rows, price block, bonus lines, then decorative accents. Styles differ only in palette,
//! chrome, sizes and positions.

use std::{fmt, str::FromStr};

use crate::{
    foundation::error::{CardError, CardResult},
    model::build::BuildSpec,
    render::context::RenderContext,
};

pub(crate) mod apple;
pub(crate) mod common;
pub(crate) mod msi;
pub(crate) mod spotify;
pub(crate) mod steam;

/// Draws one card into the context. The context is already reset; the renderer calls
/// [`RenderContext::begin`] with its background first.
pub(crate) type RenderFn = fn(&mut RenderContext<'_>, &BuildSpec) -> CardResult<()>;

/// Closed set of style identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleTag {
    /// Red/black gaming.
    Msi,
    /// Glass panels over a blurred photo.
    Steam,
    /// Minimal light.
    Apple,
    /// Flat dark with one accent color.
    Spotify,
    /// Six-slide marketplace series.
    MixPc,
}

impl StyleTag {
    pub const ALL: [Self; 5] = [
        Self::Msi,
        Self::Steam,
        Self::Apple,
        Self::Spotify,
        Self::MixPc,
    ];

    pub fn as_str(self) -> &'static str {
        self.entry().tag_str
    }

    /// Registry entry of this tag.
    pub fn entry(self) -> &'static StyleEntry {
        match self {
            Self::Msi => &REGISTRY[0],
            Self::Steam => &REGISTRY[1],
            Self::Apple => &REGISTRY[2],
            Self::Spotify => &REGISTRY[3],
            Self::MixPc => &REGISTRY[4],
        }
    }

    /// Case-insensitive lookup; unknown tags are [`CardError::UnsupportedStyle`].
    pub fn parse(tag: &str) -> CardResult<Self> {
        let wanted = tag.trim();
        REGISTRY
            .iter()
            .find(|e| e.tag_str.eq_ignore_ascii_case(wanted))
            .map(|e| e.tag)
            .ok_or_else(|| CardError::unsupported_style(tag))
    }
}

impl FromStr for StyleTag {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a style produces when dispatched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleOutput {
    /// One card from `render`.
    Single,
    /// The full slide series; `render` draws the hero slide alone.
    Series,
}

/// One row of the style registry.
pub struct StyleEntry {
    pub tag: StyleTag,
    pub tag_str: &'static str,
    pub title: &'static str,
    pub output: StyleOutput,
    pub(crate) render: RenderFn,
}

impl StyleEntry {
    /// Number of cards a dispatch of this style yields.
    pub fn card_count(&self) -> usize {
        match self.output {
            StyleOutput::Single => 1,
            StyleOutput::Series => crate::render::output::SeriesRole::ALL.len(),
        }
    }
}

impl fmt::Debug for StyleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleEntry")
            .field("tag", &self.tag)
            .field("title", &self.title)
            .field("output", &self.output)
            .finish()
    }
}

/// Immutable tag to renderer table.
pub static REGISTRY: [StyleEntry; 5] = [
    StyleEntry {
        tag: StyleTag::Msi,
        tag_str: "msi",
        title: "MSI Gaming",
        output: StyleOutput::Single,
        render: msi::render,
    },
    StyleEntry {
        tag: StyleTag::Steam,
        tag_str: "steam",
        title: "Steam Glass",
        output: StyleOutput::Single,
        render: steam::render,
    },
    StyleEntry {
        tag: StyleTag::Apple,
        tag_str: "apple",
        title: "Apple Minimal",
        output: StyleOutput::Single,
        render: apple::render,
    },
    StyleEntry {
        tag: StyleTag::Spotify,
        tag_str: "spotify",
        title: "Spotify Flat",
        output: StyleOutput::Single,
        render: spotify::render,
    },
    StyleEntry {
        tag: StyleTag::MixPc,
        tag_str: "mixpc",
        title: "MIXPC Series",
        output: StyleOutput::Series,
        render: crate::series::render_hero,
    },
];

#[cfg(test)]
#[path = "../../tests/unit/styles/mod.rs"]
mod tests;
