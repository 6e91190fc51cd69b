use std::{fmt, io::Cursor};

use anyhow::Context;
use image::RgbImage;
use serde::Serialize;

use crate::foundation::{core::PixelRect, error::CardResult};

/// Fixed position-bound role of a series slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesRole {
    Hero,
    SpecTable,
    Benchmarks,
    QualityCheck,
    Shipping,
    TradeIn,
}

impl SeriesRole {
    /// Slides in output order.
    pub const ALL: [Self; 6] = [
        Self::Hero,
        Self::SpecTable,
        Self::Benchmarks,
        Self::QualityCheck,
        Self::Shipping,
        Self::TradeIn,
    ];

    /// 1-based slide number.
    pub fn number(self) -> u32 {
        match self {
            Self::Hero => 1,
            Self::SpecTable => 2,
            Self::Benchmarks => 3,
            Self::QualityCheck => 4,
            Self::Shipping => 5,
            Self::TradeIn => 6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::SpecTable => "spec_table",
            Self::Benchmarks => "benchmarks",
            Self::QualityCheck => "quality_check",
            Self::Shipping => "shipping",
            Self::TradeIn => "trade_in",
        }
    }
}

/// What a rendered card is within its request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardRole {
    Single,
    Series(SeriesRole),
}

/// Kind of a placed layout element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Background,
    Photo,
    Brand,
    Title,
    SpecRow,
    Price,
    Bonus,
    Badge,
    BenchmarkRow,
    Caption,
    Decoration,
}

/// One element as placed on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PlacedElement {
    pub kind: ElementKind,
    pub bounds: PixelRect,
}

/// A condition the renderer recovered from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderWarning {
    /// The photo could not be used and a placeholder was drawn.
    PhotoPlaceholder { reason: String },
    /// No font candidate loaded; the built-in font was used.
    FontFallback { bold: bool, reason: String },
}

impl fmt::Display for RenderWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PhotoPlaceholder { reason } => write!(f, "photo placeholder used: {reason}"),
            Self::FontFallback { bold, reason } => {
                let weight = if *bold { "bold" } else { "regular" };
                write!(f, "built-in {weight} font used: {reason}")
            }
        }
    }
}

/// One finished 1200x1200 card.
#[derive(Clone, Debug)]
pub struct RenderedCard {
    /// Style tag that produced the card.
    pub style: &'static str,
    /// 1 for single renders, slide number for series renders.
    pub number: u32,
    pub role: CardRole,
    /// Opaque RGB raster.
    pub image: RgbImage,
    /// Placed elements in draw order.
    pub layout: Vec<PlacedElement>,
    pub warnings: Vec<RenderWarning>,
}

impl RenderedCard {
    /// Lossless PNG encoding of [`RenderedCard::image`].
    pub fn encode_png(&self) -> CardResult<Vec<u8>> {
        let mut buf = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .context("encode card png")?;
        Ok(buf)
    }

    /// Elements of one kind, in draw order.
    pub fn elements(&self, kind: ElementKind) -> impl Iterator<Item = &PlacedElement> + '_ {
        self.layout.iter().filter(move |e| e.kind == kind)
    }

    pub fn count(&self, kind: ElementKind) -> usize {
        self.elements(kind).count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/output.rs"]
mod tests;
