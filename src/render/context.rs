use std::collections::HashMap;

use image::RgbImage;

use crate::{
    canvas::{
        font::{FontHandle, FontResolution, resolve_font},
        surface::Surface,
        text::{TextEngine, TextExtent},
    },
    config::EngineConfig,
    foundation::{
        core::{CARD_SIZE, PixelRect, Rgba8},
        error::CardResult,
    },
    model::build::PhotoSource,
    photo::prepare::{PhotoOutcome, PhotoRecipe, prepare},
    render::output::{CardRole, ElementKind, PlacedElement, RenderWarning, RenderedCard},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct FontKey {
    bold: bool,
    // Size in hundredths of a pixel.
    size: u32,
}

/// Per-request drawing state: the card canvas, fonts, text engine, layout trace and warnings.
///
/// One context renders one card at a time; [`RenderContext::finish`] hands the card out and
/// resets the canvas so a series can reuse resolved fonts.
pub struct RenderContext<'a> {
    config: &'a EngineConfig,
    text: TextEngine,
    fonts: HashMap<FontKey, FontResolution>,
    canvas: Surface,
    layout: Vec<PlacedElement>,
    warnings: Vec<RenderWarning>,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self {
            config,
            text: TextEngine::new(),
            fonts: HashMap::new(),
            canvas: Surface::filled(CARD_SIZE, CARD_SIZE, Rgba8::BLACK),
            layout: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        self.config
    }

    /// Start a new card on `background`.
    pub fn begin(&mut self, background: Surface) {
        self.layout.clear();
        self.warnings.clear();
        self.place(ElementKind::Background, background.bounds());
        self.canvas = background;
    }

    pub fn canvas_mut(&mut self) -> &mut Surface {
        &mut self.canvas
    }

    /// Record a placed element.
    pub fn place(&mut self, kind: ElementKind, bounds: PixelRect) {
        self.layout.push(PlacedElement { kind, bounds });
    }

    fn warn(&mut self, warning: RenderWarning) {
        if !self.warnings.contains(&warning) {
            self.warnings.push(warning);
        }
    }

    /// Font of `size` pixels; falls back to the built-in font and records a warning.
    pub fn font(&mut self, size: f32, bold: bool) -> FontHandle {
        let key = FontKey {
            bold,
            size: (size * 100.0).round().max(0.0) as u32,
        };
        let config = self.config;
        let resolution = self
            .fonts
            .entry(key)
            .or_insert_with(|| resolve_font(config.fonts.candidates(bold), size))
            .clone();
        if let Some(reason) = resolution.fallback_reason {
            self.warn(RenderWarning::FontFallback { bold, reason });
        }
        resolution.handle
    }

    pub fn measure(&mut self, text: &str, font: &FontHandle) -> CardResult<TextExtent> {
        self.text.measure(text, font)
    }

    /// Draw text with its top-left corner at `(x, y)`.
    pub fn text(
        &mut self,
        text: &str,
        font: &FontHandle,
        x: i32,
        y: i32,
        color: Rgba8,
    ) -> CardResult<PixelRect> {
        self.text.draw(&mut self.canvas, text, font, x, y, color)
    }

    /// Draw text horizontally centered on `cx`, top edge at `y`.
    pub fn text_centered(
        &mut self,
        text: &str,
        font: &FontHandle,
        cx: i32,
        y: i32,
        color: Rgba8,
    ) -> CardResult<PixelRect> {
        let extent = self.measure(text, font)?;
        self.text(text, font, cx - extent.width as i32 / 2, y, color)
    }

    /// Draw text centered on `(cx, cy)` in both axes.
    pub fn text_middle(
        &mut self,
        text: &str,
        font: &FontHandle,
        cx: i32,
        cy: i32,
        color: Rgba8,
    ) -> CardResult<PixelRect> {
        let extent = self.measure(text, font)?;
        self.text(
            text,
            font,
            cx - extent.width as i32 / 2,
            cy - extent.height as i32 / 2,
            color,
        )
    }

    /// Draw text starting at `x`, vertically centered on `cy`.
    pub fn text_left_middle(
        &mut self,
        text: &str,
        font: &FontHandle,
        x: i32,
        cy: i32,
        color: Rgba8,
    ) -> CardResult<PixelRect> {
        let extent = self.measure(text, font)?;
        self.text(text, font, x, cy - extent.height as i32 / 2, color)
    }

    /// Prepare the build photo, recording a warning when a placeholder is used.
    pub fn photo(&mut self, source: &PhotoSource, recipe: &PhotoRecipe) -> RgbImage {
        let prepared = prepare(source, recipe);
        if let PhotoOutcome::Placeholder(reason) = prepared.outcome {
            self.warn(RenderWarning::PhotoPlaceholder { reason });
        }
        prepared.image
    }

    /// Flatten the canvas and hand out the finished card.
    pub fn finish(&mut self, style: &'static str, number: u32, role: CardRole) -> RenderedCard {
        let canvas = std::mem::replace(&mut self.canvas, Surface::new(0, 0));
        RenderedCard {
            style,
            number,
            role,
            image: canvas.to_rgb_image(),
            layout: std::mem::take(&mut self.layout),
            warnings: std::mem::take(&mut self.warnings),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/context.rs"]
mod tests;
