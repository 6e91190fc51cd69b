use std::{collections::HashMap, path::PathBuf};

use crate::{
    canvas::{
        font::{FontFace, FontHandle, builtin},
        surface::Surface,
    },
    foundation::{
        core::{PixelRect, Rgba8},
        error::{CardError, CardResult},
    },
};

/// RGBA8 brush color carried through Parley layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBrush {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<Rgba8> for TextBrush {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// Size of a laid-out single-line string in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextExtent {
    pub width: u32,
    pub height: u32,
}

/// Face registered with the layout engine, plus its glyph source for rasterization.
#[derive(Clone)]
struct LoadedFace {
    family: String,
    data: vello_cpu::peniko::FontData,
}

/// Stateful helper for shaping and rasterizing single-line labels.
///
/// Outline fonts are shaped by Parley and filled by `vello_cpu`; the built-in font is blitted
/// directly. Text is positioned by the top-left corner of its line box.
pub struct TextEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrush>,
    faces: HashMap<PathBuf, LoadedFace>,
}

impl Default for TextEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEngine {
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            faces: HashMap::new(),
        }
    }

    /// Register `face` once per engine; later calls reuse the family name and font data.
    fn loaded(&mut self, face: &FontFace) -> CardResult<LoadedFace> {
        if let Some(loaded) = self.faces.get(face.path()) {
            return Ok(loaded.clone());
        }
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(face.bytes().to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            CardError::font_unavailable(format!(
                "no font families registered from {}",
                face.path().display()
            ))
        })?;
        let name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| CardError::font_unavailable("registered font family has no name"))?
            .to_string();
        let loaded = LoadedFace {
            family: name,
            data: vello_cpu::peniko::FontData::new(
                vello_cpu::peniko::Blob::from(face.bytes().to_vec()),
                0,
            ),
        };
        self.faces.insert(face.path().to_path_buf(), loaded.clone());
        Ok(loaded)
    }

    fn layout(
        &mut self,
        text: &str,
        family_name: String,
        size: f32,
        brush: TextBrush,
    ) -> CardResult<parley::Layout<TextBrush>> {
        if !size.is_finite() || size <= 0.0 {
            return Err(CardError::render("text size must be finite and > 0"));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrush> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }

    /// Pixel extent of `text` set in `font`.
    pub fn measure(&mut self, text: &str, font: &FontHandle) -> CardResult<TextExtent> {
        if text.is_empty() {
            return Ok(TextExtent::default());
        }
        match font {
            FontHandle::Builtin { scale } => Ok(builtin_extent(text, *scale)),
            FontHandle::Outline { face, size } => {
                let family = self.loaded(face)?.family;
                let layout = self.layout(text, family, *size, TextBrush::default())?;
                Ok(TextExtent {
                    width: layout.width().ceil().max(0.0) as u32,
                    height: layout.height().ceil().max(0.0) as u32,
                })
            }
        }
    }

    /// Draw `text` with its top-left corner at `(x, y)`. Returns the covered box.
    pub fn draw(
        &mut self,
        surface: &mut Surface,
        text: &str,
        font: &FontHandle,
        x: i32,
        y: i32,
        color: Rgba8,
    ) -> CardResult<PixelRect> {
        if text.is_empty() {
            return Ok(PixelRect::from_origin_size(x, y, 0, 0));
        }
        match font {
            FontHandle::Builtin { scale } => Ok(draw_builtin(surface, text, *scale, x, y, color)),
            FontHandle::Outline { face, size } => {
                let layer = self.rasterize(text, face, *size, color)?;
                surface.draw(&layer, x, y);
                Ok(PixelRect::from_origin_size(x, y, layer.width(), layer.height()))
            }
        }
    }

    fn rasterize(
        &mut self,
        text: &str,
        face: &FontFace,
        size: f32,
        color: Rgba8,
    ) -> CardResult<Surface> {
        let loaded = self.loaded(face)?;
        let layout = self.layout(text, loaded.family, size, TextBrush::from(color))?;
        let width = layout.width().ceil().max(1.0) as u32;
        let height = layout.height().ceil().max(1.0) as u32;
        let width_u16: u16 = width
            .try_into()
            .map_err(|_| CardError::render("text layer width exceeds u16"))?;
        let height_u16: u16 = height
            .try_into()
            .map_err(|_| CardError::render("text layer height exceeds u16"))?;

        let font = loaded.data;
        let mut ctx = vello_cpu::RenderContext::new(width_u16, height_u16);
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(width_u16, height_u16);
        ctx.render_to_pixmap(&mut pixmap);
        Surface::from_premul_bytes(width, height, pixmap.data_as_u8_slice().to_vec())
    }
}

fn builtin_extent(text: &str, scale: u32) -> TextExtent {
    let chars = text.chars().count() as u32;
    TextExtent {
        width: chars * builtin::CELL_W * scale,
        height: builtin::CELL_H * scale,
    }
}

fn draw_builtin(
    surface: &mut Surface,
    text: &str,
    scale: u32,
    x: i32,
    y: i32,
    color: Rgba8,
) -> PixelRect {
    let s = scale.max(1) as i32;
    let mut pen = x;
    for ch in text.chars() {
        for col in 0..5u32 {
            for row in 0..builtin::CELL_H {
                if !builtin::ink(ch, col, row) {
                    continue;
                }
                let px = pen + col as i32 * s;
                let py = y + row as i32 * s;
                surface.fill_rect(PixelRect::new(px, py, px + s, py + s), color);
            }
        }
        pen += builtin::CELL_W as i32 * s;
    }
    let extent = builtin_extent(text, scale);
    PixelRect::from_origin_size(x, y, extent.width, extent.height)
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/text.rs"]
mod tests;
