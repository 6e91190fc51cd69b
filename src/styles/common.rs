use image::RgbImage;

use crate::{
    canvas::{
        font::FontHandle,
        format::{ELLIPSIS, ellipsize},
        surface::Surface,
    },
    foundation::{core::PixelRect, error::CardResult},
    model::build::BuildSpec,
    render::{context::RenderContext, output::ElementKind},
};

/// Spec rows shown by single-card styles.
pub(crate) const MAX_SPEC_ROWS: usize = 4;
/// Bonus lines shown by every style.
pub(crate) const MAX_BONUS_LINES: usize = 2;
/// Smallest size [`fit_text`] shrinks to before it starts shortening.
pub(crate) const MIN_FIT_SIZE: f32 = 10.0;

/// Text shaped to a width budget.
#[derive(Clone, Debug)]
pub(crate) struct FittedText {
    pub text: String,
    pub font: FontHandle,
    pub width: i32,
}

/// Paste an opaque photo at `(x, y)` and record it.
pub(crate) fn place_photo(ctx: &mut RenderContext<'_>, photo: &RgbImage, x: i32, y: i32) {
    ctx.canvas_mut().paste_rgb(photo, x, y);
    ctx.place(
        ElementKind::Photo,
        PixelRect::from_origin_size(x, y, photo.width(), photo.height()),
    );
}

/// Composite a layer at `(x, y)` and record it as `kind`.
pub(crate) fn place_layer(
    ctx: &mut RenderContext<'_>,
    layer: &Surface,
    x: i32,
    y: i32,
    kind: ElementKind,
) {
    ctx.canvas_mut().draw(layer, x, y);
    ctx.place(
        kind,
        PixelRect::from_origin_size(x, y, layer.width(), layer.height()),
    );
}

/// Bonus lines prefixed with `marker`, each shortened to `budget` characters.
pub(crate) fn bonus_lines(build: &BuildSpec, marker: char, budget: usize) -> Vec<String> {
    build
        .bonus_lines(MAX_BONUS_LINES)
        .into_iter()
        .map(|line| format!("{marker} {}", ellipsize(line, budget)))
        .collect()
}

/// Text width in pixels.
pub(crate) fn text_width(
    ctx: &mut RenderContext<'_>,
    text: &str,
    font: &FontHandle,
) -> CardResult<i32> {
    Ok(ctx.measure(text, font)?.width as i32)
}

/// Largest font of at most `size` pixels that keeps `text` within `max_width`.
///
/// Below [`MIN_FIT_SIZE`] the text is ellipsized instead, so the result always fits unless even
/// the lone ellipsis is wider than the budget.
pub(crate) fn fit_text(
    ctx: &mut RenderContext<'_>,
    text: &str,
    size: f32,
    bold: bool,
    max_width: i32,
) -> CardResult<FittedText> {
    let mut size = size.max(MIN_FIT_SIZE);
    loop {
        let font = ctx.font(size, bold);
        let width = text_width(ctx, text, &font)?;
        if width <= max_width {
            return Ok(FittedText {
                text: text.to_owned(),
                font,
                width,
            });
        }
        if size <= MIN_FIT_SIZE {
            break;
        }
        size = (size * 0.9).max(MIN_FIT_SIZE);
    }

    let font = ctx.font(MIN_FIT_SIZE, bold);
    let full = text.chars().count();
    let full_width = text_width(ctx, text, &font)?.max(1);
    // Proportional first guess, then walk down.
    let mut budget = (full as i64 * i64::from(max_width.max(0)) / i64::from(full_width)) as usize;
    budget = budget.clamp(1, full);
    while budget > 1 {
        let shortened = ellipsize(text, budget);
        let width = text_width(ctx, &shortened, &font)?;
        if width <= max_width {
            return Ok(FittedText {
                text: shortened,
                font,
                width,
            });
        }
        budget -= 1;
    }
    let shortened = ELLIPSIS.to_string();
    let width = text_width(ctx, &shortened, &font)?;
    Ok(FittedText {
        text: shortened,
        font,
        width,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/styles/common.rs"]
mod tests;
