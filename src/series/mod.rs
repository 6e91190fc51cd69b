//! Six-slide marketplace series sharing one purple-to-pink background.

use crate::{
    canvas::{gradient::vertical_gradient_by, surface::Surface},
    foundation::{
        core::{CARD_SIZE, Rgba8},
        error::CardResult,
    },
    model::build::BuildSpec,
    render::{
        context::RenderContext,
        output::{CardRole, RenderedCard, SeriesRole},
    },
};

pub(crate) mod benchmarks;
pub(crate) mod slides;

/// Style tag of the series.
pub const SERIES_TAG: &str = "mixpc";

pub(crate) const PURPLE: Rgba8 = Rgba8::rgb(139, 69, 255);
pub(crate) const PINK: Rgba8 = Rgba8::rgb(255, 105, 180);
pub(crate) const SUBTITLE: Rgba8 = Rgba8::rgb(200, 200, 200);

/// Shared slide background: per-row blend from purple toward pink, damped per channel.
pub fn series_background() -> Surface {
    let h = f64::from(CARD_SIZE);
    vertical_gradient_by(CARD_SIZE, CARD_SIZE, |y| {
        let ratio = f64::from(y) / h;
        Rgba8::rgb(
            (139.0 + 116.0 * ratio * 0.6) as u8,
            (69.0 + 36.0 * ratio * 0.8) as u8,
            (255.0 - 75.0 * ratio * 0.7) as u8,
        )
    })
}

/// Draw one slide into the context.
pub(crate) fn render_slide(
    ctx: &mut RenderContext<'_>,
    build: &BuildSpec,
    role: SeriesRole,
) -> CardResult<()> {
    ctx.begin(series_background());
    match role {
        SeriesRole::Hero => slides::hero(ctx, build),
        SeriesRole::SpecTable => slides::spec_table(ctx, build),
        SeriesRole::Benchmarks => slides::benchmarks(ctx),
        SeriesRole::QualityCheck => slides::quality_check(ctx, build),
        SeriesRole::Shipping => slides::shipping(ctx),
        SeriesRole::TradeIn => slides::trade_in(ctx),
    }
}

/// Hero slide alone; the registry's single-card entry point for the series style.
pub(crate) fn render_hero(ctx: &mut RenderContext<'_>, build: &BuildSpec) -> CardResult<()> {
    render_slide(ctx, build, SeriesRole::Hero)
}

/// All slides, numbered 1.. in fixed role order.
#[tracing::instrument(skip_all, fields(build = %build.id))]
pub(crate) fn render_series(
    ctx: &mut RenderContext<'_>,
    build: &BuildSpec,
) -> CardResult<Vec<RenderedCard>> {
    let mut cards = Vec::with_capacity(SeriesRole::ALL.len());
    for role in SeriesRole::ALL {
        render_slide(ctx, build, role)?;
        tracing::debug!(slide = role.number(), role = role.as_str(), "series slide drawn");
        cards.push(ctx.finish(SERIES_TAG, role.number(), CardRole::Series(role)));
    }
    Ok(cards)
}

#[cfg(test)]
#[path = "../../tests/unit/series/mod.rs"]
mod tests;
