use crate::{
    canvas::{
        font::FontHandle,
        format::ellipsize,
        shadow::{ShadowSpec, soft_shadow},
        shapes::{ShapeStyle, circle, rect, rounded_rect},
        surface::Surface,
    },
    foundation::{
        core::{CARD_SIZE, PixelRect, Rgba8},
        error::CardResult,
    },
    model::build::BuildSpec,
    photo::prepare::PhotoRecipe,
    render::{context::RenderContext, output::ElementKind},
    series::{PINK, PURPLE, SUBTITLE, benchmarks::ILLUSTRATIVE_BENCHMARKS},
    styles::common::{place_layer, place_photo},
};

const W: i32 = CARD_SIZE as i32;
const CX: i32 = W / 2;
const GREEN: Rgba8 = Rgba8::rgb(52, 199, 89);

const HERO_PHOTO: PhotoRecipe = PhotoRecipe::contain(900, 700);
const HERO_SHADOW: ShadowSpec = ShadowSpec {
    margin: 40,
    blur: 20.0,
    max_alpha: 80,
    offset: 10,
};
const QA_PHOTO: PhotoRecipe = PhotoRecipe::contain(800, 600);

const TITLE_BUDGET: usize = 24;
const COMBO_BUDGET: usize = 60;
const TABLE_VALUE_BUDGET: usize = 45;

/// Centered title with an optional drop shadow `(offset, alpha)`.
fn title(
    ctx: &mut RenderContext<'_>,
    text: &str,
    font: &FontHandle,
    y: i32,
    color: Rgba8,
    shadow: Option<(i32, u8)>,
) -> CardResult<PixelRect> {
    if let Some((off, alpha)) = shadow {
        let w = ctx.measure(text, font)?.width as i32;
        ctx.text(
            text,
            font,
            (W - w) / 2 + off,
            y + off,
            Rgba8::BLACK.with_alpha(alpha),
        )?;
    }
    let r = ctx.text_centered(text, font, CX, y, color)?;
    ctx.place(ElementKind::Title, r);
    Ok(r)
}

fn heading(ctx: &mut RenderContext<'_>, text: &str, sub: &str, sub_size: f32) -> CardResult<()> {
    let font = ctx.font(56.0, true);
    title(ctx, text, &font, 60, Rgba8::WHITE, None)?;
    let font = ctx.font(sub_size, false);
    title(ctx, sub, &font, 130, SUBTITLE, None)?;
    Ok(())
}

/// Russian plural of "year" as used after a count.
pub(crate) fn years_word(n: u32) -> &'static str {
    let (last, last_two) = (n % 10, n % 100);
    if (11..=14).contains(&last_two) {
        "лет"
    } else if last == 1 {
        "год"
    } else if (2..=4).contains(&last) {
        "года"
    } else {
        "лет"
    }
}

pub(crate) fn hero(ctx: &mut RenderContext<'_>, build: &BuildSpec) -> CardResult<()> {
    let photo = ctx.photo(&build.photo, &HERO_PHOTO);
    let framed = soft_shadow(&Surface::from_rgb(&photo), HERO_SHADOW)?;
    place_layer(
        ctx,
        &framed,
        (W - framed.width() as i32) / 2,
        250,
        ElementKind::Photo,
    );

    let name = build.name.trim();
    if name.is_empty() {
        let font = ctx.font(64.0, true);
        title(ctx, "ИГРОВОЙ", &font, 60, Rgba8::WHITE, Some((4, 150)))?;
        let font = ctx.font(56.0, true);
        title(ctx, "КОМПЬЮТЕР", &font, 140, Rgba8::WHITE, Some((3, 100)))?;
    } else {
        let font = ctx.font(56.0, true);
        let text = ellipsize(name, TITLE_BUDGET);
        title(ctx, &text, &font, 100, Rgba8::WHITE, Some((3, 100)))?;
    }

    let combo = ellipsize(&format!("{} + {}", build.cpu.trim(), build.gpu.trim()), COMBO_BUDGET);
    let font = ctx.font(28.0, true);
    let tw = ctx.measure(&combo, &font)?.width as i32;
    let (x, y, pad) = ((W - tw) / 2, 1020, 20);
    let (x1, y1, x2, y2) = (x - pad, y - pad, x + tw + pad, y + 40 + pad);
    rounded_rect(
        ctx.canvas_mut(),
        x1,
        y1,
        x2,
        y2,
        20,
        ShapeStyle::fill(Rgba8::WHITE.with_alpha(30)),
    );
    ctx.text(&combo, &font, x, y, Rgba8::WHITE)?;
    ctx.place(ElementKind::Caption, PixelRect::inclusive(x1, y1, x2, y2));

    let (bx, by, radius) = (W - 150, 50, 60);
    for r in (1..=radius).rev() {
        let alpha = (200 * r / radius) as u8;
        circle(ctx.canvas_mut(), bx, by, r, PURPLE.with_alpha(alpha));
    }
    let monogram = ctx.config().brand_short.clone();
    let font = ctx.font(32.0, true);
    ctx.text_middle(&monogram, &font, bx, by, Rgba8::WHITE)?;
    ctx.place(
        ElementKind::Brand,
        PixelRect::inclusive(bx - radius, by - radius, bx + radius, by + radius),
    );

    let (wx, wy) = (80, 1050);
    rounded_rect(
        ctx.canvas_mut(),
        wx,
        wy,
        wx + 200,
        wy + 100,
        15,
        ShapeStyle::fill(Rgba8::WHITE.with_alpha(40)),
    );
    let years = build.warranty_years();
    let font = ctx.font(56.0, true);
    ctx.text(&years.to_string(), &font, wx + 40, wy + 5, Rgba8::WHITE)?;
    let font = ctx.font(20.0, true);
    ctx.text(years_word(years), &font, wx + 110, wy + 15, Rgba8::WHITE)?;
    let font = ctx.font(16.0, true);
    ctx.text(
        "ГАРАНТИИ*",
        &font,
        wx + 30,
        wy + 70,
        Rgba8::rgb(220, 220, 220),
    )?;
    ctx.place(
        ElementKind::Badge,
        PixelRect::inclusive(wx, wy, wx + 200, wy + 100),
    );
    Ok(())
}

pub(crate) fn spec_table(ctx: &mut RenderContext<'_>, build: &BuildSpec) -> CardResult<()> {
    let font = ctx.font(56.0, true);
    title(ctx, "КОНФИГУРАЦИЯ", &font, 60, Rgba8::WHITE, Some((3, 100)))?;
    let font = ctx.font(24.0, false);
    title(ctx, "ТОЛЬКО НОВОЕ ЖЕЛЕЗО", &font, 130, SUBTITLE, None)?;

    let (table_w, row_h, start_y) = (1000, 90, 220);
    let x0 = (W - table_w) / 2;
    let icon_font = ctx.font(32.0, false);
    let label_font = ctx.font(18.0, true);
    let value_font = ctx.font(22.0, false);
    for (i, entry) in build.spec_list().iter().enumerate() {
        let y = start_y + i as i32 * row_h;
        rounded_rect(
            ctx.canvas_mut(),
            x0,
            y,
            x0 + table_w,
            y + 70,
            12,
            ShapeStyle::fill(Rgba8::BLACK.with_alpha(100)),
        );
        let icon = entry.field.icon().to_string();
        ctx.text(&icon, &icon_font, x0 + 20, y + 15, Rgba8::WHITE)?;
        ctx.text(
            entry.label(),
            &label_font,
            x0 + 80,
            y + 10,
            Rgba8::rgb(180, 180, 180),
        )?;
        let value = ellipsize(entry.value, TABLE_VALUE_BUDGET);
        ctx.text(&value, &value_font, x0 + 350, y + 20, Rgba8::WHITE)?;
        ctx.place(
            ElementKind::SpecRow,
            PixelRect::inclusive(x0, y, x0 + table_w, y + 70),
        );
    }
    Ok(())
}

pub(crate) fn benchmarks(ctx: &mut RenderContext<'_>) -> CardResult<()> {
    heading(ctx, "ТЕСТЫ В ИГРАХ", "КОМФОРТНЫЕ ПОКАЗАТЕЛИ", 22.0)?;

    let (panel_w, panel_h, panel_y) = (900, 700, 250);
    let px = (W - panel_w) / 2;
    rounded_rect(
        ctx.canvas_mut(),
        px,
        panel_y,
        px + panel_w,
        panel_y + panel_h,
        25,
        ShapeStyle::fill(Rgba8::BLACK.with_alpha(120)),
    );

    let game_font = ctx.font(22.0, true);
    let fps_font = ctx.font(28.0, true);
    for (i, bench) in ILLUSTRATIVE_BENCHMARKS.iter().enumerate() {
        let y = panel_y + 40 + i as i32 * 75;
        rounded_rect(
            ctx.canvas_mut(),
            px + 30,
            y,
            px + panel_w - 30,
            y + 60,
            15,
            ShapeStyle::fill(PURPLE.with_alpha(80)),
        );
        rect(
            ctx.canvas_mut(),
            px + 45,
            y + 7,
            px + 90,
            y + 52,
            Rgba8::rgb(50, 50, 60),
        );
        ctx.text(bench.game, &game_font, px + 110, y + 15, Rgba8::WHITE)?;
        ctx.text(
            &bench.fps_label(),
            &fps_font,
            px + panel_w - 150,
            y + 12,
            PINK,
        )?;
        ctx.place(
            ElementKind::BenchmarkRow,
            PixelRect::inclusive(px + 30, y, px + panel_w - 30, y + 60),
        );
    }
    Ok(())
}

pub(crate) fn quality_check(ctx: &mut RenderContext<'_>, build: &BuildSpec) -> CardResult<()> {
    let photo = ctx.photo(&build.photo, &QA_PHOTO);
    place_photo(ctx, &photo, (W - photo.width() as i32) / 2, 350);
    heading(ctx, "ТЕСТИРУЕМ", "ПЕРЕД ОТПРАВКОЙ", 28.0)
}

pub(crate) fn shipping(ctx: &mut RenderContext<'_>) -> CardResult<()> {
    let font = ctx.font(64.0, true);
    title(ctx, "БЕСПЛАТНАЯ", &font, 180, Rgba8::WHITE, None)?;
    let font = ctx.font(32.0, false);
    title(ctx, "ДОСТАВКА ПО РОССИИ", &font, 260, SUBTITLE, None)?;

    let (cx, cy, r) = (CX, 550, 60);
    circle(ctx.canvas_mut(), cx, cy, r, GREEN);
    let font = ctx.font(48.0, true);
    ctx.text("✓", &font, cx - 15, cy - 30, Rgba8::WHITE)?;
    ctx.place(
        ElementKind::Badge,
        PixelRect::inclusive(cx - r, cy - r, cx + r, cy + r),
    );

    let font = ctx.font(26.0, true);
    let r = ctx.text_centered("НАДЁЖНАЯ УПАКОВКА", &font, CX, 680, Rgba8::WHITE)?;
    ctx.place(ElementKind::Caption, r);
    Ok(())
}

pub(crate) fn trade_in(ctx: &mut RenderContext<'_>) -> CardResult<()> {
    let font = ctx.font(64.0, true);
    title(ctx, "ТРЕЙД-ИН", &font, 180, Rgba8::WHITE, None)?;
    let font = ctx.font(48.0, false);
    title(ctx, "СКИДКА ДО 50%", &font, 260, PINK, None)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/series/slides.rs"]
mod tests;
