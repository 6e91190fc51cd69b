//! Minimal light card: soft gradient, shadowed photo, frosted spec panel.

use crate::{
    canvas::{
        format::{ellipsize, format_price},
        gradient::{GradientDirection, linear_gradient},
        shadow::{ShadowSpec, soft_shadow},
        shapes::{ShapeStyle, rounded_rect},
        surface::Surface,
    },
    foundation::{
        core::{CARD_SIZE, PixelRect, Rgba8},
        error::CardResult,
    },
    model::build::BuildSpec,
    photo::prepare::PhotoRecipe,
    render::{context::RenderContext, output::ElementKind},
    styles::common::{MAX_SPEC_ROWS, bonus_lines, fit_text, place_layer, text_width},
};

const LIGHT_GRAY: Rgba8 = Rgba8::rgb(242, 242, 247);
const GRAY: Rgba8 = Rgba8::rgb(142, 142, 147);
const DARK: Rgba8 = Rgba8::rgb(28, 28, 30);
const BLUE: Rgba8 = Rgba8::rgb(0, 122, 255);
const GREEN: Rgba8 = Rgba8::rgb(52, 199, 89);

const W: i32 = CARD_SIZE as i32;

const PHOTO: PhotoRecipe = PhotoRecipe::contain(900, 700).with_backdrop(LIGHT_GRAY);
const SHADOW: ShadowSpec = ShadowSpec {
    margin: 30,
    blur: 15.0,
    max_alpha: 20,
    offset: 0,
};
const PHOTO_Y: i32 = 100;

const PANEL_W: i32 = 1000;
const PANEL_H: i32 = 180;
const PANEL_Y: i32 = 830;
const VALUE_BUDGET: usize = 40;

const BONUS_MARKER: char = '✓';
const BONUS_BUDGET: usize = 60;

pub(crate) fn render(ctx: &mut RenderContext<'_>, build: &BuildSpec) -> CardResult<()> {
    ctx.begin(linear_gradient(
        CARD_SIZE,
        CARD_SIZE,
        GradientDirection::Vertical,
        Rgba8::WHITE,
        LIGHT_GRAY,
    ));

    let photo = ctx.photo(&build.photo, &PHOTO);
    let framed = soft_shadow(&Surface::from_rgb(&photo), SHADOW)?;
    place_layer(
        ctx,
        &framed,
        (W - photo.width() as i32) / 2,
        PHOTO_Y,
        ElementKind::Photo,
    );

    let brand = ctx.config().brand.clone();
    let font = ctx.font(38.0, true);
    let tw = text_width(ctx, &brand, &font)?;
    let (x, y, pad) = ((W - tw) / 2, 30, 12);
    let pill = PixelRect::inclusive(x - pad, y - pad, x + tw + pad, y + 40 + pad);
    rounded_rect(
        ctx.canvas_mut(),
        pill.x0,
        pill.y0,
        pill.x1 - 1,
        pill.y1 - 1,
        20,
        ShapeStyle::fill(Rgba8::WHITE.with_alpha(200)).with_outline(GRAY, 1),
    );
    ctx.text(&brand, &font, x, y, DARK)?;
    ctx.place(ElementKind::Brand, pill);

    let panel_x = (W - PANEL_W) / 2;
    rounded_rect(
        ctx.canvas_mut(),
        panel_x,
        PANEL_Y,
        panel_x + PANEL_W,
        PANEL_Y + PANEL_H,
        25,
        ShapeStyle::fill(Rgba8::WHITE.with_alpha(220)).with_outline(GRAY, 1),
    );
    let label_font = ctx.font(16.0, true);
    let value_font = ctx.font(18.0, false);
    let col_width = PANEL_W / 2;
    for (i, entry) in build.spec_list().iter().take(MAX_SPEC_ROWS).enumerate() {
        let (col, row) = ((i % 2) as i32, (i / 2) as i32);
        let x = panel_x + 40 + col * col_width;
        let y = PANEL_Y + 30 + row * 70;
        let a = ctx.text(entry.label(), &label_font, x, y, GRAY)?;
        let value = ellipsize(entry.value, VALUE_BUDGET);
        let b = ctx.text(&value, &value_font, x, y + 25, DARK)?;
        ctx.place(ElementKind::SpecRow, a.union(b));
    }

    let pad = 20;
    let price = fit_text(ctx, &format_price(build.price), 68.0, true, W - 200 - 2 * pad)?;
    let th = ctx.measure(&price.text, &price.font)?.height as i32;
    let tw = price.width;
    let (x, y) = ((W - tw) / 2, 1060);
    let price_box = PixelRect::inclusive(x - pad, y - pad, x + tw + pad, y + th + pad + 15);
    rounded_rect(
        ctx.canvas_mut(),
        price_box.x0,
        price_box.y0,
        price_box.x1 - 1,
        price_box.y1 - 1,
        22,
        ShapeStyle::fill(BLUE),
    );
    ctx.text(&price.text, &price.font, x, y, Rgba8::WHITE)?;
    ctx.place(ElementKind::Price, price_box);

    let font = ctx.font(15.0, true);
    for (i, line) in bonus_lines(build, BONUS_MARKER, BONUS_BUDGET)
        .iter()
        .enumerate()
    {
        let y = 1020 + i as i32 * 28;
        let tw = text_width(ctx, line, &font)?;
        let (x, pad) = ((W - tw) / 2, 8);
        let badge = PixelRect::inclusive(x - pad, y - pad, x + tw + pad, y + 20 + pad);
        rounded_rect(
            ctx.canvas_mut(),
            badge.x0,
            badge.y0,
            badge.x1 - 1,
            badge.y1 - 1,
            12,
            ShapeStyle::fill(GREEN.with_alpha(40)),
        );
        ctx.text(line, &font, x, y, GREEN)?;
        ctx.place(ElementKind::Bonus, badge);
    }
    Ok(())
}
