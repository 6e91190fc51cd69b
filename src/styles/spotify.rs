//! Flat near-black card with a single green accent.

use crate::{
    canvas::{
        format::{ellipsize, format_price},
        shapes::{ShapeStyle, rect, rounded_rect},
        surface::Surface,
    },
    foundation::{
        core::{CARD_SIZE, PixelRect, Rgba8},
        error::CardResult,
    },
    model::build::BuildSpec,
    photo::prepare::PhotoRecipe,
    render::{context::RenderContext, output::ElementKind},
    styles::common::{MAX_SPEC_ROWS, bonus_lines, fit_text, place_photo},
};

const BLACK: Rgba8 = Rgba8::rgb(18, 18, 18);
const GREEN: Rgba8 = Rgba8::rgb(29, 185, 84);
const GRAY: Rgba8 = Rgba8::rgb(179, 179, 179);
const DARK_GRAY: Rgba8 = Rgba8::rgb(40, 40, 40);

const W: i32 = CARD_SIZE as i32;
const H: i32 = CARD_SIZE as i32;
const MARGIN: i32 = 50;

const PHOTO: PhotoRecipe = PhotoRecipe::contain(1000, 750).with_contrast(1.2);
const PHOTO_Y: i32 = 60;

const ACCENT_Y: i32 = 830;
const SPECS_Y: i32 = 850;
const SPECS_STEP: i32 = 50;
const VALUE_BUDGET: usize = 45;

const BONUS_MARKER: char = '•';
const BONUS_BUDGET: usize = 40;
// Below the fourth spec row, left of the price panel.
const BONUS_Y: i32 = 1080;
// Price panel stays clear of the bonus column.
const PRICE_MAX_WIDTH: i32 = 600;

pub(crate) fn render(ctx: &mut RenderContext<'_>, build: &BuildSpec) -> CardResult<()> {
    ctx.begin(Surface::filled(CARD_SIZE, CARD_SIZE, BLACK));

    let photo = ctx.photo(&build.photo, &PHOTO);
    place_photo(ctx, &photo, (W - photo.width() as i32) / 2, PHOTO_Y);

    let brand = ctx.config().brand.clone();
    let font = ctx.font(36.0, true);
    let r = ctx.text(&brand, &font, MARGIN, 30, GREEN)?;
    ctx.place(ElementKind::Brand, r);

    let font = ctx.font(24.0, true);
    for (i, entry) in build.spec_list().iter().take(MAX_SPEC_ROWS).enumerate() {
        let y = SPECS_Y + i as i32 * SPECS_STEP;
        let value = ellipsize(entry.value, VALUE_BUDGET);
        let r = ctx.text(&value, &font, MARGIN, y, Rgba8::WHITE)?;
        ctx.place(ElementKind::SpecRow, r);
    }

    let pad = 20;
    let price = fit_text(ctx, &format_price(build.price), 80.0, true, PRICE_MAX_WIDTH)?;
    let tw = price.width;
    let (x, y) = (W - tw - MARGIN, H - 130);
    let price_box = PixelRect::inclusive(x - pad, y - pad, x + tw + pad, y + 90 + pad);
    rounded_rect(
        ctx.canvas_mut(),
        price_box.x0,
        price_box.y0,
        price_box.x1 - 1,
        price_box.y1 - 1,
        15,
        ShapeStyle::fill(DARK_GRAY),
    );
    ctx.text(&price.text, &price.font, x, y, GREEN)?;
    ctx.place(ElementKind::Price, price_box);

    let font = ctx.font(18.0, true);
    for (i, line) in bonus_lines(build, BONUS_MARKER, BONUS_BUDGET)
        .iter()
        .enumerate()
    {
        let r = ctx.text(line, &font, MARGIN, BONUS_Y + i as i32 * 30, GRAY)?;
        ctx.place(ElementKind::Bonus, r);
    }

    rect(ctx.canvas_mut(), MARGIN, ACCENT_Y, W - MARGIN, ACCENT_Y + 3, GREEN);
    ctx.place(
        ElementKind::Decoration,
        PixelRect::inclusive(MARGIN, ACCENT_Y, W - MARGIN, ACCENT_Y + 3),
    );
    Ok(())
}
