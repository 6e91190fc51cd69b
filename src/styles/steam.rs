//! Glass panels over a blurred, darkened copy of the photo.

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

const OVERLAY: Rgba8 = Rgba8::rgba(10, 15, 25, 180);
const LOGO_PANEL: Rgba8 = Rgba8::rgba(25, 35, 50, 200);
const PHOTO_CARD: Rgba8 = Rgba8::rgba(15, 20, 35, 200);
const SPECS_PANEL: Rgba8 = Rgba8::rgba(25, 35, 50, 220);
const SPEC_ROW: Rgba8 = Rgba8::rgba(40, 55, 75, 180);
const PRICE_BLUE: Rgba8 = Rgba8::rgb(66, 133, 244);
const BONUS_BLUE: Rgba8 = Rgba8::rgb(144, 202, 249);
const GLINT: Rgba8 = Rgba8::rgba(255, 255, 255, 40);

const BACKGROUND: PhotoRecipe = PhotoRecipe::cover(CARD_SIZE, CARD_SIZE).with_blur(15.0);
const PHOTO: PhotoRecipe = PhotoRecipe::contain(900, 400);

const PHOTO_CARD_Y: i32 = 150;
const SPECS_Y: i32 = 650;
const ROW_X: i32 = 140;
const ROW_STEP: i32 = 70;
const LINE_BUDGET: usize = 48;
const PRICE_PAD: i32 = 15;

const BONUS_MARKER: char = '✦';
const BONUS_BUDGET: usize = 40;

pub(crate) fn render(ctx: &mut RenderContext<'_>, build: &BuildSpec) -> CardResult<()> {
    let backdrop = ctx.photo(&build.photo, &BACKGROUND);
    let mut bg = Surface::from_rgb(&backdrop);
    let full = bg.bounds();
    bg.fill_rect(full, OVERLAY);
    ctx.begin(bg);

    rounded_rect(
        ctx.canvas_mut(),
        100,
        PHOTO_CARD_Y,
        1100,
        PHOTO_CARD_Y + 450,
        20,
        ShapeStyle::fill(PHOTO_CARD),
    );
    let photo = ctx.photo(&build.photo, &PHOTO);
    place_photo(ctx, &photo, 150, PHOTO_CARD_Y + 25);

    rect(ctx.canvas_mut(), 450, 40, 750, 110, LOGO_PANEL);
    let brand = ctx.config().brand.clone();
    let font = ctx.font(36.0, true);
    let r = ctx.text_middle(&brand, &font, 600, 75, Rgba8::WHITE)?;
    ctx.place(ElementKind::Brand, r.union(PixelRect::inclusive(450, 40, 750, 110)));

    rounded_rect(
        ctx.canvas_mut(),
        100,
        SPECS_Y,
        1100,
        SPECS_Y + 400,
        20,
        ShapeStyle::fill(SPECS_PANEL),
    );
    let font = ctx.font(28.0, true);
    for (i, entry) in build.spec_list().iter().take(MAX_SPEC_ROWS).enumerate() {
        let y = SPECS_Y + 50 + i as i32 * ROW_STEP;
        rounded_rect(
            ctx.canvas_mut(),
            ROW_X,
            y,
            1060,
            y + 50,
            10,
            ShapeStyle::fill(SPEC_ROW),
        );
        let line = ellipsize(&format!("{}: {}", entry.label(), entry.value), LINE_BUDGET);
        ctx.text_left_middle(&line, &font, ROW_X + 20, y + 25, Rgba8::WHITE)?;
        ctx.place(ElementKind::SpecRow, PixelRect::inclusive(ROW_X, y, 1060, y + 50));
    }

    let price_box = PixelRect::inclusive(ROW_X, SPECS_Y + 330, 500, SPECS_Y + 390);
    rounded_rect(
        ctx.canvas_mut(),
        price_box.x0,
        price_box.y0,
        price_box.x1 - 1,
        price_box.y1 - 1,
        10,
        ShapeStyle::fill(PRICE_BLUE),
    );
    let price = fit_text(
        ctx,
        &format_price(build.price),
        48.0,
        true,
        price_box.width() as i32 - 2 * PRICE_PAD,
    )?;
    let r = ctx.text_middle(
        &price.text,
        &price.font,
        (price_box.x0 + price_box.x1) / 2,
        SPECS_Y + 360,
        Rgba8::WHITE,
    )?;
    ctx.place(ElementKind::Price, price_box.union(r));

    let font = ctx.font(20.0, true);
    for (i, line) in bonus_lines(build, BONUS_MARKER, BONUS_BUDGET)
        .iter()
        .enumerate()
    {
        let y = SPECS_Y + 332 + i as i32 * 30;
        let r = ctx.text(line, &font, 550, y, BONUS_BLUE)?;
        ctx.place(ElementKind::Bonus, r);
    }

    for y in [PHOTO_CARD_Y, SPECS_Y] {
        rect(ctx.canvas_mut(), 120, y, 1080, y + 1, GLINT);
        ctx.place(ElementKind::Decoration, PixelRect::inclusive(120, y, 1080, y + 1));
    }
    Ok(())
}
