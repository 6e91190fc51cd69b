//! Red/black gaming card.

use kurbo::Point;

use crate::{
    canvas::{
        format::{ellipsize, format_price},
        gradient::bottom_fade,
        shapes::{ShapeStyle, polygon, rect, rounded_rect},
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

const RED: Rgba8 = Rgba8::rgb(227, 6, 19);
const BLACK: Rgba8 = Rgba8::rgb(13, 13, 13);
const LIGHT_GRAY: Rgba8 = Rgba8::rgb(200, 200, 200);
const GOLD: Rgba8 = Rgba8::rgb(255, 215, 0);

const W: i32 = CARD_SIZE as i32;
const H: i32 = CARD_SIZE as i32;

const PHOTO: PhotoRecipe = PhotoRecipe::contain(1200, 720);
const STRIPE_STEP: usize = 100;
const STRIPE_WIDTH: f64 = 50.0;

const RGB_STRIP_Y: i32 = 740;
const RGB_STRIP: [Rgba8; 6] = [
    Rgba8::rgb(255, 0, 0),
    Rgba8::rgb(255, 127, 0),
    Rgba8::rgb(255, 255, 0),
    Rgba8::rgb(0, 255, 0),
    Rgba8::rgb(0, 0, 255),
    Rgba8::rgb(139, 0, 255),
];

const SPECS_Y: i32 = 770;
const SPECS_STEP: i32 = 60;
const MARGIN: i32 = 40;
const VALUE_X: i32 = MARGIN + 200;
const VALUE_BUDGET: usize = 60;

const BONUS_MARKER: char = '★';
const BONUS_BUDGET: usize = 50;

pub(crate) fn render(ctx: &mut RenderContext<'_>, build: &BuildSpec) -> CardResult<()> {
    let mut bg = Surface::filled(CARD_SIZE, CARD_SIZE, BLACK);
    let stripe = RED.with_alpha(10);
    for i in (0..(W + H) as usize).step_by(STRIPE_STEP) {
        if i as i32 >= W {
            break;
        }
        let i = i as f64;
        polygon(
            &mut bg,
            &[
                Point::new(i, 0.0),
                Point::new(i + STRIPE_WIDTH, 0.0),
                Point::new(0.0, i + STRIPE_WIDTH),
                Point::new(0.0, i),
            ],
            stripe,
        );
    }
    ctx.begin(bg);

    let photo = ctx.photo(&build.photo, &PHOTO);
    let mut layer = Surface::from_rgb(&photo);
    bottom_fade(&mut layer, Rgba8::BLACK);
    place_layer(ctx, &layer, 0, 0, ElementKind::Photo);

    let brand = ctx.config().brand.clone();
    let font = ctx.font(48.0, true);
    let x = W - text_width(ctx, &brand, &font)? - MARGIN;
    ctx.text(&brand, &font, x + 3, 33, Rgba8::BLACK)?;
    let r = ctx.text(&brand, &font, x, 30, RED)?;
    ctx.place(ElementKind::Brand, r);

    let label_font = ctx.font(20.0, true);
    let value_font = ctx.font(22.0, false);
    for (i, entry) in build.spec_list().iter().take(MAX_SPEC_ROWS).enumerate() {
        let y = SPECS_Y + i as i32 * SPECS_STEP;
        let a = ctx.text(entry.label(), &label_font, MARGIN, y, RED)?;
        let value = ellipsize(entry.value, VALUE_BUDGET);
        let b = ctx.text(&value, &value_font, VALUE_X, y, LIGHT_GRAY)?;
        ctx.place(ElementKind::SpecRow, a.union(b));
    }

    let pad = 20;
    let price = fit_text(
        ctx,
        &format_price(build.price),
        72.0,
        true,
        W - 2 * MARGIN - 2 * pad,
    )?;
    let tw = price.width;
    let (x, y) = (W - tw - MARGIN, H - 120);
    rounded_rect(
        ctx.canvas_mut(),
        x - pad,
        y - pad,
        x + tw + pad,
        y + 80 + pad,
        15,
        ShapeStyle::fill(RED),
    );
    ctx.text(&price.text, &price.font, x, y, Rgba8::WHITE)?;
    ctx.place(
        ElementKind::Price,
        PixelRect::inclusive(x - pad, y - pad, x + tw + pad, y + 80 + pad),
    );

    let font = ctx.font(18.0, true);
    for (i, line) in bonus_lines(build, BONUS_MARKER, BONUS_BUDGET)
        .iter()
        .enumerate()
    {
        let r = ctx.text(line, &font, MARGIN, H - 200 + i as i32 * 30, GOLD)?;
        ctx.place(ElementKind::Bonus, r);
    }

    let segment = W / RGB_STRIP.len() as i32;
    for (i, color) in RGB_STRIP.iter().enumerate() {
        let x1 = i as i32 * segment;
        rect(
            ctx.canvas_mut(),
            x1,
            RGB_STRIP_Y,
            x1 + segment,
            RGB_STRIP_Y + 4,
            *color,
        );
    }
    ctx.place(
        ElementKind::Decoration,
        PixelRect::inclusive(0, RGB_STRIP_Y, W, RGB_STRIP_Y + 4),
    );
    Ok(())
}
