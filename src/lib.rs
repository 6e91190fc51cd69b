//! Promotional card renderer for assembled PC builds.
//!
//! A [`BuildSpec`] plus a style tag goes in; one or more 1200x1200 RGB cards come out. Styles
//! live in a closed [`REGISTRY`]; [`Engine`] (or the [`dispatch`] shortcut) is the only entry
//! point callers need. Missing photos and fonts never fail a render: they are replaced by a
//! placeholder image and a built-in bitmap font and reported as [`RenderWarning`]s.
#![forbid(unsafe_code)]

mod canvas;
mod config;
mod foundation;
mod model;
mod photo;
mod render;
mod series;
mod styles;

pub use canvas::format::{ellipsize, format_price};
pub use config::{ENV_FONT, ENV_FONT_BOLD, EngineConfig, FontConfig};
pub use foundation::core::{CARD_SIZE, PixelRect, Rgba8};
pub use foundation::error::{CardError, CardResult};
pub use model::build::{BuildSpec, ComponentField, PhotoSource, SpecEntry};
pub use render::dispatch::{Engine, ResolvedFont, dispatch};
pub use render::output::{
    CardRole, ElementKind, PlacedElement, RenderWarning, RenderedCard, SeriesRole,
};
pub use series::benchmarks::{Benchmark, ILLUSTRATIVE_BENCHMARKS};
pub use series::{SERIES_TAG, series_background};
pub use styles::{REGISTRY, StyleEntry, StyleOutput, StyleTag};
