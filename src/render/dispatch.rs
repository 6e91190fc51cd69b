use std::{path::PathBuf, sync::Arc};

use crate::{
    canvas::font::{FontHandle, resolve_font},
    config::EngineConfig,
    foundation::error::CardResult,
    model::build::BuildSpec,
    render::{
        context::RenderContext,
        output::{CardRole, RenderedCard, SeriesRole},
    },
    series::render_series,
    styles::{StyleOutput, StyleTag},
};

/// Font file a weight resolves to under a configuration.
#[derive(Clone, Debug)]
pub struct ResolvedFont {
    pub bold: bool,
    /// `None` when the built-in bitmap font is used.
    pub path: Option<PathBuf>,
    pub bytes: Option<Arc<Vec<u8>>>,
    pub fallback_reason: Option<String>,
}

/// Render entry point holding the engine configuration.
///
/// An `Engine` keeps no per-render state, so one instance can serve any number of calls,
/// including from several threads at once.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Regular and bold font resolution, in that order.
    pub fn resolved_fonts(&self) -> [ResolvedFont; 2] {
        [false, true].map(|bold| {
            let resolution = resolve_font(self.config.fonts.candidates(bold), 16.0);
            let (path, bytes) = match &resolution.handle {
                FontHandle::Outline { face, .. } => {
                    (Some(face.path().to_path_buf()), Some(Arc::clone(face.bytes())))
                }
                FontHandle::Builtin { .. } => (None, None),
            };
            ResolvedFont {
                bold,
                path,
                bytes,
                fallback_reason: resolution.fallback_reason,
            }
        })
    }

    /// Render the style named by `build.style`.
    pub fn render(&self, build: &BuildSpec) -> CardResult<Vec<RenderedCard>> {
        self.render_style(&build.style, build)
    }

    /// Look up `tag` and render every card its style produces: one card, or the full series.
    ///
    /// Unknown tags and invalid builds fail before any drawing happens.
    #[tracing::instrument(skip(self, build), fields(build = %build.id))]
    pub fn render_style(&self, tag: &str, build: &BuildSpec) -> CardResult<Vec<RenderedCard>> {
        let entry = StyleTag::parse(tag)?.entry();
        build.validate()?;

        let mut ctx = RenderContext::new(&self.config);
        let cards = match entry.output {
            StyleOutput::Single => {
                (entry.render)(&mut ctx, build)?;
                vec![ctx.finish(entry.tag_str, 1, CardRole::Single)]
            }
            StyleOutput::Series => render_series(&mut ctx, build)?,
        };
        for card in &cards {
            for warning in &card.warnings {
                tracing::debug!(card = card.number, %warning, "recovered during render");
            }
        }
        Ok(cards)
    }

    /// Exactly one card for `tag`; the series style yields its hero slide.
    #[tracing::instrument(skip(self, build), fields(build = %build.id))]
    pub fn render_single(&self, tag: StyleTag, build: &BuildSpec) -> CardResult<RenderedCard> {
        build.validate()?;
        let entry = tag.entry();
        let mut ctx = RenderContext::new(&self.config);
        (entry.render)(&mut ctx, build)?;
        let role = match entry.output {
            StyleOutput::Single => CardRole::Single,
            StyleOutput::Series => CardRole::Series(SeriesRole::Hero),
        };
        Ok(ctx.finish(entry.tag_str, 1, role))
    }
}

/// Render `build` in style `tag` with the default configuration.
pub fn dispatch(tag: &str, build: &BuildSpec) -> CardResult<Vec<RenderedCard>> {
    Engine::default().render_style(tag, build)
}

#[cfg(test)]
#[path = "../../tests/unit/render/dispatch.rs"]
mod tests;
