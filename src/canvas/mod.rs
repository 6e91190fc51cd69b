//! CPU raster primitives: the premultiplied surface, compositing, gradients, shapes, shadows,
//! blur, fonts and text.

pub(crate) mod blur;
pub(crate) mod composite;
pub(crate) mod font;
pub(crate) mod format;
pub(crate) mod gradient;
pub(crate) mod shadow;
pub(crate) mod shapes;
pub(crate) mod surface;
pub(crate) mod text;
