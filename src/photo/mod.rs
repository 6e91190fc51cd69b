//! Source photo decoding and per-style normalization.

pub(crate) mod decode;
pub(crate) mod prepare;
