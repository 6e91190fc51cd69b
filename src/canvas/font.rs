use std::{
    collections::HashMap,
    fmt,
    path::{Path, PathBuf},
    sync::{Arc, OnceLock, RwLock},
};

use anyhow::Context;

use crate::foundation::error::{CardError, CardResult};

/// Loaded font file.
pub struct FontFace {
    path: PathBuf,
    bytes: Arc<Vec<u8>>,
}

impl FontFace {
    /// File the face was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw font bytes.
    pub fn bytes(&self) -> &Arc<Vec<u8>> {
        &self.bytes
    }
}

impl fmt::Debug for FontFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontFace")
            .field("path", &self.path)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Resolved font at a fixed pixel size.
#[derive(Clone, Debug)]
pub enum FontHandle {
    /// Outline font shaped through the text engine.
    Outline { face: Arc<FontFace>, size: f32 },
    /// Built-in 5x7 bitmap font, scaled by an integer factor.
    Builtin { scale: u32 },
}

impl FontHandle {
    /// Built-in handle approximating `size` pixels.
    pub fn builtin(size: f32) -> Self {
        let scale = if size.is_finite() {
            (size / 10.0).round().max(1.0) as u32
        } else {
            1
        };
        Self::Builtin { scale }
    }

    /// Requested pixel size (the built-in font reports its effective cell height).
    pub fn size(&self) -> f32 {
        match self {
            Self::Outline { size, .. } => *size,
            Self::Builtin { scale } => (builtin::CELL_H * scale) as f32,
        }
    }
}

/// Font chosen from a candidate list, plus the reason the built-in font was used, if it was.
#[derive(Clone, Debug)]
pub struct FontResolution {
    pub handle: FontHandle,
    pub fallback_reason: Option<String>,
}

/// First loadable candidate at `size` pixels, or the built-in font when none loads.
///
/// Never fails: the built-in font is the implicit last candidate of every list.
pub fn resolve_font(candidates: &[PathBuf], size: f32) -> FontResolution {
    let mut last_err = None;
    for path in candidates {
        match load_face(path) {
            Ok(face) => {
                return FontResolution {
                    handle: FontHandle::Outline { face, size },
                    fallback_reason: None,
                };
            }
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "font candidate skipped");
                last_err = Some(err);
            }
        }
    }
    let reason = match last_err {
        Some(err) => err.to_string(),
        None => CardError::font_unavailable("no font candidates configured").to_string(),
    };
    FontResolution {
        handle: FontHandle::builtin(size),
        fallback_reason: Some(reason),
    }
}

type FaceCache = RwLock<HashMap<PathBuf, Option<Arc<FontFace>>>>;

fn face_cache() -> &'static FaceCache {
    static CACHE: OnceLock<FaceCache> = OnceLock::new();
    CACHE.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Read and lightly validate a font file, memoized per path for the life of the process.
///
/// Failed paths are remembered too, so a missing candidate is probed once.
pub fn load_face(path: &Path) -> CardResult<Arc<FontFace>> {
    if let Ok(cache) = face_cache().read()
        && let Some(entry) = cache.get(path)
    {
        return entry.clone().ok_or_else(|| {
            CardError::font_unavailable(format!("{} could not be loaded", path.display()))
        });
    }

    let loaded = read_face(path);
    if let Ok(mut cache) = face_cache().write() {
        cache
            .entry(path.to_path_buf())
            .or_insert_with(|| loaded.as_ref().ok().cloned());
    }
    loaded
}

fn read_face(path: &Path) -> CardResult<Arc<FontFace>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("read font {}", path.display()))
        .map_err(|e| CardError::font_unavailable(format!("{e:#}")))?;
    if !looks_like_font(&bytes) {
        return Err(CardError::font_unavailable(format!(
            "{} is not a TrueType/OpenType file",
            path.display()
        )));
    }
    Ok(Arc::new(FontFace {
        path: path.to_path_buf(),
        bytes: Arc::new(bytes),
    }))
}

/// Magic-number check for sfnt containers and collections.
pub fn looks_like_font(bytes: &[u8]) -> bool {
    matches!(
        bytes.get(..4),
        Some([0x00, 0x01, 0x00, 0x00]) | Some(b"OTTO") | Some(b"true") | Some(b"ttcf")
    )
}

/// The built-in bitmap font.
pub mod builtin {
    /// Cell width in font units (5 glyph columns plus 1 spacing column).
    pub const CELL_W: u32 = 6;
    /// Cell height in font units (7 rows plus descender row).
    pub const CELL_H: u32 = 8;

    const BOX: [u8; 5] = [0x7F, 0x41, 0x41, 0x41, 0x7F];
    const ELLIPSIS: [u8; 5] = [0x40, 0x00, 0x40, 0x00, 0x40];
    const BULLET: [u8; 5] = [0x00, 0x1C, 0x1C, 0x1C, 0x00];

    // Columns, least significant bit on top. ASCII 0x20..=0x7E.
    const ASCII: [[u8; 5]; 95] = [
        [0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x5F, 0x00, 0x00],
        [0x00, 0x07, 0x00, 0x07, 0x00],
        [0x14, 0x7F, 0x14, 0x7F, 0x14],
        [0x24, 0x2A, 0x7F, 0x2A, 0x12],
        [0x23, 0x13, 0x08, 0x64, 0x62],
        [0x36, 0x49, 0x56, 0x20, 0x50],
        [0x00, 0x08, 0x07, 0x03, 0x00],
        [0x00, 0x1C, 0x22, 0x41, 0x00],
        [0x00, 0x41, 0x22, 0x1C, 0x00],
        [0x2A, 0x1C, 0x7F, 0x1C, 0x2A],
        [0x08, 0x08, 0x3E, 0x08, 0x08],
        [0x00, 0x80, 0x70, 0x30, 0x00],
        [0x08, 0x08, 0x08, 0x08, 0x08],
        [0x00, 0x00, 0x60, 0x60, 0x00],
        [0x20, 0x10, 0x08, 0x04, 0x02],
        [0x3E, 0x51, 0x49, 0x45, 0x3E],
        [0x00, 0x42, 0x7F, 0x40, 0x00],
        [0x72, 0x49, 0x49, 0x49, 0x46],
        [0x21, 0x41, 0x49, 0x4D, 0x33],
        [0x18, 0x14, 0x12, 0x7F, 0x10],
        [0x27, 0x45, 0x45, 0x45, 0x39],
        [0x3C, 0x4A, 0x49, 0x49, 0x31],
        [0x41, 0x21, 0x11, 0x09, 0x07],
        [0x36, 0x49, 0x49, 0x49, 0x36],
        [0x46, 0x49, 0x49, 0x29, 0x1E],
        [0x00, 0x00, 0x14, 0x00, 0x00],
        [0x00, 0x40, 0x34, 0x00, 0x00],
        [0x00, 0x08, 0x14, 0x22, 0x41],
        [0x14, 0x14, 0x14, 0x14, 0x14],
        [0x00, 0x41, 0x22, 0x14, 0x08],
        [0x02, 0x01, 0x59, 0x09, 0x06],
        [0x3E, 0x41, 0x5D, 0x59, 0x4E],
        [0x7C, 0x12, 0x11, 0x12, 0x7C],
        [0x7F, 0x49, 0x49, 0x49, 0x36],
        [0x3E, 0x41, 0x41, 0x41, 0x22],
        [0x7F, 0x41, 0x41, 0x41, 0x3E],
        [0x7F, 0x49, 0x49, 0x49, 0x41],
        [0x7F, 0x09, 0x09, 0x09, 0x01],
        [0x3E, 0x41, 0x41, 0x51, 0x73],
        [0x7F, 0x08, 0x08, 0x08, 0x7F],
        [0x00, 0x41, 0x7F, 0x41, 0x00],
        [0x20, 0x40, 0x41, 0x3F, 0x01],
        [0x7F, 0x08, 0x14, 0x22, 0x41],
        [0x7F, 0x40, 0x40, 0x40, 0x40],
        [0x7F, 0x02, 0x1C, 0x02, 0x7F],
        [0x7F, 0x04, 0x08, 0x10, 0x7F],
        [0x3E, 0x41, 0x41, 0x41, 0x3E],
        [0x7F, 0x09, 0x09, 0x09, 0x06],
        [0x3E, 0x41, 0x51, 0x21, 0x5E],
        [0x7F, 0x09, 0x19, 0x29, 0x46],
        [0x26, 0x49, 0x49, 0x49, 0x32],
        [0x03, 0x01, 0x7F, 0x01, 0x03],
        [0x3F, 0x40, 0x40, 0x40, 0x3F],
        [0x1F, 0x20, 0x40, 0x20, 0x1F],
        [0x3F, 0x40, 0x38, 0x40, 0x3F],
        [0x63, 0x14, 0x08, 0x14, 0x63],
        [0x03, 0x04, 0x78, 0x04, 0x03],
        [0x61, 0x59, 0x49, 0x4D, 0x43],
        [0x00, 0x7F, 0x41, 0x41, 0x41],
        [0x02, 0x04, 0x08, 0x10, 0x20],
        [0x00, 0x41, 0x41, 0x41, 0x7F],
        [0x04, 0x02, 0x01, 0x02, 0x04],
        [0x40, 0x40, 0x40, 0x40, 0x40],
        [0x00, 0x03, 0x07, 0x08, 0x00],
        [0x20, 0x54, 0x54, 0x78, 0x40],
        [0x7F, 0x28, 0x44, 0x44, 0x38],
        [0x38, 0x44, 0x44, 0x44, 0x28],
        [0x38, 0x44, 0x44, 0x28, 0x7F],
        [0x38, 0x54, 0x54, 0x54, 0x18],
        [0x00, 0x08, 0x7E, 0x09, 0x02],
        [0x18, 0xA4, 0xA4, 0x9C, 0x78],
        [0x7F, 0x08, 0x04, 0x04, 0x78],
        [0x00, 0x44, 0x7D, 0x40, 0x00],
        [0x20, 0x40, 0x40, 0x3D, 0x00],
        [0x7F, 0x10, 0x28, 0x44, 0x00],
        [0x00, 0x41, 0x7F, 0x40, 0x00],
        [0x7C, 0x04, 0x78, 0x04, 0x78],
        [0x7C, 0x08, 0x04, 0x04, 0x78],
        [0x38, 0x44, 0x44, 0x44, 0x38],
        [0xFC, 0x18, 0x24, 0x24, 0x18],
        [0x18, 0x24, 0x24, 0x18, 0xFC],
        [0x7C, 0x08, 0x04, 0x04, 0x08],
        [0x48, 0x54, 0x54, 0x54, 0x24],
        [0x04, 0x04, 0x3F, 0x44, 0x24],
        [0x3C, 0x40, 0x40, 0x20, 0x7C],
        [0x1C, 0x20, 0x40, 0x20, 0x1C],
        [0x3C, 0x40, 0x30, 0x40, 0x3C],
        [0x44, 0x28, 0x10, 0x28, 0x44],
        [0x4C, 0x90, 0x90, 0x90, 0x7C],
        [0x44, 0x64, 0x54, 0x4C, 0x44],
        [0x00, 0x08, 0x36, 0x41, 0x00],
        [0x00, 0x00, 0x77, 0x00, 0x00],
        [0x00, 0x41, 0x36, 0x08, 0x00],
        [0x02, 0x01, 0x02, 0x04, 0x02],
    ];

    /// Latin look-alike used for characters outside printable ASCII.
    fn substitute(ch: char) -> Option<char> {
        let sub = match ch {
            '\u{a0}' => ' ',
            '₽' => 'P',
            '★' | '✦' => '*',
            '✓' => 'v',
            '—' | '–' => '-',
            '«' => '<',
            '»' => '>',
            '×' => 'x',
            'А' => 'A',
            'Б' | 'В' => 'B',
            'Г' => 'G',
            'Д' => 'D',
            'Е' | 'Ё' | 'Э' => 'E',
            'Ж' | 'Х' => 'X',
            'З' => '3',
            'И' | 'Й' => 'N',
            'К' => 'K',
            'Л' => 'L',
            'М' => 'M',
            'Н' => 'H',
            'О' => 'O',
            'П' => 'P',
            'Р' => 'P',
            'С' => 'C',
            'Т' => 'T',
            'У' => 'Y',
            'Ф' => 'F',
            'Ц' | 'Ю' => 'U',
            'Ч' => '4',
            'Ш' | 'Щ' => 'W',
            'Ъ' | 'Ы' | 'Ь' => 'b',
            'Я' => 'R',
            'а' => 'a',
            'б' => '6',
            'в' | 'ъ' | 'ы' | 'ь' => 'b',
            'г' => 'r',
            'д' => 'd',
            'е' | 'ё' | 'э' => 'e',
            'ж' | 'х' => 'x',
            'з' => '3',
            'и' | 'й' | 'ц' | 'ю' => 'u',
            'к' => 'k',
            'л' => 'l',
            'м' => 'm',
            'н' => 'h',
            'о' => 'o',
            'п' => 'n',
            'р' => 'p',
            'с' => 'c',
            'т' => 't',
            'у' => 'y',
            'ф' => 'f',
            'ч' => '4',
            'ш' | 'щ' => 'w',
            'я' => 'r',
            _ => return None,
        };
        Some(sub)
    }

    /// Column bitmap of one character.
    pub fn glyph(ch: char) -> [u8; 5] {
        match ch {
            '…' => return ELLIPSIS,
            '•' => return BULLET,
            _ => {}
        }
        let ch = if ch.is_ascii() {
            ch
        } else {
            substitute(ch).unwrap_or('\u{7f}')
        };
        match ch as u32 {
            c @ 0x20..=0x7E => ASCII[(c - 0x20) as usize],
            _ => BOX,
        }
    }

    /// Whether `(col, row)` of the glyph for `ch` is inked.
    pub fn ink(ch: char, col: u32, row: u32) -> bool {
        if col >= 5 || row >= CELL_H {
            return false;
        }
        (glyph(ch)[col as usize] >> row) & 1 == 1
    }
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/font.rs"]
mod tests;
