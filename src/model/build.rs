use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::{Deserialize, Serialize};

use crate::foundation::error::{CardError, CardResult};

/// Style tag used when a build record does not name one.
pub const DEFAULT_STYLE_TAG: &str = "msi";

const DEFAULT_WARRANTY_MONTHS: u32 = 36;

/// Structured description of one pre-built computer.
///
/// The record is owned by the caller and is only ever read by the renderers. Component fields are
/// free-form labels; an empty (or whitespace-only) optional field means "absent".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BuildSpec {
    /// Opaque identity used by collaborators for output naming.
    #[serde(default)]
    pub id: String,
    /// Optional listing title.
    #[serde(default)]
    pub name: String,
    /// Processor (required).
    pub cpu: String,
    /// Graphics card (required).
    pub gpu: String,
    /// Memory (required).
    pub ram: String,
    /// Storage (required).
    pub storage: String,
    /// Motherboard (optional).
    #[serde(default)]
    pub motherboard: String,
    /// Power supply (optional).
    #[serde(default)]
    pub psu: String,
    /// Case (optional).
    #[serde(default)]
    pub case: String,
    /// Cooling (optional).
    #[serde(default)]
    pub cooling: String,
    /// Price in rubles; fractional part is never displayed.
    #[serde(deserialize_with = "de_price")]
    pub price: f64,
    /// Multi-line bonus text, one bonus per line.
    #[serde(default)]
    pub bonuses: String,
    /// Style tag selecting the renderer.
    #[serde(default = "default_style")]
    pub style: String,
    /// Source photograph.
    #[serde(default)]
    pub photo: PhotoSource,
    /// Warranty length shown by the series hero slide.
    #[serde(default = "default_warranty_months")]
    pub warranty_months: u32,
}

fn default_style() -> String {
    DEFAULT_STYLE_TAG.to_owned()
}

fn default_warranty_months() -> u32 {
    DEFAULT_WARRANTY_MONTHS
}

fn de_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Num(f64),
        Text(String),
    }

    match Repr::deserialize(deserializer)? {
        Repr::Num(v) => Ok(v),
        Repr::Text(s) => s
            .trim()
            .replace([' ', '\u{a0}'], "")
            .replace(',', ".")
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid price \"{s}\""))),
    }
}

/// Where the source photograph comes from.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PhotoSource {
    /// No photo was supplied; renderers use a placeholder.
    #[default]
    None,
    /// Filesystem path to an encoded raster image.
    Path(PathBuf),
    /// Encoded raster bytes already held in memory.
    #[serde(skip)]
    Bytes(Arc<Vec<u8>>),
}

impl PhotoSource {
    /// Resolve a relative path against `base`; other sources are returned unchanged.
    pub fn resolved_against(&self, base: &Path) -> Self {
        match self {
            Self::Path(p) if p.is_relative() => Self::Path(base.join(p)),
            other => other.clone(),
        }
    }
}

/// Physical component slots, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentField {
    /// Processor.
    Cpu,
    /// Graphics card.
    Gpu,
    /// Memory.
    Ram,
    /// Storage.
    Storage,
    /// Motherboard.
    Motherboard,
    /// Power supply.
    Psu,
    /// Case.
    Case,
    /// Cooling.
    Cooling,
}

impl ComponentField {
    /// Every slot in the fixed display order.
    pub const ALL: [Self; 8] = [
        Self::Cpu,
        Self::Gpu,
        Self::Ram,
        Self::Storage,
        Self::Motherboard,
        Self::Psu,
        Self::Case,
        Self::Cooling,
    ];

    /// Field name as it appears in build records.
    pub fn key(self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Gpu => "gpu",
            Self::Ram => "ram",
            Self::Storage => "storage",
            Self::Motherboard => "motherboard",
            Self::Psu => "psu",
            Self::Case => "case",
            Self::Cooling => "cooling",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Cpu => "Процессор",
            Self::Gpu => "Видеокарта",
            Self::Ram => "Оперативка",
            Self::Storage => "Накопитель",
            Self::Motherboard => "Мат. плата",
            Self::Psu => "Блок питания",
            Self::Case => "Корпус",
            Self::Cooling => "Охлаждение",
        }
    }

    /// Icon glyph for styles that decorate labels.
    pub fn icon(self) -> char {
        match self {
            Self::Cpu => '▣',
            Self::Gpu => '▦',
            Self::Ram => '≡',
            Self::Storage => '◉',
            Self::Motherboard => '▤',
            Self::Psu => '⚡',
            Self::Case => '□',
            Self::Cooling => '❄',
        }
    }

    /// Whether a build must provide this field.
    pub fn is_required(self) -> bool {
        matches!(self, Self::Cpu | Self::Gpu | Self::Ram | Self::Storage)
    }
}

/// One `(label, value)` row of the derived spec list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpecEntry<'a> {
    /// Component slot the row came from.
    pub field: ComponentField,
    /// Trimmed field value.
    pub value: &'a str,
}

impl SpecEntry<'_> {
    /// Display label of the row.
    pub fn label(&self) -> &'static str {
        self.field.label()
    }

    /// Label prefixed with the component icon.
    pub fn label_with_icon(&self) -> String {
        format!("{} {}", self.field.icon(), self.field.label())
    }
}

impl BuildSpec {
    /// Build with the required fields set and everything else empty.
    pub fn new(
        cpu: impl Into<String>,
        gpu: impl Into<String>,
        ram: impl Into<String>,
        storage: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            cpu: cpu.into(),
            gpu: gpu.into(),
            ram: ram.into(),
            storage: storage.into(),
            motherboard: String::new(),
            psu: String::new(),
            case: String::new(),
            cooling: String::new(),
            price,
            bonuses: String::new(),
            style: default_style(),
            photo: PhotoSource::None,
            warranty_months: DEFAULT_WARRANTY_MONTHS,
        }
    }

    /// Raw value of a component slot.
    pub fn field(&self, field: ComponentField) -> &str {
        match field {
            ComponentField::Cpu => &self.cpu,
            ComponentField::Gpu => &self.gpu,
            ComponentField::Ram => &self.ram,
            ComponentField::Storage => &self.storage,
            ComponentField::Motherboard => &self.motherboard,
            ComponentField::Psu => &self.psu,
            ComponentField::Case => &self.case,
            ComponentField::Cooling => &self.cooling,
        }
    }

    /// Check the required-field and price contracts.
    pub fn validate(&self) -> CardResult<()> {
        for field in ComponentField::ALL {
            if field.is_required() && self.field(field).trim().is_empty() {
                return Err(CardError::invalid_field(field.key(), "must be non-empty"));
            }
        }
        if !self.price.is_finite() {
            return Err(CardError::invalid_field("price", "must be a finite number"));
        }
        if self.price < 0.0 {
            return Err(CardError::invalid_field("price", "must be >= 0"));
        }
        Ok(())
    }

    /// Derived spec list: the four required rows, then each non-empty optional row, in the fixed
    /// slot order.
    pub fn spec_list(&self) -> Vec<SpecEntry<'_>> {
        ComponentField::ALL
            .into_iter()
            .filter_map(|field| {
                let value = self.field(field).trim();
                if !field.is_required() && value.is_empty() {
                    return None;
                }
                Some(SpecEntry { field, value })
            })
            .collect()
    }

    /// Non-blank lines among the first `max` lines of the bonus text, trimmed.
    ///
    /// A blank line still uses up one of the `max` slots.
    pub fn bonus_lines(&self, max: usize) -> Vec<&str> {
        self.bonuses
            .lines()
            .take(max)
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }

    /// Whether the bonus text has any non-blank line.
    pub fn has_bonuses(&self) -> bool {
        self.bonuses.lines().any(|line| !line.trim().is_empty())
    }

    /// Warranty in whole years, never below one.
    pub fn warranty_years(&self) -> u32 {
        (self.warranty_months / 12).max(1)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/build.rs"]
mod tests;
