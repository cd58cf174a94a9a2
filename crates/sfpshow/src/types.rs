//! Core transceiver domain types.
//!
//! A transceiver record is a flat field/value map read from STATE_DB. Values
//! arrive as strings; the sentinels `N/A` and `Unknown` carry meaning for the
//! renderer, so classification happens once at ingestion and the rest of the
//! crate works with [`FieldValue`] instead of raw strings.

use std::collections::HashMap;
use std::fmt;

/// Type field reported for RJ45 ports, which carry no EEPROM.
pub const RJ45_PORT_TYPE: &str = "RJ45";

/// Type field whose specification compliance is an opaque string rather than
/// a serialized map.
pub const QSFP_DD_8X_TYPE: &str = "QSFP-DD Double Density 8X Pluggable Transceiver";

const QSFP_DD_TYPE_PREFIX: &str = "QSFP-DD";
const QSFP_TYPE_PREFIX: &str = "QSFP";

/// Transceiver form-factor family, derived from the EEPROM type field.
///
/// The family decides which channel monitor catalog applies and how many
/// lanes a DOM dump reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SfpFamily {
    /// Single-lane SFP/SFP+/SFP28.
    Sfp,
    /// Four-lane QSFP/QSFP+/QSFP28.
    Qsfp,
    /// Eight-lane QSFP-DD.
    QsfpDd,
}

impl SfpFamily {
    /// Classifies a type field by prefix. Anything that is not a QSFP
    /// variant falls back to [`SfpFamily::Sfp`].
    pub fn from_type_field(type_field: &str) -> Self {
        if type_field.starts_with(QSFP_DD_TYPE_PREFIX) {
            SfpFamily::QsfpDd
        } else if type_field.starts_with(QSFP_TYPE_PREFIX) {
            SfpFamily::Qsfp
        } else {
            SfpFamily::Sfp
        }
    }

    /// Number of optical lanes reported in DOM dumps.
    pub fn channel_count(&self) -> usize {
        match self {
            SfpFamily::Sfp => 1,
            SfpFamily::Qsfp => 4,
            SfpFamily::QsfpDd => 8,
        }
    }
}

impl fmt::Display for SfpFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SfpFamily::Sfp => "SFP",
            SfpFamily::Qsfp => "QSFP",
            SfpFamily::QsfpDd => "QSFP-DD",
        };
        write!(f, "{name}")
    }
}

/// A single EEPROM/DOM field value with its sentinel states resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// The platform reported `N/A`; the line is suppressed entirely.
    NotApplicable,
    /// The platform reported `Unknown`; rendered verbatim, without a unit.
    Unknown,
    /// An ordinary value, rendered with the catalog unit when appropriate.
    Text(String),
}

impl FieldValue {
    pub fn classify(raw: String) -> Self {
        match raw.as_str() {
            "N/A" => FieldValue::NotApplicable,
            "Unknown" => FieldValue::Unknown,
            _ => FieldValue::Text(raw),
        }
    }

    /// Renderable text, or `None` when the line should be suppressed.
    pub fn text(&self) -> Option<&str> {
        match self {
            FieldValue::NotApplicable => None,
            FieldValue::Unknown => Some("Unknown"),
            FieldValue::Text(s) => Some(s),
        }
    }

    pub fn is_applicable(&self) -> bool {
        !matches!(self, FieldValue::NotApplicable)
    }
}

/// One transceiver's worth of STATE_DB fields, classified at ingestion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransceiverRecord {
    fields: HashMap<String, FieldValue>,
}

impl TransceiverRecord {
    pub fn from_raw(raw: HashMap<String, String>) -> Self {
        let fields = raw
            .into_iter()
            .map(|(key, value)| (key, FieldValue::classify(value)))
            .collect();
        TransceiverRecord { fields }
    }

    /// An empty record means the hash was absent, i.e. no module detected.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// The raw EEPROM type field, when present and applicable.
    pub fn type_field(&self) -> Option<&str> {
        self.fields.get(crate::catalog::keys::TYPE).and_then(FieldValue::text)
    }

    /// Form-factor family; a missing or suppressed type field reads as SFP.
    pub fn family(&self) -> SfpFamily {
        self.type_field().map(SfpFamily::from_type_field).unwrap_or(SfpFamily::Sfp)
    }

    pub fn is_rj45_type(&self) -> bool {
        self.type_field() == Some(RJ45_PORT_TYPE)
    }

    /// Folds another record's fields into this one. DOM dumps merge the
    /// sensor and threshold hashes into a single record before rendering.
    pub fn merge(&mut self, other: TransceiverRecord) {
        self.fields.extend(other.fields);
    }
}
