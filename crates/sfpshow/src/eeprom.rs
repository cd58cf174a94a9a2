//! Static EEPROM info rendering.
//!
//! Walks [`INFO_FIELDS`] in catalog order and prints one line per field at
//! the info indent. Four fields get special treatment: the cable type/length
//! pair collapses into a single line, specification compliance expands into
//! a nested block, and application advertisement goes through a pluggable
//! formatter hook.

use tracing::warn;

use crate::catalog::{keys, INFO_FIELDS};
use crate::compliance::parse_compliance_map;
use crate::format::{format_line, INFO_INDENT, NESTED_INDENT};
use crate::natsort;
use crate::types::{FieldValue, TransceiverRecord, QSFP_DD_8X_TYPE};

/// Hook for decoding the `application_advertisement` field.
///
/// The wire format differs per platform and CMIS revision, so rendering is
/// delegated. Returning `None` drops the line; without a formatter installed
/// the field never prints.
pub trait AdvertFormatter {
    fn format_advert(&self, raw: &str) -> Option<String>;
}

/// Renders the static info section of an EEPROM report.
pub fn render_info(record: &TransceiverRecord, advert: Option<&dyn AdvertFormatter>) -> String {
    let mut out = String::new();
    for spec in INFO_FIELDS {
        match spec.key {
            // Folded into the cable type line.
            keys::CABLE_LENGTH => {}
            keys::CABLE_TYPE => render_cable(record, &mut out),
            keys::SPECIFICATION_COMPLIANCE => render_compliance(record, spec.label, &mut out),
            keys::APPLICATION_ADVERTISEMENT => render_advert(record, spec.label, advert, &mut out),
            _ => {
                if let Some(value) = record.get(spec.key) {
                    if let Some(line) = format_line(INFO_INDENT, spec.label, 0, value, spec.unit) {
                        out.push_str(&line);
                    }
                }
            }
        }
    }
    out
}

/// Cable type and length print as one line, with the type text as the
/// label. Either half missing or suppressed drops the whole line.
fn render_cable(record: &TransceiverRecord, out: &mut String) {
    let cable_type = record.get(keys::CABLE_TYPE).and_then(FieldValue::text);
    let cable_length = record.get(keys::CABLE_LENGTH).and_then(FieldValue::text);
    if let (Some(cable_type), Some(cable_length)) = (cable_type, cable_length) {
        out.push_str(&format!("{INFO_INDENT}{cable_type}: {cable_length}\n"));
    }
}

fn render_compliance(record: &TransceiverRecord, label: &str, out: &mut String) {
    let Some(raw) = record.get(keys::SPECIFICATION_COMPLIANCE).and_then(FieldValue::text) else {
        return;
    };

    // The 8X QSFP-DD identifier reports compliance as plain text rather
    // than a serialized map.
    if record.type_field() == Some(QSFP_DD_8X_TYPE) {
        out.push_str(&format!("{INFO_INDENT}{label}: {raw}\n"));
        return;
    }

    out.push_str(&format!("{INFO_INDENT}{label}:\n"));
    match parse_compliance_map(raw) {
        Ok(mut pairs) => {
            pairs.sort_by(|a, b| natsort::compare(&a.0, &b.0));
            for (key, value) in &pairs {
                out.push_str(&format!("{NESTED_INDENT}{key}: {value}\n"));
            }
        }
        Err(err) => {
            warn!(error = %err, "malformed specification compliance field");
            out.push_str(&format!("{NESTED_INDENT}N/A\n"));
        }
    }
}

fn render_advert(
    record: &TransceiverRecord,
    label: &str,
    advert: Option<&dyn AdvertFormatter>,
    out: &mut String,
) {
    let Some(formatter) = advert else {
        return;
    };
    let Some(raw) = record.get(keys::APPLICATION_ADVERTISEMENT).and_then(FieldValue::text) else {
        return;
    };
    if let Some(text) = formatter.format_advert(raw) {
        out.push_str(&format!("{INFO_INDENT}{label}: {text}\n"));
    }
}
