//! Line formatting shared by the EEPROM and DOM renderers.
//!
//! Every report line follows the same shape: an indent, a `label: ` prefix
//! optionally left-justified to a fixed width, the value, and a unit suffix
//! glued on without a separating space.

use crate::catalog::FieldSpec;
use crate::types::{FieldValue, TransceiverRecord};

/// Indent for static info lines and DOM section headers.
pub const INFO_INDENT: &str = "        ";

/// Indent for DOM value lines, one level below the section header.
pub const VALUE_INDENT: &str = "            ";

/// Indent for sub-lines nested under a static info field.
pub const NESTED_INDENT: &str = "                ";

/// Renders one field line, or `None` when the value suppresses it.
///
/// The unit is dropped when the value is `Unknown` or already carries the
/// unit as a suffix; a `label_width` of zero leaves the label unpadded.
pub fn format_line(
    indent: &str,
    label: &str,
    label_width: usize,
    value: &FieldValue,
    unit: &str,
) -> Option<String> {
    let text = value.text()?;
    let suffix = if unit.is_empty() || matches!(value, FieldValue::Unknown) || text.ends_with(unit)
    {
        ""
    } else {
        unit
    };
    let label = format!("{label}: ");
    Some(format!("{indent}{label:<label_width$}{text}{suffix}\n"))
}

/// Renders a whole catalog against a record, in catalog order.
///
/// Fields missing from the record and fields reported `N/A` produce no line.
pub fn format_fields(
    record: &TransceiverRecord,
    catalog: &[FieldSpec],
    indent: &str,
    label_width: usize,
) -> String {
    let mut out = String::new();
    for spec in catalog {
        let Some(value) = record.get(spec.key) else {
            continue;
        };
        if let Some(line) = format_line(indent, spec.label, label_width, value, spec.unit) {
            out.push_str(&line);
        }
    }
    out
}
