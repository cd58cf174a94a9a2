//! Field catalogs for EEPROM and DOM rendering.
//!
//! Each catalog pairs a STATE_DB field key with its display label and unit
//! suffix, stored in the exact order the report prints them: static info
//! fields sort by label (ASCII), DOM fields by natural order of the key.
//! Renderers just walk the arrays.

use crate::types::SfpFamily;

/// One renderable field: where it comes from and how it prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// STATE_DB hash field name.
    pub key: &'static str,
    /// Display label, printed as `label: `.
    pub label: &'static str,
    /// Unit suffix appended directly after the value, or `""` for none.
    pub unit: &'static str,
}

const fn field(key: &'static str, label: &'static str, unit: &'static str) -> FieldSpec {
    FieldSpec { key, label, unit }
}

pub const POWER_UNIT: &str = "dBm";
pub const BIAS_UNIT: &str = "mA";
pub const TEMP_UNIT: &str = "C";
pub const VOLT_UNIT: &str = "Volts";

/// Field keys the static-info renderer treats specially.
pub mod keys {
    pub const TYPE: &str = "type";
    pub const CABLE_TYPE: &str = "cable_type";
    pub const CABLE_LENGTH: &str = "cable_length";
    pub const SPECIFICATION_COMPLIANCE: &str = "specification_compliance";
    pub const APPLICATION_ADVERTISEMENT: &str = "application_advertisement";
}

/// Static EEPROM info fields, in label order.
pub const INFO_FIELDS: &[FieldSpec] = &[
    field(keys::APPLICATION_ADVERTISEMENT, "Application Advertisement", ""),
    field("ext_identifier", "Extended Identifier", ""),
    field("ext_rateselect_compliance", "Extended RateSelect Compliance", ""),
    field(keys::TYPE, "Identifier", ""),
    field(keys::CABLE_TYPE, "Length", ""),
    field("nominal_bit_rate", "Nominal Bit Rate(100Mbs)", ""),
    field(keys::SPECIFICATION_COMPLIANCE, "Specification compliance", ""),
    field("vendor_date", "Vendor Date Code(YYYY-MM-DD Lot)", ""),
    field("manufacturer", "Vendor Name", ""),
    field("vendor_oui", "Vendor OUI", ""),
    field("model", "Vendor PN", ""),
    field("hardware_rev", "Vendor Rev", ""),
    field("serial", "Vendor SN", ""),
    field(keys::CABLE_LENGTH, "cable_length", ""),
];

/// Single-lane channel monitors (SFP).
pub const SFP_CHANNEL_MONITOR_FIELDS: &[FieldSpec] = &[
    field("rx1power", "RXPower", POWER_UNIT),
    field("tx1bias", "TXBias", BIAS_UNIT),
    field("tx1power", "TXPower", POWER_UNIT),
];

/// Four-lane channel monitors (QSFP).
pub const QSFP_CHANNEL_MONITOR_FIELDS: &[FieldSpec] = &[
    field("rx1power", "RX1Power", POWER_UNIT),
    field("rx2power", "RX2Power", POWER_UNIT),
    field("rx3power", "RX3Power", POWER_UNIT),
    field("rx4power", "RX4Power", POWER_UNIT),
    field("tx1bias", "TX1Bias", BIAS_UNIT),
    field("tx1power", "TX1Power", POWER_UNIT),
    field("tx2bias", "TX2Bias", BIAS_UNIT),
    field("tx2power", "TX2Power", POWER_UNIT),
    field("tx3bias", "TX3Bias", BIAS_UNIT),
    field("tx3power", "TX3Power", POWER_UNIT),
    field("tx4bias", "TX4Bias", BIAS_UNIT),
    field("tx4power", "TX4Power", POWER_UNIT),
];

/// Eight-lane channel monitors (QSFP-DD).
pub const QSFP_DD_CHANNEL_MONITOR_FIELDS: &[FieldSpec] = &[
    field("rx1power", "RX1Power", POWER_UNIT),
    field("rx2power", "RX2Power", POWER_UNIT),
    field("rx3power", "RX3Power", POWER_UNIT),
    field("rx4power", "RX4Power", POWER_UNIT),
    field("rx5power", "RX5Power", POWER_UNIT),
    field("rx6power", "RX6Power", POWER_UNIT),
    field("rx7power", "RX7Power", POWER_UNIT),
    field("rx8power", "RX8Power", POWER_UNIT),
    field("tx1bias", "TX1Bias", BIAS_UNIT),
    field("tx1power", "TX1Power", POWER_UNIT),
    field("tx2bias", "TX2Bias", BIAS_UNIT),
    field("tx2power", "TX2Power", POWER_UNIT),
    field("tx3bias", "TX3Bias", BIAS_UNIT),
    field("tx3power", "TX3Power", POWER_UNIT),
    field("tx4bias", "TX4Bias", BIAS_UNIT),
    field("tx4power", "TX4Power", POWER_UNIT),
    field("tx5bias", "TX5Bias", BIAS_UNIT),
    field("tx5power", "TX5Power", POWER_UNIT),
    field("tx6bias", "TX6Bias", BIAS_UNIT),
    field("tx6power", "TX6Power", POWER_UNIT),
    field("tx7bias", "TX7Bias", BIAS_UNIT),
    field("tx7power", "TX7Power", POWER_UNIT),
    field("tx8bias", "TX8Bias", BIAS_UNIT),
    field("tx8power", "TX8Power", POWER_UNIT),
];

/// Per-channel alarm/warning thresholds, shared by every family.
pub const CHANNEL_THRESHOLD_FIELDS: &[FieldSpec] = &[
    field("rxpowerhighalarm", "RxPowerHighAlarm", POWER_UNIT),
    field("rxpowerhighwarning", "RxPowerHighWarning", POWER_UNIT),
    field("rxpowerlowalarm", "RxPowerLowAlarm", POWER_UNIT),
    field("rxpowerlowwarning", "RxPowerLowWarning", POWER_UNIT),
    field("txbiashighalarm", "TxBiasHighAlarm", BIAS_UNIT),
    field("txbiashighwarning", "TxBiasHighWarning", BIAS_UNIT),
    field("txbiaslowalarm", "TxBiasLowAlarm", BIAS_UNIT),
    field("txbiaslowwarning", "TxBiasLowWarning", BIAS_UNIT),
    field("txpowerhighalarm", "TxPowerHighAlarm", POWER_UNIT),
    field("txpowerhighwarning", "TxPowerHighWarning", POWER_UNIT),
    field("txpowerlowalarm", "TxPowerLowAlarm", POWER_UNIT),
    field("txpowerlowwarning", "TxPowerLowWarning", POWER_UNIT),
];

/// Module-level temperature and supply voltage monitors.
pub const MODULE_MONITOR_FIELDS: &[FieldSpec] = &[
    field("temperature", "Temperature", TEMP_UNIT),
    field("voltage", "Vcc", VOLT_UNIT),
];

/// Module-level alarm/warning thresholds.
pub const MODULE_THRESHOLD_FIELDS: &[FieldSpec] = &[
    field("temphighalarm", "TempHighAlarm", TEMP_UNIT),
    field("temphighwarning", "TempHighWarning", TEMP_UNIT),
    field("templowalarm", "TempLowAlarm", TEMP_UNIT),
    field("templowwarning", "TempLowWarning", TEMP_UNIT),
    field("vcchighalarm", "VccHighAlarm", VOLT_UNIT),
    field("vcchighwarning", "VccHighWarning", VOLT_UNIT),
    field("vcclowalarm", "VccLowAlarm", VOLT_UNIT),
    field("vcclowwarning", "VccLowWarning", VOLT_UNIT),
];

/// Channel monitor catalog for a form-factor family.
pub fn channel_monitor_fields(family: SfpFamily) -> &'static [FieldSpec] {
    match family {
        SfpFamily::Sfp => SFP_CHANNEL_MONITOR_FIELDS,
        SfpFamily::Qsfp => QSFP_CHANNEL_MONITOR_FIELDS,
        SfpFamily::QsfpDd => QSFP_DD_CHANNEL_MONITOR_FIELDS,
    }
}
