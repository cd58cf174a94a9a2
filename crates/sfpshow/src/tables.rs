//! Table and key constants for the transceiver state schema.
//!
//! These match the STATE_DB/APPL_DB schema published by xcvrd and swss.

/// STATE_DB table holding static EEPROM identity fields.
pub const TRANSCEIVER_INFO_TABLE: &str = "TRANSCEIVER_INFO";

/// STATE_DB table holding DOM sensor readings.
pub const TRANSCEIVER_DOM_SENSOR_TABLE: &str = "TRANSCEIVER_DOM_SENSOR";

/// STATE_DB table holding DOM alarm/warning thresholds.
pub const TRANSCEIVER_DOM_THRESHOLD_TABLE: &str = "TRANSCEIVER_DOM_THRESHOLD";

/// APPL_DB table enumerating ports pushed down to the ASIC.
pub const APP_PORT_TABLE_NAME: &str = "PORT_TABLE";

/// STATE_DB key separator.
pub const STATE_DB_SEPARATOR: &str = "|";

/// APPL_DB key separator.
pub const APPL_DB_SEPARATOR: &str = ":";

/// STATE_DB key of a port's EEPROM info record.
pub fn info_key(port: &str) -> String {
    format!("{TRANSCEIVER_INFO_TABLE}{STATE_DB_SEPARATOR}{port}")
}

/// STATE_DB key of a port's DOM sensor record.
pub fn dom_sensor_key(port: &str) -> String {
    format!("{TRANSCEIVER_DOM_SENSOR_TABLE}{STATE_DB_SEPARATOR}{port}")
}

/// STATE_DB key of a port's DOM threshold record.
pub fn dom_threshold_key(port: &str) -> String {
    format!("{TRANSCEIVER_DOM_THRESHOLD_TABLE}{STATE_DB_SEPARATOR}{port}")
}

/// APPL_DB glob matching every port entry.
pub fn port_table_pattern() -> String {
    format!("{APP_PORT_TABLE_NAME}{APPL_DB_SEPARATOR}*")
}

/// APPL_DB key of one port entry.
pub fn port_table_key(port: &str) -> String {
    format!("{APP_PORT_TABLE_NAME}{APPL_DB_SEPARATOR}{port}")
}

/// Extracts the port name from an APPL_DB port table key.
///
/// The name is everything after the first separator, so names containing
/// further separators survive intact.
pub fn port_from_table_key(key: &str) -> Option<&str> {
    key.split_once(APPL_DB_SEPARATOR).map(|(_, port)| port)
}
