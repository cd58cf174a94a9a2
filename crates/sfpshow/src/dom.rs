//! DOM (digital optical monitoring) rendering.
//!
//! The layout is a family dispatch: QSFP and QSFP-DD print four sections in
//! fixed order, SFP folds the same data into two. Section headers always
//! print, even when every field underneath is missing or suppressed. The
//! SFP threshold section runs module before channel, the reverse of the
//! QSFP order; both orders are load-bearing for output compatibility.

use crate::catalog::{
    channel_monitor_fields, CHANNEL_THRESHOLD_FIELDS, MODULE_MONITOR_FIELDS,
    MODULE_THRESHOLD_FIELDS, SFP_CHANNEL_MONITOR_FIELDS,
};
use crate::format::{format_fields, INFO_INDENT, VALUE_INDENT};
use crate::types::{SfpFamily, TransceiverRecord};

/// Label column width for channel threshold lines.
pub const CHANNEL_THRESHOLD_ALIGN: usize = 18;

/// Label column width for module threshold lines.
pub const MODULE_THRESHOLD_ALIGN: usize = 15;

/// Renders the DOM section for a merged sensor/threshold record.
pub fn render_dom(family: SfpFamily, record: &TransceiverRecord) -> String {
    match family {
        SfpFamily::Qsfp | SfpFamily::QsfpDd => render_qsfp(family, record),
        SfpFamily::Sfp => render_sfp(record),
    }
}

fn render_qsfp(family: SfpFamily, record: &TransceiverRecord) -> String {
    let mut out = String::new();
    section(
        &mut out,
        "ChannelMonitorValues",
        &format_fields(record, channel_monitor_fields(family), VALUE_INDENT, 0),
    );
    section(
        &mut out,
        "ChannelThresholdValues",
        &format_fields(record, CHANNEL_THRESHOLD_FIELDS, VALUE_INDENT, CHANNEL_THRESHOLD_ALIGN),
    );
    section(
        &mut out,
        "ModuleMonitorValues",
        &format_fields(record, MODULE_MONITOR_FIELDS, VALUE_INDENT, 0),
    );
    section(
        &mut out,
        "ModuleThresholdValues",
        &format_fields(record, MODULE_THRESHOLD_FIELDS, VALUE_INDENT, MODULE_THRESHOLD_ALIGN),
    );
    out
}

fn render_sfp(record: &TransceiverRecord) -> String {
    let mut out = String::new();

    let mut monitor = String::new();
    monitor.push_str(&format_fields(record, SFP_CHANNEL_MONITOR_FIELDS, VALUE_INDENT, 0));
    monitor.push_str(&format_fields(record, MODULE_MONITOR_FIELDS, VALUE_INDENT, 0));
    section(&mut out, "MonitorData", &monitor);

    let mut threshold = String::new();
    threshold.push_str(&format_fields(
        record,
        MODULE_THRESHOLD_FIELDS,
        VALUE_INDENT,
        MODULE_THRESHOLD_ALIGN,
    ));
    threshold.push_str(&format_fields(
        record,
        CHANNEL_THRESHOLD_FIELDS,
        VALUE_INDENT,
        CHANNEL_THRESHOLD_ALIGN,
    ));
    section(&mut out, "ThresholdData", &threshold);

    out
}

fn section(out: &mut String, header: &str, body: &str) {
    out.push_str(INFO_INDENT);
    out.push_str(header);
    out.push_str(":\n");
    out.push_str(body);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn record(pairs: &[(&str, &str)]) -> TransceiverRecord {
        let raw: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        TransceiverRecord::from_raw(raw)
    }

    #[test]
    fn test_qsfp_layout() {
        let rec = record(&[
            ("rx1power", "0.3"),
            ("rx2power", "-1.2"),
            ("rx3power", "N/A"),
            ("rx4power", "0.1"),
            ("tx1bias", "6.5"),
            ("tx2bias", "6.5"),
            ("tx3bias", "6.5"),
            ("tx4bias", "6.5"),
            ("tx1power", "Unknown"),
            ("tx2power", "1.0"),
            ("tx3power", "1.0"),
            ("tx4power", "1.0"),
            ("temperature", "30.5"),
            ("voltage", "3.3"),
            ("rxpowerhighalarm", "3.4"),
            ("rxpowerlowalarm", "-13.5"),
            ("txbiashighalarm", "10.0"),
            ("txpowerhighalarm", "3.4"),
            ("temphighalarm", "75.0"),
            ("templowalarm", "-5.0"),
            ("vcchighalarm", "3.63"),
            ("vcclowalarm", "2.97"),
        ]);

        let expected = concat!(
            "        ChannelMonitorValues:\n",
            "            RX1Power: 0.3dBm\n",
            "            RX2Power: -1.2dBm\n",
            "            RX4Power: 0.1dBm\n",
            "            TX1Bias: 6.5mA\n",
            "            TX1Power: Unknown\n",
            "            TX2Bias: 6.5mA\n",
            "            TX2Power: 1.0dBm\n",
            "            TX3Bias: 6.5mA\n",
            "            TX3Power: 1.0dBm\n",
            "            TX4Bias: 6.5mA\n",
            "            TX4Power: 1.0dBm\n",
            "        ChannelThresholdValues:\n",
            "            RxPowerHighAlarm: 3.4dBm\n",
            "            RxPowerLowAlarm:  -13.5dBm\n",
            "            TxBiasHighAlarm:  10.0mA\n",
            "            TxPowerHighAlarm: 3.4dBm\n",
            "        ModuleMonitorValues:\n",
            "            Temperature: 30.5C\n",
            "            Vcc: 3.3Volts\n",
            "        ModuleThresholdValues:\n",
            "            TempHighAlarm: 75.0C\n",
            "            TempLowAlarm:  -5.0C\n",
            "            VccHighAlarm:  3.63Volts\n",
            "            VccLowAlarm:   2.97Volts\n",
        );
        assert_eq!(render_dom(SfpFamily::Qsfp, &rec), expected);
    }

    #[test]
    fn test_sfp_layout_folds_sections() {
        let rec = record(&[
            ("rx1power", "-0.5"),
            ("tx1bias", "7.0"),
            ("tx1power", "-1.0"),
            ("temperature", "25.0"),
            ("voltage", "3.3"),
            ("temphighalarm", "80.0"),
            ("rxpowerlowwarning", "-12.0"),
        ]);

        let expected = concat!(
            "        MonitorData:\n",
            "            RXPower: -0.5dBm\n",
            "            TXBias: 7.0mA\n",
            "            TXPower: -1.0dBm\n",
            "            Temperature: 25.0C\n",
            "            Vcc: 3.3Volts\n",
            "        ThresholdData:\n",
            "            TempHighAlarm: 80.0C\n",
            "            RxPowerLowWarning: -12.0dBm\n",
        );
        assert_eq!(render_dom(SfpFamily::Sfp, &rec), expected);
    }

    #[test]
    fn test_qsfp_dd_uses_eight_lanes_with_shared_thresholds() {
        let rec = record(&[
            ("rx8power", "0.2"),
            ("tx8bias", "6.1"),
            ("rxpowerhighalarm", "3.4"),
        ]);
        let out = render_dom(SfpFamily::QsfpDd, &rec);
        assert!(out.contains("            RX8Power: 0.2dBm\n"), "{out}");
        assert!(out.contains("            TX8Bias: 6.1mA\n"), "{out}");
        assert!(out.contains("            RxPowerHighAlarm: 3.4dBm\n"), "{out}");
    }

    #[test]
    fn test_headers_print_for_empty_record() {
        let empty = record(&[]);
        assert_eq!(
            render_dom(SfpFamily::Qsfp, &empty),
            concat!(
                "        ChannelMonitorValues:\n",
                "        ChannelThresholdValues:\n",
                "        ModuleMonitorValues:\n",
                "        ModuleThresholdValues:\n",
            )
        );
        assert_eq!(
            render_dom(SfpFamily::Sfp, &empty),
            concat!("        MonitorData:\n", "        ThresholdData:\n")
        );
    }
}
