//! Integration tests for the transceiver report pipeline.
//!
//! Drives the public API end to end against an in-memory store: port
//! enumeration out of APPL_DB, EEPROM and DOM rendering out of STATE_DB,
//! and the presence table.

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sonic_sfpshow::show::{format_eeprom_report, presence_table};
    use sonic_sfpshow::{DbId, MemoryDb, PortClassifier, PrefixClassifier, SfpShow};

    fn seeded_db() -> MemoryDb {
        MemoryDb::new()
            .with_entry(DbId::ApplDb, "PORT_TABLE:Ethernet0", &[("admin_status", "up")])
            .with_entry(DbId::ApplDb, "PORT_TABLE:Ethernet4", &[("admin_status", "up")])
            .with_entry(DbId::ApplDb, "PORT_TABLE:Ethernet-BP4", &[("admin_status", "up")])
            .with_entry(DbId::ApplDb, "PORT_TABLE:PortChannel1", &[("admin_status", "up")])
            .with_entry(
                DbId::StateDb,
                "TRANSCEIVER_INFO|Ethernet0",
                &[
                    ("type", "QSFP28 or later"),
                    ("ext_identifier", "Power Class 3 Module (2.5W max.)"),
                    ("ext_rateselect_compliance", "Unknown"),
                    ("cable_type", "Length Cable Assembly(m)"),
                    ("cable_length", "3"),
                    ("nominal_bit_rate", "255"),
                    (
                        "specification_compliance",
                        "{'10/40G Ethernet Compliance Code': '40G Active Cable (XLPPI)'}",
                    ),
                    ("vendor_date", "2017-01-13"),
                    ("manufacturer", "Mellanox"),
                    ("vendor_oui", "00-02-c9"),
                    ("model", "MCP1600-C003"),
                    ("hardware_rev", "A2"),
                    ("serial", "MT1949VS08392"),
                    ("application_advertisement", "N/A"),
                ],
            )
            .with_entry(
                DbId::StateDb,
                "TRANSCEIVER_DOM_SENSOR|Ethernet0",
                &[
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
                ],
            )
            .with_entry(
                DbId::StateDb,
                "TRANSCEIVER_DOM_THRESHOLD|Ethernet0",
                &[
                    ("rxpowerhighalarm", "3.4"),
                    ("rxpowerlowalarm", "-13.5"),
                    ("txbiashighalarm", "10.0"),
                    ("txpowerhighalarm", "3.4"),
                    ("temphighalarm", "75.0"),
                    ("templowalarm", "-5.0"),
                    ("vcchighalarm", "3.63"),
                    ("vcclowalarm", "2.97"),
                ],
            )
    }

    const ETHERNET0_DETAIL: &str = concat!(
        "SFP EEPROM detected\n",
        "        Extended Identifier: Power Class 3 Module (2.5W max.)\n",
        "        Extended RateSelect Compliance: Unknown\n",
        "        Identifier: QSFP28 or later\n",
        "        Length Cable Assembly(m): 3\n",
        "        Nominal Bit Rate(100Mbs): 255\n",
        "        Specification compliance:\n",
        "                10/40G Ethernet Compliance Code: 40G Active Cable (XLPPI)\n",
        "        Vendor Date Code(YYYY-MM-DD Lot): 2017-01-13\n",
        "        Vendor Name: Mellanox\n",
        "        Vendor OUI: 00-02-c9\n",
        "        Vendor PN: MCP1600-C003\n",
        "        Vendor Rev: A2\n",
        "        Vendor SN: MT1949VS08392\n",
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

    #[tokio::test]
    async fn test_eeprom_detail_report_end_to_end() {
        let mut view = SfpShow::new(seeded_db());
        let ports = view.front_panel_ports().await.unwrap();
        assert_eq!(ports, vec!["Ethernet0", "Ethernet4"]);

        let report = view.eeprom_report(&ports, true).await.unwrap();
        assert_eq!(
            report,
            vec![
                ("Ethernet0".to_string(), ETHERNET0_DETAIL.to_string()),
                ("Ethernet4".to_string(), "SFP EEPROM Not detected\n".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_detail_mode_sorts_selected_ports() {
        let mut view = SfpShow::new(seeded_db());
        let ports = vec!["Ethernet1".to_string(), "Ethernet0".to_string()];
        let report = view.eeprom_report(&ports, true).await.unwrap();
        assert_eq!(
            report,
            vec![
                ("Ethernet0".to_string(), ETHERNET0_DETAIL.to_string()),
                ("Ethernet1".to_string(), "SFP EEPROM Not detected\n".to_string()),
            ]
        );

        let printed = format_eeprom_report(&report);
        assert!(printed.starts_with("Ethernet0: SFP EEPROM detected\n"), "{printed}");
        assert!(printed.contains("\nEthernet1: SFP EEPROM Not detected\n"), "{printed}");
    }

    #[tokio::test]
    async fn test_printed_form_prefixes_each_block() {
        let mut view = SfpShow::new(seeded_db());
        let ports = view.front_panel_ports().await.unwrap();
        let report = view.eeprom_report(&ports, false).await.unwrap();

        let printed = format_eeprom_report(&report);
        assert!(printed.starts_with("Ethernet0: SFP EEPROM detected\n"), "{printed}");
        assert!(printed.contains("\nEthernet4: SFP EEPROM Not detected\n"), "{printed}");
    }

    #[tokio::test]
    async fn test_eeprom_without_dom_stops_after_info() {
        let mut view = SfpShow::new(seeded_db());
        let report = view.eeprom_report(&["Ethernet0".to_string()], false).await.unwrap();
        let text = &report[0].1;
        assert!(text.ends_with("        Vendor SN: MT1949VS08392\n"), "{text}");
        assert!(!text.contains("ChannelMonitorValues"), "{text}");
    }

    #[tokio::test]
    async fn test_report_is_deterministic() {
        let mut view = SfpShow::new(seeded_db());
        let ports = view.front_panel_ports().await.unwrap();
        let first = view.eeprom_report(&ports, true).await.unwrap();
        let second = view.eeprom_report(&ports, true).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_sfp_module_uses_folded_dom_layout() {
        let db = MemoryDb::new()
            .with_entry(
                DbId::StateDb,
                "TRANSCEIVER_INFO|Ethernet8",
                &[("type", "SFP/SFP+/SFP28"), ("serial", "S777")],
            )
            .with_entry(
                DbId::StateDb,
                "TRANSCEIVER_DOM_SENSOR|Ethernet8",
                &[("rx1power", "-0.5"), ("temperature", "25.0")],
            );
        let mut view = SfpShow::new(db);
        let report = view.eeprom_report(&["Ethernet8".to_string()], true).await.unwrap();
        let text = &report[0].1;
        assert!(text.contains("        MonitorData:\n"), "{text}");
        assert!(text.contains("            RXPower: -0.5dBm\n"), "{text}");
        assert!(text.contains("        ThresholdData:\n"), "{text}");
        assert!(!text.contains("ChannelMonitorValues"), "{text}");
    }

    #[tokio::test]
    async fn test_rj45_platform_classifier() {
        struct CopperOn0;
        impl PortClassifier for CopperOn0 {
            fn is_front_panel(&self, port: &str) -> bool {
                PrefixClassifier.is_front_panel(port)
            }
            fn is_rj45(&self, port: &str) -> bool {
                port == "Ethernet0"
            }
        }

        let db = MemoryDb::new()
            .with_entry(DbId::ApplDb, "PORT_TABLE:Ethernet0", &[("admin_status", "up")])
            .with_entry(DbId::ApplDb, "PORT_TABLE:Ethernet4", &[("admin_status", "up")]);
        let mut view = SfpShow::new(db).with_classifier(CopperOn0);
        let ports = view.front_panel_ports().await.unwrap();
        let report = view.eeprom_report(&ports, false).await.unwrap();
        assert_eq!(
            report,
            vec![
                (
                    "Ethernet0".to_string(),
                    "SFP EEPROM is not applicable for RJ45 port\n".to_string()
                ),
                ("Ethernet4".to_string(), "SFP EEPROM Not detected\n".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_presence_report_end_to_end() {
        let mut view = SfpShow::new(seeded_db());
        let ports = view.front_panel_ports().await.unwrap();
        let rows = view.presence_report(&ports).await.unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].port, "Ethernet0");
        assert_eq!(rows[0].presence, "Present");
        assert_eq!(rows[1].port, "Ethernet4");
        assert_eq!(rows[1].presence, "Not present");

        let table = presence_table(&rows);
        assert!(table.contains("Port"), "{table}");
        assert!(table.contains("Presence"), "{table}");
        assert!(table.contains("Ethernet4"), "{table}");
    }
}
