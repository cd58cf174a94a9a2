//! Report orchestration.
//!
//! [`SfpShow`] owns a store handle for one namespace and turns it into the
//! two CLI reports: the per-port EEPROM detail dump and the presence table.
//! Rendering never fails per port; only store access errors abort a report.

use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing::instrument;

use crate::dom;
use crate::eeprom::{self, AdvertFormatter};
use crate::error::SfpShowResult;
use crate::natsort;
use crate::port::{PortClassifier, PrefixClassifier};
use crate::state_db::{DbId, StateStore};
use crate::tables;
use crate::types::TransceiverRecord;

/// Header line of a populated EEPROM block.
pub const EEPROM_DETECTED: &str = "SFP EEPROM detected";

/// Whole block for a port without a transceiver record.
pub const EEPROM_NOT_DETECTED: &str = "SFP EEPROM Not detected";

/// Whole block for a fixed copper port.
pub const EEPROM_NOT_APPLICABLE: &str = "SFP EEPROM is not applicable for RJ45 port";

pub const PRESENT: &str = "Present";
pub const NOT_PRESENT: &str = "Not present";

/// One row of the presence table.
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct PresenceRow {
    #[tabled(rename = "Port")]
    pub port: String,
    #[tabled(rename = "Presence")]
    pub presence: String,
}

/// Renders presence rows as a two-column text table.
pub fn presence_table(rows: &[PresenceRow]) -> String {
    Table::new(rows).with(Style::blank()).to_string()
}

/// Joins an EEPROM report into the printed form, one `port: text` block per
/// port. Block texts end in a newline, so consecutive blocks are separated
/// by a blank line.
pub fn format_eeprom_report(report: &[(String, String)]) -> String {
    let blocks: Vec<String> =
        report.iter().map(|(port, text)| format!("{port}: {text}")).collect();
    blocks.join("\n")
}

/// Builds transceiver reports from one namespace's databases.
pub struct SfpShow<S> {
    db: S,
    classifier: Box<dyn PortClassifier + Send + Sync>,
    advert: Option<Box<dyn AdvertFormatter + Send + Sync>>,
}

impl<S: StateStore> SfpShow<S> {
    pub fn new(db: S) -> Self {
        SfpShow {
            db,
            classifier: Box::new(PrefixClassifier),
            advert: None,
        }
    }

    /// Replaces the port classifier, builder style.
    pub fn with_classifier(
        mut self,
        classifier: impl PortClassifier + Send + Sync + 'static,
    ) -> Self {
        self.classifier = Box::new(classifier);
        self
    }

    /// Installs an application advertisement formatter, builder style.
    pub fn with_advert_formatter(
        mut self,
        advert: impl AdvertFormatter + Send + Sync + 'static,
    ) -> Self {
        self.advert = Some(Box::new(advert));
        self
    }

    /// Front panel ports known to this namespace, in natural order.
    pub async fn front_panel_ports(&mut self) -> SfpShowResult<Vec<String>> {
        let keys = self.db.keys(DbId::ApplDb, &tables::port_table_pattern()).await?;
        let mut ports: Vec<String> = keys
            .iter()
            .filter_map(|key| tables::port_from_table_key(key))
            .map(str::trim)
            .filter(|port| !port.is_empty() && self.classifier.is_front_panel(port))
            .map(str::to_string)
            .collect();
        ports.sort_by(|a, b| natsort::compare(a, b));
        Ok(ports)
    }

    /// Whether APPL_DB knows this port at all.
    pub async fn port_exists(&mut self, port: &str) -> SfpShowResult<bool> {
        let entry = self.db.get_all(DbId::ApplDb, &tables::port_table_key(port)).await?;
        Ok(!entry.is_empty())
    }

    /// EEPROM detail report for the given ports, sorted by port name.
    pub async fn eeprom_report(
        &mut self,
        ports: &[String],
        dump_dom: bool,
    ) -> SfpShowResult<Vec<(String, String)>> {
        let mut report = Vec::with_capacity(ports.len());
        for port in ports {
            let text = self.port_eeprom(port, dump_dom).await?;
            report.push((port.clone(), text));
        }
        report.sort_by(|a, b| natsort::compare(&a.0, &b.0));
        Ok(report)
    }

    /// Presence report for the given ports, sorted by port name.
    pub async fn presence_report(&mut self, ports: &[String]) -> SfpShowResult<Vec<PresenceRow>> {
        let mut rows = Vec::with_capacity(ports.len());
        for port in ports {
            let info = self.db.get_all(DbId::StateDb, &tables::info_key(port)).await?;
            let presence = if info.is_empty() { NOT_PRESENT } else { PRESENT };
            rows.push(PresenceRow {
                port: port.clone(),
                presence: presence.to_string(),
            });
        }
        rows.sort_by(|a, b| natsort::compare(&a.port, &b.port));
        Ok(rows)
    }

    /// One port's EEPROM block, always ending in a newline.
    #[instrument(skip(self))]
    async fn port_eeprom(&mut self, port: &str, dump_dom: bool) -> SfpShowResult<String> {
        let raw = self.db.get_all(DbId::StateDb, &tables::info_key(port)).await?;
        let info = TransceiverRecord::from_raw(raw);

        if info.is_empty() {
            if self.classifier.is_rj45(port) {
                return Ok(format!("{EEPROM_NOT_APPLICABLE}\n"));
            }
            return Ok(format!("{EEPROM_NOT_DETECTED}\n"));
        }
        // Copper ports may publish a minimal record; the type field still
        // marks them as RJ45.
        if info.is_rj45_type() {
            return Ok(format!("{EEPROM_NOT_APPLICABLE}\n"));
        }

        let mut text = format!("{EEPROM_DETECTED}\n");
        text.push_str(&eeprom::render_info(&info, self.advert_formatter()));

        if dump_dom {
            let sensor = self.db.get_all(DbId::StateDb, &tables::dom_sensor_key(port)).await?;
            let mut dom_record = TransceiverRecord::from_raw(sensor);
            let threshold =
                self.db.get_all(DbId::StateDb, &tables::dom_threshold_key(port)).await?;
            dom_record.merge(TransceiverRecord::from_raw(threshold));
            text.push_str(&dom::render_dom(info.family(), &dom_record));
        }
        Ok(text)
    }

    fn advert_formatter(&self) -> Option<&dyn AdvertFormatter> {
        self.advert.as_deref().map(|f| f as &dyn AdvertFormatter)
    }
}
