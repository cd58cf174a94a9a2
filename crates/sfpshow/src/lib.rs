//! Transceiver EEPROM/DOM reporting for SONiC.
//!
//! This crate implements `sfpshow`, the utility behind `show interfaces
//! transceiver`. It reads transceiver state published by the platform
//! daemons and renders it as the familiar per-port text report: static
//! EEPROM identity fields, and on request the DOM (digital optical
//! monitoring) sensor and threshold sections.
//!
//! # Tables
//!
//! | Database | Table | Purpose |
//! |----------|-------|---------|
//! | STATE_DB | TRANSCEIVER_INFO | Static EEPROM identity fields |
//! | STATE_DB | TRANSCEIVER_DOM_SENSOR | Live DOM sensor readings |
//! | STATE_DB | TRANSCEIVER_DOM_THRESHOLD | DOM alarm/warning thresholds |
//! | APPL_DB | PORT_TABLE | Port enumeration |
//!
//! # Example
//!
//! ```ignore
//! use sonic_sfpshow::{Namespace, SfpShow, SonicDb};
//!
//! let namespace = Namespace::host_default("127.0.0.1", 6379);
//! let db = SonicDb::connect(&namespace).await?;
//! let mut show = SfpShow::new(db);
//! let ports = show.front_panel_ports().await?;
//! for (port, text) in show.eeprom_report(&ports, true).await? {
//!     println!("{port}: {text}");
//! }
//! ```

pub mod catalog;
pub mod compliance;
pub mod dom;
pub mod eeprom;
pub mod error;
pub mod format;
pub mod namespace;
pub mod natsort;
pub mod port;
pub mod show;
pub mod state_db;
pub mod tables;
pub mod types;

pub use eeprom::AdvertFormatter;
pub use error::{SfpShowError, SfpShowResult};
pub use namespace::Namespace;
pub use port::{PortClassifier, PrefixClassifier};
pub use show::{PresenceRow, SfpShow};
pub use state_db::{DbId, MemoryDb, SonicDb, StateStore};
pub use types::{FieldValue, SfpFamily, TransceiverRecord};
