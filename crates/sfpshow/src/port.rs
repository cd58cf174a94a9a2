//! Port classification.
//!
//! APPL_DB port entries cover more than the front panel: multi-ASIC
//! platforms add backplane, inband, and recirculation ports that carry no
//! pluggable module and must not appear in transceiver reports. Whether a
//! front panel port is an RJ45 (fixed copper) port is platform knowledge,
//! so it sits behind the same trait.

/// Prefix shared by every ethernet port name.
pub const ETHERNET_PREFIX: &str = "Ethernet";

/// Internal backplane ports on multi-ASIC platforms.
pub const BACKPLANE_PREFIX: &str = "Ethernet-BP";

/// Inband ports used for control plane traffic.
pub const INBAND_PREFIX: &str = "Ethernet-IB";

/// Recirculation ports.
pub const RECIRC_PREFIX: &str = "Ethernet-Rec";

/// Decides which ports a transceiver report covers.
pub trait PortClassifier {
    /// True for ports with a physical cage on the front panel.
    fn is_front_panel(&self, port: &str) -> bool;

    /// True for fixed copper ports that cannot carry a module.
    fn is_rj45(&self, port: &str) -> bool;
}

/// Name-prefix classifier.
///
/// Good enough everywhere the standard SONiC naming convention holds; RJ45
/// detection needs platform data this classifier does not have, so it
/// reports none. Platforms with copper ports install their own classifier.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrefixClassifier;

impl PortClassifier for PrefixClassifier {
    fn is_front_panel(&self, port: &str) -> bool {
        port.starts_with(ETHERNET_PREFIX)
            && !port.starts_with(BACKPLANE_PREFIX)
            && !port.starts_with(INBAND_PREFIX)
            && !port.starts_with(RECIRC_PREFIX)
    }

    fn is_rj45(&self, _port: &str) -> bool {
        false
    }
}
