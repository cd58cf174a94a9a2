//! Namespace selection for multi-ASIC platforms.
//!
//! Each ASIC namespace runs its own redis instance reachable over a unix
//! socket, while single-ASIC platforms expose one instance over TCP. The
//! platform init scripts export the ASIC count; everything here is pure
//! bookkeeping around that.

use std::env;

use crate::state_db::DbId;

/// Environment variable exporting the platform ASIC count.
pub const NUM_ASICS_ENV: &str = "SONIC_NUM_ASICS";

/// Prefix of ASIC namespace names.
pub const ASIC_NAMESPACE_PREFIX: &str = "asic";

pub const DEFAULT_REDIS_HOST: &str = "127.0.0.1";
pub const DEFAULT_REDIS_PORT: u16 = 6379;

/// One redis endpoint, either the default instance or an ASIC namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    name: Option<String>,
    host: String,
    port: u16,
}

impl Namespace {
    /// The default (host) namespace, reached over TCP.
    pub fn host_default(host: impl Into<String>, port: u16) -> Self {
        Namespace { name: None, host: host.into(), port }
    }

    /// A named ASIC namespace, reached over its unix socket.
    pub fn asic(name: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Namespace { name: Some(name.into()), host: host.into(), port }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Display name for logging.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("default")
    }

    /// Connection URL for one database within this namespace.
    ///
    /// Namespace `asicN` maps to the socket `/var/run/redisN/redis.sock`;
    /// the database index selects the logical DB on that instance.
    pub fn redis_url(&self, db: DbId) -> String {
        match self.name.as_deref() {
            None => format!("redis://{}:{}/{}", self.host, self.port, db.id()),
            Some(name) => {
                let index = name.strip_prefix(ASIC_NAMESPACE_PREFIX).unwrap_or(name);
                format!("redis+unix:///var/run/redis{}/redis.sock?db={}", index, db.id())
            }
        }
    }
}

/// Number of ASICs on this platform, defaulting to one.
fn num_asics() -> usize {
    env::var(NUM_ASICS_ENV)
        .ok()
        .and_then(|value| value.parse().ok())
        .filter(|&count| count >= 1)
        .unwrap_or(1)
}

/// Whether this platform runs more than one ASIC.
pub fn is_multi_asic() -> bool {
    num_asics() > 1
}

/// Namespaces an invocation should visit.
///
/// An explicit `--namespace` wins; otherwise multi-ASIC platforms visit
/// every ASIC namespace and single-ASIC platforms just the default one.
pub fn discover(explicit: Option<&str>, host: &str, port: u16) -> Vec<Namespace> {
    discover_with_count(explicit, num_asics(), host, port)
}

fn discover_with_count(
    explicit: Option<&str>,
    asic_count: usize,
    host: &str,
    port: u16,
) -> Vec<Namespace> {
    if let Some(name) = explicit {
        return vec![Namespace::asic(name, host, port)];
    }
    if asic_count > 1 {
        (0..asic_count)
            .map(|index| Namespace::asic(format!("{ASIC_NAMESPACE_PREFIX}{index}"), host, port))
            .collect()
    } else {
        vec![Namespace::host_default(host, port)]
    }
}
