//! State store access.
//!
//! The report only ever reads two things: whole hashes (`HGETALL`) and key
//! listings (`KEYS`), so [`StateStore`] exposes exactly that. The live
//! implementation talks to the per-namespace redis instances; [`MemoryDb`]
//! backs tests.

use std::collections::HashMap;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tracing::debug;

use crate::error::{SfpShowError, SfpShowResult};
use crate::namespace::Namespace;

/// SONiC database selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DbId {
    /// APPL_DB, application state pushed towards the ASIC.
    ApplDb,
    /// STATE_DB, operational state reported back by the platform.
    StateDb,
}

impl DbId {
    /// Redis database index.
    pub fn id(&self) -> u8 {
        match self {
            DbId::ApplDb => 0,
            DbId::StateDb => 6,
        }
    }

    /// Conventional database name.
    pub fn name(&self) -> &'static str {
        match self {
            DbId::ApplDb => "APPL_DB",
            DbId::StateDb => "STATE_DB",
        }
    }
}

/// Read-only view of the SONiC databases consumed by the report.
///
/// `get_all` returns an empty map for a missing key; absence is data here
/// (it means "no transceiver detected"), not an error.
#[async_trait]
pub trait StateStore {
    async fn get_all(&mut self, db: DbId, key: &str) -> SfpShowResult<HashMap<String, String>>;

    async fn keys(&mut self, db: DbId, pattern: &str) -> SfpShowResult<Vec<String>>;
}

/// Live store backed by one redis connection per database.
pub struct SonicDb {
    appl_db: ConnectionManager,
    state_db: ConnectionManager,
}

impl SonicDb {
    /// Connects to both databases of one namespace.
    pub async fn connect(namespace: &Namespace) -> SfpShowResult<Self> {
        let appl_db = open(namespace, DbId::ApplDb).await?;
        let state_db = open(namespace, DbId::StateDb).await?;
        debug!(namespace = namespace.label(), "connected to redis");
        Ok(SonicDb { appl_db, state_db })
    }

    fn connection(&mut self, db: DbId) -> &mut ConnectionManager {
        match db {
            DbId::ApplDb => &mut self.appl_db,
            DbId::StateDb => &mut self.state_db,
        }
    }
}

async fn open(namespace: &Namespace, db: DbId) -> SfpShowResult<ConnectionManager> {
    let url = namespace.redis_url(db);
    let client = redis::Client::open(url.as_str())
        .map_err(|source| SfpShowError::connection(url.clone(), source))?;
    client
        .get_connection_manager()
        .await
        .map_err(|source| SfpShowError::connection(url, source))
}

#[async_trait]
impl StateStore for SonicDb {
    async fn get_all(&mut self, db: DbId, key: &str) -> SfpShowResult<HashMap<String, String>> {
        let values: HashMap<String, String> = self
            .connection(db)
            .hgetall(key)
            .await
            .map_err(|source| SfpShowError::database("hgetall", source))?;
        Ok(values)
    }

    async fn keys(&mut self, db: DbId, pattern: &str) -> SfpShowResult<Vec<String>> {
        let keys: Vec<String> = self
            .connection(db)
            .keys(pattern)
            .await
            .map_err(|source| SfpShowError::database("keys", source))?;
        Ok(keys)
    }
}

/// In-memory store for tests.
///
/// Implements only the pattern shape the crate itself issues, a literal
/// prefix with a trailing `*`.
#[derive(Debug, Default, Clone)]
pub struct MemoryDb {
    entries: HashMap<(DbId, String), HashMap<String, String>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one hash entry, builder style.
    pub fn with_entry(mut self, db: DbId, key: &str, fields: &[(&str, &str)]) -> Self {
        let map = fields.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        self.entries.insert((db, key.to_string()), map);
        self
    }
}

#[async_trait]
impl StateStore for MemoryDb {
    async fn get_all(&mut self, db: DbId, key: &str) -> SfpShowResult<HashMap<String, String>> {
        Ok(self
            .entries
            .get(&(db, key.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    async fn keys(&mut self, db: DbId, pattern: &str) -> SfpShowResult<Vec<String>> {
        let matches = |key: &str| match pattern.strip_suffix('*') {
            Some(prefix) => key.starts_with(prefix),
            None => key == pattern,
        };
        let mut keys: Vec<String> = self
            .entries
            .keys()
            .filter(|(entry_db, key)| *entry_db == db && matches(key))
            .map(|(_, key)| key.clone())
            .collect();
        keys.sort();
        Ok(keys)
    }
}
