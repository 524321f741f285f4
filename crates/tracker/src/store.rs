use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use core_types::{Confidence, TradeDirection};
use serde::{Deserialize, Serialize};

use crate::error::TrackerError;

/// One raised alert, remembered so the scanner can hold its tongue for the
/// cooldown window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRecord {
    pub symbol: String,
    pub signal_type: TradeDirection,
    pub confidence: Confidence,
    pub criteria_met: u8,
    pub price: Option<f64>,
    pub sent_at: DateTime<Utc>,
}

/// The history key for one (symbol, direction) pair, e.g. `AAPL_CALL`.
pub fn cooldown_key(symbol: &str, signal_type: TradeDirection) -> String {
    format!("{symbol}_{signal_type}")
}

/// Last-alert storage keyed by [`cooldown_key`].
///
/// Only the scanner consults this store; the analysis pipeline never
/// touches it.
pub trait CooldownStore {
    fn get(&self, key: &str) -> Option<AlertRecord>;
    fn put(&mut self, key: &str, record: AlertRecord) -> Result<(), TrackerError>;
}

/// Volatile store for tests and one-shot scans.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: HashMap<String, AlertRecord>,
}

impl CooldownStore for InMemoryStore {
    fn get(&self, key: &str) -> Option<AlertRecord> {
        self.records.get(key).cloned()
    }

    fn put(&mut self, key: &str, record: AlertRecord) -> Result<(), TrackerError> {
        self.records.insert(key.to_string(), record);
        Ok(())
    }
}

/// Alert history persisted as a JSON map. The whole map is rewritten on
/// every `put`.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    records: HashMap<String, AlertRecord>,
}

impl JsonFileStore {
    /// Opens the history at `path`, starting empty when no file exists yet.
    pub fn load(path: PathBuf) -> Result<Self, TrackerError> {
        if !path.exists() {
            tracing::debug!(path = ?path, "no alert history on disk, starting fresh");
            return Ok(Self {
                path,
                records: HashMap::new(),
            });
        }
        let raw =
            fs::read_to_string(&path).map_err(|e| TrackerError::Load(path.clone(), e))?;
        let records = serde_json::from_str(&raw)
            .map_err(|e| TrackerError::Malformed(path.clone(), e))?;
        Ok(Self { path, records })
    }

    fn persist(&self) -> Result<(), TrackerError> {
        let raw = serde_json::to_string_pretty(&self.records)
            .map_err(|e| TrackerError::Malformed(self.path.clone(), e))?;
        fs::write(&self.path, raw).map_err(|e| TrackerError::Persist(self.path.clone(), e))
    }
}

impl CooldownStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<AlertRecord> {
        self.records.get(key).cloned()
    }

    fn put(&mut self, key: &str, record: AlertRecord) -> Result<(), TrackerError> {
        self.records.insert(key.to_string(), record);
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(symbol: &str) -> AlertRecord {
        AlertRecord {
            symbol: symbol.to_string(),
            signal_type: TradeDirection::Call,
            confidence: Confidence::High,
            criteria_met: 5,
            price: Some(102.75),
            sent_at: Utc.with_ymd_and_hms(2026, 3, 2, 14, 30, 0).unwrap(),
        }
    }

    #[test]
    fn cooldown_keys_join_symbol_and_direction() {
        assert_eq!(cooldown_key("AAPL", TradeDirection::Call), "AAPL_CALL");
        assert_eq!(cooldown_key("TSLA", TradeDirection::Put), "TSLA_PUT");
    }

    #[test]
    fn in_memory_store_round_trips_records() {
        let mut store = InMemoryStore::default();
        assert!(store.get("AAPL_CALL").is_none());
        store.put("AAPL_CALL", record("AAPL")).unwrap();
        let found = store.get("AAPL_CALL").unwrap();
        assert_eq!(found.symbol, "AAPL");
        assert_eq!(found.criteria_met, 5);
    }

    #[test]
    fn json_store_survives_a_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alert_history.json");

        let mut store = JsonFileStore::load(path.clone()).unwrap();
        assert!(store.get("AAPL_CALL").is_none());
        store.put("AAPL_CALL", record("AAPL")).unwrap();
        drop(store);

        let reloaded = JsonFileStore::load(path).unwrap();
        let found = reloaded.get("AAPL_CALL").unwrap();
        assert_eq!(found, record("AAPL"));
    }

    #[test]
    fn json_store_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alert_history.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(
            JsonFileStore::load(path),
            Err(TrackerError::Malformed(_, _))
        ));
    }
}
