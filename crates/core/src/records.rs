use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::{debug, warn};

use crate::domain::{ClimbRecord, MountainId};
use crate::error::Result;
use crate::storage::KeyValueStorage;

/// Storage key holding the whole record map as one JSON object.
pub const STORAGE_KEY: &str = "climbedMountains";

/// Climbed mountains keyed by id. A missing key means "not climbed".
///
/// Serializes as `{"<id>": {"climbDate": ..., "comment"?: ..., "photo"?: ...}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RecordStore {
    records: BTreeMap<MountainId, ClimbRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of this store with `id` set to `record`, replacing any previous record.
    #[must_use]
    pub fn stamp(&self, id: MountainId, record: ClimbRecord) -> RecordStore {
        let mut records = self.records.clone();
        records.insert(id, record);
        RecordStore { records }
    }

    /// Copy of this store without `id`. Absent ids are a no-op.
    #[must_use]
    pub fn remove(&self, id: MountainId) -> RecordStore {
        let mut records = self.records.clone();
        records.remove(&id);
        RecordStore { records }
    }

    pub fn get(&self, id: MountainId) -> Option<&ClimbRecord> {
        self.records.get(&id)
    }

    pub fn contains(&self, id: MountainId) -> bool {
        self.records.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = MountainId> + '_ {
        self.records.keys().copied()
    }
}

impl FromIterator<(MountainId, ClimbRecord)> for RecordStore {
    fn from_iter<I: IntoIterator<Item = (MountainId, ClimbRecord)>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

/// Read the persisted record map. Never fails: unreadable or unparseable content
/// yields an empty store, malformed entries are dropped.
pub fn load(storage: &dyn KeyValueStorage) -> RecordStore {
    let raw = match storage.get_item(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(key = STORAGE_KEY, "no persisted records, starting empty");
            return RecordStore::new();
        }
        Err(e) => {
            warn!(key = STORAGE_KEY, error = %e, "storage unreadable, starting empty");
            return RecordStore::new();
        }
    };

    let entries = match serde_json::from_str::<JsonValue>(&raw) {
        Ok(JsonValue::Object(entries)) => entries,
        Ok(_) => {
            warn!(key = STORAGE_KEY, "persisted records are not a JSON object, starting empty");
            return RecordStore::new();
        }
        Err(e) => {
            warn!(key = STORAGE_KEY, error = %e, "persisted records are not valid JSON, starting empty");
            return RecordStore::new();
        }
    };

    let store: RecordStore = entries
        .into_iter()
        .filter_map(|(key, value)| parse_entry(&key, &value))
        .collect();
    debug!(count = store.len(), "loaded climb records");
    store
}

fn parse_entry(key: &str, value: &JsonValue) -> Option<(MountainId, ClimbRecord)> {
    // Only the canonical decimal form names an id; "01" or "+1" would shadow "1".
    let Some(id) = key
        .parse::<MountainId>()
        .ok()
        .filter(|id| id.to_string() == key)
    else {
        warn!(key, "dropping record with non-canonical id");
        return None;
    };
    let Some(fields) = value.as_object() else {
        warn!(id, "dropping record that is not an object");
        return None;
    };
    let text = |name: &str| {
        fields
            .get(name)
            .and_then(JsonValue::as_str)
            .map(str::to_string)
    };
    match ClimbRecord::new(text("climbDate").unwrap_or_default(), text("comment"), text("photo")) {
        Ok(record) => Some((id, record)),
        Err(_) => {
            warn!(id, "dropping record without a climb date");
            None
        }
    }
}

/// Overwrite the persisted record map with `store`.
pub fn save(storage: &mut dyn KeyValueStorage, store: &RecordStore) -> Result<()> {
    let json = serde_json::to_string(store)?;
    storage.set_item(STORAGE_KEY, &json)?;
    debug!(count = store.len(), bytes = json.len(), "saved climb records");
    Ok(())
}
