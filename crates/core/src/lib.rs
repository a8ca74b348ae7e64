pub mod catalog;
pub mod derive;
pub mod domain;
pub mod error;
pub mod records;
pub mod storage;

use tracing::{info, warn};

use catalog::Catalog;
use domain::*;
use error::{Error, Result};
use records::RecordStore;
use storage::KeyValueStorage;

/// Whether mutations currently reach durable storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persistence {
    Durable,
    /// The last write failed; state lives only in this session until a write succeeds.
    MemoryOnly,
}

/// Result of persisting a mutation. The in-memory change is kept either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    MemoryOnly { reason: String },
}

/// Derived views, recomputed after every mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub progress: Progress,
    pub regions: Vec<RegionProgress>,
    pub visible: Vec<MountainId>,
}

impl Snapshot {
    fn compute(catalog: &Catalog, records: &RecordStore, filter: &Filter) -> Self {
        Self {
            progress: derive::overall_progress(catalog, records),
            regions: derive::regional_progress(catalog, records),
            visible: derive::visible_mountains(catalog, records, filter)
                .into_iter()
                .map(|m| m.id)
                .collect(),
        }
    }
}

/// The main entry point: one user's stamp rally over a catalog, backed by storage.
pub struct StampRally<S: KeyValueStorage> {
    catalog: Catalog,
    storage: S,
    records: RecordStore,
    filter: Filter,
    persistence: Persistence,
    snapshot: Snapshot,
}

impl<S: KeyValueStorage> StampRally<S> {
    /// Load persisted records from `storage`. Never fails; unreadable state starts empty.
    pub fn open(catalog: Catalog, storage: S) -> Self {
        let records = records::load(&storage);
        let filter = Filter::default();
        let snapshot = Snapshot::compute(&catalog, &records, &filter);
        info!(
            climbed = snapshot.progress.climbed,
            total = snapshot.progress.total,
            "stamp rally opened"
        );
        Self {
            catalog,
            storage,
            records,
            filter,
            persistence: Persistence::Durable,
            snapshot,
        }
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Create or replace the record for a catalog mountain.
    pub fn stamp(&mut self, id: MountainId, record: ClimbRecord) -> Result<SaveOutcome> {
        if !self.catalog.contains(id) {
            return Err(Error::UnknownMountain(id));
        }
        self.records = self.records.stamp(id, record);
        Ok(self.persist_and_recompute())
    }

    /// Remove the record for `id`. Removing an unstamped mountain changes nothing.
    pub fn remove(&mut self, id: MountainId) -> SaveOutcome {
        if !self.records.contains(id) {
            return SaveOutcome::Saved;
        }
        self.records = self.records.remove(id);
        self.persist_and_recompute()
    }

    /// Restrict the visible list to one region, or lift the restriction with `None`.
    pub fn set_region(&mut self, region: Option<Region>) {
        self.filter.region = region;
        self.recompute();
    }

    /// Set the search text matched against names and climb comments.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
        self.recompute();
    }

    /// Drop both the region and the search text.
    pub fn clear_filter(&mut self) {
        self.filter = Filter::default();
        self.recompute();
    }

    fn persist_and_recompute(&mut self) -> SaveOutcome {
        let outcome = match records::save(&mut self.storage, &self.records) {
            Ok(()) => {
                if self.persistence == Persistence::MemoryOnly {
                    info!("storage writable again, records persisted");
                }
                self.persistence = Persistence::Durable;
                SaveOutcome::Saved
            }
            Err(e) => {
                warn!(error = %e, "could not persist records, keeping them in memory");
                self.persistence = Persistence::MemoryOnly;
                SaveOutcome::MemoryOnly {
                    reason: e.to_string(),
                }
            }
        };
        self.recompute();
        outcome
    }

    fn recompute(&mut self) {
        self.snapshot = Snapshot::compute(&self.catalog, &self.records, &self.filter);
    }

    // ── Views ────────────────────────────────────────────────────────

    /// The mountains this rally is played over.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Every record held in memory, including ids the catalog no longer has.
    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    /// The climb record for `id`, if stamped.
    pub fn record(&self, id: MountainId) -> Option<&ClimbRecord> {
        self.records.get(id)
    }

    /// The current region and search filter.
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Whether the last write reached storage.
    pub fn persistence(&self) -> Persistence {
        self.persistence
    }

    /// All derived views as of the last mutation.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Overall climbed count and percentage.
    pub fn progress(&self) -> Progress {
        self.snapshot.progress
    }

    /// Per-region progress in canonical region order.
    pub fn regional_progress(&self) -> &[RegionProgress] {
        &self.snapshot.regions
    }

    /// Mountains passing the current filter, in catalog order.
    pub fn visible(&self) -> Vec<&Mountain> {
        self.snapshot
            .visible
            .iter()
            .filter_map(|id| self.catalog.get(*id))
            .collect()
    }

    /// Card view for a catalog mountain. `None` for ids outside the catalog.
    pub fn card(&self, id: MountainId) -> Option<MountainCard<'_>> {
        self.catalog
            .get(id)
            .map(|m| derive::mountain_card(m, &self.records))
    }

    /// Hand back the storage backend, e.g. to reopen it in a later session.
    pub fn into_storage(self) -> S {
        self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn dated(date: &str) -> ClimbRecord {
        ClimbRecord::new(date, None, None).unwrap()
    }

    #[test]
    fn test_open_empty() {
        let rally = StampRally::open(Catalog::builtin(), MemoryStorage::new());
        assert_eq!(rally.progress().climbed, 0);
        assert_eq!(rally.visible().len(), 100);
        assert_eq!(rally.persistence(), Persistence::Durable);
    }

    #[test]
    fn test_stamp_unknown_mountain_rejected() {
        let mut rally = StampRally::open(Catalog::builtin(), MemoryStorage::new());
        let err = rally.stamp(101, dated("2024-05-01")).unwrap_err();
        assert!(matches!(err, Error::UnknownMountain(101)));
        assert!(rally.records().is_empty());
    }

    #[test]
    fn test_snapshot_recomputed_on_filter_change() {
        let mut rally = StampRally::open(Catalog::builtin(), MemoryStorage::new());
        rally.set_region(Some(Region::Kyushu));
        assert_eq!(rally.snapshot().visible, vec![95, 96, 97, 98, 99, 100]);
        rally.set_query("岳");
        assert_eq!(rally.snapshot().visible, vec![99, 100]);
        rally.clear_filter();
        assert_eq!(rally.visible().len(), 100);
        assert!(rally.filter().is_empty());
    }

    #[test]
    fn test_snapshot_recomputed_on_stamp() {
        let mut rally = StampRally::open(Catalog::builtin(), MemoryStorage::new());
        rally.set_query("sunrise");
        assert!(rally.visible().is_empty());

        let record = ClimbRecord::new("2024-05-01", Some("sunrise!".to_string()), None).unwrap();
        assert_eq!(rally.stamp(1, record).unwrap(), SaveOutcome::Saved);
        assert_eq!(rally.snapshot().visible, vec![1]);
        assert_eq!(rally.progress().climbed, 1);
        assert_eq!(rally.regional_progress()[0].climbed, 1);
    }

    #[test]
    fn test_failed_save_keeps_memory_state() {
        let mut rally = StampRally::open(Catalog::builtin(), MemoryStorage::disabled());
        let outcome = rally.stamp(1, dated("2024-05-01")).unwrap();
        assert!(matches!(outcome, SaveOutcome::MemoryOnly { .. }));
        assert_eq!(rally.persistence(), Persistence::MemoryOnly);
        assert!(rally.record(1).is_some());
        assert_eq!(rally.progress().climbed, 1);
    }

    #[test]
    fn test_later_successful_save_restores_durable() {
        let photo = format!("data:image/png;base64,{}", "A".repeat(512));
        let mut rally = StampRally::open(
            Catalog::builtin(),
            MemoryStorage::new().with_quota(256),
        );

        let big = ClimbRecord::new("2024-05-01", None, Some(photo)).unwrap();
        let outcome = rally.stamp(1, big).unwrap();
        assert!(matches!(outcome, SaveOutcome::MemoryOnly { ref reason } if reason.contains("quota")));
        assert_eq!(rally.persistence(), Persistence::MemoryOnly);

        // Replacing the oversized record with a small one fits again
        assert_eq!(rally.stamp(1, dated("2024-05-01")).unwrap(), SaveOutcome::Saved);
        assert_eq!(rally.persistence(), Persistence::Durable);
    }

    #[test]
    fn test_remove_absent_does_not_write() {
        let mut rally = StampRally::open(Catalog::builtin(), MemoryStorage::disabled());
        assert_eq!(rally.remove(5), SaveOutcome::Saved);
        assert_eq!(rally.persistence(), Persistence::Durable);
    }

    #[test]
    fn test_card_view() {
        let mut rally = StampRally::open(Catalog::builtin(), MemoryStorage::new());
        rally.stamp(72, dated("2024-07-20")).unwrap();
        let card = rally.card(72).unwrap();
        assert!(card.climbed);
        assert_eq!(card.climb_date, Some("2024-07-20"));
        assert_eq!(card.mountain.name, "富士山");
        assert!(rally.card(0).is_none());
    }
}
