mod data;

use std::collections::HashSet;

use crate::domain::{Mountain, MountainId, Region};
use crate::error::{Error, Result};

/// Immutable, ordered list of mountains. Order is display order.
#[derive(Debug, Clone)]
pub struct Catalog {
    mountains: Vec<Mountain>,
}

impl Catalog {
    /// The embedded 日本百名山 list, ids 1..=100.
    pub fn builtin() -> Self {
        let mountains = data::HYAKUMEIZAN
            .iter()
            .map(
                |&(id, name, elevation, prefecture, region, difficulty)| Mountain {
                    id,
                    name: name.to_string(),
                    elevation,
                    prefecture: prefecture.to_string(),
                    region,
                    difficulty,
                },
            )
            .collect();
        Self { mountains }
    }

    /// Build a catalog from arbitrary entries, enforcing descriptor invariants.
    pub fn new(mountains: Vec<Mountain>) -> Result<Self> {
        let mut seen: HashSet<MountainId> = HashSet::with_capacity(mountains.len());
        for m in &mountains {
            if m.id == 0 {
                return Err(Error::InvalidCatalog("mountain id must be positive".into()));
            }
            if !seen.insert(m.id) {
                return Err(Error::InvalidCatalog(format!("duplicate mountain id {}", m.id)));
            }
            if m.name.trim().is_empty() {
                return Err(Error::InvalidCatalog(format!("mountain {} has no name", m.id)));
            }
            if m.prefecture.trim().is_empty() {
                return Err(Error::InvalidCatalog(format!(
                    "mountain {} has no prefecture",
                    m.id
                )));
            }
            if m.elevation == 0 {
                return Err(Error::InvalidCatalog(format!(
                    "mountain {} has zero elevation",
                    m.id
                )));
            }
            if !(1..=5).contains(&m.difficulty) {
                return Err(Error::InvalidCatalog(format!(
                    "mountain {} difficulty {} outside 1..=5",
                    m.id, m.difficulty
                )));
            }
        }
        Ok(Self { mountains })
    }

    pub fn get(&self, id: MountainId) -> Option<&Mountain> {
        self.mountains.iter().find(|m| m.id == id)
    }

    pub fn contains(&self, id: MountainId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Mountain> {
        self.mountains.iter()
    }

    pub fn len(&self) -> usize {
        self.mountains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mountains.is_empty()
    }

    pub fn count_in_region(&self, region: Region) -> usize {
        self.mountains.iter().filter(|m| m.region == region).count()
    }
}
