//! Pure views over catalog, records and filter. No I/O, no clock.

use crate::catalog::Catalog;
use crate::domain::{Filter, Mountain, MountainCard, Progress, RegionProgress, Region};
use crate::records::RecordStore;

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        100.0 * part as f64 / whole as f64
    }
}

/// Every stored record counts toward `climbed`, including ids the catalog no longer has.
pub fn overall_progress(catalog: &Catalog, store: &RecordStore) -> Progress {
    let climbed = store.len();
    let total = catalog.len();
    Progress {
        climbed,
        total,
        percent: percent(climbed, total),
    }
}

/// One entry per region in canonical order. Only catalog ids are counted.
pub fn regional_progress(catalog: &Catalog, store: &RecordStore) -> Vec<RegionProgress> {
    Region::ALL
        .iter()
        .map(|&region| {
            let total = catalog.count_in_region(region);
            let climbed = catalog
                .iter()
                .filter(|m| m.region == region && store.contains(m.id))
                .count();
            RegionProgress {
                region,
                climbed,
                total,
                percent: percent(climbed, total),
            }
        })
        .collect()
}

/// Catalog entries passing `filter`, in catalog order.
///
/// The query is a case-insensitive substring match against the mountain name or
/// the comment of its climb record.
pub fn visible_mountains<'a>(
    catalog: &'a Catalog,
    store: &RecordStore,
    filter: &Filter,
) -> Vec<&'a Mountain> {
    let query = filter.query.to_lowercase();
    catalog
        .iter()
        .filter(|m| filter.region.map_or(true, |r| m.region == r))
        .filter(|m| {
            if query.is_empty() {
                return true;
            }
            let comment = store
                .get(m.id)
                .and_then(|r| r.comment())
                .unwrap_or_default()
                .to_lowercase();
            m.name.to_lowercase().contains(&query) || comment.contains(&query)
        })
        .collect()
}

pub fn mountain_card<'a>(mountain: &'a Mountain, store: &'a RecordStore) -> MountainCard<'a> {
    let record = store.get(mountain.id);
    MountainCard {
        mountain,
        climbed: record.is_some(),
        climb_date: record.map(|r| r.climb_date()),
        has_comment: record.and_then(|r| r.comment()).is_some(),
        has_photo: record.and_then(|r| r.photo()).is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClimbRecord, MountainId};
    use proptest::prelude::*;

    fn latin_catalog() -> Catalog {
        let entries = [
            (1, "Fuji", Region::Chubu),
            (2, "Tateyama", Region::Chubu),
            (3, "Tsukuba", Region::Kanto),
            (4, "Ibuki", Region::Kinki),
            (5, "Fujiwara", Region::Kinki),
        ];
        Catalog::new(
            entries
                .into_iter()
                .map(|(id, name, region)| Mountain {
                    id,
                    name: name.to_string(),
                    elevation: 1000,
                    prefecture: "Test".to_string(),
                    region,
                    difficulty: 2,
                })
                .collect(),
        )
        .unwrap()
    }

    fn dated(date: &str) -> ClimbRecord {
        ClimbRecord::new(date, None, None).unwrap()
    }

    fn commented(comment: &str) -> ClimbRecord {
        ClimbRecord::new("2024-05-01", Some(comment.to_string()), None).unwrap()
    }

    fn ids(mountains: &[&Mountain]) -> Vec<MountainId> {
        mountains.iter().map(|m| m.id).collect()
    }

    fn query(q: &str) -> Filter {
        Filter {
            region: None,
            query: q.to_string(),
        }
    }

    // ── overall_progress ────────────────────────────────────────

    #[test]
    fn test_overall_progress_empty() {
        let progress = overall_progress(&Catalog::builtin(), &RecordStore::new());
        assert_eq!(progress.climbed, 0);
        assert_eq!(progress.total, 100);
        assert_eq!(progress.percent, 0.0);
    }

    #[test]
    fn test_overall_progress_counts_records() {
        let store = RecordStore::new()
            .stamp(1, dated("2024-05-01"))
            .stamp(72, dated("2024-07-20"));
        let progress = overall_progress(&Catalog::builtin(), &store);
        assert_eq!(progress.climbed, 2);
        assert_eq!(progress.percent, 2.0);
    }

    #[test]
    fn test_overall_progress_empty_catalog_does_not_divide_by_zero() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        let store = RecordStore::new().stamp(1, dated("2024-05-01"));
        let progress = overall_progress(&catalog, &store);
        assert_eq!(progress.climbed, 1);
        assert_eq!(progress.total, 0);
        assert_eq!(progress.percent, 0.0);
    }

    #[test]
    fn test_stale_id_counts_toward_overall_only() {
        let catalog = latin_catalog();
        let store = RecordStore::new()
            .stamp(1, dated("2024-05-01"))
            .stamp(999, commented("gone"));
        assert_eq!(overall_progress(&catalog, &store).climbed, 2);
        let regional_sum: usize = regional_progress(&catalog, &store)
            .iter()
            .map(|r| r.climbed)
            .sum();
        assert_eq!(regional_sum, 1);
        assert!(!ids(&visible_mountains(&catalog, &store, &query("gone"))).contains(&999));
    }

    // ── regional_progress ───────────────────────────────────────

    #[test]
    fn test_regional_progress_canonical_order_and_totals() {
        let catalog = latin_catalog();
        let store = RecordStore::new()
            .stamp(1, dated("2024-05-01"))
            .stamp(4, dated("2024-05-02"));
        let regions = regional_progress(&catalog, &store);

        assert_eq!(regions.len(), Region::ALL.len());
        assert_eq!(
            regions.iter().map(|r| r.region).collect::<Vec<_>>(),
            Region::ALL.to_vec()
        );

        let chubu = regions.iter().find(|r| r.region == Region::Chubu).unwrap();
        assert_eq!((chubu.climbed, chubu.total), (1, 2));
        assert_eq!(chubu.percent, 50.0);

        let hokkaido = regions.iter().find(|r| r.region == Region::Hokkaido).unwrap();
        assert_eq!((hokkaido.climbed, hokkaido.total), (0, 0));
        assert_eq!(hokkaido.percent, 0.0);
    }

    // ── visible_mountains ───────────────────────────────────────

    #[test]
    fn test_visible_no_filter_is_full_catalog_in_order() {
        let catalog = Catalog::builtin();
        let store = RecordStore::new().stamp(5, dated("2024-05-01"));
        let visible = visible_mountains(&catalog, &store, &Filter::default());
        let expected: Vec<MountainId> = catalog.iter().map(|m| m.id).collect();
        assert_eq!(ids(&visible), expected);
    }

    #[test]
    fn test_visible_region_filter() {
        let catalog = latin_catalog();
        let filter = Filter {
            region: Some(Region::Kinki),
            query: String::new(),
        };
        assert_eq!(
            ids(&visible_mountains(&catalog, &RecordStore::new(), &filter)),
            vec![4, 5]
        );
    }

    #[test]
    fn test_visible_query_is_case_insensitive() {
        let catalog = latin_catalog();
        let store = RecordStore::new();
        let upper = visible_mountains(&catalog, &store, &query("FUJI"));
        let lower = visible_mountains(&catalog, &store, &query("fuji"));
        assert_eq!(ids(&upper), vec![1, 5]);
        assert_eq!(ids(&upper), ids(&lower));
    }

    #[test]
    fn test_visible_query_matches_comment() {
        let catalog = latin_catalog();
        let store = RecordStore::new().stamp(3, commented("Beautiful SUNRISE"));
        assert_eq!(
            ids(&visible_mountains(&catalog, &store, &query("sunrise"))),
            vec![3]
        );
    }

    #[test]
    fn test_visible_region_and_query_combine() {
        let catalog = latin_catalog();
        let filter = Filter {
            region: Some(Region::Chubu),
            query: "fuji".to_string(),
        };
        assert_eq!(
            ids(&visible_mountains(&catalog, &RecordStore::new(), &filter)),
            vec![1]
        );
    }

    #[test]
    fn test_visible_matches_japanese_names() {
        let catalog = Catalog::builtin();
        let visible = visible_mountains(&catalog, &RecordStore::new(), &query("駒ヶ岳"));
        assert_eq!(ids(&visible), vec![23, 25, 74, 77]);
    }

    #[test]
    fn test_visible_unicode_case_folding() {
        let catalog = latin_catalog();
        let store = RecordStore::new().stamp(2, commented("ÉTÉ au sommet"));
        assert_eq!(
            ids(&visible_mountains(&catalog, &store, &query("été"))),
            vec![2]
        );
    }

    #[test]
    fn test_stamping_never_hides_a_mountain() {
        let catalog = latin_catalog();
        let store = RecordStore::new().stamp(1, dated("2024-05-01"));
        assert_eq!(
            ids(&visible_mountains(&catalog, &store, &Filter::default())),
            vec![1, 2, 3, 4, 5]
        );
    }

    // ── mountain_card ───────────────────────────────────────────

    #[test]
    fn test_card_unclimbed() {
        let catalog = latin_catalog();
        let store = RecordStore::new();
        let card = mountain_card(catalog.get(1).unwrap(), &store);
        assert!(!card.climbed);
        assert_eq!(card.climb_date, None);
        assert!(!card.has_comment && !card.has_photo);
    }

    #[test]
    fn test_card_climbed_with_extras() {
        let catalog = latin_catalog();
        let record = ClimbRecord::new(
            "2024-05-01",
            Some("clear".to_string()),
            Some("data:image/png;base64,AA".to_string()),
        )
        .unwrap();
        let store = RecordStore::new().stamp(1, record);
        let card = mountain_card(catalog.get(1).unwrap(), &store);
        assert!(card.climbed);
        assert_eq!(card.climb_date, Some("2024-05-01"));
        assert!(card.has_comment && card.has_photo);
    }

    // ── Properties ──────────────────────────────────────────────

    fn arb_store() -> impl Strategy<Value = RecordStore> {
        proptest::collection::btree_set(1u32..=100, 0..40).prop_map(|ids| {
            ids.into_iter()
                .map(|id| (id, ClimbRecord::new("2024-01-01", None, None).unwrap()))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_climbed_equals_record_count(store in arb_store()) {
            prop_assert_eq!(overall_progress(&Catalog::builtin(), &store).climbed, store.len());
        }

        #[test]
        fn prop_regional_sum_matches_overall(store in arb_store()) {
            let catalog = Catalog::builtin();
            let sum: usize = regional_progress(&catalog, &store).iter().map(|r| r.climbed).sum();
            prop_assert_eq!(sum, overall_progress(&catalog, &store).climbed);
        }

        #[test]
        fn prop_derivation_is_deterministic(store in arb_store(), q in "[a-z駒山]{0,2}") {
            let catalog = Catalog::builtin();
            let filter = Filter { region: None, query: q };
            prop_assert_eq!(
                visible_mountains(&catalog, &store, &filter),
                visible_mountains(&catalog, &store, &filter)
            );
            prop_assert_eq!(
                regional_progress(&catalog, &store),
                regional_progress(&catalog, &store)
            );
        }
    }
}
