use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use hyakumeizan_core::domain::{MountainCard, Region};

use super::status::add_mountain_row;
use crate::Rally;

/// Extra narrowing by stamp state, on top of the region and search filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StampFilter {
    Any,
    Climbed,
    Unclimbed,
}

impl StampFilter {
    fn accepts(self, card: &MountainCard<'_>) -> bool {
        match self {
            StampFilter::Any => true,
            StampFilter::Climbed => card.climbed,
            StampFilter::Unclimbed => !card.climbed,
        }
    }
}

pub fn run(
    rally: &mut Rally,
    region: Option<Region>,
    search: Option<String>,
    stamp_filter: StampFilter,
) -> Result<()> {
    rally.set_region(region);
    rally.set_query(search.unwrap_or_default());

    let cards = matching_cards(rally, stamp_filter);

    if cards.is_empty() {
        println!("No mountains match the current filter.");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("No."),
        Cell::new("Mountain"),
        Cell::new("Region - Prefecture"),
        Cell::new("Elevation"),
        Cell::new("Difficulty"),
        Cell::new("Stamp"),
        Cell::new(""),
    ]);

    for card in &cards {
        add_mountain_row(&mut table, card);
    }

    let stamped = cards.iter().filter(|c| c.climbed).count();

    println!("{table}");
    println!();
    println!("  {} mountains shown ({} stamped)", cards.len(), stamped);
    println!();

    Ok(())
}

/// Cards for the visible mountains that also pass `stamp_filter`.
fn matching_cards(rally: &Rally, stamp_filter: StampFilter) -> Vec<MountainCard<'_>> {
    rally
        .visible()
        .into_iter()
        .filter_map(|m| rally.card(m.id))
        .filter(|card| stamp_filter.accepts(card))
        .collect()
}
