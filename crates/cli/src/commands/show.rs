use anyhow::{bail, Result};
use hyakumeizan_core::domain::MountainId;

use super::status::{difficulty_stars, format_size};
use crate::Rally;

pub fn run(rally: &Rally, id: MountainId) -> Result<()> {
    let Some(card) = rally.card(id) else {
        bail!("no mountain #{id} in the catalog (valid: 1-{})", rally.catalog().len());
    };
    let m = card.mountain;

    println!("#{} {}", m.id, m.name);
    println!("{}", "-".repeat(40));
    println!("  {} - {}", m.region, m.prefecture);
    println!("  {}m", m.elevation);
    println!("  Difficulty: {}", difficulty_stars(m.difficulty));
    println!();

    match rally.record(id) {
        Some(record) => {
            println!("  Stamped on {}", record.climb_date());
            if let Some(comment) = record.comment() {
                println!("  Comment:");
                for line in comment.lines() {
                    println!("    {line}");
                }
            }
            if let Some(photo) = record.photo() {
                println!("  Photo: {} ({})", photo_kind(photo), format_size(photo.len() as u64));
            }
        }
        None => println!("  Not climbed yet. Run `hyakumeizan stamp {id}` to stamp it."),
    }

    Ok(())
}

/// Media type of a data URL, for display only.
fn photo_kind(photo: &str) -> &str {
    photo
        .strip_prefix("data:")
        .and_then(|rest| rest.split([';', ',']).next())
        .filter(|kind| !kind.is_empty())
        .unwrap_or("encoded image")
}
