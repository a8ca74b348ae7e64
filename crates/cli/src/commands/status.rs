use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Color, ContentArrangement, Table};
use hyakumeizan_core::domain::{Mountain, MountainCard};

use crate::Rally;

const BAR_WIDTH: usize = 30;

pub fn run(rally: &Rally) -> Result<()> {
    let progress = rally.progress();

    println!();
    println!("  日本百名山スタンプラリー");
    println!("  ========================");
    println!();
    println!("  進捗 (Your Progress)");
    println!("  --------------------");
    println!(
        "   {}  {} / {}  ({})",
        progress_bar(progress.percent, BAR_WIDTH),
        progress.climbed,
        progress.total,
        format_percent(progress.percent)
    );

    let mut regions_table = Table::new();
    regions_table.load_preset(UTF8_FULL);
    regions_table.set_content_arrangement(ContentArrangement::Dynamic);
    regions_table.set_header(vec![
        Cell::new("Region"),
        Cell::new("Climbed"),
        Cell::new("Progress"),
        Cell::new("%"),
    ]);

    for r in rally.regional_progress() {
        let color = if r.total > 0 && r.climbed == r.total {
            Color::Green
        } else {
            Color::Reset
        };
        regions_table.add_row(vec![
            Cell::new(r.region.label()).fg(color),
            Cell::new(format!("{} / {}", r.climbed, r.total)).set_alignment(CellAlignment::Right),
            Cell::new(progress_bar(r.percent, 12)),
            Cell::new(format_percent(r.percent)).set_alignment(CellAlignment::Right),
        ]);
    }

    println!();
    println!("  Regions");
    println!("  -------");
    println!("{regions_table}");

    println!();
    println!("  Run 'hyakumeizan ls' to list the mountains.");
    println!();

    Ok(())
}

pub(crate) fn add_mountain_row(table: &mut Table, card: &MountainCard<'_>) {
    let m: &Mountain = card.mountain;

    let mut row: Vec<Cell> = vec![
        Cell::new(m.id).set_alignment(CellAlignment::Right),
        Cell::new(&m.name).fg(if card.climbed { Color::Green } else { Color::Reset }),
        Cell::new(format!("{} - {}", m.region, m.prefecture)),
        Cell::new(format!("{}m", m.elevation)).set_alignment(CellAlignment::Right),
        Cell::new(difficulty_stars(m.difficulty)),
    ];

    // Stamp column
    match card.climb_date {
        Some(date) => row.push(Cell::new(format!("\u{2714} {date}")).fg(Color::Green)),
        None => row.push(Cell::new("\u{2014}").fg(Color::DarkGrey)),
    }

    // Extras column
    row.push(Cell::new(extras_label(card.has_photo, card.has_comment)));

    table.add_row(row);
}

pub(crate) fn extras_label(has_photo: bool, has_comment: bool) -> String {
    let mut parts = Vec::new();
    if has_photo {
        parts.push("photo");
    }
    if has_comment {
        parts.push("comment");
    }
    parts.join(", ")
}

/// Five-step rating rendered as filled and empty stars.
pub(crate) fn difficulty_stars(rating: u8) -> String {
    (0..5u8)
        .map(|i| if i < rating { '\u{2605}' } else { '\u{2606}' })
        .collect()
}

pub(crate) fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!(
        "[{}{}]",
        "\u{2588}".repeat(filled),
        "\u{2591}".repeat(width - filled)
    )
}

pub(crate) fn format_percent(percent: f64) -> String {
    format!("{percent:.1}%")
}

pub(crate) fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    match bytes {
        b if b >= MB => format!("{:.1} MB", b as f64 / MB as f64),
        b if b >= KB => format!("{:.1} KB", b as f64 / KB as f64),
        b => format!("{} B", b),
    }
}
