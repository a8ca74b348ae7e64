use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{Local, NaiveDate};
use clap::Args;
use hyakumeizan_core::domain::{ClimbRecord, MountainId};
use hyakumeizan_core::SaveOutcome;

use crate::Rally;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Args)]
pub struct StampArgs {
    /// Mountain number (1-100)
    pub id: MountainId,

    /// Climb date, YYYY-MM-DD (default: today for a new stamp, unchanged for an update)
    #[arg(long)]
    pub date: Option<String>,

    /// Free-text memory of the climb
    #[arg(long, conflicts_with = "no_comment")]
    pub comment: Option<String>,

    /// Image file to attach (PNG, JPG, GIF, WebP)
    #[arg(long, conflicts_with = "no_photo")]
    pub photo: Option<PathBuf>,

    /// Drop the existing comment
    #[arg(long)]
    pub no_comment: bool,

    /// Drop the existing photo
    #[arg(long)]
    pub no_photo: bool,
}

pub fn stamp(rally: &mut Rally, args: StampArgs) -> Result<()> {
    let Some(mountain) = rally.catalog().get(args.id) else {
        bail!("no mountain #{} in the catalog", args.id);
    };
    let name = mountain.name.clone();
    let existing = rally.record(args.id).cloned();

    let today = Local::now().date_naive();
    let date = resolve_date(
        args.date.as_deref(),
        existing.as_ref().map(|r| r.climb_date()),
        today,
    )?;

    // An update starts from the current record, like the prefilled edit form.
    let comment = if args.no_comment {
        None
    } else {
        args.comment
            .or_else(|| existing.as_ref().and_then(|r| r.comment().map(str::to_string)))
    };
    let photo = match (&args.photo, args.no_photo) {
        (_, true) => None,
        (Some(path), false) => Some(photo_data_url(path)?),
        (None, false) => existing.as_ref().and_then(|r| r.photo().map(str::to_string)),
    };

    let record = ClimbRecord::new(date, comment, photo)?;
    let climb_date = record.climb_date().to_string();
    let outcome = rally.stamp(args.id, record)?;

    let verb = if existing.is_some() { "Updated" } else { "Stamped" };
    println!("{verb} #{} {} ({climb_date})", args.id, name);
    report(&outcome);
    Ok(())
}

/// Remove a stamp. Stale stamps for ids outside the catalog can be removed too.
pub fn unstamp(rally: &mut Rally, id: MountainId) -> Result<()> {
    let name = rally.catalog().get(id).map(|m| m.name.clone());

    if rally.record(id).is_none() {
        let Some(name) = name else {
            bail!("no mountain #{id} in the catalog");
        };
        println!("#{id} {name} is not stamped.");
        return Ok(());
    }

    let outcome = rally.remove(id);
    match name {
        Some(name) => println!("Removed stamp from #{id} {name}"),
        None => println!("Removed stale stamp #{id} (not in the catalog)"),
    }
    report(&outcome);
    Ok(())
}

fn report(outcome: &SaveOutcome) {
    if let SaveOutcome::MemoryOnly { reason } = outcome {
        eprintln!("warning: change not saved ({reason}); it only lasts for this run");
    }
}

/// Explicit date wins, then the existing record's date, then today.
pub(crate) fn resolve_date(
    arg: Option<&str>,
    existing: Option<&str>,
    today: NaiveDate,
) -> Result<String> {
    match (arg, existing) {
        (Some(raw), _) => {
            let date = NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
                .with_context(|| format!("invalid date '{raw}', expected YYYY-MM-DD"))?;
            Ok(date.format(DATE_FORMAT).to_string())
        }
        (None, Some(existing)) => Ok(existing.to_string()),
        (None, None) => Ok(today.format(DATE_FORMAT).to_string()),
    }
}

pub(crate) fn image_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

/// Read an image file into a `data:<mime>;base64,...` URL.
pub(crate) fn photo_data_url(path: &Path) -> Result<String> {
    let Some(mime) = image_mime(path) else {
        bail!("unsupported image type: {}", path.display());
    };
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}
