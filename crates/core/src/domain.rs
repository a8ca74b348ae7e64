use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};

/// Stable identity key of a catalog mountain.
pub type MountainId = u32;

/// Geographic grouping used for filtering and the per-region progress breakdown.
/// Variant order is the canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    Hokkaido,
    Tohoku,
    Kanto,
    Chubu,
    Kinki,
    ChugokuShikoku,
    Kyushu,
}

impl Region {
    pub const ALL: [Region; 7] = [
        Region::Hokkaido,
        Region::Tohoku,
        Region::Kanto,
        Region::Chubu,
        Region::Kinki,
        Region::ChugokuShikoku,
        Region::Kyushu,
    ];

    /// Japanese label, as shown on cards and filter buttons.
    pub fn label(self) -> &'static str {
        match self {
            Region::Hokkaido => "北海道",
            Region::Tohoku => "東北",
            Region::Kanto => "関東",
            Region::Chubu => "中部",
            Region::Kinki => "近畿",
            Region::ChugokuShikoku => "中国・四国",
            Region::Kyushu => "九州",
        }
    }

    /// ASCII alias accepted on the command line.
    pub fn alias(self) -> &'static str {
        match self {
            Region::Hokkaido => "hokkaido",
            Region::Tohoku => "tohoku",
            Region::Kanto => "kanto",
            Region::Chubu => "chubu",
            Region::Kinki => "kinki",
            Region::ChugokuShikoku => "chugoku-shikoku",
            Region::Kyushu => "kyushu",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let needle = s.trim();
        Region::ALL
            .into_iter()
            .find(|r| r.label() == needle || r.alias().eq_ignore_ascii_case(needle))
            .ok_or_else(|| format!("unknown region: {needle}"))
    }
}

/// An immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mountain {
    pub id: MountainId,
    pub name: String,
    /// Meters above sea level.
    pub elevation: u32,
    pub prefecture: String,
    pub region: Region,
    /// Rating on a 1..=5 scale.
    pub difficulty: u8,
}

/// What the user recorded when stamping a mountain.
///
/// Optional fields are never empty strings: construction through [`ClimbRecord::new`]
/// normalizes blank input to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClimbRecord {
    climb_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
    /// Opaque encoded image (typically a data URL).
    #[serde(skip_serializing_if = "Option::is_none")]
    photo: Option<String>,
}

impl ClimbRecord {
    pub fn new(
        climb_date: impl Into<String>,
        comment: Option<String>,
        photo: Option<String>,
    ) -> Result<Self> {
        let climb_date = climb_date.into().trim().to_string();
        if climb_date.is_empty() {
            return Err(Error::MissingClimbDate);
        }
        let comment = comment
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        let photo = photo.filter(|p| !p.is_empty());
        Ok(Self {
            climb_date,
            comment,
            photo,
        })
    }

    pub fn climb_date(&self) -> &str {
        &self.climb_date
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn photo(&self) -> Option<&str> {
        self.photo.as_deref()
    }
}

/// Transient view filter. Not persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub region: Option<Region>,
    pub query: String,
}

impl Filter {
    pub fn is_empty(&self) -> bool {
        self.region.is_none() && self.query.is_empty()
    }
}

/// Overall completion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub climbed: usize,
    pub total: usize,
    pub percent: f64,
}

/// Completion within one region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionProgress {
    pub region: Region,
    pub climbed: usize,
    pub total: usize,
    pub percent: f64,
}

/// Everything a mountain card needs to render.
#[derive(Debug, Clone, PartialEq)]
pub struct MountainCard<'a> {
    pub mountain: &'a Mountain,
    pub climbed: bool,
    pub climb_date: Option<&'a str>,
    pub has_comment: bool,
    pub has_photo: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_order_is_canonical() {
        let labels: Vec<&str> = Region::ALL.iter().map(|r| r.label()).collect();
        assert_eq!(
            labels,
            vec!["北海道", "東北", "関東", "中部", "近畿", "中国・四国", "九州"]
        );
    }

    #[test]
    fn test_region_from_str_accepts_label_and_alias() {
        assert_eq!("中部".parse::<Region>().unwrap(), Region::Chubu);
        assert_eq!("KANTO".parse::<Region>().unwrap(), Region::Kanto);
        assert_eq!(
            " chugoku-shikoku ".parse::<Region>().unwrap(),
            Region::ChugokuShikoku
        );
        assert!("atlantis".parse::<Region>().is_err());
    }

    #[test]
    fn test_climb_record_requires_date() {
        let err = ClimbRecord::new("   ", None, None).unwrap_err();
        assert!(matches!(err, Error::MissingClimbDate));
    }

    #[test]
    fn test_climb_record_normalizes_blank_optionals() {
        let record =
            ClimbRecord::new("2024-05-01", Some("   ".to_string()), Some(String::new())).unwrap();
        assert_eq!(record.comment(), None);
        assert_eq!(record.photo(), None);
    }

    #[test]
    fn test_climb_record_trims_comment() {
        let record =
            ClimbRecord::new(" 2024-05-01 ", Some("  beautiful sunrise \n".to_string()), None)
                .unwrap();
        assert_eq!(record.climb_date(), "2024-05-01");
        assert_eq!(record.comment(), Some("beautiful sunrise"));
    }

    #[test]
    fn test_climb_record_omits_absent_fields_in_json() {
        let record = ClimbRecord::new("2024-05-01", None, None).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"climbDate":"2024-05-01"}"#);

        let full = ClimbRecord::new(
            "2024-05-01",
            Some("windy".to_string()),
            Some("data:image/png;base64,AAAA".to_string()),
        )
        .unwrap();
        let json = serde_json::to_string(&full).unwrap();
        assert_eq!(
            json,
            r#"{"climbDate":"2024-05-01","comment":"windy","photo":"data:image/png;base64,AAAA"}"#
        );
    }

    #[test]
    fn test_filter_default_is_empty() {
        assert!(Filter::default().is_empty());
        let filter = Filter {
            region: Some(Region::Kyushu),
            query: String::new(),
        };
        assert!(!filter.is_empty());
    }
}
