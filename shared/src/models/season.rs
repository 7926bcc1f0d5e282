//! Production season classification

use serde::{Deserialize, Serialize};

/// Named production seasons for the salt flats
///
/// Maha and Yala follow the regional monsoon calendar; months that belong to
/// neither are grouped under Other.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Season {
    Maha,
    Yala,
    Other,
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Season::Maha => write!(f, "Maha"),
            Season::Yala => write!(f, "Yala"),
            Season::Other => write!(f, "Other"),
        }
    }
}

/// Classify a calendar month (1-12) into its production season.
///
/// December through March is Maha, April through July is Yala, the
/// remaining months are Other.
pub fn classify_season(month: u32) -> Season {
    match month {
        12 | 1..=3 => Season::Maha,
        4..=7 => Season::Yala,
        _ => Season::Other,
    }
}
