// Season and season-type model shared by the form, the wire protocol and
// configuration.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Every season the form offers, most recent first.
pub static SEASONS: [&str; 12] = [
    "2024-25", "2023-24", "2022-23", "2021-22", "2020-21", "2019-20", "2018-19", "2017-18",
    "2016-17", "2015-16", "2014-15", "2013-14",
];

/// Index into `SEASONS` of the default selection (the most recent completed season).
const DEFAULT_SEASON_INDEX: usize = 1;

// ---------------------------------------------------------------------------
// Season
// ---------------------------------------------------------------------------

/// A league year label such as `2023-24`. Always one of [`SEASONS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Season(&'static str);

impl Season {
    /// Look up a season label. Returns `None` for labels outside [`SEASONS`].
    pub fn parse(label: &str) -> Option<Season> {
        SEASONS.iter().find(|s| **s == label).map(|s| Season(*s))
    }

    /// All selectable seasons, most recent first.
    pub fn all() -> impl Iterator<Item = Season> {
        SEASONS.iter().map(|s| Season(*s))
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Position of this season in [`SEASONS`].
    pub fn index(&self) -> usize {
        SEASONS.iter().position(|s| *s == self.0).unwrap_or(0)
    }

    /// The next older season, wrapping to the most recent one.
    pub fn older(&self) -> Season {
        Season(SEASONS[(self.index() + 1) % SEASONS.len()])
    }

    /// The next more recent season, wrapping to the oldest one.
    pub fn newer(&self) -> Season {
        let idx = self.index();
        let prev = if idx == 0 { SEASONS.len() - 1 } else { idx - 1 };
        Season(SEASONS[prev])
    }
}

impl Default for Season {
    fn default() -> Self {
        Season(SEASONS[DEFAULT_SEASON_INDEX])
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for Season {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

impl<'de> Deserialize<'de> for Season {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Season::parse(&label).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "unknown season `{label}`, expected one of {}",
                SEASONS.join(", ")
            ))
        })
    }
}

// ---------------------------------------------------------------------------
// SeasonType
// ---------------------------------------------------------------------------

/// Regular-season vs. playoff games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SeasonType {
    #[default]
    #[serde(rename = "Regular Season")]
    RegularSeason,
    #[serde(rename = "Playoffs")]
    Playoffs,
}

impl SeasonType {
    pub const ALL: [SeasonType; 2] = [SeasonType::RegularSeason, SeasonType::Playoffs];

    pub fn label(&self) -> &'static str {
        match self {
            SeasonType::RegularSeason => "Regular Season",
            SeasonType::Playoffs => "Playoffs",
        }
    }

    /// The other season type.
    pub fn toggled(&self) -> SeasonType {
        match self {
            SeasonType::RegularSeason => SeasonType::Playoffs,
            SeasonType::Playoffs => SeasonType::RegularSeason,
        }
    }
}

impl fmt::Display for SeasonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
