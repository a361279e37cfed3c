use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One of the five APEST ministry dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ApestDimension {
    Apostolic,
    Prophetic,
    Evangelistic,
    Shepherding,
    Teaching,
}

impl ApestDimension {
    /// All dimensions in canonical order. This order is also the default
    /// tie-break when two dimensions score the same.
    pub const ALL: [ApestDimension; 5] = [
        ApestDimension::Apostolic,
        ApestDimension::Prophetic,
        ApestDimension::Evangelistic,
        ApestDimension::Shepherding,
        ApestDimension::Teaching,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApestDimension::Apostolic => "apostolic",
            ApestDimension::Prophetic => "prophetic",
            ApestDimension::Evangelistic => "evangelistic",
            ApestDimension::Shepherding => "shepherding",
            ApestDimension::Teaching => "teaching",
        }
    }
}

impl fmt::Display for ApestDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A score per dimension. Always carries exactly the five APEST keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DimensionScores {
    pub apostolic: f64,
    pub prophetic: f64,
    pub evangelistic: f64,
    pub shepherding: f64,
    pub teaching: f64,
}

impl DimensionScores {
    pub fn get(&self, dimension: ApestDimension) -> f64 {
        match dimension {
            ApestDimension::Apostolic => self.apostolic,
            ApestDimension::Prophetic => self.prophetic,
            ApestDimension::Evangelistic => self.evangelistic,
            ApestDimension::Shepherding => self.shepherding,
            ApestDimension::Teaching => self.teaching,
        }
    }

    pub fn get_mut(&mut self, dimension: ApestDimension) -> &mut f64 {
        match dimension {
            ApestDimension::Apostolic => &mut self.apostolic,
            ApestDimension::Prophetic => &mut self.prophetic,
            ApestDimension::Evangelistic => &mut self.evangelistic,
            ApestDimension::Shepherding => &mut self.shepherding,
            ApestDimension::Teaching => &mut self.teaching,
        }
    }

    /// Iterate `(dimension, score)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (ApestDimension, f64)> + '_ {
        ApestDimension::ALL.into_iter().map(|d| (d, self.get(d)))
    }
}
