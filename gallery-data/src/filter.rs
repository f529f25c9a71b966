use serde::{Deserialize, Serialize};

use strum::{self, Display, EnumString};

/// Result ordering.
#[derive(Debug, Display, EnumString, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum FeedSort {
    #[serde(rename = "Highest Rated")]
    #[strum(serialize = "Highest Rated")]
    HighestRated,

    #[serde(rename = "Most Downloaded")]
    #[strum(serialize = "Most Downloaded")]
    MostDownloaded,

    Newest,
}

impl Default for FeedSort {
    fn default() -> Self {
        FeedSort::HighestRated
    }
}

/// Metric aggregation window.
#[derive(Debug, Display, EnumString, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum FeedPeriod {
    AllTime,
    Year,
    Month,
    Week,
    Day,
}

impl Default for FeedPeriod {
    fn default() -> Self {
        FeedPeriod::AllTime
    }
}

/// Feed query descriptor.
///
/// Sent to the gallery service unchanged.
/// Its serialized form is also the feed identity, two descriptors with the
/// same serialization address the same feed.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FeedFilter {
    /// Free text search on model names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Only models by this creator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Only models carrying this tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Only the viewer's favorited models.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorites: Option<bool>,

    pub sort: FeedSort,

    pub period: FeedPeriod,
}
