use crate::{CreatorId, ModelId};

use serde::{Deserialize, Serialize};

use strum::{self, Display, EnumString};

/// Kind of resource a model entry points to.
#[derive(Debug, Display, EnumString, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    Checkpoint,
    TextualInversion,
    Hypernetwork,
    AestheticGradient,
}

/// Publication state of a model.
#[derive(Debug, Display, EnumString, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ModelStatus {
    Draft,
    Published,
    Unpublished,
}

impl Default for ModelStatus {
    fn default() -> Self {
        ModelStatus::Published
    }
}

/// Creator account as embedded in feed items.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatorRef {
    pub id: CreatorId,

    pub username: String,
}

/// Preview image of the model's latest version.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ImageMeta {
    pub url: String,

    /// Intrinsic pixel width, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Intrinsic pixel height, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// Blurhash placeholder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

/// Ranking metrics aggregated over the requested period.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RankSummary {
    pub download_count: u64,

    pub favorite_count: u64,

    pub comment_count: u64,

    pub rating_count: u64,

    pub rating: f64,
}

/// One feed item as served by the gallery.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModelSummary {
    pub id: ModelId,

    pub name: String,

    #[serde(rename = "type")]
    pub kind: ModelKind,

    #[serde(default)]
    pub status: ModelStatus,

    /// Not safe for work.
    ///
    /// Absent means safe.
    #[serde(default)]
    pub nsfw: bool,

    pub user: CreatorRef,

    pub image: ImageMeta,

    #[serde(default)]
    pub rank: RankSummary,

    /// Unix timestamp in seconds.
    pub created_at: i64,

    /// Unix timestamp of the latest version upload, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_version_at: Option<i64>,
}
