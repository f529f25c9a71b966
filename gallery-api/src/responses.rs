use gallery_data::{model::ModelSummary, CreatorId, Cursor, ModelId};

use serde::{Deserialize, Serialize};

/// One page of the model feed.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModelPage {
    // Required so that error bodies never decode as an empty page.
    pub items: Vec<ModelSummary>,

    /// Token for the page after this one, absent on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<Cursor>,
}

/// Acknowledgement of a hidden list mutation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ToggleResponse {
    pub id: CreatorId,

    pub hidden: bool,
}

/// One entry of the viewer's favorites list.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteModel {
    pub model_id: ModelId,
}
