pub mod filter;
pub mod model;
pub mod viewer;


use serde::{Deserialize, Serialize};

/// Numeric id of a gallery model.
pub type ModelId = u64;

/// Numeric id of a creator account.
pub type CreatorId = u64;

/// Opaque pagination token returned by the gallery service.
///
/// Clients never inspect it, only hand it back to request the next page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Cursor {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for Cursor {
    fn from(token: &str) -> Self {
        Self(token.to_owned())
    }
}

impl std::fmt::Display for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
