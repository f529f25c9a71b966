use serde::{Deserialize, Serialize};

/// Who is looking at the feed.
///
/// Anonymous viewers get the sensitive content delay, authenticated viewers
/// get their hidden creators and favorites applied.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewer {
    /// Gallery API token, absent when browsing anonymously.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Viewer {
    pub fn anonymous() -> Self {
        Self { token: None }
    }

    pub fn with_token<U>(token: U) -> Self
    where
        U: Into<String>,
    {
        Self {
            token: Some(token.into()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
