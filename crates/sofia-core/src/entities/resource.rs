use serde::{Deserialize, Serialize};

/// A supplementary resource (social channel, publication, podcast...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ResourceLink {
    pub name: String,
    pub url: String,
}

impl ResourceLink {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Maps a keyword found in a question to an ordered list of resource names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeywordRule {
    pub keyword: String,
    pub resources: Vec<String>,
}

impl KeywordRule {
    pub fn new<I, S>(keyword: impl Into<String>, resources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keyword: keyword.into(),
            resources: resources.into_iter().map(Into::into).collect(),
        }
    }
}
