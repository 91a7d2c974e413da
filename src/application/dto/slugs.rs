use crate::domain::slug::{Slug, Title};
use serde::{Deserialize, Serialize};

/// A title to slug, optionally tagged with the id of the video it came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TitleInput {
    pub video_id: Option<String>,
    pub title: Title,
}

impl TitleInput {
    pub fn new(video_id: Option<String>, title: impl Into<Title>) -> Self {
        Self {
            video_id,
            title: title.into(),
        }
    }
}

impl From<&str> for TitleInput {
    fn from(value: &str) -> Self {
        Self::new(None, value)
    }
}

impl From<String> for TitleInput {
    fn from(value: String) -> Self {
        Self::new(None, value)
    }
}

impl From<Title> for TitleInput {
    fn from(value: Title) -> Self {
        Self::new(None, value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SluggedTitleDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    pub title: String,
    pub slug: String,
}

impl SluggedTitleDto {
    pub fn new(input: TitleInput, slug: Slug) -> Self {
        Self {
            video_id: input.video_id,
            title: input.title.into_inner(),
            slug: slug.into_inner(),
        }
    }
}
