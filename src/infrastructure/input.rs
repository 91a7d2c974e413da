// src/infrastructure/input.rs
use std::io::BufRead;

use serde::Deserialize;

use super::error::InfraResult;
use crate::application::dto::TitleInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// One title per line.
    #[default]
    Lines,
    /// A JSON array of collected video metadata records.
    Metadata,
}

// The collector writes whatever the upstream API returned, so `title` may be
// null or absent. Other fields are ignored.
#[derive(Debug, Deserialize)]
struct VideoMetadata {
    #[serde(default, alias = "id")]
    video_id: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

impl From<VideoMetadata> for TitleInput {
    fn from(video: VideoMetadata) -> Self {
        let title = video.title.unwrap_or_else(|| {
            tracing::warn!(video_id = ?video.video_id, "video metadata has no title");
            String::new()
        });
        TitleInput::new(video.video_id, title)
    }
}

pub fn read_titles<R: BufRead>(reader: R, format: InputFormat) -> InfraResult<Vec<TitleInput>> {
    match format {
        InputFormat::Lines => read_lines(reader),
        InputFormat::Metadata => read_metadata(reader),
    }
}

// Only the line terminator is removed; surrounding spaces belong to the title.
fn read_lines<R: BufRead>(reader: R) -> InfraResult<Vec<TitleInput>> {
    let mut titles = Vec::new();
    for line in reader.lines() {
        titles.push(TitleInput::from(line?));
    }
    Ok(titles)
}

fn read_metadata<R: BufRead>(reader: R) -> InfraResult<Vec<TitleInput>> {
    let videos: Vec<VideoMetadata> = serde_json::from_reader(reader)?;
    tracing::debug!(videos = videos.len(), "parsed video metadata");
    Ok(videos.into_iter().map(TitleInput::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::error::InfraError;
    use std::io::Cursor;

    fn titles(inputs: &[TitleInput]) -> Vec<&str> {
        inputs.iter().map(|input| input.title.as_str()).collect()
    }

    fn video_ids(inputs: &[TitleInput]) -> Vec<Option<&str>> {
        inputs.iter().map(|input| input.video_id.as_deref()).collect()
    }

    #[test]
    fn lines_keep_surrounding_spaces() {
        let input = Cursor::new("Hello World\n  Leading and Trailing  \r\n\nlast");
        let inputs = read_titles(input, InputFormat::Lines).unwrap();
        assert_eq!(
            titles(&inputs),
            ["Hello World", "  Leading and Trailing  ", "", "last"]
        );
        assert!(inputs.iter().all(|input| input.video_id.is_none()));
    }

    #[test]
    fn metadata_reads_titles_in_order() {
        let input = Cursor::new(
            r#"[
                {"video_id": "abc", "title": "C++ is Great!!!", "views": 10},
                {"id": "def", "title": "Multiple   Spaces"},
                {"title": ""}
            ]"#,
        );
        let inputs = read_titles(input, InputFormat::Metadata).unwrap();
        assert_eq!(titles(&inputs), ["C++ is Great!!!", "Multiple   Spaces", ""]);
        assert_eq!(video_ids(&inputs), [Some("abc"), Some("def"), None]);
    }

    #[test]
    fn metadata_null_or_missing_title_becomes_empty() {
        let input = Cursor::new(
            r#"[
                {"video_id": "a", "title": "Hello World"},
                {"video_id": "b", "title": null},
                {"video_id": "c"}
            ]"#,
        );
        let inputs = read_titles(input, InputFormat::Metadata).unwrap();
        assert_eq!(titles(&inputs), ["Hello World", "", ""]);
        assert_eq!(video_ids(&inputs), [Some("a"), Some("b"), Some("c")]);
    }

    #[test]
    fn metadata_that_is_not_an_array_is_rejected() {
        let input = Cursor::new(r#"{"video_id": "abc", "title": "Hello"}"#);
        let err = read_titles(input, InputFormat::Metadata).unwrap_err();
        assert!(matches!(err, InfraError::Json(_)));
    }
}
