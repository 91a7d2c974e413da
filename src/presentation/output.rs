// src/presentation/output.rs
use std::io::{self, Write};

use crate::application::dto::SluggedTitleDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One slug per line.
    #[default]
    Plain,
    /// One `{"video_id": .., "title": .., "slug": ..}` object per line;
    /// `video_id` is omitted when unknown.
    JsonLines,
}

pub fn write_slugs<W: Write>(
    mut writer: W,
    records: &[SluggedTitleDto],
    format: OutputFormat,
) -> io::Result<()> {
    for record in records {
        match format {
            OutputFormat::Plain => writeln!(writer, "{}", record.slug)?,
            OutputFormat::JsonLines => {
                serde_json::to_writer(&mut writer, record)?;
                writer.write_all(b"\n")?;
            }
        }
    }
    writer.flush()
}
