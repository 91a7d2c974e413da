// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{SluggedTitleDto, TitleInput},
        error::ApplicationResult,
        ports::util::SlugGenerator,
    },
    domain::slug::Slug,
};

/// Application service that turns caller-supplied titles into slugs.
///
/// Slugs are not de-duplicated: two titles that normalise to the same slug
/// both get it.
pub struct SlugCommandService {
    generator: Arc<dyn SlugGenerator>,
}

impl SlugCommandService {
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    pub fn slug_for(&self, input: impl Into<TitleInput>) -> ApplicationResult<SluggedTitleDto> {
        let input = input.into();
        let slug = Slug::parse(self.generator.slugify(input.title.as_str()))?;

        if slug.is_empty() {
            tracing::warn!(
                title = %input.title,
                video_id = ?input.video_id,
                "title produced an empty slug"
            );
        } else {
            tracing::debug!(title = %input.title, slug = %slug, "generated slug");
        }

        Ok(SluggedTitleDto::new(input, slug))
    }

    pub fn slug_batch<I, T>(&self, titles: I) -> ApplicationResult<Vec<SluggedTitleDto>>
    where
        I: IntoIterator<Item = T>,
        T: Into<TitleInput>,
    {
        let records = titles
            .into_iter()
            .map(|title| self.slug_for(title))
            .collect::<ApplicationResult<Vec<_>>>()?;

        tracing::info!(count = records.len(), "slugged titles");
        Ok(records)
    }
}
