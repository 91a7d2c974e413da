use crate::application::ports::util::SlugGenerator;
use crate::domain::slug::create_slug;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        create_slug(input)
    }
}
