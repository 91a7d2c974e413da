pub mod services;
pub mod value_objects;

pub use services::{create_slug, is_slug};
pub use value_objects::{Slug, Title};
