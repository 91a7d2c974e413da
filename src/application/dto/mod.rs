// src/application/dto/mod.rs
mod slugs;

pub use slugs::{SluggedTitleDto, TitleInput};
