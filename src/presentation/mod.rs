pub mod output;

pub use output::{OutputFormat, write_slugs};
