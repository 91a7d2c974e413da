pub mod error;
pub mod input;
pub mod util;

pub use error::{InfraError, InfraResult};
pub use input::{InputFormat, read_titles};
pub use util::DefaultSlugGenerator;
