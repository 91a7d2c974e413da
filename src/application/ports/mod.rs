// src/application/ports/mod.rs
pub mod util;

// Type alias to make port injection sites more descriptive and reduce `dyn` noise
pub type SlugGeneratorPort = dyn util::SlugGenerator;
