pub mod dto;
pub mod error;
pub mod ports;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
