//! Append-only byte-text construction with fixed-point primitive formatting.

pub mod builder;
pub mod error;
mod fragment;
pub mod options;
pub mod text;

pub use crate::builder::TextBuilder;
pub use crate::error::Error;
pub use crate::options::{BuilderOptions, Growth};
pub use crate::text::{Text, ToText};

pub type Result<T> = std::result::Result<T, Error>;
