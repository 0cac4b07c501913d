pub mod candidates;
pub mod engine;
pub mod minifier;

pub use crate::domain::model::{InvocationMode, MinifyReport};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
