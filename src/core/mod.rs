pub mod converter;
pub mod decoder;
pub mod encoder;
pub mod session;

pub use crate::domain::model::{Conversion, ConversionError, DecodeStrategy, Direction};
pub use crate::domain::ports::{ConfigProvider, Console};
pub use crate::utils::error::Result;
