pub mod convert;
pub mod error;
pub mod format;

pub use convert::{convert, convert_text, parse_bpm, ConversionResult};
pub use error::TempoError;
