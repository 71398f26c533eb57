pub mod config;
pub mod core;
pub mod error;
pub mod input;

pub use crate::core::chinese::to_chinese_numeral;
pub use crate::core::converter::{NumeralSystem, UnknownSystem};
pub use crate::core::korean::{to_korean_numeral, to_korean_numeral_with, KoreanStyle};
pub use crate::core::roman::{to_roman_numeral, to_roman_numeral_text};
pub use crate::error::{ConfigError, InputError, NumeralError, ROMAN_RANGE_MESSAGE};
