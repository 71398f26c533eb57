//! 변환기 호출 전 입력 처리
//!
//! 변환기는 이미 해석된 숫자만 받습니다. 문자열 정리와 표시용 서식,
//! 빠른 입력 예시는 이 모듈이 담당합니다.

mod presets;
mod sanitize;

pub use presets::{presets, PopularAmount, POPULAR_AMOUNTS};
pub use sanitize::{format_thousands, parse_amount, sanitize_digits};
