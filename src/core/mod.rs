//! 숫자 표기 변환 핵심 로직
//!
//! 세 변환기는 서로 독립적인 순수 함수이며 상태를 공유하지 않습니다.

pub mod chinese;
pub mod converter;
pub mod group;
pub mod korean;
pub mod roman;
