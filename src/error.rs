//! 변환/입력/설정 에러 타입

use std::io;

/// 로마 숫자 범위 밖 입력에 대한 안내 문구
pub const ROMAN_RANGE_MESSAGE: &str = "1-3999 범위만 지원됩니다";

/// 숫자 표기 변환 에러
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumeralError {
    /// 로마 숫자는 1~3999만 표기 가능
    #[error("1-3999 범위만 지원됩니다")]
    RomanOutOfRange { value: i128 },

    /// 한자 큰 단위(万/億/兆)로 표기할 수 없는 값 (10^16 이상)
    #[error("한자 변환은 {max} 이하만 지원됩니다 (입력: {value})")]
    ChineseTooLarge { value: u64, max: u64 },
}

/// 원시 입력 문자열 파싱 에러
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// 숫자가 하나도 없음
    #[error("숫자를 입력해주세요")]
    Empty,

    /// u64 범위 초과
    #[error("너무 큰 숫자입니다: {0}")]
    Overflow(String),

    /// 숫자 앞에 음수 부호
    #[error("음수는 변환할 수 없습니다: {0}")]
    Negative(String),

    /// 소수점 아래 숫자가 있음
    #[error("소수는 변환할 수 없습니다: {0}")]
    Fractional(String),
}

/// 설정 파일 저장 에러
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("설정 디렉토리 생성 실패: {0}")]
    CreateDir(#[source] io::Error),

    #[error("직렬화 실패: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("설정 파일 저장 실패: {0}")]
    Write(#[source] io::Error),
}
