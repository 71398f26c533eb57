//! 표기법 선택 및 통합 변환기

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::chinese::to_chinese_numeral;
use crate::core::korean::{to_korean_numeral_with, KoreanStyle};
use crate::core::roman::to_roman_numeral;
use crate::error::NumeralError;

/// 지원하는 숫자 표기법
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NumeralSystem {
    /// 한글 금액 (일만이천원)
    #[default]
    Korean,
    /// 로마 숫자 (MMXXIV)
    Roman,
    /// 한자 숫자 (一万二千)
    Chinese,
}

impl NumeralSystem {
    /// 모든 표기법 (화면 표시 순서)
    pub const ALL: [NumeralSystem; 3] = [
        NumeralSystem::Korean,
        NumeralSystem::Roman,
        NumeralSystem::Chinese,
    ];

    /// 영문 이름
    pub fn name(self) -> &'static str {
        match self {
            NumeralSystem::Korean => "korean",
            NumeralSystem::Roman => "roman",
            NumeralSystem::Chinese => "chinese",
        }
    }

    /// 기본 한글 표기(금액)로 변환
    pub fn convert(self, n: u64) -> Result<String, NumeralError> {
        self.convert_with(n, KoreanStyle::default())
    }

    /// 한글 표기 방식을 지정해 변환 (다른 표기법에는 영향 없음)
    pub fn convert_with(self, n: u64, style: KoreanStyle) -> Result<String, NumeralError> {
        match self {
            NumeralSystem::Korean => Ok(to_korean_numeral_with(n, style)),
            NumeralSystem::Roman => match i64::try_from(n) {
                Ok(v) => to_roman_numeral(v),
                Err(_) => Err(NumeralError::RomanOutOfRange { value: n.into() }),
            },
            NumeralSystem::Chinese => to_chinese_numeral(n),
        }
    }
}

impl fmt::Display for NumeralSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 알 수 없는 표기법 이름
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("알 수 없는 표기법: {0} (korean, roman, chinese 중 하나)")]
pub struct UnknownSystem(pub String);

impl FromStr for NumeralSystem {
    type Err = UnknownSystem;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "korean" | "hangul" | "ko" | "한글" => Ok(NumeralSystem::Korean),
            "roman" | "로마" => Ok(NumeralSystem::Roman),
            "chinese" | "hanja" | "zh" | "한자" => Ok(NumeralSystem::Chinese),
            _ => Err(UnknownSystem(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch() {
        assert_eq!(NumeralSystem::Korean.convert(1234).unwrap(), "일천이백삼십사원");
        assert_eq!(NumeralSystem::Roman.convert(1234).unwrap(), "MCCXXXIV");
        assert_eq!(NumeralSystem::Chinese.convert(1234).unwrap(), "一千二百三十四");
    }

    #[test]
    fn test_korean_style_only_affects_korean() {
        assert_eq!(
            NumeralSystem::Korean.convert_with(0, KoreanStyle::Plain).unwrap(),
            "영"
        );
        assert_eq!(
            NumeralSystem::Chinese.convert_with(0, KoreanStyle::Plain).unwrap(),
            "零"
        );
    }

    #[test]
    fn test_roman_rejects_huge_u64() {
        assert_eq!(
            NumeralSystem::Roman.convert(u64::MAX),
            Err(NumeralError::RomanOutOfRange { value: u64::MAX.into() })
        );
        assert!(NumeralSystem::Roman.convert(0).is_err());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Korean".parse::<NumeralSystem>(), Ok(NumeralSystem::Korean));
        assert_eq!("hanja".parse::<NumeralSystem>(), Ok(NumeralSystem::Chinese));
        assert_eq!("로마".parse::<NumeralSystem>(), Ok(NumeralSystem::Roman));
        assert_eq!(
            "greek".parse::<NumeralSystem>(),
            Err(UnknownSystem("greek".to_string()))
        );
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&NumeralSystem::Chinese).unwrap();
        assert_eq!(json, "\"chinese\"");
        let parsed: NumeralSystem = serde_json::from_str("\"roman\"").unwrap();
        assert_eq!(parsed, NumeralSystem::Roman);
    }

    #[test]
    fn test_display_matches_name() {
        for system in NumeralSystem::ALL {
            assert_eq!(system.to_string(), system.name());
            assert_eq!(system.name().parse::<NumeralSystem>(), Ok(system));
        }
    }
}
