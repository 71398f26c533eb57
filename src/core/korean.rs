//! 숫자 -> 한글 금액 표기 (일만이천삼백사십오원)

use serde::{Deserialize, Serialize};

use crate::core::group::{assemble, group_digits, GROUP_DIGITS};

/// 숫자 읽기 (0은 그룹 안에서 읽지 않음)
const DIGITS: [&str; 10] = ["", "일", "이", "삼", "사", "오", "육", "칠", "팔", "구"];

/// 그룹 내 자리 단위 (천의 자리부터)
const POSITION_UNITS: [&str; GROUP_DIGITS] = ["천", "백", "십", ""];

/// 만 단위 큰 단위. u64 최댓값(약 1844경)까지 모두 표기 가능
const BIG_UNITS: [&str; 5] = ["", "만", "억", "조", "경"];

/// 금액 접미사
const CURRENCY_SUFFIX: &str = "원";

/// 0 읽기
const ZERO: &str = "영";

/// 한글 표기 방식
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum KoreanStyle {
    /// 금액 표기: "원" 접미사, 0은 "영원"
    #[default]
    Currency,
    /// 숫자만 표기: 접미사 없음, 0은 "영"
    Plain,
}

/// 숫자를 한글 금액 표기로 변환
///
/// ```
/// use sutja::to_korean_numeral;
/// assert_eq!(to_korean_numeral(12345), "일만이천삼백사십오원");
/// assert_eq!(to_korean_numeral(0), "영원");
/// ```
pub fn to_korean_numeral(n: u64) -> String {
    to_korean_numeral_with(n, KoreanStyle::Currency)
}

/// 표기 방식을 지정해 한글로 변환
pub fn to_korean_numeral_with(n: u64, style: KoreanStyle) -> String {
    let mut text = if n == 0 {
        ZERO.to_string()
    } else {
        match assemble(n, &BIG_UNITS, convert_group) {
            Ok(text) => text,
            Err(unit_index) => {
                // 큰 단위가 u64 전체를 덮으므로 도달하지 않음
                debug_assert!(false, "missing korean unit for group {unit_index}");
                log::error!("한글 큰 단위 없음 (그룹 {}): {}", unit_index, n);
                n.to_string()
            }
        }
    };

    if style == KoreanStyle::Currency {
        text.push_str(CURRENCY_SUFFIX);
    }
    text
}

/// 그룹 값(1~9999)을 한글로 변환
/// 0인 자리는 건너뛰고, 1도 "일"로 읽음 (일천, 일십)
fn convert_group(group: u16) -> String {
    let mut result = String::new();
    for (position, &digit) in group_digits(group).iter().enumerate() {
        if digit == 0 {
            continue;
        }
        result.push_str(DIGITS[digit as usize]);
        result.push_str(POSITION_UNITS[position]);
    }
    result
}
