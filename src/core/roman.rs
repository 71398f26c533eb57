//! 숫자 -> 로마 숫자 (MMXXIV)

use crate::error::{NumeralError, ROMAN_RANGE_MESSAGE};

/// 표기 가능한 최솟값
pub const ROMAN_MIN: i64 = 1;
/// 표기 가능한 최댓값
pub const ROMAN_MAX: i64 = 3999;

/// (값, 기호) 쌍. 큰 값부터, 감산 표기(CM, CD, XC, XL, IX, IV) 포함
const NUMERALS: [(i64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// 숫자를 로마 숫자로 변환 (1~3999)
///
/// 범위를 벗어나면 `NumeralError::RomanOutOfRange`를 반환합니다.
pub fn to_roman_numeral(n: i64) -> Result<String, NumeralError> {
    if !(ROMAN_MIN..=ROMAN_MAX).contains(&n) {
        return Err(NumeralError::RomanOutOfRange { value: n.into() });
    }

    let mut remaining = n;
    let mut result = String::new();
    for &(value, symbol) in NUMERALS.iter() {
        while remaining >= value {
            result.push_str(symbol);
            remaining -= value;
        }
    }
    Ok(result)
}

/// 범위 밖 입력에 안내 문구를 그대로 돌려주는 변환
///
/// 결과 문자열만 표시하는 화면에서 사용합니다.
pub fn to_roman_numeral_text(n: i64) -> String {
    to_roman_numeral(n).unwrap_or_else(|_| ROMAN_RANGE_MESSAGE.to_string())
}
