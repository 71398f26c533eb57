//! 숫자 -> 한자 숫자 표기 (一万二千三百四十五)
//!
//! 그룹 내부 규칙:
//! - 중간에 빠진 자리는 다음 숫자 앞에 "零" 한 번만 표기 (1005 -> 一千零五)
//! - 그룹 끝의 0은 표기하지 않음 (1000 -> 一千)
//! - 그룹이 십의 자리 1로 시작하면 "一"을 생략 (12 -> 十二)

use crate::core::group::{assemble, group_digits, GROUP_DIGITS};
use crate::error::NumeralError;

const DIGITS: [&str; 10] = ["", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// 그룹 내 자리 단위 (천의 자리부터)
const POSITION_UNITS: [&str; GROUP_DIGITS] = ["千", "百", "十", ""];

/// 만 단위 큰 단위. 兆 다음 단위는 없음
const BIG_UNITS: [&str; 4] = ["", "万", "億", "兆"];

/// 십의 자리 인덱스 (POSITION_UNITS 기준)
const TENS_POSITION: usize = 2;
/// 일의 자리 인덱스
const ONES_POSITION: usize = 3;

const ZERO: &str = "零";

/// 표기 가능한 최댓값 (9999兆9999億9999万9999)
pub const CHINESE_MAX: u64 = 9_999_999_999_999_999;

/// 숫자를 한자 숫자로 변환
///
/// 兆 단위를 넘는 값(10^16 이상)은 `NumeralError::ChineseTooLarge`를 반환합니다.
pub fn to_chinese_numeral(n: u64) -> Result<String, NumeralError> {
    if n == 0 {
        return Ok(ZERO.to_string());
    }

    assemble(n, &BIG_UNITS, convert_group).map_err(|_| NumeralError::ChineseTooLarge {
        value: n,
        max: CHINESE_MAX,
    })
}

/// 그룹 값(1~9999)을 한자로 변환
fn convert_group(group: u16) -> String {
    let mut result = String::new();
    let mut pending_zero = false;

    for (position, &digit) in group_digits(group).iter().enumerate() {
        if digit > 0 {
            if pending_zero {
                result.push_str(ZERO);
                pending_zero = false;
            }
            if digit == 1 && position == TENS_POSITION && result.is_empty() {
                result.push_str(POSITION_UNITS[position]);
            } else {
                result.push_str(DIGITS[digit as usize]);
                result.push_str(POSITION_UNITS[position]);
            }
        } else if !result.is_empty() && position != ONES_POSITION {
            pending_zero = true;
        }
    }
    result
}
