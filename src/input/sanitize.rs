//! 입력 문자열 정리 및 천 단위 구분 표기

use crate::error::InputError;

/// 숫자와 쉼표만 남김
///
/// "₩1,234원" -> "1,234"
pub fn sanitize_digits(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == ',')
        .collect()
}

/// 사용자 입력을 숫자로 해석
///
/// 통화 기호 등 숫자/쉼표 이외 문자는 무시하고 쉼표를 제거한 뒤 파싱합니다.
/// - 첫 숫자 앞에 `-`가 있으면 `InputError::Negative`
/// - `.` 뒤에 숫자가 오면 `InputError::Fractional` ("1.5", "1,234.50")
pub fn parse_amount(raw: &str) -> Result<u64, InputError> {
    let before_digits = raw.split(|c: char| c.is_ascii_digit()).next().unwrap_or("");
    if before_digits.contains('-') {
        return Err(InputError::Negative(raw.to_string()));
    }
    if has_fraction(raw) {
        return Err(InputError::Fractional(raw.to_string()));
    }

    let digits = sanitize_digits(raw).replace(',', "");
    if digits.is_empty() {
        return Err(InputError::Empty);
    }
    digits
        .parse::<u64>()
        .map_err(|_| InputError::Overflow(digits))
}

/// 소수점 뒤에 숫자가 이어지는지 검사 ("12." 같은 끝 마침표는 허용)
fn has_fraction(raw: &str) -> bool {
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '.' && chars.peek().is_some_and(|next| next.is_ascii_digit()) {
            return true;
        }
    }
    false
}

/// 세 자리마다 쉼표 삽입
///
/// 1234567 -> "1,234,567"
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_digits() {
        assert_eq!(sanitize_digits("₩1,234원"), "1,234");
        assert_eq!(sanitize_digits("12 34"), "1234");
        assert_eq!(sanitize_digits("abc"), "");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1,234,567"), Ok(1_234_567));
        assert_eq!(parse_amount("  42 "), Ok(42));
        assert_eq!(parse_amount("0"), Ok(0));
        assert_eq!(parse_amount("₩12,000원"), Ok(12_000));
        assert_eq!(parse_amount("12."), Ok(12));
    }

    #[test]
    fn test_parse_amount_negative() {
        assert_eq!(parse_amount("-5"), Err(InputError::Negative("-5".to_string())));
        assert_eq!(
            parse_amount("₩-1,000"),
            Err(InputError::Negative("₩-1,000".to_string()))
        );
    }

    #[test]
    fn test_parse_amount_fractional() {
        assert_eq!(parse_amount("1.5"), Err(InputError::Fractional("1.5".to_string())));
        assert_eq!(
            parse_amount("1,234.50"),
            Err(InputError::Fractional("1,234.50".to_string()))
        );
    }

    #[test]
    fn test_parse_amount_empty() {
        assert_eq!(parse_amount(""), Err(InputError::Empty));
        assert_eq!(parse_amount(",,,"), Err(InputError::Empty));
        assert_eq!(parse_amount("원"), Err(InputError::Empty));
    }

    #[test]
    fn test_parse_amount_overflow() {
        // u64::MAX + 1
        let too_big = "18446744073709551616";
        assert_eq!(
            parse_amount(too_big),
            Err(InputError::Overflow(too_big.to_string()))
        );
        assert_eq!(parse_amount("18446744073709551615"), Ok(u64::MAX));
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
        assert_eq!(format_thousands(100_000_000), "100,000,000");
    }
}
