//! 만(10,000) 단위 그룹 분해/조립
//!
//! 한글 금액과 한자 숫자는 모두 네 자리씩 끊어 읽습니다.
//! 그룹 내부 표기 규칙만 다르므로 그룹 순회와 조립은 여기서 공유합니다.

/// 한 그룹의 크기 (만)
pub const GROUP_BASE: u64 = 10_000;

/// 그룹 안의 자리 수 (천/백/십/일)
pub const GROUP_DIGITS: usize = 4;

/// 숫자를 만 단위 그룹으로 분해 (낮은 그룹부터)
///
/// 0은 빈 벡터를 반환합니다. 0 처리 규칙은 표기법마다 다르므로 호출자가 결정합니다.
pub fn split_groups(mut n: u64) -> Vec<u16> {
    let mut groups = Vec::new();
    while n > 0 {
        groups.push((n % GROUP_BASE) as u16);
        n /= GROUP_BASE;
    }
    groups
}

/// 그룹 값(0~9999)을 천의 자리부터 일의 자리까지 숫자 배열로 분해
///
/// 반환 배열의 인덱스 i는 10^(3-i) 자리입니다.
pub fn group_digits(group: u16) -> [u8; GROUP_DIGITS] {
    let g = group % GROUP_BASE as u16;
    [
        (g / 1000) as u8,
        (g / 100 % 10) as u8,
        (g / 10 % 10) as u8,
        (g % 10) as u8,
    ]
}

/// 그룹별 텍스트를 큰 단위와 함께 높은 그룹부터 이어 붙임
///
/// - `render`: 0이 아닌 그룹 값을 그룹 내부 표기로 변환
/// - `big_units`: 그룹 인덱스별 큰 단위 (0번은 빈 문자열)
///
/// 값이 0인 그룹은 단위까지 통째로 생략됩니다.
/// `big_units`보다 그룹이 많으면 넘치는 그룹 인덱스를 `Err`로 돌려줍니다.
pub fn assemble<F>(n: u64, big_units: &[&str], mut render: F) -> Result<String, usize>
where
    F: FnMut(u16) -> String,
{
    let groups = split_groups(n);
    if groups.len() > big_units.len() {
        return Err(groups.len() - 1);
    }

    let mut result = String::new();
    for (unit_index, &group) in groups.iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        result.push_str(&render(group));
        result.push_str(big_units[unit_index]);
    }
    Ok(result)
}
