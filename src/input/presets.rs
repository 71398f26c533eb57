//! 빠른 입력용 예시 금액

use crate::core::converter::NumeralSystem;

/// 자주 쓰는 금액 (계약서/영수증 작성 예시)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PopularAmount {
    pub amount: u64,
    pub label: &'static str,
    pub category: &'static str,
}

pub const POPULAR_AMOUNTS: [PopularAmount; 8] = [
    PopularAmount { amount: 50_000, label: "5만원", category: "일상" },
    PopularAmount { amount: 100_000, label: "10만원", category: "일상" },
    PopularAmount { amount: 500_000, label: "50만원", category: "비즈니스" },
    PopularAmount { amount: 1_000_000, label: "100만원", category: "비즈니스" },
    PopularAmount { amount: 5_000_000, label: "500만원", category: "부동산" },
    PopularAmount { amount: 10_000_000, label: "1천만원", category: "부동산" },
    PopularAmount { amount: 50_000_000, label: "5천만원", category: "부동산" },
    PopularAmount { amount: 100_000_000, label: "1억원", category: "투자" },
];

const KOREAN_PRESETS: [u64; 4] = [10_000, 100_000, 1_000_000, 10_000_000];
const SMALL_PRESETS: [u64; 4] = [1, 100, 500, 1000];

/// 표기법별 빠른 입력 값
pub fn presets(system: NumeralSystem) -> &'static [u64] {
    match system {
        NumeralSystem::Korean => &KOREAN_PRESETS,
        NumeralSystem::Roman | NumeralSystem::Chinese => &SMALL_PRESETS,
    }
}
