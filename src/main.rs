//! sutja - 숫자를 한글 금액/로마 숫자/한자로 변환하는 CLI

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;

use clap::{Parser, ValueEnum};
use serde::Serialize;

use sutja::config::{config_path, load_config, load_config_from, save_config_to, SutjaConfig};
use sutja::input::{format_thousands, parse_amount, presets, PopularAmount, POPULAR_AMOUNTS};
use sutja::{ConfigError, KoreanStyle, NumeralError, NumeralSystem};

/// 출력할 표기법 선택
#[derive(ValueEnum, Clone, Copy, Debug)]
enum SystemArg {
    Korean,
    Roman,
    Chinese,
    /// 세 가지 표기법 모두
    All,
}

impl SystemArg {
    fn systems(self) -> Vec<NumeralSystem> {
        match self {
            SystemArg::Korean => vec![NumeralSystem::Korean],
            SystemArg::Roman => vec![NumeralSystem::Roman],
            SystemArg::Chinese => vec![NumeralSystem::Chinese],
            SystemArg::All => NumeralSystem::ALL.to_vec(),
        }
    }
}

/// 숫자를 한글 금액, 로마 숫자, 한자 숫자로 변환합니다.
#[derive(Parser, Debug)]
#[command(name = "sutja", version, about, long_about = None)]
struct Args {
    /// 변환할 숫자 (쉼표 허용). 생략하면 표준 입력에서 한 줄씩 읽음
    values: Vec<String>,

    /// 표기법 (기본값: 설정 파일의 default_system)
    #[arg(short, long, value_enum)]
    system: Option<SystemArg>,

    /// 한글 표기에서 "원" 접미사 생략
    #[arg(long)]
    plain: bool,

    /// JSON Lines 형식으로 출력
    #[arg(long)]
    json: bool,

    /// 표기법별 빠른 입력 예시를 변환
    #[arg(long, conflicts_with_all = ["values", "popular"])]
    examples: bool,

    /// 자주 쓰는 금액(계약서/영수증 예시)을 변환
    #[arg(long, conflicts_with = "values")]
    popular: bool,

    /// 기본 표기법을 설정 파일에 저장하고 종료
    #[arg(long, value_name = "SYSTEM")]
    save_default: Option<NumeralSystem>,
}

/// JSON 출력 한 줄
#[derive(Serialize, Debug, Default)]
struct Record<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<NumeralSystem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    numeral: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

struct Printer {
    systems: Vec<NumeralSystem>,
    style: KoreanStyle,
    json: bool,
    group_input: bool,
    failed: bool,
}

impl Printer {
    fn new(args: &Args, config: &SutjaConfig) -> Self {
        Self {
            systems: args
                .system
                .map(SystemArg::systems)
                .unwrap_or_else(|| vec![config.default_system]),
            style: if args.plain {
                KoreanStyle::Plain
            } else {
                config.korean_style
            },
            json: args.json,
            group_input: config.group_input,
            failed: false,
        }
    }

    /// 입력 문자열 한 개를 해석해 선택된 표기법으로 출력
    fn print(&mut self, out: &mut impl Write, raw: &str) -> io::Result<()> {
        match parse_amount(raw) {
            Ok(value) => self.print_value(out, raw, value, None),
            Err(e) => {
                log::debug!("입력 해석 실패: {:?}", raw);
                self.failed = true;
                if self.json {
                    let record = Record {
                        input: raw,
                        error: Some(e.to_string()),
                        ..Record::default()
                    };
                    writeln!(out, "{}", to_json(&record))
                } else {
                    eprintln!("{}: {}", raw, e);
                    Ok(())
                }
            }
        }
    }

    fn print_value(
        &mut self,
        out: &mut impl Write,
        raw: &str,
        value: u64,
        popular: Option<&PopularAmount>,
    ) -> io::Result<()> {
        let mut shown = if self.group_input {
            format_thousands(value)
        } else {
            value.to_string()
        };
        if let Some(p) = popular {
            shown = format!("{}\t{}\t{}", shown, p.label, p.category);
        }

        for &system in &self.systems {
            // 로마 숫자 범위 안내는 결과 값으로 취급 (실패 아님)
            let result = match system.convert_with(value, self.style) {
                Err(e @ NumeralError::RomanOutOfRange { .. }) => Ok(e.to_string()),
                other => other,
            };

            if self.json {
                let (numeral, error) = match result {
                    Ok(text) => (Some(text), None),
                    Err(e) => {
                        self.failed = true;
                        (None, Some(e.to_string()))
                    }
                };
                let record = Record {
                    input: raw,
                    value: Some(value),
                    label: popular.map(|p| p.label),
                    category: popular.map(|p| p.category),
                    system: Some(system),
                    numeral,
                    error,
                };
                writeln!(out, "{}", to_json(&record))?;
                continue;
            }

            match result {
                Ok(text) if self.systems.len() > 1 => {
                    writeln!(out, "{}\t{}\t{}", shown, system, text)?
                }
                Ok(text) => writeln!(out, "{}\t{}", shown, text)?,
                Err(e) => {
                    self.failed = true;
                    eprintln!("{} ({}): {}", shown, system, e);
                }
            }
        }
        Ok(())
    }
}

fn to_json(record: &Record<'_>) -> String {
    match serde_json::to_string(record) {
        Ok(json) => json,
        Err(e) => {
            // 문자열/숫자 필드만 있으므로 도달하지 않음
            debug_assert!(false, "record serialization failed: {e}");
            log::error!("JSON 직렬화 실패: {}", e);
            String::from("{}")
        }
    }
}

/// 기본 표기법을 설정 파일에 기록 (다른 설정은 유지)
fn save_default_system(path: &Path, system: NumeralSystem) -> Result<SutjaConfig, ConfigError> {
    let mut config = load_config_from(path);
    config.default_system = system;
    save_config_to(&config, path)?;
    Ok(config)
}

/// 인자에 따라 변환 결과를 `out`에 출력. 실패한 입력이 있으면 `Ok(false)`
fn run(
    args: &Args,
    config: &SutjaConfig,
    input: impl BufRead,
    out: &mut impl Write,
) -> io::Result<bool> {
    let mut printer = Printer::new(args, config);

    if args.examples {
        let systems = printer.systems.clone();
        for system in systems {
            printer.systems = vec![system];
            for &n in presets(system) {
                printer.print(out, &n.to_string())?;
            }
        }
    } else if args.popular {
        for popular in POPULAR_AMOUNTS.iter() {
            let raw = popular.amount.to_string();
            printer.print_value(out, &raw, popular.amount, Some(popular))?;
        }
    } else if args.values.is_empty() {
        for line in input.lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    log::warn!("UTF-8이 아닌 입력 줄 건너뜀: {}", e);
                    printer.failed = true;
                    continue;
                }
                Err(e) => return Err(e),
            };
            if line.trim().is_empty() {
                continue;
            }
            printer.print(out, line.trim())?;
        }
    } else {
        for raw in &args.values {
            printer.print(out, raw)?;
        }
    }

    out.flush()?;
    Ok(!printer.failed)
}

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Some(system) = args.save_default {
        let path = config_path();
        match save_default_system(&path, system) {
            Ok(_) => {
                eprintln!("기본 표기법 저장: {} ({})", system, path.display());
                return;
            }
            Err(e) => {
                log::error!("{}", e);
                process::exit(1);
            }
        }
    }

    let config = load_config();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&args, &config, stdin.lock(), &mut out) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            log::error!("출력 실패: {}", e);
            process::exit(1);
        }
    }
}
