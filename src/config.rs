//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::converter::NumeralSystem;
use crate::core::korean::KoreanStyle;
use crate::error::ConfigError;

/// sutja 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SutjaConfig {
    /// 표기법을 지정하지 않았을 때 사용할 표기법
    #[serde(default)]
    pub default_system: NumeralSystem,
    /// 한글 표기 방식 (금액/숫자)
    #[serde(default)]
    pub korean_style: KoreanStyle,
    /// 출력 시 입력값을 천 단위 쉼표로 표시
    #[serde(default = "default_group_input")]
    pub group_input: bool,
}

fn default_group_input() -> bool {
    true
}

impl Default for SutjaConfig {
    fn default() -> Self {
        Self {
            default_system: NumeralSystem::default(),
            korean_style: KoreanStyle::default(),
            group_input: default_group_input(),
        }
    }
}

/// 설정 파일 경로
///
/// `$XDG_CONFIG_HOME/sutja/config.json`, 없으면 `~/.config/sutja/config.json`
pub fn config_path() -> PathBuf {
    let absolute_dir = |var: &str| {
        std::env::var(var)
            .ok()
            .map(PathBuf::from)
            .filter(|p| p.is_absolute() && p.is_dir())
    };

    let base = absolute_dir("XDG_CONFIG_HOME")
        .or_else(|| absolute_dir("HOME").map(|home| home.join(".config")))
        // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    base.join("sutja").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> SutjaConfig {
    load_config_from(&config_path())
}

/// 지정한 경로에서 설정 로드
pub fn load_config_from(path: &Path) -> SutjaConfig {
    match fs::read_to_string(path) {
        Ok(content) => parse_config(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패 ({}): {}", path.display(), e);
            SutjaConfig::default()
        }),
        Err(_) => {
            log::debug!("설정 파일 없음, 기본값 사용: {}", path.display());
            SutjaConfig::default()
        }
    }
}

/// JSON 문자열에서 설정 해석
pub fn parse_config(content: &str) -> Result<SutjaConfig, serde_json::Error> {
    serde_json::from_str(content)
}

/// 설정 파일 저장
pub fn save_config(config: &SutjaConfig) -> Result<(), ConfigError> {
    save_config_to(config, &config_path())
}

/// 지정한 경로에 설정 저장 (상위 디렉토리 생성 포함)
pub fn save_config_to(config: &SutjaConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(ConfigError::CreateDir)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json).map_err(ConfigError::Write)?;
    log::debug!("설정 저장: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SutjaConfig::default();
        assert_eq!(config.default_system, NumeralSystem::Korean);
        assert_eq!(config.korean_style, KoreanStyle::Currency);
        assert!(config.group_input);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = SutjaConfig {
            default_system: NumeralSystem::Chinese,
            korean_style: KoreanStyle::Plain,
            group_input: false,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed = parse_config(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_backward_compat_missing_field() {
        // 이전 설정 파일에 korean_style, group_input이 없는 경우 기본값 사용
        let json = r#"{"default_system": "roman"}"#;
        let config = parse_config(json).unwrap();
        assert_eq!(config.default_system, NumeralSystem::Roman);
        assert_eq!(config.korean_style, KoreanStyle::Currency);
        assert!(config.group_input);
    }

    #[test]
    fn test_unknown_system_is_error() {
        assert!(parse_config(r#"{"default_system": "greek"}"#).is_err());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = SutjaConfig {
            default_system: NumeralSystem::Roman,
            korean_style: KoreanStyle::Plain,
            group_input: false,
        };

        save_config_to(&config, &path).unwrap();
        assert_eq!(load_config_from(&path), config);
    }

    #[test]
    fn test_load_missing_or_broken_file_uses_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        assert_eq!(load_config_from(&path), SutjaConfig::default());

        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_config_from(&path), SutjaConfig::default());
    }

    #[test]
    fn test_config_path_file_name() {
        let path = config_path();
        assert!(path.ends_with("sutja/config.json"));
    }
}
