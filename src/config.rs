//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// CLI 출력 형식
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 자모를 공백으로 구분해 출력
    Text,
    /// `DecomposeResponse` JSON 출력
    Json,
}

/// Jeomja CLI 설정
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct JeomjaConfig {
    /// 출력 형식 (text | json)
    #[serde(default = "default_output")]
    pub output: OutputFormat,
    /// 건너뛴 미지원 문자 진단을 stderr로 출력할지 여부
    #[serde(default = "default_show_unsupported")]
    pub show_unsupported: bool,
}

fn default_output() -> OutputFormat {
    OutputFormat::Text
}

fn default_show_unsupported() -> bool {
    true
}

impl Default for JeomjaConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            show_unsupported: default_show_unsupported(),
        }
    }
}

/// 설정 파일 경로: ~/.config/jeomja/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("jeomja").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
/// CLI는 설정을 읽기만 하고 수정하지 않음
pub fn load_config() -> JeomjaConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => JeomjaConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = JeomjaConfig::default();
        assert_eq!(config.output, OutputFormat::Text);
        assert!(config.show_unsupported);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = JeomjaConfig {
            output: OutputFormat::Json,
            show_unsupported: false,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: JeomjaConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.output, OutputFormat::Json);
        assert!(!parsed.show_unsupported);
    }

    #[test]
    fn test_missing_field_uses_default() {
        // 이전 설정 파일에 output이 없는 경우 기본값 사용
        let json = r#"{"show_unsupported": false}"#;
        let config: JeomjaConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.output, OutputFormat::Text);
        assert!(!config.show_unsupported);
    }

    #[test]
    fn test_output_format_lowercase() {
        let config: JeomjaConfig = serde_json::from_str(r#"{"output": "json"}"#).unwrap();
        assert_eq!(config.output, OutputFormat::Json);
    }
}
