//! 한글 문자열 -> 자모 시퀀스 분해기
//!
//! 블럭 시각화 계층이 소비하는 단일 진입점 `validate_and_decompose` 제공

use crate::core::tables::JONGSEONG_DECOMPOSE;
use crate::core::unicode::{decompose_block, is_only_hangul, is_phonetic_unit, is_syllable_block};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 분해 실패 사유
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecomposeError {
    /// 입력이 비어 있거나 공백뿐
    EmptyInput,
    /// 한글 외 문자 포함
    InvalidCharacters,
    /// 검증은 통과했지만 분해 결과가 비어 있음 (방어용)
    EmptyResult,
}

impl fmt::Display for DecomposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecomposeError::EmptyInput | DecomposeError::EmptyResult => {
                write!(f, "생성할 블럭이 없습니다.")
            }
            DecomposeError::InvalidCharacters => write!(f, "한글만 입력 가능합니다."),
        }
    }
}

impl std::error::Error for DecomposeError {}

/// 분해 중 건너뛴 미지원 문자 (진단용, 치명적 아님)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedChar {
    /// 입력 내 위치 (char 단위)
    pub index: usize,
    /// 해당 문자
    pub ch: char,
}

/// 분해 결과: 자모 시퀀스 + 수집된 진단
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Decomposition {
    /// 순서대로 나열된 자모 (공백 없음, 단일 자음/모음만)
    pub jamos: Vec<char>,
    /// 건너뛴 미지원 문자 목록
    pub unsupported: Vec<UnsupportedChar>,
}

/// 문자열을 자모 시퀀스로 완전히 분해
///
/// - 공백(' ')은 건너뜀
/// - 이미 낱자모인 문자는 그대로 추가
/// - 완성형 음절은 초성/중성/종성으로 분해, 복합 종성은 단일 자음 두 개로 확장
/// - 그 외 문자는 경고 후 건너뛰고 진단 목록에 수집 (처리는 계속)
pub fn decompose_string(text: &str) -> Decomposition {
    let mut result = Decomposition::default();

    for (index, c) in text.chars().enumerate() {
        if c == ' ' {
            continue;
        }

        if is_phonetic_unit(c) {
            result.jamos.push(c);
            continue;
        }

        if is_syllable_block(c) {
            if let Some(parts) = decompose_block(c) {
                result.jamos.push(parts.choseong);
                result.jamos.push(parts.jungseong);

                if let Some(jong) = parts.jongseong {
                    match JONGSEONG_DECOMPOSE.get(&jong) {
                        Some([first, second]) => {
                            result.jamos.push(*first);
                            result.jamos.push(*second);
                        }
                        None => result.jamos.push(jong),
                    }
                }
            }
            continue;
        }

        log::warn!("처리할 수 없는 문자: {} (위치 {})", c, index);
        result.unsupported.push(UnsupportedChar { index, ch: c });
    }

    result
}

/// 입력 검증 후 분해 (외부 소비자용 단일 진입점)
///
/// 1. 공백 제거 후 비어 있으면 `EmptyInput`
/// 2. 한글 외 문자가 있으면 `InvalidCharacters`
/// 3. 분해 결과가 비어 있으면 `EmptyResult` (방어용)
pub fn validate_and_decompose(text: &str) -> Result<Decomposition, DecomposeError> {
    if text.trim().is_empty() {
        return Err(DecomposeError::EmptyInput);
    }

    if !is_only_hangul(text) {
        return Err(DecomposeError::InvalidCharacters);
    }

    let decomposition = decompose_string(text);

    if decomposition.jamos.is_empty() {
        return Err(DecomposeError::EmptyResult);
    }

    Ok(decomposition)
}

/// UI/시각화 계층으로 내보내는 직렬화 가능한 응답 형태
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DecomposeResponse {
    /// 입력 유효 여부
    pub valid: bool,
    /// 자모 시퀀스 (유효하지 않으면 빈 배열)
    pub jamos: Vec<String>,
    /// 사용자에게 보여줄 오류 메시지 (유효하면 None)
    pub error: Option<String>,
}

impl From<Result<Decomposition, DecomposeError>> for DecomposeResponse {
    fn from(result: Result<Decomposition, DecomposeError>) -> Self {
        match result {
            Ok(decomposition) => DecomposeResponse {
                valid: true,
                jamos: decomposition.jamos.iter().map(|c| c.to_string()).collect(),
                error: None,
            },
            Err(e) => DecomposeResponse {
                valid: false,
                jamos: Vec::new(),
                error: Some(e.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jamos_of(text: &str) -> Vec<char> {
        decompose_string(text).jamos
    }

    #[test]
    fn test_decompose_simple_syllables() {
        assert_eq!(jamos_of("가"), vec!['ㄱ', 'ㅏ']);
        assert_eq!(jamos_of("한"), vec!['ㅎ', 'ㅏ', 'ㄴ']);
        assert_eq!(jamos_of("라면"), vec!['ㄹ', 'ㅏ', 'ㅁ', 'ㅕ', 'ㄴ']);
        assert_eq!(jamos_of("한글"), vec!['ㅎ', 'ㅏ', 'ㄴ', 'ㄱ', 'ㅡ', 'ㄹ']);
    }

    #[test]
    fn test_decompose_compound_jongseong() {
        // 닭: 종성 ㄺ -> ㄹ + ㄱ
        assert_eq!(jamos_of("닭"), vec!['ㄷ', 'ㅏ', 'ㄹ', 'ㄱ']);
        // 값: 종성 ㅄ -> ㅂ + ㅅ
        assert_eq!(jamos_of("값"), vec!['ㄱ', 'ㅏ', 'ㅂ', 'ㅅ']);
        // 앉: 종성 ㄵ -> ㄴ + ㅈ
        assert_eq!(jamos_of("앉"), vec!['ㅇ', 'ㅏ', 'ㄴ', 'ㅈ']);
    }

    #[test]
    fn test_decompose_empty_and_space() {
        assert_eq!(jamos_of(""), Vec::<char>::new());
        assert_eq!(jamos_of(" "), Vec::<char>::new());
        assert_eq!(jamos_of("   "), Vec::<char>::new());
    }

    #[test]
    fn test_space_skipped_between_syllables() {
        assert_eq!(jamos_of("가 나"), vec!['ㄱ', 'ㅏ', 'ㄴ', 'ㅏ']);
    }

    #[test]
    fn test_jamo_passthrough() {
        // 이미 분해된 자모는 그대로
        assert_eq!(jamos_of("ㄱㅏ"), vec!['ㄱ', 'ㅏ']);
        assert_eq!(jamos_of("ㄱ가"), vec!['ㄱ', 'ㄱ', 'ㅏ']);
    }

    #[test]
    fn test_unsupported_chars_collected() {
        let result = decompose_string("가a나!");
        assert_eq!(result.jamos, vec!['ㄱ', 'ㅏ', 'ㄴ', 'ㅏ']);
        assert_eq!(
            result.unsupported,
            vec![
                UnsupportedChar { index: 1, ch: 'a' },
                UnsupportedChar { index: 3, ch: '!' },
            ]
        );
    }

    #[test]
    fn test_validate_and_decompose_valid() {
        let result = validate_and_decompose("가").unwrap();
        assert_eq!(result.jamos, vec!['ㄱ', 'ㅏ']);
        assert!(result.unsupported.is_empty());

        let result = validate_and_decompose("한").unwrap();
        assert_eq!(result.jamos, vec!['ㅎ', 'ㅏ', 'ㄴ']);

        let result = validate_and_decompose("닭").unwrap();
        assert_eq!(result.jamos, vec!['ㄷ', 'ㅏ', 'ㄹ', 'ㄱ']);

        let result = validate_and_decompose("라면").unwrap();
        assert_eq!(result.jamos, vec!['ㄹ', 'ㅏ', 'ㅁ', 'ㅕ', 'ㄴ']);
    }

    #[test]
    fn test_validate_and_decompose_invalid() {
        assert_eq!(
            validate_and_decompose("abc"),
            Err(DecomposeError::InvalidCharacters)
        );
        assert_eq!(validate_and_decompose(""), Err(DecomposeError::EmptyInput));
        assert_eq!(
            validate_and_decompose("   "),
            Err(DecomposeError::EmptyInput)
        );
        assert_eq!(
            validate_and_decompose("한글123"),
            Err(DecomposeError::InvalidCharacters)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DecomposeError::EmptyInput.to_string(),
            "생성할 블럭이 없습니다."
        );
        assert_eq!(
            DecomposeError::InvalidCharacters.to_string(),
            "한글만 입력 가능합니다."
        );
        assert_eq!(
            DecomposeError::EmptyResult.to_string(),
            "생성할 블럭이 없습니다."
        );
    }

    #[test]
    fn test_response_from_result() {
        let response = DecomposeResponse::from(validate_and_decompose("가"));
        assert!(response.valid);
        assert_eq!(response.jamos, vec!["ㄱ", "ㅏ"]);
        assert_eq!(response.error, None);

        let response = DecomposeResponse::from(validate_and_decompose("abc"));
        assert!(!response.valid);
        assert!(response.jamos.is_empty());
        assert_eq!(response.error.as_deref(), Some("한글만 입력 가능합니다."));
    }

    #[test]
    fn test_response_serialization() {
        let response = DecomposeResponse::from(validate_and_decompose("한"));
        let json = serde_json::to_string(&response).unwrap();
        let parsed: DecomposeResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, response);
    }

    #[test]
    fn test_no_whitespace_in_output() {
        let result = decompose_string("안녕 하세요");
        assert!(result.jamos.iter().all(|c| !c.is_whitespace()));
    }
}
