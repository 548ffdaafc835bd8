//! 유니코드 한글 음절 판별/분해 유틸리티

use crate::core::tables::{CHOSEONG, JONGSEONG, JUNGSEONG};

/// 한글 음절 시작 코드포인트 (가)
pub const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 끝 코드포인트 (힣)
pub const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 문자가 완성형 한글 음절(가-힣)인지 확인
pub fn is_syllable_block(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 문자가 낱자모(초성 자음 또는 모음)인지 확인
/// 이미 분해된 입력을 그대로 통과시킬 때 사용
pub fn is_phonetic_unit(c: char) -> bool {
    CHOSEONG.contains(&c) || JUNGSEONG.contains(&c)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    if !is_syllable_block(c) {
        return None;
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let jongseong = offset % JONGSEONG_COUNT;
    Some((choseong, jungseong, jongseong))
}

/// 초성/중성/종성 인덱스로 완성형 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG.len() as u32
        || jungseong >= JUNGSEONG_COUNT
        || jongseong >= JONGSEONG_COUNT
    {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 음절 블럭의 구성 자모
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyllableParts {
    /// 초성
    pub choseong: char,
    /// 중성
    pub jungseong: char,
    /// 종성 (받침 없으면 None)
    pub jongseong: Option<char>,
}

/// 음절 블럭 하나를 초성/중성/종성 문자로 분해
/// 완성형 음절이 아니면 경고 로그 후 None (호출자가 처리)
pub fn decompose_block(c: char) -> Option<SyllableParts> {
    let (cho, jung, jong) = match decompose_syllable(c) {
        Some(indices) => indices,
        None => {
            log::warn!("한글 음절이 아닌 문자: {}", c);
            return None;
        }
    };

    Some(SyllableParts {
        choseong: CHOSEONG[cho as usize],
        jungseong: JUNGSEONG[jung as usize],
        jongseong: JONGSEONG[jong as usize],
    })
}

/// 문자열이 한글(완성형 음절, 낱자모, 공백)만 포함하는지 검증
/// 빈 문자열은 false
pub fn is_only_hangul(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    text.chars()
        .all(|c| is_syllable_block(c) || is_phonetic_unit(c) || c.is_whitespace())
}
