//! 자모 심볼 테이블 (초성/중성/종성 + 복합 종성 분해)

use lazy_static::lazy_static;
use std::collections::HashMap;

/// 초성 19개 (인덱스 0~18)
pub const CHOSEONG: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ',
    'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 21개 (인덱스 0~20)
pub const JUNGSEONG: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ',
    'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// 종성 28개 (인덱스 0 = 받침 없음)
pub const JONGSEONG: [Option<char>; 28] = [
    None,
    Some('ㄱ'),
    Some('ㄲ'),
    Some('ㄳ'),
    Some('ㄴ'),
    Some('ㄵ'),
    Some('ㄶ'),
    Some('ㄷ'),
    Some('ㄹ'),
    Some('ㄺ'),
    Some('ㄻ'),
    Some('ㄼ'),
    Some('ㄽ'),
    Some('ㄾ'),
    Some('ㄿ'),
    Some('ㅀ'),
    Some('ㅁ'),
    Some('ㅂ'),
    Some('ㅄ'),
    Some('ㅅ'),
    Some('ㅆ'),
    Some('ㅇ'),
    Some('ㅈ'),
    Some('ㅊ'),
    Some('ㅋ'),
    Some('ㅌ'),
    Some('ㅍ'),
    Some('ㅎ'),
];

lazy_static! {
    /// 복합 종성 -> 단일 자음 두 개 (순서 유지)
    ///
    /// 키와 분해 결과가 모두 종성 테이블에 존재해야 한다는 불변식을
    /// 초기화 시점에 검증한다.
    pub static ref JONGSEONG_DECOMPOSE: HashMap<char, [char; 2]> = {
        let pairs = [
            ('ㄳ', ['ㄱ', 'ㅅ']),
            ('ㄵ', ['ㄴ', 'ㅈ']),
            ('ㄶ', ['ㄴ', 'ㅎ']),
            ('ㄺ', ['ㄹ', 'ㄱ']),
            ('ㄻ', ['ㄹ', 'ㅁ']),
            ('ㄼ', ['ㄹ', 'ㅂ']),
            ('ㄽ', ['ㄹ', 'ㅅ']),
            ('ㄾ', ['ㄹ', 'ㅌ']),
            ('ㄿ', ['ㄹ', 'ㅍ']),
            ('ㅀ', ['ㄹ', 'ㅎ']),
            ('ㅄ', ['ㅂ', 'ㅅ']),
        ];

        let map: HashMap<char, [char; 2]> = pairs.into_iter().collect();

        for (key, [first, second]) in &map {
            assert!(
                JONGSEONG.contains(&Some(*key)),
                "복합 종성 키가 종성 테이블에 없음: {}",
                key
            );
            assert!(
                JONGSEONG.contains(&Some(*first)) && JONGSEONG.contains(&Some(*second)),
                "복합 종성 분해 결과가 종성 테이블에 없음: {}",
                key
            );
        }

        map
    };
}
