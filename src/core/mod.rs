//! 한글 자모 분해 핵심 모듈

pub mod decomposer;
pub mod tables;
pub mod unicode;

pub use decomposer::{
    decompose_string, validate_and_decompose, DecomposeError, DecomposeResponse, Decomposition,
    UnsupportedChar,
};
pub use unicode::{decompose_block, is_only_hangul, is_phonetic_unit, is_syllable_block};
