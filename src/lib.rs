pub mod config;
pub mod core;

pub use crate::core::decomposer::{
    validate_and_decompose, DecomposeError, DecomposeResponse, Decomposition, UnsupportedChar,
};
pub use crate::core::unicode::{is_only_hangul, is_phonetic_unit, is_syllable_block};
