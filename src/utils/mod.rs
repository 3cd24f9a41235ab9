//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`json_utils`] - JSON 문서 재포맷 (들여쓰기)

pub mod json_utils;
