//! # Domain Models Module
//!
//! 외부 시스템(GitHub)에서 받은 값을 감싸는 값 객체들입니다.

pub mod github;

pub use github::*;
