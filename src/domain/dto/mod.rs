//! # Data Transfer Objects (DTO) Module
//!
//! HTTP 경계를 넘는 데이터 구조를 정의합니다.
//!
//! | 방향 | 타입 |
//! |------|------|
//! | 브라우저 → 서버 | [`OAuthCallbackQuery`] |
//! | 서버 → GitHub | [`GithubTokenRequest`] |
//! | GitHub → 서버 | [`GithubTokenResponse`] |

pub mod oauth;

pub use oauth::*;
