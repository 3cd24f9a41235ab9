//! GitHub OAuth 로그인 서버
//!
//! GitHub OAuth 2.0 Authorization Code 플로우를 수행하고,
//! 로그인한 사용자의 GitHub 프로필을 JSON으로 보여주는 작은 웹 서버입니다.
//! 세션, 토큰 저장소, 데이터베이스는 없으며 모든 상태는 요청 하나 안에서 끝납니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /, /login/github, /login/github/callback, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 리다이렉트, 프로필 렌더링
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 토큰 교환, 프로필 조회
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   GitHub API    │
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use github_oauth_login::config::AppConfig;
//! use github_oauth_login::services::auth::{build_http_client, GithubAuthService};
//!
//! let config = AppConfig::from_env()?;
//! let service = GithubAuthService::new(&config, build_http_client()?);
//! let profile = service.authenticate_with_code(&code).await?;
//! ```

pub mod config;
pub mod domain;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
