//! 인증 서비스 모듈
//!
//! GitHub OAuth 2.0 Authorization Code 플로우를 담당하는 서비스를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{build_http_client, GithubAuthService};
//!
//! let service = GithubAuthService::new(&config, build_http_client()?);
//! let login_url = service.login_url();
//! ```

pub mod github_auth_service;

pub use github_auth_service::*;
