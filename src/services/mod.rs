//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 기동 시 한 번 생성되어 `web::Data`로 핸들러에 주입됩니다.
//!
//! # Features
//!
//! - OAuth 2.0 소셜 로그인 (GitHub)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::GithubAuthService;
//!
//! App::new().app_data(web::Data::new(GithubAuthService::new(&config, client)))
//! ```

pub mod auth;
