//! 라우트 설정 모듈
//!
//! 시작 페이지, GitHub OAuth 엔드포인트, 헬스체크를 등록합니다.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | ANY | `/` | [`handlers::home::index`] |
//! | ANY | `/login/github` | [`handlers::auth::github_login`] |
//! | ANY | `/login/github/callback` | [`handlers::auth::github_callback`] |
//! | GET | `/health` | `health_check` |
//! | ANY | 그 외 모든 경로 | [`handlers::home::index`] |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(github_auth_service))
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use chrono::Utc;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// `web::Data<GithubAuthService>`는 호출하는 쪽에서 `app_data`로 등록해야 합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    cfg.service(web::resource("/").to(handlers::home::index));
    configure_auth_routes(cfg);

    // 매칭되지 않은 경로는 모두 시작 페이지로
    cfg.default_service(web::to(handlers::home::index));
}

/// GitHub OAuth 라우트를 설정합니다
///
/// # Available Routes
///
/// - `/login/github` - GitHub 인증 페이지로 리다이렉트
/// - `/login/github/callback` - Authorization Code 처리
///
/// # Examples
///
/// ```bash
/// curl -i http://localhost:8080/login/github
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/login")
            .service(web::resource("/github").to(handlers::auth::github_login))
            .service(web::resource("/github/callback").to(handlers::auth::github_callback))
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "github_oauth_login",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
