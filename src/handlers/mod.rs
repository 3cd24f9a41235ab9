//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! - **`home`**: 로그인 링크 페이지 (`/` 및 등록되지 않은 모든 경로)
//! - **`auth`**: GitHub OAuth 엔드포인트
//!   - 로그인 리다이렉트 (`/login/github`)
//!   - OAuth 콜백 (`/login/github/callback`)
//!
//! 경로 등록은 [`crate::routes`]에서 하며, 모든 HTTP 메서드를 받습니다.
//!
//! ## 의존성 주입
//!
//! 핸들러는 전역 상태를 읽지 않습니다. 필요한 서비스는 `web::Data`로 주입받습니다.
//!
//! ```rust,ignore
//! pub async fn github_login(service: web::Data<GithubAuthService>) -> HttpResponse {
//!     HttpResponse::MovedPermanently()
//!         .insert_header((header::LOCATION, service.login_url()))
//!         .finish()
//! }
//! ```
//!
//! ## 에러 처리
//!
//! 핸들러는 `AppResult<HttpResponse>`를 반환하고, `AppError`는 `ResponseError` 구현을 통해
//! 401 / 502 / 500 응답으로 변환됩니다. 요청 하나의 실패가 서버 전체를 멈추지 않습니다.

pub mod home;
pub mod auth;
