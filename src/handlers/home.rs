//! 시작 페이지 핸들러

use actix_web::http::header::ContentType;
use actix_web::HttpResponse;

/// 시작 페이지 본문
pub const LOGIN_LINK_HTML: &str = r#"<a href="/login/github">Login with GitHub Account</a>"#;

/// 로그인 링크 페이지
///
/// 요청 메서드나 경로와 상관없이 항상 같은 본문을 반환합니다.
/// 다른 라우트에 걸리지 않은 요청의 기본 서비스로도 쓰입니다.
///
/// # Endpoint
/// `ANY /`
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(LOGIN_LINK_HTML)
}
