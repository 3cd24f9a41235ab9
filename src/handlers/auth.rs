//! Authentication HTTP Handlers
//!
//! GitHub OAuth 로그인과 콜백을 처리하는 핸들러 함수들입니다.
//!
//! # Endpoints
//!
//! - `/login/github` - GitHub 인증 페이지로 301 리다이렉트
//! - `/login/github/callback?code={code}` - 코드 교환 후 프로필 JSON 반환
//!
//! 두 엔드포인트 모두 HTTP 메서드를 구분하지 않습니다.
use actix_web::http::header::{self, ContentType};
use actix_web::{web, HttpResponse};

use crate::domain::OAuthCallbackQuery;
use crate::domain::models::github::GithubProfile;
use crate::errors::{AppError, AppResult};
use crate::services::auth::GithubAuthService;
use crate::utils::json_utils::{indent_json, TAB_INDENT};

/// GitHub 로그인 리다이렉트 핸들러
///
/// # Endpoint
/// `ANY /login/github`
pub async fn github_login(service: web::Data<GithubAuthService>) -> HttpResponse {
    HttpResponse::MovedPermanently()
        .insert_header((header::LOCATION, service.login_url()))
        .finish()
}

/// GitHub OAuth 콜백 처리 핸들러
///
/// 토큰 교환 → 프로필 조회 → 렌더링 순서로 진행하며 재시도나 분기는 없습니다.
///
/// # Endpoint
/// `ANY /login/github/callback?code={code}`
pub async fn github_callback(
    query: web::Query<OAuthCallbackQuery>,
    service: web::Data<GithubAuthService>,
) -> AppResult<HttpResponse> {
    // 사용자가 거부한 경우에도 code 없이 그대로 진행하며, 결과는 401로 끝납니다.
    if let Some(error) = &query.error {
        log::warn!(
            "GitHub OAuth 에러: {} - {}",
            error,
            query.error_description.as_deref().unwrap_or_default()
        );
    }

    log::debug!("GitHub Authorization Code 교환 시작");

    let profile = service.authenticate_with_code(&query.code).await?;

    render_profile(&profile)
}

/// 프로필 원본을 HTTP 응답으로 변환합니다.
///
/// * 빈 본문 → `401 unauthorized`
/// * 올바른 JSON → `200`, `Content-Type: application/json`, 탭 들여쓰기
/// * 잘못된 JSON → `502`
/// * 응답 직렬화 실패 → `500`
pub fn render_profile(profile: &GithubProfile) -> AppResult<HttpResponse> {
    if profile.is_empty() {
        return Err(AppError::Unauthorized);
    }

    let body = indent_json(profile.as_bytes(), TAB_INDENT).map_err(|e| {
        // 출력 버퍼 쓰기 실패만 내부 에러, 나머지는 GitHub가 보낸 본문의 문제
        if e.is_io() {
            log::error!("프로필 응답 직렬화 실패: {}", e);
            return AppError::InternalError(format!("프로필 직렬화 실패: {}", e));
        }
        log::error!("GitHub 프로필이 올바른 JSON이 아닙니다: {}", e);
        AppError::UpstreamError(format!("GitHub 프로필 파싱 실패: {}", e))
    })?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, GithubOAuthConfig, ServerConfig};
    use crate::routes::configure_all_routes;
    use crate::services::auth::build_http_client;
    use actix_web::http::StatusCode;
    use actix_web::web::Bytes;
    use actix_web::{test, App};
    use mockito::Matcher;

    fn test_config(base_url: &str) -> AppConfig {
        AppConfig {
            server: ServerConfig {
                port: 8080,
                public_port: "8080".to_string(),
                host: "localhost".to_string(),
                protocol: "http".to_string(),
                workers: 1,
            },
            github: GithubOAuthConfig {
                client_id: "client-id".to_string(),
                client_secret: "client-secret".to_string(),
                authorize_url: "https://github.com/login/oauth/authorize".to_string(),
                token_url: format!("{}/login/oauth/access_token", base_url),
                user_api_url: format!("{}/user", base_url),
            },
        }
    }

    fn service_data(base_url: &str) -> web::Data<GithubAuthService> {
        web::Data::new(GithubAuthService::new(
            &test_config(base_url),
            build_http_client().unwrap(),
        ))
    }

    async fn mock_token_endpoint(server: &mut mockito::ServerGuard) -> mockito::Mock {
        server
            .mock("POST", "/login/oauth/access_token")
            .match_header("content-type", "application/json")
            .match_header("accept", "application/json")
            .match_body(Matcher::Json(serde_json::json!({
                "client_id": "client-id",
                "client_secret": "client-secret",
                "code": "abc"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"access_token":"tok123","token_type":"bearer","scope":""}"#)
            .create_async()
            .await
    }

    #[actix_web::test]
    async fn test_login_redirects_to_github() {
        let app = test::init_service(
            App::new()
                .app_data(service_data("http://127.0.0.1:1"))
                .configure(configure_all_routes),
        )
        .await;

        let request = test::TestRequest::get().uri("/login/github").to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "https://github.com/login/oauth/authorize?client_id=client-id&redirect_uri=http://localhost:8080/login/github/callback"
        );
    }

    #[actix_web::test]
    async fn test_login_redirect_accepts_any_method() {
        let app = test::init_service(
            App::new()
                .app_data(service_data("http://127.0.0.1:1"))
                .configure(configure_all_routes),
        )
        .await;

        for request in [
            test::TestRequest::post().uri("/login/github").to_request(),
            test::TestRequest::default()
                .method(actix_web::http::Method::HEAD)
                .uri("/login/github")
                .to_request(),
        ] {
            let response = test::call_service(&app, request).await;
            assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        }
    }

    #[actix_web::test]
    async fn test_callback_renders_profile() {
        let mut server = mockito::Server::new_async().await;
        let token_mock = mock_token_endpoint(&mut server).await;
        let user_mock = server
            .mock("GET", "/user")
            .match_header("authorization", "token tok123")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"login":"octocat"}"#)
            .create_async()
            .await;

        let app = test::init_service(
            App::new()
                .app_data(service_data(&server.url()))
                .configure(configure_all_routes),
        )
        .await;

        let request = test::TestRequest::get()
            .uri("/login/github/callback?code=abc")
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let body = test::read_body(response).await;
        assert_eq!(body, Bytes::from_static(b"{\n\t\"login\": \"octocat\"\n}"));

        token_mock.assert_async().await;
        user_mock.assert_async().await;
    }

    #[actix_web::test]
    async fn test_callback_empty_profile_is_unauthorized() {
        let mut server = mockito::Server::new_async().await;
        let _token_mock = mock_token_endpoint(&mut server).await;
        let _user_mock = server
            .mock("GET", "/user")
            .match_header("authorization", "token tok123")
            .with_status(200)
            .with_body("")
            .create_async()
            .await;

        let app = test::init_service(
            App::new()
                .app_data(service_data(&server.url()))
                .configure(configure_all_routes),
        )
        .await;

        let request = test::TestRequest::get()
            .uri("/login/github/callback?code=abc")
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = test::read_body(response).await;
        assert_eq!(body, Bytes::from_static(b"unauthorized"));
    }

    #[actix_web::test]
    async fn test_callback_with_rejected_code_is_unauthorized() {
        let mut server = mockito::Server::new_async().await;
        let _token_mock = server
            .mock("POST", "/login/oauth/access_token")
            .with_status(200)
            .with_body(r#"{"error":"bad_verification_code","error_description":"The code passed is incorrect or expired."}"#)
            .create_async()
            .await;
        let user_mock = server
            .mock("GET", "/user")
            .with_status(401)
            .with_body(r#"{"message":"Bad credentials"}"#)
            .create_async()
            .await;

        let app = test::init_service(
            App::new()
                .app_data(service_data(&server.url()))
                .configure(configure_all_routes),
        )
        .await;

        let request = test::TestRequest::get()
            .uri("/login/github/callback?code=stale")
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        user_mock.assert_async().await;
    }

    #[actix_web::test]
    async fn test_callback_token_endpoint_failure_is_bad_gateway() {
        let mut server = mockito::Server::new_async().await;
        let _token_mock = server
            .mock("POST", "/login/oauth/access_token")
            .with_status(500)
            .create_async()
            .await;
        let user_mock = server
            .mock("GET", "/user")
            .expect(0)
            .create_async()
            .await;

        let app = test::init_service(
            App::new()
                .app_data(service_data(&server.url()))
                .configure(configure_all_routes),
        )
        .await;

        let request = test::TestRequest::get()
            .uri("/login/github/callback?code=abc")
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        user_mock.assert_async().await;
    }

    #[actix_web::test]
    async fn test_callback_invalid_profile_json_is_bad_gateway() {
        let mut server = mockito::Server::new_async().await;
        let _token_mock = mock_token_endpoint(&mut server).await;
        let _user_mock = server
            .mock("GET", "/user")
            .with_status(200)
            .with_body("<html>oops</html>")
            .create_async()
            .await;

        let app = test::init_service(
            App::new()
                .app_data(service_data(&server.url()))
                .configure(configure_all_routes),
        )
        .await;

        let request = test::TestRequest::get()
            .uri("/login/github/callback?code=abc")
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[actix_web::test]
    async fn test_render_profile_empty() {
        let result = render_profile(&GithubProfile::default());

        assert!(matches!(result, Err(AppError::Unauthorized)));
    }
}
