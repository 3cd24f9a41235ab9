//! GitHub OAuth 요청 DTO
//!
//! 콜백으로 들어오는 쿼리 파라미터와 토큰 교환 시 GitHub에 보내는 본문을 매핑합니다.
use serde::{Deserialize, Serialize};

/// OAuth 콜백 쿼리 파라미터 구조체
///
/// `code`는 형식 검증 없이 그대로 토큰 교환에 전달됩니다.
/// 파라미터가 없으면 빈 문자열이 됩니다.
#[derive(Debug, Deserialize)]
pub struct OAuthCallbackQuery {
    #[serde(default)]
    pub code: String,

    /// 에러가 있을 경우 (사용자가 거부했거나 에러 발생)
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// Authorization Code → Access Token 교환 요청 본문
///
/// ```json
/// {"client_id": "...", "client_secret": "...", "code": "..."}
/// ```
#[derive(Serialize)]
pub struct GithubTokenRequest<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub code: &'a str,
}
