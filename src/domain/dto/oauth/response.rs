//! GitHub OAuth 응답 DTO 모듈
//!
//! Authorization Code를 Access Token으로 교환할 때 GitHub가 반환하는 응답을 정의합니다.

use serde::Deserialize;

/// GitHub OAuth 토큰 교환 응답
///
/// GitHub는 잘못된 code에 대해서도 200 상태로 에러 문서를 반환합니다.
///
/// ```json
/// {"error": "bad_verification_code", "error_description": "The code passed is incorrect or expired.", "error_uri": "..."}
/// ```
///
/// 이 경우 `access_token`은 빈 문자열로 남고, 이후 프로필 조회가 401로 끝납니다.
#[derive(Debug, Default, Deserialize)]
pub struct GithubTokenResponse {
    /// GitHub OAuth 액세스 토큰
    #[serde(default)]
    pub access_token: String,
    /// 토큰 타입 (보통 "bearer")
    #[serde(default)]
    pub token_type: String,
    /// 부여된 권한 범위
    #[serde(default)]
    pub scope: String,

    pub error: Option<String>,
    pub error_description: Option<String>,
    pub error_uri: Option<String>,
}
