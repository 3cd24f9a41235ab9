//! # GitHub OAuth Configuration Module
//!
//! GitHub OAuth App 자격 증명과 GitHub 엔드포인트 주소를 관리합니다.
//!
//! ## 필수 환경 변수
//!
//! ```bash
//! export GITHUB_CLIENT_ID="your-github-client-id"
//! export GITHUB_CLIENT_SECRET="your-github-client-secret"
//! ```
//!
//! ## 선택 환경 변수
//!
//! 엔드포인트는 기본값을 제공하며, 테스트나 GitHub Enterprise 환경에서만 바꿉니다.
//!
//! ```bash
//! export GITHUB_AUTHORIZE_URL="https://github.com/login/oauth/authorize"
//! export GITHUB_TOKEN_URL="https://github.com/login/oauth/access_token"
//! export GITHUB_USER_API_URL="https://api.github.com/user"
//! ```

use std::fmt;

/// GitHub 인증 페이지 기본 주소
pub const DEFAULT_AUTHORIZE_URL: &str = "https://github.com/login/oauth/authorize";

/// Authorization Code 교환 기본 주소
pub const DEFAULT_TOKEN_URL: &str = "https://github.com/login/oauth/access_token";

/// 인증된 사용자 프로필 조회 기본 주소
pub const DEFAULT_USER_API_URL: &str = "https://api.github.com/user";

/// GitHub OAuth App 설정
///
/// GitHub Developer Settings > OAuth Apps 에서 발급한 클라이언트 정보와
/// 세 개의 GitHub 엔드포인트를 담습니다. 기동 시 한 번 만들어진 뒤 읽기 전용으로 공유됩니다.
///
/// ## GitHub 설정 가이드
///
/// 1. GitHub > Settings > Developer settings > OAuth Apps 이동
/// 2. New OAuth App 생성
/// 3. Authorization callback URL: `http://localhost:8080/login/github/callback`
///
/// ## 보안 고려사항
///
/// `client_secret`은 `Debug` 출력에서 가려집니다. 로그에 직접 출력하지 마세요.
#[derive(Clone)]
pub struct GithubOAuthConfig {
    /// OAuth App Client ID (공개되어도 안전)
    pub client_id: String,
    /// OAuth App Client Secret (서버 사이드 전용)
    pub client_secret: String,
    pub authorize_url: String,
    pub token_url: String,
    pub user_api_url: String,
}

impl GithubOAuthConfig {
    /// GitHub 인증 페이지 URL을 생성합니다.
    ///
    /// 값은 인코딩 없이 그대로 이어 붙입니다.
    ///
    /// ```text
    /// https://github.com/login/oauth/authorize?client_id=CLIENT_ID&redirect_uri=http://localhost:8080/login/github/callback
    /// ```
    pub fn authorization_url(&self, redirect_uri: &str) -> String {
        format!(
            "{}?client_id={}&redirect_uri={}",
            self.authorize_url, self.client_id, redirect_uri
        )
    }
}

impl fmt::Debug for GithubOAuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GithubOAuthConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("authorize_url", &self.authorize_url)
            .field("token_url", &self.token_url)
            .field("user_api_url", &self.user_api_url)
            .finish()
    }
}
