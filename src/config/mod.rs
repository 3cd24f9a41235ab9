//! # Configuration Module
//!
//! 서버 설정을 기동 시점에 한 번 읽어 [`AppConfig`]로 만듭니다.
//! 핸들러는 환경 변수를 직접 읽지 않습니다. 설정은 [`GithubAuthService`]를 만들 때
//! 한 번 복사되고, 핸들러는 그 서비스를 `web::Data<GithubAuthService>`로 주입받습니다.
//! 필수 값이 하나라도 빠져 있으면 리스너를 열기 전에 [`ConfigError`]로 실패합니다.
//!
//! [`GithubAuthService`]: crate::services::auth::GithubAuthService
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 포트, 외부 호스트/프로토콜, 워커 수
//! - [`auth_config`] - GitHub OAuth App 자격 증명과 엔드포인트
//!
//! ## 환경 변수 설정 가이드
//!
//! ### 필수 환경 변수
//!
//! ```bash
//! export PORT="8080"
//! export HOST="localhost"
//! export PROTOCOL="http"
//! export GITHUB_CLIENT_ID="your-client-id"
//! export GITHUB_CLIENT_SECRET="your-client-secret"
//! ```
//!
//! ### 선택적 환경 변수
//!
//! ```bash
//! export HTTP_WORKERS="4"
//! export GITHUB_AUTHORIZE_URL="https://github.com/login/oauth/authorize"
//! export GITHUB_TOKEN_URL="https://github.com/login/oauth/access_token"
//! export GITHUB_USER_API_URL="https://api.github.com/user"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use github_oauth_login::config::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! println!("callback: {}", config.server.callback_url());
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

use std::env;
use std::str::FromStr;
use crate::errors::ConfigError;

/// 애플리케이션 전체 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub github: GithubOAuthConfig,
}

impl AppConfig {
    /// 프로세스 환경 변수로부터 설정을 만듭니다.
    ///
    /// `.env` 파일은 이 함수를 호출하기 전에 로드되어 있어야 합니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 키-값 조회 함수로부터 설정을 만듭니다.
    ///
    /// 누락된 필수 키는 첫 번째에서 멈추지 않고 모두 모아 한 번에 보고합니다.
    /// 값이 빈 문자열이어도 설정된 것으로 간주합니다.
    ///
    /// # Errors
    ///
    /// * `ConfigError::MissingVariables` - 필수 키 누락
    /// * `ConfigError::InvalidValue` - `PORT` / `HTTP_WORKERS` 해석 실패
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut reader = EnvReader::new(lookup);

        let port = reader.required("PORT");
        let host = reader.required("HOST");
        let protocol = reader.required("PROTOCOL");
        let client_id = reader.required("GITHUB_CLIENT_ID");
        let client_secret = reader.required("GITHUB_CLIENT_SECRET");

        if !reader.missing.is_empty() {
            return Err(ConfigError::MissingVariables(reader.missing));
        }

        let server = ServerConfig {
            port: parse_value("PORT", port.clone())?,
            public_port: port,
            host,
            protocol,
            workers: match reader.optional("HTTP_WORKERS") {
                Some(workers) => parse_value("HTTP_WORKERS", workers)?,
                None => DEFAULT_WORKERS,
            },
        };

        let github = GithubOAuthConfig {
            client_id,
            client_secret,
            authorize_url: reader
                .optional("GITHUB_AUTHORIZE_URL")
                .unwrap_or_else(|| DEFAULT_AUTHORIZE_URL.to_string()),
            token_url: reader
                .optional("GITHUB_TOKEN_URL")
                .unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string()),
            user_api_url: reader
                .optional("GITHUB_USER_API_URL")
                .unwrap_or_else(|| DEFAULT_USER_API_URL.to_string()),
        };

        Ok(Self { server, github })
    }
}

struct EnvReader<F> {
    lookup: F,
    missing: Vec<&'static str>,
}

impl<F> EnvReader<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn new(lookup: F) -> Self {
        Self { lookup, missing: Vec::new() }
    }

    fn required(&mut self, key: &'static str) -> String {
        match (self.lookup)(key) {
            Some(value) => value,
            None => {
                self.missing.push(key);
                String::new()
            }
        }
    }

    fn optional(&self, key: &str) -> Option<String> {
        (self.lookup)(key).filter(|value| !value.trim().is_empty())
    }
}

fn parse_value<T: FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value })
}
