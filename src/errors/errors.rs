//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 두 종류의 에러를 구분합니다.
//!
//! - [`ConfigError`] - 서버 기동 전에 발생하는 설정 에러. 프로세스를 종료시킵니다.
//! - [`AppError`] - 요청 처리 중 발생하는 에러. 해당 요청에 대한 HTTP 응답으로만 변환되며
//!   서버 프로세스는 계속 동작합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppError, AppResult};
//!
//! async fn fetch(client: &reqwest::Client, url: &str) -> AppResult<Vec<u8>> {
//!     let response = client.get(url).send().await
//!         .map_err(|e| AppError::UpstreamError(format!("요청 실패: {}", e)))?;
//!     // ...
//! }
//! ```

use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// 401 응답 본문
///
/// 프로필이 비어 있거나 GitHub가 토큰을 거부한 경우 그대로 내려갑니다.
pub const UNAUTHORIZED_BODY: &str = "unauthorized";

/// 요청 처리 중 발생하는 에러 타입
///
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 사용자 프로필을 얻지 못함 (401 Unauthorized)
    #[error("unauthorized")]
    Unauthorized,

    /// GitHub 호출 실패, 비정상 상태 코드, 잘못된 응답 본문 (502 Bad Gateway)
    #[error("Upstream error: {0}")]
    UpstreamError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::UpstreamError(_) => StatusCode::BAD_GATEWAY,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 401은 평문 `unauthorized`, 나머지는 `{"error": ...}` JSON으로 변환합니다.
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Unauthorized => HttpResponse::build(self.status_code())
                .content_type(ContentType::plaintext())
                .body(UNAUTHORIZED_BODY),
            _ => HttpResponse::build(self.status_code())
                .json(serde_json::json!({
                    "error": self.to_string()
                })),
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 서버 기동 시점의 설정 에러
///
/// 이 에러가 발생하면 리스너를 열기 전에 프로세스가 종료됩니다.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// `.env` 파일을 읽지 못함
    #[error("{file} not found: {reason}")]
    EnvFileNotFound { file: String, reason: String },

    /// 필수 환경 변수 누락 (누락된 키를 모두 모아서 보고)
    #[error("missing {} in .env", .0.join(", "))]
    MissingVariables(Vec<&'static str>),

    /// 값은 있으나 해석할 수 없음
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}
