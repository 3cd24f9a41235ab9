//! 서버 설정 관리 모듈
//!
//! 리스너 포트, 워커 수, 그리고 콜백 URL을 만드는 데 쓰이는 외부 주소를 관리합니다.

use std::net::{Ipv4Addr, SocketAddr};

/// 기본 워커 스레드 수
pub const DEFAULT_WORKERS: usize = 4;

/// 콜백 경로. GitHub OAuth App에 등록된 Authorization callback URL과 일치해야 합니다.
pub const CALLBACK_PATH: &str = "/login/github/callback";

/// 서버 바인딩 및 외부 주소 설정
///
/// `host`와 `protocol`은 바인딩 주소가 아니라 브라우저가 돌아올 외부 주소입니다.
/// 리스너는 항상 모든 인터페이스(`0.0.0.0`)에 바인딩됩니다.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// `PORT` - 리스너 포트
    pub port: u16,
    /// `PORT` 원문. 콜백 URL에는 해석된 숫자가 아니라 설정된 문자열이 그대로 들어갑니다.
    pub public_port: String,
    /// `HOST` - 콜백 URL의 호스트
    pub host: String,
    /// `PROTOCOL` - 콜백 URL의 스킴 (`http` / `https`)
    pub protocol: String,
    /// `HTTP_WORKERS` - 워커 스레드 수
    pub workers: usize,
}

impl ServerConfig {
    /// 리스너가 바인딩할 주소를 반환합니다.
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    /// GitHub가 인증 후 브라우저를 돌려보낼 콜백 URL을 반환합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// // PROTOCOL=http HOST=localhost PORT=8080
    /// assert_eq!(server.callback_url(), "http://localhost:8080/login/github/callback");
    /// ```
    pub fn callback_url(&self) -> String {
        format!(
            "{}://{}:{}{}",
            self.protocol, self.host, self.public_port, CALLBACK_PATH
        )
    }
}
