//! GitHub OAuth 로그인 서버 메인 애플리케이션
//!
//! 설정을 읽고 Actix-web 기반의 HTTP 서버를 구동합니다.
//! 필수 설정이 빠져 있거나 포트를 바인딩할 수 없으면 즉시 종료합니다.

use std::io;
use actix_web::{middleware, web, App, HttpServer};
use env_logger::Env;
use log::{error, info};
use github_oauth_login::config::AppConfig;
use github_oauth_login::errors::ConfigError;
use github_oauth_login::routes::configure_all_routes;
use github_oauth_login::services::auth::{build_http_client, GithubAuthService};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    let env_file = load_env_file();
    init_logging();

    info!("🚀 GitHub OAuth 로그인 서버 시작중...");

    if let Err(e) = env_file {
        error!("{}", e);
        return Err(io::Error::other(e));
    }

    let config = AppConfig::from_env().map_err(|e| {
        error!("설정 로드 실패: {}", e);
        io::Error::other(e)
    })?;

    info!("✅ 설정 로드 완료: {:?}", config.github);

    // HTTP 서버 시작
    start_http_server(config).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 모든 인터페이스의 `PORT`에 바인딩하며, 요청 로깅과 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - HTTP 클라이언트 생성 실패, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(config: AppConfig) -> io::Result<()> {
    let bind_address = config.server.bind_address();

    let client = build_http_client().map_err(|e| {
        error!("HTTP 클라이언트 생성 실패: {}", e);
        io::Error::other(e)
    })?;
    let github_auth_service = web::Data::new(GithubAuthService::new(&config, client));

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 OAuth 콜백 URL: {}", config.server.callback_url());

    HttpServer::new(move || {
        App::new()
            .app_data(github_auth_service.clone())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(config.server.workers)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
/// 파일이 없으면 서버를 시작하지 않습니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 / 미설정 - 기본 .env 파일 로드
///
/// # Examples
///
/// ```bash
/// # 개발 환경
/// PROFILE=dev cargo run
///
/// # 기본 .env
/// cargo run
/// ```
fn load_env_file() -> Result<(), ConfigError> {
    let file = match std::env::var("PROFILE").as_deref() {
        Ok("prod") => ".env.prod",
        Ok("dev") => ".env.dev",
        _ => ".env",
    };

    dotenv::from_filename(file)
        .map(|_| ())
        .map_err(|e| ConfigError::EnvFileNotFound {
            file: file.to_string(),
            reason: e.to_string(),
        })
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// # Examples
///
/// ```bash
/// RUST_LOG=github_oauth_login::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}
