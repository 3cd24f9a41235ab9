//! # Domain Layer Module
//!
//! GitHub OAuth 플로우에서 오가는 데이터 형태를 정의합니다.
//! 영속 엔티티는 없으며, 모든 값은 한 요청 안에서 만들어지고 버려집니다.
//!
//! ## 모듈 구성
//!
//! ```text
//! domain/
//! ├── dto/      - GitHub와 주고받는 요청/응답 본문, 콜백 쿼리
//! └── models/   - 파싱하지 않은 GitHub 프로필
//! ```
//!
//! ## 데이터 흐름
//!
//! ```text
//! OAuthCallbackQuery ──► GithubTokenRequest ──► GithubTokenResponse
//!                                                      │ access_token
//!                                                      ▼
//!                                               GithubProfile ──► JSON 응답
//! ```

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;
