//! GitHub OAuth 플로우 DTO

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
