use actix_web::web::Bytes;

/// GitHub 사용자 프로필 원본
///
/// `GET /user` 응답 본문을 파싱하지 않은 채 그대로 보관합니다.
/// 한 요청 안에서 한 번 렌더링되고 버려집니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GithubProfile {
    raw: Bytes,
}

impl GithubProfile {
    pub fn new(raw: Bytes) -> Self {
        Self { raw }
    }

    /// 본문이 비어 있으면 인증되지 않은 것으로 취급합니다.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.raw
    }
}
