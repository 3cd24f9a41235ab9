//! # JSON 유틸리티
//!
//! 외부에서 받은 JSON 문서를 들여쓰기만 바꿔서 다시 출력합니다.
//! 문자열과 숫자 리터럴은 입력 바이트 그대로 복사되므로 키 순서, 중복 키,
//! 이스케이프 표기, 숫자 표기가 모두 유지됩니다.

use serde::de::IgnoredAny;

/// 프로필 응답에 사용하는 들여쓰기
pub const TAB_INDENT: &[u8] = b"\t";

/// JSON 바이트열을 주어진 들여쓰기로 다시 포맷합니다.
///
/// 문서 앞의 공백은 버리고 문서 뒤의 공백은 그대로 붙입니다.
/// 빈 객체와 빈 배열은 `{}` / `[]`로 출력됩니다.
///
/// # Errors
///
/// 입력이 올바른 JSON 문서가 아니면 `serde_json::Error`를 반환합니다.
///
/// # Examples
///
/// ```rust,ignore
/// use crate::utils::json_utils::{indent_json, TAB_INDENT};
///
/// let pretty = indent_json(br#"{"login":"octocat"}"#, TAB_INDENT)?;
/// assert_eq!(pretty, b"{\n\t\"login\": \"octocat\"\n}");
/// ```
pub fn indent_json(raw: &[u8], indent: &[u8]) -> Result<Vec<u8>, serde_json::Error> {
    // 구조 검증만 하고 값은 만들지 않음
    serde_json::from_slice::<IgnoredAny>(raw)?;

    let end = raw.len() - raw.iter().rev().take_while(|b| is_space(**b)).count();

    let mut out = Vec::with_capacity(raw.len() * 2);
    let mut depth = 0usize;
    // 여는 괄호 직후. 다음 토큰이 닫는 괄호면 빈 컨테이너로 붙여 씁니다.
    let mut pending_open = false;
    let mut i = 0;

    while i < end {
        let c = raw[i];
        if is_space(c) {
            i += 1;
            continue;
        }

        if pending_open && c != b'}' && c != b']' {
            pending_open = false;
            depth += 1;
            newline(&mut out, indent, depth);
        }

        match c {
            b'"' => {
                let start = i;
                i += 1;
                while i < end {
                    match raw[i] {
                        b'\\' => i += 2,
                        b'"' => {
                            i += 1;
                            break;
                        }
                        _ => i += 1,
                    }
                }
                out.extend_from_slice(&raw[start..i.min(end)]);
                continue;
            }
            b'{' | b'[' => {
                out.push(c);
                pending_open = true;
            }
            b'}' | b']' => {
                if pending_open {
                    pending_open = false;
                } else {
                    depth = depth.saturating_sub(1);
                    newline(&mut out, indent, depth);
                }
                out.push(c);
            }
            b',' => {
                out.push(c);
                newline(&mut out, indent, depth);
            }
            b':' => out.extend_from_slice(b": "),
            _ => out.push(c),
        }
        i += 1;
    }

    out.extend_from_slice(&raw[end..]);
    Ok(out)
}

fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

fn newline(out: &mut Vec<u8>, indent: &[u8], depth: usize) {
    out.push(b'\n');
    for _ in 0..depth {
        out.extend_from_slice(indent);
    }
}
