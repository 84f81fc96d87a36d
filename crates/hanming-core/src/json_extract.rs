//! Locate the JSON object embedded in a free-text completion.
//!
//! Models asked to "return JSON only" still wrap the object in prose or code
//! fences often enough that the raw text cannot be handed to `serde_json`
//! directly. [`extract_object`] runs an incremental bracket-depth scan that
//! understands JSON string literals (braces inside `"…"` and escaped quotes do
//! not count) and returns the first balanced `{…}` slice.
//!
//! Text carrying more than one balanced object is rejected instead of guessed
//! at: picking either candidate could hand the caller the wrong answer.
//!
//! ```rust
//! use hanming_core::json_extract::extract_object;
//!
//! let text = "Sure! ```json\n{\"characters\": \"雷明\"}\n```";
//! assert_eq!(extract_object(text).unwrap(), "{\"characters\": \"雷明\"}");
//! ```

use crate::error::{HanmingError, Result};

/// Return the first balanced JSON object found in `text`.
///
/// # Errors
///
/// [`HanmingError::MalformedResponse`] when the text contains no `{`, when the
/// first object never closes, or when a second balanced object follows it.
pub fn extract_object(text: &str) -> Result<&str> {
    let start = text
        .find('{')
        .ok_or_else(|| HanmingError::MalformedResponse("no JSON object in completion".into()))?;

    let end = balanced_end(&text[start..])
        .map(|len| start + len)
        .ok_or_else(|| HanmingError::MalformedResponse("unterminated JSON object".into()))?;

    // Any later `{` that opens a balanced object makes the answer ambiguous,
    // even when a stray unbalanced brace comes first.
    let rest = &text[end..];
    let second = rest
        .match_indices('{')
        .any(|(next, _)| balanced_end(&rest[next..]).is_some());
    if second {
        return Err(HanmingError::MalformedResponse(
            "completion contains more than one JSON object".into(),
        ));
    }

    Ok(&text[start..end])
}

/// Byte length of the balanced object `s` starts with, or `None` if it never
/// closes. `s` must start with `{`.
fn balanced_end(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, ch) in s.char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i + ch.len_utf8());
                }
            }
            _ => {}
        }
    }

    None
}
