use super::classify::find_phrase;

/// Maximum characters of context kept on each side of the match
const CONTEXT_WINDOW: usize = 40;

const ELLIPSIS: &str = "...";

/// Extracts a bounded excerpt around the first occurrence of `phrase`
///
/// The excerpt is up to [`CONTEXT_WINDOW`] characters immediately before the
/// match followed by up to [`CONTEXT_WINDOW`] characters immediately after
/// it; the matched phrase itself is left out. A side gets an ellipsis only
/// when the window cap cut it off while more text remained there; running
/// into the start or end of the text adds nothing. No occurrence yields an
/// empty string.
pub fn extract_snippet(body_text: &str, phrase: &str) -> String {
    let Some((start, end)) = find_phrase(body_text, phrase) else {
        return String::new();
    };

    let front = front_context(&body_text[..start]);
    let back = back_context(&body_text[end..]);
    format!("{front}{back}")
}

/// Last `CONTEXT_WINDOW` characters of the text preceding the match
fn front_context(preceding: &str) -> String {
    // Probe one char beyond the window to tell a cap cut from text start.
    let mut reversed: Vec<char> = preceding.chars().rev().take(CONTEXT_WINDOW + 1).collect();
    let capped = reversed.len() > CONTEXT_WINDOW;
    if capped {
        reversed.pop();
    }

    let context: String = reversed.into_iter().rev().collect();
    if capped {
        format!("{ELLIPSIS}{context}")
    } else {
        context
    }
}

/// First `CONTEXT_WINDOW` characters of the text following the match
fn back_context(following: &str) -> String {
    let mut chars: Vec<char> = following.chars().take(CONTEXT_WINDOW + 1).collect();
    let capped = chars.len() > CONTEXT_WINDOW;
    if capped {
        chars.pop();
    }

    let context: String = chars.into_iter().collect();
    if capped {
        format!("{context}{ELLIPSIS}")
    } else {
        context
    }
}
