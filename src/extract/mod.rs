use std::sync::OnceLock;

use regex::Regex;
use serde::de::DeserializeOwned;

fn fence_re() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)```(?:html)?\n?").ok()).as_ref()
}

fn document_re() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<!DOCTYPE html>.*</html>").ok()).as_ref()
}

/// Removes Markdown code-fence markers (` ```html ` and bare ` ``` `).
pub fn strip_code_fences(text: &str) -> String {
    match fence_re() {
        Some(re) => re.replace_all(text, "").into_owned(),
        None => text.to_string(),
    }
}

/// Best-effort: returns the HTML document contained in `raw`, or `None` when
/// the text has no markup at all.
///
/// Fences are stripped first; then the widest `<!DOCTYPE html>…</html>` span
/// wins, discarding commentary around it. Without a doctype span the trimmed
/// text is used as long as it carries both angle brackets.
pub fn extract_html(raw: &str) -> Option<String> {
    let unfenced = strip_code_fences(raw);
    let html = match document_re().and_then(|re| re.find(&unfenced)) {
        Some(m) => m.as_str().trim().to_string(),
        None => unfenced.trim().to_string(),
    };
    if html.contains('<') && html.contains('>') {
        Some(html)
    } else {
        None
    }
}

/// Extracts the first top-level JSON object substring from a string.
/// Handles nested braces and braces inside string literals; returns None if
/// no balanced object is found.
pub fn extract_first_json_object(s: &str) -> Option<&str> {
    extract_balanced(s, b'{', b'}')
}

/// Same as [`extract_first_json_object`] for a top-level JSON array.
pub fn extract_first_json_array(s: &str) -> Option<&str> {
    extract_balanced(s, b'[', b']')
}

fn extract_balanced(s: &str, open: u8, close: u8) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut start = None;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in bytes.iter().enumerate() {
        if start.is_some() && in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        if b == b'"' && start.is_some() {
            in_string = true;
        } else if b == open {
            if start.is_none() {
                start = Some(i);
            }
            depth += 1;
        } else if b == close && depth > 0 {
            depth -= 1;
            if depth == 0 {
                return start.map(|st| &s[st..=i]);
            }
        }
    }
    None
}

/// Parses the first JSON object found in `text` into `T`.
pub fn parse_first_json_object<T: DeserializeOwned>(text: &str) -> Option<T> {
    serde_json::from_str(text.trim())
        .ok()
        .or_else(|| extract_first_json_object(text).and_then(|obj| serde_json::from_str(obj).ok()))
}

/// Parses the first JSON array found in `text` into `T`.
pub fn parse_first_json_array<T: DeserializeOwned>(text: &str) -> Option<T> {
    extract_first_json_array(text).and_then(|arr| serde_json::from_str(arr).ok())
}

/// The first `max_chars` characters of `text`, for debug excerpts.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    const PAGE: &str = "<!DOCTYPE html><html><body>Hi</body></html>";

    #[test]
    fn fenced_document_is_unwrapped() {
        let raw = format!("```html\n{PAGE}\n```");
        assert_eq!(extract_html(&raw).as_deref(), Some(PAGE));
    }

    #[test]
    fn commentary_around_document_is_dropped() {
        let raw = format!("Sure! Here is your interface:\n\n{PAGE}\n\nLet me know if you want changes.");
        assert_eq!(extract_html(&raw).as_deref(), Some(PAGE));
    }

    #[test]
    fn doctype_match_is_case_insensitive_and_spans_lines() {
        let raw = "intro\n<!doctype HTML>\n<html>\n<body>\n<p>x</p>\n</body>\n</HTML>\ntrailer";
        assert_eq!(
            extract_html(raw).as_deref(),
            Some("<!doctype HTML>\n<html>\n<body>\n<p>x</p>\n</body>\n</HTML>")
        );
    }

    #[test]
    fn greedy_match_keeps_everything_up_to_last_close() {
        let raw = "<!DOCTYPE html><html><body><pre></html></pre></body></html> tail";
        assert_eq!(
            extract_html(raw).as_deref(),
            Some("<!DOCTYPE html><html><body><pre></html></pre></body></html>")
        );
    }

    #[test]
    fn fragment_without_doctype_is_accepted_trimmed() {
        assert_eq!(extract_html("\n  <div>panel</div>  \n").as_deref(), Some("<div>panel</div>"));
    }

    #[test]
    fn text_without_markup_is_rejected() {
        assert_eq!(extract_html("I cannot help with that."), None);
        assert_eq!(extract_html("only an opening < here"), None);
        assert_eq!(extract_html("```html\n```"), None);
        assert_eq!(extract_html(""), None);
    }

    #[test]
    fn bare_fence_without_language_is_stripped() {
        assert_eq!(strip_code_fences("```\n<p>a</p>\n```"), "<p>a</p>\n");
        assert_eq!(strip_code_fences("```HTML\n<p>a</p>"), "<p>a</p>");
    }

    #[test]
    fn first_json_object_handles_nesting_and_prose() {
        let text = r#"Here you go: {"a": {"b": 1}, "c": "}"} and {"second": true}"#;
        assert_eq!(extract_first_json_object(text), Some(r#"{"a": {"b": 1}, "c": "}"}"#));
    }

    #[test]
    fn unbalanced_json_is_not_found() {
        assert_eq!(extract_first_json_object(r#"{"a": 1"#), None);
        assert_eq!(extract_first_json_object("no braces here"), None);
        assert_eq!(extract_first_json_array("[1, 2"), None);
    }

    #[test]
    fn escaped_quotes_inside_strings() {
        let text = r#"{"q": "say \"hi\" {not a brace}"}"#;
        assert_eq!(extract_first_json_object(text), Some(text));
    }

    #[test]
    fn parses_typed_payloads() {
        #[derive(Deserialize, Debug, PartialEq)]
        #[serde(rename_all = "camelCase")]
        struct Summary {
            description: String,
            tech_stack: Vec<String>,
        }
        let text = "```json\n{\"description\": \"Books dog walks.\", \"techStack\": [\"Rust\", \"Postgres\"]}\n```";
        let parsed: Option<Summary> = parse_first_json_object(text);
        assert_eq!(
            parsed,
            Some(Summary { description: "Books dog walks.".into(), tech_stack: vec!["Rust".into(), "Postgres".into()] })
        );

        let jobs: Option<Vec<String>> = parse_first_json_array("Jobs:\n[\"Build a bot\", \"Tune a model\"]\nDone.");
        assert_eq!(jobs, Some(vec!["Build a bot".to_string(), "Tune a model".to_string()]));

        let broken: Option<Summary> = parse_first_json_object("{\"description\": 5}");
        assert_eq!(broken, None);
    }

    #[test]
    fn excerpt_respects_char_boundaries() {
        assert_eq!(excerpt("héllo wörld", 4), "héll");
        assert_eq!(excerpt("ab", 10), "ab");
    }
}
