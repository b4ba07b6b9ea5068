//! Locates JSON arrays embedded in free text.
//!
//! Models like to wrap the requested JSON in prose or code fences. Rather than
//! slicing from the first `[` to the last `]`, every `[` is tried as the start
//! of an array and matched to its balanced closing bracket. Brackets inside
//! JSON string literals do not count.

use serde_json::Value;

/// Iterates over balanced `[...]` spans in `text`, in order of their opening bracket.
pub fn bracketed_spans(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.char_indices()
        .filter(|&(_, c)| c == '[')
        .filter_map(move |(start, _)| balanced_end(text, start).map(|end| &text[start..=end]))
}

/// First balanced span that parses as a JSON array.
pub fn first_json_array(text: &str) -> Option<&str> {
    bracketed_spans(text).find(|span| matches!(serde_json::from_str::<Value>(span), Ok(Value::Array(_))))
}

/// Byte index of the `]` closing the `[` at `start`, if the brackets balance.
fn balanced_end(text: &str, start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + offset);
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_array() {
        assert_eq!(first_json_array(r#"[{"a":1}]"#), Some(r#"[{"a":1}]"#));
    }

    #[test]
    fn test_array_surrounded_by_prose() {
        let text = r#"Here you go: [{"match":"A - B","1":"2.0"}] Hope that helps!"#;
        assert_eq!(first_json_array(text), Some(r#"[{"match":"A - B","1":"2.0"}]"#));
    }

    #[test]
    fn test_code_fence() {
        let text = "```json\n[\n  {\"match\": \"A - B\"}\n]\n```";
        assert_eq!(first_json_array(text), Some("[\n  {\"match\": \"A - B\"}\n]"));
    }

    #[test]
    fn test_nested_arrays_kept_whole() {
        let text = r#"Result: [[1, 2], [3]] and later [9]"#;
        assert_eq!(first_json_array(text), Some("[[1, 2], [3]]"));
    }

    #[test]
    fn test_brackets_inside_strings_ignored() {
        let text = r#"[{"match": "Team [B] - \"C]\""}]"#;
        assert_eq!(first_json_array(text), Some(text));
    }

    #[test]
    fn test_skips_prose_brackets_that_are_not_json() {
        // A trailing "]" would fool a first-[ / last-] slice.
        let text = r#"Note [see below]: [{"match":"A - B"}] (source [1]"#;
        assert_eq!(first_json_array(text), Some(r#"[{"match":"A - B"}]"#));
    }

    #[test]
    fn test_array_inside_object() {
        let text = r#"{"matches": [{"match": "A - B"}]}"#;
        assert_eq!(first_json_array(text), Some(r#"[{"match": "A - B"}]"#));
    }

    #[test]
    fn test_no_array() {
        assert_eq!(first_json_array("Omlouvám se, v obrázku nejsou žádné zápasy."), None);
        assert_eq!(first_json_array(""), None);
    }

    #[test]
    fn test_unbalanced_array() {
        assert_eq!(first_json_array(r#"[{"match": "A - B"}"#), None);
        assert_eq!(bracketed_spans("[[1]").collect::<Vec<_>>(), vec!["[1]"]);
    }

    #[test]
    fn test_spans_listed_in_order() {
        let spans: Vec<&str> = bracketed_spans("x [a] y [b [c]]").collect();
        assert_eq!(spans, vec!["[a]", "[b [c]]", "[c]"]);
    }

    #[test]
    fn test_multibyte_text_before_array() {
        let text = "Výsledek: [{\"match\": \"Plzeň - Baník\"}]";
        assert_eq!(first_json_array(text), Some("[{\"match\": \"Plzeň - Baník\"}]"));
    }
}
