//! URL extraction from free text.
//!
//! Finds the first URL-like substring in a line of chat text so the renderer
//! can turn it into a clickable segment. Two forms are recognized: a
//! scheme-prefixed URL (`http://...`) and a bare domain (`foo.com`).

use std::sync::LazyLock;

use regex::Regex;

/// Scheme-prefixed URL or bare domain.
///
/// The scheme alternative is listed first so it wins when both could match
/// at the same start position.
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z]+://\S+|\w+[A-Za-z0-9-]*\.[A-Za-z]+\S*").expect("url pattern compiles")
});

/// Characters that read as sentence punctuation when trailing a match.
const TRAILING_PUNCTUATION: [char; 3] = ['.', '?', '!'];

/// Splits `text` around the first URL-like substring.
///
/// Returns `(prefix, url, suffix)` with `prefix + url + suffix == text`, or
/// `None` when nothing in `text` looks like a URL. A match touching the
/// string start has an empty prefix; one touching the end has an empty
/// suffix. If the match's final character is `.`, `?`, or `!` it is moved
/// out of the url onto the front of the suffix, so sentence punctuation
/// never becomes part of a link.
pub fn parse_out_url(text: &str) -> Option<(String, String, String)> {
    let found = URL_RE.find(text)?;
    let prefix = &text[..found.start()];
    let mut url = found.as_str();
    let mut suffix = text[found.end()..].to_string();

    if let Some(last) = url.chars().last()
        && TRAILING_PUNCTUATION.contains(&last)
    {
        url = &url[..url.len() - last.len_utf8()];
        suffix.insert(0, last);
    }

    Some((prefix.to_string(), url.to_string(), suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(text: &str) -> (String, String, String) {
        parse_out_url(text).expect("expected a match")
    }

    #[test]
    fn plain_text_has_no_match() {
        assert_eq!(parse_out_url("hello there"), None);
        assert_eq!(parse_out_url(""), None);
        assert_eq!(parse_out_url("end of sentence. Next one"), None);
    }

    #[test]
    fn bare_domain_in_the_middle() {
        assert_eq!(
            parts("see foo.com now"),
            ("see ".to_string(), "foo.com".to_string(), " now".to_string())
        );
    }

    #[test]
    fn trailing_period_moves_to_suffix() {
        assert_eq!(
            parts("go to http://x.io."),
            ("go to ".to_string(), "http://x.io".to_string(), ".".to_string())
        );
    }

    #[test]
    fn match_at_string_start_has_empty_prefix() {
        assert_eq!(
            parts("foo.com is neat"),
            (String::new(), "foo.com".to_string(), " is neat".to_string())
        );
    }

    #[test]
    fn match_at_string_end_has_empty_suffix() {
        assert_eq!(
            parts("read https://docs.rs/regex"),
            (
                "read ".to_string(),
                "https://docs.rs/regex".to_string(),
                String::new()
            )
        );
    }

    #[test]
    fn question_and_exclamation_trim_too() {
        assert_eq!(
            parts("try foo.com!"),
            ("try ".to_string(), "foo.com".to_string(), "!".to_string())
        );
        assert_eq!(
            parts("seen bar.org?"),
            ("seen ".to_string(), "bar.org".to_string(), "?".to_string())
        );
    }

    #[test]
    fn leftmost_match_wins() {
        let (prefix, url, suffix) = parts("a.com then b.com");
        assert_eq!(prefix, "");
        assert_eq!(url, "a.com");
        assert_eq!(suffix, " then b.com");
    }

    #[test]
    fn scheme_match_keeps_path_and_query() {
        let (_, url, _) = parts("at https://x.io/a?b=1&c=2 ok");
        assert_eq!(url, "https://x.io/a?b=1&c=2");
    }

    #[test]
    fn pieces_reassemble_to_input() {
        for text in [
            "see foo.com now",
            "go to http://x.io.",
            "foo.com",
            "x https://a.b/c?d=e!",
        ] {
            let (prefix, url, suffix) = parts(text);
            assert_eq!(format!("{prefix}{url}{suffix}"), text);
        }
    }
}
