use percent_encoding::percent_decode_str;
use regex::Regex;
use url::Url;

/// Extracts a canonical project identifier from a stored location, which may
/// be a full URL into the code-review system or already a bare project name.
///
/// Recognized URL shapes, tried in order:
/// - gitiles browse paths: `/plugins/gitiles/<project>/+/...`
/// - REST paths: `/projects/<project>/...` (project slashes arrive encoded)
/// - search queries: `?q=project:<project>`
///
/// Matches are percent-decoded and encoded path separators turned back into
/// literal `/`. Anything else, including unparsable URLs, falls back to the
/// raw string with encoded separators decoded. Never fails.
pub fn to_project_name(input: &str) -> String {
    let s = input.trim();
    if s.is_empty() {
        return String::new();
    }
    if is_http_url(s) {
        if let Some(project) = project_from_url(s) {
            return project;
        }
    }
    decode_separators(s)
}

fn is_http_url(s: &str) -> bool {
    if let Ok(re) = Regex::new(r"(?i)^https?://") {
        re.is_match(s)
    } else {
        false
    }
}

fn project_from_url(input: &str) -> Option<String> {
    let url = Url::parse(input).ok()?;
    let path = url.path();

    if let Ok(re) = Regex::new(r"(?i)/plugins/gitiles/([^/][^+]*)/\+/") {
        if let Some(captures) = re.captures(path) {
            return Some(decode_component(&captures[1]));
        }
    }
    if let Ok(re) = Regex::new(r"(?i)/projects/([^/]+)(?:/|$)") {
        if let Some(captures) = re.captures(path) {
            return Some(decode_component(&captures[1]));
        }
    }
    let query = url
        .query_pairs()
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value.into_owned())?;
    if let Ok(re) = Regex::new(r"(?i)project:([^ ]+)") {
        if let Some(captures) = re.captures(&query) {
            return Some(decode_separators(&captures[1]));
        }
    }
    None
}

fn decode_component(s: &str) -> String {
    let decoded = percent_decode_str(s).decode_utf8_lossy();
    decode_separators(&decoded)
}

fn decode_separators(s: &str) -> String {
    if let Ok(re) = Regex::new(r"(?i)%2F") {
        re.replace_all(s, "/").into_owned()
    } else {
        s.to_string()
    }
}
