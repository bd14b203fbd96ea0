//! Request header construction and curl reproduction.

/// Builds the header list for a dispatch run.
///
/// `raw_lines` is line-oriented `Key: Value` text; lines without a colon
/// are ignored, as are lines with an empty key. A repeated key replaces
/// the earlier value (matched case-insensitively, keeping the original
/// position). A non-empty bearer token injects an `Authorization: Bearer`
/// header, and `Content-Type` is forced to `application/json` last; user
/// input cannot override it.
#[must_use]
pub fn build_headers(raw_lines: &str, bearer_token: &str) -> Vec<(String, String)> {
    let mut headers: Vec<(String, String)> = Vec::new();

    for line in raw_lines.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        set_header(&mut headers, key, value.trim());
    }

    let token = bearer_token.trim();
    if !token.is_empty() {
        set_header(&mut headers, "Authorization", &format!("Bearer {token}"));
    }
    set_header(&mut headers, "Content-Type", "application/json");
    headers
}

/// Renders a `curl` command reproducing the dispatch request for one file.
///
/// The payload is referenced by filename so the command can be run from
/// the directory the records were written to.
#[must_use]
pub fn curl_example(method: &str, url: &str, headers: &[(String, String)], filename: &str) -> String {
    let url = if url.trim().is_empty() { "https://YOUR_URL" } else { url };
    let mut out = format!("curl -X {} {}", method.to_uppercase(), shell_quote(url));
    for (key, value) in headers {
        out.push_str(" \\\n  -H ");
        out.push_str(&shell_quote(&format!("{key}: {value}")));
    }
    out.push_str(" \\\n  --data-binary @");
    out.push_str(&shell_quote(filename));
    out
}

fn set_header(headers: &mut Vec<(String, String)>, key: &str, value: &str) {
    let existing =
        headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(key));
    match existing {
        Some((_, v)) => *v = value.to_string(),
        None => headers.push((key.to_string(), value.to_string())),
    }
}

fn shell_quote(text: &str) -> String {
    format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
}
