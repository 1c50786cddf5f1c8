use std::collections::BTreeMap;

pub const REDACTED: &str = "<redacted>";

/// Copy of `headers` with the named secret-bearing headers masked.
///
/// Matching is case-insensitive. `authorization` and `cookie` are always masked.
pub fn redact_headers(
    headers: &BTreeMap<String, String>,
    secret_header_names: &[&str],
) -> BTreeMap<String, String> {
    let mut out = headers.clone();
    for name in ["authorization", "cookie"].iter().chain(secret_header_names) {
        replace_case_insensitive(&mut out, name);
    }
    out
}

fn replace_case_insensitive(map: &mut BTreeMap<String, String>, header: &str) {
    let keys = map
        .keys()
        .filter(|k| k.eq_ignore_ascii_case(header))
        .cloned()
        .collect::<Vec<_>>();
    for k in keys {
        map.insert(k, REDACTED.to_string());
    }
}
