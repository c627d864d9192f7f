//! API base URL resolution shared by the native client and the browser.

/// Used when neither an explicit URL nor a codespace name is known
pub const LOCAL_API_URL: &str = "http://localhost:8000";

/// Forwarded port 8000 of a GitHub Codespace
pub fn codespace_url(name: &str) -> String {
    format!("https://{}-8000.app.github.dev", name.trim())
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Pick the base URL: an explicit URL wins, then the codespace, then
/// localhost. The result has no trailing slash.
pub fn resolve_base_url(explicit: Option<&str>, codespace: Option<&str>) -> String {
    let url = match (present(explicit), present(codespace)) {
        (Some(url), _) => url.to_string(),
        (None, Some(name)) => codespace_url(name),
        (None, None) => LOCAL_API_URL.to_string(),
    };
    url.trim_end_matches('/').to_string()
}

/// `base` joined with an endpoint path such as `/api/teams/`
pub fn join(base: &str, endpoint: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), endpoint)
}
