//! HTTP API Client
//!
//! Fetches collections from the OctoFit REST API.

use gloo_net::http::Request;

use octofit::endpoint;
use octofit::envelope;
use octofit::error::FetchResult;
use octofit::resources::{rank_entries, LeaderboardEntry, Resource, Standing, User, UserDirectory};
use octofit::FetchError;

/// Local storage key for a user supplied API URL
const API_URL_KEY: &str = "octofit_api_url";

/// Get the API base URL.
///
/// A URL saved in local storage wins, then `OCTOFIT_API_URL` and
/// `OCTOFIT_CODESPACE_NAME` as set when the bundle was built, then
/// localhost.
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten());

    api_base(
        stored.as_deref(),
        option_env!("OCTOFIT_API_URL"),
        option_env!("OCTOFIT_CODESPACE_NAME"),
    )
}

fn api_base(stored: Option<&str>, built_in: Option<&str>, codespace: Option<&str>) -> String {
    let explicit = stored
        .filter(|url| !url.trim().is_empty())
        .or(built_in);
    endpoint::resolve_base_url(explicit, codespace)
}

fn log_error(message: &str) {
    web_sys::console::error_1(&message.into());
}

/// GET one endpoint and return the body of a successful response
async fn get_body(path: &str) -> FetchResult<String> {
    let url = endpoint::join(&get_api_base(), path);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))
}

/// Fetch and normalize one collection
pub async fn fetch_collection<R: Resource>() -> FetchResult<Vec<R>> {
    let outcome = match get_body(R::KIND.endpoint()).await {
        Ok(body) => envelope::decode(&body),
        Err(e) => Err(e),
    };

    if let Err(e) = &outcome {
        log_error(&format!("Error fetching {}: {}", R::KIND, e));
    }
    outcome
}

/// Fetch the leaderboard, then the users, and join them
pub async fn fetch_standings() -> FetchResult<Vec<Standing>> {
    let entries = fetch_collection::<LeaderboardEntry>().await?;
    let users = fetch_collection::<User>().await?;

    Ok(rank_entries(entries, &UserDirectory::from_users(&users)))
}
