//! Collection source over HTTP
//!
//! Fetches raw collection bodies from the REST API and drives a
//! [`CollectionUnit`] from loading to its settled state.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::config::ApiConfig;
use crate::endpoint;
use crate::envelope;
use crate::error::{FetchError, FetchResult};
use crate::resources::{rank_entries, LeaderboardEntry, Resource, Standing, User, UserDirectory};
use crate::unit::{CollectionUnit, MountToken};

/// Anything that can answer `GET <endpoint>` with a response body
#[async_trait]
pub trait CollectionSource: Send + Sync {
    /// Body of a successful response. Non-success statuses are
    /// [`FetchError::Status`], transport failures [`FetchError::Network`].
    async fn get(&self, endpoint: &str) -> FetchResult<String>;
}

/// REST API client
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the configured API
    pub fn new(config: &ApiConfig) -> FetchResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::Network(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        endpoint::join(&self.base_url, path)
    }
}

#[async_trait]
impl CollectionSource for ApiClient {
    async fn get(&self, endpoint: &str) -> FetchResult<String> {
        let url = self.url(endpoint);
        tracing::debug!(%url, "GET");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Network(format!("request to {} timed out", url))
            } else if e.is_connect() {
                FetchError::Network(format!("failed to connect to {}", url))
            } else {
                FetchError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))
    }
}

/// Fetch and normalize one collection
pub async fn fetch_collection<R, S>(source: &S) -> FetchResult<Vec<R>>
where
    R: Resource,
    S: CollectionSource + ?Sized,
{
    let endpoint = R::KIND.endpoint();
    tracing::info!(resource = %R::KIND, endpoint, "Fetching collection");

    let body = source.get(endpoint).await?;
    let records = envelope::decode(&body)?;

    tracing::info!(resource = %R::KIND, count = records.len(), "Fetched collection");
    Ok(records)
}

fn log_failure<T>(resource: &str, outcome: &FetchResult<T>) {
    if let Err(e) = outcome {
        tracing::warn!(resource, error = %e, "Collection fetch failed");
    }
}

/// Run a unit's single fetch and settle it
pub async fn load_collection<R, S>(source: &S, unit: &mut CollectionUnit<R>)
where
    R: Resource,
    S: CollectionSource + ?Sized,
{
    let outcome = fetch_collection::<R, S>(source).await;
    log_failure(R::KIND.noun(), &outcome);
    unit.settle(outcome);
}

/// Like [`load_collection`], but the outcome is dropped when the view was
/// torn down while the request was in flight
pub async fn load_collection_if_live<R, S>(
    source: &S,
    unit: &mut CollectionUnit<R>,
    token: &MountToken,
) -> bool
where
    R: Resource,
    S: CollectionSource + ?Sized,
{
    let outcome = fetch_collection::<R, S>(source).await;
    log_failure(R::KIND.noun(), &outcome);
    unit.settle_if_live(token, outcome)
}

/// Fetch the leaderboard and the users concurrently and join them.
/// Either request failing fails the whole load.
pub async fn fetch_standings<S>(source: &S) -> FetchResult<Vec<Standing>>
where
    S: CollectionSource + ?Sized,
{
    let (entries, users) = tokio::try_join!(
        fetch_collection::<LeaderboardEntry, S>(source),
        fetch_collection::<User, S>(source),
    )?;

    let directory = UserDirectory::from_users(&users);
    tracing::debug!(entries = entries.len(), users = directory.len(), "Joining leaderboard");
    Ok(rank_entries(entries, &directory))
}

/// Run the leaderboard's fetches and settle the unit
pub async fn load_leaderboard<S>(source: &S, unit: &mut CollectionUnit<Standing>)
where
    S: CollectionSource + ?Sized,
{
    let outcome = fetch_standings(source).await;
    log_failure("leaderboard", &outcome);
    unit.settle(outcome);
}

/// Like [`load_leaderboard`], guarded by a mount token
pub async fn load_leaderboard_if_live<S>(
    source: &S,
    unit: &mut CollectionUnit<Standing>,
    token: &MountToken,
) -> bool
where
    S: CollectionSource + ?Sized,
{
    let outcome = fetch_standings(source).await;
    log_failure("leaderboard", &outcome);
    unit.settle_if_live(token, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devserver::{spawn, FixtureStore, RunningServer};
    use crate::display::{DisplayOptions, Page, Screen};
    use crate::resources::{Activity, ResourceKind, Team, Workout};
    use crate::unit::{Mount, Phase, ViewMode};
    use serde_json::json;
    use std::sync::Arc;

    async fn server(store: FixtureStore) -> (RunningServer, ApiClient) {
        let server = spawn(Arc::new(store)).await.unwrap();
        let client = ApiClient::new(&ApiConfig::with_base_url(&server.base_url)).unwrap();
        (server, client)
    }

    async fn load<R: Resource>(client: &ApiClient) -> CollectionUnit<R> {
        let mut unit = CollectionUnit::for_kind(R::KIND);
        load_collection(client, &mut unit).await;
        unit
    }

    #[tokio::test]
    async fn test_bare_and_enveloped_collections() {
        for envelope in [false, true] {
            let (_server, client) = server(FixtureStore::seeded(envelope)).await;

            let teams = load::<Team>(&client).await;
            assert!(!teams.is_loading());
            assert!(teams.error().is_none());
            assert_eq!(teams.len(), 2);

            assert_eq!(load::<User>(&client).await.len(), 12);
            assert_eq!(load::<Workout>(&client).await.len(), 6);
            assert!(load::<Activity>(&client).await.len() >= 36);
            assert_eq!(load::<LeaderboardEntry>(&client).await.len(), 12);
        }
    }

    #[tokio::test]
    async fn test_non_success_status_fails_every_unit() {
        let store = FixtureStore::seeded(false);
        for kind in ResourceKind::ALL {
            store.fail(kind, 500).await;
        }
        let (_server, client) = server(store).await;

        let teams = load::<Team>(&client).await;
        assert_eq!(teams.error(), Some("HTTP error! status: 500"));
        assert!(teams.records().is_empty());

        let users = load::<User>(&client).await;
        assert!(!users.error().unwrap().is_empty());
        assert!(users.is_empty());

        let mut board = CollectionUnit::for_kind(ResourceKind::Leaderboard);
        load_leaderboard(&client, &mut board).await;
        assert_eq!(board.error(), Some("HTTP error! status: 500"));
        assert!(board.is_empty());
    }

    #[tokio::test]
    async fn test_empty_collection_is_empty_phase() {
        let (_server, client) = server(FixtureStore::empty(true)).await;

        let unit = load::<Workout>(&client).await;
        assert_eq!(unit.phase(), Phase::Empty);

        let page = Page::build(ResourceKind::Workouts, &unit, &DisplayOptions::default());
        assert!(matches!(page.screen, Screen::Empty { .. }));
        assert_eq!(page.header.unwrap().count, 0);
    }

    #[tokio::test]
    async fn test_toggle_does_not_refetch() {
        let (server, client) = server(FixtureStore::seeded(false)).await;

        let mut unit = load::<Team>(&client).await;
        assert_eq!(server.store.hits(ResourceKind::Teams), 1);

        unit.toggle_view();
        assert_eq!(unit.view(), ViewMode::Cards);
        unit.toggle_view();
        assert_eq!(unit.view(), ViewMode::Table);

        assert_eq!(unit.len(), 2);
        assert_eq!(server.store.hits(ResourceKind::Teams), 1);
    }

    #[tokio::test]
    async fn test_leaderboard_joins_names() {
        let store = FixtureStore::empty(false);
        store
            .set_collection(
                ResourceKind::Leaderboard,
                vec![json!({"id": 1, "user_id": 7, "total_points": 50})],
            )
            .await;
        store
            .set_collection(ResourceKind::Users, vec![json!({"id": 7, "name": "Ada"})])
            .await;
        let (server, client) = server(store).await;

        let mut unit = CollectionUnit::for_kind(ResourceKind::Leaderboard);
        load_leaderboard(&client, &mut unit).await;

        let top = &unit.records()[0];
        assert_eq!(top.rank, 1);
        assert_eq!(top.name, "Ada");
        assert_eq!(top.points_label(), "50 pts");
        assert_eq!(top.tier.label(), "Top 3");
        assert_eq!(server.store.hits(ResourceKind::Leaderboard), 1);
        assert_eq!(server.store.hits(ResourceKind::Users), 1);
    }

    #[tokio::test]
    async fn test_leaderboard_unit_bare_and_enveloped() {
        for envelope in [false, true] {
            let (_server, client) = server(FixtureStore::seeded(envelope)).await;

            let mut unit = CollectionUnit::for_kind(ResourceKind::Leaderboard);
            load_leaderboard(&client, &mut unit).await;

            assert!(unit.error().is_none());
            assert_eq!(unit.len(), 12);
            let ranks: Vec<usize> = unit.records().iter().map(|s| s.rank).collect();
            assert_eq!(ranks, (1..=12).collect::<Vec<_>>());
        }
    }

    #[tokio::test]
    async fn test_empty_leaderboard_is_empty_phase() {
        let (_server, client) = server(FixtureStore::empty(true)).await;

        let mut unit = CollectionUnit::for_kind(ResourceKind::Leaderboard);
        load_leaderboard(&client, &mut unit).await;

        assert_eq!(unit.phase(), Phase::Empty);
    }

    #[tokio::test]
    async fn test_torn_down_leaderboard_discards_outcome() {
        let (_server, client) = server(FixtureStore::seeded(false)).await;
        let mount = Mount::new();
        let token = mount.token();

        let mut live = CollectionUnit::for_kind(ResourceKind::Leaderboard);
        assert!(load_leaderboard_if_live(&client, &mut live, &token).await);
        assert_eq!(live.len(), 12);

        mount.teardown();
        let mut unit = CollectionUnit::for_kind(ResourceKind::Leaderboard);
        let applied = load_leaderboard_if_live(&client, &mut unit, &token).await;

        assert!(!applied);
        assert!(unit.is_loading());
        assert!(unit.is_empty());
    }

    #[tokio::test]
    async fn test_leaderboard_fails_when_users_fail() {
        let store = FixtureStore::seeded(false);
        store.fail(ResourceKind::Users, 503).await;
        let (_server, client) = server(store).await;

        let standings = fetch_standings(&client).await;
        assert_eq!(standings, Err(FetchError::Status(503)));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        let (server, client) = server(FixtureStore::empty(false)).await;
        drop(server);
        // Give the aborted task a moment to release the socket
        tokio::time::sleep(Duration::from_millis(50)).await;

        let unit = load::<Team>(&client).await;
        assert!(unit.error().unwrap().starts_with("Network error: "));
    }

    #[tokio::test]
    async fn test_torn_down_view_discards_outcome() {
        let (_server, client) = server(FixtureStore::seeded(false)).await;
        let mount = Mount::new();
        let token = mount.token();
        mount.teardown();

        let mut unit = CollectionUnit::<Team>::for_kind(ResourceKind::Teams);
        let applied = load_collection_if_live(&client, &mut unit, &token).await;

        assert!(!applied);
        assert!(unit.is_loading());
        assert!(unit.is_empty());
    }

    /// Source answering from memory
    struct StaticSource(&'static str);

    #[async_trait]
    impl CollectionSource for StaticSource {
        async fn get(&self, _endpoint: &str) -> FetchResult<String> {
            Ok(self.0.to_string())
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let mut unit = CollectionUnit::<Team>::new();
        load_collection(&StaticSource("{\"detail\": \"nope\"}"), &mut unit).await;
        assert!(unit.error().unwrap().starts_with("Parse error: "));

        let mut unit = CollectionUnit::<Team>::new();
        load_collection(&StaticSource("<html>"), &mut unit).await;
        assert!(unit.error().unwrap().starts_with("Parse error: "));
    }

    #[tokio::test]
    async fn test_null_fields_still_populate() {
        let mut unit = CollectionUnit::<Team>::for_kind(ResourceKind::Teams);
        load_collection(
            &StaticSource(r#"[{"id": 7, "name": "A", "created_at": null, "description": null}]"#),
            &mut unit,
        )
        .await;

        assert!(matches!(unit.phase(), Phase::Populated { .. }));
        let page = Page::build(ResourceKind::Teams, &unit, &DisplayOptions::default());
        let Screen::Table { table } = page.screen else {
            panic!("expected a table");
        };
        assert_eq!(table.rows[0][2], crate::display::Cell::text("Invalid Date"));
    }

    #[tokio::test]
    async fn test_dyn_source() {
        let source: Box<dyn CollectionSource> = Box::new(StaticSource("[]"));
        let records: Vec<Team> = fetch_collection(source.as_ref()).await.unwrap();
        assert!(records.is_empty());
    }
}
