//! End-to-end fallback resolution against mock primary and external servers,
//! including the name fan-in used by the match and ranking commands.

use std::time::Duration;

use max_break::app::App;
use max_break::constants::{DEFAULT_HTTP_TIMEOUT_SECONDS, UNKNOWN_PLAYER, external_api};
use max_break::data_fetcher::queue::{PlayerLookup, PlayerRequestQueue};
use max_break::data_fetcher::{ExternalClient, PlayerResolver, PrimaryClient};
use max_break::error::AppError;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn build_resolver(primary: &MockServer, external: &MockServer) -> (PrimaryClient, PlayerResolver) {
    let primary_client =
        PrimaryClient::with_base_url(primary.uri(), DEFAULT_HTTP_TIMEOUT_SECONDS)
            .expect("primary client");
    let external_client = ExternalClient::with_base_url(
        external.uri(),
        DEFAULT_HTTP_TIMEOUT_SECONDS,
        external_api::REQUESTED_BY_VALUE,
    )
    .expect("external client");
    let queue = PlayerRequestQueue::with_interval(external_client, Duration::from_millis(20));
    let resolver = PlayerResolver::new(primary_client.clone(), queue);
    (primary_client, resolver)
}

fn primary_player_body(id: i64, first: &str, last: &str) -> String {
    format!(r#"[{{"ID": {id}, "FirstName": "{first}", "LastName": "{last}"}}]"#)
}

async fn mount_primary_player(server: &MockServer, id: i64, first: &str, last: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/players/{id}/")))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(primary_player_body(id, first, last)),
        )
        .mount(server)
        .await;
}

async fn mount_primary_404(server: &MockServer, id: i64) {
    Mock::given(method("GET"))
        .and(path(format!("/players/{id}/")))
        .respond_with(ResponseTemplate::new(404))
        .mount(server)
        .await;
}

async fn mount_external_player(server: &MockServer, id: i64, first: &str, last: &str) {
    Mock::given(method("GET"))
        .and(query_param("p", id.to_string()))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(primary_player_body(id, first, last)),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn primary_hits_and_misses_mix_correctly() {
    let primary = MockServer::start().await;
    let external = MockServer::start().await;

    mount_primary_player(&primary, 1, "Ronnie", "O'Sullivan").await;
    mount_primary_404(&primary, 2).await;
    mount_primary_404(&primary, 3).await;
    mount_external_player(&external, 2, "Ding", "Junhui").await;
    // Player 3 is unknown everywhere
    Mock::given(method("GET"))
        .and(query_param("p", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&external)
        .await;

    let (_, resolver) = build_resolver(&primary, &external);

    match resolver.resolve_player(1).await.unwrap() {
        PlayerLookup::Found(record) => assert_eq!(record.display_name(), "Ronnie O'Sullivan"),
        PlayerLookup::Unavailable => panic!("player 1 lives in the primary source"),
    }
    match resolver.resolve_player(2).await.unwrap() {
        PlayerLookup::Found(record) => assert_eq!(record.display_name(), "Ding Junhui"),
        PlayerLookup::Unavailable => panic!("player 2 lives in the external source"),
    }
    assert_eq!(
        resolver.resolve_player(3).await.unwrap(),
        PlayerLookup::Unavailable
    );

    // Only the two misses reached the external source
    assert_eq!(external.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn server_error_propagates_and_never_reaches_the_queue() {
    let primary = MockServer::start().await;
    let external = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players/7/"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&primary)
        .await;

    let (_, resolver) = build_resolver(&primary, &external);
    let result = resolver.resolve_player(7).await;

    assert!(matches!(
        result,
        Err(AppError::ApiServerError { status: 502, .. })
    ));
    assert!(external.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn name_fan_in_resolves_each_distinct_player_once() {
    let primary = MockServer::start().await;
    let external = MockServer::start().await;

    mount_primary_player(&primary, 1, "Mark", "Selby").await;
    mount_primary_404(&primary, 2).await;
    mount_external_player(&external, 2, "Luca", "Brecel").await;

    let (primary_client, resolver) = build_resolver(&primary, &external);
    let app = App::with_parts(primary_client, resolver);

    // Ids repeat the way they do in a match list (both players, many matches)
    let names = app
        .resolve_player_names([1, 2, 1, 2, 1])
        .await
        .unwrap();

    assert_eq!(names[&1], "Mark Selby");
    assert_eq!(names[&2], "Luca Brecel");

    // One primary call per distinct id, one external dispatch for the miss
    let primary_calls = primary.received_requests().await.unwrap().len();
    assert_eq!(primary_calls, 2, "each distinct id hits the primary source once");
    assert_eq!(external.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn unavailable_players_map_to_the_placeholder_name() {
    let primary = MockServer::start().await;
    let external = MockServer::start().await;

    mount_primary_404(&primary, 5).await;
    Mock::given(method("GET"))
        .and(query_param("p", "5"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&external)
        .await;

    let (primary_client, resolver) = build_resolver(&primary, &external);
    let app = App::with_parts(primary_client, resolver);

    let names = app.resolve_player_names([5]).await.unwrap();
    assert_eq!(names[&5], UNKNOWN_PLAYER);
}

#[tokio::test]
async fn record_with_no_name_parts_maps_to_the_placeholder_name() {
    let primary = MockServer::start().await;
    let external = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players/8/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"[{"ID": 8}]"#))
        .mount(&primary)
        .await;

    let (primary_client, resolver) = build_resolver(&primary, &external);
    let app = App::with_parts(primary_client, resolver);

    let names = app.resolve_player_names([8]).await.unwrap();
    assert_eq!(names[&8], UNKNOWN_PLAYER);
}
