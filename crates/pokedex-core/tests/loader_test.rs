#![allow(clippy::unwrap_used)]
// Integration tests for the catalog and detail loaders using wiremock.

use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pokedex_core::{CoreError, DexConfig, LoadStatus, Pokedex};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup(limit: u32) -> (MockServer, Pokedex) {
    let server = MockServer::start().await;
    let config = DexConfig {
        limit,
        ..DexConfig::new(Url::parse(&format!("{}/api/v2/", server.uri())).unwrap())
    };
    let dex = Pokedex::new(config).unwrap();
    (server, dex)
}

fn detail_url(server: &MockServer, id: u32) -> String {
    format!("{}/api/v2/pokemon/{id}/", server.uri())
}

fn pokemon_json(id: u32, name: &str, types: &[&str]) -> Value {
    let types: Vec<Value> = types
        .iter()
        .zip(1..)
        .map(|(t, slot)| json!({ "slot": slot, "type": { "name": t, "url": "" } }))
        .collect();
    json!({
        "id": id,
        "name": name,
        "height": 4,
        "weight": 60,
        "types": types,
        "stats": [
            { "base_stat": 35, "effort": 0, "stat": { "name": "hp", "url": "" } },
            { "base_stat": 90, "effort": 2, "stat": { "name": "speed", "url": "" } }
        ],
        "abilities": [
            { "ability": { "name": "static", "url": "" }, "is_hidden": false, "slot": 1 },
            { "ability": { "name": "lightning-rod", "url": "" }, "is_hidden": true, "slot": 3 }
        ],
        "sprites": {
            "other": { "official-artwork": { "front_default": format!("https://img/{id}.png") } }
        }
    })
}

async fn mount_index(server: &MockServer, limit: u32, names: &[&str]) {
    let results: Vec<Value> = names
        .iter()
        .zip(1..)
        .map(|(name, id)| json!({ "name": name, "url": detail_url(server, id) }))
        .collect();

    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon"))
        .and(query_param("limit", limit.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1302,
            "results": results,
        })))
        .mount(server)
        .await;
}

async fn mount_detail(server: &MockServer, id: u32, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v2/pokemon/{id}/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

// ── Catalog loader ──────────────────────────────────────────────────

#[tokio::test]
async fn test_single_entry_catalog() {
    let (server, dex) = setup(1).await;
    mount_index(&server, 1, &["bulbasaur"]).await;
    mount_detail(&server, 1, pokemon_json(1, "bulbasaur", &["grass", "poison"])).await;

    let catalog = dex.load_catalog(1).await.unwrap();

    let json = serde_json::to_value(&catalog).unwrap();
    assert_eq!(
        json,
        json!([{
            "id": 1,
            "name": "bulbasaur",
            "types": ["grass", "poison"],
            "sprite": "https://img/1.png",
        }])
    );
}

#[tokio::test]
async fn test_catalog_keeps_index_order_not_completion_order() {
    let (server, dex) = setup(3).await;
    mount_index(&server, 3, &["bulbasaur", "ivysaur", "venusaur"]).await;

    // The first entry completes last.
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/1/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(pokemon_json(1, "bulbasaur", &["grass"]))
                .set_delay(Duration::from_millis(200)),
        )
        .mount(&server)
        .await;
    mount_detail(&server, 2, pokemon_json(2, "ivysaur", &["grass"])).await;
    mount_detail(&server, 3, pokemon_json(3, "venusaur", &["grass"])).await;

    let catalog = dex.load_catalog(3).await.unwrap();

    let ids: Vec<u32> = catalog.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_catalog_detail_fetches_run_concurrently() {
    let (server, dex) = setup(5).await;
    mount_index(&server, 5, &["a", "b", "c", "d", "e"]).await;
    for id in 1..=5u32 {
        Mock::given(method("GET"))
            .and(path(format!("/api/v2/pokemon/{id}/")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(pokemon_json(id, "slow", &["normal"]))
                    .set_delay(Duration::from_millis(300)),
            )
            .mount(&server)
            .await;
    }

    let started = Instant::now();
    let catalog = dex.load_catalog(5).await.unwrap();
    let elapsed = started.elapsed();

    assert_eq!(catalog.len(), 5);
    // Sequential fetches would take at least 1.5s.
    assert!(elapsed < Duration::from_secs(1), "took {elapsed:?}");
}

#[tokio::test]
async fn test_duplicate_ids_keep_first_in_index_order() {
    let (server, dex) = setup(3).await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon"))
        .and(query_param("limit", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                { "name": "bulbasaur", "url": detail_url(&server, 1) },
                { "name": "ivysaur", "url": detail_url(&server, 2) },
                { "name": "bulbasaur-again", "url": detail_url(&server, 1) },
            ],
        })))
        .mount(&server)
        .await;
    mount_detail(&server, 1, pokemon_json(1, "bulbasaur", &["grass"])).await;
    mount_detail(&server, 2, pokemon_json(2, "ivysaur", &["grass"])).await;

    let catalog = dex.load_catalog(3).await.unwrap();

    let names: Vec<&str> = catalog.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["bulbasaur", "ivysaur"]);
}

#[tokio::test]
async fn test_one_failed_detail_fails_whole_catalog() {
    let (server, dex) = setup(151).await;
    let names: Vec<String> = (1..=151).map(|i| format!("mon-{i}")).collect();
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
    mount_index(&server, 151, &name_refs).await;

    for id in 1..=151u32 {
        if id == 77 {
            Mock::given(method("GET"))
                .and(path("/api/v2/pokemon/77/"))
                .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
                .mount(&server)
                .await;
        } else {
            mount_detail(&server, id, pokemon_json(id, &format!("mon-{id}"), &["normal"])).await;
        }
    }

    let result = dex.load_catalog(151).await;

    match result {
        Err(CoreError::DetailFetch { url, .. }) => assert!(url.ends_with("/pokemon/77/")),
        other => panic!("expected DetailFetch error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_index_failure_is_index_fetch_error() {
    let (server, dex) = setup(151).await;

    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let result = dex.load_catalog(151).await;

    assert!(
        matches!(result, Err(CoreError::IndexFetch { .. })),
        "expected IndexFetch error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_oversized_index_is_truncated_to_limit() {
    let (server, dex) = setup(2).await;
    mount_index(&server, 2, &["bulbasaur", "ivysaur", "venusaur"]).await;
    mount_detail(&server, 1, pokemon_json(1, "bulbasaur", &["grass"])).await;
    mount_detail(&server, 2, pokemon_json(2, "ivysaur", &["grass"])).await;

    let catalog = dex.load_catalog(2).await.unwrap();

    assert_eq!(catalog.len(), 2);
}

#[tokio::test]
async fn test_zero_limit_is_rejected() {
    let (_server, dex) = setup(0).await;

    let result = dex.load_catalog(0).await;

    assert!(matches!(result, Err(CoreError::Config { .. })));
}

// ── Refresh / store ─────────────────────────────────────────────────

#[tokio::test]
async fn test_refresh_commits_and_failed_refresh_keeps_snapshot() {
    let (server, dex) = setup(1).await;
    mount_index(&server, 1, &["bulbasaur"]).await;
    mount_detail(&server, 1, pokemon_json(1, "bulbasaur", &["grass", "poison"])).await;

    let first = dex.refresh().await.unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(dex.store().status(), LoadStatus::Idle);

    server.reset().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    assert!(dex.refresh().await.is_err());
    assert_eq!(dex.catalog_snapshot().len(), 1);
    assert!(matches!(dex.store().status(), LoadStatus::Error(_)));
}

#[tokio::test]
async fn test_overlapping_refresh_only_latest_commits() {
    let (server, dex) = setup(1).await;
    mount_index(&server, 1, &["bulbasaur"]).await;
    mount_detail(&server, 1, pokemon_json(1, "bulbasaur", &["grass"])).await;

    let (older, newer) = tokio::join!(dex.refresh(), dex.refresh());

    assert!(
        matches!(older, Err(CoreError::Superseded)),
        "expected Superseded, got: {older:?}"
    );
    assert_eq!(newer.unwrap().len(), 1);
    assert_eq!(dex.catalog_snapshot().len(), 1);
}

// ── Detail loader ───────────────────────────────────────────────────

async fn mount_pokemon_25(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/25"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(pokemon_json(25, "pikachu", &["electric"])),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_detail_joins_species() {
    let (server, dex) = setup(151).await;
    mount_pokemon_25(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon-species/25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "flavor_text_entries": [
                { "flavor_text": "ピカチュウ", "language": { "name": "ja", "url": "" } },
                { "flavor_text": "When several of\nthese POKéMON\u{000C}gather", "language": { "name": "en", "url": "" } }
            ],
            "genera": [
                { "genus": "ねずみポケモン", "language": { "name": "ja", "url": "" } },
                { "genus": "Mouse Pokémon", "language": { "name": "en", "url": "" } }
            ]
        })))
        .mount(&server)
        .await;

    let detail = dex.load_detail("25").await.unwrap();

    assert_eq!(detail.id, 25);
    assert_eq!(detail.types, vec!["electric".to_owned()]);
    assert_eq!(detail.stats.get("speed"), Some(&90));
    assert!(detail.abilities[1].is_hidden);
    assert_eq!(
        detail.flavor_text.as_deref(),
        Some("When several of these POKéMON gather")
    );
    assert_eq!(detail.genus.as_deref(), Some("Mouse Pokémon"));
}

#[tokio::test]
async fn test_detail_legs_run_concurrently() {
    let (server, dex) = setup(151).await;
    let delay = Duration::from_millis(300);

    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/25"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(pokemon_json(25, "pikachu", &["electric"]))
                .set_delay(delay),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon-species/25"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "flavor_text_entries": [], "genera": [] }))
                .set_delay(delay),
        )
        .mount(&server)
        .await;

    let started = Instant::now();
    let detail = dex.load_detail("25").await.unwrap();
    let elapsed = started.elapsed();

    assert_eq!(detail.name, "pikachu");
    assert!(elapsed < Duration::from_millis(550), "took {elapsed:?}");
}

#[tokio::test]
async fn test_species_failure_is_not_fatal() {
    let (server, dex) = setup(151).await;
    mount_pokemon_25(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon-species/25"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let detail = dex.load_detail("25").await.unwrap();

    assert_eq!(detail.id, 25);
    assert_eq!(detail.name, "pikachu");
    assert_eq!(detail.flavor_text, None);
    assert_eq!(detail.genus, None);
}

#[tokio::test]
async fn test_entity_failure_fails_detail() {
    let (server, dex) = setup(151).await;

    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/9999"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon-species/9999"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "flavor_text_entries": [],
            "genera": []
        })))
        .mount(&server)
        .await;

    let result = dex.load_detail("9999").await;

    assert!(
        matches!(result, Err(CoreError::NotFound { ref identifier }) if identifier == "9999"),
        "expected NotFound, got: {result:?}"
    );
}
