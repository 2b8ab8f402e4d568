//! End-to-end HTTP scenarios for the card endpoints.
//!
//! The real domain services and in-process cache run behind the actix test
//! service; the core banking system and the configuration store are replaced
//! by in-memory doubles so each scenario can count upstream calls and inspect
//! stored rows.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use async_trait::async_trait;
use card_aggregator::Trace;
use card_aggregator::domain::ports::{
    CardConfigRepository, CardConfigRepositoryError, CardSource, CardSourceError,
};
use card_aggregator::domain::{
    CardConfig, CardConfigService, CardId, CardsService, TRACE_ID_HEADER,
};
use card_aggregator::inbound::http::card_configs::upsert_card_config;
use card_aggregator::inbound::http::cards::list_cards;
use card_aggregator::inbound::http::state::HttpState;
use card_aggregator::inbound::http::validation::json_config;
use card_aggregator::outbound::cache::InMemoryCardListCache;
use chrono::{DateTime, Local, TimeDelta, Utc};
use mockable::Clock;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

const CARD_A: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";
const CARD_B: &str = "9b2e4c1a-7d3f-4e58-a6b0-1c2d3e4f5a6b";

fn upstream_card(id: &str, number: &str) -> Value {
    json!({
        "id": id,
        "account": "ACC-001",
        "number": number,
        "expirationMonth": "04",
        "expirationYear": "2027",
        "currency": "EUR",
        "balance": 120.5,
    })
}

/// Core banking double that serves a configurable body and counts calls.
struct StubSource {
    body: Mutex<Vec<u8>>,
    failing: AtomicBool,
    calls: AtomicUsize,
}

impl StubSource {
    fn serving(cards: &Value) -> Self {
        Self {
            body: Mutex::new(cards.to_string().into_bytes()),
            failing: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
        }
    }

    fn replace_body(&self, cards: &Value) {
        *self.body.lock().expect("body lock") = cards.to_string().into_bytes();
    }

    fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CardSource for StubSource {
    async fn fetch_cards(&self) -> Result<Vec<u8>, CardSourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(CardSourceError::transport("connection refused"));
        }
        Ok(self.body.lock().expect("body lock").clone())
    }
}

/// Configuration store double keeping rows in insertion order.
#[derive(Default)]
struct InMemoryRepository {
    rows: Mutex<Vec<CardConfig>>,
}

impl InMemoryRepository {
    fn with_rows(rows: Vec<CardConfig>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }

    fn rows(&self) -> Vec<CardConfig> {
        self.rows.lock().expect("rows lock").clone()
    }
}

#[async_trait]
impl CardConfigRepository for InMemoryRepository {
    async fn find_by_id(
        &self,
        id: &CardId,
    ) -> Result<Option<CardConfig>, CardConfigRepositoryError> {
        Ok(self.rows().into_iter().find(|row| &row.id == id))
    }

    async fn insert(&self, config: &CardConfig) -> Result<(), CardConfigRepositoryError> {
        self.rows.lock().expect("rows lock").push(config.clone());
        Ok(())
    }

    async fn update(&self, config: &CardConfig) -> Result<(), CardConfigRepositoryError> {
        let mut rows = self.rows.lock().expect("rows lock");
        for row in rows.iter_mut().filter(|row| row.id == config.id) {
            row.title.clone_from(&config.title);
            row.skin.clone_from(&config.skin);
        }
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<CardConfig>, CardConfigRepositoryError> {
        Ok(self.rows())
    }
}

/// Clock that only moves when a scenario advances it.
struct SteppingClock(Mutex<DateTime<Utc>>);

impl SteppingClock {
    fn advance(&self, by: Duration) {
        let delta = TimeDelta::from_std(by).expect("duration fits");
        *self.0.lock().expect("clock lock") += delta;
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.0.lock().expect("clock lock")
    }
}

struct Harness {
    source: Arc<StubSource>,
    repository: Arc<InMemoryRepository>,
    clock: Arc<SteppingClock>,
    state: web::Data<HttpState>,
}

impl Harness {
    fn new(upstream: &Value, rows: Vec<CardConfig>) -> Self {
        let source = Arc::new(StubSource::serving(upstream));
        let repository = Arc::new(InMemoryRepository::with_rows(rows));
        let clock = Arc::new(SteppingClock(Mutex::new(Utc::now())));
        let cache = Arc::new(InMemoryCardListCache::new(clock.clone()));

        let cards = CardsService::new(source.clone(), cache, repository.clone());
        let card_configs = CardConfigService::new(repository.clone());
        let state = web::Data::new(HttpState::new(Arc::new(cards), Arc::new(card_configs)));

        Self {
            source,
            repository,
            clock,
            state,
        }
    }

    fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        App::new()
            .app_data(self.state.clone())
            .app_data(json_config())
            .wrap(Trace)
            .service(list_cards)
            .service(upsert_card_config)
    }
}

#[fixture]
fn single_card_upstream() -> Value {
    json!([upstream_card(CARD_A, "1111")])
}

fn card_id(raw: &str) -> CardId {
    raw.parse().expect("valid card id")
}

async fn get_cards<S>(app: &S) -> Value
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let response =
        actix_test::call_service(app, actix_test::TestRequest::get().uri("/cards").to_request())
            .await;
    assert_eq!(response.status(), StatusCode::OK);
    actix_test::read_body_json(response).await
}

fn first_card(cards: &Value) -> &Value {
    cards
        .as_array()
        .and_then(|items| items.first())
        .expect("at least one card")
}

#[rstest]
#[actix_web::test]
async fn unconfigured_card_gets_default_title_and_skin(single_card_upstream: Value) {
    let harness = Harness::new(&single_card_upstream, Vec::new());
    let app = actix_test::init_service(harness.app()).await;

    let cards = get_cards(&app).await;

    assert_eq!(
        cards,
        json!([{
            "id": CARD_A,
            "number": "1111",
            "expirationMonth": "04",
            "expirationYear": "2027",
            "currency": "EUR",
            "title": "My favorite card",
            "skin": "default_skin",
        }])
    );
}

#[rstest]
#[actix_web::test]
async fn stored_configuration_overrides_defaults_in_upstream_order() {
    let upstream = json!([upstream_card(CARD_B, "2222"), upstream_card(CARD_A, "1111")]);
    let stored = CardConfig::new(card_id(CARD_A), "Work", "dark").expect("valid config");
    let harness = Harness::new(&upstream, vec![stored]);
    let app = actix_test::init_service(harness.app()).await;

    let cards = get_cards(&app).await;
    let items = cards.as_array().expect("card array");

    let summary: Vec<(&str, &str, &str)> = items
        .iter()
        .map(|card| {
            (
                card.get("id").and_then(Value::as_str).unwrap_or_default(),
                card.get("title").and_then(Value::as_str).unwrap_or_default(),
                card.get("skin").and_then(Value::as_str).unwrap_or_default(),
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            (CARD_B, "My favorite card", "default_skin"),
            (CARD_A, "Work", "dark"),
        ]
    );
}

#[rstest]
#[actix_web::test]
async fn upsert_on_empty_store_inserts_and_is_reflected_in_listing(single_card_upstream: Value) {
    let harness = Harness::new(&single_card_upstream, Vec::new());
    let app = actix_test::init_service(harness.app()).await;

    let request = actix_test::TestRequest::put()
        .uri(&format!("/card-configs/{CARD_A}"))
        .set_json(json!({"title": "Vacation", "skin": "beach"}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({"id": CARD_A, "title": "Vacation", "skin": "beach"})
    );

    assert_eq!(
        harness.repository.rows(),
        vec![CardConfig::new(card_id(CARD_A), "Vacation", "beach").expect("valid config")]
    );

    let cards = get_cards(&app).await;
    let card = first_card(&cards);
    assert_eq!(card.get("title").and_then(Value::as_str), Some("Vacation"));
    assert_eq!(card.get("skin").and_then(Value::as_str), Some("beach"));
}

#[rstest]
#[actix_web::test]
async fn upsert_on_existing_row_updates_in_place(single_card_upstream: Value) {
    let stored = CardConfig::new(card_id(CARD_A), "Work", "dark").expect("valid config");
    let harness = Harness::new(&single_card_upstream, vec![stored]);
    let app = actix_test::init_service(harness.app()).await;

    let request = actix_test::TestRequest::put()
        .uri(&format!("/card-configs/{CARD_A}"))
        .set_json(json!({"title": "Groceries", "skin": "green"}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let rows = harness.repository.rows();
    assert_eq!(rows.len(), 1, "update must not duplicate the row");
    assert_eq!(
        rows.first().map(|row| (row.title.as_str(), row.skin.as_str())),
        Some(("Groceries", "green"))
    );

    let cards = get_cards(&app).await;
    assert_eq!(
        first_card(&cards).get("title").and_then(Value::as_str),
        Some("Groceries")
    );
}

#[rstest]
#[actix_web::test]
async fn repeated_listing_within_ttl_calls_upstream_once(single_card_upstream: Value) {
    let harness = Harness::new(&single_card_upstream, Vec::new());
    let app = actix_test::init_service(harness.app()).await;

    let first = get_cards(&app).await;
    harness.clock.advance(Duration::from_secs(5));
    harness.source.replace_body(&json!([]));
    let second = get_cards(&app).await;

    assert_eq!(harness.source.calls(), 1);
    assert_eq!(first, second, "cached body is served until it expires");
}

#[rstest]
#[actix_web::test]
async fn listing_after_ttl_refetches_upstream(single_card_upstream: Value) {
    let harness = Harness::new(&single_card_upstream, Vec::new());
    let app = actix_test::init_service(harness.app()).await;

    get_cards(&app).await;
    harness.clock.advance(Duration::from_secs(11));
    harness
        .source
        .replace_body(&json!([upstream_card(CARD_B, "2222")]));
    let refreshed = get_cards(&app).await;

    assert_eq!(harness.source.calls(), 2);
    assert_eq!(
        first_card(&refreshed).get("id").and_then(Value::as_str),
        Some(CARD_B)
    );
}

#[rstest]
#[actix_web::test]
async fn upstream_failure_is_unavailable_and_not_cached(single_card_upstream: Value) {
    let harness = Harness::new(&single_card_upstream, Vec::new());
    let app = actix_test::init_service(harness.app()).await;

    harness.source.set_failing(true);
    let response =
        actix_test::call_service(&app, actix_test::TestRequest::get().uri("/cards").to_request())
            .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.get("code").and_then(Value::as_str),
        Some("service_unavailable")
    );
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .expect("error body carries a message");
    assert_eq!(message, "Service temporarily unavailable");
    assert!(!message.contains("connection refused"));
    assert!(body.get("details").is_none());

    harness.source.set_failing(false);
    let cards = get_cards(&app).await;
    assert_eq!(harness.source.calls(), 2);
    assert_eq!(
        first_card(&cards).get("id").and_then(Value::as_str),
        Some(CARD_A)
    );
}

#[rstest]
#[actix_web::test]
async fn malformed_card_id_is_rejected_with_trace_id(single_card_upstream: Value) {
    let harness = Harness::new(&single_card_upstream, Vec::new());
    let app = actix_test::init_service(harness.app()).await;

    let request = actix_test::TestRequest::put()
        .uri("/card-configs/not-a-uuid")
        .set_json(json!({"title": "Vacation", "skin": "beach"}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace-id header");
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.get("traceId").and_then(Value::as_str), Some(header.as_str()));
    assert!(harness.repository.rows().is_empty());
}

#[rstest]
#[actix_web::test]
async fn overlong_title_is_rejected_before_storage(single_card_upstream: Value) {
    let harness = Harness::new(&single_card_upstream, Vec::new());
    let app = actix_test::init_service(harness.app()).await;

    let request = actix_test::TestRequest::put()
        .uri(&format!("/card-configs/{CARD_A}"))
        .set_json(json!({"title": "x".repeat(257), "skin": "beach"}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(harness.repository.rows().is_empty());
}
