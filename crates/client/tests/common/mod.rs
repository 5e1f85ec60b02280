//! In-process fake of the Histórico Domino backend.
//!
//! Serves the same paths, envelopes and error bodies as the real backend
//! from in-memory JSON collections, bound to `127.0.0.1:0`.

#![allow(dead_code)]

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use axum::extract::{Path, Query, Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use histdom_client::{ClientConfig, DominoClient};

pub const CLUB_HAS_PLAYERS: &str = "No se puede eliminar el club porque tiene jugadores asociados. \
                                    Elimine o reasigne los jugadores primero.";

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

pub struct BackendData {
    pub clubs: Vec<Value>,
    pub players: Vec<Value>,
    pub types: Vec<Value>,
    pub championships: Vec<Value>,
    pub results: Vec<Value>,
    /// Artificial latency for club list calls, keyed by `skip`.
    pub list_delays: HashMap<u64, Duration>,
    /// Artificial latency for single club reads, keyed by code.
    pub item_delays: HashMap<String, Duration>,
    /// Every request received, as `"METHOD /path?query"`.
    pub requests: Vec<String>,
    /// Last body posted to any `filtrar` endpoint.
    pub last_filter: Option<Value>,
    /// When set, club list calls answer 500.
    pub fail_club_lists: bool,
    next_id: i64,
}

#[derive(Clone)]
pub struct FakeBackend {
    data: Arc<Mutex<BackendData>>,
}

impl FakeBackend {
    pub fn seeded() -> Self {
        let data = BackendData {
            clubs: vec![
                club(1, "28", "0001", "Club Madrid"),
                club(2, "08", "0002", "Club Barcelona"),
                club(3, "46", "0003", "Club Valencia"),
            ],
            players: vec![
                player(1, "28", "00001", "Ana", "García", "280001", "Club Madrid"),
                player(2, "28", "00002", "Luis", "Pérez", "280001", "Club Madrid"),
                player(3, "08", "00001", "Eva", "Ruiz", "080002", "Club Barcelona"),
            ],
            types: vec![
                json!({"id": 1, "codigo": "LI", "nombre": "Liga", "descripcion": "Liga regular"}),
                json!({"id": 2, "codigo": "OP", "nombre": "Open", "descripcion": null}),
            ],
            championships: vec![
                json!({"id": 1, "nch": "1", "nombre": "Liga 2024", "fecha_inicio": "2024-01-15",
                       "tipo_campeonato_id": 1, "gb": false, "club_codigo": "280001"}),
                json!({"id": 2, "nch": "2", "nombre": "Open de Primavera", "fecha_inicio": "2024-04-01",
                       "tipo_campeonato_id": 2, "gb": false}),
            ],
            results: vec![
                result_row(1, "2024-01-15", "2800001", 1, 1, 1, 50),
                result_row(1, "2024-01-15", "2800002", 1, 1, 0, -50),
                result_row(1, "2024-01-15", "0800001", 1, 2, 1, 30),
                result_row(2, "2024-04-01", "2800001", 2, 1, 1, 10),
            ],
            list_delays: HashMap::new(),
            item_delays: HashMap::new(),
            requests: Vec::new(),
            last_filter: None,
            fail_club_lists: false,
            next_id: 100,
        };
        Self {
            data: Arc::new(Mutex::new(data)),
        }
    }

    pub fn data(&self) -> MutexGuard<'_, BackendData> {
        self.data.lock().unwrap()
    }

    /// Add `count` generated clubs in province `99`.
    pub fn seed_clubs(&self, count: usize) {
        let mut data = self.data();
        for i in 1..=count {
            let id = data.next_id();
            data.clubs
                .push(club(id, "99", &format!("{i:04}"), &format!("Club Generado {i:02}")));
        }
    }

    pub fn delay_club_list(&self, skip: u64, delay: Duration) {
        self.data().list_delays.insert(skip, delay);
    }

    pub fn delay_club_get(&self, code: &str, delay: Duration) {
        self.data().item_delays.insert(code.to_string(), delay);
    }

    pub fn requests(&self) -> Vec<String> {
        self.data().requests.clone()
    }

    pub fn request_count(&self, prefix: &str) -> usize {
        self.data()
            .requests
            .iter()
            .filter(|r| r.starts_with(prefix))
            .count()
    }
}

impl BackendData {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

fn club(id: i64, cp: &str, numero: &str, nombre: &str) -> Value {
    json!({
        "id": id,
        "cp": cp,
        "numero_club": numero,
        "codigo_club": format!("{cp}{numero}"),
        "nombre": nombre
    })
}

fn player(
    id: i64,
    cp: &str,
    numero: &str,
    nombre: &str,
    apellidos: &str,
    club: &str,
    club_name: &str,
) -> Value {
    json!({
        "id": id,
        "cp": cp,
        "numero_jugador": numero,
        "idfed": format!("{cp}{numero}"),
        "nombre": nombre,
        "apellidos": apellidos,
        "codigo_club": club,
        "nombre_club": club_name
    })
}

fn result_row(nch: i64, fecha: &str, idfed: &str, tipo: i64, partida: i64, pg: i64, dif: i64) -> Value {
    json!({
        "nch": nch,
        "fecha_campeonato": fecha,
        "idfed_jugador": idfed,
        "tipo_campeonato_id": tipo,
        "partida": partida,
        "mesa": 1,
        "gb": 0,
        "pg": pg,
        "dif": dif,
        "pv": 150 + dif,
        "pt": 150 + dif
    })
}

// ---------------------------------------------------------------------------
// Server
// ---------------------------------------------------------------------------

pub struct TestContext {
    pub backend: FakeBackend,
    pub base_url: String,
    pub client: DominoClient,
}

/// Start a seeded fake backend and a client pointed at it.
pub async fn spawn() -> TestContext {
    let backend = FakeBackend::seeded();
    let app = build_router(backend.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let base_url = format!("http://{addr}");
    let client = DominoClient::new(ClientConfig::new(base_url.clone())).unwrap();

    TestContext {
        backend,
        base_url,
        client,
    }
}

/// A client whose base URL has nothing listening on it.
pub async fn unreachable_client() -> DominoClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    DominoClient::new(ClientConfig::new(format!("http://{addr}"))).unwrap()
}

pub fn build_router(backend: FakeBackend) -> Router {
    Router::new()
        .route("/api/clubs/", get(list_clubs).post(create_club))
        .route("/api/clubs/filtrar", post(filter_clubs))
        .route(
            "/api/clubs/{code}",
            get(get_club).put(update_club).delete(delete_club),
        )
        .route("/api/jugadores/", get(list_players).post(create_player))
        .route("/api/jugadores/filtrar", post(filter_players))
        .route("/api/jugadores/actualizar/{idfed}", post(update_player))
        .route("/api/jugadores/club/{code}", get(players_by_club))
        .route("/api/jugadores/{idfed}", get(get_player).delete(delete_player))
        .route("/api/tipos-campeonato/", get(list_types).post(create_type))
        .route("/api/tipos-campeonato/codigo/{code}", get(type_by_code))
        .route(
            "/api/tipos-campeonato/{id}",
            get(get_type).put(update_type).delete(delete_type),
        )
        .route(
            "/api/campeonatos/",
            get(list_championships).post(create_championship),
        )
        .route(
            "/api/campeonatos/{id}",
            get(get_championship)
                .put(update_championship)
                .delete(delete_championship),
        )
        .route("/api/resultados/", get(list_results).post(create_result))
        .route("/api/resultados/filtrar", post(filter_results))
        .route("/api/resultados/jugador/{idfed}", get(results_by_player))
        .route("/api/resultados/tipo-campeonato/{id}", get(results_by_type))
        .route(
            "/api/resultados/campeonato/{tipo}/{nch}",
            get(results_by_championship),
        )
        .route(
            "/api/resultados/{nch}/{fecha}/{idfed}",
            get(get_result).put(update_result).delete(delete_result),
        )
        .route("/test/no-content", get(|| async { StatusCode::NO_CONTENT }))
        .route(
            "/test/plain-error",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route("/test/not-json", get(|| async { "<html>ok</html>" }))
        .route("/test/empty", get(|| async { StatusCode::OK }))
        .layer(middleware::from_fn_with_state(backend.clone(), record_request))
        .with_state(backend)
}

async fn record_request(State(backend): State<FakeBackend>, request: Request, next: Next) -> Response {
    let line = format!("{} {}", request.method(), request.uri());
    backend.data().requests.push(line);
    next.run(request).await
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct Window {
    #[serde(default)]
    skip: u64,
    #[serde(default = "default_limit")]
    limit: u64,
}

fn default_limit() -> u64 {
    100
}

#[derive(Deserialize)]
pub struct FilterBody {
    #[serde(default)]
    conditions: Vec<Condition>,
    #[serde(default)]
    skip: u64,
    #[serde(default = "default_limit")]
    limit: u64,
    sort_by: Option<String>,
    sort_dir: Option<String>,
}

#[derive(Deserialize)]
struct Condition {
    field: String,
    operator: String,
    value: Value,
}

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

fn missing_fields(body: &Value, fields: &[&str]) -> Option<Response> {
    let issues: Vec<Value> = fields
        .iter()
        .filter(|field| {
            body.get(**field)
                .map_or(true, |value| value.is_null() || value.as_str() == Some(""))
        })
        .map(|field| json!({"loc": ["body", field], "msg": "field required", "type": "missing"}))
        .collect();

    if issues.is_empty() {
        None
    } else {
        Some((StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "detail": issues }))).into_response())
    }
}

fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64()?.partial_cmp(&y.as_f64()?),
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        _ => None,
    }
}

fn matches(item: &Value, condition: &Condition) -> bool {
    let actual = &item[condition.field.as_str()];
    let ordering = compare(actual, &condition.value);
    match condition.operator.as_str() {
        "eq" => actual == &condition.value,
        "ne" => actual != &condition.value,
        "gt" => ordering == Some(Ordering::Greater),
        "gte" => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
        "lt" => ordering == Some(Ordering::Less),
        "lte" => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
        "contains" => match (actual.as_str(), condition.value.as_str()) {
            (Some(a), Some(b)) => a.to_lowercase().contains(&b.to_lowercase()),
            _ => false,
        },
        _ => false,
    }
}

fn window(items: &[Value], skip: u64, limit: u64) -> Vec<Value> {
    items
        .iter()
        .skip(skip as usize)
        .take(limit as usize)
        .cloned()
        .collect()
}

/// Apply conditions and sort, then return `(total, page)`.
fn filter_items(items: &[Value], body: &FilterBody) -> (usize, Vec<Value>) {
    let mut selected: Vec<Value> = items
        .iter()
        .filter(|item| body.conditions.iter().all(|c| matches(item, c)))
        .cloned()
        .collect();

    if let Some(field) = &body.sort_by {
        let descending = body.sort_dir.as_deref() == Some("desc");
        selected.sort_by(|a, b| {
            let ordering = compare(&a[field.as_str()], &b[field.as_str()]).unwrap_or(Ordering::Equal);
            if descending {
                ordering.reverse()
            } else {
                ordering
            }
        });
    }

    (selected.len(), window(&selected, body.skip, body.limit))
}

fn position(items: &[Value], field: &str, key: &Value) -> Option<usize> {
    items.iter().position(|item| &item[field] == key)
}

fn merge(target: &mut Value, patch: &Value) {
    if let (Some(target), Some(patch)) = (target.as_object_mut(), patch.as_object()) {
        for (field, value) in patch {
            target.insert(field.clone(), value.clone());
        }
    }
}

// ---------------------------------------------------------------------------
// Clubs
// ---------------------------------------------------------------------------

async fn list_clubs(State(backend): State<FakeBackend>, Query(w): Query<Window>) -> Response {
    let (delay, fail) = {
        let data = backend.data();
        (data.list_delays.get(&w.skip).copied(), data.fail_club_lists)
    };
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }
    if fail {
        return detail(StatusCode::INTERNAL_SERVER_ERROR, "Error al obtener clubs");
    }

    let data = backend.data();
    Json(json!({
        "total": data.clubs.len(),
        "clubs": window(&data.clubs, w.skip, w.limit)
    }))
    .into_response()
}

async fn filter_clubs(State(backend): State<FakeBackend>, Json(body): Json<Value>) -> Response {
    let mut data = backend.data();
    data.last_filter = Some(body.clone());
    let Ok(filter) = serde_json::from_value::<FilterBody>(body) else {
        return detail(StatusCode::UNPROCESSABLE_ENTITY, "Invalid filter");
    };
    let (total, clubs) = filter_items(&data.clubs, &filter);
    Json(json!({ "total": total, "clubs": clubs })).into_response()
}

async fn create_club(State(backend): State<FakeBackend>, Json(body): Json<Value>) -> Response {
    if let Some(rejection) = missing_fields(&body, &["cp", "numero_club", "nombre"]) {
        return rejection;
    }
    let mut data = backend.data();
    let code = format!(
        "{}{}",
        body["cp"].as_str().unwrap_or_default(),
        body["numero_club"].as_str().unwrap_or_default()
    );
    if position(&data.clubs, "codigo_club", &json!(code)).is_some() {
        return detail(StatusCode::BAD_REQUEST, "El código de club ya existe");
    }
    let id = data.next_id();
    let mut created = body;
    merge(&mut created, &json!({ "id": id, "codigo_club": code }));
    data.clubs.push(created.clone());
    (StatusCode::CREATED, Json(created)).into_response()
}

async fn get_club(State(backend): State<FakeBackend>, Path(code): Path<String>) -> Response {
    let delay = backend.data().item_delays.get(&code).copied();
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }
    let data = backend.data();
    match position(&data.clubs, "codigo_club", &json!(code)) {
        Some(i) => Json(data.clubs[i].clone()).into_response(),
        None => detail(StatusCode::NOT_FOUND, "Club no encontrado"),
    }
}

async fn update_club(
    State(backend): State<FakeBackend>,
    Path(code): Path<String>,
    Json(patch): Json<Value>,
) -> Response {
    let mut data = backend.data();
    let Some(i) = position(&data.clubs, "codigo_club", &json!(code)) else {
        return detail(StatusCode::NOT_FOUND, "Club no encontrado");
    };
    merge(&mut data.clubs[i], &patch);
    Json(data.clubs[i].clone()).into_response()
}

async fn delete_club(State(backend): State<FakeBackend>, Path(code): Path<String>) -> Response {
    let mut data = backend.data();
    let Some(i) = position(&data.clubs, "codigo_club", &json!(code)) else {
        return detail(StatusCode::NOT_FOUND, "Club no encontrado");
    };
    if position(&data.players, "codigo_club", &json!(code)).is_some() {
        return detail(StatusCode::BAD_REQUEST, CLUB_HAS_PLAYERS);
    }
    data.clubs.remove(i);
    Json(json!({ "message": "Club eliminado correctamente" })).into_response()
}

// ---------------------------------------------------------------------------
// Players
// ---------------------------------------------------------------------------

async fn list_players(State(backend): State<FakeBackend>, Query(w): Query<Window>) -> Response {
    let data = backend.data();
    Json(json!({
        "total": data.players.len(),
        "jugadores": window(&data.players, w.skip, w.limit)
    }))
    .into_response()
}

async fn filter_players(State(backend): State<FakeBackend>, Json(filter): Json<FilterBody>) -> Response {
    let data = backend.data();
    let (total, players) = filter_items(&data.players, &filter);
    Json(json!({ "total": total, "jugadores": players })).into_response()
}

async fn create_player(State(backend): State<FakeBackend>, Json(body): Json<Value>) -> Response {
    if let Some(rejection) =
        missing_fields(&body, &["cp", "numero_jugador", "nombre", "apellidos", "codigo_club"])
    {
        return rejection;
    }
    let mut data = backend.data();
    let Some(club) = position(&data.clubs, "codigo_club", &body["codigo_club"]) else {
        return detail(StatusCode::BAD_REQUEST, "El club especificado no existe");
    };
    let club_name = data.clubs[club]["nombre"].clone();
    let idfed = format!(
        "{}{}",
        body["cp"].as_str().unwrap_or_default(),
        body["numero_jugador"].as_str().unwrap_or_default()
    );
    if position(&data.players, "idfed", &json!(idfed)).is_some() {
        return detail(StatusCode::BAD_REQUEST, "El IDFED ya existe");
    }
    let id = data.next_id();
    let mut created = body;
    merge(
        &mut created,
        &json!({ "id": id, "idfed": idfed, "nombre_club": club_name }),
    );
    data.players.push(created.clone());
    (StatusCode::CREATED, Json(created)).into_response()
}

async fn get_player(State(backend): State<FakeBackend>, Path(idfed): Path<String>) -> Response {
    let data = backend.data();
    match position(&data.players, "idfed", &json!(idfed)) {
        Some(i) => Json(data.players[i].clone()).into_response(),
        None => detail(StatusCode::NOT_FOUND, "Jugador no encontrado"),
    }
}

async fn update_player(
    State(backend): State<FakeBackend>,
    Path(idfed): Path<String>,
    Json(patch): Json<Value>,
) -> Response {
    let mut data = backend.data();
    let Some(i) = position(&data.players, "idfed", &json!(idfed)) else {
        return detail(StatusCode::NOT_FOUND, "Jugador no encontrado");
    };
    merge(&mut data.players[i], &patch);
    Json(data.players[i].clone()).into_response()
}

async fn delete_player(State(backend): State<FakeBackend>, Path(idfed): Path<String>) -> Response {
    let mut data = backend.data();
    let Some(i) = position(&data.players, "idfed", &json!(idfed)) else {
        return detail(StatusCode::NOT_FOUND, "Jugador no encontrado");
    };
    data.players.remove(i);
    Json(json!({ "message": "Jugador eliminado correctamente" })).into_response()
}

async fn players_by_club(State(backend): State<FakeBackend>, Path(code): Path<String>) -> Response {
    let data = backend.data();
    let players: Vec<Value> = data
        .players
        .iter()
        .filter(|p| p["codigo_club"] == json!(code))
        .cloned()
        .collect();
    Json(players).into_response()
}

// ---------------------------------------------------------------------------
// Championship types
// ---------------------------------------------------------------------------

async fn list_types(State(backend): State<FakeBackend>, Query(w): Query<Window>) -> Response {
    let data = backend.data();
    Json(window(&data.types, w.skip, w.limit)).into_response()
}

async fn create_type(State(backend): State<FakeBackend>, Json(body): Json<Value>) -> Response {
    if let Some(rejection) = missing_fields(&body, &["codigo", "nombre"]) {
        return rejection;
    }
    let mut data = backend.data();
    let id = data.next_id();
    let mut created = body;
    merge(&mut created, &json!({ "id": id }));
    data.types.push(created.clone());
    (StatusCode::CREATED, Json(created)).into_response()
}

async fn get_type(State(backend): State<FakeBackend>, Path(id): Path<i64>) -> Response {
    let data = backend.data();
    match position(&data.types, "id", &json!(id)) {
        Some(i) => Json(data.types[i].clone()).into_response(),
        None => detail(StatusCode::NOT_FOUND, "Tipo de campeonato no encontrado"),
    }
}

async fn type_by_code(State(backend): State<FakeBackend>, Path(code): Path<String>) -> Response {
    let data = backend.data();
    match position(&data.types, "codigo", &json!(code)) {
        Some(i) => Json(data.types[i].clone()).into_response(),
        None => detail(StatusCode::NOT_FOUND, "Tipo de campeonato no encontrado"),
    }
}

async fn update_type(
    State(backend): State<FakeBackend>,
    Path(id): Path<i64>,
    Json(patch): Json<Value>,
) -> Response {
    let mut data = backend.data();
    let Some(i) = position(&data.types, "id", &json!(id)) else {
        return detail(StatusCode::NOT_FOUND, "Tipo de campeonato no encontrado");
    };
    merge(&mut data.types[i], &patch);
    Json(data.types[i].clone()).into_response()
}

async fn delete_type(State(backend): State<FakeBackend>, Path(id): Path<i64>) -> Response {
    let mut data = backend.data();
    let Some(i) = position(&data.types, "id", &json!(id)) else {
        return detail(StatusCode::NOT_FOUND, "Tipo de campeonato no encontrado");
    };
    data.types.remove(i);
    StatusCode::NO_CONTENT.into_response()
}

// ---------------------------------------------------------------------------
// Championships
// ---------------------------------------------------------------------------

async fn list_championships(State(backend): State<FakeBackend>, Query(w): Query<Window>) -> Response {
    let data = backend.data();
    Json(window(&data.championships, w.skip, w.limit)).into_response()
}

async fn create_championship(State(backend): State<FakeBackend>, Json(body): Json<Value>) -> Response {
    if let Some(rejection) = missing_fields(&body, &["nombre", "fecha_inicio", "tipo_campeonato_id"]) {
        return rejection;
    }
    let mut data = backend.data();
    let id = data.next_id();
    let nch = (data.championships.len() + 1).to_string();
    let mut created = body;
    merge(&mut created, &json!({ "id": id, "nch": nch }));
    data.championships.push(created.clone());
    (StatusCode::CREATED, Json(created)).into_response()
}

async fn get_championship(State(backend): State<FakeBackend>, Path(id): Path<i64>) -> Response {
    let data = backend.data();
    match position(&data.championships, "id", &json!(id)) {
        Some(i) => Json(data.championships[i].clone()).into_response(),
        None => detail(StatusCode::NOT_FOUND, "Campeonato no encontrado"),
    }
}

async fn update_championship(
    State(backend): State<FakeBackend>,
    Path(id): Path<i64>,
    Json(patch): Json<Value>,
) -> Response {
    let mut data = backend.data();
    let Some(i) = position(&data.championships, "id", &json!(id)) else {
        return detail(StatusCode::NOT_FOUND, "Campeonato no encontrado");
    };
    merge(&mut data.championships[i], &patch);
    Json(data.championships[i].clone()).into_response()
}

async fn delete_championship(State(backend): State<FakeBackend>, Path(id): Path<i64>) -> Response {
    let mut data = backend.data();
    let Some(i) = position(&data.championships, "id", &json!(id)) else {
        return detail(StatusCode::NOT_FOUND, "Campeonato no encontrado");
    };
    data.championships.remove(i);
    StatusCode::NO_CONTENT.into_response()
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

fn result_position(results: &[Value], nch: i64, fecha: &str, idfed: &str) -> Option<usize> {
    results.iter().position(|r| {
        r["nch"] == json!(nch) && r["fecha_campeonato"] == json!(fecha) && r["idfed_jugador"] == json!(idfed)
    })
}

async fn list_results(State(backend): State<FakeBackend>, Query(w): Query<Window>) -> Response {
    let data = backend.data();
    Json(json!({
        "total": data.results.len(),
        "resultados": window(&data.results, w.skip, w.limit)
    }))
    .into_response()
}

async fn filter_results(State(backend): State<FakeBackend>, Json(body): Json<Value>) -> Response {
    let mut data = backend.data();
    data.last_filter = Some(body.clone());
    let Ok(filter) = serde_json::from_value::<FilterBody>(body) else {
        return detail(StatusCode::UNPROCESSABLE_ENTITY, "Invalid filter");
    };
    let (total, results) = filter_items(&data.results, &filter);
    Json(json!({ "total": total, "resultados": results })).into_response()
}

pub const RESULT_REQUIRED_FIELDS: &[&str] = &[
    "nch",
    "tipo_campeonato_id",
    "nombre_campeonato",
    "fecha_campeonato",
    "idfed_jugador",
    "nombre_jugador",
    "apellido_jugador",
    "codigo_club_jugador",
    "nombre_club_jugador",
    "partida",
    "mesa",
    "pg",
    "dif",
    "pv",
    "pt",
    "mg",
    "pos",
];

async fn create_result(State(backend): State<FakeBackend>, Json(body): Json<Value>) -> Response {
    if let Some(rejection) = missing_fields(&body, RESULT_REQUIRED_FIELDS) {
        return rejection;
    }
    let mut data = backend.data();
    if position(&data.players, "idfed", &body["idfed_jugador"]).is_none() {
        return detail(StatusCode::NOT_FOUND, "Jugador no encontrado");
    }
    if position(&data.clubs, "codigo_club", &body["codigo_club_jugador"]).is_none() {
        return detail(StatusCode::NOT_FOUND, "Club del jugador no encontrado");
    }
    let exists = result_position(
        &data.results,
        body["nch"].as_i64().unwrap_or_default(),
        body["fecha_campeonato"].as_str().unwrap_or_default(),
        body["idfed_jugador"].as_str().unwrap_or_default(),
    )
    .is_some();
    if exists {
        return detail(StatusCode::BAD_REQUEST, "El resultado ya existe");
    }
    data.results.push(body.clone());
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn get_result(
    State(backend): State<FakeBackend>,
    Path((nch, fecha, idfed)): Path<(i64, String, String)>,
) -> Response {
    let data = backend.data();
    match result_position(&data.results, nch, &fecha, &idfed) {
        Some(i) => Json(data.results[i].clone()).into_response(),
        None => detail(StatusCode::NOT_FOUND, "Resultado no encontrado"),
    }
}

async fn update_result(
    State(backend): State<FakeBackend>,
    Path((nch, fecha, idfed)): Path<(i64, String, String)>,
    Json(patch): Json<Value>,
) -> Response {
    let mut data = backend.data();
    let Some(i) = result_position(&data.results, nch, &fecha, &idfed) else {
        return detail(StatusCode::NOT_FOUND, "Resultado no encontrado");
    };
    merge(&mut data.results[i], &patch);
    Json(data.results[i].clone()).into_response()
}

async fn delete_result(
    State(backend): State<FakeBackend>,
    Path((nch, fecha, idfed)): Path<(i64, String, String)>,
) -> Response {
    let mut data = backend.data();
    let Some(i) = result_position(&data.results, nch, &fecha, &idfed) else {
        return detail(StatusCode::NOT_FOUND, "Resultado no encontrado");
    };
    data.results.remove(i);
    Json(json!({ "message": "Resultado eliminado correctamente" })).into_response()
}

fn results_where(backend: &FakeBackend, predicate: impl Fn(&Value) -> bool) -> Response {
    let data = backend.data();
    let rows: Vec<Value> = data.results.iter().filter(|r| predicate(*r)).cloned().collect();
    Json(rows).into_response()
}

async fn results_by_player(State(backend): State<FakeBackend>, Path(idfed): Path<String>) -> Response {
    results_where(&backend, |r| r["idfed_jugador"] == json!(idfed))
}

async fn results_by_type(State(backend): State<FakeBackend>, Path(id): Path<i64>) -> Response {
    results_where(&backend, |r| r["tipo_campeonato_id"] == json!(id))
}

async fn results_by_championship(
    State(backend): State<FakeBackend>,
    Path((tipo, nch)): Path<(i64, i64)>,
) -> Response {
    results_where(&backend, |r| {
        r["tipo_campeonato_id"] == json!(tipo) && r["nch"] == json!(nch)
    })
}
