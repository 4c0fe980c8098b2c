//! Single binary web server: the scoreboard REST API.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the board is reachable on the office LAN.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).
//! Board state persists as JSON under DATA_DIR (default ./data).

use actix_web::{
    get, post,
    web::{Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use serde::Deserialize;
use sportsday_scoreboard_web::{
    lessons, Competition, CustomFormat, Scoreboard, SlotId, SportId, Store, STANDARD_WIN_POINTS,
};
use std::sync::RwLock;
use std::time::Duration;

/// Shared state: the one scoreboard, serialized behind a lock. Every mutation
/// persists itself before the lock is released.
type AppState = Data<RwLock<Scoreboard>>;

/// How often the background task re-saves both blobs (heals transient write
/// failures; normal saves happen on every mutation).
const AUTOSAVE_INTERVAL: Duration = Duration::from_secs(10 * 60);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// A competition plus the id it lives under (responses to sport endpoints).
#[derive(serde::Serialize)]
struct SportView<'a> {
    sport: SportId,
    #[serde(flatten)]
    competition: &'a Competition,
}

#[derive(Deserialize)]
struct ScoreTapBody {
    slot: SlotId,
    /// 1-based entrant index: 1 or 2 on brackets, 1..=N on free-for-alls.
    entrant: usize,
}

#[derive(Deserialize)]
struct ResetMatchBody {
    slot: SlotId,
}

#[derive(Deserialize)]
struct CreateCustomBody {
    #[serde(default)]
    format: CustomFormat,
    #[serde(default)]
    display_name: String,
    #[serde(default = "default_win_points")]
    win_points: u32,
    entrants: Vec<String>,
}

fn default_win_points() -> u32 {
    STANDARD_WIN_POINTS
}

#[derive(Deserialize)]
struct ThermometryQuery {
    celsius: f64,
}

#[derive(Deserialize)]
struct FiberQuery {
    degrees: f64,
}

/// Path segment: sport id (e.g. /api/sports/{sport})
#[derive(Deserialize)]
struct SportPath {
    sport: SportId,
}

fn sport_view(g: &Scoreboard, sport: SportId) -> HttpResponse {
    match g.state().competition(&sport) {
        Some(competition) => HttpResponse::Ok().json(SportView { sport, competition }),
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No such sport" })),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "sportsday-scoreboard-web",
    })
}

/// The whole board: every competition keyed by sport id.
#[get("/api/scoreboard")]
async fn api_get_scoreboard(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(g.state())
}

/// One competition by sport id (404 if not on the board).
#[get("/api/sports/{sport}")]
async fn api_get_sport(state: AppState, path: Path<SportPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    sport_view(&g, path.sport)
}

/// Create a custom competition (bracket, pair, or free-for-all).
#[post("/api/sports")]
async fn api_create_custom(state: AppState, body: Json<CreateCustomBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let body = body.into_inner();
    match g.create_custom(body.format, &body.display_name, body.win_points, body.entrants) {
        Ok(sport) => sport_view(&g, sport),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// +1 tap on a seat. Taps that the rules reject (locked match, waiting seat,
/// unknown slot) leave the board unchanged and still return it.
#[post("/api/sports/{sport}/increment")]
async fn api_increment(state: AppState, path: Path<SportPath>, body: Json<ScoreTapBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.add_point(&path.sport, body.slot, body.entrant) {
        Ok(()) => sport_view(&g, path.sport),
        Err(e) => HttpResponse::NotFound().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// -1 tap on a seat (the undo path; may take a decided result back).
#[post("/api/sports/{sport}/decrement")]
async fn api_decrement(state: AppState, path: Path<SportPath>, body: Json<ScoreTapBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.subtract_point(&path.sport, body.slot, body.entrant) {
        Ok(()) => sport_view(&g, path.sport),
        Err(e) => HttpResponse::NotFound().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Reset one match (scores, result, and everything it fed downstream).
#[post("/api/sports/{sport}/matches/reset")]
async fn api_reset_match(state: AppState, path: Path<SportPath>, body: Json<ResetMatchBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.reset_match(&path.sport, body.slot) {
        Ok(()) => sport_view(&g, path.sport),
        Err(e) => HttpResponse::NotFound().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Restore one competition to its seeded configuration.
#[post("/api/sports/{sport}/reset")]
async fn api_reset_sport(state: AppState, path: Path<SportPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.reset_sport(&path.sport) {
        Ok(()) => sport_view(&g, path.sport),
        Err(e) => HttpResponse::NotFound().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Reset the whole board: built-ins reseeded, customs dropped, history cleared.
#[post("/api/reset")]
async fn api_reset_all(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.reset_all();
    HttpResponse::Ok().json(g.state())
}

/// Champion and runner-up per sport, built-ins first.
#[get("/api/standings")]
async fn api_standings(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(g.standings())
}

/// The result feed, newest first.
#[get("/api/history")]
async fn api_history(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(g.history())
}

#[get("/api/lessons/thermometry")]
async fn api_lessons_thermometry(query: Query<ThermometryQuery>) -> impl Responder {
    HttpResponse::Ok().json(lessons::thermometer(query.celsius))
}

#[get("/api/lessons/fiber-optics")]
async fn api_lessons_fiber_optics(query: Query<FiberQuery>) -> impl Responder {
    HttpResponse::Ok().json(lessons::fiber_optics(query.degrees))
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let store = Store::from_env();
    log::info!("Board state under {}", store.state_path().display());
    let state = Data::new(RwLock::new(Scoreboard::open(store)));

    // Background task: periodically re-save both blobs so a transient write
    // failure (full disk, busy file) does not stay unrecovered until the next tap
    let state_autosave = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(AUTOSAVE_INTERVAL);
        loop {
            interval.tick().await;
            let g = match state_autosave.read() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            g.flush_all();
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_get_scoreboard)
            .service(api_create_custom)
            .service(api_get_sport)
            .service(api_increment)
            .service(api_decrement)
            .service(api_reset_match)
            .service(api_reset_sport)
            .service(api_reset_all)
            .service(api_standings)
            .service(api_history)
            .service(api_lessons_thermometry)
            .service(api_lessons_fiber_optics)
    })
    .bind(bind)?
    .run()
    .await
}
