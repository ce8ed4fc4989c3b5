//! Web server exposing tournaments and round building over a JSON API.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 127.0.0.1), PORT (e.g. 8080).

use actix_web::{
    get, post,
    web::{Bytes, Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use chess_tournament::{
    check_roster_size, find_chain, generate_round, random_roster, roster_from_csv,
    roster_from_ranks, start_tournament, Player, PlayerId, Rank, Round, Tournament, TournamentConfig, TournamentError,
    TournamentId,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-tournament entry: tournament data + last activity time (for auto-cleanup).
struct TournamentEntry {
    tournament: Tournament,
    last_activity: Instant,
}

type AppState = Data<RwLock<HashMap<TournamentId, TournamentEntry>>>;

/// A tournament untouched for this long is dropped (a long weekend event).
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(72 * 3600);

/// How often idle tournaments are looked for.
const CLEANUP_INTERVAL: Duration = Duration::from_secs(3600);

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    /// Explicit ranks, ids assigned in order. Random roster when absent.
    #[serde(default)]
    ranks: Option<Vec<Rank>>,
    #[serde(default = "default_no_of_players")]
    no_of_players: usize,
    #[serde(default)]
    matches_per_round: Option<usize>,
}

fn default_no_of_players() -> usize {
    10
}

#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

#[derive(Deserialize)]
struct ChainQuery {
    /// Player to walk from; the first roster player when absent.
    start: Option<PlayerId>,
}

#[derive(Serialize)]
struct RoundResponse<'a> {
    round: &'a Round,
    display: String,
    remaining_matches: usize,
}

#[derive(Serialize)]
struct ChainResponse {
    chain: Vec<PlayerId>,
}

fn error_response(e: TournamentError) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" }))
}

fn insert_tournament(
    state: &AppState,
    players: Vec<Player>,
    matches_per_round: Option<usize>,
) -> HttpResponse {
    let config = matches_per_round
        .map(|matches_per_round| TournamentConfig { matches_per_round })
        .unwrap_or_else(|| TournamentConfig::for_players(players.len()));
    let tournament = match start_tournament(players, config) {
        Ok(t) => t,
        Err(e) => return error_response(e),
    };
    let id = tournament.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    log::info!(
        "Created tournament {} ({} players, {} matches per round)",
        id,
        tournament.players.len(),
        tournament.config.matches_per_round
    );
    let response = HttpResponse::Ok().json(&tournament);
    g.insert(
        id,
        TournamentEntry {
            tournament,
            last_activity: Instant::now(),
        },
    );
    response
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "chess-tournament",
    })
}

/// Create a tournament from explicit ranks or a random roster.
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Option<Json<CreateTournamentBody>>) -> HttpResponse {
    let body = body.map(Json::into_inner).unwrap_or(CreateTournamentBody {
        ranks: None,
        no_of_players: default_no_of_players(),
        matches_per_round: None,
    });
    let requested = body.ranks.as_ref().map_or(body.no_of_players, Vec::len);
    if let Err(e) = check_roster_size(requested) {
        return error_response(e);
    }
    let players = match &body.ranks {
        Some(ranks) => roster_from_ranks(ranks),
        None => random_roster(body.no_of_players, &mut rand::thread_rng()),
    };
    insert_tournament(&state, players, body.matches_per_round)
}

/// Create a tournament from a CSV roster (`id,rank` header).
#[post("/api/tournaments/import")]
async fn api_import_tournament(state: AppState, body: Bytes) -> HttpResponse {
    match roster_from_csv(body.as_ref()) {
        Ok(players) => insert_tournament(&state, players, None),
        Err(e) => error_response(e),
    }
}

/// Get a tournament by id. Touching it refreshes last_activity.
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(&entry.tournament)
        }
        None => not_found(),
    }
}

/// Build the next round. An incomplete round is returned but not recorded.
#[post("/api/tournaments/{id}/rounds")]
async fn api_next_round(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    let round = generate_round(t);
    HttpResponse::Ok().json(RoundResponse {
        round: &round,
        display: round.to_string(),
        remaining_matches: t.remaining_matches(),
    })
}

/// Chain of not-yet-played opponents from `?start=<player id>` or the first roster player.
#[get("/api/tournaments/{id}/chain")]
async fn api_chain(
    state: AppState,
    path: Path<TournamentPath>,
    query: Query<ChainQuery>,
) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let t = match g.get(&path.id) {
        Some(e) => &e.tournament,
        None => return not_found(),
    };
    let start = match query.start {
        Some(id) => match t.get_player(id) {
            Ok(p) => Some(p),
            Err(e) => return error_response(e),
        },
        None => t.players.first(),
    };
    let chain = start.map_or_else(Vec::new, |p| find_chain(p.id, &t.pool));
    HttpResponse::Ok().json(ChainResponse { chain })
}

/// Bind address from `HOST` (default 0.0.0.0) and `PORT` (default 8080).
fn bind_address() -> (String, u16) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    (host, port)
}

/// Periodically drop tournaments nobody has touched within `INACTIVITY_TIMEOUT`.
async fn drop_idle_tournaments(state: AppState) {
    let mut interval = actix_web::rt::time::interval(CLEANUP_INTERVAL);
    loop {
        interval.tick().await;
        let Ok(mut g) = state.write() else {
            continue;
        };
        let idle: Vec<TournamentId> = g
            .iter()
            .filter(|(_, entry)| entry.last_activity.elapsed() >= INACTIVITY_TIMEOUT)
            .map(|(id, _)| *id)
            .collect();
        for id in idle {
            if let Some(entry) = g.remove(&id) {
                log::info!(
                    "Dropped idle tournament {} after {} round(s)",
                    id,
                    entry.tournament.rounds.len()
                );
            }
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let (host, port) = bind_address();
    log::info!("Chess tournament server listening on http://{}:{}", host, port);

    let state = Data::new(RwLock::new(HashMap::<TournamentId, TournamentEntry>::new()));
    actix_web::rt::spawn(drop_idle_tournaments(state.clone()));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_create_tournament)
            .service(api_import_tournament)
            .service(api_get_tournament)
            .service(api_next_round)
            .service(api_chain)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
