//! Axum router construction for the Pokerun API.
//!
//! Assembles every route into a single [`Router`] with CORS enabled for the
//! web front-end and request tracing.

use axum::Router;
use axum::routing::{get, patch, put};
use pokerun_roster::RosterStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{self, captures, players, progress, run, species, team};
use crate::state::AppState;

/// Build the complete router over `state`.
///
/// See [`handlers`] for the endpoint table.
pub fn build_router<S: RosterStore>(state: AppState<S>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        // Profiles
        .route("/api/players", get(players::list_players::<S>))
        .route("/api/me", get(players::get_me::<S>).put(players::put_me::<S>))
        .route("/api/me/avatar", put(players::put_avatar::<S>))
        // Captures
        .route(
            "/api/me/captures",
            get(captures::list_mine::<S>).post(captures::create::<S>),
        )
        .route(
            "/api/me/captures/{id}",
            patch(captures::update_status::<S>).delete(captures::delete::<S>),
        )
        .route("/api/captures", get(captures::board::<S>))
        // Team
        .route("/api/me/team", get(team::get_team::<S>))
        .route("/api/me/team/eligible", get(team::eligible::<S>))
        .route(
            "/api/me/team/{slot}",
            put(team::assign::<S>).delete(team::clear::<S>),
        )
        .route("/api/teams", get(team::team_board::<S>))
        // Progress
        .route(
            "/api/me/progress",
            get(progress::get_mine::<S>).put(progress::save::<S>),
        )
        .route("/api/ranking", get(progress::ranking::<S>))
        // Run
        .route("/api/rules", get(run::get_rules::<S>).put(run::put_rules::<S>))
        .route("/api/run", get(run::get_run::<S>).put(run::put_run::<S>))
        .route("/api/games", get(run::list_games::<S>))
        .route("/api/routes", get(run::list_routes::<S>))
        .route("/api/routes/offerable", get(run::offerable_routes::<S>))
        // Species
        .route("/api/species/sprite", get(species::sprite::<S>))
        .route("/api/species/search", get(species::search::<S>))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
