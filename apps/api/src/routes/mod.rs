pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::events::handlers as events;
use crate::fixtures::handlers as fixtures;
use crate::members::handlers as members;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Fixture import
        .route("/api/v1/fixtures/import", post(fixtures::handle_import))
        // Events collection
        .route(
            "/api/v1/events",
            get(events::handle_list_events).post(events::handle_create_event),
        )
        .route(
            "/api/v1/events/:id",
            get(events::handle_get_event).delete(events::handle_delete_event),
        )
        .route(
            "/api/v1/events/:id/status",
            patch(events::handle_update_status),
        )
        // Membership roll
        .route(
            "/api/v1/members",
            get(members::handle_list_members).post(members::handle_create_member),
        )
        .route(
            "/api/v1/members/:id",
            get(members::handle_get_member)
                .patch(members::handle_update_member)
                .delete(members::handle_delete_member),
        )
        .with_state(state)
}
