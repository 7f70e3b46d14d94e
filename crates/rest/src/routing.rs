//! Route configuration.
//!
//! All API routes live under the `/hrs` prefix.

use axum::{
    Router,
    routing::{get, post},
};
use hrs_persistence::DocumentStorage;

use crate::handlers;
use crate::state::AppState;

/// Creates the API routes.
///
/// # Routes
///
/// - `GET /hrs/status` - liveness
/// - `POST /hrs/recipes` - create
/// - `GET/PATCH/DELETE /hrs/recipes/{id}` - read / patch / delete
/// - `POST /hrs/ingredients` - create
/// - `GET/PATCH/DELETE /hrs/ingredients/{id}` - read / patch / delete
///
/// Trailing-slash instance paths (`/hrs/recipes/`, `/hrs/ingredients/`)
/// resolve to the same operations with an empty id, which the worker rejects
/// with a functional-error envelope.
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: DocumentStorage + 'static,
{
    let api = Router::new()
        .route("/status", get(handlers::status_handler))
        // Recipes
        .route("/recipes", post(handlers::create_recipe_handler::<S>))
        .route(
            "/recipes/",
            get(handlers::read_recipe_missing_id::<S>)
                .patch(handlers::patch_recipe_missing_id::<S>)
                .delete(handlers::delete_recipe_missing_id::<S>),
        )
        .route(
            "/recipes/{id}",
            get(handlers::read_recipe_handler::<S>)
                .patch(handlers::patch_recipe_handler::<S>)
                .delete(handlers::delete_recipe_handler::<S>),
        )
        // Ingredients
        .route("/ingredients", post(handlers::create_ingredient_handler::<S>))
        .route(
            "/ingredients/",
            get(handlers::read_ingredient_missing_id::<S>)
                .patch(handlers::patch_ingredient_missing_id::<S>)
                .delete(handlers::delete_ingredient_missing_id::<S>),
        )
        .route(
            "/ingredients/{id}",
            get(handlers::read_ingredient_handler::<S>)
                .patch(handlers::patch_ingredient_handler::<S>)
                .delete(handlers::delete_ingredient_handler::<S>),
        );

    Router::new().nest("/hrs", api).with_state(state)
}
