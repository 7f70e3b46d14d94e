//! Recipe endpoints: `POST /hrs/recipes`, `GET/PATCH/DELETE /hrs/recipes/{id}`.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::Response,
};
use hrs_persistence::DocumentStorage;
use hrs_types::Recipe;

use crate::handlers::{decode_error_response, envelope_response};
use crate::state::AppState;

/// `POST /hrs/recipes` - creates a recipe, returning 201 with the persisted
/// object (the server assigns the id).
pub async fn create_recipe_handler<S>(
    State(state): State<AppState<S>>,
    body: Result<Json<Recipe>, JsonRejection>,
) -> Response
where
    S: DocumentStorage + 'static,
{
    let Json(recipe) = match body {
        Ok(json) => json,
        Err(rejection) => return decode_error_response(rejection),
    };
    envelope_response(state.worker().create_recipe(recipe).await)
}

/// `GET /hrs/recipes/{id}` - returns the recipe, or a 409 envelope when the
/// id is unknown.
pub async fn read_recipe_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Response
where
    S: DocumentStorage + 'static,
{
    envelope_response(state.worker().recipe_by_id(&id).await)
}

/// `PATCH /hrs/recipes/{id}` - replaces the recipe in place; 200 with no
/// payload on success.
pub async fn patch_recipe_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    body: Result<Json<Recipe>, JsonRejection>,
) -> Response
where
    S: DocumentStorage + 'static,
{
    let Json(recipe) = match body {
        Ok(json) => json,
        Err(rejection) => return decode_error_response(rejection),
    };
    envelope_response(state.worker().patch_recipe(&id, recipe).await)
}

/// `DELETE /hrs/recipes/{id}` - removes the recipe; 204 on success.
pub async fn delete_recipe_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Response
where
    S: DocumentStorage + 'static,
{
    envelope_response(state.worker().delete_recipe(&id).await)
}

// Trailing-slash instance paths carry an empty id and answer with the
// functional-error envelope instead of a router 404.

/// `GET /hrs/recipes/` - empty id, 409 functional error.
pub async fn read_recipe_missing_id<S>(State(state): State<AppState<S>>) -> Response
where
    S: DocumentStorage + 'static,
{
    envelope_response(state.worker().recipe_by_id("").await)
}

/// `PATCH /hrs/recipes/` - empty id, 409 functional error.
pub async fn patch_recipe_missing_id<S>(State(state): State<AppState<S>>) -> Response
where
    S: DocumentStorage + 'static,
{
    envelope_response(state.worker().patch_recipe("", Recipe::default()).await)
}

/// `DELETE /hrs/recipes/` - empty id, 409 functional error.
pub async fn delete_recipe_missing_id<S>(State(state): State<AppState<S>>) -> Response
where
    S: DocumentStorage + 'static,
{
    envelope_response(state.worker().delete_recipe("").await)
}
