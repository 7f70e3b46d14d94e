//! Ingredient endpoints: `POST /hrs/ingredients`,
//! `GET/PATCH/DELETE /hrs/ingredients/{id}`.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::Response,
};
use hrs_persistence::DocumentStorage;
use hrs_types::Ingredient;

use crate::handlers::{decode_error_response, envelope_response};
use crate::state::AppState;

/// `POST /hrs/ingredients` - creates an ingredient, returning 201 with the
/// persisted object (the server assigns the id).
pub async fn create_ingredient_handler<S>(
    State(state): State<AppState<S>>,
    body: Result<Json<Ingredient>, JsonRejection>,
) -> Response
where
    S: DocumentStorage + 'static,
{
    let Json(ingredient) = match body {
        Ok(json) => json,
        Err(rejection) => return decode_error_response(rejection),
    };
    envelope_response(state.worker().create_ingredient(ingredient).await)
}

/// `GET /hrs/ingredients/{id}` - returns the ingredient, or a 409 envelope
/// when the id is unknown.
pub async fn read_ingredient_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Response
where
    S: DocumentStorage + 'static,
{
    envelope_response(state.worker().ingredient_by_id(&id).await)
}

/// `PATCH /hrs/ingredients/{id}` - replaces the ingredient in place; 200
/// with no payload on success.
pub async fn patch_ingredient_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    body: Result<Json<Ingredient>, JsonRejection>,
) -> Response
where
    S: DocumentStorage + 'static,
{
    let Json(ingredient) = match body {
        Ok(json) => json,
        Err(rejection) => return decode_error_response(rejection),
    };
    envelope_response(state.worker().patch_ingredient(&id, ingredient).await)
}

/// `DELETE /hrs/ingredients/{id}` - removes the ingredient; 204 on success.
pub async fn delete_ingredient_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Response
where
    S: DocumentStorage + 'static,
{
    envelope_response(state.worker().delete_ingredient(&id).await)
}

/// `GET /hrs/ingredients/` - empty id, 409 functional error.
pub async fn read_ingredient_missing_id<S>(State(state): State<AppState<S>>) -> Response
where
    S: DocumentStorage + 'static,
{
    envelope_response(state.worker().ingredient_by_id("").await)
}

/// `PATCH /hrs/ingredients/` - empty id, 409 functional error.
pub async fn patch_ingredient_missing_id<S>(State(state): State<AppState<S>>) -> Response
where
    S: DocumentStorage + 'static,
{
    envelope_response(
        state
            .worker()
            .patch_ingredient("", Ingredient::default())
            .await,
    )
}

/// `DELETE /hrs/ingredients/` - empty id, 409 functional error.
pub async fn delete_ingredient_missing_id<S>(State(state): State<AppState<S>>) -> Response
where
    S: DocumentStorage + 'static,
{
    envelope_response(state.worker().delete_ingredient("").await)
}
