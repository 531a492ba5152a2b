use axum::{
    Json,
    extract::Query,
    response::{IntoResponse, Response},
};
use rules::models::{Catalog, Gender, WeightClass, WeightClassEntry};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::WebError;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WeightClassQuery {
    /// MALE, FEMALE or NOT_APPLICABLE
    pub gender: String,
}

#[utoipa::path(
    get,
    path = "/api/catalog",
    responses(
        (status = 200, description = "Every belt, age, weight, bracket, submission, point and status table", body = Catalog)
    ),
    tag = "catalog"
)]
pub async fn get_catalog() -> Json<Catalog> {
    Json(Catalog::standard())
}

#[utoipa::path(
    get,
    path = "/api/catalog/weight-classes",
    params(WeightClassQuery),
    responses(
        (status = 200, description = "Weight classes for the gender, lightest first", body = Vec<WeightClassEntry>),
        (status = 400, description = "Unknown gender")
    ),
    tag = "catalog"
)]
pub async fn list_weight_classes(
    Query(query): Query<WeightClassQuery>,
) -> Result<Response, WebError> {
    let gender: Gender = query.gender.parse()?;

    Ok(Json(WeightClass::entries(gender)).into_response())
}
