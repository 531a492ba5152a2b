use axum::{
    Json,
    extract::Query,
    response::{IntoResponse, Response},
};
use rules::dto::age::AgeResponse;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::WebError;

use super::services;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct AgeQuery {
    pub date_of_birth: Option<String>,
    /// Reference date, defaults to the server's local date
    pub today: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/age",
    params(AgeQuery),
    responses(
        (status = 200, description = "Age in completed years, null when unknown", body = AgeResponse),
        (status = 400, description = "Invalid reference date")
    ),
    tag = "age"
)]
pub async fn get_age(Query(query): Query<AgeQuery>) -> Result<Response, WebError> {
    let today = services::reference_date(query.today.as_deref())?;
    let age = services::age_for(query.date_of_birth.as_deref(), today);

    Ok(Json(AgeResponse::from(age)).into_response())
}
