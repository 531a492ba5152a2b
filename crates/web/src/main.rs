use anyhow::Context;
use axum::{Router, http::HeaderValue};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod state;

#[cfg(test)]
mod tests;

use config::Config;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::catalog::handlers::get_catalog,
        features::catalog::handlers::list_weight_classes,
        features::age::handlers::get_age,
        features::match_times::handlers::resolve_match_time,
        features::pairings::handlers::validate_pairings,
        features::pairings::handlers::list_candidates,
        features::brackets::handlers::organize_rounds,
        features::divisions::handlers::validate_division,
        features::athletes::handlers::validate_athlete,
    ),
    components(
        schemas(
            rules::models::Catalog,
            rules::models::BeltEntry,
            rules::models::AgeCategoryEntry,
            rules::models::LabelledValue,
            rules::models::PointEntry,
            rules::models::StatusEntry,
            rules::models::WeightClassEntry,
            rules::models::Athlete,
            rules::models::Tournament,
            rules::models::Division,
            rules::models::Match,
            rules::models::Side,
            rules::dto::age::AgeResponse,
            rules::dto::athlete::CreateAthleteRequest,
            rules::dto::athlete::AthleteSummary,
            rules::dto::division::DivisionDescriptor,
            rules::dto::division::CreateDivisionRequest,
            rules::dto::division::DivisionSummary,
            rules::dto::match_time::MatchTimeResponse,
            rules::dto::pairing::ValidatePairingsRequest,
            rules::dto::pairing::CandidatesRequest,
            rules::dto::pairing::PairingValidationResponse,
            rules::dto::tournament::CreateTournamentRequest,
            rules::services::pairing::MatchPair,
            rules::services::pairing::RosterEntry,
            rules::services::bracket::Round,
            rules::services::bracket::MatchProgress,
        )
    ),
    tags(
        (name = "catalog", description = "Belt, age and weight tables"),
        (name = "age", description = "Age calculation"),
        (name = "match-times", description = "Regulation match durations"),
        (name = "pairings", description = "Manual pairing checks"),
        (name = "brackets", description = "Bracket rounds"),
        (name = "divisions", description = "Division request checks"),
        (name = "athletes", description = "Athlete request checks"),
    )
)]
struct ApiDoc;

fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api", features::routes())
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting BJJ rules API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let state = AppState::standard();
    tracing::info!(
        "Match time table loaded, {}s default",
        state.match_times.default_seconds()
    );

    let app = router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors_layer(&config));

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, app).await?;

    Ok(())
}
