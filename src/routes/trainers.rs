use crate::core::Matcher;
use crate::models::{
    ErrorResponse, HealthResponse, SearchTrainersRequest, SearchTrainersResponse, TagListResponse,
};
use crate::services::{StoreError, TrainerStore};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TrainerStore>,
    pub matcher: Matcher,
}

/// Configure all trainer-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/trainers/search", web::post().to(search_trainers))
        .route("/trainers/{nickname}", web::get().to(get_trainer))
        .route("/tags", web::get().to(list_tags));
}

fn store_error_response(err: &StoreError) -> HttpResponse {
    HttpResponse::ServiceUnavailable().json(ErrorResponse {
        error: "store_unavailable".to_string(),
        message: err.to_string(),
        status_code: 503,
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = state.store.health_check().unwrap_or(false);
    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Trainer search endpoint
///
/// POST /api/v1/trainers/search
///
/// Request body:
/// ```json
/// {
///   "tags": ["분리불안"],
///   "areas": ["강남구"]
/// }
/// ```
async fn search_trainers(
    state: web::Data<AppState>,
    req: web::Json<SearchTrainersRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    tracing::info!(
        "Searching trainers: {} tags, {} areas",
        req.tags.len(),
        req.areas.len()
    );

    match state.matcher.search(state.store.as_ref(), &req.tags, &req.areas) {
        Ok(result) => {
            tracing::debug!(
                "Search returned {} entries (found={})",
                result.entries.len(),
                result.found
            );
            let total_results = result.entries.len();
            HttpResponse::Ok().json(SearchTrainersResponse {
                matches: result.entries,
                found: result.found,
                total_results,
            })
        }
        Err(e) => {
            tracing::error!("Trainer search failed: {}", e);
            store_error_response(&e)
        }
    }
}

/// Trainer profile detail endpoint
///
/// GET /api/v1/trainers/{nickname}
async fn get_trainer(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let nickname = path.into_inner();

    match state.store.find_by_nickname(&nickname) {
        Ok(Some(trainer)) => HttpResponse::Ok().json(trainer),
        Ok(None) => HttpResponse::NotFound().json(ErrorResponse {
            error: "trainer_not_found".to_string(),
            message: format!("No trainer with nickname: {}", nickname),
            status_code: 404,
        }),
        Err(e) => {
            tracing::error!("Trainer lookup failed for {}: {}", nickname, e);
            store_error_response(&e)
        }
    }
}

/// Tag listing endpoint - reference list for the assistant's tag selection
///
/// GET /api/v1/tags
async fn list_tags(state: web::Data<AppState>) -> impl Responder {
    match state.store.list_tags() {
        Ok(tags) => {
            let count = tags.len();
            HttpResponse::Ok().json(TagListResponse { tags, count })
        }
        Err(e) => {
            tracing::error!("Tag listing failed: {}", e);
            store_error_response(&e)
        }
    }
}
