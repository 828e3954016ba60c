use actix_web::{http::header::ContentType, web, Either, HttpResponse, Responder};
use crate::core::{classify, Recommender};
use crate::models::{ErrorResponse, HealthResponse, RecommendRequest, RecommendResponse};
use crate::routes::page;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub recommender: Recommender,
    /// Items per meal slot on the HTML page
    pub display_limit: usize,
}

/// Configure the JSON API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/recommend", web::post().to(recommend_json));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let dataset_rows = state.recommender.dataset().len();
    let status = if dataset_rows > 0 { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        dataset_rows,
        timestamp: chrono::Utc::now(),
    })
}

/// Form page
///
/// GET /
pub async fn form_page(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page::render(None, state.display_limit))
}

/// Submit endpoint accepting either JSON or a urlencoded form
///
/// POST /
///
/// JSON requests get a JSON response, form submissions get the page
/// re-rendered with the results.
pub async fn submit(
    state: web::Data<AppState>,
    body: Either<web::Json<RecommendRequest>, web::Form<RecommendRequest>>,
) -> HttpResponse {
    match body {
        Either::Left(req) => respond_json(&state, &req),
        Either::Right(form) => match build_response(&state, &form) {
            Ok(result) => HttpResponse::Ok()
                .content_type(ContentType::html())
                .body(page::render(Some(&result), state.display_limit)),
            Err(err) => HttpResponse::BadRequest().json(err),
        },
    }
}

/// Recommendation endpoint
///
/// POST /api/v1/recommend
///
/// Request body:
/// ```json
/// {
///   "height": 170,
///   "weight": 95,
///   "dietary_preference": "Vegan"
/// }
/// ```
async fn recommend_json(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> HttpResponse {
    respond_json(&state, &req)
}

fn respond_json(state: &AppState, req: &RecommendRequest) -> HttpResponse {
    match build_response(state, req) {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(err) => HttpResponse::BadRequest().json(err),
    }
}

/// Parse the measurements, classify them and pick meals
fn build_response(state: &AppState, req: &RecommendRequest) -> Result<RecommendResponse, ErrorResponse> {
    let height = req
        .height_cm()
        .ok_or_else(|| ErrorResponse::invalid_input("height must be a number"))?;
    let weight = req
        .weight_kg()
        .ok_or_else(|| ErrorResponse::invalid_input("weight must be a number"))?;

    let classification = classify(height, weight).map_err(|e| {
        tracing::info!("Rejected measurements height={} weight={}: {}", height, weight, e);
        ErrorResponse::invalid_input(e.to_string())
    })?;

    let recommendation = state
        .recommender
        .recommend(classification.category, req.preference());

    if recommendation.fallback {
        tracing::warn!(
            "No meals for {} with preference {:?}, served full dataset",
            classification.category,
            req.preference()
        );
    }

    tracing::info!(
        "Classified BMI {:.2} as {} ({} matching rows)",
        classification.bmi,
        classification.category,
        recommendation.matched_rows
    );

    Ok(RecommendResponse::new(&classification, recommendation.meals))
}
