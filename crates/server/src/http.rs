//! HTTP surface of the summarisation service.
//!
//! One working endpoint plus a liveness probe:
//! - `POST /movie_summary` - summarise a review
//! - `GET /health` - report the loaded model and active strategy
//!
//! The handlers stay thin: deserialize, call the generator, map the error
//! taxonomy onto status codes. Extraction and validation failures are the
//! caller's problem (400, cause included); anything else is ours (500,
//! cause logged but not leaked).

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tracing::{error, info, warn};

use schema::{MovieReview, MovieSummary, SummaryError};
use summarizer::SummaryGenerator;

/// Shared, read-only application state.
///
/// Built once before the listener starts; every request sees the same
/// generator and therefore the same model handle.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<SummaryGenerator>,
    pub model_id: String,
}

/// Error body matching the `{"detail": ...}` wire shape.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug, Serialize)]
pub struct HealthBody {
    pub status: &'static str,
    pub model: String,
    pub strategy: &'static str,
}

/// Build the service router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/movie_summary", post(movie_summary))
        .route("/health", get(health))
        .with_state(state)
}

/// `POST /movie_summary` - summarise a movie review.
async fn movie_summary(
    State(state): State<AppState>,
    Json(review): Json<MovieReview>,
) -> Result<Json<MovieSummary>, (StatusCode, Json<ErrorBody>)> {
    info!(
        "Received review from {} ({} chars)",
        review.reviewer,
        review.review.len()
    );

    let digest = state
        .generator
        .generate(&review.review)
        .await
        .map_err(error_response)?;

    Ok(Json(MovieSummary {
        title: digest.title,
        summary: digest.summary,
        grade: digest.grade,
        reviewer: review.reviewer,
    }))
}

/// `GET /health` - liveness probe.
async fn health(State(state): State<AppState>) -> Json<HealthBody> {
    Json(HealthBody {
        status: "ok",
        model: state.model_id.clone(),
        strategy: state.generator.strategy_name(),
    })
}

/// Map the error taxonomy onto the HTTP contract.
fn error_response(err: SummaryError) -> (StatusCode, Json<ErrorBody>) {
    if err.is_client_facing() {
        warn!("Rejecting model output: {}", err);
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                detail: format!("Model output error: {err}"),
            }),
        )
    } else {
        // The detailed cause stays in the server log.
        error!("Summary generation failed: {}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                detail: "Internal server error".to_string(),
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use schema::Result;
    use summarizer::{SamplingParams, StrategyKind, TextGeneration};

    // ============================================================================
    // Test Fixtures
    // ============================================================================

    /// Model handle that replies with a fixed canned string.
    struct CannedModel {
        reply: String,
    }

    #[async_trait]
    impl TextGeneration for CannedModel {
        async fn generate(&self, _prompt: &str, _params: &SamplingParams) -> Result<String> {
            Ok(self.reply.clone())
        }
    }

    /// Model handle that always fails, as a dead runtime would.
    struct BrokenModel;

    #[async_trait]
    impl TextGeneration for BrokenModel {
        async fn generate(&self, _prompt: &str, _params: &SamplingParams) -> Result<String> {
            Err(SummaryError::Generation("connection reset".to_string()))
        }
    }

    fn canned_state(reply: &str) -> AppState {
        AppState {
            generator: Arc::new(SummaryGenerator::new(
                Arc::new(CannedModel {
                    reply: reply.to_string(),
                }),
                StrategyKind::JsonWhole.build(),
                SamplingParams::default(),
            )),
            model_id: "test/model".to_string(),
        }
    }

    fn request(review: &str, reviewer: &str) -> MovieReview {
        MovieReview {
            review: review.to_string(),
            reviewer: reviewer.to_string(),
        }
    }

    // ============================================================================
    // Endpoint Tests
    // ============================================================================

    #[tokio::test]
    async fn valid_model_output_round_trips_with_the_reviewer_attached() {
        let state = canned_state(
            r#"{"title": "Amazing film", "summary": "A glowing review.", "grade": 5}"#,
        );

        let Json(summary) = movie_summary(
            State(state),
            Json(request("Amazing film, 10/10", "Alice")),
        )
        .await
        .expect("request should succeed");

        assert_eq!(
            summary,
            MovieSummary {
                title: "Amazing film".to_string(),
                summary: "A glowing review.".to_string(),
                grade: 5,
                reviewer: "Alice".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn out_of_range_grade_is_a_400_citing_the_range() {
        let state = canned_state(r#"{"title": "X", "summary": "Y", "grade": 7}"#);

        let (status, Json(body)) = movie_summary(
            State(state),
            Json(request("whatever", "Bob")),
        )
        .await
        .expect_err("request should be rejected");

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(
            body.detail.contains("out of range"),
            "detail should cite the range violation, got: {}",
            body.detail
        );
    }

    #[tokio::test]
    async fn unparseable_prose_is_a_400_citing_extraction() {
        let state = canned_state("Lovely film, nothing structured about this reply.");

        let (status, Json(body)) = movie_summary(
            State(state),
            Json(request("whatever", "Bob")),
        )
        .await
        .expect_err("request should be rejected");

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(
            body.detail.contains("extraction failed"),
            "detail should cite the failed extraction, got: {}",
            body.detail
        );
    }

    #[tokio::test]
    async fn missing_field_is_a_400_naming_the_field() {
        let state = canned_state(r#"{"summary": "Y", "grade": 3}"#);

        let (status, Json(body)) = movie_summary(
            State(state),
            Json(request("whatever", "Bob")),
        )
        .await
        .expect_err("request should be rejected");

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.detail.contains("`title`"), "got: {}", body.detail);
    }

    #[tokio::test]
    async fn runtime_faults_are_a_500_with_a_generic_detail() {
        let state = AppState {
            generator: Arc::new(SummaryGenerator::new(
                Arc::new(BrokenModel),
                StrategyKind::JsonWhole.build(),
                SamplingParams::default(),
            )),
            model_id: "test/model".to_string(),
        };

        let (status, Json(body)) = movie_summary(
            State(state),
            Json(request("whatever", "Bob")),
        )
        .await
        .expect_err("request should fail");

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.detail, "Internal server error");
        assert!(
            !body.detail.contains("connection reset"),
            "internal cause must not leak to the caller"
        );
    }

    #[tokio::test]
    async fn health_reports_model_and_strategy() {
        let state = canned_state("{}");

        let Json(body) = health(State(state)).await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.model, "test/model");
        assert_eq!(body.strategy, "json-whole");
    }
}
