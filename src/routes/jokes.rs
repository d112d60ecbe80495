//! # 농담(Joke) 라우트 핸들러
//!
//! ## 엔드포인트
//! - `GET /joke` → 무작위 농담 하나
//!
//! ## 응답
//! - 200: `{ "joke", "id", "createdAt", "submittedBy" }`
//! - 500: `{ "error": "<메시지>" }` (빈 저장소, DB 오류 모두)

use crate::{db, error::AppError, models::FetchJokeResponse, routes::AppState};
use axum::{extract::State, Json};

/// `GET /joke` — 무작위 농담 하나를 조회합니다.
///
/// 요청마다 조회를 정확히 한 번 수행하며 재시도하지 않습니다.
/// 실패하면 `AppError`의 `IntoResponse`가 500 에러 응답을 만듭니다.
pub async fn get_random_joke(
    State(state): State<AppState>,
) -> Result<Json<FetchJokeResponse>, AppError> {
    let joke = db::fetch_random_joke(&state.pool).await?;
    // .into(): From<Joke> for FetchJokeResponse 구현을 사용
    Ok(Json(joke.into()))
}

#[cfg(test)]
mod tests {
    use crate::db::test_support::{insert_joke, test_pool};
    use crate::routes::{build_router, AppState};
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use std::collections::HashSet;
    use tower::ServiceExt; // oneshot()

    async fn get_joke(app: Router) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri("/joke").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn returns_stored_joke() {
        let pool = test_pool().await;
        insert_joke(
            &pool,
            "1234-5678-9012",
            "Why did the function stop calling? Because it reached its call limit!",
            "2023-01-01T00:00:00",
            Some("John Doe"),
        )
        .await;

        let (status, body) = get_joke(build_router(AppState { pool })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "joke": "Why did the function stop calling? Because it reached its call limit!",
                "id": "1234-5678-9012",
                "createdAt": "2023-01-01T00:00:00",
                "submittedBy": "John Doe"
            })
        );
    }

    #[tokio::test]
    async fn empty_store_is_500_with_fixed_message() {
        let pool = test_pool().await;

        let (status, body) = get_joke(build_router(AppState { pool })).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "No jokes available in the database." }));
    }

    #[tokio::test]
    async fn anonymous_joke_has_null_submitter() {
        let pool = test_pool().await;
        insert_joke(&pool, "anon-1", "anonymous joke", "2023-06-01T08:15:00", None).await;

        let (status, body) = get_joke(build_router(AppState { pool })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["submittedBy"], Value::Null);
        assert_eq!(body["createdAt"], "2023-06-01T08:15:00");
    }

    #[tokio::test]
    async fn closed_pool_is_500_with_message() {
        let pool = test_pool().await;
        insert_joke(&pool, "1", "a joke", "2023-01-01T00:00:00", None).await;
        pool.close().await;

        let (status, body) = get_joke(build_router(AppState { pool })).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let message = body["error"].as_str().unwrap();
        assert!(!message.is_empty());
    }

    #[tokio::test]
    async fn repeated_requests_return_different_jokes() {
        let pool = test_pool().await;
        for i in 0..3 {
            insert_joke(&pool, &format!("id-{i}"), &format!("joke {i}"), "2023-01-01T00:00:00", None)
                .await;
        }
        let app = build_router(AppState { pool });

        let mut ids = HashSet::new();
        for _ in 0..100 {
            // Router는 Clone이 저렴합니다 (내부 Arc)
            let (status, body) = get_joke(app.clone()).await;
            assert_eq!(status, StatusCode::OK);
            ids.insert(body["id"].as_str().unwrap().to_string());
        }
        assert!(ids.len() > 1);
    }
}
