//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들과 라우터 구성을 모아둔 모듈입니다.
//!
//! 각 하위 모듈:
//! - `health`: 서버 상태 확인 (헬스체크)
//! - `jokes`: 무작위 농담 조회

pub mod health;
pub mod jokes;

pub use health::*;
pub use jokes::*;

use axum::{routing::get, Router};
use sqlx::SqlitePool;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// 연결 풀은 시작 시 한 번 만들어지고, 요청 간에 읽기 전용으로 공유됩니다.
/// `SqlitePool`은 내부적으로 Arc를 쓰므로 clone해도 같은 풀을 가리킵니다.
#[derive(Clone)]
pub struct AppState {
    /// SQLite 연결 풀
    pub pool: SqlitePool,
}

/// 전체 라우터를 구성합니다.
///
/// `main`과 테스트가 같은 라우터를 사용하도록 한 곳에 모았습니다.
pub fn build_router(state: AppState) -> Router {
    // 개발 편의를 위해 모든 출처/메서드/헤더를 허용합니다.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/joke", get(get_random_joke))
        .route("/health", get(health_check))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http()) // HTTP 요청/응답 자동 로깅
}
