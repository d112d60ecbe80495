//! # Joke API 웹 서버 진입점
//!
//! 이 파일은 애플리케이션의 **시작점(entry point)**입니다.
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. SQLite 데이터베이스 연결 풀 생성
//! 4. 데이터베이스 마이그레이션 실행
//! 5. (선택) 빈 테이블에 시드 데이터 삽입
//! 6. API 라우터 설정 및 HTTP 서버 시작
//! 7. 종료 신호 수신 시 요청 수신을 멈추고 연결 풀 닫기

mod config;
mod db;
mod error;
mod models;
mod routes;
mod services;

use anyhow::Result;
use config::Config;
use routes::{build_router, AppState};
use sqlx::sqlite::SqlitePoolOptions;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // RUST_LOG가 없으면 joke_api, tower_http, axum 모듈을 debug 레벨로 설정
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "joke_api=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── 3단계: 설정 로딩 ──
    let config = Config::from_env()?;
    tracing::info!("Starting Joke API server on {}:{}", config.host, config.port);

    // ── 4단계: 연결 풀 생성 ──
    // 프로세스 전체에서 하나의 풀만 만들고, 요청마다 새로 연결하지 않습니다.
    // 연결에 실패하면 요청을 받기 전에 종료합니다.
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    // ── 5단계: 마이그레이션 ──
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;

    // ── 6단계: 시드 (SEED_PATH가 설정된 경우에만) ──
    if let Some(seed_path) = &config.seed_path {
        services::seed::run(&pool, seed_path).await?;
    }

    // ── 7단계: 라우터 구성 ──
    // pool.clone()은 같은 풀을 가리키는 핸들만 복제합니다.
    let app = build_router(AppState { pool: pool.clone() });

    // ── 8단계: 서버 시작 ──
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // with_graceful_shutdown: 신호를 받으면 새 연결을 받지 않고,
    // 처리 중인 요청이 끝날 때까지 기다린 뒤 serve()가 반환됩니다.
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // ── 9단계: 연결 풀 닫기 ──
    tracing::info!("Closing database pool");
    pool.close().await;

    Ok(())
}

/// Ctrl+C 또는 SIGTERM(유닉스)을 기다립니다.
///
/// `tokio::select!`: 여러 Future 중 먼저 완료되는 쪽을 처리합니다.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            // 핸들러 설치에 실패하면 이 분기는 영원히 대기합니다
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
