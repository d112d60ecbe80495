//! # 에러 처리 모듈
//!
//! 애플리케이션에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//! Rust에서는 예외(exception) 대신 `Result<T, E>` 타입으로 에러를 처리합니다.
//!
//! 이 모듈의 핵심:
//! - `AppError` 열거형(enum): 도메인 에러와 인프라 에러를 하나의 타입으로 통합
//! - `IntoResponse` 구현: 모든 에러를 `{ "error": "<메시지>" }` JSON 응답으로 변환
//!
//! 현재 정책은 "모든 에러 → 500"입니다. 에러 종류는 내부적으로 구분되므로
//! 상태 코드를 나누고 싶다면 `status_code()` 한 곳만 바꾸면 됩니다.

use axum::{
    http::StatusCode,                   // HTTP 상태 코드 (200, 500 등)
    response::{IntoResponse, Response}, // Axum의 응답 변환 트레이트
    Json,                               // JSON 응답 래퍼
};
use serde_json::json; // json! 매크로: JSON 객체를 간편하게 생성
use thiserror::Error; // thiserror: 커스텀 에러 타입을 쉽게 만들어주는 매크로 크레이트

/// 애플리케이션에서 발생할 수 있는 모든 에러 종류
///
/// 핸들러에서 `Result<T, AppError>`를 반환하면,
/// Axum이 자동으로 `IntoResponse`를 호출하여 HTTP 응답으로 변환합니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 저장소에 농담이 한 건도 없음 (도메인 에러)
    ///
    /// 운영자가 데이터를 넣어야만 해소됩니다.
    #[error("No jokes available in the database.")]
    NoJokesAvailable,

    /// 데이터베이스 오류 (인프라 에러: 연결 끊김, 쿼리 오류 등)
    /// #[from]: sqlx::Error를 AppError로 자동 변환하는 From 트레이트를 구현합니다.
    /// sqlx 함수의 결과에 `?`를 쓰면 자동으로 AppError::Database가 됩니다.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// 파일 입출력 오류 (시드 파일 읽기 실패 등)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 시드 데이터 형식 오류
    #[error("Seed error: {0}")]
    Seed(String),
}

impl AppError {
    /// 로그에 남길 에러 종류 식별자
    ///
    /// 응답 본문에는 노출되지 않고, 서버 로그의 구조화된 필드로만 사용됩니다.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::NoJokesAvailable => "no_jokes_available",
            AppError::Database(_) => "database_error",
            AppError::Io(_) => "io_error",
            AppError::Seed(_) => "seed_error",
        }
    }

    /// 이 에러에 대응하는 HTTP 상태 코드
    ///
    /// 빈 저장소도 현재는 500으로 응답합니다 (404로 나누지 않음).
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NoJokesAvailable
            | AppError::Database(_)
            | AppError::Io(_)
            | AppError::Seed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    /// AppError를 HTTP 응답으로 변환합니다.
    ///
    /// 에러는 서버 로그에 기록하고, 클라이언트에는 에러 메시지(Display)를
    /// `{ "error": "..." }` 형태로 그대로 돌려줍니다.
    fn into_response(self) -> Response {
        // tracing의 구조화된 필드: kind = "...", %self는 Display로 기록
        tracing::error!(kind = self.kind(), "Error processing request: {}", self);

        let status = self.status_code();
        // 결과: { "error": "No jokes available in the database." }
        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
