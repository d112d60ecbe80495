//! # 시드(Seed) 서비스
//!
//! 서버 시작 시 `jokes` 테이블이 비어 있으면 JSON 파일의 농담들로 채웁니다.
//!
//! ## 파일 형식
//! ```json
//! [
//!   { "text": "Why did the function stop calling? ...", "submittedBy": "John Doe" },
//!   { "text": "익명 농담" }
//! ]
//! ```
//!
//! 이미 한 건이라도 있으면 아무것도 하지 않습니다 (재시작해도 중복 삽입 없음).

use crate::{db, error::AppError, models::NewJoke};
use sqlx::SqlitePool;
use std::path::Path;

/// 시드 실행 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// 빈 테이블에 `inserted`건을 넣었고, `skipped`건은 본문이 비어 건너뜀
    Seeded { inserted: usize, skipped: usize },
    /// 테이블에 이미 `existing`건이 있어 시드를 건너뜀
    AlreadyPopulated { existing: i64 },
}

/// 시드 파일을 읽어 파싱합니다.
///
/// 파일이 없으면 `AppError::Io`, JSON이 잘못되었으면 `AppError::Seed`를 반환합니다.
pub async fn load_seed_file(path: impl AsRef<Path>) -> Result<Vec<NewJoke>, AppError> {
    let raw = tokio::fs::read_to_string(path.as_ref()).await?;
    serde_json::from_str(&raw).map_err(|e| {
        AppError::Seed(format!("{}: {}", path.as_ref().display(), e))
    })
}

/// 테이블이 비어 있을 때만 농담들을 넣습니다.
///
/// 확인과 삽입을 하나의 트랜잭션으로 묶습니다. 중간에 삽입이 실패하면
/// 전체가 롤백되어 테이블은 빈 채로 남고, 다음 시작 때 시드를 다시 시도합니다.
pub async fn seed_if_empty(pool: &SqlitePool, jokes: &[NewJoke]) -> Result<SeedOutcome, AppError> {
    // begin(): 풀에서 연결 하나를 빌려 트랜잭션을 시작합니다.
    // commit() 없이 `tx`가 drop되면 자동으로 롤백됩니다.
    let mut tx = pool.begin().await?;

    // &mut *tx: Transaction을 역참조해 내부 연결(&mut SqliteConnection)을 빌려줍니다
    let existing = db::count_jokes(&mut *tx).await?;
    if existing > 0 {
        return Ok(SeedOutcome::AlreadyPopulated { existing });
    }

    let mut inserted = 0;
    let mut skipped = 0;
    for joke in jokes {
        if joke.text.trim().is_empty() {
            tracing::warn!("Skipping seed entry with empty text");
            skipped += 1;
            continue;
        }
        db::create_joke(&mut *tx, joke).await?;
        inserted += 1;
    }

    tx.commit().await?;

    Ok(SeedOutcome::Seeded { inserted, skipped })
}

/// 파일을 읽어 시드를 실행하고 결과를 로그로 남깁니다.
pub async fn run(pool: &SqlitePool, path: &str) -> Result<SeedOutcome, AppError> {
    let jokes = load_seed_file(path).await?;
    let outcome = seed_if_empty(pool, &jokes).await?;

    match outcome {
        SeedOutcome::Seeded { inserted, skipped } => {
            tracing::info!(inserted, skipped, "Seeded jokes table from {}", path);
        }
        SeedOutcome::AlreadyPopulated { existing } => {
            tracing::info!(existing, "Jokes table already populated, skipping seed");
        }
    }

    Ok(outcome)
}
