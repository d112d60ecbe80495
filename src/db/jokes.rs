//! # 농담 데이터베이스 쿼리 모듈
//!
//! `jokes` 테이블을 다루는 SQL 쿼리 함수들입니다.
//! 요청 경로에서는 읽기(`fetch_random_joke`)만 수행하고,
//! 쓰기(`create_joke`)는 시작 시 시드 단계에서만 사용됩니다.

use crate::error::AppError;
use crate::models::*;
use sqlx::{SqliteExecutor, SqlitePool};

/// 무작위로 농담 하나를 조회합니다.
///
/// 무작위 선택은 DB가 `ORDER BY RANDOM()`으로 수행합니다.
/// 행이 아무리 많아도 클라이언트로는 `LIMIT 1`에 해당하는 한 행만 넘어옵니다.
///
/// ## 반환값
/// - `Ok(Joke)`: 선택된 농담
/// - `Err(AppError::NoJokesAvailable)`: 테이블이 비어 있음
/// - `Err(AppError::Database(..))`: 연결/쿼리 오류 (그대로 전파)
pub async fn fetch_random_joke(pool: &SqlitePool) -> Result<Joke, AppError> {
    let joke = sqlx::query_as::<_, Joke>(
        r#"
        SELECT id, text, created_at, submitted_by
        FROM jokes
        ORDER BY RANDOM()
        LIMIT 1
        "#,
    )
    // fetch_optional: 0행이면 None, 1행이면 Some(Joke)
    .fetch_optional(pool)
    .await?;

    // ok_or(): None(빈 테이블)이면 도메인 에러로 바꿉니다
    joke.ok_or(AppError::NoJokesAvailable)
}

/// 저장된 농담 수를 셉니다.
///
/// `SqliteExecutor`: `&SqlitePool`과 트랜잭션(`&mut *tx`) 모두 받을 수 있는 트레이트입니다.
pub async fn count_jokes<'e, E>(executor: E) -> Result<i64, AppError>
where
    E: SqliteExecutor<'e>,
{
    // query_scalar: 결과의 첫 번째 컬럼 하나만 꺼냅니다
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jokes")
        .fetch_one(executor)
        .await?;

    Ok(count)
}

/// 새 농담을 저장하고, 저장된 행을 반환합니다.
///
/// id는 UUIDv7, `created_at`은 테이블 기본값(현재 UTC 시각)이 채웁니다.
/// 시드 단계에서는 트랜잭션 안에서 호출됩니다.
pub async fn create_joke<'e, E>(executor: E, new: &NewJoke) -> Result<Joke, AppError>
where
    E: SqliteExecutor<'e>,
{
    let id = uuid::Uuid::now_v7().to_string();

    // RETURNING: INSERT와 동시에 DB 기본값이 적용된 행을 돌려받습니다 (SQLite 3.35+)
    let joke = sqlx::query_as::<_, Joke>(
        r#"
        INSERT INTO jokes (id, text, submitted_by)
        VALUES (?, ?, ?)
        RETURNING id, text, created_at, submitted_by
        "#,
    )
    .bind(&id)
    .bind(&new.text)
    .bind(&new.submitted_by) // None이면 SQL NULL
    .fetch_one(executor)
    .await?;

    Ok(joke)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::{insert_joke, test_pool};
    use std::collections::HashSet;

    #[tokio::test]
    async fn empty_table_is_no_jokes_available() {
        let pool = test_pool().await;

        let err = fetch_random_joke(&pool).await.unwrap_err();
        assert!(matches!(err, AppError::NoJokesAvailable));
    }

    #[tokio::test]
    async fn single_row_is_returned_as_stored() {
        let pool = test_pool().await;
        insert_joke(&pool, "1234-5678-9012", "a joke", "2023-01-01T00:00:00", Some("John Doe")).await;

        let joke = fetch_random_joke(&pool).await.unwrap();
        assert_eq!(joke.id, "1234-5678-9012");
        assert_eq!(joke.text, "a joke");
        assert_eq!(joke.submitted_by.as_deref(), Some("John Doe"));
        assert_eq!(
            joke.created_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
            "2023-01-01T00:00:00"
        );
    }

    #[tokio::test]
    async fn null_submitter_stays_none() {
        let pool = test_pool().await;
        insert_joke(&pool, "anon", "anonymous joke", "2023-01-01T00:00:00", None).await;

        let joke = fetch_random_joke(&pool).await.unwrap();
        assert_eq!(joke.submitted_by, None);
    }

    #[tokio::test]
    async fn repeated_fetches_pick_more_than_one_row() {
        let pool = test_pool().await;
        for i in 0..5 {
            insert_joke(&pool, &format!("id-{i}"), &format!("joke {i}"), "2023-01-01T00:00:00", None)
                .await;
        }

        let mut seen = HashSet::new();
        for _ in 0..100 {
            seen.insert(fetch_random_joke(&pool).await.unwrap().id);
        }
        assert!(seen.len() > 1, "always returned {:?}", seen);
    }

    #[tokio::test]
    async fn closed_pool_propagates_database_error() {
        let pool = test_pool().await;
        pool.close().await;

        let err = fetch_random_joke(&pool).await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }

    #[tokio::test]
    async fn create_joke_assigns_id_and_timestamp() {
        let pool = test_pool().await;
        let new = NewJoke {
            text: "fresh joke".to_string(),
            submitted_by: None,
        };

        let first = create_joke(&pool, &new).await.unwrap();
        let second = create_joke(&pool, &new).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.text, "fresh joke");
        assert_eq!(first.submitted_by, None);
        assert_eq!(count_jokes(&pool).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn empty_text_is_rejected_by_schema() {
        let pool = test_pool().await;
        let new = NewJoke {
            text: String::new(),
            submitted_by: None,
        };

        let err = create_joke(&pool, &new).await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
        assert_eq!(count_jokes(&pool).await.unwrap(), 0);
    }
}
