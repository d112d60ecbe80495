//! # 농담(Joke) 모델 정의
//!
//! ## 구조체 역할
//! - `Joke`: DB의 `jokes` 테이블 한 행(row)
//! - `FetchJokeResponse`: `GET /joke` 응답 본문 (Joke를 필드 단위로 투영)
//! - `NewJoke`: 시드 파일의 항목 하나 (새 농담 생성 입력)

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// 농담 엔티티 — DB의 `jokes` 테이블 한 행(row)에 대응합니다.
///
/// `sqlx::FromRow`: SQL 결과 행을 이 구조체로 자동 매핑합니다.
/// `created_at`은 TEXT 컬럼이지만 sqlx의 chrono 기능이 `NaiveDateTime`으로 파싱합니다.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Joke {
    /// 고유 식별자 (저장소가 생성 시점에 부여)
    pub id: String,
    /// 농담 본문 (비어 있지 않음)
    pub text: String,
    /// 생성 시각 (타임존 없는 UTC)
    pub created_at: NaiveDateTime,
    /// 제출자. None이면 익명
    pub submitted_by: Option<String>,
}

/// `GET /joke` 성공 응답 본문
///
/// `#[serde(rename_all = "camelCase")]`: 필드 이름을 JSON에서 camelCase로 바꿉니다.
/// 예: `created_at` → `"createdAt"`, `submitted_by` → `"submittedBy"`
///
/// `submitted_by`가 None이면 `"submittedBy": null`로 직렬화됩니다 (빈 문자열로 바꾸지 않음).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchJokeResponse {
    pub joke: String,
    pub id: String,
    /// ISO-8601 문자열 (예: "2023-01-01T00:00:00")
    pub created_at: String,
    pub submitted_by: Option<String>,
}

/// ISO-8601 형식 (`YYYY-MM-DDTHH:MM:SS`)
const ISO_8601: &str = "%Y-%m-%dT%H:%M:%S";

/// 소수점 이하 초가 있을 때의 형식. 항상 마이크로초 6자리로 출력합니다.
/// (`%.f`는 값에 따라 3/6/9자리를 고르므로 쓰지 않습니다)
const ISO_8601_MICROS: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// 생성 시각을 ISO-8601 문자열로 바꿉니다.
///
/// 소수점 이하 초가 0이면 생략하고, 아니면 6자리로 채웁니다.
/// 예: `07:08:09` → `"…T07:08:09"`, `07:08:09.123` → `"…T07:08:09.123000"`
fn format_created_at(created_at: &NaiveDateTime) -> String {
    // Timelike::nanosecond(): 초 이하 부분을 나노초로 돌려줍니다
    let format = if created_at.nanosecond() == 0 {
        ISO_8601
    } else {
        ISO_8601_MICROS
    };
    created_at.format(format).to_string()
}

// From 트레이트: `FetchJokeResponse::from(joke)` 또는 `joke.into()`로 변환할 수 있게 합니다.
// 소유권을 받아가므로(move) 문자열을 복제하지 않습니다.
impl From<Joke> for FetchJokeResponse {
    fn from(joke: Joke) -> Self {
        Self {
            joke: joke.text,
            id: joke.id,
            created_at: format_created_at(&joke.created_at),
            submitted_by: joke.submitted_by,
        }
    }
}

/// 새 농담 입력 — 시드 파일(JSON 배열)의 한 항목
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJoke {
    pub text: String,
    #[serde(default)]
    pub submitted_by: Option<String>,
}
