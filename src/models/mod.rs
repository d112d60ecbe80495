//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! - `joke`: 농담 엔티티와 응답/입력 구조체
//!
//! `pub use joke::*;`로 재공개하여 `crate::models::Joke`처럼 짧게 접근합니다.

pub mod joke;

pub use joke::*;
