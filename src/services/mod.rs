//! # 서비스 계층
//!
//! HTTP 요청 경로 밖에서 실행되는 작업들입니다.
//! - `seed`: 시작 시 빈 `jokes` 테이블 채우기

pub mod seed;
