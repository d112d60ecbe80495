//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 데이터베이스와 직접 상호작용하는 함수들을 모아둔 모듈입니다.
//! 라우트 핸들러(routes/)와 시드 서비스(services/)가 이 모듈의 함수를 호출합니다.
//!
//! 각 하위 모듈:
//! - `jokes`: 농담 조회/생성 쿼리

pub mod jokes;

// `crate::db::fetch_random_joke`처럼 바로 접근할 수 있게 재공개합니다.
pub use jokes::*;
