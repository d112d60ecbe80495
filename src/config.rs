//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `DATABASE_URL`: 데이터베이스 접속 URL (필수)
//! - `DATABASE_MAX_CONNECTIONS`: 연결 풀 최대 크기
//! - `SEED_PATH`: 시작 시 빈 테이블에 넣을 농담 JSON 파일 경로 (선택)
//! - `HOST`: 서버 바인딩 주소
//! - `PORT`: 서버 포트 번호

use std::env;

/// 애플리케이션 전체 설정을 담는 구조체
///
/// 서버 시작 시 환경변수에서 한 번 읽어온 후 `main`에서만 사용됩니다.
/// 핸들러는 설정이 아니라 `AppState`의 연결 풀만 받습니다.
#[derive(Debug, Clone)]
pub struct Config {
    /// 데이터베이스 URL (예: "sqlite:data/jokes.db?mode=rwc")
    pub database_url: String,
    /// 연결 풀이 유지할 최대 연결 수 (기본값: 5)
    pub max_connections: u32,
    /// 시드 파일 경로. None이면 시드 단계를 건너뜁니다.
    pub seed_path: Option<String>,
    /// 서버가 바인딩할 호스트 주소 (기본값: "0.0.0.0")
    pub host: String,
    /// 서버 포트 번호 (기본값: 3000)
    pub port: u16,
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// # 에러
    /// `DATABASE_URL`이 없으면 `VarError`를 반환합니다.
    /// 나머지 설정은 기본값이 있어 환경변수가 없어도 동작합니다.
    pub fn from_env() -> Result<Self, env::VarError> {
        Self::from_lookup(|key| env::var(key))
    }

    /// 임의의 조회 함수로 설정을 만듭니다.
    ///
    /// 프로세스 환경변수를 건드리지 않고 테스트할 수 있도록 분리했습니다.
    /// `F: Fn(&str) -> ...`: 키를 받아 값을 돌려주는 클로저라면 무엇이든 받습니다.
    fn from_lookup<F>(lookup: F) -> Result<Self, env::VarError>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        Ok(Self {
            database_url: lookup("DATABASE_URL")?, // 필수: 없으면 에러
            max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            // .ok(): Result → Option. 변수가 없으면 None
            // 빈 문자열도 "설정 안 함"으로 취급합니다.
            seed_path: lookup("SEED_PATH").ok().filter(|p| !p.trim().is_empty()),
            host: lookup("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
        })
    }
}
