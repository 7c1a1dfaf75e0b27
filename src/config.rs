//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `DATABASE_URL`: SQLite 데이터베이스 경로 (기본값: `sqlite:finance.db`)
//! - `HOST`: 서버 바인딩 주소 (기본값: `0.0.0.0`)
//! - `PORT`: 서버 포트 번호 (기본값: `8000`)
//! - `API_PREFIX`: API 경로 접두사 (기본값: `/api/v1`)
//! - `CORS_ORIGINS`: 허용할 출처 목록, 쉼표로 구분 (비어 있거나 `*`이면 모두 허용)
//! - `DB_MAX_CONNECTIONS`: 연결 풀 최대 크기 (기본값: 5)
//! - `SEED_ON_STARTUP`: 시작 시 예시 데이터 채우기 (`false` | `true` | `reset`, 기본값: `false`)

use std::env;

/// 애플리케이션 전체 설정을 담는 구조체
///
/// 서버 시작 시 환경변수에서 한 번 읽어온 후, 필요한 곳(연결 풀, 라우터 구성)에
/// 참조로 전달됩니다. 전역 변수는 사용하지 않습니다.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite 데이터베이스 URL (예: "sqlite:finance.db", "sqlite::memory:")
    pub database_url: String,
    pub host: String,
    /// u16: 0~65535 범위의 부호 없는 16비트 정수
    pub port: u16,
    pub api_prefix: String,
    pub cors_origins: Vec<String>,
    pub db_max_connections: u32,
    pub seed_on_startup: SeedMode,
}

/// 서버 시작 시 예시 데이터(seed) 처리 방식
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeedMode {
    /// 아무것도 하지 않음
    #[default]
    Off,
    /// 카테고리와 메모가 없을 때만 채움
    IfEmpty,
    /// 기존 카테고리/메모를 지우고 다시 채움
    Reset,
}

impl SeedMode {
    /// `"true"`, `"1"`, `"yes"` → `IfEmpty`, `"reset"` → `Reset`, 그 외 → `Off`
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "if-empty" => SeedMode::IfEmpty,
            "reset" => SeedMode::Reset,
            _ => SeedMode::Off,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:finance.db".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8000,
            api_prefix: "/api/v1".to_string(),
            cors_origins: Vec::new(),
            db_max_connections: 5,
            seed_on_startup: SeedMode::Off,
        }
    }
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// 모든 항목에 기본값이 있으므로 환경변수가 없어도 동작합니다.
    /// 숫자 파싱에 실패하면 기본값을 사용합니다.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            api_prefix: env::var("API_PREFIX").unwrap_or(defaults.api_prefix),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or(defaults.cors_origins),
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|n| n.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.db_max_connections),
            seed_on_startup: env::var("SEED_ON_STARTUP")
                .map(|v| SeedMode::parse(&v))
                .unwrap_or(defaults.seed_on_startup),
        }
    }

    /// 모든 출처를 허용해야 하는지 여부
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }
}

/// "http://a, http://b" → ["http://a", "http://b"]
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}
