//! # finance-notes 웹 서버 진입점
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. SQLite 데이터베이스 연결 풀 생성
//! 4. 데이터베이스 마이그레이션 실행 (테이블 생성)
//!    + `SEED_ON_STARTUP`이면 예시 데이터 채우기
//! 5. API 라우터 설정
//! 6. HTTP 서버 시작

use anyhow::Result;
use finance_notes::{
    build_app,
    config::{Config, SeedMode},
    db,
    state::AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // RUST_LOG가 없으면 이 크레이트, tower_http, axum을 debug 레벨로 설정
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "finance_notes=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── 3단계: 설정 로딩 ──
    // 한 번만 읽고, 필요한 곳에 참조로 넘깁니다.
    let config = Config::from_env();
    tracing::info!("Starting finance-notes server on {}:{}", config.host, config.port);

    // ── 4단계: SQLite 연결 풀 생성 ──
    let pool = db::connect(&config).await?;

    // ── 5단계: 마이그레이션 (notes, categories, users 테이블) ──
    tracing::info!("Running database migrations...");
    db::run_migrations(&pool).await?;

    match config.seed_on_startup {
        SeedMode::Off => {}
        SeedMode::IfEmpty => {
            db::seed::seed_if_empty(&pool).await?;
        }
        SeedMode::Reset => {
            db::seed::seed_database(&pool, true).await?;
        }
    }

    // ── 6단계: 라우터 구성 ──
    let state = AppState::new(pool);
    let app = build_app(state, &config);

    // ── 7단계: 서버 시작 ──
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}{}", addr, config.api_prefix);

    axum::serve(listener, app).await?;

    Ok(())
}
