//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 데이터베이스와 직접 상호작용하는 코드를 모아둔 모듈입니다.
//! 라우트 핸들러(routes/)에서 이 모듈의 저장소를 호출하여 DB 작업을 수행합니다.
//!
//! 각 하위 모듈:
//! - `repository`: 엔티티 종류와 무관한 제네릭 CRUD (`Repository<E>`)
//! - `notes`: 메모 저장소 (검색, 제목 조회)
//! - `categories`: 카테고리 저장소 (이름 조회)
//! - `users`: 사용자 저장소 (email/username 조회, 중복 검사)
//! - `seed`: 빈 데이터베이스에 예시 카테고리/메모 채우기

pub mod categories;
pub mod notes;
pub mod repository;
pub mod seed;
pub mod users;

pub use categories::CategoryRepository;
pub use notes::NoteRepository;
pub use repository::{Entity, Repository};
pub use users::UserRepository;

use std::str::FromStr;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::config::Config;

/// ./migrations 폴더의 SQL 파일들을 컴파일 타임에 포함시킵니다.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// 설정값으로 SQLite 연결 풀을 만듭니다.
///
/// 인메모리 DB(`sqlite::memory:`)는 연결마다 별개의 DB가 되므로
/// 연결 1개만 유지하고, 유휴 시간 초과로 닫히지 않게 합니다.
pub async fn connect(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    let pool_options = if config.database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(config.db_max_connections)
    };

    pool_options.connect_with(options).await
}

/// 아직 실행되지 않은 마이그레이션만 순서대로 실행합니다.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}
