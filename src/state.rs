use sqlx::SqlitePool;

use crate::db::{CategoryRepository, NoteRepository, UserRepository};

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// 저장소들은 같은 `SqlitePool`(내부적으로 Arc)을 공유하므로 clone 비용이 작습니다.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub notes: NoteRepository,
    pub categories: CategoryRepository,
    pub users: UserRepository,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            notes: NoteRepository::new(pool.clone()),
            categories: CategoryRepository::new(pool.clone()),
            users: UserRepository::new(pool.clone()),
            pool,
        }
    }
}
