use diesel::{ConnectionError, ConnectionResult, prelude::*, sqlite::SqliteConnection};
use diesel_async::{
    AsyncConnection, RunQueryDsl, SimpleAsyncConnection,
    pooled_connection::{
        AsyncDieselConnectionManager, ManagerConfig,
        deadpool::{BuildError, Pool, PoolError},
    },
    sync_connection_wrapper::SyncConnectionWrapper,
};
use futures_util::future::BoxFuture;

use crate::{
    models::comment::{Comment, NewComment},
    schema::tbl_comments,
};

type DbConnection = SyncConnectionWrapper<SqliteConnection>;

// Millisecond timestamps keep the listing order stable for comments posted in
// the same second. Ties are broken by id when listing.
const CREATE_COMMENTS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS tbl_comments (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        commenter TEXT NOT NULL,
        details TEXT NOT NULL,
        silent_discard BOOLEAN NOT NULL DEFAULT 0,
        created_at DATETIME NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now'))
    );
";

const CONNECTION_PRAGMAS: &str = "
    PRAGMA busy_timeout = 5000;
    PRAGMA synchronous = NORMAL;
";

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("couldn't build the connection pool: {0}")]
    Build(#[from] BuildError),

    #[error("couldn't get a connection from the pool: {0}")]
    Pool(#[from] PoolError),

    #[error("query failed: {0}")]
    Query(#[from] diesel::result::Error),
}

/// Handle to the comment table.
///
/// Constructed once at startup and handed to the request handlers through the
/// application state. Cloning is cheap, all clones share one connection pool.
#[derive(Clone)]
pub struct Store {
    pool: Pool<DbConnection>,
}

fn establish(url: &str) -> BoxFuture<'_, ConnectionResult<DbConnection>> {
    Box::pin(async move {
        let mut conn = DbConnection::establish(url).await?;
        conn.batch_execute(CONNECTION_PRAGMAS)
            .await
            .map_err(ConnectionError::CouldntSetupConfiguration)?;
        Ok(conn)
    })
}

impl Store {
    /// Opens the pool and creates the comment table if it doesn't exist yet.
    ///
    /// Every pooled connection to `:memory:` opens its own empty database, so
    /// in-memory stores must use a single connection.
    pub async fn connect(url: &str, max_connections: usize) -> Result<Self, StoreError> {
        let mut config = ManagerConfig::default();
        config.custom_setup = Box::new(establish);

        let manager = AsyncDieselConnectionManager::<DbConnection>::new_with_config(url, config);
        let pool = Pool::builder(manager).max_size(max_connections).build()?;

        let mut conn = pool.get().await?;
        conn.batch_execute(CREATE_COMMENTS_TABLE).await?;
        drop(conn);

        Ok(Self { pool })
    }

    /// Persists a comment and returns the id the database assigned to it.
    ///
    /// Both fields are validated before a connection is acquired and stored
    /// exactly as submitted.
    pub async fn insert_comment(
        &self,
        commenter: &str,
        details: &str,
        silent_discard: bool,
    ) -> Result<i32, StoreError> {
        validate(commenter, details)?;

        let mut conn = self.pool.get().await?;

        let id = diesel::insert_into(tbl_comments::table)
            .values(&NewComment {
                commenter,
                details,
                silent_discard,
            })
            .returning(tbl_comments::id)
            .get_result::<i32>(&mut conn)
            .await?;

        Ok(id)
    }

    /// Newest first. Silently discarded comments are only part of the result
    /// when `include_hidden` is set.
    pub async fn list_visible(&self, include_hidden: bool) -> Result<Vec<Comment>, StoreError> {
        let mut conn = self.pool.get().await?;

        let mut query = tbl_comments::table
            .select(Comment::as_select())
            .order((tbl_comments::created_at.desc(), tbl_comments::id.desc()))
            .into_boxed();

        if !include_hidden {
            query = query.filter(tbl_comments::silent_discard.eq(false));
        }

        Ok(query.load::<Comment>(&mut conn).await?)
    }

    pub async fn count(&self) -> Result<i64, StoreError> {
        let mut conn = self.pool.get().await?;

        Ok(tbl_comments::table
            .count()
            .get_result::<i64>(&mut conn)
            .await?)
    }

    /// Stops handing out connections and drops the idle ones.
    pub fn close(&self) {
        self.pool.close();
    }
}

// Whitespace-only fields count as empty
fn validate(commenter: &str, details: &str) -> Result<(), StoreError> {
    if commenter.trim().is_empty() || details.trim().is_empty() {
        return Err(StoreError::Validation("Commenter and details are required"));
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    async fn memory_store() -> Store {
        Store::connect(":memory:", 1).await.unwrap()
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let store = memory_store().await;

        let first = store.insert_comment("Alice", "Hello", false).await.unwrap();
        let second = store.insert_comment("Bob", "Hi", false).await.unwrap();

        assert!(second > first, "Ids should be assigned monotonically");
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_insert_keeps_silent_discard_flag() {
        let store = memory_store().await;

        store.insert_comment("Alice", "Hello", false).await.unwrap();
        store.insert_comment("Alice", "Hello", true).await.unwrap();

        let comments = store.list_visible(true).await.unwrap();
        assert_eq!(comments.len(), 2);
        // newest first
        assert!(comments[0].silent_discard);
        assert!(!comments[1].silent_discard);
        assert_eq!(comments[1].commenter, "Alice");
        assert_eq!(comments[1].details, "Hello");
    }

    #[tokio::test]
    async fn test_insert_rejects_empty_fields() {
        let store = memory_store().await;

        for (commenter, details) in [("", "Hello"), ("Alice", ""), ("   ", "Hello"), ("", "")] {
            let result = store.insert_comment(commenter, details, false).await;
            assert!(
                matches!(result, Err(StoreError::Validation(_))),
                "Expected a validation error for {commenter:?} / {details:?}"
            );
        }

        assert_eq!(store.count().await.unwrap(), 0, "Nothing should be persisted");
    }

    #[tokio::test]
    async fn test_insert_accepts_long_fields() {
        let store = memory_store().await;

        let long_name = "a".repeat(101);
        let long_details = "b".repeat(5001);
        store
            .insert_comment(&long_name, &long_details, false)
            .await
            .unwrap();

        let comments = store.list_visible(false).await.unwrap();
        assert_eq!(comments[0].commenter, long_name);
        assert_eq!(comments[0].details, long_details);
    }

    #[tokio::test]
    async fn test_insert_stores_fields_as_submitted() {
        let store = memory_store().await;

        store
            .insert_comment("  Bob  ", "\tHello\n", false)
            .await
            .unwrap();

        let comments = store.list_visible(false).await.unwrap();
        assert_eq!(comments[0].commenter, "  Bob  ");
        assert_eq!(comments[0].details, "\tHello\n");
    }

    #[tokio::test]
    async fn test_list_visible_hides_silently_discarded() {
        let store = memory_store().await;

        store.insert_comment("human", "visible", false).await.unwrap();
        store.insert_comment("bot", "hidden", true).await.unwrap();
        store.insert_comment("human", "visible too", false).await.unwrap();

        let visible = store.list_visible(false).await.unwrap();
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|c| !c.silent_discard));

        let all = store.list_visible(true).await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all.iter().filter(|c| c.silent_discard).count(), 1);
    }

    #[tokio::test]
    async fn test_list_visible_newest_first() {
        let store = memory_store().await;

        let mut ids = vec![];
        for i in 0..5 {
            ids.push(
                store
                    .insert_comment("Alice", &format!("comment {i}"), i % 2 == 0)
                    .await
                    .unwrap(),
            );
        }

        for include_hidden in [true, false] {
            let comments = store.list_visible(include_hidden).await.unwrap();
            for pair in comments.windows(2) {
                assert!(
                    (pair[0].created_at, pair[0].id) > (pair[1].created_at, pair[1].id),
                    "Comments should be sorted by creation time, newest first"
                );
            }
        }

        let all = store.list_visible(true).await.unwrap();
        let listed: Vec<i32> = all.iter().map(|c| c.id).collect();
        ids.reverse();
        assert_eq!(listed, ids);
    }

    #[tokio::test]
    async fn test_closed_store_fails_with_pool_error() {
        let store = memory_store().await;
        store.close();

        let result = store.list_visible(true).await;
        assert!(matches!(result, Err(StoreError::Pool(_))));
    }
}
