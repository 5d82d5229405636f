// Post repository implementation

use crate::db::DbPool;
use crate::errors::DatabaseError;
use crate::models::{NewPost, Post};
use async_trait::async_trait;
use tracing::instrument;

/// Data-access contract for posts.
///
/// Every operation propagates database failures as `DatabaseError`; absence
/// of a row is reported as `Ok(None)` rather than an error so callers can
/// distinguish not-found from infrastructure problems.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Single-row lookup by primary key
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, DatabaseError>;

    /// Unordered full scan; an empty table yields an empty vector
    async fn find_all(&self) -> Result<Vec<Post>, DatabaseError>;

    /// Insert a post and return the persisted row with its assigned id
    async fn create(&self, post: NewPost) -> Result<Post, DatabaseError>;

    /// Bulk delete by id list, returning the number of rows removed
    async fn delete(&self, ids: &[i32]) -> Result<u64, DatabaseError>;
}

/// PostgreSQL-backed repository for the `posts` table
pub struct PostRepository {
    pool: DbPool,
}

impl PostRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostStore for PostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, DatabaseError> {
        let post = sqlx::query_as::<_, Post>("SELECT id, title, body FROM posts WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.pool())
            .await?;

        Ok(post)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Post>, DatabaseError> {
        let posts = sqlx::query_as::<_, Post>("SELECT id, title, body FROM posts")
            .fetch_all(self.pool.pool())
            .await?;

        tracing::debug!(count = posts.len(), "Fetched all posts");
        Ok(posts)
    }

    #[instrument(skip(self, post))]
    async fn create(&self, post: NewPost) -> Result<Post, DatabaseError> {
        let created = sqlx::query_as::<_, Post>(
            "INSERT INTO posts (title, body) VALUES ($1, $2) RETURNING id, title, body",
        )
        .bind(&post.title)
        .bind(&post.body)
        .fetch_one(self.pool.pool())
        .await?;

        tracing::info!(id = created.id, "Post created");
        Ok(created)
    }

    #[instrument(skip(self))]
    async fn delete(&self, ids: &[i32]) -> Result<u64, DatabaseError> {
        if ids.is_empty() {
            return Ok(0);
        }

        // One bind parameter per id; ids are never interpolated into the SQL text
        let sql = format!("DELETE FROM posts WHERE id IN ({})", in_placeholders(ids.len()));

        let mut query = sqlx::query(&sql);
        for id in ids {
            query = query.bind(id);
        }

        let result = query.execute(self.pool.pool()).await?;

        tracing::info!(count = result.rows_affected(), "Posts deleted");
        Ok(result.rows_affected())
    }
}

/// Build the `$1, $2, ...` placeholder list for a dynamically sized IN clause
fn in_placeholders(count: usize) -> String {
    (1..=count)
        .map(|i| format!("${}", i))
        .collect::<Vec<_>>()
        .join(", ")
}
