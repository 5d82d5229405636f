// Service layer between handlers and the repository

use std::sync::Arc;

use common::db::repositories::PostStore;
use common::errors::AppError;
use common::models::{NewPost, Post};

/// Orchestration layer for post operations.
///
/// Forwards each call to the repository, wrapping failures into `AppError`
/// and logging the underlying cause with the operation context before the
/// error crosses the HTTP boundary.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostStore>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostStore>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_post(&self, id: i32) -> Result<Post, AppError> {
        match self.repo.find_by_id(id).await {
            Ok(Some(post)) => Ok(post),
            Ok(None) => Err(AppError::NotFound(id)),
            Err(e) => {
                tracing::error!(id, error = %e, "Failed to fetch post");
                Err(AppError::Internal(e))
            }
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_all_posts(&self) -> Result<Vec<Post>, AppError> {
        self.repo.find_all().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to fetch posts");
            AppError::Internal(e)
        })
    }

    #[tracing::instrument(skip(self, post))]
    pub async fn create_post(&self, post: NewPost) -> Result<Post, AppError> {
        self.repo.create(post).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to create post");
            AppError::Internal(e)
        })
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_posts(&self, ids: &[i32]) -> Result<u64, AppError> {
        if ids.is_empty() {
            return Err(AppError::MissingIds);
        }

        self.repo.delete(ids).await.map_err(|e| {
            tracing::error!(?ids, error = %e, "Failed to delete posts");
            AppError::Internal(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::MockStore;
    use common::errors::DatabaseError;
    use mockall::predicate::eq;

    fn sample_post(id: i32) -> Post {
        Post {
            id,
            title: "T".to_string(),
            body: "B".to_string(),
        }
    }

    #[tokio::test]
    async fn get_post_returns_post_when_present() {
        let mut store = MockStore::new();
        store
            .expect_find_by_id()
            .with(eq(7))
            .returning(|id| Ok(Some(sample_post(id))));

        let service = PostService::new(Arc::new(store));
        let post = service.get_post(7).await.unwrap();
        assert_eq!(post.id, 7);
    }

    #[tokio::test]
    async fn get_post_maps_absence_to_not_found() {
        let mut store = MockStore::new();
        store.expect_find_by_id().returning(|_| Ok(None));

        let service = PostService::new(Arc::new(store));
        let err = service.get_post(7).await.unwrap_err();
        assert_eq!(err.code(), "NOT_FOUND");
    }

    #[tokio::test]
    async fn get_post_wraps_repository_errors() {
        let mut store = MockStore::new();
        store
            .expect_find_by_id()
            .returning(|_| Err(DatabaseError::QueryFailed("boom".to_string())));

        let service = PostService::new(Arc::new(store));
        let err = service.get_post(7).await.unwrap_err();
        assert_eq!(err.code(), "INTERNAL_ERROR");
        assert_eq!(err.client_message(), "Internal server error");
    }

    #[tokio::test]
    async fn delete_posts_rejects_empty_id_list_without_touching_store() {
        let mut store = MockStore::new();
        store.expect_delete().never();

        let service = PostService::new(Arc::new(store));
        let err = service.delete_posts(&[]).await.unwrap_err();
        assert_eq!(err.code(), "MISSING_IDS");
    }

    #[tokio::test]
    async fn delete_posts_forwards_ids_to_store() {
        let mut store = MockStore::new();
        store
            .expect_delete()
            .withf(|ids: &[i32]| ids == [1, 2, 3])
            .returning(|ids| Ok(ids.len() as u64));

        let service = PostService::new(Arc::new(store));
        let count = service.delete_posts(&[1, 2, 3]).await.unwrap();
        assert_eq!(count, 3);
    }
}
