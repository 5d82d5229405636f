// Shared test doubles for service and router tests

use std::sync::Arc;

use async_trait::async_trait;
use metrics_exporter_prometheus::PrometheusBuilder;

use common::db::repositories::PostStore;
use common::errors::DatabaseError;
use common::models::{NewPost, Post};

use crate::service::PostService;
use crate::state::AppState;

mockall::mock! {
    pub Store {}

    #[async_trait]
    impl PostStore for Store {
        async fn find_by_id(&self, id: i32) -> Result<Option<Post>, DatabaseError>;
        async fn find_all(&self) -> Result<Vec<Post>, DatabaseError>;
        async fn create(&self, post: NewPost) -> Result<Post, DatabaseError>;
        async fn delete(&self, ids: &[i32]) -> Result<u64, DatabaseError>;
    }
}

/// Build an `AppState` backed by the given mock store, with a detached
/// metrics handle that is never installed globally.
pub fn state_with(store: MockStore) -> AppState {
    let metrics_handle = PrometheusBuilder::new().build_recorder().handle();
    AppState::new(PostService::new(Arc::new(store)), metrics_handle)
}
