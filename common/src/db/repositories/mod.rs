// Repository layer for database operations

pub mod post;

pub use post::{PostRepository, PostStore};
