//! Post entity.

pub mod model;

pub use model::{CreatePost, Post, PostOwnership, PostWithAuthor, UpdatePost};
