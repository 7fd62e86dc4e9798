//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod article_repo;
pub mod diary_repo;
pub mod event_repo;
pub mod gallery_repo;
pub mod plant_repo;
pub mod session_repo;
pub mod user_repo;

pub use article_repo::ArticleRepo;
pub use diary_repo::DiaryRepo;
pub use event_repo::EventRepo;
pub use gallery_repo::GalleryRepo;
pub use plant_repo::PlantRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
