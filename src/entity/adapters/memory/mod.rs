//! In-memory entity repository.

mod config;
mod repository;

pub use config::RepositoryConfig;
pub use repository::InMemoryEntityRepository;
