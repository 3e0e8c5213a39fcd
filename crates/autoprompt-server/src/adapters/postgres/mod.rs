//! PostgreSQL Repository Implementations

mod history_repository;

pub use history_repository::PgHistoryRepository;
