mod repository;

pub use repository::PostgresHealthCheckRepository;
