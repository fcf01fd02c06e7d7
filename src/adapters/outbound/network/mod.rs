/// Network adapters for remote package repositories
mod maven_repository;

pub use maven_repository::MavenRepository;
