/// Application layer - Use cases and DTOs
///
/// Orchestrates the graph services and coordinates with infrastructure
/// through ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
