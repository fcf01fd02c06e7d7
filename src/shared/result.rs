/// Crate-wide Result alias with `anyhow::Error` as the error type.
///
/// Typed failures are `GraphError` values wrapped in the anyhow error and can be
/// recovered with `downcast_ref::<GraphError>()`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
