/// Dependency graph core - domain model and pure graph services
///
/// Nothing in this module performs I/O directly; package metadata is
/// obtained through the `DependencyResolver` port.
pub mod domain;
pub mod services;
