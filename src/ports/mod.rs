/// Ports module defining the interfaces of the hexagonal architecture
///
/// The graph core and the application layer only talk to the outside world
/// (package repositories, console, files, Graphviz) through these traits.
pub mod outbound;
