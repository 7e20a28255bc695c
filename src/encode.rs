/// In-memory PNG encoding.
pub mod png;
/// Destinations for rendered icons.
pub mod sink;
