pub mod connection;
pub mod generate;
mod router;

pub use router::router;
