pub mod connection;
pub mod listings;

pub use connection::Database;
