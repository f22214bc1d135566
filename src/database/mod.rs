mod connection;
mod connector;

pub use connection::{check_health, PgConnector};
pub use connector::{CatalogSession, Connector};
