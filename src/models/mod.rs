mod product;
mod record_id;
mod store;
mod timestamp;

pub use product::*;
pub use record_id::{KeyType, RecordId};
pub use store::*;
pub use timestamp::Timestamp;
