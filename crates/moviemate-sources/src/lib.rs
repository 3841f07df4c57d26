pub mod traits;
pub mod store;
pub mod omdb;
pub mod error;

pub use traits::{MovieStore, TitleIndex};
pub use store::StoreClient;
pub use omdb::OmdbClient;
pub use error::{LookupError, StoreError};
