mod client;
mod error;
mod store;

pub use self::client::ClientError;
pub use self::error::ErrorResponse;
pub use self::store::StoreError;
