mod myconfig;

pub use self::myconfig::{Config, HttpConfig, StorageConfig};
