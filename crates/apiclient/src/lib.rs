pub mod abstract_trait;
pub mod client;
pub mod di;
pub mod domain;
pub mod service;
