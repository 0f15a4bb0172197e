pub mod account;
pub mod credentials;
pub mod endpoint;
