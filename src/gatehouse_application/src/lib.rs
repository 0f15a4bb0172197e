pub mod use_cases;

pub use use_cases::remote_authentication::RemoteAuthentication;
