pub mod remote_authentication;
