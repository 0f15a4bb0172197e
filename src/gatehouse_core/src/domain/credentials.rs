use secrecy::{ExposeSecret, Secret};
use serde::{Serialize, ser::SerializeStruct};

/// Credentials for a single authentication attempt.
///
/// Serialized on the wire as `{"email": ..., "password": ...}`. The password is
/// only exposed during serialization, never through `Debug`.
#[derive(Debug, Clone)]
pub struct Credentials {
    email: String,
    password: Secret<String>,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: Secret<String>) -> Self {
        Self {
            email: email.into(),
            password,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &Secret<String> {
        &self.password
    }
}

impl PartialEq for Credentials {
    fn eq(&self, other: &Self) -> bool {
        self.email == other.email
            && self.password.expose_secret() == other.password.expose_secret()
    }
}

impl Serialize for Credentials {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Credentials", 2)?;
        state.serialize_field("email", &self.email)?;
        state.serialize_field("password", self.password.expose_secret())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_wire_field_names() {
        let credentials = Credentials::new("a@b.com", Secret::from("p@ss".to_owned()));

        let json = serde_json::to_value(&credentials).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "email": "a@b.com", "password": "p@ss" })
        );
    }

    #[test]
    fn test_debug_does_not_leak_password() {
        let credentials = Credentials::new("a@b.com", Secret::from("p@ss".to_owned()));

        let debug = format!("{credentials:?}");

        assert!(debug.contains("a@b.com"));
        assert!(!debug.contains("p@ss"));
    }

    #[test]
    fn test_equality_compares_exposed_password() {
        let a = Credentials::new("a@b.com", Secret::from("p@ss".to_owned()));
        let b = Credentials::new("a@b.com", Secret::from("p@ss".to_owned()));
        let c = Credentials::new("a@b.com", Secret::from("other".to_owned()));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
