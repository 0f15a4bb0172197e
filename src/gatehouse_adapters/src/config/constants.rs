pub mod env {
    pub const ENV_PREFIX: &str = "GATEHOUSE";
    pub const ENV_SEPARATOR: &str = "__";
    pub const ENDPOINT_URL_ENV_VAR: &str = "GATEHOUSE__ENDPOINT__URL";
    pub const TIMEOUT_IN_MILLIS_ENV_VAR: &str = "GATEHOUSE__HTTP_CLIENT__TIMEOUT_IN_MILLIS";
    pub const EMAIL_ENV_VAR: &str = "GATEHOUSE_EMAIL";
    pub const PASSWORD_ENV_VAR: &str = "GATEHOUSE_PASSWORD";
}

/// Base name of the optional settings file, resolved as `gatehouse.json`.
pub const SETTINGS_FILE_NAME: &str = "gatehouse";

pub mod prod {
    pub mod http_client {
        pub const TIMEOUT_IN_MILLIS: u64 = 10_000;
    }
}

pub mod test {
    pub mod http_client {
        use std::time::Duration;

        pub const TIMEOUT: Duration = std::time::Duration::from_millis(200);
    }
}
