mod env;

pub use env::{resolve_provider_config, CREDENTIAL_ENV_VAR};
