//! Secret handling for the database password
//!
//! The password is wrapped in a `secrecy::Secret` so it is zeroed on drop and
//! never shows up in `Debug` output or log fields. Call `expose_secret()` only
//! at the point the driver needs the plain value.
//!
//! ```rust
//! use table_export::config::secret_string;
//! use secrecy::ExposeSecret;
//!
//! let password = secret_string("hunter2".to_string());
//! assert_eq!(password.expose_secret().as_ref(), "hunter2");
//! assert!(!format!("{password:?}").contains("hunter2"));
//! ```

use secrecy::{CloneableSecret, DebugSecret, Secret};
use zeroize::Zeroize;

/// String newtype that satisfies the `Secret` bounds
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue(s)
    }
}

impl AsRef<str> for SecretValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Zeroizing, redacted string
pub type SecretString = Secret<SecretValue>;

/// Wrap a plain string as a [`SecretString`]
#[inline]
pub fn secret_string(value: String) -> SecretString {
    Secret::new(SecretValue::from(value))
}
