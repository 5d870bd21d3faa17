//! Email format checks and normalization
//!
//! Signup accepts only addresses that pass [`validate_email`]; the stored form
//! is produced by [`normalize_email`]. Withdrawal deliberately skips both.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Error, Result};

const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_LEN: usize = 64;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~.-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("email pattern is valid")
});

/// Check that `email` looks like a deliverable address.
///
/// Surrounding whitespace is ignored; everything else must match.
pub fn validate_email(email: &str) -> Result<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(Error::invalid_email("value is empty"));
    }
    if email.len() > MAX_EMAIL_LEN {
        return Err(Error::invalid_email(format!(
            "value is longer than {} characters",
            MAX_EMAIL_LEN
        )));
    }
    if !EMAIL_RE.is_match(email) {
        return Err(Error::invalid_email(format!(
            "'{}' is not a valid email address",
            email
        )));
    }

    // The regex guarantees exactly one '@'
    let (local, _domain) = email.split_once('@').unwrap_or((email, ""));
    if local.len() > MAX_LOCAL_LEN {
        return Err(Error::invalid_email(format!(
            "local part is longer than {} characters",
            MAX_LOCAL_LEN
        )));
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return Err(Error::invalid_email(format!(
            "'{}' has a misplaced dot in the local part",
            email
        )));
    }

    Ok(())
}

/// Canonical stored form: trimmed and lowercased
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Validate then normalize, the order signup uses.
pub fn parse_email(email: &str) -> Result<String> {
    validate_email(email)?;
    Ok(normalize_email(email))
}
