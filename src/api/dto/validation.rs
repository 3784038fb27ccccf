use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+$").unwrap());

// Hostnames, IPv4/IPv6 addresses and the MySQL % wildcard.
static HOST_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.%:-]+$").unwrap());

pub fn is_username(user: &str) -> Result<(), ValidationError> {
    if user.is_empty() || user.len() > 32 {
        return Err(ValidationError::new("0")
            .with_message(Cow::from("User must contain between 1 and 32 characters")));
    }

    if !USERNAME_REGEX.is_match(user) {
        return Err(ValidationError::new("0").with_message(Cow::from(
            "User may only contain letters, digits and underscores",
        )));
    }

    Ok(())
}

pub fn is_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() || password.len() > 128 {
        return Err(ValidationError::new("0").with_message(Cow::from(
            "Password must contain between 1 and 128 characters",
        )));
    }

    Ok(())
}

pub fn is_host(host: &str) -> Result<(), ValidationError> {
    if host.is_empty() || host.len() > 255 {
        return Err(ValidationError::new("0")
            .with_message(Cow::from("Host must contain between 1 and 255 characters")));
    }

    if !HOST_REGEX.is_match(host) {
        return Err(ValidationError::new("0").with_message(Cow::from("Invalid host format")));
    }

    Ok(())
}
