//! User Endpoints

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

/// Avatar image for the author with `email`
pub fn user_avatar_url(api_base: &str, email: &str) -> String {
    let email = email.trim().to_lowercase();
    format!("{}/api/avatar/{}", api_base, utf8_percent_encode(&email, NON_ALPHANUMERIC))
}
