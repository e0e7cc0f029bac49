//! Admin profile returned by the admin API.

use serde::{Deserialize, Serialize};

pub const PLACEHOLDER_NAME: &str = "Jane Doe";
pub const PLACEHOLDER_EMAIL: &str = "jane.doe@eventsphere.com";
pub const PLACEHOLDER_PHONE: &str = "+1-555-123-667";
pub const PLACEHOLDER_USERNAME: &str = "janedoe_admin";

/// Every field is optional; the accessors fall back to placeholder values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl AdminProfile {
    pub fn name(&self) -> &str {
        or_placeholder(&self.name, PLACEHOLDER_NAME)
    }

    pub fn email(&self) -> &str {
        or_placeholder(&self.email, PLACEHOLDER_EMAIL)
    }

    pub fn phone(&self) -> &str {
        or_placeholder(&self.phone, PLACEHOLDER_PHONE)
    }

    pub fn username(&self) -> &str {
        or_placeholder(&self.username, PLACEHOLDER_USERNAME)
    }

    pub fn photo_url(&self) -> Option<&str> {
        self.photo_url.as_deref().filter(|url| !url.is_empty())
    }
}

// Empty strings count as absent.
fn or_placeholder<'a>(value: &'a Option<String>, placeholder: &'a str) -> &'a str {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v,
        _ => placeholder,
    }
}
