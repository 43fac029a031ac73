use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Identity record held by the session while the user is logged in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub username: String,
    pub fullname: String,
}

/// Body of a successful `auth/check` or `auth/login` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthPayload {
    pub user: AuthUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// List envelope returned by every collection endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemsResponse<T> {
    pub items: Vec<T>,
}

/// Update verb used by a resource endpoint. The backend is PATCH-based
/// except for technologies, which only accepts PUT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMethod {
    Patch,
    Put,
}

/// Descriptor every CRUD screen is parameterized by: one endpoint, one
/// record shape, one update verb. The screens themselves only differ in
/// their form fields.
pub trait Resource:
    Clone + PartialEq + Default + Serialize + DeserializeOwned + 'static
{
    /// Path segment under `/api/v1/`, e.g. `"projects"`.
    const ENDPOINT: &'static str;
    /// Labels used in user-facing error messages.
    const LABEL: &'static str;
    const LABEL_PLURAL: &'static str;
    const UPDATE_METHOD: UpdateMethod = UpdateMethod::Patch;

    /// Backend id of the record; `None` for a record not yet created.
    fn id(&self) -> Option<&str>;

    /// Resource-specific translation of a rejected delete. Returning
    /// `None` falls back to the generic failure message.
    fn delete_rejection(_status: u16) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl Resource for Project {
    const ENDPOINT: &'static str = "projects";
    const LABEL: &'static str = "project";
    const LABEL_PLURAL: &'static str = "projects";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub company: String,
    pub role: String,
    pub description: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
}

impl Resource for Experience {
    const ENDPOINT: &'static str = "experiences";
    const LABEL: &'static str = "experience";
    const LABEL_PLURAL: &'static str = "experiences";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technology {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub icon_url: String,
}

impl Resource for Technology {
    const ENDPOINT: &'static str = "technologies";
    const LABEL: &'static str = "technology";
    const LABEL_PLURAL: &'static str = "technologies";
    const UPDATE_METHOD: UpdateMethod = UpdateMethod::Put;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialNetwork {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub icon_url: String,
    pub status: bool,
}

impl Default for SocialNetwork {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            url: String::new(),
            icon_url: String::new(),
            status: true,
        }
    }
}

impl Resource for SocialNetwork {
    const ENDPOINT: &'static str = "social-networks";
    const LABEL: &'static str = "social network";
    const LABEL_PLURAL: &'static str = "social networks";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub username: String,
    // Never returned by the backend; only sent on create/update.
    #[serde(default)]
    pub password: String,
    pub fullname: String,
    pub status: bool,
}

impl Default for User {
    fn default() -> Self {
        Self {
            id: None,
            username: String::new(),
            password: String::new(),
            fullname: String::new(),
            status: true,
        }
    }
}

impl Resource for User {
    const ENDPOINT: &'static str = "users";
    const LABEL: &'static str = "user";
    const LABEL_PLURAL: &'static str = "users";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn delete_rejection(status: u16) -> Option<String> {
        // The backend refuses to delete the last active account.
        if status == 400 {
            Some("Cannot delete the last active user in the system.".to_string())
        } else {
            None
        }
    }
}

/// Singleton profile record behind `/api/v1/about-me`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutMe {
    pub about_me: String,
    #[serde(default)]
    pub profile_photo_url: String,
}

/// `PATCH /about-me` wraps the updated record in a `data` field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AboutMeUpdateResponse {
    pub data: AboutMe,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_envelope_deserializes() {
        let json = r#"{"items":[{"_id":"t1","name":"Rust","iconUrl":"/icons/rust.png"}]}"#;
        let parsed: ItemsResponse<Technology> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.items.len(), 1);
        assert_eq!(parsed.items[0].id.as_deref(), Some("t1"));
        assert_eq!(parsed.items[0].icon_url, "/icons/rust.png");
    }

    #[test]
    fn auth_payload_deserializes() {
        let json = r#"{"user":{"id":"u1","username":"admin","fullname":"Admin User"}}"#;
        let parsed: AuthPayload = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.user.username, "admin");
        assert_eq!(parsed.user.fullname, "Admin User");
    }

    #[test]
    fn new_record_omits_id_on_serialization() {
        let tech = Technology {
            name: "Yew".to_string(),
            ..Technology::default()
        };
        let json = serde_json::to_string(&tech).unwrap();
        assert!(!json.contains("_id"));
    }

    #[test]
    fn user_without_password_field_still_parses() {
        let json = r#"{"_id":"u1","username":"admin","fullname":"Admin","status":true}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.password.is_empty());
        assert!(user.status);
    }

    #[test]
    fn last_active_user_rejection_is_translated() {
        assert_eq!(
            User::delete_rejection(400).as_deref(),
            Some("Cannot delete the last active user in the system.")
        );
        assert_eq!(User::delete_rejection(500), None);
        assert_eq!(Technology::delete_rejection(400), None);
    }
}
