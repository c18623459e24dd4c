//! Profile types
//!
//! A profile is the user-owned record of personal and display information.
//! Field names on the wire follow the frontend's camelCase convention
//! (`fName`, `lName`, `githubUrl`, ...).

use serde::{Deserialize, Serialize};

/// Stored profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Generated record id
    pub id: String,
    /// Id of the owning user
    pub user: String,
    /// First name
    #[serde(rename = "fName")]
    pub first_name: String,
    /// Last name
    #[serde(rename = "lName")]
    pub last_name: String,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// GitHub profile link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    /// Twitter profile link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_url: Option<String>,
    /// YouTube channel link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_url: Option<String>,
    /// Unix seconds at creation
    pub created_at: i64,
    /// Unix seconds of the last change
    pub updated_at: i64,
}

impl Profile {
    /// Build a profile for `user` from validated fields
    pub fn new(id: impl Into<String>, user: impl Into<String>, fields: NewProfile, now: i64) -> Self {
        Self {
            id: id.into(),
            user: user.into(),
            first_name: fields.first_name,
            last_name: fields.last_name,
            name: fields.name,
            email: fields.email,
            github_url: fields.github_url,
            twitter_url: fields.twitter_url,
            youtube_url: fields.youtube_url,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge the submitted fields of `patch`, leaving the others untouched.
    ///
    /// `updated_at` is bumped only when a field actually changed, so
    /// re-applying the same patch leaves the record identical.
    pub fn apply_patch(&mut self, patch: &ProfilePatch, now: i64) -> bool {
        let mut changed = false;
        changed |= merge(&mut self.first_name, &patch.first_name);
        changed |= merge(&mut self.last_name, &patch.last_name);
        changed |= merge(&mut self.name, &patch.name);
        changed |= merge(&mut self.email, &patch.email);
        changed |= merge_optional(&mut self.github_url, &patch.github_url);
        changed |= merge_optional(&mut self.twitter_url, &patch.twitter_url);
        changed |= merge_optional(&mut self.youtube_url, &patch.youtube_url);

        if changed {
            self.updated_at = now;
        }
        changed
    }
}

fn merge(target: &mut String, value: &Option<String>) -> bool {
    match value {
        Some(value) if value != target => {
            target.clone_from(value);
            true
        }
        _ => false,
    }
}

fn merge_optional(target: &mut Option<String>, value: &Option<String>) -> bool {
    match value {
        Some(value) if target.as_ref() != Some(value) => {
            *target = Some(value.clone());
            true
        }
        _ => false,
    }
}

/// Raw profile fields as submitted in a request body
///
/// Every field is optional so that missing values surface as validation
/// errors instead of deserialization failures. Unknown keys (including any
/// client-supplied `user` or `id`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePayload {
    /// First name
    #[serde(rename = "fName", default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name
    #[serde(rename = "lName", default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contact email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// GitHub profile link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    /// Twitter profile link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_url: Option<String>,
    /// YouTube channel link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_url: Option<String>,
}

impl ProfilePayload {
    /// True when no profile field was submitted
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.name.is_none()
            && self.email.is_none()
            && self.github_url.is_none()
            && self.twitter_url.is_none()
            && self.youtube_url.is_none()
    }
}

/// Fields of a profile about to be created, after validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProfile {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// GitHub profile link
    pub github_url: Option<String>,
    /// Twitter profile link
    pub twitter_url: Option<String>,
    /// YouTube channel link
    pub youtube_url: Option<String>,
}

impl NewProfile {
    /// Take the fields out of a payload; `None` if a required one is absent
    pub fn from_payload(payload: ProfilePayload) -> Option<Self> {
        Some(Self {
            first_name: payload.first_name?,
            last_name: payload.last_name?,
            name: payload.name?,
            email: payload.email?,
            github_url: payload.github_url,
            twitter_url: payload.twitter_url,
            youtube_url: payload.youtube_url,
        })
    }
}

/// Validated partial update; `None` fields are left as stored
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePatch {
    /// First name
    pub first_name: Option<String>,
    /// Last name
    pub last_name: Option<String>,
    /// Display name
    pub name: Option<String>,
    /// Contact email
    pub email: Option<String>,
    /// GitHub profile link
    pub github_url: Option<String>,
    /// Twitter profile link
    pub twitter_url: Option<String>,
    /// YouTube channel link
    pub youtube_url: Option<String>,
}

impl From<ProfilePayload> for ProfilePatch {
    fn from(payload: ProfilePayload) -> Self {
        Self {
            first_name: payload.first_name,
            last_name: payload.last_name,
            name: payload.name,
            email: payload.email,
            github_url: payload.github_url,
            twitter_url: payload.twitter_url,
            youtube_url: payload.youtube_url,
        }
    }
}
