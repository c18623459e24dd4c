//! Domain constants
//!
//! User-facing messages shared by the service and HTTP layers.

// Profile field names as they appear on the wire
pub const FIELD_FIRST_NAME: &str = "fName";
pub const FIELD_LAST_NAME: &str = "lName";
pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_GITHUB_URL: &str = "githubUrl";
pub const FIELD_TWITTER_URL: &str = "twitterUrl";
pub const FIELD_YOUTUBE_URL: &str = "youtubeUrl";

// Validation messages
pub const MSG_FIRST_NAME_REQUIRED: &str = "First Name is required.";
pub const MSG_LAST_NAME_REQUIRED: &str = "Last Name is required.";
pub const MSG_NAME_REQUIRED: &str = "Name is required.";
pub const MSG_INVALID_URL: &str = "Invalid URL.";
pub const MSG_INVALID_EMAIL: &str = "Invalid Email";

// Outcome messages
pub const MSG_CREATE_EMPTY_RESULT: &str = "First & last name is required.";
pub const MSG_NO_PROFILE_FOUND: &str = "No Profile found";
pub const MSG_PROFILE_DELETED: &str = "Profile deleted";
pub const MSG_EMPTY_UPDATE: &str = "No profile fields submitted";
pub const MSG_PROFILE_EXISTS: &str = "Profile already exists for this user";

// Authentication messages
pub const MSG_NO_TOKEN: &str = "No token, authorization denied";
pub const MSG_INVALID_TOKEN: &str = "Token is not valid";
