//! Domain types and models

pub mod auth;
pub mod profile;
pub mod resource;

pub use auth::AuthenticatedUser;
pub use profile::{NewProfile, Profile, ProfilePatch, ProfilePayload};
pub use resource::Resource;
