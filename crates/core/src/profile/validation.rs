//! Profile validation rules
//!
//! One rule table shared by create, update and delete. On create (and on a
//! delete that carries a body) every required field must be present; on update
//! only the submitted fields are checked, but a required field cannot be
//! blanked.

use sharehub_common::validation::{
    EmailValidator, FieldValidator, StringValidator, UrlValidator, ValidationError, Validator,
};
use sharehub_domain::constants::{
    FIELD_EMAIL, FIELD_FIRST_NAME, FIELD_GITHUB_URL, FIELD_LAST_NAME, FIELD_NAME,
    FIELD_TWITTER_URL, FIELD_YOUTUBE_URL, MSG_EMPTY_UPDATE, MSG_FIRST_NAME_REQUIRED,
    MSG_INVALID_EMAIL, MSG_INVALID_URL, MSG_LAST_NAME_REQUIRED, MSG_NAME_REQUIRED,
};
use sharehub_domain::{
    FieldViolation, NewProfile, ProfilePatch, ProfilePayload, Result, ShareHubError,
};

/// Whether required fields must be present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Every required field must be submitted
    Complete,
    /// Only submitted fields are checked
    Partial,
}

#[derive(Debug, Clone, Copy)]
enum Check {
    NotEmpty,
    Email,
    Url,
}

struct Rule {
    field: &'static str,
    required: bool,
    check: Check,
    message: &'static str,
    value: fn(&ProfilePayload) -> Option<&str>,
}

const RULES: [Rule; 7] = [
    Rule {
        field: FIELD_FIRST_NAME,
        required: true,
        check: Check::NotEmpty,
        message: MSG_FIRST_NAME_REQUIRED,
        value: first_name,
    },
    Rule {
        field: FIELD_LAST_NAME,
        required: true,
        check: Check::NotEmpty,
        message: MSG_LAST_NAME_REQUIRED,
        value: last_name,
    },
    Rule {
        field: FIELD_NAME,
        required: true,
        check: Check::NotEmpty,
        message: MSG_NAME_REQUIRED,
        value: display_name,
    },
    Rule {
        field: FIELD_GITHUB_URL,
        required: false,
        check: Check::Url,
        message: MSG_INVALID_URL,
        value: github_url,
    },
    Rule {
        field: FIELD_TWITTER_URL,
        required: false,
        check: Check::Url,
        message: MSG_INVALID_URL,
        value: twitter_url,
    },
    Rule {
        field: FIELD_YOUTUBE_URL,
        required: false,
        check: Check::Url,
        message: MSG_INVALID_URL,
        value: youtube_url,
    },
    Rule {
        field: FIELD_EMAIL,
        required: true,
        check: Check::Email,
        message: MSG_INVALID_EMAIL,
        value: email,
    },
];

fn first_name(p: &ProfilePayload) -> Option<&str> {
    p.first_name.as_deref()
}

fn last_name(p: &ProfilePayload) -> Option<&str> {
    p.last_name.as_deref()
}

fn display_name(p: &ProfilePayload) -> Option<&str> {
    p.name.as_deref()
}

fn email(p: &ProfilePayload) -> Option<&str> {
    p.email.as_deref()
}

fn github_url(p: &ProfilePayload) -> Option<&str> {
    p.github_url.as_deref()
}

fn twitter_url(p: &ProfilePayload) -> Option<&str> {
    p.twitter_url.as_deref()
}

fn youtube_url(p: &ProfilePayload) -> Option<&str> {
    p.youtube_url.as_deref()
}

/// Run the rule table against `payload`
pub fn check_payload(payload: &ProfilePayload, mode: Mode) -> Result<()> {
    let not_empty = StringValidator::new().not_empty();
    let email_format = EmailValidator::new();
    let url_format = UrlValidator::new();

    let mut validator = Validator::new();
    for rule in &RULES {
        let check: &dyn FieldValidator<str> = match rule.check {
            Check::NotEmpty => &not_empty,
            Check::Email => &email_format,
            Check::Url => &url_format,
        };
        let value = (rule.value)(payload);

        if rule.required && mode == Mode::Complete {
            validator.require(rule.field, value, check, rule.message);
        } else {
            validator.optional(rule.field, value, check, rule.message);
        }
    }

    validator.finalize().map_err(into_domain_error)
}

/// Validate a create payload and extract its fields
pub fn validate_new_profile(payload: ProfilePayload) -> Result<NewProfile> {
    check_payload(&payload, Mode::Complete)?;
    NewProfile::from_payload(payload)
        .ok_or_else(|| ShareHubError::Internal("validated payload lost a required field".into()))
}

/// Validate an update payload and turn it into a patch
pub fn validate_patch(payload: ProfilePayload) -> Result<ProfilePatch> {
    if payload.is_empty() {
        return Err(ShareHubError::InvalidInput(MSG_EMPTY_UPDATE.to_string()));
    }
    check_payload(&payload, Mode::Partial)?;
    Ok(ProfilePatch::from(payload))
}

/// Convert collected field errors into the domain error
pub fn into_domain_error(err: ValidationError) -> ShareHubError {
    ShareHubError::ValidationFailed(
        err.errors
            .into_iter()
            .map(|e| FieldViolation { field: e.field, message: e.message, value: e.value })
            .collect(),
    )
}
