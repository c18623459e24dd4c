// Field Validators - Reusable validation components
use once_cell::sync::Lazy;

/// Trait for field validators
pub trait FieldValidator<T: ?Sized> {
    /// Validate a field value
    fn validate(&self, value: &T) -> Result<(), String>;
}

/// String validator; values are trimmed before checking
#[derive(Debug, Clone, Default)]
pub struct StringValidator {
    not_empty: bool,
}

impl StringValidator {
    /// Create a new string validator
    pub fn new() -> Self {
        Self { not_empty: false }
    }

    /// Require non-empty string
    pub fn not_empty(mut self) -> Self {
        self.not_empty = true;
        self
    }
}

impl FieldValidator<str> for StringValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if self.not_empty && value.trim().is_empty() {
            return Err("Value cannot be empty".to_string());
        }

        Ok(())
    }
}

static EMAIL_REGEX: Lazy<regex::Regex> = Lazy::new(|| {
    regex::Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("EMAIL_REGEX pattern is valid and well-formed")
});

// An explicit scheme only counts at the very start of the value
static SCHEME_PREFIX_REGEX: Lazy<regex::Regex> = Lazy::new(|| {
    regex::Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*://")
        .expect("SCHEME_PREFIX_REGEX pattern is valid and well-formed")
});

/// Email validator
#[derive(Debug, Clone, Default)]
pub struct EmailValidator;

impl EmailValidator {
    /// Create a new email validator
    pub fn new() -> Self {
        Self
    }
}

impl FieldValidator<str> for EmailValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if !EMAIL_REGEX.is_match(value) {
            return Err("Invalid email format".to_string());
        }

        Ok(())
    }
}

const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];
const DEFAULT_SCHEME: &str = "http";

/// URL validator
///
/// Accepts `http`/`https` URLs, and values without a scheme such as
/// `github.com/octocat`, which are parsed as `http`. The host must carry a
/// top-level domain.
#[derive(Debug, Clone, Default)]
pub struct UrlValidator;

impl UrlValidator {
    /// Create a new URL validator
    pub fn new() -> Self {
        Self
    }

    fn parse(value: &str) -> Option<url::Url> {
        if SCHEME_PREFIX_REGEX.is_match(value) {
            return url::Url::parse(value).ok();
        }
        url::Url::parse(&format!("{DEFAULT_SCHEME}://{value}")).ok()
    }
}

impl FieldValidator<str> for UrlValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        let value = value.trim();
        if value.is_empty() || value.chars().any(char::is_whitespace) {
            return Err("Invalid URL format".to_string());
        }

        let Some(parsed) = Self::parse(value) else {
            return Err("Invalid URL format".to_string());
        };
        let scheme = parsed.scheme();

        if !ALLOWED_SCHEMES.contains(&scheme) {
            return Err(format!("URL scheme '{}' is not allowed", scheme));
        }

        let host = parsed.host_str().unwrap_or_default();
        let tld = host.rsplit('.').next().unwrap_or_default();
        if !host.contains('.') || tld.len() < 2 || tld.chars().any(|c| c.is_ascii_digit()) {
            return Err("URL host must include a top-level domain".to_string());
        }

        Ok(())
    }
}
