use thiserror::Error;

/// A write payload that breaks one of the API's field rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        ValidationError {
            field,
            reason: reason.into(),
        }
    }
}

/// Checked on every write payload before it leaves the client.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

pub(crate) fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "may not be blank"));
    }
    Ok(())
}

pub(crate) fn max_len(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len > max {
        return Err(ValidationError::new(
            field,
            format!("at most {} characters allowed, got {}", max, len),
        ));
    }
    Ok(())
}

/// One `@`, a non-empty local part, and a dotted domain with no empty labels.
pub(crate) fn email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && domain.split('.').all(|label| {
                    !label.is_empty()
                        && !label.starts_with('-')
                        && !label.ends_with('-')
                        && label.chars().all(|c| c.is_alphanumeric() || c == '-')
                })
                && !local.chars().any(|c| c.is_whitespace() || c.is_control())
        }
        None => false,
    };
    if !valid {
        return Err(ValidationError::new(field, "not a valid e-mail address"));
    }
    Ok(())
}

/// An absolute http(s) URL with a host.
pub(crate) fn url(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    let parsed = url::Url::parse(value)
        .map_err(|e| ValidationError::new(field, format!("not a valid URL: {}", e)))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ValidationError::new(field, "must be an http(s) URL"));
    }
    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(ValidationError::new(field, "URL has no host")),
    }
}

/// Money fields: at most 10 digits, 2 of them after the point.
pub(crate) fn decimal(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    const MAX_DIGITS: usize = 10;
    const DECIMAL_PLACES: usize = 2;

    let Some(value) = value else {
        return Ok(());
    };
    let unsigned = value.strip_prefix('-').unwrap_or(value);
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());

    if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) {
        return Err(ValidationError::new(field, format!("'{}' is not a decimal", value)));
    }
    if fraction.len() > DECIMAL_PLACES {
        return Err(ValidationError::new(
            field,
            format!("at most {} decimal places allowed", DECIMAL_PLACES),
        ));
    }
    if whole.len() + fraction.len() > MAX_DIGITS {
        return Err(ValidationError::new(
            field,
            format!("at most {} digits allowed", MAX_DIGITS),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_is_not_required_value() {
        assert!(required("name", "  ").is_err());
        assert!(required("name", "Laptop").is_ok());
    }

    #[test]
    fn length_counts_characters() {
        assert!(max_len("icon", "ü", 1).is_ok());
        assert_eq!(
            max_len("icon", "abc", 2).unwrap_err().field,
            "icon"
        );
    }

    #[test]
    fn email_shapes() {
        assert!(email("email", "").is_ok());
        assert!(email("email", "ops@example.org").is_ok());
        assert!(email("email", "ops.example.org").is_err());
        assert!(email("email", "ops@localhost").is_err());
        assert!(email("email", "o ps@example.org").is_err());
    }

    #[test]
    fn malformed_emails_are_rejected() {
        assert!(email("email", "a@b..c").is_err());
        assert!(email("email", "a@@x.y").is_err());
        assert!(email("email", "a@x@y.z").is_err());
        assert!(email("email", "@example.org").is_err());
        assert!(email("email", "ops@.example.org").is_err());
        assert!(email("email", "ops@-bad.example").is_err());
        assert!(email("email", "first.last+tag@mail.example.co.uk").is_ok());
    }

    #[test]
    fn url_needs_scheme_and_host() {
        assert!(url("website", "https://vendor.example").is_ok());
        assert!(url("website", "ftp://vendor.example").is_err());
        assert!(url("website", "http://").is_err());
    }

    #[test]
    fn malformed_urls_are_rejected() {
        assert!(url("website", "https://[oops").is_err());
        assert!(url("website", "http://??").is_err());
        assert!(url("website", "vendor.example").is_err());
        assert!(url("website", "https://vendor.example/contact?lang=en").is_ok());
        assert!(url("website", "http://localhost:8080").is_ok());
    }

    #[test]
    fn decimals() {
        assert!(decimal("cost", None).is_ok());
        assert!(decimal("cost", Some("1299.99")).is_ok());
        assert!(decimal("cost", Some("12345678.90")).is_ok());
        assert!(decimal("cost", Some("123456789.90")).is_err());
        assert!(decimal("cost", Some("1.999")).is_err());
        assert!(decimal("cost", Some("abc")).is_err());
        assert!(decimal("cost", Some(".5")).is_err());
    }
}
