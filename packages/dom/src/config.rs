//! Configuration constants and validation functions.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{DomError, Result};

/// Namespace URI of the localeSet packet root.
pub const LOCALE_SET_NAMESPACE: &str = "http://www.xfa.org/schema/xfa-locale-set/2.7/";

/// Default maximum element nesting depth accepted by the loader.
///
/// The deepest localeSet path (localeSet/locale/calendarSymbols/dayNames/day)
/// is five levels; the default leaves room for foreign wrappers.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Maximum size of a localeSet file read from disk (4 MB).
pub const MAX_DOCUMENT_SIZE: u64 = 4 * 1024 * 1024;

/// Locale name pattern: language, optional script, optional region.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LOCALE_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z]{2,3}(_[A-Z][a-z]{3})?(_([A-Z]{2}|\d{3}))?$").expect("valid regex")
});

/// Validate a locale name such as `en_US` or `zh_Hans_CN`.
///
/// # Examples
/// ```
/// use xfa_dom::config::validate_locale_name;
///
/// assert!(validate_locale_name("en_US").is_ok());
/// assert!(validate_locale_name("zh_Hans_CN").is_ok());
/// assert!(validate_locale_name("English").is_err());
/// ```
pub fn validate_locale_name(name: &str) -> Result<()> {
    if LOCALE_NAME_PATTERN.is_match(name) {
        Ok(())
    } else {
        Err(DomError::InvalidLocaleName(name.to_string()))
    }
}
