//! 邮编格式校验

use std::sync::LazyLock;

use regex::Regex;

use cep_lookup_provider::Country;

use crate::error::{CoreError, CoreResult};
use crate::types::ValidationPolicy;

/// `NNNNN-NNN`, hyphen optional.
const CEP_PATTERN: &str = r"^[0-9]{5}-?[0-9]{3}$";
/// `NNNNN` or ZIP+4 `NNNNN-NNNN`.
const ZIP_PATTERN: &str = r"^[0-9]{5}(-[0-9]{4})?$";

static CEP_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(CEP_PATTERN).ok());
static ZIP_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(ZIP_PATTERN).ok());

fn pattern_for(country: Country, policy: ValidationPolicy) -> &'static LazyLock<Option<Regex>> {
    match (policy, country) {
        (ValidationPolicy::PerCountry, Country::Us) => &ZIP_RE,
        _ => &CEP_RE,
    }
}

/// Whether `input` has the accepted shape. Whitespace anywhere fails.
pub fn is_valid_postal_code(input: &str, country: Country, policy: ValidationPolicy) -> bool {
    pattern_for(country, policy)
        .as_ref()
        .is_some_and(|re| re.is_match(input))
}

/// Returns the postal code as typed, or [`CoreError::InvalidPostalCode`].
pub fn validate_postal_code(
    input: &str,
    country: Country,
    policy: ValidationPolicy,
) -> CoreResult<String> {
    if is_valid_postal_code(input, country, policy) {
        Ok(input.to_string())
    } else {
        Err(CoreError::InvalidPostalCode(input.to_string()))
    }
}
