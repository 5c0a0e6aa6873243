//! DNS (RFC 1123) label rules for generated Kubernetes resource names.

use super::AppError;

/// Maximum length of a DNS-1123 label.
pub const DNS1123_LABEL_MAX: usize = 63;

/// Suffix appended to a completed prefix to form the longest derived
/// environment name checked during prefix validation.
pub const STAGE_SUFFIX: &str = "stage";

const CHARSET_MESSAGE: &str =
    "a lowercase RFC 1123 label must consist of lower case alphanumeric characters or '-'";
const EDGE_MESSAGE: &str = "must start and end with an alphanumeric character";

fn is_label_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'
}

fn is_alphanumeric(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

/// Collect every DNS-1123 label rule the candidate violates.
///
/// Empty result means the name is valid.
pub fn dns1123_label_violations(name: &str) -> Vec<String> {
    let mut violations = Vec::new();

    if name.len() > DNS1123_LABEL_MAX {
        violations.push(format!("must be no more than {} characters", DNS1123_LABEL_MAX));
    }
    if !name.chars().all(is_label_char) {
        violations.push(CHARSET_MESSAGE.to_string());
    }
    let edges_ok = name.chars().next().is_some_and(is_alphanumeric)
        && name.chars().next_back().is_some_and(is_alphanumeric);
    if !edges_ok {
        violations.push(EDGE_MESSAGE.to_string());
    }

    violations
}

/// Validate an application or component name against DNS-1123 label rules.
///
/// On violation the error enumerates every broken rule and quotes the
/// offending name verbatim.
pub fn validate_name(name: &str) -> Result<(), AppError> {
    let violations = dns1123_label_violations(name);
    if violations.is_empty() {
        return Ok(());
    }
    Err(AppError::InvalidName { name: name.to_string(), reasons: violations.join(", ") })
}

/// Append a trailing `-` to the prefix when one is not already present.
///
/// Generated resource names are formed as `<prefix><name>`, so the prefix
/// always carries its own separator.
pub fn complete_prefix(prefix: &str) -> String {
    if prefix.ends_with('-') { prefix.to_string() } else { format!("{prefix}-") }
}
