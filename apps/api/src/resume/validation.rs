//! Advisory field rules the résumé form applies before saving.
//!
//! The store never runs these; `POST /api/curriculo/validate` exposes them so
//! the client can show errors next to each field.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::models::resume::ResumeRecord;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Brazilian-style phone: optional parenthesised area code, 4-5 digit prefix.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(?[0-9]{2}\)?[\s-]?[0-9]{4,5}-?[0-9]{4}$").expect("valid phone pattern")
});

pub const NAME_REQUIRED: &str = "Name is required";
pub const INVALID_EMAIL: &str = "Invalid email";
pub const INVALID_PHONE: &str = "Invalid phone (e.g. (11) 99999-9999)";
pub const INVALID_URL: &str = "URL must start with http:// or https://";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    /// Field wire name -> message. Only failing fields appear.
    pub errors: BTreeMap<String, String>,
}

/// Checks one field by its wire name. Fields without a rule always pass.
pub fn validate_field(name: &str, value: &str) -> Option<&'static str> {
    match name {
        "nome" if value.trim().is_empty() => Some(NAME_REQUIRED),
        "email" if !EMAIL_RE.is_match(value) => Some(INVALID_EMAIL),
        "telefone" if !PHONE_RE.is_match(value) => Some(INVALID_PHONE),
        "github" | "linkedin" if !value.is_empty() && !has_http_scheme(value) => {
            Some(INVALID_URL)
        }
        _ => None,
    }
}

fn has_http_scheme(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Runs every rule over the record.
pub fn validate_record(record: &ResumeRecord) -> ValidationReport {
    let fields = [
        ("nome", &record.nome),
        ("email", &record.email),
        ("telefone", &record.telefone),
        ("github", &record.github),
        ("linkedin", &record.linkedin),
    ];

    let errors: BTreeMap<String, String> = fields
        .into_iter()
        .filter_map(|(name, value)| {
            validate_field(name, value).map(|msg| (name.to_string(), msg.to_string()))
        })
        .collect();

    ValidationReport {
        valid: errors.is_empty(),
        errors,
    }
}
