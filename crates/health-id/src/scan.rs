//! Recovery of a canonical health ID from free-form scanner input.
//!
//! QR payloads and pasted card text arrive in several shapes: a bare
//! 14-digit run, an already-grouped ID, or prose with an ID buried somewhere
//! inside ("Name: Arjun Kumar, Health ID: 1234-5678-9012-34"). Recovery
//! tries a fixed list of interpretations in priority order and returns the
//! first that yields an ID, so a grouped ID embedded late in the text still
//! beats a bare digit run found earlier.

use std::sync::LazyLock;

use regex::Regex;

use crate::HealthId;

/// One way of reading an ID out of scanner input.
struct Interpretation {
    /// Short name used in trace output.
    name: &'static str,
    attempt: fn(&str) -> Option<HealthId>,
}

/// Interpretations in strict priority order. The first success wins.
static INTERPRETATIONS: &[Interpretation] = &[
    Interpretation {
        name: "whole-digit-run",
        attempt: whole_digit_run,
    },
    Interpretation {
        name: "whole-canonical",
        attempt: whole_canonical,
    },
    Interpretation {
        name: "embedded-canonical",
        attempt: embedded_canonical,
    },
    Interpretation {
        name: "embedded-digit-run",
        attempt: embedded_digit_run,
    },
];

static EMBEDDED_CANONICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{4}-\d{4}-\d{4}-\d{2}\b").expect("valid regex"));

static EMBEDDED_DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{14}\b").expect("valid regex"));

/// Recovers a canonical health ID from raw scanner input, if one is present.
///
/// Surrounding whitespace is ignored. Returns `None` when no interpretation
/// finds an ID; no input causes an error.
pub fn recover_health_id(raw: &str) -> Option<HealthId> {
    let input = raw.trim();
    if input.is_empty() {
        return None;
    }
    for interpretation in INTERPRETATIONS {
        if let Some(id) = (interpretation.attempt)(input) {
            tracing::debug!(interpretation = interpretation.name, %id, "recovered health ID");
            return Some(id);
        }
    }
    None
}

/// The entire input is a bare 14-digit run.
fn whole_digit_run(input: &str) -> Option<HealthId> {
    HealthId::from_digits(input).ok()
}

/// The entire input is already in canonical grouped form.
fn whole_canonical(input: &str) -> Option<HealthId> {
    HealthId::parse(input).ok()
}

/// A grouped ID appears somewhere inside longer text.
fn embedded_canonical(input: &str) -> Option<HealthId> {
    let found = EMBEDDED_CANONICAL.find(input)?;
    HealthId::parse(found.as_str()).ok()
}

/// A bare 14-digit run appears somewhere inside longer text.
fn embedded_digit_run(input: &str) -> Option<HealthId> {
    let found = EMBEDDED_DIGIT_RUN.find(input)?;
    HealthId::from_digits(found.as_str()).ok()
}
