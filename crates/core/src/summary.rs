//! Rule-based clinical summary generation.
//!
//! Produces a terse pipe-delimited summary from semi-structured medical text:
//! labelled fields (`Blood Group: B+`) become headed segments, and lines that
//! pair a severity word with a known risk term contribute fixed advisory
//! notes. Both behaviours are table-driven so a new field or risk category is
//! one new row.
//!
//! The generator is pure and total: any input yields a summary string, and
//! the same input always yields the same one.

/// Returned for empty input, before any scanning happens.
pub const EMPTY_INPUT_SUMMARY: &str = "No medical data available for summary.";

/// Returned when the text yields neither field segments nor risk notes.
pub const NO_FINDINGS_SUMMARY: &str = "Standard health profile. No critical issues detected.";

/// Appended to every summary built from actual findings.
const CLOSING_ADVICE: &str = "Seek professional medical advice for emergency care.";

/// What to do with a field value that is empty or a "nothing to report"
/// phrase.
enum NonePolicy {
    /// Emit the headed segment regardless of the value.
    AlwaysEmit,
    /// Emit this fixed segment instead of the headed one.
    Replace(&'static str),
    /// Emit nothing.
    Skip,
}

/// One extractable field: where to find it and how to phrase it.
struct FieldRule {
    /// Label searched for in the source text, trailing colon included.
    /// Matching is case-sensitive.
    label: &'static str,
    /// Heading of the emitted segment.
    heading: &'static str,
    /// Values (compared lowercased) meaning "nothing to report".
    none_phrases: &'static [&'static str],
    policy: NonePolicy,
}

/// Field rules in the order their segments appear in the summary.
const FIELD_RULES: [FieldRule; 4] = [
    FieldRule {
        label: "Blood Group:",
        heading: "Blood type",
        none_phrases: &[],
        policy: NonePolicy::AlwaysEmit,
    },
    FieldRule {
        label: "Allergies:",
        heading: "Allergies",
        none_phrases: &["none", "none known", "no known allergies"],
        policy: NonePolicy::Replace("No known allergies"),
    },
    FieldRule {
        label: "Current Medications:",
        heading: "Current medications",
        none_phrases: &["none", "no current medications"],
        policy: NonePolicy::Skip,
    },
    FieldRule {
        label: "Conditions:",
        heading: "Medical conditions",
        none_phrases: &["none", "no conditions"],
        policy: NonePolicy::Skip,
    },
];

/// Words that make a line eligible for the risk scan at all.
const SEVERITY_KEYWORDS: [&str; 5] = ["high", "low", "elevated", "abnormal", "critical"];

/// One risk category: its trigger terms and the note it contributes.
struct RiskRule {
    triggers: &'static [&'static str],
    note: &'static str,
}

/// Risk categories in the order their notes are emitted. A category
/// contributes its note at most once per summary, however many lines
/// trigger it.
const RISK_RULES: [RiskRule; 3] = [
    RiskRule {
        triggers: &["blood glucose", "sugar"],
        note: "Note: Recent blood glucose levels may require attention",
    },
    RiskRule {
        triggers: &["cholesterol", "ldl"],
        note: "Note: Cholesterol levels elevated",
    },
    RiskRule {
        triggers: &["pressure"],
        note: "Note: Blood pressure reading noted",
    },
];

/// Generates the emergency summary for a block of medical text.
///
/// Field segments come first, in field-rule order, followed by risk notes in
/// risk-rule order, joined with `" | "` and closed with a fixed advice
/// sentence. Empty input and input with no findings each return their own
/// fixed sentence.
pub fn generate_summary(text: &str) -> String {
    if text.is_empty() {
        return EMPTY_INPUT_SUMMARY.to_string();
    }

    let mut parts: Vec<String> = FIELD_RULES
        .iter()
        .filter_map(|rule| field_segment(text, rule))
        .collect();
    parts.extend(risk_notes(text).into_iter().map(str::to_string));

    if parts.is_empty() {
        return NO_FINDINGS_SUMMARY.to_string();
    }

    format!("{} | {}", parts.join(" | "), CLOSING_ADVICE)
}

/// Extracts one field's segment, if its label is present and its policy
/// lets the value through.
///
/// The value is the text after the first occurrence of the label, up to the
/// next newline (or end of text), trimmed. Later occurrences of the label
/// are ignored.
fn field_segment(text: &str, rule: &FieldRule) -> Option<String> {
    let start = text.find(rule.label)? + rule.label.len();
    let value = text[start..].lines().next().unwrap_or("").trim();
    let is_none_phrase = rule.none_phrases.contains(&value.to_lowercase().as_str());

    match rule.policy {
        NonePolicy::AlwaysEmit => Some(format!("{}: {}", rule.heading, value)),
        NonePolicy::Replace(fixed) => {
            if is_none_phrase {
                Some(fixed.to_string())
            } else {
                Some(format!("{}: {}", rule.heading, value))
            }
        }
        NonePolicy::Skip => {
            if value.is_empty() || is_none_phrase {
                None
            } else {
                Some(format!("{}: {}", rule.heading, value))
            }
        }
    }
}

/// Scans the text line by line and returns the triggered risk notes in
/// rule-table order.
fn risk_notes(text: &str) -> Vec<&'static str> {
    let lowered = text.to_lowercase();
    let mut triggered = [false; RISK_RULES.len()];

    for line in lowered.split('\n') {
        if !SEVERITY_KEYWORDS.iter().any(|keyword| line.contains(keyword)) {
            continue;
        }
        // A line flags at most one category; the first matching rule claims it.
        if let Some(index) = RISK_RULES
            .iter()
            .position(|rule| rule.triggers.iter().any(|term| line.contains(term)))
        {
            triggered[index] = true;
        }
    }

    RISK_RULES
        .iter()
        .zip(triggered)
        .filter(|(_, hit)| *hit)
        .map(|(rule, _)| rule.note)
        .collect()
}
