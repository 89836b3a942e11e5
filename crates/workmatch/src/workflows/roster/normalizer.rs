use chrono::{DateTime, NaiveDate};

use super::mapping::canonical_skill;

/// Split a `;`- or `,`-separated skill cell into canonical labels, dropping
/// blanks and case-insensitive duplicates while keeping first-seen order.
pub(crate) fn split_skills(raw: &str) -> Vec<String> {
    let mut seen = Vec::new();
    let mut skills = Vec::new();

    for token in raw.split([';', ',']) {
        let label = canonical_skill(token.trim());
        if label.is_empty() {
            continue;
        }
        let folded = label.to_lowercase();
        if seen.contains(&folded) {
            continue;
        }
        seen.push(folded);
        skills.push(label);
    }

    skills
}

/// Derive a stable worker id from the email's local part when the export
/// carries no explicit id column.
pub(crate) fn id_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    local
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}

/// Accept RFC 3339 timestamps or bare `YYYY-MM-DD` dates.
pub(crate) fn parse_joined_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc().date());
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_skills_drops_blanks_and_duplicates() {
        let skills = split_skills("React; node.js;; REACT, TypeScript");
        assert_eq!(skills, vec!["React", "node.js", "TypeScript"]);
    }

    #[test]
    fn split_skills_applies_aliases() {
        let skills = split_skills("reactjs; nodejs");
        assert_eq!(skills, vec!["react", "node.js"]);
    }

    #[test]
    fn id_from_email_slugs_local_part() {
        assert_eq!(id_from_email("Jo.Smith+work@example.com"), "jo-smith-work");
    }

    #[test]
    fn parse_joined_date_accepts_both_formats() {
        let from_timestamp = parse_joined_date("2025-09-24T10:00:00Z").expect("timestamp parses");
        let from_date = parse_joined_date("2025-09-24").expect("date parses");
        assert_eq!(from_timestamp, from_date);
        assert!(parse_joined_date("not a date").is_none());
    }
}
