/// Canonical account-status spelling for the legacy export's vocabulary.
/// Unknown values pass through untouched so intake can report them.
pub(crate) fn canonical_status(raw: &str) -> String {
    let folded = raw.trim().to_lowercase();
    match folded.as_str() {
        "enabled" => "active".to_string(),
        "disabled" | "on-hold" | "on hold" => "suspended".to_string(),
        "banned" | "deleted" => "terminated".to_string(),
        "new" | "invited" => "pending".to_string(),
        _ => folded,
    }
}

/// Collapse the common skill-label variants seen in legacy exports.
pub(crate) fn canonical_skill(label: &str) -> String {
    match label.to_lowercase().as_str() {
        "reactjs" | "react.js" => "react".to_string(),
        "nodejs" | "node" => "node.js".to_string(),
        "ts" => "typescript".to_string(),
        "js" => "javascript".to_string(),
        "postgres" => "postgresql".to_string(),
        _ => label.to_string(),
    }
}
