//! Minimal SPDX license-expression tokenizer, enough to sanity-check a
//! `project_license`/`metadata_license` value without vendoring the SPDX
//! license list (which is an external, frequently-updated dataset —
//! see [`crate::component::Component::categories`] for the analogous stance
//! on the category taxonomy).

fn is_balanced(expr: &str) -> bool {
    let mut depth = 0i32;
    for ch in expr.chars() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

fn looks_like_license_id(token: &str) -> bool {
    if token.is_empty() {
        return false;
    }
    if let Some(rest) = token.strip_prefix("LicenseRef-") {
        return !rest.is_empty();
    }
    token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '+'))
}

/// Whether `expr` parses as a syntactically well-formed SPDX license
/// expression: balanced parentheses and every non-operator token shaped
/// like a license id.
pub fn is_syntactically_valid(expr: &str) -> bool {
    let expr = expr.trim();
    if expr.is_empty() {
        return false;
    }
    if !is_balanced(expr) {
        return false;
    }
    let tokens: Vec<String> = expr
        .replace('(', " ")
        .replace(')', " ")
        .split_whitespace()
        .map(str::to_string)
        .collect();
    if tokens.is_empty() {
        return false;
    }
    tokens
        .iter()
        .filter(|tok| !matches!(tok.as_str(), "AND" | "OR" | "WITH"))
        .all(|tok| looks_like_license_id(tok))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_license_is_valid() {
        assert!(is_syntactically_valid("MIT"));
        assert!(is_syntactically_valid("GPL-3.0-or-later"));
    }

    #[test]
    fn compound_expression_is_valid() {
        assert!(is_syntactically_valid("(MIT OR Apache-2.0) AND CC0-1.0"));
    }

    #[test]
    fn license_ref_is_valid() {
        assert!(is_syntactically_valid("LicenseRef-proprietary"));
    }

    #[test]
    fn unbalanced_parens_are_rejected() {
        assert!(!is_syntactically_valid("(MIT AND CC0-1.0"));
    }

    #[test]
    fn empty_expression_is_rejected() {
        assert!(!is_syntactically_valid(""));
    }
}
