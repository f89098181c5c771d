//! RPM-style version comparison (`rpmvercmp`), used to rank `Release`
//! entries and to pick a merge winner when two sources disagree.

use std::cmp::Ordering;

/// Splits a version string into alternating runs of digits and
/// non-digits, discarding any other characters (matching the upstream
/// `rpmvercmp` algorithm's tokenizer).
fn segments(v: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut current_is_digit: Option<bool> = None;

    for c in v.chars() {
        if !c.is_ascii_alphanumeric() {
            if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
                current_is_digit = None;
            }
            continue;
        }
        let is_digit = c.is_ascii_digit();
        match current_is_digit {
            Some(prev) if prev == is_digit => current.push(c),
            _ => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
                current.push(c);
                current_is_digit = Some(is_digit);
            }
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

fn is_numeric(segment: &str) -> bool {
    segment.chars().next().map(|c| c.is_ascii_digit()).unwrap_or(false)
}

fn compare_segment(a: &str, b: &str) -> Ordering {
    match (is_numeric(a), is_numeric(b)) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (true, true) => {
            let a_trimmed = a.trim_start_matches('0');
            let b_trimmed = b.trim_start_matches('0');
            match a_trimmed.len().cmp(&b_trimmed.len()) {
                Ordering::Equal => a_trimmed.cmp(b_trimmed),
                other => other,
            }
        }
        (false, false) => a.cmp(b),
    }
}

/// Compares two version strings the way `rpmvercmp` does: segment by
/// segment, numeric segments compared numerically, alphabetic segments
/// compared lexicographically, a missing trailing segment losing to any
/// present one.
pub fn compare(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    let a_segments = segments(a);
    let b_segments = segments(b);

    for (a_seg, b_seg) in a_segments.iter().zip(b_segments.iter()) {
        match compare_segment(a_seg, b_seg) {
            Ordering::Equal => continue,
            other => return other,
        }
    }

    // One ran out of segments first. A numeric trailing segment on the
    // longer string outranks the shorter one; an alphabetic trailing
    // segment (e.g. "1.0a" vs "1.0") loses to it, matching rpmvercmp.
    match a_segments.len().cmp(&b_segments.len()) {
        Ordering::Equal => Ordering::Equal,
        Ordering::Greater => {
            if is_numeric(&a_segments[b_segments.len()]) {
                Ordering::Greater
            } else {
                Ordering::Less
            }
        }
        Ordering::Less => {
            if is_numeric(&b_segments[a_segments.len()]) {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_strings_are_equal() {
        assert_eq!(compare("1.0", "1.0"), Ordering::Equal);
    }

    #[test]
    fn numeric_segments_compare_numerically_not_lexically() {
        assert_eq!(compare("1.2", "1.10"), Ordering::Less);
    }

    #[test]
    fn longer_version_wins_when_prefix_matches() {
        assert_eq!(compare("1.0", "1.0.1"), Ordering::Less);
    }

    #[test]
    fn alpha_segments_compare_lexicographically() {
        assert_eq!(compare("1.0a", "1.0b"), Ordering::Less);
    }

    #[test]
    fn numeric_segment_outranks_alpha_segment() {
        assert_eq!(compare("1.5", "1.5a"), Ordering::Greater);
    }
}
