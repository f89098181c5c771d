//! Architecture-name handling used by the pool's arch-preference tiebreak.

/// The sentinel meaning "no specific architecture" / "all architectures".
pub const ANY: &str = "all";

/// Whether `candidate` is usable on `host`: an exact match, or either side
/// being the `"all"` wildcard.
pub fn is_compatible_with_host(candidate: &str, host: &str) -> bool {
    candidate == host || candidate == ANY || host == ANY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_is_compatible() {
        assert!(is_compatible_with_host("x86_64", "x86_64"));
    }

    #[test]
    fn wildcard_is_always_compatible() {
        assert!(is_compatible_with_host("all", "armhf"));
        assert!(is_compatible_with_host("x86_64", "all"));
    }

    #[test]
    fn mismatched_arch_is_incompatible() {
        assert!(!is_compatible_with_host("armhf", "x86_64"));
    }
}
