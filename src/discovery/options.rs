//! Discovery traversal policy
//!
//! The depth bound and directory-skip rules are conventions of the build
//! tool's layout, not invariants of the algorithm, so they live in a
//! policy struct that tests can tighten or loosen against synthetic trees.

/// Policy knobs for one discovery run
#[derive(Debug, Clone)]
pub struct DiscoverOptions {
    /// Also scan the `examples` directory
    pub include_examples: bool,

    /// How many levels below each conventional subdirectory to visit
    pub max_depth: usize,

    /// Directory names never descended into (version-control metadata)
    pub skip_dirs: Vec<String>,
}

impl Default for DiscoverOptions {
    fn default() -> Self {
        Self {
            include_examples: false,
            max_depth: 2,
            skip_dirs: vec![".git".to_string()],
        }
    }
}

impl DiscoverOptions {
    /// Default policy with the examples directory toggled
    pub fn with_examples(include_examples: bool) -> Self {
        Self {
            include_examples,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let options = DiscoverOptions::default();
        assert!(!options.include_examples);
        assert_eq!(options.max_depth, 2);
        assert_eq!(options.skip_dirs, vec![".git".to_string()]);
    }

    #[test]
    fn test_with_examples() {
        assert!(DiscoverOptions::with_examples(true).include_examples);
        assert!(!DiscoverOptions::with_examples(false).include_examples);
    }
}
