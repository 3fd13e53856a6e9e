//! Size limits shared by the source buffer, tokenizer and parser.

/// Hard limits applied while loading, tokenizing and parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum length of the prepared source buffer in characters, sentinels included.
    pub max_source_len: usize,
    /// Maximum length of an identifier or numeric literal in characters.
    pub max_token_len: usize,
    /// Maximum depth of nested blocks, class bodies, loop bodies and bracketed expressions.
    pub max_nesting: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_source_len: 10_000,
            max_token_len: 20,
            max_nesting: 256,
        }
    }
}

impl Limits {
    /// Create limits with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum prepared source length
    pub fn with_max_source_len(mut self, len: usize) -> Self {
        self.max_source_len = len;
        self
    }

    /// Set the maximum identifier/literal length
    pub fn with_max_token_len(mut self, len: usize) -> Self {
        self.max_token_len = len;
        self
    }

    /// Set the maximum nesting depth
    pub fn with_max_nesting(mut self, depth: usize) -> Self {
        self.max_nesting = depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let limits = Limits::default();
        assert_eq!(limits.max_source_len, 10_000);
        assert_eq!(limits.max_token_len, 20);
        assert_eq!(limits.max_nesting, 256);
    }

    #[test]
    fn test_builder_chain() {
        let limits = Limits::new().with_max_token_len(8).with_max_nesting(4).with_max_source_len(64);
        assert_eq!(limits, Limits { max_source_len: 64, max_token_len: 8, max_nesting: 4 });
    }
}
