/// Limits applied when parsing call expressions from untrusted input
///
/// The arithmetic itself is constant-size; these bound only the text the
/// CLI and browser surfaces hand to the parser.
#[derive(Debug, Clone)]
pub struct ResourceLimits {
    /// Maximum size of a call expression batch in bytes
    /// Real usage: ~20 bytes, Limit: 64KB
    pub max_input_bytes: usize,

    /// Maximum number of calls in one batch
    /// Real usage: 1-2, Limit: 1024
    pub max_calls: usize,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_input_bytes: 64 * 1024, // 64 KB
            max_calls: 1024,
        }
    }
}

impl ResourceLimits {
    /// Create a new ResourceLimits with default values
    pub fn new() -> Self {
        Self::default()
    }
}
