/// Limits applied while decoding untrusted documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadConfig {
    /// Maximum number of nested List/Compound levels below the root.
    pub max_depth: usize,
}

impl ReadConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 512;

    pub const fn new() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ReadConfig {
    fn default() -> Self {
        Self::new()
    }
}
