/// How the builder buffer grows when an append does not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Growth {
    /// Reallocate to exactly `len + addition` bytes on every append. A run of
    /// n single-byte appends costs O(n^2) copied bytes.
    #[default]
    Exact,
    /// Let the buffer over-allocate geometrically, amortizing a run of
    /// appends to O(n). Output bytes are identical to [`Growth::Exact`].
    Amortized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuilderOptions {
    pub growth: Growth,
}

impl BuilderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_growth(mut self, growth: Growth) -> Self {
        self.growth = growth;
        self
    }
}
