//! Budget input state

/// A visitor's stated monthly budget.
///
/// Always holds a definite integer: raw input that fails to parse resolves to
/// zero, which the calculator reads as "no budget constraint". Negative parses
/// are stored as-is; range warnings are a display concern, not enforced here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BudgetInput {
    value: i64,
}

impl BudgetInput {
    /// Create a budget input of zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and store raw input, falling back to zero on anything unparsable.
    pub fn set(&mut self, raw: &str) {
        self.value = raw.trim().parse().unwrap_or(0);
    }

    /// The stored budget.
    pub fn current(&self) -> i64 {
        self.value
    }

    /// Whether the stored budget sits inside the advisory display range.
    pub fn is_within_bounds(&self, cap: i64) -> bool {
        (0..=cap).contains(&self.value)
    }
}
