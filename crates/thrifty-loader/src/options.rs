/// Knobs for a single load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Fail on a `field` node that has no struct, exception or function to
    /// receive it. When unset such fields are skipped and logged at debug
    /// level without their type being checked. Strict mode still requires
    /// the identifier, which the error reports.
    pub strict_fields: bool,
}

impl LoadOptions {
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            strict_fields: true,
        }
    }
}
