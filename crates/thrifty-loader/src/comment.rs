//! Leading documentation comments.
//!
//! Only multi-line comments document anything. The most recent one is held
//! until the next declaration, field or function takes it.

/// Strip comment delimiters and the `*` gutter from a raw multi-line
/// comment token.
///
/// ```text
/// /**
///  * Adds two numbers.
///  */            ->  "Adds two numbers."
/// ```
#[must_use]
pub fn normalize_comment(raw: &str) -> String {
    let body = raw.trim();
    let body = body.strip_suffix("*/").unwrap_or(body);
    let body = body
        .strip_prefix("/**")
        .or_else(|| body.strip_prefix("/*"))
        .unwrap_or(body);

    let lines: Vec<&str> = body
        .lines()
        .map(|line| {
            let line = line.trim();
            line.strip_prefix('*').map_or(line, str::trim_start)
        })
        .collect();

    let Some(start) = lines.iter().position(|l| !l.is_empty()) else {
        return String::new();
    };
    let end = lines.iter().rposition(|l| !l.is_empty()).unwrap_or(start);
    lines[start..=end].join("\n")
}

/// Holds at most one pending, already-normalized comment.
pub struct CommentCarrier<F> {
    pending: Option<String>,
    normalize: F,
}

impl<F> CommentCarrier<F>
where
    F: Fn(&str) -> String,
{
    pub const fn new(normalize: F) -> Self {
        Self {
            pending: None,
            normalize,
        }
    }

    /// Normalize `raw` and make it the pending comment, replacing any
    /// comment nothing has taken yet.
    pub fn set(&mut self, raw: &str) {
        if let Some(dropped) = self.pending.replace((self.normalize)(raw)) {
            tracing::trace!(comment = %dropped, "discarding unattached comment");
        }
    }

    /// Take the pending comment, leaving none behind.
    pub fn take(&mut self) -> Option<String> {
        self.pending.take()
    }

    /// Drop the pending comment once its scope has closed.
    pub fn clear(&mut self) {
        if let Some(dropped) = self.pending.take() {
            tracing::trace!(comment = %dropped, "discarding unattached comment");
        }
    }

    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<F> std::fmt::Debug for CommentCarrier<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommentCarrier")
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("/** a point */", "a point")]
    #[case("/* plain */", "plain")]
    #[case("/**/", "")]
    #[case("/** */", "")]
    #[case("/**\n * Adds two numbers.\n */", "Adds two numbers.")]
    #[case(
        "/**\n * First line.\n *\n * Second paragraph.\n */",
        "First line.\n\nSecond paragraph."
    )]
    #[case("/*\n   no gutter\n   here\n*/", "no gutter\nhere")]
    fn normalizes_raw_comment_tokens(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_comment(raw), expected);
    }

    #[test]
    fn take_clears_the_pending_comment() {
        let mut carrier = CommentCarrier::new(normalize_comment);
        carrier.set("/** doc */");
        assert!(carrier.is_pending());
        assert_eq!(carrier.take().as_deref(), Some("doc"));
        assert_eq!(carrier.take(), None);
    }

    #[test]
    fn later_comment_overwrites_earlier_one() {
        let mut carrier = CommentCarrier::new(normalize_comment);
        carrier.set("/** first */");
        carrier.set("/** second */");
        assert_eq!(carrier.take().as_deref(), Some("second"));
    }

    #[test]
    fn clear_drops_the_pending_comment() {
        let mut carrier = CommentCarrier::new(normalize_comment);
        carrier.set("/** doc */");
        carrier.clear();
        assert!(!carrier.is_pending());
        carrier.clear();
        assert_eq!(carrier.take(), None);
    }

    #[test]
    fn custom_normalizer_is_used() {
        let mut carrier = CommentCarrier::new(|raw: &str| raw.to_uppercase());
        carrier.set("/** x */");
        assert_eq!(carrier.take().as_deref(), Some("/** X */"));
    }
}
