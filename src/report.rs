//! Conversion gap reporting.
//!
//! The conversion is fail-soft: malformed or unrecognized input degrades
//! gracefully instead of aborting the document. Everything that degraded is
//! recorded here so callers can inspect what the output silently lost.

use itertools::Itertools;
use std::fmt;

/// The category of a single conversion gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapKind {
    /// A field type with no entry in the type map; the element was emitted
    /// with an empty target type.
    UnknownFieldType,
    /// A conditional rule referencing a field id that does not exist; the
    /// rule carries the sentinel selector verbatim.
    UnresolvedReference,
    /// A conditional rule with an operator outside the translated set; the
    /// rule was omitted from the emitted rule set.
    UnsupportedOperator,
    /// A conditional-logic block with a non-`show` action; no visibility
    /// states were emitted for it.
    DroppedHideAction,
}

impl fmt::Display for GapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GapKind::UnknownFieldType => "unknown field type",
            GapKind::UnresolvedReference => "unresolved rule reference",
            GapKind::UnsupportedOperator => "unsupported rule operator",
            GapKind::DroppedHideAction => "dropped non-show action",
        };
        write!(f, "{}", label)
    }
}

/// One recorded degradation, in encounter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gap {
    pub kind: GapKind,
    pub detail: String,
}

impl fmt::Display for Gap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.kind, self.detail)
    }
}

/// Everything one conversion run silently degraded.
#[derive(Debug, Clone, Default)]
pub struct ConversionReport {
    gaps: Vec<Gap>,
}

impl ConversionReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, kind: GapKind, detail: impl Into<String>) {
        self.gaps.push(Gap {
            kind,
            detail: detail.into(),
        });
    }

    /// `true` when the conversion lost nothing.
    pub fn is_clean(&self) -> bool {
        self.gaps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.gaps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gaps.is_empty()
    }

    pub fn gaps(&self) -> &[Gap] {
        &self.gaps
    }
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            write!(f, "no conversion gaps")
        } else {
            write!(
                f,
                "{} conversion gap(s): {}",
                self.gaps.len(),
                self.gaps.iter().map(Gap::to_string).join("; ")
            )
        }
    }
}
