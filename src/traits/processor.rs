// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::document::Document;
use crate::errors::InjectResult;

/// Per-record outcome counts from one processor run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessSummary {
    /// Records that did not have the field yet
    pub inserted: usize,
    /// Records whose field held a different value and was replaced
    pub overwritten: usize,
    /// Records that already held exactly the target value
    pub unchanged: usize,
}

impl ProcessSummary {
    pub fn records(&self) -> usize {
        self.inserted + self.overwritten + self.unchanged
    }

    /// True when no record's field value changed.
    ///
    /// The file is still rewritten, so formatting can differ from the input.
    pub fn is_noop(&self) -> bool {
        self.inserted == 0 && self.overwritten == 0
    }
}

/// A mutation applied to a whole loaded document.
///
/// Implementations either succeed on every record or return an error without
/// touching the document.
pub trait DocumentProcessor {
    fn process(&self, document: &mut Document) -> InjectResult<ProcessSummary>;

    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_noop_only_when_nothing_changed() {
        let unchanged = ProcessSummary {
            unchanged: 3,
            ..ProcessSummary::default()
        };
        let overwritten = ProcessSummary {
            overwritten: 1,
            unchanged: 2,
            ..ProcessSummary::default()
        };

        assert!(unchanged.is_noop());
        assert!(ProcessSummary::default().is_noop());
        assert!(!overwritten.is_noop());
        assert_eq!(overwritten.records(), 3);
    }
}
