// Source range bookkeeping paired with a resolved input.

use serde::{Deserialize, Serialize};

use crate::location::input::TestableInput;

/// Line/column span of a finding inside its source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRange {
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

impl SourceRange {
    pub fn new(start_line: usize, start_column: usize, end_line: usize, end_column: usize) -> Self {
        Self {
            start_line,
            start_column,
            end_line,
            end_column,
        }
    }
}

/// A classified input together with the range the finding points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub input: TestableInput,
    pub range: SourceRange,
}

impl ResolvedLocation {
    pub fn new(input: TestableInput, range: SourceRange) -> Self {
        Self { input, range }
    }
}
