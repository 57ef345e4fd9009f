//! Frame bookkeeping for the reference scanner.

use super::{VARIABLE_ARG, VARIABLE_END, VARIABLE_START};

/// Accumulates the text belonging to one (possibly nested) variable
/// reference while a substitution pass scans the expression.
///
/// A frame is owned by the scan that created it: it is merged into its
/// parent frame, or into the final result buffer, when it is popped.
#[derive(Debug, Default)]
pub struct VariableReference {
    text: String,
}

impl VariableReference {
    pub fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    pub fn append(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Splits the accumulated text at the first separator into a name and an
    /// optional argument. An empty string after the separator is a present,
    /// empty argument, distinct from no argument at all.
    pub fn name_and_argument(&self) -> (&str, Option<&str>) {
        match self.text.split_once(VARIABLE_ARG) {
            Some((name, argument)) => (name, Some(argument)),
            None => (self.text.as_str(), None),
        }
    }

    /// The reference re-rendered in its original `${...}` form.
    pub fn original_text(&self) -> String {
        format!("{VARIABLE_START}{}{VARIABLE_END}", self.text)
    }
}

/// Stack of open reference frames maintained by a single scan.
#[derive(Debug, Default)]
pub struct VariableStack {
    frames: Vec<VariableReference>,
}

impl VariableStack {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn push(&mut self, frame: VariableReference) {
        self.frames.push(frame);
    }

    pub fn pop(&mut self) -> Option<VariableReference> {
        self.frames.pop()
    }

    /// The innermost open frame, if any.
    pub fn top_mut(&mut self) -> Option<&mut VariableReference> {
        self.frames.last_mut()
    }
}
