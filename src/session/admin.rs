const MAX_BUFFER: usize = 20;
const KEEP_ON_TRIM: usize = 10;

/// Watches keystrokes for the admin unlock sequence.
///
/// Purely a convenience shortcut; it guards nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminGate {
    sequence: String,
    buffer: String,
}

impl AdminGate {
    pub fn new(sequence: impl Into<String>) -> Self {
        Self {
            sequence: sequence.into(),
            buffer: String::new(),
        }
    }

    /// Record one key press. Returns true when the sequence was just completed.
    pub fn push_key(&mut self, key: &str) -> bool {
        self.buffer.push_str(key);
        if !self.sequence.is_empty() && self.buffer.ends_with(&self.sequence) {
            self.buffer.clear();
            return true;
        }
        let len = self.buffer.chars().count();
        if len > MAX_BUFFER {
            self.buffer = self.buffer.chars().skip(len - KEEP_ON_TRIM).collect();
        }
        false
    }
}
