use std::ops::RangeInclusive;

/// Digits accepted while typing, enough for any fee the form allows.
const MAX_DIGITS: usize = 9;

/// A bounded integer field that can be stepped with the arrows or typed in.
///
/// Typed digits live in a draft until the field is committed, so partial values below the
/// minimum (e.g. the `2` in `25`) are not clamped away while the user is typing.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberInput {
    value: u64,
    min: u64,
    max: u64,
    step: u64,
    draft: Option<String>,
}

impl NumberInput {
    /// Creates a new `NumberInput`.
    ///
    /// # Arguments
    /// * `value` - The starting value, clamped into `range`.
    /// * `range` - The allowed values.
    /// * `step` - How much one arrow press changes the value.
    ///
    /// # Returns
    /// A new `NumberInput` instance.
    pub fn new(value: u64, range: RangeInclusive<u64>, step: u64) -> Self {
        let (min, max) = range.into_inner();
        Self {
            value: value.clamp(min, max),
            min,
            max,
            step,
            draft: None,
        }
    }

    /// Returns the last committed value.
    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn range(&self) -> RangeInclusive<u64> {
        self.min..=self.max
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// The text to show: the draft while typing, the value otherwise.
    pub fn display(&self) -> String {
        match &self.draft {
            Some(draft) => draft.clone(),
            None => self.value.to_string(),
        }
    }

    /// Starts or extends the draft. The first digit replaces the shown value.
    pub fn push_digit(&mut self, c: char) {
        if !c.is_ascii_digit() {
            return;
        }

        let draft = self.draft.get_or_insert_with(String::new);
        if draft.len() < MAX_DIGITS {
            draft.push(c);
        }
    }

    pub fn backspace(&mut self) {
        let value = self.value;
        let draft = self.draft.get_or_insert_with(|| value.to_string());
        draft.pop();
    }

    /// Turns the draft into the value, clamped into range. An empty draft keeps the old value.
    pub fn commit(&mut self) {
        let Some(draft) = self.draft.take() else {
            return;
        };

        if let Ok(v) = draft.parse::<u64>() {
            self.value = v.clamp(self.min, self.max);
        }
    }

    pub fn increment(&mut self) {
        self.commit();
        self.value = self.value.saturating_add(self.step).min(self.max);
    }

    pub fn decrement(&mut self) {
        self.commit();
        self.value = self.value.saturating_sub(self.step).max(self.min);
    }
}
