// File: src/focus.rs
// Purpose: Keyboard focus chain across the fields, ending in submission

use crate::field::Field;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    #[default]
    Idle,
    Focused(Field),
}

/// What the host should do after a field's input is completed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusStep {
    /// Move keyboard focus to this field
    Focus(Field),
    /// The last field was completed: submit the form
    Submit,
}

/// Focus state machine over `name → email → password`
///
/// Starts `Idle`; nothing is focused when the form mounts.
#[derive(Debug, Clone, Default)]
pub struct FocusSequencer {
    state: FocusState,
}

impl FocusSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FocusState {
        self.state
    }

    /// Focus a field directly (tap on the input)
    pub fn focus(&mut self, field: Field) {
        self.state = FocusState::Focused(field);
    }

    /// Input on `field` was completed ("next" / "send" on the keyboard)
    ///
    /// Completing the last field leaves focus where it is and asks for
    /// submission.
    pub fn complete(&mut self, field: Field) -> FocusStep {
        match field.next() {
            Some(next) => {
                self.state = FocusState::Focused(next);
                FocusStep::Focus(next)
            }
            None => {
                self.state = FocusState::Focused(field);
                FocusStep::Submit
            }
        }
    }
}
