use super::state::RowMode;

/// Something that can take or give up input focus
pub trait FocusTarget {
    fn focus(&mut self);
    fn blur(&mut self);
}

/// What `FocusSync::after_render` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusChange {
    Focused,
    Blurred,
}

/// Moves focus in reaction to a mode change, once the new mode has been drawn.
///
/// Run after every render. Focus is only touched when the observed mode
/// differs from the previous observation (or on the first one), so a field
/// is never focused while it is still drawn read-only.
#[derive(Debug, Clone, Default)]
pub struct FocusSync {
    observed: Option<RowMode>,
}

impl FocusSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn after_render<T: FocusTarget + ?Sized>(
        &mut self,
        mode: RowMode,
        target: &mut T,
    ) -> Option<FocusChange> {
        if self.observed == Some(mode) {
            return None;
        }
        self.observed = Some(mode);
        match mode {
            RowMode::Editing => {
                target.focus();
                Some(FocusChange::Focused)
            }
            RowMode::Viewing => {
                target.blur();
                Some(FocusChange::Blurred)
            }
        }
    }
}

/// Focus flag of a row's title field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TitleFocus {
    focused: bool,
}

impl TitleFocus {
    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

impl FocusTarget for TitleFocus {
    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }
}
