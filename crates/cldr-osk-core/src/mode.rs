// cldr-osk Level Classifier
// Maps a CLDR keyMap modifier list onto an on-screen keyboard level mode

/// How the renderer presents a level
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display, strum_macros::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    /// Base level, shown when no modifier is active
    Default,
    /// Active for the next key press only
    Latched,
    /// Stays active until toggled off
    Locked,
}

impl Mode {
    /// Classify a level from its optional whitespace-separated modifier list.
    ///
    /// This is a coarse heuristic: CLDR modifier combinations are far richer
    /// than three modes. `shift` and `lock` latch, everything else locks.
    pub fn classify(modifiers: Option<&str>) -> Self {
        let Some(modifiers) = modifiers else {
            return Mode::Default;
        };

        let mut tokens = modifiers.split_whitespace().peekable();
        if tokens.peek().is_none() {
            return Mode::Default;
        }

        if tokens.any(|token| token == "shift" || token == "lock") {
            Mode::Latched
        } else {
            Mode::Locked
        }
    }
}
