use std::fmt;

/// Where the display cycle currently is. The cycle runs
/// `Calc -> FadeIn -> Normal -> FadeOut -> Calc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewState {
    /// Waiting for a new scene; nothing is shown.
    #[default]
    Calc,
    FadeIn,
    Normal,
    FadeOut,
}

impl ViewState {
    pub const ALL: [ViewState; 4] = [
        ViewState::Calc,
        ViewState::FadeIn,
        ViewState::Normal,
        ViewState::FadeOut,
    ];

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            ViewState::Calc => "Calculating",
            ViewState::FadeIn => "Fading in",
            ViewState::Normal => "Cycling",
            ViewState::FadeOut => "Fading out",
        }
    }

    /// The state that follows this one.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            ViewState::Calc => ViewState::FadeIn,
            ViewState::FadeIn => ViewState::Normal,
            ViewState::Normal => ViewState::FadeOut,
            ViewState::FadeOut => ViewState::Calc,
        }
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_returns_to_calc() {
        let mut state = ViewState::default();

        for expected in ViewState::ALL.iter().skip(1) {
            state = state.next();
            assert_eq!(state, *expected);
        }

        assert_eq!(state.next(), ViewState::Calc);
    }

    #[test]
    fn test_display_names_are_unique() {
        let mut names: Vec<&str> = ViewState::ALL.iter().map(ViewState::display_name).collect();
        names.sort_unstable();
        names.dedup();

        assert_eq!(names.len(), ViewState::ALL.len());
    }
}
