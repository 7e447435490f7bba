//! Open/closed state shared by the drawer and the popovers

/// Two-state toggle backing the drawer and popover surfaces.
///
/// Every surface starts [`Disclosure::Closed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Disclosure {
    #[default]
    Closed,
    Open,
}

impl Disclosure {
    pub fn is_open(self) -> bool {
        self == Disclosure::Open
    }

    /// The opposite state (one trigger click)
    pub fn toggled(self) -> Self {
        match self {
            Disclosure::Closed => Disclosure::Open,
            Disclosure::Open => Disclosure::Closed,
        }
    }

    /// Value for `aria-expanded`
    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() {
            "true"
        } else {
            "false"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert_eq!(Disclosure::default(), Disclosure::Closed);
        assert!(!Disclosure::default().is_open());
    }

    #[test]
    fn test_double_toggle_restores_state() {
        for state in [Disclosure::Closed, Disclosure::Open] {
            assert_ne!(state.toggled(), state);
            assert_eq!(state.toggled().toggled(), state);
        }
    }

    #[test]
    fn test_aria_expanded() {
        assert_eq!(Disclosure::Open.aria_expanded(), "true");
        assert_eq!(Disclosure::Closed.aria_expanded(), "false");
    }
}
