//! Page-lifetime record of the last highlighted heading.

/// Identifier of the heading whose navigation link was last marked active.
///
/// Starts out unset; only the tracker mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentHeading {
    id: Option<String>,
}

impl CurrentHeading {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// True until the first successful highlight.
    pub fn is_unset(&self) -> bool {
        self.id.is_none()
    }

    pub fn matches(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }

    /// Record `id` as current, returning the previous identifier.
    pub fn set(&mut self, id: impl Into<String>) -> Option<String> {
        self.id.replace(id.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unset() {
        let state = CurrentHeading::new();
        assert!(state.is_unset());
        assert_eq!(state.get(), None);
        assert!(!state.matches(""));
    }

    #[test]
    fn test_set_returns_previous() {
        let mut state = CurrentHeading::new();
        assert_eq!(state.set("intro"), None);
        assert_eq!(state.set("usage"), Some("intro".to_string()));
        assert!(state.matches("usage"));
        assert!(!state.matches("intro"));
        assert!(!state.is_unset());
    }
}
