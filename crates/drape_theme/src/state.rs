//! Component decoration states
//!
//! A component reports the states it is currently in (focused, pressed, ...)
//! as a [`StateSet`]; skins select decorations whose required states are all
//! present. State names are plain strings so hosts can add their own.

use smallvec::SmallVec;

/// Keyboard focus is inside the component
pub const FOCUSED: &str = "focused";
/// Pointer is over the component
pub const HOVER: &str = "hover";
/// Component is being pressed
pub const PRESSED: &str = "pressed";
/// Component is selected or toggled on
pub const SELECTED: &str = "selected";
/// Component does not accept input
pub const DISABLED: &str = "disabled";

/// Set of active state names, kept sorted and free of duplicates
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StateSet {
    states: SmallVec<[String; 4]>,
}

impl StateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_states<I, S>(states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for state in states {
            set.insert(state);
        }
        set
    }

    /// Returns `true` if the state was not already present
    pub fn insert(&mut self, state: impl Into<String>) -> bool {
        let state = state.into();
        match self.states.binary_search(&state) {
            Ok(_) => false,
            Err(idx) => {
                self.states.insert(idx, state);
                true
            }
        }
    }

    /// Returns `true` if the state was present
    pub fn remove(&mut self, state: &str) -> bool {
        match self.states.binary_search_by(|s| s.as_str().cmp(state)) {
            Ok(idx) => {
                self.states.remove(idx);
                true
            }
            Err(_) => false,
        }
    }

    pub fn contains(&self, state: &str) -> bool {
        self.states
            .binary_search_by(|s| s.as_str().cmp(state))
            .is_ok()
    }

    /// Every one of `required` is active; trivially true when empty
    pub fn contains_all<S: AsRef<str>>(&self, required: &[S]) -> bool {
        required.iter().all(|state| self.contains(state.as_ref()))
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.states.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for StateSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_states(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_set_sorted_and_unique() {
        let mut set = StateSet::from_states([PRESSED, FOCUSED]);
        assert!(!set.insert(FOCUSED));
        assert!(set.insert(HOVER));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![FOCUSED, HOVER, PRESSED]);
    }

    #[test]
    fn contains_all_of_empty_requirement() {
        let set = StateSet::new();
        assert!(set.contains_all::<&str>(&[]));
        assert!(!set.contains_all(&[DISABLED]));
    }

    #[test]
    fn remove_reports_presence() {
        let mut set: StateSet = [SELECTED, DISABLED].into_iter().collect();
        assert!(set.remove(DISABLED));
        assert!(!set.remove(DISABLED));
        assert_eq!(set.len(), 1);
        assert!(set.contains(SELECTED));
    }
}
