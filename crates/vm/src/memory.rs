//! The variable store.

use std::collections::HashMap;

/// Variable name to current value.
///
/// Entries only appear through [`Memory::set`]. The store itself does not
/// enforce the natural-number rule; the engine checks a value before it
/// commits it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Memory {
    values: HashMap<String, i64>,
}

impl Memory {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of `name`.
    pub fn get(&self, name: &str) -> Option<i64> {
        self.values.get(name).copied()
    }

    /// Create or overwrite `name`.
    pub fn set(&mut self, name: &str, value: i64) {
        self.values.insert(name.to_string(), value);
    }

    /// Subtract `amount` from `name` and return the new value, or `None`
    /// if the variable does not exist. Wraps on overflow.
    pub fn subtract(&mut self, name: &str, amount: i64) -> Option<i64> {
        let slot = self.values.get_mut(name)?;
        *slot = slot.wrapping_sub(amount);
        Some(*slot)
    }

    /// Remove `name`, returning its last value.
    pub fn remove(&mut self, name: &str) -> Option<i64> {
        self.values.remove(name)
    }

    /// Drop every variable.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Number of variables in memory.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no variables are set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_overwrite() {
        let mut memory = Memory::new();
        assert_eq!(memory.get("a"), None);
        memory.set("a", 10);
        assert_eq!(memory.get("a"), Some(10));
        memory.set("a", 3);
        assert_eq!(memory.get("a"), Some(3));
        assert_eq!(memory.len(), 1);
    }

    #[test]
    fn subtract_below_zero() {
        let mut memory = Memory::new();
        memory.set("a", 2);
        assert_eq!(memory.subtract("a", 5), Some(-3));
        assert_eq!(memory.get("a"), Some(-3));
    }

    #[test]
    fn subtract_missing() {
        let mut memory = Memory::new();
        assert_eq!(memory.subtract("a", 1), None);
        assert!(memory.is_empty());
    }

    #[test]
    fn subtract_wraps() {
        let mut memory = Memory::new();
        memory.set("a", 1);
        assert_eq!(memory.subtract("a", i64::MIN), Some(i64::MIN + 1));
    }

    #[test]
    fn remove_and_clear() {
        let mut memory = Memory::new();
        memory.set("a", 1);
        memory.set("b", 2);
        assert_eq!(memory.remove("a"), Some(1));
        assert_eq!(memory.remove("a"), None);
        assert_eq!(memory.get("b"), Some(2));
        memory.clear();
        assert!(memory.is_empty());
    }
}
