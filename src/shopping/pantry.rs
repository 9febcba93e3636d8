use serde::{Deserialize, Serialize};

/// Ingredients the user already owns, in insertion order.
///
/// Entries are deduplicated by exact value, so "Tomato" and "tomato" are two
/// entries even though ingredient matching treats them the same.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Pantry(Vec<String>);

impl Pantry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the trimmed entry is blank or already present.
    pub fn add(&mut self, item: &str) -> bool {
        let trimmed = item.trim();
        if trimmed.is_empty() || self.0.iter().any(|i| i == trimmed) {
            return false;
        }
        self.0.push(trimmed.to_string());
        true
    }

    pub fn items(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Pantry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut pantry = Pantry::new();
        for item in iter {
            pantry.add(item.as_ref());
        }
        pantry
    }
}

impl From<Vec<String>> for Pantry {
    fn from(items: Vec<String>) -> Self {
        items.into_iter().collect()
    }
}

impl From<Pantry> for Vec<String> {
    fn from(p: Pantry) -> Self {
        p.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_trims_and_dedupes_exactly() {
        let mut p = Pantry::new();
        assert!(p.add("  Tomato "));
        assert!(!p.add("Tomato"));
        assert!(p.add("tomato"));
        assert!(!p.add("   "));
        assert_eq!(p.items(), &["Tomato".to_string(), "tomato".to_string()]);
    }

    #[test]
    fn collects_from_str_slices() {
        let p: Pantry = ["Milk", "Eggs", "Milk"].into_iter().collect();
        assert_eq!(p.len(), 2);
        assert!(!p.is_empty());
    }

    #[test]
    fn deserializes_from_plain_array() {
        let p: Pantry = serde_json::from_str(r#"["Rice", "Rice", " ", "Salt"]"#).unwrap();
        assert_eq!(p.items(), &["Rice".to_string(), "Salt".to_string()]);
        assert_eq!(serde_json::to_string(&p).unwrap(), r#"["Rice","Salt"]"#);
    }
}
