//! Immutable reference catalog: named topics of titled tables.
//!
//! The catalog is built once at command start and never mutated afterwards.
//! Topics live in a vector, not a map, so menus and rendering see them in
//! registration order.

pub mod git;
pub mod javascript;

use serde::Serialize;

/// A titled table of reference rows.
#[derive(Debug, Clone, Serialize)]
pub struct Table {
    /// Table heading
    pub title: &'static str,
    /// Column headers
    pub columns: &'static [&'static str],
    /// Data rows; each row lines up with `columns`
    pub rows: &'static [&'static [&'static str]],
}

/// A named topic holding zero or more tables.
#[derive(Debug, Clone, Serialize)]
pub struct Topic {
    /// Topic name as shown in menus
    pub name: &'static str,
    /// Tables registered for this topic, in registration order
    pub tables: Vec<Table>,
}

/// An ordered, immutable collection of topics.
#[derive(Debug, Default, Serialize)]
pub struct Catalog {
    topics: Vec<Topic>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a topic. Order of registration is the order of display.
    pub fn register(&mut self, topic: Topic) {
        self.topics.push(topic);
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Topic names in registration order, for menu display.
    pub fn names(&self) -> Vec<&'static str> {
        self.topics.iter().map(|t| t.name).collect()
    }

    /// Exact-name lookup.
    pub fn get(&self, name: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.name == name)
    }

    /// Look up by exact name, leading chapter number, or case-insensitive
    /// substring, in that order of preference.
    pub fn find(&self, query: &str) -> Option<&Topic> {
        let query = query.trim();
        if let Some(topic) = self.get(query) {
            return Some(topic);
        }

        // "7" selects "7. Functions"
        if !query.is_empty() && query.chars().all(|c| c.is_ascii_digit()) {
            let prefix = format!("{query}.");
            if let Some(topic) = self.topics.iter().find(|t| t.name.starts_with(&prefix)) {
                return Some(topic);
            }
        }

        let lowered = query.to_lowercase();
        self.topics
            .iter()
            .find(|t| t.name.to_lowercase().contains(&lowered))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.register(Topic {
            name: "1. Alpha",
            tables: vec![Table {
                title: "Alpha things",
                columns: &["Name", "Example"],
                rows: &[&["one", "ex1"], &["two", "ex2"]],
            }],
        });
        catalog.register(Topic {
            name: "2. Beta",
            tables: Vec::new(),
        });
        catalog
    }

    #[test]
    fn test_registration_order_preserved() {
        let catalog = sample();
        assert_eq!(catalog.names(), vec!["1. Alpha", "2. Beta"]);
    }

    #[test]
    fn test_get_is_exact() {
        let catalog = sample();
        assert!(catalog.get("1. Alpha").is_some());
        assert!(catalog.get("Alpha").is_none());
    }

    #[test]
    fn test_find_by_chapter_number() {
        let catalog = sample();
        assert_eq!(catalog.find("2").unwrap().name, "2. Beta");
    }

    #[test]
    fn test_find_by_substring_is_case_insensitive() {
        let catalog = sample();
        assert_eq!(catalog.find("alpha").unwrap().name, "1. Alpha");
    }

    #[test]
    fn test_find_miss_is_none() {
        let catalog = sample();
        assert!(catalog.find("gamma").is_none());
        assert!(catalog.find("9").is_none());
    }

    #[test]
    fn test_topic_may_have_no_tables() {
        let catalog = sample();
        assert!(catalog.get("2. Beta").unwrap().tables.is_empty());
    }

    #[test]
    fn test_javascript_catalog_has_all_chapters() {
        let catalog = javascript::catalog();
        assert_eq!(catalog.topics().len(), 23);
        // Every shipped chapter carries data.
        for topic in catalog.topics() {
            assert!(!topic.tables.is_empty(), "{} has no tables", topic.name);
            for table in &topic.tables {
                for row in table.rows {
                    assert_eq!(row.len(), table.columns.len(), "ragged row in {}", table.title);
                }
            }
        }
    }

    #[test]
    fn test_git_catalog_rows_match_columns() {
        let catalog = git::catalog();
        assert!(!catalog.topics().is_empty());
        for topic in catalog.topics() {
            for table in &topic.tables {
                for row in table.rows {
                    assert_eq!(row.len(), table.columns.len());
                }
            }
        }
    }
}
