//! Insertion-ordered mapping from container name to its links
//!
//! Rebinding an existing name replaces its links but keeps the position the
//! name was first inserted at, so report rows come out in a stable order.

use crate::model::Link;

/// Links grouped by container name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkDictionary {
    entries: Vec<(String, Vec<Link>)>,
}

impl LinkDictionary {
    /// Creates an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to a fresh, empty list of links
    ///
    /// Any links previously recorded under the same name are discarded.
    pub fn reset(&mut self, name: &str) {
        match self.position(name) {
            Some(index) => self.entries[index].1.clear(),
            None => self.entries.push((name.to_string(), Vec::new())),
        }
    }

    /// Appends a link to the list bound to `name`
    ///
    /// Returns false (and records nothing) if `name` was never bound.
    pub fn push(&mut self, name: &str, link: Link) -> bool {
        match self.position(name) {
            Some(index) => {
                self.entries[index].1.push(link);
                true
            }
            None => false,
        }
    }

    /// Returns the links bound to `name`
    pub fn get(&self, name: &str) -> Option<&[Link]> {
        self.position(name)
            .map(|index| self.entries[index].1.as_slice())
    }

    /// Iterates over `(container name, links)` in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Link])> {
        self.entries
            .iter()
            .map(|(name, links)| (name.as_str(), links.as_slice()))
    }

    /// Number of container names, including those with no links
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of links across all containers
    pub fn total_links(&self) -> usize {
        self.entries.iter().map(|(_, links)| links.len()).sum()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(key, _)| key == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_requires_bound_name() {
        let mut dict = LinkDictionary::new();
        assert!(!dict.push("Games", Link::topic("/games", false)));
        assert!(dict.is_empty());

        dict.reset("Games");
        assert!(dict.push("Games", Link::topic("/games", false)));
        assert_eq!(dict.get("Games").unwrap().len(), 1);
    }

    #[test]
    fn test_reset_replaces_links_last_write_wins() {
        let mut dict = LinkDictionary::new();
        dict.reset("Pulsa");
        dict.push("Pulsa", Link::topic("/pulsa/old", false));

        dict.reset("Pulsa");
        dict.push("Pulsa", Link::topic("/pulsa/new", true));

        assert_eq!(dict.len(), 1);
        let links = dict.get("Pulsa").unwrap();
        assert_eq!(links, &[Link::topic("/pulsa/new", true)]);
    }

    #[test]
    fn test_reset_keeps_first_insertion_position() {
        let mut dict = LinkDictionary::new();
        dict.reset("A");
        dict.reset("B");
        dict.reset("A");

        let names: Vec<&str> = dict.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_total_links() {
        let mut dict = LinkDictionary::new();
        dict.reset("A");
        dict.push("A", Link::topic("/a", false));
        dict.push("A", Link::regular("/a/1", false));
        dict.reset("B");
        dict.push("B", Link::topic("/b", true));
        dict.reset("C");

        assert_eq!(dict.len(), 3);
        assert_eq!(dict.total_links(), 3);
    }
}
