use crate::genotype::{Gamete, Genotype};
use std::cmp::Reverse;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Observable traits of an offspring, one component per selected trait.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phenotype {
    components: Vec<String>,
}

impl Phenotype {
    pub fn new(components: Vec<String>) -> Self {
        Self { components }
    }
}

impl fmt::Display for Phenotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.components.join(", "))
    }
}

/// Frequency counts kept in the order keys were first seen.
#[derive(Debug, Clone)]
pub struct Tally<K> {
    entries: Vec<(K, usize)>,
    index: HashMap<K, usize>,
}

impl<K: PartialEq> PartialEq for Tally<K> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq> Eq for Tally<K> {}

impl<K> Default for Tally<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Clone + Eq + Hash> Tally<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    pub fn get(&self, key: &K) -> usize {
        self.index.get(key).map_or(0, |&i| self.entries[i].1)
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.entries.iter().map(|(k, n)| (k, *n))
    }

    pub fn counts(&self) -> Vec<usize> {
        self.entries.iter().map(|(_, n)| *n).collect()
    }

    /// Percentage of `key` among all counts, `0.0` for an empty tally.
    pub fn percentage(&self, key: &K) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.get(key) as f64 / total as f64 * 100.0,
        }
    }

    /// `"count/total"` for `key`.
    pub fn ratio(&self, key: &K) -> String {
        format!("{}/{}", self.get(key), self.total())
    }

    /// Entries by descending count; ties keep first-seen order.
    pub fn by_descending_share(&self) -> Vec<(&K, usize)> {
        let mut v: Vec<(&K, usize)> = self.iter().collect();
        v.sort_by_key(|&(_, n)| Reverse(n));
        v
    }
}

impl<K: Clone + Eq + Hash> FromIterator<K> for Tally<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut t = Tally::new();
        iter.into_iter().for_each(|k| t.add(k));
        t
    }
}

/// Everything produced by crossing two parents: the square itself and its tallies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossResult {
    pub parent1: Genotype,
    pub parent2: Genotype,
    /// Row labels of the square.
    pub gametes_a: Vec<Gamete>,
    /// Column labels of the square.
    pub gametes_b: Vec<Gamete>,
    /// Row-major cells.
    pub offspring: Vec<Genotype>,
    pub genotype_counts: Tally<Genotype>,
    pub phenotype_counts: Tally<Phenotype>,
}

impl CrossResult {
    pub fn n_rows(&self) -> usize {
        self.gametes_a.len()
    }

    pub fn n_cols(&self) -> usize {
        self.gametes_b.len()
    }

    pub fn rows(&self) -> std::slice::ChunksExact<'_, Genotype> {
        self.offspring.chunks_exact(self.n_cols().max(1))
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Genotype> {
        if row >= self.n_rows() || col >= self.n_cols() {
            return None;
        }
        self.offspring.get(row * self.n_cols() + col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_first_seen_order_test() {
        let t: Tally<&str> = ["b", "a", "b", "c", "a", "b"].into_iter().collect();
        assert_eq!(
            vec![(&"b", 3), (&"a", 2), (&"c", 1)],
            t.iter().collect::<Vec<_>>()
        );
        assert_eq!(6, t.total());
        assert_eq!(0, t.get(&"z"));
        assert_eq!("2/6", t.ratio(&"a"));
        assert!((t.percentage(&"b") - 50.0).abs() < 1e-9);
    }

    #[test]
    fn tally_descending_share_is_stable_test() {
        let t: Tally<&str> = ["x", "y", "y", "z", "w", "w"].into_iter().collect();
        assert_eq!(
            vec![(&"y", 2), (&"w", 2), (&"x", 1), (&"z", 1)],
            t.by_descending_share()
        );
    }

    #[test]
    fn empty_tally_test() {
        let t: Tally<&str> = Tally::new();
        assert!(t.is_empty());
        assert_eq!(0.0, t.percentage(&"a"));
        assert_eq!("0/0", t.ratio(&"a"));
    }

    #[test]
    fn phenotype_display_test() {
        let p = Phenotype::new(vec!["Brown Eyes".to_owned(), "Curly Hair".to_owned()]);
        assert_eq!("Brown Eyes, Curly Hair", p.to_string());
        let p = Phenotype::new(vec!["Blue Eyes".to_owned()]);
        assert_eq!("Blue Eyes", p.to_string());
    }
}
