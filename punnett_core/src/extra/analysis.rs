use crate::solution::Tally;
use std::hash::Hash;

fn gcd(a: usize, b: usize) -> usize {
    match b {
        0 => a,
        _ => gcd(b, a % b),
    }
}

/// Counts of `tally` divided by their greatest common divisor, in first-seen order.
///
/// `Bb x Bb` gives `[3, 1]`, `BbDd x BbDd` gives `[9, 3, 3, 1]`.
pub fn reduced_ratio<K>(tally: &Tally<K>) -> Vec<usize>
where
    K: Clone + Eq + Hash,
{
    let counts = tally.counts();
    let g = counts.iter().copied().fold(0, gcd);
    if g == 0 {
        return counts;
    }
    counts.iter().map(|n| n / g).collect()
}

/// Formats a reduced ratio as `"9:3:3:1"`.
pub fn format_ratio<K>(tally: &Tally<K>) -> String
where
    K: Clone + Eq + Hash,
{
    reduced_ratio(tally)
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(":")
}
