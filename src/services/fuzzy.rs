//! OCR-tolerant presence matching for short declared values.

use std::collections::HashMap;

use super::normalize::normalize;

/// Default similarity threshold for brand and class/type matching.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.80;

/// Decide whether `expected` is present in `observed`.
///
/// Both sides are normalized first. A substring relation in either direction
/// is an immediate match; otherwise the Ratcliff/Obershelp ratio of the two
/// normalized strings must reach `threshold`.
pub fn fuzzy_match(expected: &str, observed: &str, threshold: f64) -> bool {
    let expected = normalize(expected);
    let observed = normalize(observed);

    if observed.contains(&expected) || expected.contains(&observed) {
        return true;
    }

    similarity_ratio(&expected, &observed) >= threshold
}

/// Ratcliff/Obershelp similarity: `2 * M / T`, where `M` is the number of
/// characters in the recursively found longest common blocks and `T` the
/// combined length. Two empty strings are identical.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    2.0 * matching_characters(&a, &b) as f64 / total as f64
}

fn matching_characters(a: &[char], b: &[char]) -> usize {
    let mut positions: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, c) in b.iter().enumerate() {
        positions.entry(*c).or_default().push(j);
    }

    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((a_lo, a_hi, b_lo, b_hi)) = pending.pop() {
        let (i, j, size) = longest_block(a, &positions, a_lo, a_hi, b_lo, b_hi);
        if size == 0 {
            continue;
        }
        matched += size;
        if a_lo < i && b_lo < j {
            pending.push((a_lo, i, b_lo, j));
        }
        if i + size < a_hi && j + size < b_hi {
            pending.push((i + size, a_hi, j + size, b_hi));
        }
    }

    matched
}

/// Longest common block of `a[a_lo..a_hi]` and `b[b_lo..b_hi]`, returned as
/// `(start_in_a, start_in_b, len)`. Ties resolve to the earliest start in `a`,
/// then in `b`.
fn longest_block(
    a: &[char],
    positions: &HashMap<char, Vec<usize>>,
    a_lo: usize,
    a_hi: usize,
    b_lo: usize,
    b_hi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_len) = (a_lo, b_lo, 0);
    // run length of the block ending at (i - 1, j), keyed by j
    let mut runs: HashMap<usize, usize> = HashMap::new();

    for (i, c) in a.iter().enumerate().take(a_hi).skip(a_lo) {
        let mut next_runs = HashMap::new();
        if let Some(js) = positions.get(c) {
            for &j in js {
                if j < b_lo {
                    continue;
                }
                if j >= b_hi {
                    break;
                }
                let len = j
                    .checked_sub(1)
                    .and_then(|prev| runs.get(&prev))
                    .copied()
                    .unwrap_or(0)
                    + 1;
                next_runs.insert(j, len);
                if len > best_len {
                    best_i = i + 1 - len;
                    best_j = j + 1 - len;
                    best_len = len;
                }
            }
        }
        runs = next_runs;
    }

    (best_i, best_j, best_len)
}
