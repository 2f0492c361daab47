// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Lexicographic k-subsets enumeration.

/// Iterator over all k-subsets of the index range `0..n`.
///
/// Subsets are produced exactly once, in lexicographic order, as sorted
/// index vectors. The iterator keeps a single index array and computes
/// the lexicographic successor on each step, so no subset collection is
/// ever materialized:
///
/// ```
/// # use railbird_cards::Combinations;
/// let combos = Combinations::new(4, 2).collect::<Vec<_>>();
/// assert_eq!(
///     combos,
///     vec![
///         vec![0, 1],
///         vec![0, 2],
///         vec![0, 3],
///         vec![1, 2],
///         vec![1, 3],
///         vec![2, 3]
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    k: usize,
    indexes: Option<Vec<usize>>,
}

impl Combinations {
    /// Creates an enumerator for the k-subsets of `0..n`.
    ///
    /// Panics if `k > n`.
    pub fn new(n: usize, k: usize) -> Self {
        assert!(k <= n, "k must not exceed n");
        Self {
            n,
            k,
            indexes: Some((0..k).collect()),
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let indexes = self.indexes.as_mut()?;
        let item = indexes.clone();

        // Rightmost index that can still move, its successors restart
        // just above it.
        let pos = (0..self.k).rev().find(|&i| indexes[i] != i + self.n - self.k);
        match pos {
            Some(i) => {
                indexes[i] += 1;
                for j in (i + 1)..self.k {
                    indexes[j] = indexes[j - 1] + 1;
                }
            }
            None => self.indexes = None,
        }

        Some(item)
    }
}
