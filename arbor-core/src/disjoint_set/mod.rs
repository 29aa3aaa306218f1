//! Union-find (disjoint set union) over dense vertex indices.
//!
//! The Kruskal engine creates one [`DisjointSet`] per computation and uses it
//! to reject edges whose endpoints already share a component. Unions are
//! ranked and `find` compresses paths iteratively, so pathological parent
//! chains never recurse.

use crate::error::{GraphError, Result};

/// Partition of `0..len` into disjoint sets.
///
/// # Examples
/// ```
/// use arbor_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(3);
/// assert!(sets.union_sets(0, 2)?);
/// assert_eq!(sets.find(2)?, sets.find(0)?);
/// assert_eq!(sets.component_count(), 2);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<usize>,
    components: usize,
}

impl DisjointSet {
    /// Creates `len` singleton sets, each element its own root with rank 0.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            components: len,
        }
    }

    /// Returns the number of elements tracked by the structure.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.parent.len() }

    /// Returns `true` when the structure tracks no elements.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// Returns the number of disjoint sets currently in the partition.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.components }

    /// Returns the representative of the set containing `node`.
    ///
    /// Every node visited on the way to the root is re-pointed directly at
    /// the root before returning.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] when `node >= self.len()`.
    pub fn find(&mut self, node: usize) -> Result<usize> {
        self.check(node)?;

        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = node;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        Ok(root)
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// The root with the strictly larger rank becomes the parent. On a rank
    /// tie the root of `left` wins and its rank grows by one. Returns `false`
    /// when both already share a set, which is how Kruskal detects an edge
    /// that would close a cycle.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] when either index is invalid. The
    /// structure is not modified in that case.
    pub fn union_sets(&mut self, left: usize, right: usize) -> Result<bool> {
        self.check(left)?;
        self.check(right)?;

        let left_root = self.find(left)?;
        let right_root = self.find(right)?;
        if left_root == right_root {
            return Ok(false);
        }

        let left_rank = self.rank[left_root];
        let right_rank = self.rank[right_root];
        if left_rank < right_rank {
            self.parent[left_root] = right_root;
        } else if left_rank > right_rank {
            self.parent[right_root] = left_root;
        } else {
            self.parent[right_root] = left_root;
            self.rank[left_root] = left_rank.saturating_add(1);
        }

        self.components = self.components.saturating_sub(1);
        Ok(true)
    }

    fn check(&self, node: usize) -> Result<()> {
        if node < self.parent.len() {
            Ok(())
        } else {
            Err(GraphError::OutOfRange {
                index: node,
                len: self.parent.len(),
            })
        }
    }

    #[cfg(test)]
    pub(crate) fn parent_of(&self, node: usize) -> usize {
        self.parent[node]
    }

    #[cfg(test)]
    pub(crate) fn rank_of(&self, node: usize) -> usize {
        self.rank[node]
    }
}
