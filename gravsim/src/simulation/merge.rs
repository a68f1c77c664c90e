//! Perfectly inelastic merging of overlapping bodies
//!
//! Overlap pairs are grouped into clusters of transitively touching bodies.
//! Every cluster collapses into its lowest-index member, absorbing the rest
//! in ascending index order, so the outcome only depends on the order of
//! the body set and never on how the pairs were visited.

use super::states::Body;

/// Merge `b` into a copy of `a`
///
/// Mass and momentum add, position is the barycenter, colors average and
/// the trail of the result is empty
pub fn merge_bodies(a: &Body, b: &Body) -> Body {
    let mut merged = a.clone();
    merged.absorb(b);
    merged
}

/// Resolve all overlap `pairs` over `bodies`
///
/// Returns the surviving bodies in their original relative order, or
/// `None` when there is nothing to merge
pub fn resolve_collisions(bodies: &[Body], pairs: &[(usize, usize)]) -> Option<Vec<Body>> {
    if pairs.is_empty() {
        return None;
    }

    let clusters = Clusters::from_pairs(bodies.len(), pairs);

    let mut survivors: Vec<Body> = Vec::with_capacity(bodies.len());
    // slot in `survivors` for each cluster root
    let mut slot = vec![usize::MAX; bodies.len()];

    for (i, body) in bodies.iter().enumerate() {
        let root = clusters.root(i);
        if root == i {
            slot[i] = survivors.len();
            survivors.push(body.clone());
        } else {
            // root < i, so it has already been placed
            survivors[slot[root]].absorb(body);
        }
    }

    Some(survivors)
}

/// Disjoint sets over body indices; the root of a set is its smallest index
struct Clusters {
    parent: Vec<usize>,
}

impl Clusters {
    fn from_pairs(n: usize, pairs: &[(usize, usize)]) -> Self {
        let mut sets = Self {
            parent: (0..n).collect(),
        };
        for &(i, j) in pairs {
            sets.union(i, j);
        }
        sets
    }

    fn root(&self, mut i: usize) -> usize {
        while self.parent[i] != i {
            i = self.parent[i];
        }
        i
    }

    fn union(&mut self, i: usize, j: usize) {
        let ri = self.root(i);
        let rj = self.root(j);
        if ri == rj {
            return;
        }
        let (lo, hi) = if ri < rj { (ri, rj) } else { (rj, ri) };
        self.parent[hi] = lo;
    }
}
