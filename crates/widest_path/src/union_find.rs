/// Disjoint-set forest with path halving and union by rank.
///
/// `union` takes set representatives, not arbitrary members: callers resolve
/// both sides through `find` and only call when the roots differ, as the
/// spanning-tree builder does.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<u32>,
    rank: Vec<u32>,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n as u32).collect(),
            rank: vec![1; n],
        }
    }

    /// Representative of `x`'s set, halving the path as it walks up.
    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] as usize != x {
            let grandparent = self.parent[self.parent[x] as usize];
            self.parent[x] = grandparent;
            x = grandparent as usize;
        }
        x
    }

    /// Attach the lower-rank root under the higher; ranks grow only on ties.
    /// Both arguments must be distinct representatives.
    pub fn union(&mut self, a: usize, b: usize) {
        debug_assert!(self.parent[a] as usize == a, "union expects a representative");
        debug_assert!(self.parent[b] as usize == b, "union expects a representative");
        debug_assert!(a != b, "union of a set with itself");
        if self.rank[a] >= self.rank[b] {
            self.parent[b] = a as u32;
            if self.rank[a] == self.rank[b] {
                self.rank[a] += 1;
            }
        } else {
            self.parent[a] = b as u32;
        }
    }
}
