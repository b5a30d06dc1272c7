/// Disjoint sets over `0..n` with path compression and union by size. Tracks the
/// number of live components so Betti-0 numbers can be read off directly.
pub(crate) struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    n_components: usize,
}

impl UnionFind {
    pub(crate) fn new(n_vertices: usize) -> Self {
        UnionFind {
            parent: (0..n_vertices).collect(),
            size: vec![1; n_vertices],
            n_components: n_vertices,
        }
    }

    /// Merges the sets holding `m` and `n`. Returns false if they were already joined.
    pub(crate) fn union(&mut self, m: usize, n: usize) -> bool {
        let mut root_m = self.find(m);
        let mut root_n = self.find(n);
        if root_m == root_n {
            return false;
        }
        if self.size[root_m] < self.size[root_n] {
            std::mem::swap(&mut root_m, &mut root_n);
        }
        self.parent[root_n] = root_m;
        self.size[root_m] += self.size[root_n];
        self.n_components -= 1;
        true
    }

    pub(crate) fn find(&mut self, mut n: usize) -> usize {
        let mut root = n;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        while self.parent[n] != root {
            let next = self.parent[n];
            self.parent[n] = root;
            n = next;
        }
        root
    }

    pub(crate) fn n_components(&self) -> usize {
        self.n_components
    }
}
