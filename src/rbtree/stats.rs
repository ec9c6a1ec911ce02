use std::{fmt, result};

/// Statistic type, for [RbTree] type.
///
/// [RbTree]: crate::rbtree::RbTree
pub struct Stats {
    pub name: String,
    pub n_count: usize,
    pub node_size: usize,
    pub capacity: usize,
    /// Number of black nodes on every path from root to a nil child.
    pub blacks: usize,
    pub depths: Depth,
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        writeln!(f, "rbtree.name = {}", self.name)?;
        writeln!(
            f,
            "rbtree = {{ n_count={}, node_size={}, capacity={}, blacks={} }}",
            self.n_count, self.node_size, self.capacity, self.blacks,
        )?;
        writeln!(f, "rbtree.depths = {}", self.depths)
    }
}

/// Leaf depth distribution of the tree, depth of root is 1.
#[derive(Clone, Default)]
pub struct Depth {
    samples: usize,
    total: usize,
    histogram: Vec<usize>,
}

impl Depth {
    /// Record depth of one leaf node.
    pub fn sample(&mut self, depth: usize) {
        if self.histogram.len() <= depth {
            self.histogram.resize(depth + 1, 0);
        }
        self.histogram[depth] += 1;
        self.samples += 1;
        self.total += depth;
    }

    pub fn to_samples(&self) -> usize {
        self.samples
    }

    /// Shallowest leaf, None if there are no samples.
    pub fn to_min(&self) -> Option<usize> {
        self.histogram.iter().position(|n| *n > 0)
    }

    /// Deepest leaf, None if there are no samples.
    pub fn to_max(&self) -> Option<usize> {
        self.histogram.iter().rposition(|n| *n > 0)
    }

    pub fn to_mean(&self) -> Option<usize> {
        match self.samples {
            0 => None,
            n => Some(self.total / n),
        }
    }

    /// Smallest depth at or below which `perc` percent of leaves are found.
    pub fn to_percentile(&self, perc: u8) -> Option<usize> {
        if self.samples == 0 {
            return None;
        }
        let want = (self.samples * usize::from(perc.min(100)) + 99) / 100;
        let mut acc = 0;
        for (depth, n) in self.histogram.iter().enumerate() {
            acc += n;
            if acc >= want && *n > 0 {
                return Some(depth);
            }
        }
        self.to_max()
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        let show = |x: Option<usize>| x.map_or("none".to_string(), |x| x.to_string());
        write!(
            f,
            concat!(
                "{{ samples={}, min={}, mean={}, max={}, ",
                "p50={}, p90={}, p99={} }}"
            ),
            self.samples,
            show(self.to_min()),
            show(self.to_mean()),
            show(self.to_max()),
            show(self.to_percentile(50)),
            show(self.to_percentile(90)),
            show(self.to_percentile(99)),
        )
    }
}

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;
