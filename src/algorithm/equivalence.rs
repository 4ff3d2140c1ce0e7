//! Union-find table of provisional cluster labels

use crate::io::configuration::FIRST_CLUSTER_LABEL;

/// Entry of the label equivalence table
///
/// A root is a canonical label mapped to itself; an alias points at another
/// label that must be followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelEntry {
    /// Canonical label of its equivalence class
    Root,
    /// Provisional label merged into the class of the target label
    Alias(u32),
}

/// Union-find table resolving provisional cluster labels
///
/// Indexed by label. Labels `0` and `1` are reserved roots for empty and
/// unlabeled sites, so fresh labels start at `FIRST_CLUSTER_LABEL`. Unions
/// always alias the larger root to the smaller one, which keeps roots
/// stable in scan order and chains short.
#[derive(Debug, Clone)]
pub struct EquivalenceTable {
    entries: Vec<LabelEntry>,
    unions: usize,
}

impl Default for EquivalenceTable {
    fn default() -> Self {
        Self::new()
    }
}

impl EquivalenceTable {
    /// Create a table holding only the reserved labels
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a table sized for a lattice with `sites` cells
    ///
    /// A checkerboard is the worst case and needs one label per two sites.
    pub fn with_capacity(sites: usize) -> Self {
        let mut entries = Vec::with_capacity(sites / 2 + FIRST_CLUSTER_LABEL as usize + 1);
        entries.resize(FIRST_CLUSTER_LABEL as usize, LabelEntry::Root);

        Self { entries, unions: 0 }
    }

    /// Forget all issued labels, keeping the allocation
    pub fn reset(&mut self) {
        self.entries.truncate(FIRST_CLUSTER_LABEL as usize);
        self.unions = 0;
    }

    /// Issue a new root label
    pub fn create_label(&mut self) -> u32 {
        let label = u32::try_from(self.entries.len()).unwrap_or(u32::MAX);
        self.entries.push(LabelEntry::Root);
        label
    }

    /// Entry of a label, `None` if it was never issued
    pub fn entry(&self, label: u32) -> Option<LabelEntry> {
        self.entries.get(label as usize).copied()
    }

    /// Follow aliases from `label` to its canonical root
    ///
    /// Labels that were never issued resolve to themselves.
    pub fn find(&self, mut label: u32) -> u32 {
        while let Some(LabelEntry::Alias(target)) = self.entry(label) {
            label = target;
        }
        label
    }

    /// Merge the classes of two labels and return the surviving root
    ///
    /// The smaller root wins; the larger root becomes an alias of it.
    pub fn union(&mut self, first: u32, second: u32) -> u32 {
        let first_root = self.find(first);
        let second_root = self.find(second);
        let (root, merged) = if first_root <= second_root {
            (first_root, second_root)
        } else {
            (second_root, first_root)
        };

        if root != merged {
            if let Some(entry) = self.entries.get_mut(merged as usize) {
                *entry = LabelEntry::Alias(root);
                self.unions += 1;
            }
        }

        root
    }

    /// Resolve `label` and point it directly at its root
    pub fn resolve(&mut self, label: u32) -> u32 {
        let root = self.find(label);
        if root != label {
            if let Some(entry) = self.entries.get_mut(label as usize) {
                *entry = LabelEntry::Alias(root);
            }
        }
        root
    }

    /// Number of aliases that have to be followed from `label` to its root
    pub fn depth(&self, mut label: u32) -> usize {
        let mut depth = 0;
        while let Some(LabelEntry::Alias(target)) = self.entry(label) {
            label = target;
            depth += 1;
        }
        depth
    }

    /// Number of labels issued since the last reset
    pub fn issued(&self) -> usize {
        self.entries.len() - FIRST_CLUSTER_LABEL as usize
    }

    /// Number of unions that merged two distinct classes
    pub const fn unions(&self) -> usize {
        self.unions
    }

    /// Number of distinct classes among the issued labels
    pub fn roots(&self) -> usize {
        self.issued() - self.unions
    }
}
