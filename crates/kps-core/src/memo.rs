use serde::{Deserialize, Serialize};

/// One memo entry: not yet computed, or a settled verdict.
///
/// `Unknown` means "not yet computed" — distinct from an out-of-domain
/// query, which never reaches the table at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    Unknown,
    Yes,
    No,
}

/// Tri-state memo table indexed by (k, n), rows 1..=k_max and columns
/// 0..n_max.
///
/// Entries only ever move Unknown -> Yes or Unknown -> No; a resolved
/// entry is a permanent fact and never changes again. Row 1 holds the
/// primality table and is filled in full before any lookup; higher rows
/// fill lazily, one entry per computed query.
#[derive(Clone, Debug)]
pub struct MemoTable {
    n_max: usize,
    k_max: usize,
    cells: Vec<Cell>,
}

impl MemoTable {
    pub fn new(n_max: usize, k_max: usize) -> Self {
        Self {
            n_max,
            k_max,
            cells: vec![Cell::Unknown; n_max * k_max],
        }
    }

    fn index(&self, k: usize, n: usize) -> usize {
        debug_assert!(k >= 1 && k <= self.k_max, "row {k} out of range");
        debug_assert!(n < self.n_max, "column {n} out of range");
        (k - 1) * self.n_max + n
    }

    pub fn get(&self, k: usize, n: usize) -> Cell {
        self.cells[self.index(k, n)]
    }

    /// Resolve (k, n). Only the Unknown -> Yes/No transitions are legal.
    pub fn set(&mut self, k: usize, n: usize, cell: Cell) {
        debug_assert!(cell != Cell::Unknown, "cannot un-resolve an entry");
        let idx = self.index(k, n);
        debug_assert!(
            self.cells[idx] == Cell::Unknown || self.cells[idx] == cell,
            "resolved entry ({k}, {n}) must not change"
        );
        self.cells[idx] = cell;
    }

    /// Number of resolved (non-Unknown) entries across all rows.
    pub fn resolved(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Unknown).count()
    }

    pub fn n_max(&self) -> usize {
        self.n_max
    }

    pub fn k_max(&self) -> usize {
        self.k_max
    }
}
