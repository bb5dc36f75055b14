use glam::DVec2;
use std::collections::HashMap;

/// Integer coordinates of a grid cell.
pub type CellKey = (i64, i64);

/// Uniform spatial hash over aircraft indices, rebuilt every tick.
#[derive(Debug, Clone)]
pub struct SpatialGrid {
    cell_size: f64,
    /// How many cells away a pair within `search_radius` can be.
    reach: i64,
    cells: HashMap<CellKey, Vec<usize>>,
}

impl SpatialGrid {
    /// Grid whose cells are `cell_size` wide, able to return every pair of
    /// points closer than `search_radius`.
    pub fn new(cell_size: f64, search_radius: f64) -> Self {
        let reach = (search_radius / cell_size).ceil().max(1.0) as i64;
        Self {
            cell_size,
            reach,
            cells: HashMap::new(),
        }
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn reach(&self) -> i64 {
        self.reach
    }

    /// Empty every bucket. Cells unused since the previous clear are dropped,
    /// the rest keep their allocations for the next tick.
    pub fn clear(&mut self) {
        self.cells.retain(|_, members| !members.is_empty());
        self.cells.values_mut().for_each(Vec::clear);
    }

    pub fn cell_of(&self, position: DVec2) -> CellKey {
        (
            (position.x / self.cell_size).floor() as i64,
            (position.y / self.cell_size).floor() as i64,
        )
    }

    pub fn insert(&mut self, index: usize, position: DVec2) {
        let key = self.cell_of(position);
        self.cells.entry(key).or_default().push(index);
    }

    /// Every pair sharing a cell or lying in nearby cells, each exactly once.
    ///
    /// Only the forward half of the neighbourhood is visited from each cell,
    /// so a pair spanning two cells is produced from one side only.
    pub fn candidate_pairs(&self) -> Vec<(usize, usize)> {
        let offsets = self.forward_offsets();
        let mut pairs = Vec::new();

        for (&(cx, cy), members) in &self.cells {
            for (i, &a) in members.iter().enumerate() {
                for &b in &members[i + 1..] {
                    pairs.push((a, b));
                }
            }
            for &(dx, dy) in &offsets {
                let Some(neighbours) = self.cells.get(&(cx + dx, cy + dy)) else {
                    continue;
                };
                for &a in members {
                    for &b in neighbours {
                        pairs.push((a, b));
                    }
                }
            }
        }
        pairs
    }

    fn forward_offsets(&self) -> Vec<CellKey> {
        let r = self.reach;
        let mut offsets = Vec::new();
        for dx in -r..=r {
            for dy in -r..=r {
                if dx > 0 || (dx == 0 && dy > 0) {
                    offsets.push((dx, dy));
                }
            }
        }
        offsets
    }
}
