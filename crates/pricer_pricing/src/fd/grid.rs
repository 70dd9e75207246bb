//! Uniform space-time grid.

/// `n` evenly spaced points from `start` to `end`, both included.
pub(crate) fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut points: Vec<f64> = (0..n).map(|k| start + step * k as f64).collect();
            points[n - 1] = end;
            points
        }
    }
}

/// Option values on a uniform (spot × time) grid.
///
/// Values are stored row-major: one row per spot node, one column per time
/// node, so `value(i, j)` is V(S_i, t_j).
///
/// # Example
///
/// ```rust
/// use pricer_pricing::fd::FdGrid;
///
/// let mut grid = FdGrid::uniform(0.0, 400.0, 5, 1.0, 3);
/// assert_eq!(grid.ds(), 100.0);
/// assert_eq!(grid.dt(), 0.5);
///
/// grid.set(4, 2, 300.0);
/// assert_eq!(grid.column(2), vec![0.0, 0.0, 0.0, 0.0, 300.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FdGrid {
    spots: Vec<f64>,
    times: Vec<f64>,
    values: Vec<f64>,
}

impl FdGrid {
    /// Zero-filled grid over [s_min, s_max] × [0, t_max].
    pub fn uniform(s_min: f64, s_max: f64, n_space: usize, t_max: f64, n_time: usize) -> Self {
        Self {
            spots: linspace(s_min, s_max, n_space),
            times: linspace(0.0, t_max, n_time),
            values: vec![0.0; n_space * n_time],
        }
    }

    /// Number of spot nodes.
    #[inline]
    pub fn n_space(&self) -> usize {
        self.spots.len()
    }

    /// Number of time nodes.
    #[inline]
    pub fn n_time(&self) -> usize {
        self.times.len()
    }

    /// Spot nodes, ascending.
    #[inline]
    pub fn spots(&self) -> &[f64] {
        &self.spots
    }

    /// Time nodes, ascending from 0.
    #[inline]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Spot spacing.
    #[inline]
    pub fn ds(&self) -> f64 {
        self.spots[1] - self.spots[0]
    }

    /// Time spacing.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.times[1] - self.times[0]
    }

    /// V(S_i, t_j).
    #[inline]
    pub fn value(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n_time() + j]
    }

    /// Sets V(S_i, t_j).
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        let n_time = self.n_time();
        self.values[i * n_time + j] = value;
    }

    /// Copy of the time slice `j`, one value per spot node.
    pub fn column(&self, j: usize) -> Vec<f64> {
        (0..self.n_space()).map(|i| self.value(i, j)).collect()
    }
}
