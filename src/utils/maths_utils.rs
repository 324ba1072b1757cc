use argminmax::ArgMinMax;

/// Equal-width partition of `[start_range, end_range]` into `n_chunks` chunks.
/// Chunks are left-closed/right-open, except the last one which also holds `end_range`.
#[derive(serde::Deserialize, serde::Serialize, Default, Debug, Clone, PartialEq)]
pub struct RangeF64 {
    pub start_range: f64,
    pub end_range: f64,
    pub n_chunks: usize,
}

impl RangeF64 {
    pub fn new(start_range: f64, end_range: f64, n_chunks: usize) -> Self {
        debug_assert!(n_chunks > 0);
        debug_assert!(end_range >= start_range);
        Self {
            start_range,
            end_range,
            n_chunks,
        }
    }

    #[inline]
    pub fn n_chunks(&self) -> usize {
        self.n_chunks
    }

    pub fn range_length(&self) -> f64 {
        self.end_range - self.start_range
    }

    pub fn chunk_size(&self) -> f64 {
        self.range_length() / (self.n_chunks as f64)
    }

    pub fn chunk_index(&self, value: f64) -> usize {
        let size = self.chunk_size();
        // Zero-width range: everything lands in the first chunk.
        if size <= 0.0 {
            return 0;
        }
        let index = ((value - self.start_range) / size).floor();
        if index <= 0.0 {
            return 0;
        }

        // Clamping handles floating-point inaccuracies at the boundary, and puts
        // `end_range` itself into the last chunk.
        (index as usize).min(self.n_chunks - 1)
    }

    pub fn chunk_bounds(&self, chunk_index: usize) -> (f64, f64) {
        debug_assert!(chunk_index < self.n_chunks);
        let lower_bound = self.start_range + chunk_index as f64 * self.chunk_size();
        let upper_bound = if chunk_index + 1 == self.n_chunks {
            self.end_range
        } else {
            self.start_range + (chunk_index + 1) as f64 * self.chunk_size()
        };
        (lower_bound, upper_bound)
    }

    pub fn chunk_center(&self, chunk_index: usize) -> f64 {
        let (lower, upper) = self.chunk_bounds(chunk_index);
        (lower + upper) / 2.0
    }

    /// The `n_chunks + 1` boundaries, first is `start_range` and last is exactly `end_range`.
    pub fn edges(&self) -> Vec<f64> {
        (0..self.n_chunks)
            .map(|i| self.chunk_bounds(i).0)
            .chain(std::iter::once(self.end_range))
            .collect()
    }
}

pub fn get_max(vec: &[f64]) -> f64 {
    let max_index: usize = vec.argmax();
    vec[max_index]
}

pub fn get_min_max(vec: &[f64]) -> (f64, f64) {
    let (min_index, max_index) = vec.argminmax();
    (vec[min_index], vec[max_index])
}

// Normalizes a vector of (positive) f64 to 0.0 to 1.0. Guarantees largest value is 1.0
// Smallest output value will be 0.0 iff smallest input value = 0.0
// Name: `Max normalization`, `Max-Abs normalization`, or `L∞ normalization`
pub fn normalize_max(vec: &[f64]) -> Vec<f64> {
    if vec.is_empty() {
        return Vec::new();
    }
    match get_max(vec) {
        val if val <= 0.0 => vec.to_vec(),
        val => vec.iter().map(|&x| x / val).collect(),
    }
}
