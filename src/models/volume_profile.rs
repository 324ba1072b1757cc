use serde::{Deserialize, Serialize};

use crate::utils::maths_utils::RangeF64;

/// Close-price volume histogram with its point of control and value area.
///
/// Prices reported for the POC and value area are bin centers. `value_area` holds
/// inclusive bin indices, so `value_area.0 <= poc_index <= value_area.1` always.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeProfile {
    pub price_range: RangeF64,
    pub bin_volumes: Vec<f64>,
    pub total_volume: f64,
    pub poc_index: usize,
    pub value_area: (usize, usize),
    pub value_area_volume: f64,
}

impl VolumeProfile {
    /// Empty histogram over `[min_price, max_price]`. POC and value area are
    /// placeholders until the engine fills them in.
    pub fn new(min_price: f64, max_price: f64, bin_count: usize) -> Self {
        let price_range = RangeF64::new(min_price, max_price, bin_count);
        let n_bins = price_range.n_chunks();
        VolumeProfile {
            price_range,
            bin_volumes: vec![0.0; n_bins],
            total_volume: 0.0,
            poc_index: 0,
            value_area: (0, 0),
            value_area_volume: 0.0,
        }
    }

    pub fn add_volume(&mut self, price: f64, volume: f64) {
        let index = self.price_range.chunk_index(price);
        if let Some(slot) = self.bin_volumes.get_mut(index) {
            *slot += volume;
        }
    }

    pub fn bin_count(&self) -> usize {
        self.bin_volumes.len()
    }

    pub fn bin_width(&self) -> f64 {
        self.price_range.chunk_size()
    }

    pub fn edges(&self) -> Vec<f64> {
        self.price_range.edges()
    }

    pub fn bin_center(&self, index: usize) -> f64 {
        self.price_range.chunk_center(index)
    }

    pub fn centers(&self) -> Vec<f64> {
        (0..self.bin_count()).map(|i| self.bin_center(i)).collect()
    }

    pub fn poc_price(&self) -> f64 {
        self.bin_center(self.poc_index)
    }

    pub fn value_area_low(&self) -> f64 {
        self.bin_center(self.value_area.0)
    }

    pub fn value_area_high(&self) -> f64 {
        self.bin_center(self.value_area.1)
    }

    /// Fraction of total volume inside the value area (1.0 for an empty profile).
    pub fn value_area_share(&self) -> f64 {
        if self.total_volume > 0.0 {
            self.value_area_volume / self.total_volume
        } else {
            1.0
        }
    }
}
