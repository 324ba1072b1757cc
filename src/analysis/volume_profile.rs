//! Close-price volume profile: binning, point of control and value area.

use crate::config::ANALYSIS;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::domain::PriceBar;
use crate::error::EngineError;
use crate::models::VolumeProfile;
use crate::utils::maths_utils::get_min_max;

/// Buckets bar volume by close price into `bin_count` equal-width bins and finds the
/// point of control and the 70% value area.
///
/// Bins are left-closed/right-open over `[min close, max close]`, with the last bin
/// also holding the max. When every close is identical the profile is a single
/// zero-width bin at that price.
pub fn compute_volume_profile(
    bars: &[PriceBar],
    bin_count: usize,
) -> Result<VolumeProfile, EngineError> {
    compute_volume_profile_with_share(bars, bin_count, ANALYSIS.profile.value_area_share)
}

pub fn compute_volume_profile_with_share(
    bars: &[PriceBar],
    bin_count: usize,
    value_area_share: f64,
) -> Result<VolumeProfile, EngineError> {
    if bars.is_empty() {
        return Err(EngineError::invalid_input("bar sequence is empty"));
    }
    if bin_count == 0 {
        return Err(EngineError::invalid_input("bin count must be at least 1"));
    }
    if !(value_area_share > 0.0 && value_area_share <= 1.0) {
        return Err(EngineError::invalid_input(format!(
            "value area share {} is outside (0, 1]",
            value_area_share
        )));
    }
    if let Some((idx, defect)) = bars
        .iter()
        .enumerate()
        .find_map(|(idx, bar)| bar.profile_defect().map(|d| (idx, d)))
    {
        return Err(EngineError::invalid_input(format!("bar {}: {}", idx, defect)));
    }

    let closes: Vec<f64> = bars.iter().map(|bar| bar.close).collect();
    let (min_close, max_close) = get_min_max(&closes);

    // Degenerate range collapses to one zero-width bin
    let effective_bins = if max_close > min_close { bin_count } else { 1 };
    let mut profile = VolumeProfile::new(min_close, max_close, effective_bins);
    for bar in bars {
        profile.add_volume(bar.close, bar.volume);
    }

    let (total, prefix) = prefix_sums(&profile.bin_volumes);
    profile.total_volume = total;
    profile.poc_index = find_poc(&profile.bin_volumes);

    let (low, high, captured) =
        find_value_area(&prefix, profile.poc_index, total * value_area_share);
    profile.value_area = (low, high);
    profile.value_area_volume = captured;

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_profile_details {
        log::info!(
            "Profile over [{:.4}, {:.4}] in {} bins: POC bin {} ({:.4}), value area bins {}..={} holding {:.1}% of {:.0}",
            min_close,
            max_close,
            effective_bins,
            profile.poc_index,
            profile.poc_price(),
            low,
            high,
            profile.value_area_share() * 100.0,
            total
        );
        for (idx, volume) in profile.bin_volumes.iter().enumerate() {
            log::info!("   bin {:>3} @ {:.4}: {:.0}", idx, profile.bin_center(idx), volume);
        }
    }
    Ok(profile)
}

/// Running sums, `prefix[i]` = volume of bins `0..i`. Total is `prefix[n]`, so the
/// full range always compares equal to the total.
fn prefix_sums(volumes: &[f64]) -> (f64, Vec<f64>) {
    let mut prefix = Vec::with_capacity(volumes.len() + 1);
    let mut running = 0.0;
    prefix.push(running);
    for volume in volumes {
        running += volume;
        prefix.push(running);
    }
    (running, prefix)
}

/// Index of the highest-volume bin; ties go to the lowest price.
fn find_poc(volumes: &[f64]) -> usize {
    volumes
        .iter()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |(best_idx, best_vol), (idx, &vol)| {
            if vol > best_vol { (idx, vol) } else { (best_idx, best_vol) }
        })
        .0
}

/// Narrowest contiguous bin range containing `poc` whose volume reaches `target`.
/// Equal widths prefer more captured volume, then the lower range.
///
/// For each candidate low edge the smallest sufficient high edge is found; since
/// raising the low edge can only shrink the window, that high edge never moves down.
fn find_value_area(prefix: &[f64], poc: usize, target: f64) -> (usize, usize, f64) {
    let n_bins = prefix.len() - 1;
    let total = prefix[n_bins];
    if total <= 0.0 {
        return (poc, poc, 0.0);
    }

    // Prefix-sum differences can land a rounding error under an exact share
    let needed = target - total * 1e-12;
    let window = |low: usize, high: usize| prefix[high + 1] - prefix[low];
    let mut best: Option<(usize, usize, f64)> = None;
    let mut high = poc;

    for low in 0..=poc {
        while high + 1 < n_bins && window(low, high) < needed {
            high += 1;
        }
        let captured = window(low, high);
        if captured < needed {
            break;
        }
        let is_better = match best {
            None => true,
            Some((best_low, best_high, best_captured)) => {
                let width = high - low;
                let best_width = best_high - best_low;
                width < best_width || (width == best_width && captured > best_captured)
            }
        };
        if is_better {
            best = Some((low, high, captured));
        }
    }

    best.unwrap_or((0, n_bins - 1, total))
}
