// src/domain/histogram.rs

use crate::domain::format::format_currency;
use serde::Serialize;

pub const DEFAULT_BIN_COUNT: usize = 8;

/// One bucket of the price distribution as the dashboard sees it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBin {
    pub label: String,
    pub count: usize,
}

// Working state while counting; bounds never leave this module.
struct Bucket {
    lo: f64,
    hi: f64,
    count: usize,
}

/// Split `[min, max]` of `values` into `bins` equal-width buckets.
///
/// The top bucket is closed so the maximum lands in it. When every value is
/// the same there is nothing to split and a single bucket is returned.
pub fn build_histogram(values: &[f64], bins: usize) -> Vec<PriceBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        return vec![PriceBin {
            label: format_currency(min),
            count: values.len(),
        }];
    }

    let step = (max - min) / bins as f64;
    let mut buckets: Vec<Bucket> = (0..bins)
        .map(|i| Bucket {
            lo: min + i as f64 * step,
            hi: min + (i + 1) as f64 * step,
            count: 0,
        })
        .collect();

    for v in values {
        // Float division can push the max one past the end.
        let idx = (((v - min) / step).floor() as usize).min(bins - 1);
        buckets[idx].count += 1;
    }

    buckets
        .into_iter()
        .map(|b| PriceBin {
            label: format!("{}–{}", format_currency(b.lo), format_currency(b.hi)),
            count: b.count,
        })
        .collect()
}
