//! String similarity metrics
//!
//! The engine treats the metric as a provided primitive: any symmetric, pure
//! function returning a score in `[0, 1]` (1.0 meaning identical) will do.

/// Symmetric string similarity in `[0, 1]`
pub trait DistanceMetric: Send + Sync {
    /// Score the similarity of `a` and `b`
    fn distance(&self, a: &str, b: &str) -> f64;
}

/// Jaro-Winkler similarity, the default metric
#[derive(Debug, Clone, Copy, Default)]
pub struct JaroWinkler;

impl DistanceMetric for JaroWinkler {
    fn distance(&self, a: &str, b: &str) -> f64 {
        strsim::jaro_winkler(a, b)
    }
}

impl<F> DistanceMetric for F
where
    F: Fn(&str, &str) -> f64 + Send + Sync,
{
    fn distance(&self, a: &str, b: &str) -> f64 {
        self(a, b)
    }
}
