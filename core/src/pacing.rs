use rand::Rng;

/// Uniform random delay in `[min_secs, max_secs]` seconds, used to
/// desynchronize repeated submissions against the target service.
///
/// An inverted bound pair collapses to `min_secs`.
pub fn random_delay(min_secs: f64, max_secs: f64) -> f64 {
    let hi = max_secs.max(min_secs);
    rand::thread_rng().gen_range(min_secs..=hi)
}
