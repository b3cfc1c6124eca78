//! Process-wide tunables, read once from the environment.

use std::sync::OnceLock;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

static PARALLEL_MIN_PIXELS: OnceLock<usize> = OnceLock::new();

/// Grids with at least this many pixels get a row-parallel luminance pass.
pub(crate) fn parallel_min_pixels() -> usize {
    *PARALLEL_MIN_PIXELS.get_or_init(|| parse_env_usize("WIFI_QR_PARALLEL_MIN_PIXELS", 512 * 512))
}

static MAX_SYMBOL_CANDIDATES: OnceLock<usize> = OnceLock::new();

/// How many detected symbols the decoder tries before giving up.
pub(crate) fn max_symbol_candidates() -> usize {
    *MAX_SYMBOL_CANDIDATES
        .get_or_init(|| parse_env_usize("WIFI_QR_MAX_SYMBOL_CANDIDATES", 4).clamp(1, 16))
}
