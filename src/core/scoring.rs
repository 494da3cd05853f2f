//! Scoring and pacing rules, driven entirely by the session configuration.

use crate::config::GameConfig;

/// Points for `lines` rows cleared in a single lock. Zero lines award zero.
pub fn line_clear_score(config: &GameConfig, lines: u32) -> u32 {
    config
        .line_scores
        .get(lines as usize)
        .copied()
        .unwrap_or(0)
}

/// Gravity interval for a level: the base interval minus a fixed step per
/// level gained, floored at the configured minimum. Level 1 pays the full
/// base interval.
pub fn fall_interval_ms(config: &GameConfig, level: u32) -> u32 {
    let reduction = config.step_ms.saturating_mul(level.saturating_sub(1));
    config
        .base_interval_ms
        .saturating_sub(reduction)
        .max(config.min_interval_ms)
}
