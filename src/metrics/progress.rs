//! Progress toward a target amount, optionally relative to a historical
//! baseline

/// Percentage of progress from `baseline` toward `target`, clamped to
/// [0, 100].
///
/// A baseline at or beyond the target counts as reached (100), as does a
/// current value at or above the target regardless of baseline. The zero
/// target is the break-even milestone: a household still in debt reports
/// progress from its starting debt toward zero, while a positive start that
/// has since gone negative reports no progress.
pub fn progress_percent(current_net_worth: f64, target: f64, baseline: f64) -> f64 {
    if target == 0.0 && current_net_worth < 0.0 {
        if baseline < 0.0 {
            let progress = current_net_worth - baseline;
            let span = 0.0 - baseline;
            return (progress / span * 100.0).clamp(0.0, 100.0);
        }
        return 0.0;
    }

    if current_net_worth >= target {
        return 100.0;
    }

    let progress = current_net_worth - baseline;
    let span = target - baseline;
    if span <= 0.0 {
        return 100.0;
    }

    (progress / span * 100.0).clamp(0.0, 100.0)
}
