//! Closed-form inversions of the future-value-of-annuity formula
//!
//! Both solvers compound monthly (`annual_return / 12`). Degenerate but legal
//! inputs produce sentinel values, never errors: an unreachable target is
//! `f64::INFINITY` years, a target already met is 0.

/// Years until `current_net_worth` plus a level monthly contribution reaches
/// `target`, capped at the years remaining to the planned retirement age.
///
/// The cap means the result is "time to reach the target or retirement,
/// whichever is sooner"; dashboard consumers rely on never seeing a FIRE age
/// past the planned retirement age. A non-positive contribution with a
/// shortfall returns infinity (and is not capped), as does a shortfall that
/// a negative return makes unreachable at any horizon.
pub fn years_to_target(
    current_net_worth: f64,
    monthly_contribution: f64,
    target: f64,
    annual_return: f64,
    current_age: u8,
    retirement_age: u8,
) -> f64 {
    if current_net_worth >= target {
        return 0.0;
    }
    if monthly_contribution <= 0.0 {
        return f64::INFINITY;
    }

    let monthly_return = annual_return / 12.0;
    let shortfall = target - current_net_worth;

    let months = if monthly_return == 0.0 {
        // Zero-rate limit of the annuity inversion: pure linear saving
        shortfall / monthly_contribution
    } else {
        let log_arg = shortfall * monthly_return / monthly_contribution + 1.0;
        if log_arg <= 0.0 {
            // Negative drift outruns the contribution stream; the target is
            // never reached
            return f64::INFINITY;
        }
        log_arg.ln() / (1.0 + monthly_return).ln()
    };

    let years = (months / 12.0).max(0.0);
    years.min(retirement_age as f64 - current_age as f64)
}

/// Level monthly contribution required to grow `current_net_worth` to
/// `target` over `years`, with monthly compounding at `annual_return`.
///
/// Returns 0 when the target is already met, the horizon is non-positive or
/// non-finite, or the current balance future-values past the target on its
/// own.
pub fn contribution_needed(
    current_net_worth: f64,
    target: f64,
    years: f64,
    annual_return: f64,
) -> f64 {
    if years <= 0.0 || !years.is_finite() || current_net_worth >= target {
        return 0.0;
    }

    let monthly_return = annual_return / 12.0;
    let months = years * 12.0;

    let future_value = current_net_worth * (1.0 + monthly_return).powf(months);
    let remaining = target - future_value;
    if remaining <= 0.0 {
        return 0.0;
    }

    let annuity_factor = if monthly_return == 0.0 {
        months
    } else {
        ((1.0 + monthly_return).powf(months) - 1.0) / monthly_return
    };

    remaining / annuity_factor
}
