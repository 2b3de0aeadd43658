//! Point-wise solve of the rate-and-state friction balance.
//!
//! With `X = exp(psi / a)`, friction is `f(V) = a * asinh(V / (2 V0) * X)`. The traction
//! `tau` must satisfy both `tau = load - eta * V` and `tau = sigma' * f(V)`. Eliminating `V`
//! leaves one monotone equation in `tau`,
//!
//! `h(tau) = (load - tau) / eta - (2 V0 / X) * sinh(tau / (a sigma')) = 0`,
//!
//! bracketed by `[0, load]`. A Newton step is taken when it stays inside the bracket and
//! shrinks faster than the step before last; bisection otherwise. The exponential makes
//! plain Newton crawl by one `a * sigma'` per iteration far from the root.

use std::f64::consts::LN_2;

/// Solver limits, taken from the configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverSettings {
    /// Convergence threshold on the traction update, relative to `a * sigma'`.
    pub tolerance: f64,
    pub max_iterations: u32,
}

/// One point's friction balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointProblem {
    /// Shear load before frictional resistance.
    pub load: f64,
    /// Effective compressive normal stress `sigma'`.
    pub effective_normal: f64,
    pub impedance: f64,
    pub a: f64,
    /// Reference slip rate `V0`.
    pub v0: f64,
    /// State in friction units, `psi = a * ln X`.
    pub psi: f64,
    /// Starting traction, usually the previous step's.
    pub guess: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointSolution {
    pub slip_rate: f64,
    pub shear_stress: f64,
    pub iterations: u32,
}

/// Solves `problem`; `None` when the iteration cap is reached first.
#[must_use]
pub fn solve(problem: &PointProblem, settings: &SolverSettings) -> Option<PointSolution> {
    let PointProblem { load, effective_normal, impedance, a, v0, psi, guess } = *problem;

    // A fault that is not loaded forward does not slip backwards either.
    if load <= 0.0 {
        return Some(PointSolution { slip_rate: 0.0, shear_stress: load, iterations: 0 });
    }
    let scale = a * effective_normal;
    if scale <= 0.0 {
        let slip_rate = load / impedance;
        return Some(PointSolution { slip_rate, shear_stress: 0.0, iterations: 0 });
    }

    let ln_c = (2.0 * v0).ln() - psi / a;
    let residual = |tau: f64| {
        let z = tau / scale;
        let up = (ln_c + z).exp();
        let down = (ln_c - z).exp();
        let value = (load - tau) / impedance - 0.5 * (up - down);
        let slope = -1.0 / impedance - 0.5 * (up + down) / scale;
        (value, slope)
    };

    let (mut lo, mut hi) = (0.0, load);
    let mut tau = guess.clamp(lo, hi);
    let (mut step, mut step_before) = (load, load);
    for iteration in 1..=settings.max_iterations {
        let (value, slope) = residual(tau);
        if value > 0.0 {
            lo = tau;
        } else {
            hi = tau;
        }

        let newton = tau - value / slope;
        let fast = (2.0 * value).abs() <= (step_before * slope).abs();
        let next = if newton.is_finite() && (lo..=hi).contains(&newton) && fast {
            newton
        } else {
            0.5 * (lo + hi)
        };
        step_before = step;
        step = next - tau;
        let converged = step.abs() <= settings.tolerance * scale;
        tau = next;
        if converged {
            return Some(PointSolution {
                slip_rate: ((load - tau) / impedance).max(0.0),
                shear_stress: tau,
                iterations: iteration,
            });
        }
    }
    None
}

/// `ln(sinh(x))` for `x > 0`, without overflow for large `x`.
#[must_use]
pub fn ln_sinh(x: f64) -> f64 {
    if x > 20.0 { x - LN_2 } else { x.sinh().ln() }
}

/// Friction state `psi` that balances traction `tau` at slip rate `v`.
#[must_use]
pub fn psi_for_traction(tau: f64, effective_normal: f64, v: f64, a: f64, v0: f64) -> f64 {
    let x = (tau / (a * effective_normal)).max(f64::MIN_POSITIVE);
    a * ((2.0 * v0 / v).ln() + ln_sinh(x))
}

/// Friction coefficient `a * asinh(V / (2 V0) * exp(psi / a))`.
#[must_use]
pub fn friction(v: f64, a: f64, v0: f64, psi: f64) -> f64 {
    a * (v / (2.0 * v0) * (psi / a).exp()).asinh()
}
