use crate::constants::{GRAVITY, NEWTON_MAX_ITERATIONS, NEWTON_TOLERANCE};
use crate::control::scenario::ScenarioConfig;

use super::model::{self, DragRegime};

/// Summary of a full flight from emission to landing. Pure value,
/// recomputed on demand.
#[derive(Debug, Clone, Copy)]
pub struct FlightSummary {
    pub range: f64,
    pub height: f64,
    pub time: f64,
    pub v_final: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct RootEstimate {
    pub root: f64,
    pub iterations: usize,
    pub converged: bool,
}

/// Newton-Raphson with an explicit tolerance and iteration cap. The closure
/// returns `(value, derivative)` at the current estimate. A near-zero
/// derivative ends the search at the previous estimate instead of dividing
/// through it.
pub fn newton_raphson<F>(f: F, seed: f64, tolerance: f64, max_iterations: usize) -> RootEstimate
where
    F: Fn(f64) -> (f64, f64),
{
    let mut estimate = seed;
    for iteration in 0..max_iterations {
        let (value, derivative) = f(estimate);
        if value.abs() < tolerance {
            return RootEstimate {
                root: estimate,
                iterations: iteration,
                converged: true,
            };
        }
        if derivative.abs() < f64::EPSILON {
            return RootEstimate {
                root: estimate,
                iterations: iteration,
                converged: false,
            };
        }
        estimate -= value / derivative;
    }

    let (value, _) = f(estimate);
    RootEstimate {
        root: estimate,
        iterations: max_iterations,
        converged: value.abs() < tolerance,
    }
}

/// Closed-form flight summary for a scenario at the given launch settings.
///
/// Degenerate speeds fail soft with a zeroed summary; the solver never
/// signals an error (display-side clamping handles implausible output).
pub fn solve(scenario: &ScenarioConfig, angle_deg: f64, speed: f64) -> FlightSummary {
    let h0 = scenario.solver_height();
    if speed <= 0.0 {
        return FlightSummary {
            range: 0.0,
            height: h0,
            time: 0.0,
            v_final: 0.0,
        };
    }

    let angle_rad = angle_deg.to_radians();
    let (vx0, vy0) = model::launch_components(angle_rad, speed);

    match scenario.drag_regime {
        DragRegime::Ballistic => {
            let time = 2.0 * vy0 / GRAVITY;
            FlightSummary {
                range: vx0 * time,
                height: vy0 * vy0 / (2.0 * GRAVITY),
                time,
                // Speed is conserved over a symmetric drag-free arc.
                v_final: speed,
            }
        }
        DragRegime::LinearDrag => {
            let estimate = newton_raphson(
                |t| {
                    let state =
                        model::flight_state(DragRegime::LinearDrag, h0, angle_rad, speed, t);
                    (state.y, state.vy)
                },
                scenario.newton_seed(),
                NEWTON_TOLERANCE,
                NEWTON_MAX_ITERATIONS,
            );

            let time = estimate.root.max(0.0);
            let landing = model::flight_state(DragRegime::LinearDrag, h0, angle_rad, speed, time);

            let t_apex = model::apex_time(DragRegime::LinearDrag, vy0);
            let height = if t_apex <= 0.0 {
                h0
            } else {
                model::flight_state(DragRegime::LinearDrag, h0, angle_rad, speed, t_apex).y
            };

            FlightSummary {
                range: landing.x,
                height,
                time,
                v_final: landing.speed(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn scenario(id: u8) -> &'static ScenarioConfig {
        ScenarioConfig::get(id).unwrap()
    }

    #[test]
    fn test_reference_flight_without_drag() {
        // Scenario 1 at 45° and 5 m/s: flight of 0.72 s peaking 0.64 m above
        // the nozzle, with launch speed recovered at landing.
        let summary = solve(scenario(1), 45.0, 5.0);

        assert_abs_diff_eq!(summary.time, 0.72, epsilon = 0.01);
        assert_abs_diff_eq!(summary.height, 0.64, epsilon = 0.01);
        assert_eq!(summary.v_final, 5.0);

        let vx0 = 5.0 * 45f64.to_radians().cos();
        assert_abs_diff_eq!(summary.range, vx0 * summary.time, epsilon = 1e-12);
    }

    #[test]
    fn test_speed_conserved_without_drag() {
        for angle in [15.0, 30.0, 45.0, 60.0, 75.0] {
            for speed in [1.0, 2.5, 4.0, 6.0] {
                let summary = solve(scenario(1), angle, speed);
                assert_eq!(summary.v_final, speed);
            }
        }
    }

    #[test]
    fn test_flight_time_and_range_positive() {
        for id in 1..=3 {
            for angle in [15.0, 30.0, 45.0, 60.0, 75.0] {
                for speed in [1.0, 3.5, 6.0] {
                    let summary = solve(scenario(id), angle, speed);
                    assert!(
                        summary.time > 0.0,
                        "scenario {} angle {} speed {}: time {}",
                        id,
                        angle,
                        speed,
                        summary.time
                    );
                    assert!(summary.range >= 0.0);
                }
            }
        }
    }

    #[test]
    fn test_drag_always_dissipates_speed() {
        for id in [2, 3] {
            for angle in [15.0, 45.0, 75.0] {
                for speed in [1.0, 3.5, 6.0] {
                    let summary = solve(scenario(id), angle, speed);
                    assert!(
                        summary.v_final < speed,
                        "scenario {} angle {} speed {}: v_final {}",
                        id,
                        angle,
                        speed,
                        summary.v_final
                    );
                }
            }
        }
    }

    #[test]
    fn test_range_and_height_grow_with_speed() {
        for id in 1..=3 {
            let mut previous = solve(scenario(id), 45.0, 1.0);
            for speed in [2.0, 3.0, 4.0, 5.0, 6.0] {
                let summary = solve(scenario(id), 45.0, speed);
                assert!(
                    summary.range > previous.range,
                    "scenario {} speed {}: range {} vs {}",
                    id,
                    speed,
                    summary.range,
                    previous.range
                );
                assert!(summary.height > previous.height);
                previous = summary;
            }
        }
    }

    #[test]
    fn test_high_mount_flight_converges() {
        // Scenario 3 releases at 1.0 m; a 30° launch at 2.5 m/s must yield a
        // finite landing time and an apex at or above the release height.
        let summary = solve(scenario(3), 30.0, 2.5);

        assert!(summary.time.is_finite() && summary.time > 0.0);
        assert!(summary.height >= 1.0, "apex {} below release", summary.height);
        assert!(summary.range > 0.0);
    }

    #[test]
    fn test_newton_converges_across_input_grid() {
        for id in [2, 3] {
            let config = scenario(id);
            for angle_deg in (5..=85).step_by(10) {
                for tenth in 10..=60 {
                    let speed = tenth as f64 / 10.0;
                    let angle_rad = (angle_deg as f64).to_radians();
                    let estimate = newton_raphson(
                        |t| {
                            let state = model::flight_state(
                                DragRegime::LinearDrag,
                                config.solver_height(),
                                angle_rad,
                                speed,
                                t,
                            );
                            (state.y, state.vy)
                        },
                        config.newton_seed(),
                        NEWTON_TOLERANCE,
                        NEWTON_MAX_ITERATIONS,
                    );
                    assert!(
                        estimate.converged,
                        "scenario {} angle {} speed {}: no convergence from seed",
                        id, angle_deg, speed
                    );
                    assert!(estimate.root.is_finite() && estimate.root >= 0.0);
                }
            }
        }
    }

    #[test]
    fn test_newton_flat_derivative_guard() {
        // Constant function: derivative is exactly zero everywhere, so the
        // search must stop at the seed rather than divide by zero.
        let estimate = newton_raphson(|_| (1.0, 0.0), 0.5, 1e-9, 15);
        assert_eq!(estimate.root, 0.5);
        assert!(!estimate.converged);
    }

    #[test]
    fn test_newton_exact_root() {
        let estimate = newton_raphson(|t| (t * t - 4.0, 2.0 * t), 3.0, 1e-12, 25);
        assert!(estimate.converged);
        assert_relative_eq!(estimate.root, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_degenerate_speed_fails_soft() {
        for id in 1..=3 {
            let summary = solve(scenario(id), 45.0, 0.0);
            assert_eq!(summary.time, 0.0);
            assert_eq!(summary.range, 0.0);
            assert_eq!(summary.v_final, 0.0);
            assert_eq!(summary.height, scenario(id).solver_height());
        }
    }
}
