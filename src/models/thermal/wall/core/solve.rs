//! Core wall field solver.

mod relaxation;
mod residual;

use log::{debug, trace, warn};
use uom::si::{
    f64::{Ratio, TemperatureInterval, ThermodynamicTemperature},
    ratio::{percent, ratio},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use super::{Boundaries, FieldSolution, Residual, SolverConfig, Status, Wall};

use relaxation::{Relaxation, RobinNode};
use residual::Change;

/// Relaxes the wall temperature field to steady state.
///
/// Every node starts at the configured guess. Each sweep updates the nodes
/// from the hot face to the cold face and the loop stops as soon as the
/// largest nodal change drops below the tolerance, or after
/// `config.max_steps` sweeps. Hitting the sweep limit is reported through
/// [`Status::MaxIters`], never as an error.
pub(super) fn solve(wall: &Wall, boundaries: &Boundaries, config: &SolverConfig) -> FieldSolution {
    let grid = wall.grid();
    let biot = boundaries.biot(wall);

    let hot = RobinNode {
        beta: biot.hot.get::<ratio>(),
        ambient: boundaries.hot.ambient().get::<degree_celsius>(),
    };
    let cold = RobinNode {
        beta: biot.cold.get::<ratio>(),
        ambient: boundaries.cold.ambient().get::<degree_celsius>(),
    };
    let tol = config.tol.get::<delta_kelvin>();

    let mut relaxation = Relaxation::new(
        grid.len(),
        config.initial_guess.get::<degree_celsius>(),
        hot,
        cold,
    );

    let mut last_change = None;
    let mut iterations = 0;
    let mut status = Status::MaxIters;

    for step in 1..=config.max_steps {
        relaxation.sweep();
        let change = Change::between(relaxation.current(), relaxation.previous());
        iterations = step;
        last_change = Some(change);

        trace!(
            "sweep {step}: max change {:.3e} K ({:.3e} %)",
            change.absolute, change.percent
        );

        if change.absolute < tol {
            status = Status::Converged;
            break;
        }
    }

    match (status, last_change) {
        (Status::Converged, Some(change)) => debug!(
            "wall field converged after {iterations} sweeps: max change {:.3e} K",
            change.absolute
        ),
        (_, Some(change)) => warn!(
            "wall field hit the sweep limit ({iterations}) with max change {:.3e} K ({:.3e} %)",
            change.absolute, change.percent
        ),
        (_, None) => warn!("wall field solve performed no sweeps"),
    }

    let temperatures = relaxation
        .into_current()
        .into_iter()
        .map(ThermodynamicTemperature::new::<degree_celsius>)
        .collect();

    let residual = last_change.map(|change| Residual {
        absolute: TemperatureInterval::new::<delta_kelvin>(change.absolute),
        relative: Ratio::new::<percent>(change.percent),
    });

    FieldSolution::new(temperatures, grid, iterations, residual, status)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use uom::si::{
        f64::{HeatTransfer, Length, ThermalConductivity},
        heat_transfer::watt_per_square_meter_kelvin,
        length::meter,
        thermal_conductivity::watt_per_meter_kelvin,
    };

    use crate::models::thermal::wall::core::{
        Face,
        test_support::{celsius, furnace_wall, to_celsius},
    };

    fn config(tol: f64) -> SolverConfig {
        SolverConfig::default().with_tol(TemperatureInterval::new::<delta_kelvin>(tol))
    }

    /// Steady-state field of the discrete problem: a straight line through the
    /// wall, with each face offset from its ambient by `q / h`.
    fn exact_field(wall: &Wall, boundaries: &Boundaries) -> Vec<f64> {
        let t_hot = boundaries.hot.ambient().get::<degree_celsius>();
        let t_cold = boundaries.cold.ambient().get::<degree_celsius>();
        let h_hot = boundaries.hot.h().get::<watt_per_square_meter_kelvin>();
        let h_cold = boundaries.cold.h().get::<watt_per_square_meter_kelvin>();
        let k = wall.conductivity().get::<watt_per_meter_kelvin>();
        let thickness = wall.thickness().get::<meter>();

        let q = (t_hot - t_cold) / (1.0 / h_hot + thickness / k + 1.0 / h_cold);
        let t_surface = t_hot - q / h_hot;

        wall.grid()
            .positions()
            .iter()
            .map(|x| t_surface - q * x.get::<meter>() / k)
            .collect()
    }

    #[test]
    fn furnace_wall_converges_to_linear_profile() {
        let (wall, boundaries) = furnace_wall();
        let solution = solve(&wall, &boundaries, &SolverConfig::default());

        assert_eq!(solution.status, Status::Converged);
        assert!(solution.iterations < 1_000_000);
        assert!(solution.iterations > 1);
        assert_eq!(solution.temperatures().len(), 6);
        assert_relative_eq!(solution.dx().get::<meter>(), 0.04, epsilon = 1e-15);
        assert_eq!(solution.thickness(), wall.thickness());

        let residual = solution.residual.expect("at least one sweep");
        assert!(residual.absolute.get::<delta_kelvin>() < 1e-9);

        let field = to_celsius(solution.temperatures());
        for (actual, expected) in field.iter().zip(exact_field(&wall, &boundaries)) {
            assert_relative_eq!(*actual, expected, epsilon = 1e-6);
        }
        assert_relative_eq!(field[0], 1056.027_397_260, epsilon = 1e-6);
        assert_relative_eq!(field[5], 469.726_027_397, epsilon = 1e-6);

        // Strictly decreasing, with each face pulled toward its ambient.
        assert!(field.windows(2).all(|pair| pair[0] > pair[1]));
        assert!(field[0] < 1100.0 && field[0] > field[1]);
        assert!(field[5] > 30.0);
    }

    #[test]
    fn tighter_tolerance_never_loosens_the_result() {
        let (wall, boundaries) = furnace_wall();

        let solutions: Vec<_> = [1e-3, 1e-6, 1e-9, 1e-12]
            .into_iter()
            .map(|tol| solve(&wall, &boundaries, &config(tol)))
            .collect();

        for pair in solutions.windows(2) {
            let (loose, tight) = (&pair[0], &pair[1]);
            assert!(tight.iterations >= loose.iterations);

            let loose = loose.residual.unwrap().relative.get::<percent>();
            let tight = tight.residual.unwrap().relative.get::<percent>();
            assert!(tight <= loose, "{tight} > {loose}");
        }
    }

    #[test]
    fn sweep_limit_is_not_an_error() {
        let (wall, boundaries) = furnace_wall();
        let solution = solve(
            &wall,
            &boundaries,
            &SolverConfig::default().with_max_steps(3),
        );

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iterations, 3);

        let residual = solution.residual.unwrap();
        assert!(residual.absolute.get::<delta_kelvin>() > 1.0);
        assert!(residual.relative.get::<percent>() > 0.0);
    }

    #[test]
    fn zero_sweeps_returns_initial_guess() {
        let (wall, boundaries) = furnace_wall();
        let solution = solve(
            &wall,
            &boundaries,
            &SolverConfig::default().with_max_steps(0),
        );

        assert_eq!(solution.iterations, 0);
        assert_eq!(solution.residual, None);
        assert_eq!(solution.status, Status::MaxIters);
        for t in to_celsius(solution.temperatures()) {
            assert_relative_eq!(t, 100.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn two_node_wall() {
        let (wall, boundaries) = furnace_wall();
        let wall = Wall::new(wall.thickness(), 2, wall.conductivity()).unwrap();
        let solution = solve(&wall, &boundaries, &SolverConfig::default());

        assert_eq!(solution.status, Status::Converged);
        let field = to_celsius(solution.temperatures());
        for (actual, expected) in field.iter().zip(exact_field(&wall, &boundaries)) {
            assert_relative_eq!(*actual, expected, epsilon = 1e-6);
        }
    }

    #[test]
    fn initial_guess_at_equilibrium_converges_in_one_sweep() {
        let wall = Wall::new(
            Length::new::<meter>(0.1),
            5,
            ThermalConductivity::new::<watt_per_meter_kelvin>(1.0),
        )
        .unwrap();
        let face = Face::new(
            celsius(250.0),
            HeatTransfer::new::<watt_per_square_meter_kelvin>(10.0),
        )
        .unwrap();
        let boundaries = Boundaries {
            hot: face,
            cold: face,
        };
        let config = SolverConfig {
            initial_guess: celsius(250.0),
            ..SolverConfig::default()
        };

        let solution = solve(&wall, &boundaries, &config);
        assert_eq!(solution.iterations, 1);
        assert_eq!(solution.status, Status::Converged);
    }

    #[test]
    fn zero_field_uses_magnitude_floor() {
        let wall = Wall::new(
            Length::new::<meter>(0.1),
            4,
            ThermalConductivity::new::<watt_per_meter_kelvin>(1.0),
        )
        .unwrap();
        let face = Face::new(
            celsius(0.0),
            HeatTransfer::new::<watt_per_square_meter_kelvin>(10.0),
        )
        .unwrap();
        let config = SolverConfig {
            initial_guess: celsius(0.0),
            ..SolverConfig::default()
        };

        let solution = solve(
            &wall,
            &Boundaries {
                hot: face,
                cold: face,
            },
            &config,
        );

        let residual = solution.residual.unwrap();
        assert!(residual.relative.get::<percent>().is_finite());
        assert!(residual.relative.get::<percent>() < 1e-6);
    }

    #[test]
    fn negative_convection_coefficient_yields_unphysical_field() {
        let (wall, boundaries) = furnace_wall();
        let boundaries = Boundaries {
            hot: Face::new_unchecked(
                celsius(1100.0),
                HeatTransfer::new::<watt_per_square_meter_kelvin>(-200.0),
            ),
            ..boundaries
        };

        let solution = solve(&wall, &boundaries, &SolverConfig::default());

        // The relaxation still settles, but the hot face ends up hotter than
        // the furnace gas heating it.
        assert_eq!(solution.status, Status::Converged);
        let field = to_celsius(solution.temperatures());
        assert!(field[0] > 1100.0, "{field:?}");
        assert_relative_eq!(field[0], 1123.430_656_934_8, epsilon = 1e-6);
    }

    #[test]
    fn zero_conductivity_yields_nan_field() {
        let (wall, boundaries) = furnace_wall();
        let wall = Wall::new_unchecked(
            wall.thickness(),
            wall.nodes(),
            ThermalConductivity::new::<watt_per_meter_kelvin>(0.0),
        );

        let solution = solve(&wall, &boundaries, &config(1e-9).with_max_steps(10));

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iterations, 10);
        assert_eq!(solution.temperatures().len(), 6);
        assert!(solution.temperatures().iter().all(|t| t.value.is_nan()));
        let residual = solution.residual.unwrap();
        assert!(residual.absolute.value.is_nan());
    }

    fn arb_face(t_range: std::ops::Range<f64>) -> impl Strategy<Value = Face> {
        (t_range, 20.0f64..200.0).prop_map(|(t, h)| {
            Face::new(
                celsius(t),
                HeatTransfer::new::<watt_per_square_meter_kelvin>(h),
            )
            .unwrap()
        })
    }

    fn arb_wall() -> impl Strategy<Value = Wall> {
        (0.1f64..0.4, 2usize..10, 0.5f64..3.0).prop_map(|(thickness, nodes, k)| {
            Wall::new(
                Length::new::<meter>(thickness),
                nodes,
                ThermalConductivity::new::<watt_per_meter_kelvin>(k),
            )
            .unwrap()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn symmetric_faces_give_uniform_field(
            wall in arb_wall(),
            face in arb_face(0.0..1200.0),
            guess in 0.0f64..1200.0,
        ) {
            let config = SolverConfig {
                initial_guess: celsius(guess),
                ..config(1e-10)
            };
            let solution = solve(&wall, &Boundaries { hot: face, cold: face }, &config);

            prop_assert_eq!(solution.status, Status::Converged);
            let ambient = face.ambient().get::<degree_celsius>();
            for t in to_celsius(solution.temperatures()) {
                prop_assert!((t - ambient).abs() < 1e-4, "{} vs {}", t, ambient);
            }
        }

        #[test]
        fn hot_to_cold_gives_non_increasing_field(
            wall in arb_wall(),
            hot in arb_face(600.0..1200.0),
            cold in arb_face(0.0..500.0),
            guess in 0.0f64..1200.0,
        ) {
            let config = SolverConfig {
                initial_guess: celsius(guess),
                ..config(1e-9)
            };
            let solution = solve(&wall, &Boundaries { hot, cold }, &config);

            prop_assert_eq!(solution.status, Status::Converged);
            prop_assert!(solution.iterations <= config.max_steps);
            let field = to_celsius(solution.temperatures());
            for pair in field.windows(2) {
                prop_assert!(pair[1] <= pair[0] + 1e-6, "{:?}", field);
            }
        }

        #[test]
        fn iterations_never_exceed_limit(
            wall in arb_wall(),
            hot in arb_face(600.0..1200.0),
            cold in arb_face(0.0..500.0),
            max_steps in 1usize..200,
        ) {
            let config = config(1e-9).with_max_steps(max_steps);
            let solution = solve(&wall, &Boundaries { hot, cold }, &config);

            prop_assert!(solution.iterations <= max_steps);
            if solution.status == Status::MaxIters {
                prop_assert_eq!(solution.iterations, max_steps);
            }
        }
    }
}
