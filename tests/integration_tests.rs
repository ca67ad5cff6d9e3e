use std::io::Cursor;

use approx::assert_abs_diff_eq;
use atlas_launch::telemetry_system::export::{read_csv, read_snapshot, write_csv, write_snapshot};
use atlas_launch::{
    run_simulation, RocketConfiguration, SimulationEngine, SimulationTrace, TableStride,
    TraceSeries,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const G0: f64 = 9.80665;

// Random configuration inside the ranges the parameter editor accepts
fn random_configuration(rng: &mut StdRng) -> RocketConfiguration {
    RocketConfiguration {
        booster_count: rng.gen_range(1..=3),
        srb_count: rng.gen_range(0..=5),
        booster_thrust: rng.gen_range(1_000.0..100_000.0),
        booster_fuel_mass: rng.gen_range(100_000.0..1_000_000.0),
        srb_fuel_mass: rng.gen_range(0.0..100_000.0),
        payload_mass: rng.gen_range(0.0..20_000.0),
        initial_altitude: rng.gen_range(0.0..8_000.0),
        ..RocketConfiguration::default()
    }
}

#[test]
fn test_default_launch_ascends_for_250_seconds() {
    let run = run_simulation(&RocketConfiguration::default());
    let trace = &run.trace;

    assert_eq!(trace.len(), 2501);
    assert_eq!(trace.acceleration().len(), 2501);
    assert_eq!(trace.time()[2500], 250.0);

    for i in 1..trace.len() {
        assert_eq!(trace.time()[i], i as f64 / 10.0, "Clock drifted at step {}", i);
        assert_abs_diff_eq!(trace.time()[i] - trace.time()[i - 1], 0.1, epsilon = 1e-9);
    }

    let altitude = trace.altitude();
    assert!(
        altitude[2500] > altitude[0],
        "Rocket should gain altitude. Start: {:.1} m, end: {:.1} m",
        altitude[0],
        altitude[2500]
    );
    assert!(
        altitude[2500] > 50_000.0,
        "Atlas V should be well above 50 km after 250 s, got {:.1} km",
        altitude[2500] / 1000.0
    );
    println!(
        "t=250s | Alt: {:.1} km | Vel: {:.1} m/s",
        altitude[2500] / 1000.0,
        trace.velocity()[2500]
    );
}

#[test]
fn test_fuel_never_increases_and_floors_at_zero() {
    let mut rng = StdRng::seed_from_u64(1150);

    for _ in 0..20 {
        let config = random_configuration(&mut rng);
        let mut engine = SimulationEngine::new(&config);
        let mut booster_fuel = config.booster_fuel_mass;
        let mut srb_fuel = config.srb_fuel_mass;
        let mut booster_cut = false;
        let mut srb_cut = false;

        while engine.step() {
            let state = engine.working_state();
            assert!(state.booster.fuel_mass <= booster_fuel, "{:?}", config);
            assert!(state.srb.fuel_mass <= srb_fuel, "{:?}", config);
            assert!(state.booster.fuel_mass >= 0.0);
            assert!(state.srb.fuel_mass >= 0.0);

            if state.booster.fuel_mass == 0.0 {
                assert_eq!(state.booster.get_thrust(), 0.0);
            }
            if state.srb.fuel_mass == 0.0 {
                assert_eq!(state.srb.get_thrust(), 0.0);
            }
            // Cutoff is permanent
            if booster_cut {
                assert_eq!(state.booster.get_thrust(), 0.0);
            }
            if srb_cut {
                assert_eq!(state.srb.get_thrust(), 0.0);
            }

            booster_fuel = state.booster.fuel_mass;
            srb_fuel = state.srb.fuel_mass;
            booster_cut = state.booster.get_thrust() == 0.0;
            srb_cut = state.srb.get_thrust() == 0.0;
        }
    }
}

#[test]
fn test_srbs_detach_once_at_step_1150() {
    // Enough solid fuel that the boosters are still burning at separation
    let config = RocketConfiguration {
        srb_fuel_mass: 120_000.0,
        ..RocketConfiguration::default()
    };
    let mut engine = SimulationEngine::new(&config);
    let mut transitions = Vec::new();
    let mut was_detached = false;
    let mut srb_fuel_at_separation = None;

    while engine.step() {
        let step = engine.current_step();
        let state = engine.working_state();
        let structure = engine.structure();

        if state.srb_detached() != was_detached {
            transitions.push(step);
            was_detached = state.srb_detached();
            srb_fuel_at_separation = Some(state.srb.fuel_mass);
        }

        if step >= 1150 {
            let expected_mass = structure.common_stage_mass
                + structure.booster_count as f64
                    * (structure.booster_dry_mass + state.booster.fuel_mass)
                + structure.payload_mass;
            assert_eq!(state.total_mass(structure), expected_mass);
            assert_eq!(
                state.total_thrust(structure),
                structure.booster_count as f64 * state.booster.get_thrust()
            );
            assert_eq!(Some(state.srb.fuel_mass), srb_fuel_at_separation);
        }
    }

    assert_eq!(transitions, vec![1150]);
    assert!(
        srb_fuel_at_separation.unwrap_or(0.0) > 0.0,
        "SRBs should separate with fuel left"
    );
}

#[test]
fn test_free_fall_without_thrust() {
    let config = RocketConfiguration {
        booster_thrust: 0.0,
        srb_count: 0,
        initial_altitude: 1_000.0,
        ..RocketConfiguration::default()
    };
    let run = SimulationEngine::with_steps(&config, 20).run();
    let trace = &run.trace;

    // Acceleration is signed positive upwards
    assert_abs_diff_eq!(trace.acceleration()[0], -G0, epsilon = 1e-2);
    for i in 0..10 {
        assert_abs_diff_eq!(trace.acceleration()[i], -G0, epsilon = 1e-2);
    }
    assert!(trace.velocity()[10] < 0.0);
    assert!(trace.altitude()[20] < 1_000.0);
    assert_eq!(run.events.booster_burnout_step, None);
}

#[test]
fn test_heavier_payload_flies_lower() {
    let light = run_simulation(&RocketConfiguration::default());
    let heavy = run_simulation(&RocketConfiguration {
        payload_mass: 15_000.0,
        ..RocketConfiguration::default()
    });

    assert!(light.trace.altitude()[2500] > heavy.trace.altitude()[2500]);
}

#[test]
fn test_more_srbs_climb_faster_before_separation() {
    let none = SimulationEngine::with_steps(
        &RocketConfiguration {
            srb_count: 0,
            ..RocketConfiguration::default()
        },
        1150,
    )
    .run();
    let five = SimulationEngine::with_steps(
        &RocketConfiguration {
            srb_count: 5,
            ..RocketConfiguration::default()
        },
        1150,
    )
    .run();

    assert!(five.trace.altitude()[1150] > none.trace.altitude()[1150]);
    assert_eq!(none.events.srb_separation_step, Some(1150));
}

#[test]
fn test_runs_are_independent_and_deterministic() {
    let config = RocketConfiguration::default();
    let variant = RocketConfiguration {
        srb_count: 5,
        ..config.clone()
    };

    let (first, second) = std::thread::scope(|scope| {
        let a = scope.spawn(|| run_simulation(&config));
        let b = scope.spawn(|| run_simulation(&variant));
        (a.join(), b.join())
    });
    let first = first.expect("first run");
    let second = second.expect("second run");

    assert_eq!(first.trace, run_simulation(&config).trace);
    assert_eq!(second.trace, run_simulation(&variant).trace);
    assert_ne!(first.trace, second.trace);
}

#[test]
fn test_csv_export_round_trip() {
    let run = run_simulation(&RocketConfiguration::default());
    let mut buffer = Vec::new();
    write_csv(&mut buffer, &run.trace).expect("write csv");

    let samples = read_csv(Cursor::new(buffer)).expect("read csv");
    assert_eq!(samples.len(), 2501);

    let restored = SimulationTrace::from_samples(&samples);
    for (original, parsed) in run.trace.samples().zip(restored.samples()) {
        assert_abs_diff_eq!(parsed.time, original.time, epsilon = 0.05 + 1e-9);
        assert_abs_diff_eq!(parsed.acceleration, original.acceleration, epsilon = 5e-4 + 1e-9);
        assert_abs_diff_eq!(parsed.velocity, original.velocity, epsilon = 5e-4 + 1e-9);
        assert_abs_diff_eq!(parsed.altitude, original.altitude, epsilon = 5e-4 + 1e-6);
    }
}

#[test]
fn test_parameter_record_round_trip() {
    let edited = RocketConfiguration {
        srb_count: 4,
        booster_count: 2,
        booster_fuel_mass: 350_000.0,
        booster_thrust: 4_100.5,
        ..RocketConfiguration::default()
    };
    let mut buffer = Vec::new();
    write_snapshot(&mut buffer, &edited.snapshot()).expect("write record");

    let snapshot = read_snapshot(Cursor::new(buffer)).expect("read record");
    let reloaded = snapshot.apply_to(&RocketConfiguration::default());

    assert_eq!(reloaded, edited);
    assert_eq!(
        run_simulation(&reloaded).trace,
        run_simulation(&edited).trace
    );
}

#[test]
fn test_presentation_views_of_a_run() {
    let run = run_simulation(&RocketConfiguration::default());

    assert_eq!(run.trace.table_rows(TableStride::Tenth).count(), 2501);
    assert_eq!(run.trace.table_rows(TableStride::Half).count(), 501);
    assert_eq!(run.trace.table_rows(TableStride::Whole).count(), 251);

    let bounds = run.trace.series_bounds(TraceSeries::Altitude);
    assert_eq!(bounds.time_min, 0.0);
    assert_eq!(bounds.time_max, 250.0);
    assert_eq!(bounds.value_max, run.trace.altitude()[2500]);
    assert_eq!(run.trace.series(TraceSeries::Velocity).count(), 2501);
}
