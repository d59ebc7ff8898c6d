//! End-to-end interaction cycles against the real CoolProp backend.

use approx::assert_relative_eq;
use fc_app::{ComputeOutcome, CyclePhase, Session};
use fc_core::units::{celsius, k, kg_m3, pa};
use fc_fluids::{CoolPropProvider, ParamPair, Phase, Species, StateParam};

fn session() -> Session {
    Session::new(Box::new(CoolPropProvider::new()))
}

#[test]
fn liquid_water_cycle() {
    let mut session = session();
    let pair = ParamPair::new(
        StateParam::pressure(pa(101_325.0)),
        StateParam::temperature(celsius(25.0)),
    )
    .unwrap();

    session.begin(Species::Water, pair);
    assert_eq!(session.compute().unwrap(), ComputeOutcome::Ready);

    let state = session.render_properties().unwrap();
    assert_eq!(session.phase(), CyclePhase::Rendered);
    assert_eq!(state.phase(), Phase::Liquid);
    assert_relative_eq!(state.get("density").unwrap(), 997.0, max_relative = 0.01);
}

#[test]
fn two_phase_water_cycle_with_quality() {
    let mut session = session();
    // 1 atm, enthalpy inside the dome (between ~419 and ~2676 kJ/kg).
    let pair = ParamPair::new(
        StateParam::pressure(pa(101_325.0)),
        StateParam::enthalpy(1.5e6),
    )
    .unwrap();

    session.begin(Species::Water, pair);
    assert_eq!(session.compute().unwrap(), ComputeOutcome::NeedsQuality);
    assert_eq!(session.phase(), CyclePhase::TwoPhaseNeedsQuality);

    session.resolve_quality(0.5).unwrap();
    let state = session.render_properties().unwrap();

    assert_eq!(state.phase(), Phase::TwoPhase);
    assert_relative_eq!(state.quality().unwrap(), 0.5, max_relative = 1e-6);

    // h(x=0.5) sits between the saturation enthalpies at 1 atm.
    let h = state.get("specific enthalpy").unwrap();
    assert!(h > 419.0e3 && h < 2676.0e3, "h = {h} J/kg");
}

#[test]
fn quality_endpoints_recover_saturation_states() {
    for (quality, expected_h, tolerance) in [(0.0, 419.0e3, 10.0e3), (1.0, 2676.0e3, 20.0e3)] {
        let mut session = session();
        let pair = ParamPair::new(
            StateParam::pressure(pa(101_325.0)),
            StateParam::enthalpy(1.5e6),
        )
        .unwrap();

        session.begin(Species::Water, pair);
        session.compute().unwrap();
        session.resolve_quality(quality).unwrap();

        let state = session.render_properties().unwrap();
        let h = state.get("specific enthalpy").unwrap();
        assert!(
            (h - expected_h).abs() < tolerance,
            "h(x={quality}) = {h} J/kg, expected ≈{expected_h}"
        );
    }
}

#[test]
fn backend_rejection_surfaces_verbatim_and_resets() {
    let mut session = session();
    let pair = ParamPair::new(
        StateParam::density(kg_m3(-5.0)),
        StateParam::temperature(celsius(25.0)),
    )
    .unwrap();

    session.begin(Species::Water, pair);
    assert!(session.compute().is_err());
    assert_eq!(session.phase(), CyclePhase::Idle);
    assert!(session.last_error().is_some());

    // The session is usable again without an explicit reset.
    let pair = ParamPair::new(
        StateParam::pressure(pa(101_325.0)),
        StateParam::temperature(k(300.0)),
    )
    .unwrap();
    session.begin(Species::N2, pair);
    assert_eq!(session.compute().unwrap(), ComputeOutcome::Ready);
    assert_eq!(session.render_properties().unwrap().phase(), Phase::Gas);
}

#[test]
fn switching_fluids_between_cycles() {
    let mut session = session();

    for (species, expected_phase) in [
        (Species::N2, Phase::Gas),
        (Species::Water, Phase::Liquid),
        (Species::R134a, Phase::Gas),
    ] {
        let pair = ParamPair::new(
            StateParam::pressure(pa(101_325.0)),
            StateParam::temperature(k(300.0)),
        )
        .unwrap();
        session.begin(species, pair);
        session.compute().unwrap();

        let state = session.render_properties().unwrap();
        assert_eq!(state.phase(), expected_phase, "{species}");
    }
}
