//! Tests for the gun configuration schema and validation

use crate::config::{GunConfig, GunSpec};
use crate::directives::DirectiveGroup;
use crate::presets::eta_to_gamma_dark_photon;
use cg_core::traits::GeneratorEngine;
use cg_core::Result;

fn assert_rejects(spec: &GunSpec, needle: &str) {
    let err = GunConfig::from_spec(spec).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains(needle), "expected {:?} in error, got: {}", needle, msg);
}

#[test]
fn test_build_preset() {
    let spec = eta_to_gamma_dark_photon();
    let config = GunConfig::from_spec(&spec).unwrap();

    assert_eq!(config.max_events_to_print(), 1);
    assert_eq!(config.filename(), spec.pgun.filename);
    assert_eq!(config.num_particles_per_event(), 5);
    assert_eq!(config.min_pt(), 25.0);
    assert_eq!(config.max_pt(), 45.0);
    assert!(!config.make_displaced());
}

#[test]
fn test_build_is_idempotent() {
    let spec = eta_to_gamma_dark_photon();
    let a = GunConfig::from_spec(&spec).unwrap();
    let b = GunConfig::from_spec(&spec).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_spec_roundtrip() {
    let config = GunConfig::from_spec(&eta_to_gamma_dark_photon()).unwrap();

    // serialize the field mapping, rebuild, compare field for field
    let json = serde_json::to_string_pretty(&config.to_spec()).unwrap();
    let spec: GunSpec = serde_json::from_str(&json).unwrap();
    let rebuilt = GunConfig::from_spec(&spec).unwrap();
    assert_eq!(config, rebuilt);
}

#[test]
fn test_spec_json_uses_upstream_names() {
    let json = serde_json::to_value(eta_to_gamma_dark_photon()).unwrap();
    assert!(json.get("maxEventsToPrint").is_some());
    let pgun = json.get("PGunParameters").unwrap();
    assert!(pgun.get("ParticleID").is_some());
    assert!(pgun.get("NumParticlesPerEvent").is_some());
    let pythia = json.get("PythiaParameters").unwrap();
    assert!(pythia.get("parameterSets").is_some());
}

#[test]
fn test_rejects_inverted_pt_range() {
    let mut spec = eta_to_gamma_dark_photon();
    spec.pgun.min_pt = 45.0;
    spec.pgun.max_pt = 25.0;
    assert_rejects(&spec, "MinPt > MaxPt");
}

#[test]
fn test_rejects_negative_pt() {
    let mut spec = eta_to_gamma_dark_photon();
    spec.pgun.min_pt = -1.0;
    assert_rejects(&spec, "MinPt");
}

#[test]
fn test_rejects_inverted_eta_range() {
    let mut spec = eta_to_gamma_dark_photon();
    spec.pgun.min_eta = 2.4;
    spec.pgun.max_eta = -2.4;
    assert_rejects(&spec, "MinEta > MaxEta");
}

#[test]
fn test_rejects_phi_wraparound() {
    // wrap-through-pi is rejected, not reinterpreted
    let mut spec = eta_to_gamma_dark_photon();
    spec.pgun.min_phi = 3.0;
    spec.pgun.max_phi = -3.0;
    assert_rejects(&spec, "MinPhi > MaxPhi");
}

#[test]
fn test_rejects_phi_outside_pi() {
    let mut spec = eta_to_gamma_dark_photon();
    spec.pgun.max_phi = 4.0;
    assert_rejects(&spec, "MaxPhi out of range");
}

#[test]
fn test_accepts_rounded_pi_literals() {
    // job files carry pi rounded to 11 decimals, a hair beyond f64 pi
    let spec = eta_to_gamma_dark_photon();
    assert_eq!(spec.pgun.max_phi, 3.14159265359);
    assert!(GunConfig::from_spec(&spec).is_ok());
}

#[test]
fn test_rejects_non_finite_bound() {
    let mut spec = eta_to_gamma_dark_photon();
    spec.pgun.max_eta = f64::NAN;
    assert_rejects(&spec, "MaxEta is not finite");
}

#[test]
fn test_rejects_empty_particle_ids() {
    let mut spec = eta_to_gamma_dark_photon();
    spec.pgun.particle_ids.clear();
    assert_rejects(&spec, "ParticleID empty");
}

#[test]
fn test_rejects_zero_particles_per_event() {
    let mut spec = eta_to_gamma_dark_photon();
    spec.pgun.num_particles_per_event = 0;
    assert_rejects(&spec, "NumParticlesPerEvent");
}

#[test]
fn test_rejects_inverted_prod_radius() {
    let mut spec = eta_to_gamma_dark_photon();
    spec.pgun.min_prod_radius = 12.0;
    assert_rejects(&spec, "MinProdRadius > MaxProdRadius");
}

#[test]
fn test_rejects_negative_verbosity() {
    let mut spec = eta_to_gamma_dark_photon();
    spec.max_events_to_print = -1;
    assert_rejects(&spec, "maxEventsToPrint");
}

#[test]
fn test_rejects_undeclared_parameter_set() {
    let mut spec = eta_to_gamma_dark_photon();
    spec.pythia.parameter_sets = vec!["py8WDecaySettings".to_string()];
    assert_rejects(&spec, "py8WDecaySettings");
}

#[test]
fn test_empty_parameter_sets_is_inert() {
    let spec = eta_to_gamma_dark_photon();
    let config = GunConfig::from_spec(&spec).unwrap();
    assert_eq!(config.active_directives().count(), 0);
}

#[test]
fn test_rejects_malformed_directive() {
    let mut spec = eta_to_gamma_dark_photon();
    spec.pythia.decay_settings[0].commands.push("23 onMode = off".to_string());
    assert_rejects(&spec, "':'");
}

#[test]
fn test_engine_receives_active_directives_in_order() {
    struct RecordingEngine {
        commands: Vec<String>,
    }

    impl GeneratorEngine for RecordingEngine {
        fn apply_directive(&mut self, command: &str) -> Result<()> {
            self.commands.push(command.to_string());
            Ok(())
        }
    }

    let mut spec = eta_to_gamma_dark_photon();
    spec.pythia.decay_settings.push(DirectiveGroup::new(
        "py8TauSettings",
        &["15:onMode = on"],
    ));
    // activation order differs from declaration order
    spec.pythia.parameter_sets =
        vec!["py8TauSettings".to_string(), "py8ZDecaySettings".to_string()];

    let config = GunConfig::from_spec(&spec).unwrap();
    let mut engine = RecordingEngine { commands: Vec::new() };
    config.configure_engine(&mut engine).unwrap();

    assert_eq!(
        engine.commands,
        vec!["15:onMode = on", "23:onMode = off", "23:onIfAny = 15"]
    );
}
