//! Literal job configurations.
//!
//! Convenience constructors returning owned [`GunSpec`] values; each
//! caller builds its own instance, there is no process-wide singleton.

use crate::config::{GunParameters, GunSpec, PythiaParameters};
use crate::directives::DirectiveGroup;

/// Gun job for the η → γ A′, A′ → μμ displaced-dimuon sample.
///
/// The Z-decay directive group is declared but inert: `parameterSets` is
/// empty, so no directive reaches the engine unless the caller activates
/// the group explicitly.
pub fn eta_to_gamma_dark_photon() -> GunSpec {
    GunSpec {
        max_events_to_print: 1,
        pythia_pylist_verbosity: 1,
        pythia_hepmc_verbosity: true,
        pgun: GunParameters {
            filename: "GeneratorInterface/Pythia8Interface/test/EtaToGammaAp_ApToMuMu.csv"
                .to_string(),
            particle_ids: vec![11, 13],
            make_displaced: false,
            min_phi: -3.14159265359,
            max_phi: 3.14159265359,
            min_pt: 25.0,
            max_pt: 45.0,
            min_eta: -2.4,
            max_eta: 2.4,
            min_prod_radius: 0.0,
            max_prod_radius: 10.0,
            num_particles_per_event: 5,
        },
        pythia: PythiaParameters {
            decay_settings: vec![DirectiveGroup::new(
                "py8ZDecaySettings",
                &[
                    // turn OFF all Z decays, then ON Z->tautau only
                    "23:onMode = off",
                    "23:onIfAny = 15",
                ],
            )],
            parameter_sets: vec![],
        },
    }
}
