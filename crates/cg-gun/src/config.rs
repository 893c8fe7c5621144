//! Gun configuration schema and validation.
//!
//! [`GunSpec`] mirrors the job-configuration field names of the upstream
//! format; [`GunConfig::from_spec`] applies every constraint and returns
//! the immutable configuration consumed by the engine and the gun driver.

use cg_core::traits::GeneratorEngine;
use cg_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::directives::{resolve_active, validate_groups, DirectiveGroup};

/// Tolerance on the [-π, π] phi bound; job files carry rounded π literals.
const PHI_TOLERANCE: f64 = 1e-9;

/// Raw particle-gun parameter block, field names as in the upstream
/// job-configuration format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GunParameters {
    /// Kinematics CSV path.
    #[serde(rename = "Filename")]
    pub filename: String,
    /// PDG codes the gun emits, cycled across each event block. Non-empty.
    #[serde(rename = "ParticleID")]
    pub particle_ids: Vec<i32>,
    /// Smear the production vertex away from the origin.
    #[serde(rename = "MakeDisplaced")]
    pub make_displaced: bool,
    /// Lower phi bound (rad).
    #[serde(rename = "MinPhi")]
    pub min_phi: f64,
    /// Upper phi bound (rad).
    #[serde(rename = "MaxPhi")]
    pub max_phi: f64,
    /// Lower transverse-momentum bound (GeV).
    #[serde(rename = "MinPt")]
    pub min_pt: f64,
    /// Upper transverse-momentum bound (GeV).
    #[serde(rename = "MaxPt")]
    pub max_pt: f64,
    /// Lower pseudorapidity bound.
    #[serde(rename = "MinEta")]
    pub min_eta: f64,
    /// Upper pseudorapidity bound.
    #[serde(rename = "MaxEta")]
    pub max_eta: f64,
    /// Lower production-vertex radius bound (cm).
    #[serde(rename = "MinProdRadius")]
    pub min_prod_radius: f64,
    /// Upper production-vertex radius bound (cm).
    #[serde(rename = "MaxProdRadius")]
    pub max_prod_radius: f64,
    /// Records consumed from the table per generated event.
    #[serde(rename = "NumParticlesPerEvent")]
    pub num_particles_per_event: i32,
}

/// Generator tuning block: declared directive groups plus the active set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PythiaParameters {
    /// Declared decay-directive groups. Inert unless listed in
    /// `parameter_sets`.
    #[serde(default, rename = "decaySettings")]
    pub decay_settings: Vec<DirectiveGroup>,
    /// Names of the groups to activate, in application order. An empty
    /// list means no group is active.
    #[serde(default, rename = "parameterSets")]
    pub parameter_sets: Vec<String>,
}

/// Raw gun job description, assembled from static literals at
/// job-configuration time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GunSpec {
    /// Number of generated events echoed to the log. Diagnostic only.
    #[serde(rename = "maxEventsToPrint")]
    pub max_events_to_print: i32,
    /// Engine event-listing verbosity. Diagnostic only.
    #[serde(rename = "pythiaPylistVerbosity")]
    pub pythia_pylist_verbosity: i32,
    /// Engine HepMC conversion verbosity. Diagnostic only.
    #[serde(rename = "pythiaHepMCVerbosity")]
    pub pythia_hepmc_verbosity: bool,
    /// Particle-gun kinematics block.
    #[serde(rename = "PGunParameters")]
    pub pgun: GunParameters,
    /// Generator tuning block.
    #[serde(rename = "PythiaParameters")]
    pub pythia: PythiaParameters,
}

/// Validated, immutable gun configuration.
///
/// Built once by [`GunConfig::from_spec`]; exposes read accessors only.
#[derive(Debug, Clone, PartialEq)]
pub struct GunConfig {
    spec: GunSpec,
    /// Indices into `spec.pythia.decay_settings`, in activation order.
    active: Vec<usize>,
}

fn require_finite(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::Validation(format!("{} is not finite (got {})", field, value)));
    }
    Ok(())
}

fn require_ordered(lo_name: &str, lo: f64, hi_name: &str, hi: f64) -> Result<()> {
    if lo > hi {
        return Err(Error::Validation(format!(
            "{} > {} ({} > {})",
            lo_name, hi_name, lo, hi
        )));
    }
    Ok(())
}

impl GunConfig {
    /// Validate a raw spec and build the immutable configuration.
    ///
    /// Every constraint failure is terminal: no partial configuration is
    /// ever returned, and the error names the offending field.
    pub fn from_spec(spec: &GunSpec) -> Result<Self> {
        if spec.max_events_to_print < 0 {
            return Err(Error::Validation(format!(
                "maxEventsToPrint must be >= 0 (got {})",
                spec.max_events_to_print
            )));
        }
        if spec.pythia_pylist_verbosity < 0 {
            return Err(Error::Validation(format!(
                "pythiaPylistVerbosity must be >= 0 (got {})",
                spec.pythia_pylist_verbosity
            )));
        }

        let p = &spec.pgun;
        if p.filename.trim().is_empty() {
            return Err(Error::Validation("Filename is empty".to_string()));
        }
        if p.particle_ids.is_empty() {
            return Err(Error::Validation("ParticleID empty".to_string()));
        }
        if p.particle_ids.iter().any(|&id| id == 0) {
            return Err(Error::Validation("ParticleID contains 0 (not a particle code)".to_string()));
        }

        for (name, value) in [
            ("MinPhi", p.min_phi),
            ("MaxPhi", p.max_phi),
            ("MinPt", p.min_pt),
            ("MaxPt", p.max_pt),
            ("MinEta", p.min_eta),
            ("MaxEta", p.max_eta),
            ("MinProdRadius", p.min_prod_radius),
            ("MaxProdRadius", p.max_prod_radius),
        ] {
            require_finite(name, value)?;
        }

        // Phi wrap-around (MinPhi > MaxPhi) is rejected, not wrapped.
        require_ordered("MinPhi", p.min_phi, "MaxPhi", p.max_phi)?;
        for (name, value) in [("MinPhi", p.min_phi), ("MaxPhi", p.max_phi)] {
            if value < -PI - PHI_TOLERANCE || value > PI + PHI_TOLERANCE {
                return Err(Error::Validation(format!(
                    "{} out of range [-pi, pi] (got {})",
                    name, value
                )));
            }
        }

        if p.min_pt < 0.0 {
            return Err(Error::Validation(format!("MinPt must be >= 0 (got {})", p.min_pt)));
        }
        require_ordered("MinPt", p.min_pt, "MaxPt", p.max_pt)?;
        require_ordered("MinEta", p.min_eta, "MaxEta", p.max_eta)?;
        if p.min_prod_radius < 0.0 {
            return Err(Error::Validation(format!(
                "MinProdRadius must be >= 0 (got {})",
                p.min_prod_radius
            )));
        }
        require_ordered("MinProdRadius", p.min_prod_radius, "MaxProdRadius", p.max_prod_radius)?;

        if p.num_particles_per_event < 1 {
            return Err(Error::Validation(format!(
                "NumParticlesPerEvent must be >= 1 (got {})",
                p.num_particles_per_event
            )));
        }

        validate_groups(&spec.pythia.decay_settings)?;
        let active = resolve_active(&spec.pythia.decay_settings, &spec.pythia.parameter_sets)?;

        Ok(Self { spec: spec.clone(), active })
    }

    /// The raw field mapping this configuration was built from.
    ///
    /// Rebuilding from the returned spec yields an equal configuration.
    pub fn to_spec(&self) -> GunSpec {
        self.spec.clone()
    }

    /// Number of generated events echoed to the log.
    pub fn max_events_to_print(&self) -> i32 {
        self.spec.max_events_to_print
    }

    /// Engine event-listing verbosity.
    pub fn pythia_pylist_verbosity(&self) -> i32 {
        self.spec.pythia_pylist_verbosity
    }

    /// Engine HepMC conversion verbosity.
    pub fn pythia_hepmc_verbosity(&self) -> bool {
        self.spec.pythia_hepmc_verbosity
    }

    /// Kinematics CSV path.
    pub fn filename(&self) -> &str {
        &self.spec.pgun.filename
    }

    /// PDG codes the gun emits.
    pub fn particle_ids(&self) -> &[i32] {
        &self.spec.pgun.particle_ids
    }

    /// Whether the production vertex is smeared away from the origin.
    pub fn make_displaced(&self) -> bool {
        self.spec.pgun.make_displaced
    }

    /// Lower phi bound (rad).
    pub fn min_phi(&self) -> f64 {
        self.spec.pgun.min_phi
    }

    /// Upper phi bound (rad).
    pub fn max_phi(&self) -> f64 {
        self.spec.pgun.max_phi
    }

    /// Lower transverse-momentum bound (GeV).
    pub fn min_pt(&self) -> f64 {
        self.spec.pgun.min_pt
    }

    /// Upper transverse-momentum bound (GeV).
    pub fn max_pt(&self) -> f64 {
        self.spec.pgun.max_pt
    }

    /// Lower pseudorapidity bound.
    pub fn min_eta(&self) -> f64 {
        self.spec.pgun.min_eta
    }

    /// Upper pseudorapidity bound.
    pub fn max_eta(&self) -> f64 {
        self.spec.pgun.max_eta
    }

    /// Lower production-vertex radius bound (cm).
    pub fn min_prod_radius(&self) -> f64 {
        self.spec.pgun.min_prod_radius
    }

    /// Upper production-vertex radius bound (cm).
    pub fn max_prod_radius(&self) -> f64 {
        self.spec.pgun.max_prod_radius
    }

    /// Records consumed from the table per generated event.
    pub fn num_particles_per_event(&self) -> i32 {
        self.spec.pgun.num_particles_per_event
    }

    /// Declared decay-directive groups, active or not.
    pub fn declared_groups(&self) -> &[DirectiveGroup] {
        &self.spec.pythia.decay_settings
    }

    /// Active groups in activation order.
    pub fn active_groups(&self) -> impl Iterator<Item = &DirectiveGroup> {
        self.active.iter().map(|&idx| &self.spec.pythia.decay_settings[idx])
    }

    /// Active directive commands, flattened in activation order.
    pub fn active_directives(&self) -> impl Iterator<Item = &str> {
        self.active_groups().flat_map(|g| g.commands.iter().map(String::as_str))
    }

    /// Hand the active directives to an engine, group by group, in
    /// activation order. Inert groups are never applied.
    pub fn configure_engine<E: GeneratorEngine + ?Sized>(&self, engine: &mut E) -> Result<()> {
        for command in self.active_directives() {
            engine.apply_directive(command)?;
        }
        Ok(())
    }
}
