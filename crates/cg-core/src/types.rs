//! Common data types for csvgun

use serde::{Deserialize, Serialize};

/// One row of a kinematics table: a four-momentum in GeV.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinematicsRecord {
    /// Energy
    pub e: f64,
    /// Momentum x component
    pub px: f64,
    /// Momentum y component
    pub py: f64,
    /// Momentum z component
    pub pz: f64,
}

impl KinematicsRecord {
    /// Create a new record
    pub fn new(e: f64, px: f64, py: f64, pz: f64) -> Self {
        Self { e, px, py, pz }
    }

    /// Transverse momentum
    pub fn pt(&self) -> f64 {
        self.px.hypot(self.py)
    }

    /// Momentum magnitude
    pub fn p(&self) -> f64 {
        (self.px * self.px + self.py * self.py + self.pz * self.pz).sqrt()
    }
}

/// A generator-level particle handed to the event sink.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenParticle {
    /// Signed PDG particle code
    pub pdg_id: i32,
    /// Energy
    pub e: f64,
    /// Momentum x component
    pub px: f64,
    /// Momentum y component
    pub py: f64,
    /// Momentum z component
    pub pz: f64,
}

impl GenParticle {
    /// Attach a PDG code to a kinematics record
    pub fn from_record(pdg_id: i32, record: &KinematicsRecord) -> Self {
        Self { pdg_id, e: record.e, px: record.px, py: record.py, pz: record.pz }
    }
}

/// One gun shot: a production vertex plus the particles of the event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GunEvent {
    /// Production vertex (vx, vy, vz) in mm
    pub vertex: [f64; 3],
    /// Particles in table order within the sampled block
    pub particles: Vec<GenParticle>,
}

impl GunEvent {
    /// True if the production vertex is exactly the origin
    pub fn at_origin(&self) -> bool {
        self.vertex == [0.0, 0.0, 0.0]
    }
}
