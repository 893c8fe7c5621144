//! Core traits for csvgun
//!
//! This module defines the seams towards the external collaborators:
//! the gun driver does not depend on a concrete kinematics source or on
//! a concrete event-generation engine.

use crate::{GenParticle, KinematicsRecord, Result};

/// Read contract for a kinematics table.
///
/// One four-momentum record per row; the gun consumes whole blocks of
/// consecutive records, one block per generated event.
pub trait KinematicsSource {
    /// Number of records available.
    fn len(&self) -> usize;

    /// True if the source holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Record at `idx`, if in range.
    fn record(&self, idx: usize) -> Option<KinematicsRecord>;
}

/// Engine-side event record the gun fills, one shot at a time.
pub trait EventSink {
    /// Set the production vertex (mm) for the current event.
    fn set_vertex(&mut self, vertex: [f64; 3]) -> Result<()>;

    /// Append one particle to the current event.
    fn append(&mut self, particle: &GenParticle) -> Result<()>;
}

/// External generator engine receiving decay directives at initialization.
pub trait GeneratorEngine {
    /// Apply one directive command verbatim (e.g. `"23:onMode = off"`).
    fn apply_directive(&mut self, command: &str) -> Result<()>;
}
