//! CSV-driven particle gun.
//!
//! Samples whole event blocks from a kinematics source, optionally smears
//! the production vertex, and streams particles into an engine-side sink.

use std::collections::HashSet;

use cg_core::traits::{EventSink, KinematicsSource};
use cg_core::{Error, GenParticle, GunEvent, Result};
use rand::Rng;

use crate::config::GunConfig;

/// Luminous-region half-length along z, in mm.
const LUMINOUS_HALF_LENGTH_MM: f64 = 70.0;

/// Give up looking for an unused block after this many draws and accept
/// a repeat. Uniqueness only holds per node; batch production minimizes
/// collisions by sampling the table randomly.
const MAX_RESAMPLE_ATTEMPTS: usize = 100;

/// The gun driver. Owns the validated configuration and a kinematics
/// source; tracks which event blocks were already shot on this node.
#[derive(Debug)]
pub struct CsvReaderGun<S> {
    config: GunConfig,
    source: S,
    used_blocks: HashSet<usize>,
    shots: u64,
}

impl<S: KinematicsSource> CsvReaderGun<S> {
    /// Create a gun. Fails unless the source holds at least one whole
    /// block of `NumParticlesPerEvent` records.
    pub fn new(config: GunConfig, source: S) -> Result<Self> {
        let per_event = config.num_particles_per_event() as usize;
        if source.len() < per_event {
            return Err(Error::Validation(format!(
                "kinematics source holds {} records, need at least {} for one event",
                source.len(),
                per_event
            )));
        }
        Ok(Self { config, source, used_blocks: HashSet::new(), shots: 0 })
    }

    /// The configuration this gun was built with.
    pub fn config(&self) -> &GunConfig {
        &self.config
    }

    /// Number of whole event blocks available in the source.
    pub fn n_blocks(&self) -> usize {
        self.source.len() / self.config.num_particles_per_event() as usize
    }

    /// Draw one event.
    pub fn shoot<R: Rng>(&mut self, rng: &mut R) -> Result<GunEvent> {
        let per_event = self.config.num_particles_per_event() as usize;
        let block = self.draw_block(rng);

        let vertex = if self.config.make_displaced() {
            self.sample_vertex(rng)
        } else {
            [0.0; 3]
        };

        let ids = self.config.particle_ids();
        let first = block * per_event;
        let mut particles = Vec::with_capacity(per_event);
        for offset in 0..per_event {
            let record = self.source.record(first + offset).ok_or_else(|| {
                Error::Validation(format!("kinematics record {} out of range", first + offset))
            })?;
            particles.push(GenParticle::from_record(ids[offset % ids.len()], &record));
        }

        if self.shots < self.config.max_events_to_print() as u64 {
            log::info!(
                "gun event {}: block {}, {} particles, vertex ({:.3}, {:.3}, {:.3}) mm",
                self.shots,
                block,
                particles.len(),
                vertex[0],
                vertex[1],
                vertex[2]
            );
        }
        self.shots += 1;

        Ok(GunEvent { vertex, particles })
    }

    /// Draw one event and stream it into an engine-side sink.
    pub fn shoot_into<R: Rng, K: EventSink>(
        &mut self,
        rng: &mut R,
        sink: &mut K,
    ) -> Result<GunEvent> {
        let event = self.shoot(rng)?;
        sink.set_vertex(event.vertex)?;
        for particle in &event.particles {
            sink.append(particle)?;
        }
        Ok(event)
    }

    /// Pick an event block, preferring ones not shot before on this node.
    fn draw_block<R: Rng>(&mut self, rng: &mut R) -> usize {
        let n_blocks = self.n_blocks();
        let mut block = rng.random_range(0..n_blocks);
        let mut attempts = 1;
        while self.used_blocks.contains(&block) && attempts < MAX_RESAMPLE_ATTEMPTS {
            block = rng.random_range(0..n_blocks);
            attempts += 1;
        }
        if self.used_blocks.contains(&block) {
            log::warn!(
                "no unused event block after {} draws, repeating block {}",
                MAX_RESAMPLE_ATTEMPTS,
                block
            );
        }
        self.used_blocks.insert(block);
        block
    }

    fn sample_vertex<R: Rng>(&self, rng: &mut R) -> [f64; 3] {
        let cfg = &self.config;
        let radius = rng.random_range(cfg.min_prod_radius()..=cfg.max_prod_radius());
        let phi = rng.random_range(cfg.min_phi()..=cfg.max_phi());
        let vz = rng.random_range(-LUMINOUS_HALF_LENGTH_MM..=LUMINOUS_HALF_LENGTH_MM);
        [radius * phi.cos(), radius * phi.sin(), vz]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv::KinematicsTable;
    use crate::presets::eta_to_gamma_dark_photon;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixture_table() -> KinematicsTable {
        let csv = include_str!("../../../tests/fixtures/dimuon_kinematics.csv");
        KinematicsTable::from_reader(csv.as_bytes()).unwrap()
    }

    fn fixture_gun() -> CsvReaderGun<KinematicsTable> {
        let config = GunConfig::from_spec(&eta_to_gamma_dark_photon()).unwrap();
        CsvReaderGun::new(config, fixture_table()).unwrap()
    }

    #[test]
    fn test_shoot_fills_one_block() {
        let mut gun = fixture_gun();
        let mut rng = StdRng::seed_from_u64(7);

        let event = gun.shoot(&mut rng).unwrap();
        assert_eq!(event.particles.len(), 5);
        // ParticleID = [11, 13] cycled across the block
        let ids: Vec<i32> = event.particles.iter().map(|p| p.pdg_id).collect();
        assert_eq!(ids, vec![11, 13, 11, 13, 11]);
        // MakeDisplaced = false in the preset
        assert!(event.at_origin());
    }

    #[test]
    fn test_shoot_is_deterministic() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        let mut gun1 = fixture_gun();
        let mut gun2 = fixture_gun();

        for _ in 0..4 {
            assert_eq!(gun1.shoot(&mut rng1).unwrap(), gun2.shoot(&mut rng2).unwrap());
        }
    }

    #[test]
    fn test_blocks_unique_until_exhausted() {
        let mut gun = fixture_gun();
        assert_eq!(gun.n_blocks(), 4);
        let mut rng = StdRng::seed_from_u64(1);

        let mut first_particles = std::collections::HashSet::new();
        for _ in 0..4 {
            let event = gun.shoot(&mut rng).unwrap();
            // e of the first particle identifies the block in the fixture
            first_particles.insert(event.particles[0].e.to_bits());
        }
        assert_eq!(first_particles.len(), 4);

        // every block used; the next shot must repeat one
        let event = gun.shoot(&mut rng).unwrap();
        assert!(first_particles.contains(&event.particles[0].e.to_bits()));
    }

    #[test]
    fn test_displaced_vertex_within_bounds() {
        let mut spec = eta_to_gamma_dark_photon();
        spec.pgun.make_displaced = true;
        let config = GunConfig::from_spec(&spec).unwrap();
        let (min_r, max_r) = (config.min_prod_radius(), config.max_prod_radius());
        let mut gun = CsvReaderGun::new(config, fixture_table()).unwrap();
        let mut rng = StdRng::seed_from_u64(9);

        for _ in 0..4 {
            let event = gun.shoot(&mut rng).unwrap();
            let [vx, vy, vz] = event.vertex;
            let r = vx.hypot(vy);
            assert!(r >= min_r && r <= max_r, "radius {} outside [{}, {}]", r, min_r, max_r);
            assert!(vz.abs() <= LUMINOUS_HALF_LENGTH_MM);
        }
    }

    #[test]
    fn test_source_too_small() {
        let config = GunConfig::from_spec(&eta_to_gamma_dark_photon()).unwrap();
        let table =
            KinematicsTable::from_reader("1.0 0.0 0.0 1.0\n".as_bytes()).unwrap();
        let err = CsvReaderGun::new(config, table).unwrap_err();
        assert!(err.to_string().contains("at least 5"), "unexpected error: {}", err);
    }

    #[test]
    fn test_shoot_into_sink() {
        struct RecordingSink {
            vertex: Option<[f64; 3]>,
            particles: Vec<GenParticle>,
        }

        impl EventSink for RecordingSink {
            fn set_vertex(&mut self, vertex: [f64; 3]) -> Result<()> {
                self.vertex = Some(vertex);
                Ok(())
            }

            fn append(&mut self, particle: &GenParticle) -> Result<()> {
                self.particles.push(*particle);
                Ok(())
            }
        }

        let mut gun = fixture_gun();
        let mut rng = StdRng::seed_from_u64(3);
        let mut sink = RecordingSink { vertex: None, particles: Vec::new() };

        let event = gun.shoot_into(&mut rng, &mut sink).unwrap();
        assert_eq!(sink.vertex, Some(event.vertex));
        assert_eq!(sink.particles, event.particles);
    }
}
