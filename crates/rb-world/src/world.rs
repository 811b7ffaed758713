//! The `World` aggregate.

use rb_core::{DepotId, Point, StructureId};

use crate::entity::MAX_FIRE_INTENSITY;
use crate::{ActiveFire, Agent, Depot, InvariantViolation, Structure, StructureIndex};

// ── Counters ──────────────────────────────────────────────────────────────────

/// Cumulative run totals.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Counters {
    pub fires_started:        u32,
    pub fires_extinguished:   u32,
    pub structures_destroyed: u32,
    /// Ignition-to-extinguish time of every fire put out, in order.
    pub response_times:       Vec<f64>,
}

impl Counters {
    /// Mean of `response_times`, or 0 if nothing has been put out yet.
    pub fn avg_response_time(&self) -> f64 {
        if self.response_times.is_empty() {
            return 0.0;
        }
        self.response_times.iter().sum::<f64>() / self.response_times.len() as f64
    }
}

// ── World ─────────────────────────────────────────────────────────────────────

/// All simulation state except the clock and RNG, which live in `rb_sim::Sim`.
///
/// Every phase function takes `&mut World` explicitly; there is no global
/// state.  Fields are `pub` for direct indexed access on hot paths.
pub struct World {
    /// Indexed by `StructureId`.  Never shrinks.
    pub structures: Vec<Structure>,

    /// Indexed by `AgentId`.
    pub agents: Vec<Agent>,

    /// Active fires in ignition order.  At most one per structure.
    pub fires: Vec<ActiveFire>,

    /// Indexed by `DepotId`.  Never changes after construction.
    pub depots: Vec<Depot>,

    pub counters: Counters,

    index: StructureIndex,
}

impl World {
    /// Assemble a world from pre-placed entities.  No fires are burning yet.
    ///
    /// Ids must equal positions in their `Vec`.
    pub fn new(structures: Vec<Structure>, agents: Vec<Agent>, depots: Vec<Depot>) -> Self {
        debug_assert!(structures.iter().enumerate().all(|(i, s)| s.id.index() == i));
        debug_assert!(agents.iter().enumerate().all(|(i, a)| a.id.index() == i));
        debug_assert!(depots.iter().enumerate().all(|(i, d)| d.id.index() == i));

        let index = StructureIndex::build(structures.iter().map(|s| (s.id, s.pos)));
        Self {
            structures,
            agents,
            fires: Vec::new(),
            depots,
            counters: Counters::default(),
            index,
        }
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// # Panics
    /// Panics if `id` is out of range; a dangling id is a corrupted
    /// assignment.
    #[inline]
    pub fn structure(&self, id: StructureId) -> &Structure {
        &self.structures[id.index()]
    }

    #[inline]
    pub fn structure_mut(&mut self, id: StructureId) -> &mut Structure {
        &mut self.structures[id.index()]
    }

    /// # Panics
    /// Panics if `id` is out of range.
    #[inline]
    pub fn depot(&self, id: DepotId) -> &Depot {
        &self.depots[id.index()]
    }

    /// The active fire burning in `structure`, if any.
    pub fn fire_at(&self, structure: StructureId) -> Option<&ActiveFire> {
        self.fires.iter().find(|f| f.structure == structure)
    }

    pub fn fire_at_mut(&mut self, structure: StructureId) -> Option<&mut ActiveFire> {
        self.fires.iter_mut().find(|f| f.structure == structure)
    }

    /// Remove the active fire for `structure`, preserving the order of the
    /// remaining fires.
    pub fn remove_fire(&mut self, structure: StructureId) -> Option<ActiveFire> {
        let pos = self.fires.iter().position(|f| f.structure == structure)?;
        Some(self.fires.remove(pos))
    }

    /// Structures strictly within `radius` of `center`, with distances.
    pub fn structures_within(
        &self,
        center: Point,
        radius: f64,
    ) -> impl Iterator<Item = (StructureId, f64)> + '_ {
        self.index.within(center, radius)
    }

    /// Number of agents whose current target is `structure`.
    pub fn agents_targeting(&self, structure: StructureId) -> usize {
        self.agents
            .iter()
            .filter(|a| a.target.structure() == Some(structure))
            .count()
    }

    /// Number of structures currently flagged on fire.
    pub fn burning_count(&self) -> usize {
        self.structures.iter().filter(|s| s.on_fire).count()
    }

    // ── Consistency ───────────────────────────────────────────────────────

    /// Verify the world-level invariants: water bounds, fire intensity
    /// bounds, destroyed structures not burning, and a one-to-one match
    /// between active fires and burning structures.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        for a in &self.agents {
            if !(a.water >= 0.0 && a.water <= a.max_water) {
                return Err(InvariantViolation::WaterOutOfBounds {
                    agent: a.id,
                    water: a.water,
                    max:   a.max_water,
                });
            }
        }
        for s in &self.structures {
            if s.destroyed && s.on_fire {
                return Err(InvariantViolation::DestroyedStillBurning(s.id));
            }
        }
        for f in &self.fires {
            if !(0.0..=MAX_FIRE_INTENSITY).contains(&f.intensity) {
                return Err(InvariantViolation::IntensityOutOfBounds {
                    structure: f.structure,
                    intensity: f.intensity,
                });
            }
            if !self.structure(f.structure).is_burning() {
                return Err(InvariantViolation::OrphanFire(f.structure));
            }
        }
        let burning = self.burning_count();
        if burning != self.fires.len() {
            return Err(InvariantViolation::FireSetMismatch {
                active: self.fires.len(),
                burning,
            });
        }
        Ok(())
    }
}
