//! World generation and the [`SimBuilder`].

use rb_core::{AgentId, DepotId, Point, SimConfig, SimRng, StructureId};
use rb_fire::ignite;
use rb_world::{Agent, AgentKind, Depot, Structure, World};

use crate::{Sim, SimError, SimResult};

/// Maximum offset, per axis, of a depot from its grid cell centre.
pub const DEPOT_JITTER: f64 = 10.0;

/// Fluent builder for [`Sim`].
///
/// By default the world is generated from the config with [`populate`].
/// Tests and tools that need a hand-placed scenario supply their own with
/// [`world`](Self::world).
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimBuilder::new(SimConfig { seed: 7, ..SimConfig::default() }).build()?;
/// assert_eq!(sim.world.fires.len(), 100);
/// ```
pub struct SimBuilder {
    config: SimConfig,
    world:  Option<World>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, world: None }
    }

    /// Use `world` as-is instead of generating one.  Only `dt`, `seed`,
    /// `max_ticks`, `destruction_limit` and `output_interval_ticks` are read
    /// from the config in that case.
    pub fn world(mut self, world: World) -> Self {
        self.world = Some(world);
        self
    }

    /// Validate the config, seed the RNG and produce a ready-to-step [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        let mut rng = SimRng::new(self.config.seed);

        let world = match self.world {
            Some(world) => {
                if !(self.config.dt.is_finite() && self.config.dt > 0.0) {
                    return Err(SimError::Config(format!(
                        "dt must be positive, got {}",
                        self.config.dt
                    )));
                }
                world
            }
            None => {
                self.config.validate()?;
                populate(&self.config, &mut rng)
            }
        };

        tracing::debug!(
            structures = world.structures.len(),
            agents = world.agents.len(),
            depots = world.depots.len(),
            fires = world.fires.len(),
            "world ready"
        );

        Ok(Sim {
            clock: self.config.make_clock(),
            config: self.config,
            world,
            rng,
        })
    }
}

/// Generate a fully populated world from `config`.
///
/// Draw order: structure positions, depot jitter, agents (kind, speed,
/// position), then `num_fires` distinct ignition sites, all ignited at time
/// zero.  `config` must already be validated.
pub fn populate(config: &SimConfig, rng: &mut SimRng) -> World {
    let size = config.city_size;

    let structures = (0..config.num_structures)
        .map(|i| Structure::new(StructureId(i as u32), random_point(size, rng)))
        .collect();

    let depots = depot_grid(config, rng);

    let agents = (0..config.num_agents)
        .map(|i| spawn_agent(AgentId(i as u32), size, rng))
        .collect();

    let mut world = World::new(structures, agents, depots);

    for idx in rng.sample_indices(config.num_structures, config.num_fires) {
        ignite(&mut world, StructureId(idx as u32), 0.0, rng);
    }
    world
}

fn random_point(size: f64, rng: &mut SimRng) -> Point {
    Point::new(rng.gen_range(0.0..size), rng.gen_range(0.0..size))
}

/// Depots on the smallest square grid with at least `num_depots` cells,
/// filled row by row, each jittered around its cell centre.
///
/// The jitter is not clamped: when a cell is narrower than
/// `2 * DEPOT_JITTER` a depot may sit outside the city.  Agents reach it all
/// the same.
fn depot_grid(config: &SimConfig, rng: &mut SimRng) -> Vec<Depot> {
    let n = config.num_depots;
    if n == 0 {
        return Vec::new();
    }
    let side = (n as f64).sqrt().ceil() as usize;
    let cell = config.city_size / side as f64;

    (0..n)
        .map(|i| {
            let (row, col) = (i / side, i % side);
            let x = (col as f64 + 0.5) * cell + rng.gen_range(-DEPOT_JITTER..=DEPOT_JITTER);
            let y = (row as f64 + 0.5) * cell + rng.gen_range(-DEPOT_JITTER..=DEPOT_JITTER);
            Depot {
                id:          DepotId(i as u32),
                pos:         Point::new(x, y),
                refill_rate: config.depot_refill_rate,
            }
        })
        .collect()
}

fn spawn_agent(id: AgentId, size: f64, rng: &mut SimRng) -> Agent {
    let kind = AgentKind::from_roll(rng.random::<f64>());
    let profile = kind.profile();
    let speed = rng.gen_range(profile.min_speed..=profile.max_speed);
    Agent::new(id, random_point(size, rng), kind, speed)
}
