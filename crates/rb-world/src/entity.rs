//! Plain entity records.

use rb_core::{AgentId, DepotId, Point, StructureId};

/// Maximum fire intensity a structure can reach.
pub const MAX_FIRE_INTENSITY: f64 = 200.0;

// ── Structure ─────────────────────────────────────────────────────────────────

/// A static building.  Created once at initialization and never removed.
///
/// Invariant: `destroyed` implies `!on_fire`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Structure {
    pub id:              StructureId,
    pub pos:             Point,
    pub on_fire:         bool,
    /// In `[0, MAX_FIRE_INTENSITY]`.  Zero once extinguished; a destroyed
    /// structure keeps the intensity it burned at.
    pub fire_intensity:  f64,
    /// Simulation time of the most recent ignition.
    pub fire_start_time: f64,
    pub destroyed:       bool,
}

impl Structure {
    pub fn new(id: StructureId, pos: Point) -> Self {
        Self {
            id,
            pos,
            on_fire:         false,
            fire_intensity:  0.0,
            fire_start_time: 0.0,
            destroyed:       false,
        }
    }

    /// `true` while the structure is on fire and still standing.
    #[inline]
    pub fn is_burning(&self) -> bool {
        self.on_fire && !self.destroyed
    }

    /// `true` if fire could start or spread here.
    #[inline]
    pub fn is_ignitable(&self) -> bool {
        !self.on_fire && !self.destroyed
    }
}

// ── AgentKind ─────────────────────────────────────────────────────────────────

/// Fixed performance bundle for one agent category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindProfile {
    /// Fraction of the fleet drawn as this kind.
    pub share:           f64,
    pub min_speed:       f64,
    pub max_speed:       f64,
    pub max_water:       f64,
    /// Intensity (and water) removed per unit time while extinguishing.
    pub extinguish_rate: f64,
}

/// Agent category.  Each kind carries a constant [`KindProfile`]; adding a
/// kind means adding a variant, a profile, and an entry in [`AgentKind::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AgentKind {
    /// Fast, small tank.
    Scout,
    Standard,
    /// Slow, large tank, strongest hose.
    Heavy,
}

impl AgentKind {
    /// All kinds in draw order (cumulative shares are summed in this order).
    pub const ALL: [AgentKind; 3] = [AgentKind::Scout, AgentKind::Standard, AgentKind::Heavy];

    pub const SCOUT: KindProfile = KindProfile {
        share:           0.2,
        min_speed:       14.0,
        max_speed:       18.0,
        max_water:       50.0,
        extinguish_rate: 3.0,
    };

    pub const STANDARD: KindProfile = KindProfile {
        share:           0.5,
        min_speed:       8.0,
        max_speed:       12.0,
        max_water:       120.0,
        extinguish_rate: 6.0,
    };

    pub const HEAVY: KindProfile = KindProfile {
        share:           0.3,
        min_speed:       5.0,
        max_speed:       8.0,
        max_water:       250.0,
        extinguish_rate: 10.0,
    };

    #[inline]
    pub const fn profile(self) -> KindProfile {
        match self {
            AgentKind::Scout    => Self::SCOUT,
            AgentKind::Standard => Self::STANDARD,
            AgentKind::Heavy    => Self::HEAVY,
        }
    }

    /// Map a uniform roll in `[0, 1)` to a kind by cumulative share.
    pub fn from_roll(roll: f64) -> AgentKind {
        let mut acc = 0.0;
        for kind in Self::ALL {
            acc += kind.profile().share;
            if roll < acc {
                return kind;
            }
        }
        // Shares sum to 1.0; rounding can leave a sliver at the top.
        AgentKind::Heavy
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::Scout    => "scout",
            AgentKind::Standard => "standard",
            AgentKind::Heavy    => "heavy",
        }
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Target ────────────────────────────────────────────────────────────────────

/// What an agent is currently heading for.  A single tagged field, so an
/// agent can never hold a depot and a structure target at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "id", rename_all = "lowercase"))]
pub enum Target {
    #[default]
    None,
    Depot(DepotId),
    Structure(StructureId),
}

impl Target {
    #[inline]
    pub fn is_none(self) -> bool {
        matches!(self, Target::None)
    }

    #[inline]
    pub fn structure(self) -> Option<StructureId> {
        match self {
            Target::Structure(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn depot(self) -> Option<DepotId> {
        match self {
            Target::Depot(d) => Some(d),
            _ => None,
        }
    }
}

// ── Agent ─────────────────────────────────────────────────────────────────────

/// A mobile firefighting unit.
///
/// Invariant: `0 <= water <= max_water`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id:                 AgentId,
    pub pos:                Point,
    pub kind:               AgentKind,
    /// Distance per unit time.
    pub speed:              f64,
    pub water:              f64,
    pub max_water:          f64,
    pub extinguish_rate:    f64,
    pub target:             Target,
    pub fires_extinguished: u32,
    pub distance_traveled:  f64,
}

impl Agent {
    /// A new idle agent of `kind` with a full tank.
    pub fn new(id: AgentId, pos: Point, kind: AgentKind, speed: f64) -> Self {
        let profile = kind.profile();
        Self {
            id,
            pos,
            kind,
            speed,
            water:              profile.max_water,
            max_water:          profile.max_water,
            extinguish_rate:    profile.extinguish_rate,
            target:             Target::None,
            fires_extinguished: 0,
            distance_traveled:  0.0,
        }
    }
}

// ── ActiveFire ────────────────────────────────────────────────────────────────

/// The live record of a burning structure.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveFire {
    pub structure:   StructureId,
    /// Mirrors `Structure::fire_intensity`.
    pub intensity:   f64,
    /// Growth per unit time, before the 0.7 damping factor.
    pub spread_rate: f64,
    /// 1 (lowest) to 5 (highest), fixed at ignition.
    pub priority:    u8,
}

// ── Depot ─────────────────────────────────────────────────────────────────────

/// A fixed water resupply point.  Immutable after initialization.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Depot {
    pub id:          DepotId,
    pub pos:         Point,
    /// Water units restored per unit time.
    pub refill_rate: f64,
}
