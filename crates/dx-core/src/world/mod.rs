//! The static location graph and its encounter bindings.
//!
//! Graph membership and encounter binding are separate lookups: every
//! location appears in the graph, and only some of them have an enemy
//! template attached.

pub mod preset;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::character::EnemyTemplate;
use crate::error::{GameError, GameResult};

/// A location and the places reachable from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Location name.
    pub name: String,
    /// Reachable neighbors, in display order.
    pub neighbors: Vec<String>,
}

/// An immutable world: locations, directed neighbor lists, and enemies.
#[derive(Debug, Clone)]
pub struct WorldMap {
    start: String,
    locations: Vec<Location>,
    index: HashMap<String, usize>,
    encounters: HashMap<String, EnemyTemplate>,
}

impl WorldMap {
    /// Start building a world whose traversal begins at `start`.
    pub fn builder(start: impl Into<String>) -> WorldBuilder {
        WorldBuilder {
            start: start.into(),
            locations: Vec::new(),
            encounters: Vec::new(),
        }
    }

    /// Parse and validate a JSON world document.
    pub fn from_json(json: &str) -> GameResult<Self> {
        let spec: WorldSpec = serde_json::from_str(json)?;
        spec.build()
    }

    /// The start location.
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Returns true if `name` is a location in this world.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Neighbors of a location, or `None` if it does not exist.
    pub fn neighbors(&self, name: &str) -> Option<&[String]> {
        self.index
            .get(name)
            .map(|&i| self.locations[i].neighbors.as_slice())
    }

    /// Returns true if `to` is a neighbor of `from`.
    pub fn is_neighbor(&self, from: &str, to: &str) -> bool {
        self.neighbors(from)
            .is_some_and(|n| n.iter().any(|candidate| candidate == to))
    }

    /// The enemy template bound to a location, if any.
    pub fn encounter(&self, name: &str) -> Option<&EnemyTemplate> {
        self.encounters.get(name)
    }

    /// All locations in declaration order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Number of locations.
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Number of locations with an enemy bound.
    pub fn encounter_count(&self) -> usize {
        self.encounters.len()
    }

    /// Convert back into a serializable document.
    pub fn to_spec(&self) -> WorldSpec {
        let encounters = self
            .locations
            .iter()
            .filter_map(|loc| {
                self.encounters.get(&loc.name).map(|t| EncounterSpec {
                    location: loc.name.clone(),
                    enemy: t.name().to_string(),
                    health: t.max_health(),
                    strength: t.strength(),
                    loot: t.loot().to_vec(),
                })
            })
            .collect();
        WorldSpec {
            start: self.start.clone(),
            locations: self
                .locations
                .iter()
                .map(|loc| LocationSpec {
                    name: loc.name.clone(),
                    neighbors: loc.neighbors.clone(),
                })
                .collect(),
            encounters,
        }
    }
}

/// Incremental construction of a [`WorldMap`].
#[derive(Debug, Clone)]
pub struct WorldBuilder {
    start: String,
    locations: Vec<Location>,
    encounters: Vec<(String, EnemyTemplate)>,
}

impl WorldBuilder {
    /// Add a location with its neighbors. A location may have no neighbors.
    pub fn location<I, S>(mut self, name: impl Into<String>, neighbors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.locations.push(Location {
            name: name.into(),
            neighbors: neighbors.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Bind an enemy template to a location.
    pub fn encounter(mut self, location: impl Into<String>, template: EnemyTemplate) -> Self {
        self.encounters.push((location.into(), template));
        self
    }

    /// Validate and build the world.
    ///
    /// Fails if a location is declared twice, the start location is missing,
    /// a neighbor is not itself a location, or an enemy is bound to an
    /// unknown location or bound twice.
    pub fn build(self) -> GameResult<WorldMap> {
        let mut index = HashMap::with_capacity(self.locations.len());
        for (i, loc) in self.locations.iter().enumerate() {
            if index.insert(loc.name.clone(), i).is_some() {
                return Err(GameError::InvalidWorld(format!(
                    "location '{}' is declared more than once",
                    loc.name
                )));
            }
        }

        if !index.contains_key(&self.start) {
            return Err(GameError::UnknownLocation(self.start));
        }

        for loc in &self.locations {
            if let Some(missing) = loc.neighbors.iter().find(|n| !index.contains_key(*n)) {
                return Err(GameError::InvalidWorld(format!(
                    "'{}' leads to undeclared location '{missing}'",
                    loc.name
                )));
            }
        }

        let mut encounters = HashMap::with_capacity(self.encounters.len());
        for (location, template) in self.encounters {
            if !index.contains_key(&location) {
                return Err(GameError::UnknownLocation(location));
            }
            if encounters.contains_key(&location) {
                return Err(GameError::InvalidWorld(format!(
                    "location '{location}' has more than one enemy"
                )));
            }
            encounters.insert(location, template);
        }

        Ok(WorldMap {
            start: self.start,
            locations: self.locations,
            index,
            encounters,
        })
    }
}

/// Serializable world document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldSpec {
    /// Start location name.
    pub start: String,
    /// Locations with their neighbors.
    pub locations: Vec<LocationSpec>,
    /// Enemy bindings.
    #[serde(default)]
    pub encounters: Vec<EncounterSpec>,
}

/// A location entry in a [`WorldSpec`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSpec {
    /// Location name.
    pub name: String,
    /// Reachable neighbors.
    #[serde(default)]
    pub neighbors: Vec<String>,
}

/// An enemy binding in a [`WorldSpec`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterSpec {
    /// Location the enemy guards.
    pub location: String,
    /// Enemy name.
    pub enemy: String,
    /// Enemy health.
    pub health: u32,
    /// Enemy strength.
    pub strength: u32,
    /// Possible drops.
    pub loot: Vec<String>,
}

impl WorldSpec {
    /// Validate the document and build a [`WorldMap`].
    pub fn build(self) -> GameResult<WorldMap> {
        let mut builder = WorldMap::builder(self.start);
        for loc in self.locations {
            builder = builder.location(loc.name, loc.neighbors);
        }
        for enc in self.encounters {
            let template = EnemyTemplate::new(enc.enemy, enc.health, enc.strength, enc.loot)?;
            builder = builder.encounter(enc.location, template);
        }
        builder.build()
    }
}
