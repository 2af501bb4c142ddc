//! Combatants: the shared character capability set, the player, and enemies.
//!
//! Shared data lives in [`CharacterCore`]; the [`Character`] trait gives
//! both [`Player`] and [`Enemy`] the same health and inventory behavior
//! through default methods.

pub mod enemy;
pub mod player;

pub use enemy::{Enemy, EnemyStats, EnemyTemplate};
pub use player::{LevelUp, Player, PlayerStats};

use crate::error::{GameError, GameResult};

/// A hit point pool clamped between 0 and its maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    current: u32,
    max: u32,
}

impl Health {
    /// Create a full pool with the given maximum.
    pub fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Current hit points.
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Maximum hit points.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Remove hit points, flooring at 0. Returns the new value.
    pub fn damage(&mut self, amount: u32) -> u32 {
        self.current = self.current.saturating_sub(amount);
        self.current
    }

    /// Restore hit points, capping at the maximum. Returns the new value.
    pub fn heal(&mut self, amount: u32) -> u32 {
        self.current = self.current.saturating_add(amount).min(self.max);
        self.current
    }

    /// Raise the maximum by `amount` and refill completely.
    pub fn grow_and_refill(&mut self, amount: u32) {
        self.max = self.max.saturating_add(amount);
        self.current = self.max;
    }

    /// Returns true if no hit points remain.
    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

}

impl std::fmt::Display for Health {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.current, self.max)
    }
}

/// Attributes every combatant has.
///
/// Fields are only reachable inside this crate; callers read them through
/// [`Character`] and change them through its health and inventory methods.
///
/// ```compile_fail
/// let mut core = dx_core::CharacterCore::new("Hero", 10, 3).unwrap();
/// core.inventory.clear();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterCore {
    pub(crate) name: String,
    pub(crate) health: Health,
    /// Upper bound for damage rolls.
    pub(crate) strength: u32,
    /// Items carried, in the order they were gained.
    pub(crate) inventory: Vec<String>,
}

impl CharacterCore {
    /// Create a character at full health with an empty inventory.
    ///
    /// Fails if `max_health` or `strength` is zero.
    pub fn new(name: impl Into<String>, max_health: u32, strength: u32) -> GameResult<Self> {
        let name = name.into();
        if max_health == 0 {
            return Err(GameError::InvalidCharacter(format!(
                "{name} must start with health above 0"
            )));
        }
        if strength == 0 {
            return Err(GameError::InvalidCharacter(format!(
                "{name} must have strength above 0"
            )));
        }
        Ok(Self {
            name,
            health: Health::full(max_health),
            strength,
            inventory: Vec::new(),
        })
    }
}

/// Health and inventory behavior shared by the player and enemies.
pub trait Character {
    /// The shared attributes.
    fn core(&self) -> &CharacterCore;

    /// Mutable access to the shared attributes.
    fn core_mut(&mut self) -> &mut CharacterCore;

    /// Display name.
    fn name(&self) -> &str {
        &self.core().name
    }

    /// Current hit points.
    fn health(&self) -> u32 {
        self.core().health.current()
    }

    /// Maximum hit points.
    fn max_health(&self) -> u32 {
        self.core().health.max()
    }

    /// Upper bound for this character's damage rolls.
    fn strength(&self) -> u32 {
        self.core().strength
    }

    /// Carried items in acquisition order.
    fn inventory(&self) -> &[String] {
        &self.core().inventory
    }

    /// True while any hit points remain.
    fn is_alive(&self) -> bool {
        !self.core().health.is_empty()
    }

    /// Lose `amount` hit points, never dropping below 0.
    fn take_damage(&mut self, amount: u32) {
        self.core_mut().health.damage(amount);
    }

    /// Regain `amount` hit points, never exceeding the maximum.
    fn heal(&mut self, amount: u32) {
        self.core_mut().health.heal(amount);
    }

    /// Append an item. Duplicates are kept.
    fn add_to_inventory(&mut self, item: String) {
        self.core_mut().inventory.push(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    struct Dummy(CharacterCore);

    impl Character for Dummy {
        fn core(&self) -> &CharacterCore {
            &self.0
        }

        fn core_mut(&mut self) -> &mut CharacterCore {
            &mut self.0
        }
    }

    fn dummy(max: u32) -> Dummy {
        Dummy(CharacterCore::new("Dummy", max, 3).unwrap())
    }

    #[test]
    fn health_starts_full() {
        let h = Health::full(30);
        assert_eq!(h.current(), 30);
        assert_eq!(h.max(), 30);
        assert!(!h.is_empty());
    }

    #[test]
    fn damage_floors_at_zero() {
        let mut h = Health::full(10);
        assert_eq!(h.damage(25), 0);
        assert!(h.is_empty());
    }

    #[test]
    fn heal_caps_at_max() {
        let mut h = Health::full(10);
        h.damage(4);
        assert_eq!(h.heal(100), 10);
        assert_eq!(h.current(), h.max());
    }

    #[test]
    fn zero_damage_is_noop() {
        let mut h = Health::full(10);
        h.damage(3);
        assert_eq!(h.damage(0), 7);
    }

    #[test]
    fn grow_and_refill() {
        let mut h = Health::full(100);
        h.damage(60);
        h.grow_and_refill(20);
        assert_eq!(h.current(), 120);
        assert_eq!(h.max(), 120);
    }

    #[test]
    fn health_display() {
        let mut h = Health::full(50);
        h.damage(8);
        assert_eq!(h.to_string(), "42/50");
    }

    #[test]
    fn core_rejects_zero_stats() {
        assert!(CharacterCore::new("Ghost", 0, 5).is_err());
        assert!(CharacterCore::new("Pacifist", 10, 0).is_err());
    }

    #[test]
    fn alive_until_health_runs_out() {
        let mut d = dummy(5);
        assert!(d.is_alive());
        d.take_damage(4);
        assert!(d.is_alive());
        d.take_damage(1);
        assert!(!d.is_alive());
        assert_eq!(d.health(), 0);
    }

    #[test]
    fn heal_through_trait() {
        let mut d = dummy(20);
        d.take_damage(15);
        d.heal(7);
        assert_eq!(d.health(), 12);
        d.heal(50);
        assert_eq!(d.health(), d.max_health());
    }

    #[test]
    fn inventory_keeps_duplicates_in_order() {
        let mut d = dummy(5);
        d.add_to_inventory("Rope".to_string());
        d.add_to_inventory("Torch".to_string());
        d.add_to_inventory("Rope".to_string());
        assert_eq!(d.inventory(), ["Rope", "Torch", "Rope"]);
    }

    #[test]
    fn trait_mutators_keep_core_valid() {
        let mut d = dummy(8);
        d.add_to_inventory("Rope".to_string());
        d.take_damage(u32::MAX);
        d.heal(u32::MAX);
        assert_eq!(d.health(), 8);
        assert_eq!(d.strength(), 3);
        assert_eq!(d.inventory(), ["Rope"]);
    }

    #[derive(Debug, Clone)]
    enum HealthOp {
        Damage(u32),
        Heal(u32),
    }

    fn health_op() -> impl Strategy<Value = HealthOp> {
        prop_oneof![
            (0u32..200).prop_map(HealthOp::Damage),
            (0u32..200).prop_map(HealthOp::Heal),
        ]
    }

    proptest! {
        #[test]
        fn prop_health_stays_in_bounds(
            max in 1u32..500,
            ops in prop::collection::vec(health_op(), 0..64)
        ) {
            let mut d = dummy(max);
            for op in ops {
                match op {
                    HealthOp::Damage(n) => d.take_damage(n),
                    HealthOp::Heal(n) => d.heal(n),
                }
                prop_assert!(d.health() <= d.max_health());
                prop_assert_eq!(d.max_health(), max);
            }
        }
    }
}
