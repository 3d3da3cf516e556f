//! Counters and defended sites owned by the engine.
//!
//! Stored in `SimulationEngine` directly, NOT as ECS entities.

use skyguard_core::components::DefendedSite;
use skyguard_core::rules::GameRules;

/// Score, ammo and site status for the current run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameState {
    pub score: u32,
    pub ammo: u32,
    pub sites: Vec<DefendedSite>,
    /// Always equal to the number of alive entries in `sites`.
    pub sites_remaining: u32,
}

impl GameState {
    /// Fresh state for a new run: full ammo, every site alive.
    pub fn new(rules: &GameRules) -> Self {
        let sites: Vec<DefendedSite> = rules
            .site_positions
            .iter()
            .enumerate()
            .map(|(id, &x)| DefendedSite { id, x, alive: true })
            .collect();
        Self {
            score: 0,
            ammo: rules.initial_ammo,
            sites_remaining: sites.len() as u32,
            sites,
        }
    }

    /// Take one interceptor from the battery. False when empty.
    pub fn spend_ammo(&mut self) -> bool {
        match self.ammo.checked_sub(1) {
            Some(left) => {
                self.ammo = left;
                true
            }
            None => false,
        }
    }

    pub fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Indices of sites still standing, in id order.
    pub fn alive_site_indices(&self) -> Vec<usize> {
        self.sites
            .iter()
            .filter(|s| s.alive)
            .map(|s| s.id)
            .collect()
    }

    /// Mark a site destroyed. Returns false if it was already down or unknown.
    pub fn destroy_site(&mut self, index: usize) -> bool {
        match self.sites.get_mut(index) {
            Some(site) if site.alive => {
                site.alive = false;
                self.sites_remaining -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn all_sites_lost(&self) -> bool {
        self.sites_remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_matches_rules() {
        let rules = GameRules::default();
        let state = GameState::new(&rules);
        assert_eq!(state.score, 0);
        assert_eq!(state.ammo, 30);
        assert_eq!(state.sites_remaining, 6);
        assert_eq!(state.alive_site_indices(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_spend_ammo_stops_at_zero() {
        let rules = GameRules {
            initial_ammo: 2,
            ..Default::default()
        };
        let mut state = GameState::new(&rules);
        assert!(state.spend_ammo());
        assert!(state.spend_ammo());
        assert!(!state.spend_ammo());
        assert_eq!(state.ammo, 0);
    }

    #[test]
    fn test_destroy_site_once() {
        let mut state = GameState::new(&GameRules::default());
        assert!(state.destroy_site(2));
        assert!(!state.destroy_site(2), "second hit on a dead site is a no-op");
        assert!(!state.destroy_site(99));
        assert_eq!(state.sites_remaining, 5);
        assert_eq!(state.alive_site_indices(), vec![0, 1, 3, 4, 5]);
    }
}
