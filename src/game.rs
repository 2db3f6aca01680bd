use once_cell::sync::Lazy;

/// Probabilities a player assigns to one opponent's strategy choices.
pub type Belief = Vec<f64>;

/// One player's entire belief table, indexed by absolute player index.
/// A player's entry about itself exists but is never read.
pub type PlayerBeliefs = Vec<Belief>;

/// Belief tables of all players, index-aligned with the strategy profile.
pub type BeliefStructure = Vec<PlayerBeliefs>;

/// A strategy index into an implicit, unbounded strategy space.
pub type Strategy = usize;

/// One strategy per player, index-aligned.
pub type StrategyProfile = Vec<Strategy>;

/// A per-player rule revising that player's beliefs after its check passes.
/// The checker treats the rule as opaque.
pub trait UpdateRule {
    /// Maps a player's belief table to its revised belief table.
    fn update(&self, beliefs: &PlayerBeliefs) -> PlayerBeliefs;
}

impl<F> UpdateRule for F
where
    F: Fn(&PlayerBeliefs) -> PlayerBeliefs,
{
    #[inline]
    fn update(&self, beliefs: &PlayerBeliefs) -> PlayerBeliefs {
        self(beliefs)
    }
}

/// Keeps the prior: returns the belief table unchanged.
#[derive(Clone, Debug)]
pub struct PriorRule;

impl UpdateRule for PriorRule {
    #[inline]
    fn update(&self, beliefs: &PlayerBeliefs) -> PlayerBeliefs {
        beliefs.clone()
    }
}

/// Two-player demonstration scenario: each player's beliefs about every
/// player's strategy choices.
pub static EXAMPLE_BELIEFS: Lazy<BeliefStructure> = Lazy::new(|| {
    vec![
        vec![vec![0.5, 0.5], vec![0.3, 0.7]],
        vec![vec![0.4, 0.6], vec![0.2, 0.8]],
    ]
});

/// Strategies chosen by the two demonstration players.
pub const EXAMPLE_STRATEGIES: [Strategy; 2] = [0, 1];
