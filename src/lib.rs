/*!
Toy expected-payoff computation and a simplified Perfect Bayesian
Equilibrium check.

The caller supplies a strategy profile, a belief structure, and one opaque
belief-update rule per player. `pbe::is_perfect_bayesian_equilibrium` verifies
that no player has a strictly better unilateral deviation under the crate's
(deliberately non-standard) payoff formula, applying each passing player's
update rule to its beliefs in player order as it goes.
*/

pub mod game;
pub mod pbe;
