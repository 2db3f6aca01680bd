use crate::game::*;
use log::debug;
use ordered_float::NotNan;
use thiserror::Error;

/// Input the check cannot evaluate: mismatched sequence lengths or a strategy
/// index outside a belief vector. Fail fast, no recovery.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid input: {0}")]
pub struct InvalidInput(String);

impl InvalidInput {
    fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Computes the expected payoff for `player` choosing `strategy` under
/// `beliefs`.
///
/// `types` is accepted for interface compatibility and ignored. The payoff is
/// the sum, over every other player `q`, of the probability `player` assigns
/// to `q` playing exactly `strategy`. An index `q`'s table never reaches
/// contributes nothing; indexing past the end of one of `player`'s own belief
/// vectors is an error.
pub fn expected_payoff(
    player: usize,
    strategy: Strategy,
    _types: &[usize],
    beliefs: &BeliefStructure,
) -> Result<f64, InvalidInput> {
    let own = beliefs
        .get(player)
        .ok_or_else(|| InvalidInput::new(format!("no beliefs for player {}", player)))?;

    let mut payoff = 0.0;
    for (other, other_beliefs) in beliefs.iter().enumerate() {
        if other == player {
            continue;
        }
        for other_strategy in 0..other_beliefs.len() {
            if other_strategy != strategy {
                continue;
            }
            let prob = own
                .get(other)
                .and_then(|belief| belief.get(other_strategy))
                .ok_or_else(|| {
                    InvalidInput::new(format!(
                        "strategy {} outside player {}'s belief about player {}",
                        other_strategy, player, other
                    ))
                })?;
            payoff += *prob;
        }
    }
    Ok(payoff)
}

/// Checks whether `strategies`, `beliefs`, and `update_rules` constitute a
/// Perfect Bayesian Equilibrium under the simplified best-response condition.
///
/// Players are visited in index order. A player with a strictly better
/// deviation fails the whole check immediately: its own update rule is
/// skipped, later players are not evaluated, and updates already applied to
/// earlier players are not rolled back. Otherwise the player's belief table
/// is replaced by its update rule's output before the next player runs, so a
/// later player is evaluated against earlier players' updated beliefs.
pub fn is_perfect_bayesian_equilibrium(
    strategies: &StrategyProfile,
    beliefs: &mut BeliefStructure,
    update_rules: &[Box<dyn UpdateRule>],
) -> Result<bool, InvalidInput> {
    if strategies.len() != beliefs.len() || strategies.len() != update_rules.len() {
        return Err(InvalidInput::new(format!(
            "mismatched lengths: {} strategies, {} belief tables, {} update rules",
            strategies.len(),
            beliefs.len(),
            update_rules.len()
        )));
    }

    let types = (0..beliefs.len()).collect::<Vec<_>>();

    for (player, &strategy) in strategies.iter().enumerate() {
        let expected = expected_payoff(player, strategy, &types, beliefs)?;
        debug!("player {}: strategy {} pays {:.4}", player, strategy, expected);

        for other_strategy in 0..beliefs[player].len() {
            let payoff = expected_payoff(player, other_strategy, &types, beliefs)?;
            if payoff > expected {
                debug!(
                    "player {}: deviation to strategy {} pays {:.4} > {:.4}",
                    player, other_strategy, payoff, expected
                );
                return Ok(false);
            }
        }

        let updated = update_rules[player].update(&beliefs[player]);
        beliefs[player] = updated;
    }

    Ok(true)
}

/// Returns the best-paying deviation for `player`, if one strictly beats the
/// payoff of the `current` strategy. Purely observational; `beliefs` is never
/// mutated.
pub fn best_deviation(
    player: usize,
    current: Strategy,
    beliefs: &BeliefStructure,
) -> Result<Option<(Strategy, f64)>, InvalidInput> {
    let types = (0..beliefs.len()).collect::<Vec<_>>();
    let expected = ordered(expected_payoff(player, current, &types, beliefs)?)?;

    let num_candidates = beliefs
        .get(player)
        .ok_or_else(|| InvalidInput::new(format!("no beliefs for player {}", player)))?
        .len();

    let mut best: Option<(Strategy, NotNan<f64>)> = None;
    for candidate in 0..num_candidates {
        let payoff = ordered(expected_payoff(player, candidate, &types, beliefs)?)?;
        match best {
            Some((_, top)) if payoff <= top => {}
            _ => best = Some((candidate, payoff)),
        }
    }

    Ok(best
        .filter(|&(_, payoff)| payoff > expected)
        .map(|(candidate, payoff)| (candidate, payoff.into_inner())))
}

#[inline]
fn ordered(payoff: f64) -> Result<NotNan<f64>, InvalidInput> {
    NotNan::new(payoff).map_err(|_| InvalidInput::new("payoff is NaN"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payoff_sums_own_beliefs_across_opponents() {
        let beliefs: BeliefStructure = vec![
            vec![vec![0.0, 0.0], vec![0.6, 0.4], vec![0.1, 0.9]],
            vec![vec![0.5, 0.5], vec![0.0, 0.0], vec![0.5, 0.5]],
            vec![vec![0.2, 0.8], vec![0.7, 0.3], vec![0.0, 0.0]],
        ];
        let types = [0, 1, 2];
        // beliefs[0][1][0] + beliefs[0][2][0]
        assert!((expected_payoff(0, 0, &types, &beliefs).unwrap() - 0.7).abs() < 1e-12);
        // beliefs[1][0][1] + beliefs[1][2][1]
        assert!((expected_payoff(1, 1, &types, &beliefs).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn types_are_ignored() {
        let beliefs = EXAMPLE_BELIEFS.clone();
        let bare = expected_payoff(0, 0, &[], &beliefs).unwrap();
        let padded = expected_payoff(0, 0, &[9, 9, 9, 9], &beliefs).unwrap();
        assert_eq!(bare, padded);
    }

    #[test]
    fn zero_beliefs_pay_zero() {
        let beliefs: BeliefStructure = vec![vec![vec![0.0; 3]; 2]; 2];
        let types = [0, 1];
        for player in 0..2 {
            for strategy in 0..3 {
                assert_eq!(
                    expected_payoff(player, strategy, &types, &beliefs).unwrap(),
                    0.0
                );
            }
        }
    }

    #[test]
    fn strategies_beyond_an_opponents_table_contribute_nothing() {
        // Player 1's table has a single entry, so only strategy 0 can match.
        let beliefs: BeliefStructure = vec![
            vec![vec![0.5, 0.5], vec![0.3, 0.7]],
            vec![vec![0.4]],
        ];
        assert!((expected_payoff(0, 0, &[0, 1], &beliefs).unwrap() - 0.3).abs() < 1e-12);
        assert_eq!(expected_payoff(0, 1, &[0, 1], &beliefs).unwrap(), 0.0);
    }

    #[test]
    fn short_belief_vector_is_invalid_input() {
        // Player 1's table says two strategies exist, but player 0 only holds
        // a one-entry belief about player 1.
        let beliefs: BeliefStructure = vec![
            vec![vec![0.5], vec![0.9]],
            vec![vec![0.4, 0.6], vec![0.2, 0.8]],
        ];
        assert!(expected_payoff(0, 1, &[0, 1], &beliefs).is_err());
    }

    #[test]
    fn unknown_player_is_invalid_input() {
        assert!(expected_payoff(5, 0, &[0, 1], &EXAMPLE_BELIEFS).is_err());
    }
}
