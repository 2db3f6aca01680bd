use log::debug;
use pbe_check::game::{PriorRule, UpdateRule, EXAMPLE_BELIEFS, EXAMPLE_STRATEGIES};
use pbe_check::pbe::{best_deviation, is_perfect_bayesian_equilibrium};

fn main() {
    env_logger::init();

    let strategies = EXAMPLE_STRATEGIES.to_vec();
    let mut beliefs = EXAMPLE_BELIEFS.clone();
    let update_rules: Vec<Box<dyn UpdateRule>> = vec![Box::new(PriorRule), Box::new(PriorRule)];

    let equilibrium =
        is_perfect_bayesian_equilibrium(&strategies, &mut beliefs, &update_rules).unwrap();

    if equilibrium {
        println!("The given strategy profile, beliefs, and update rules constitute a Perfect Bayesian Equilibrium (PBE).");
    } else {
        for (player, &strategy) in strategies.iter().enumerate() {
            if let Ok(Some((deviation, payoff))) = best_deviation(player, strategy, &beliefs) {
                debug!(
                    "player {} prefers strategy {} (pays {:.4})",
                    player, deviation, payoff
                );
            }
        }
        println!("The given strategy profile, beliefs, and update rules do not constitute a PBE.");
    }
}
