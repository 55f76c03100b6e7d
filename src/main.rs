//! reslog demo: clausifies and queries a few small knowledge bases.

mod logger;
mod problems;

use std::io::IsTerminal;

use reslog::model::{Interpretation, ModelError};
use reslog::normalize::to_cnf;
use reslog::resolution::{ask, prove_with_stats, AskOutcome, ProofOutcome, ProverConfig};
use reslog::syntax::Formula;

use problems::Problem;

fn main() {
    logger::init_from_env(std::io::stderr().is_terminal());
    let config = ProverConfig::default();

    section("Propositional formulas");
    for (name, formula) in [
        ("summer/rain", problems::summer_in_california()),
        ("wet/rain", problems::wet_weather()),
        ("day/night", problems::day_or_night()),
    ] {
        show_formula(name, &formula);
    }

    section("First-order formulas");
    for (name, formula) in [
        ("parents", problems::everyone_has_a_parent()),
        ("no children", problems::someone_is_childless()),
        ("father", problems::father_definition()),
        ("granddaughter", problems::granddaughter_definition()),
    ] {
        show_formula(name, &formula);
    }

    section("Entailment");
    let weather = Problem {
        name: "wet weather",
        premises: vec![problems::wet_weather(), Formula::prop("Rain")],
        query: Formula::prop("Wet"),
    };
    run(&weather, &config);
    run(&problems::peano_parity(1), &config);
    run(&problems::peano_parity(3), &config);
    run(&problems::number_theory(), &config.clone().with_max_iterations(500));

    section("Liar puzzle");
    let liar = problems::liar_puzzle();
    match ask(&liar.premises, &liar.query, &config) {
        AskOutcome::Answered(answers) => {
            for answer in answers {
                println!("{} holds for {}", liar.query, answer);
            }
        }
        AskOutcome::NotEntailed(_) => println!("no suspect follows from the statements"),
        AskOutcome::Unknown(_) => println!("search bound reached"),
    }
    match liar_models(&liar) {
        Ok(models) => {
            println!("{} of 16 guilt/truth assignments satisfy the statements:", models.len());
            for (guilty, truthful) in models {
                println!("  {} crashed the server, {} tells the truth", guilty, truthful);
            }
        }
        Err(e) => eprintln!("model checking failed: {}", e),
    }
}

fn section(title: &str) {
    println!("\n--- {} ---", title);
}

fn show_formula(name: &str, formula: &Formula) {
    println!("{:<14} {}", name, formula);
    for clause in to_cnf(formula) {
        println!("{:<14}   {}", "", clause);
    }
}

fn run(problem: &Problem, config: &ProverConfig) {
    let (outcome, stats) = prove_with_stats(&problem.premises, &problem.query, config);
    let verdict = match &outcome {
        ProofOutcome::Entailed(_) => "entailed",
        ProofOutcome::NotEntailed(_) => "not entailed",
        ProofOutcome::Unknown(_) => "unknown (bound reached)",
    };
    println!(
        "{}: {} is {} [{} iterations, depth {}, {} clauses]",
        problem.name,
        problem.query,
        verdict,
        stats.iterations,
        stats.depth,
        outcome.clauses().len()
    );
}

/// Assignments of one culprit and one truth-teller that satisfy every premise.
fn liar_models(liar: &Problem) -> Result<Vec<(&'static str, &'static str)>, ModelError> {
    let mut models = Vec::new();
    for guilty in problems::SUSPECTS {
        for truthful in problems::SUSPECTS {
            let mut interp = Interpretation::new(problems::SUSPECTS);
            interp.add_relation("CrashedServer", 1, [[guilty]])?;
            interp.add_relation("TellTruth", 1, [[truthful]])?;
            let mut satisfied = true;
            for premise in &liar.premises {
                if !reslog::check_model(premise, &interp)? {
                    satisfied = false;
                    break;
                }
            }
            if satisfied {
                models.push((guilty, truthful));
            }
        }
    }
    Ok(models)
}
