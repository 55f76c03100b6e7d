//! End-to-end scenarios: clausification, refutation and model checking on
//! small knowledge bases.

use reslog::model::{check_model, Interpretation};
use reslog::resolution::{ask, prove, AskOutcome, ProofOutcome, ProverConfig};
use reslog::syntax::{Formula, Term, Var};

fn pred(name: &str, args: Vec<Term>) -> Formula {
    Formula::pred(name, args)
}

fn c(name: &str) -> Term {
    Term::constant(name)
}

#[test]
fn test_wet_follows_from_rain() {
    let premises = vec![
        Formula::iff(
            Formula::prop("Wet"),
            Formula::or(Formula::prop("Rain"), Formula::prop("Sprinklers")),
        ),
        Formula::prop("Rain"),
    ];
    let outcome = prove(&premises, &Formula::prop("Wet"), &ProverConfig::default());
    match outcome {
        ProofOutcome::Entailed(cnf) => {
            // three clauses from the biconditional, Rain, and ¬Wet
            assert_eq!(cnf.len(), 5);
        }
        other => panic!("expected Entailed, got {:?}", other),
    }
    assert!(prove(&premises, &Formula::prop("Sprinklers"), &ProverConfig::default())
        .is_not_entailed());
}

#[test]
fn test_alice_has_a_parent() {
    let premises = vec![
        Formula::forall(
            "x",
            Formula::implies(
                pred("Person", vec![Term::var("x")]),
                Formula::exists("y", pred("Parent", vec![Term::var("x"), Term::var("y")])),
            ),
        ),
        pred("Person", vec![c("alice")]),
    ];
    let query = Formula::exists("y", pred("Parent", vec![c("alice"), Term::var("y")]));
    assert!(prove(&premises, &query, &ProverConfig::default()).is_entailed());

    // Nothing says who the parent is.
    let named = pred("Parent", vec![c("alice"), c("bob")]);
    assert!(prove(&premises, &named, &ProverConfig::default()).is_not_entailed());
}

const SUSPECTS: [&str; 4] = ["mark", "john", "nicole", "susan"];

fn tells_truth(who: &str) -> Formula {
    pred("TellTruth", vec![c(who)])
}

fn crashed(who: &str) -> Formula {
    pred("CrashedServer", vec![c(who)])
}

fn exactly_one(formulas: Vec<Formula>) -> Formula {
    let mut at_most_one = Vec::new();
    for i in 0..formulas.len() {
        for j in (i + 1)..formulas.len() {
            at_most_one.push(Formula::negation(Formula::and(
                formulas[i].clone(),
                formulas[j].clone(),
            )));
        }
    }
    Formula::and(Formula::or_all(formulas), Formula::and_all(at_most_one))
}

fn liar_premises() -> Vec<Formula> {
    vec![
        Formula::iff(tells_truth("mark"), Formula::negation(crashed("mark"))),
        Formula::iff(tells_truth("john"), crashed("nicole")),
        Formula::iff(tells_truth("nicole"), crashed("susan")),
        Formula::iff(tells_truth("susan"), Formula::negation(tells_truth("nicole"))),
        exactly_one(SUSPECTS.iter().map(|s| tells_truth(s)).collect()),
        exactly_one(SUSPECTS.iter().map(|s| crashed(s)).collect()),
    ]
}

#[test]
fn test_liar_puzzle_has_exactly_one_model() {
    let premises = liar_premises();
    let mut accepted = Vec::new();
    for guilty in SUSPECTS {
        for truthful in SUSPECTS {
            let mut interp = Interpretation::new(SUSPECTS);
            interp
                .add_relation("CrashedServer", 1, [[guilty]])
                .expect("CrashedServer");
            interp
                .add_relation("TellTruth", 1, [[truthful]])
                .expect("TellTruth");
            let holds = premises
                .iter()
                .map(|f| check_model(f, &interp).expect("fully interpreted"))
                .all(|b| b);
            if holds {
                accepted.push((guilty, truthful));
            }
        }
    }
    assert_eq!(accepted, vec![("mark", "susan")]);
}

#[test]
fn test_liar_puzzle_names_the_culprit() {
    let premises = liar_premises();
    let config = ProverConfig::default();
    assert!(prove(&premises, &crashed("mark"), &config).is_entailed());
    assert!(prove(&premises, &Formula::negation(crashed("john")), &config).is_entailed());

    match ask(&premises, &pred("CrashedServer", vec![Term::var("x")]), &config) {
        AskOutcome::Answered(answers) => {
            assert!(!answers.is_empty());
            assert!(answers
                .iter()
                .any(|a| a.lookup(&Var::new("x")) == Some(&c("mark"))));
        }
        other => panic!("expected an answer, got {:?}", other),
    }
}

fn succ(t: Term) -> Term {
    Term::app("succ", vec![t])
}

fn parity_premises() -> Vec<Formula> {
    vec![
        pred("Even", vec![c("0")]),
        Formula::forall(
            "x",
            Formula::implies(
                pred("Even", vec![Term::var("x")]),
                pred("Odd", vec![succ(Term::var("x"))]),
            ),
        ),
    ]
}

#[test]
fn test_parity_entailment_both_ways() {
    let premises = parity_premises();
    let config = ProverConfig::default();
    let one = pred("Odd", vec![succ(c("0"))]);
    let three = pred("Odd", vec![succ(succ(succ(c("0"))))]);
    assert!(prove(&premises, &one, &config).is_entailed());
    assert!(prove(&premises, &three, &config).is_not_entailed());
}

#[test]
fn test_universal_query_over_infinite_domain_is_unknown_or_refuted() {
    // ∀x ∃y Larger(y, x) with Larger(succ(x), x) is provable, and the prover
    // must not call it NotEntailed under any bound.
    let premises = vec![Formula::forall(
        "x",
        pred("Larger", vec![succ(Term::var("x")), Term::var("x")]),
    )];
    let query = Formula::forall(
        "x",
        Formula::exists("y", pred("Larger", vec![Term::var("y"), Term::var("x")])),
    );
    for bound in [1, 5, 50] {
        let config = ProverConfig::default().with_max_iterations(bound);
        assert!(!prove(&premises, &query, &config).is_not_entailed());
    }
    assert!(prove(&premises, &query, &ProverConfig::default()).is_entailed());
}
