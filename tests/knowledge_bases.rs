//! Theories built through checked symbol declarations, queried with the
//! prover and validated against hand-written models.

use reslog::model::{Interpretation, ModelError};
use reslog::resolution::{AskOutcome, ProofOutcome, ProverConfig};
use reslog::syntax::{BuildError, FnSym, Formula, PredSym, Term, Var};
use reslog::Theory;

struct Kinship {
    parent: PredSym,
    grandparent: PredSym,
    mother_of: FnSym,
}

impl Kinship {
    fn new() -> Self {
        Kinship {
            parent: PredSym::new("Parent", 2),
            grandparent: PredSym::new("Grandparent", 2),
            mother_of: FnSym::new("mother_of", 1),
        }
    }

    fn theory(&self) -> reslog::Result<Theory> {
        let (x, y, z) = (Term::var("x"), Term::var("y"), Term::var("z"));
        let rule = Formula::forall_all(
            [Var::new("x"), Var::new("y"), Var::new("z")],
            Formula::implies(
                Formula::and(
                    self.parent.apply(vec![x.clone(), y.clone()])?,
                    self.parent.apply(vec![y.clone(), z.clone()])?,
                ),
                self.grandparent.apply(vec![x.clone(), z])?,
            ),
        );
        let mothers = Formula::forall(
            "x",
            self.parent.apply(vec![self.mother_of.apply(vec![x.clone()])?, x])?,
        );
        let mut theory: Theory = vec![rule, mothers].into_iter().collect();
        theory.extend([
            self.parent
                .apply(vec![Term::constant("abe"), Term::constant("homer")])?,
            self.parent
                .apply(vec![Term::constant("homer"), Term::constant("bart")])?,
        ]);
        Ok(theory)
    }
}

#[test]
fn test_grandparent_is_entailed() -> reslog::Result<()> {
    let kin = Kinship::new();
    let theory = kin.theory()?;
    let query = kin
        .grandparent
        .apply(vec![Term::constant("abe"), Term::constant("bart")])?;
    assert!(theory.entails(&query).is_entailed());

    let wrong = kin
        .grandparent
        .apply(vec![Term::constant("bart"), Term::constant("abe")])?;
    // mother_of only occurs in a positive unit, so the clause set saturates.
    assert!(theory.entails(&wrong).is_not_entailed());
    Ok(())
}

#[test]
fn test_transitive_ancestry_runs_out_of_budget() -> reslog::Result<()> {
    let kin = Kinship::new();
    let ancestor = PredSym::new("Ancestor", 2);
    let (x, y, z) = (Term::var("x"), Term::var("y"), Term::var("z"));
    let mut theory = Theory::with_config(
        ProverConfig::default()
            .with_max_iterations(200)
            .with_max_clauses(5_000),
    );
    theory.extend(kin.theory()?.formulas().iter().cloned());
    theory.add(Formula::forall_all(
        [Var::new("x"), Var::new("y")],
        Formula::implies(
            kin.parent.apply(vec![x.clone(), y.clone()])?,
            ancestor.apply(vec![x.clone(), y.clone()])?,
        ),
    ));
    theory.add(Formula::forall_all(
        [Var::new("x"), Var::new("y"), Var::new("z")],
        Formula::implies(
            Formula::and(
                ancestor.apply(vec![x.clone(), y.clone()])?,
                ancestor.apply(vec![y, z.clone()])?,
            ),
            ancestor.apply(vec![x, z])?,
        ),
    ));
    // Ancestors of the form mother_of(mother_of(...)) never run out.
    let query = ancestor.apply(vec![Term::constant("bart"), Term::constant("abe")])?;
    let (outcome, stats) = theory.entails_with_stats(&query);
    assert!(outcome.is_unknown(), "got {:?}", stats);
    Ok(())
}

#[test]
fn test_grandmother_through_function_symbol() -> reslog::Result<()> {
    let kin = Kinship::new();
    let theory = kin.theory()?;
    let grandmother = kin.mother_of.apply(vec![Term::constant("homer")])?;
    let query = kin
        .grandparent
        .apply(vec![grandmother, Term::constant("bart")])?;
    assert!(theory.entails(&query).is_entailed());
    Ok(())
}

#[test]
fn test_ask_for_grandchildren_of_abe() -> reslog::Result<()> {
    let kin = Kinship::new();
    let theory = kin.theory()?;
    let query = kin
        .grandparent
        .apply(vec![Term::constant("abe"), Term::var("who")])?;
    match theory.ask(&query) {
        AskOutcome::Answered(answers) => {
            assert!(!answers.is_empty());
            let bart = Term::constant("bart");
            assert!(answers
                .iter()
                .any(|a| a.lookup(&Var::new("who")) == Some(&bart)));
        }
        other => panic!("expected an answer, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_arity_errors_surface_through_crate_error() {
    let kin = Kinship::new();
    let err = kin
        .parent
        .apply(vec![Term::constant("abe")])
        .map_err(reslog::Error::from)
        .unwrap_err();
    assert_eq!(
        err,
        reslog::Error::Build(BuildError::ArityMismatch {
            symbol: "Parent".to_string(),
            expected: 2,
            found: 1,
        })
    );
    assert!(matches!(
        Formula::try_pred("", vec![]),
        Err(BuildError::EmptySymbol)
    ));
}

fn simpsons() -> Result<Interpretation, ModelError> {
    let mut interp = Interpretation::new(["abe", "homer", "bart", "mona"]);
    interp.add_relation(
        "Parent",
        2,
        [
            ["abe", "homer"],
            ["homer", "bart"],
            ["mona", "homer"],
            ["mona", "mona"],
            ["mona", "abe"],
        ],
    )?;
    interp.add_relation(
        "Grandparent",
        2,
        [
            ["abe", "bart"],
            ["mona", "bart"],
            ["mona", "homer"],
            ["mona", "mona"],
            ["mona", "abe"],
        ],
    )?;
    interp.add_function(
        "mother_of",
        1,
        [
            (["abe"], "mona"),
            (["homer"], "mona"),
            (["bart"], "homer"),
            (["mona"], "mona"),
        ],
    )?;
    Ok(interp)
}

#[test]
fn test_theory_has_a_finite_model() -> reslog::Result<()> {
    let theory = Kinship::new().theory()?;
    let interp = simpsons()?;
    assert!(theory.is_model(&interp)?);

    let mut broken = interp;
    broken.set_fact("Grandparent", ["abe", "bart"], false)?;
    assert!(!theory.is_model(&broken)?);
    Ok(())
}

#[test]
fn test_missing_symbols_are_model_errors() -> reslog::Result<()> {
    let theory = Kinship::new().theory()?;
    let bare = Interpretation::new(["abe"]);
    let err = theory.is_model(&bare).map_err(reslog::Error::from);
    assert!(matches!(
        err,
        Err(reslog::Error::Model(ModelError::UndefinedPredicate(_)))
            | Err(reslog::Error::Model(ModelError::UndefinedFunction(_)))
    ));
    Ok(())
}

#[test]
fn test_outcome_and_config_serialize() -> reslog::Result<()> {
    let config = ProverConfig::default()
        .with_max_iterations(250)
        .with_factoring(false);
    let json = serde_json::to_string(&config).expect("serialize config");
    let back: ProverConfig = serde_json::from_str(&json).expect("deserialize config");
    assert_eq!(back, config);

    let kin = Kinship::new();
    let theory = kin.theory()?;
    let query = kin
        .parent
        .apply(vec![Term::constant("abe"), Term::constant("homer")])?;
    let outcome = theory.entails(&query);
    let json = serde_json::to_string(&outcome).expect("serialize outcome");
    let back: ProofOutcome = serde_json::from_str(&json).expect("deserialize outcome");
    assert_eq!(back, outcome);

    let answers = theory.ask(
        &kin.grandparent
            .apply(vec![Term::constant("abe"), Term::var("who")])?,
    );
    assert!(answers.is_answered());
    let json = serde_json::to_string(&answers).expect("serialize answers");
    let back: AskOutcome = serde_json::from_str(&json).expect("deserialize answers");
    assert_eq!(back, answers);
    Ok(())
}
