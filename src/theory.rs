//! Theory: an ordered knowledge base of premise formulas.

use crate::model::{check_model, Interpretation, ModelError};
use crate::normalize::to_cnf_all;
use crate::resolution::{ask, prove_with_stats, AskOutcome, ProofOutcome, ProofStats, ProverConfig};
use crate::syntax::{Clause, Formula, Signature};

/// A set of premises queried by refutation.
#[derive(Debug, Clone, Default)]
pub struct Theory {
    formulas: Vec<Formula>,
    config: ProverConfig,
}

impl Theory {
    /// Create an empty theory.
    pub fn new() -> Self {
        Theory::default()
    }

    pub fn with_config(config: ProverConfig) -> Self {
        Theory {
            formulas: Vec::new(),
            config,
        }
    }

    /// Add a premise.
    pub fn add(&mut self, formula: Formula) {
        self.formulas.push(formula);
    }

    pub fn formulas(&self) -> &[Formula] {
        &self.formulas
    }

    pub fn config(&self) -> &ProverConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }

    /// The premises in clause form. Skolem symbols are fresh on every call.
    pub fn clauses(&self) -> Vec<Clause> {
        to_cnf_all(&self.formulas)
    }

    /// Compute the signature of this theory.
    pub fn signature(&self) -> Signature {
        let mut sig = Signature::empty();
        for formula in &self.formulas {
            sig.extend(&Signature::from_formula(formula));
        }
        sig
    }

    /// Whether the premises entail `query`.
    pub fn entails(&self, query: &Formula) -> ProofOutcome {
        self.entails_with_stats(query).0
    }

    pub fn entails_with_stats(&self, query: &Formula) -> (ProofOutcome, ProofStats) {
        prove_with_stats(&self.formulas, query, &self.config)
    }

    /// Bindings for the free variables of `query` under which it follows.
    pub fn ask(&self, query: &Formula) -> AskOutcome {
        ask(&self.formulas, query, &self.config)
    }

    /// Whether every premise holds in the interpretation.
    pub fn is_model(&self, interp: &Interpretation) -> Result<bool, ModelError> {
        for formula in &self.formulas {
            if !check_model(formula, interp)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl FromIterator<Formula> for Theory {
    fn from_iter<I: IntoIterator<Item = Formula>>(iter: I) -> Self {
        Theory {
            formulas: iter.into_iter().collect(),
            config: ProverConfig::default(),
        }
    }
}

impl Extend<Formula> for Theory {
    fn extend<I: IntoIterator<Item = Formula>>(&mut self, iter: I) {
        self.formulas.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Term;

    fn weather() -> Theory {
        let mut theory = Theory::new();
        theory.add(Formula::iff(
            Formula::prop("Wet"),
            Formula::or(Formula::prop("Rain"), Formula::prop("Sprinklers")),
        ));
        theory.add(Formula::prop("Rain"));
        theory
    }

    #[test]
    fn test_entails_and_signature() {
        let theory = weather();
        assert!(theory.entails(&Formula::prop("Wet")).is_entailed());
        assert!(theory.entails(&Formula::prop("Sprinklers")).is_not_entailed());
        let sig = theory.signature();
        assert!(sig.predicates.contains(&("Wet".to_string(), 0)));
        assert_eq!(sig.predicates.len(), 3);
        assert_eq!(theory.clauses().len(), 4);
    }

    #[test]
    fn test_is_model() {
        let theory = weather();
        let mut interp = Interpretation::new(Vec::<String>::new());
        interp.add_proposition("Rain", true);
        interp.add_proposition("Sprinklers", false);
        interp.add_proposition("Wet", true);
        assert_eq!(theory.is_model(&interp), Ok(true));
        interp.add_proposition("Wet", false);
        assert_eq!(theory.is_model(&interp), Ok(false));
    }

    #[test]
    fn test_collect_and_ask() {
        let theory: Theory = vec![
            Formula::pred("Parent", vec![Term::constant("alice"), Term::constant("bob")]),
            Formula::pred("Parent", vec![Term::constant("bob"), Term::constant("carol")]),
        ]
        .into_iter()
        .collect();
        assert_eq!(theory.len(), 2);
        let who = Formula::pred("Parent", vec![Term::var("p"), Term::constant("carol")]);
        match theory.ask(&who) {
            AskOutcome::Answered(answers) => {
                assert_eq!(answers.len(), 1);
                assert_eq!(answers[0].to_string(), "{p ↦ bob}");
            }
            other => panic!("expected an answer, got {:?}", other),
        }
    }
}
