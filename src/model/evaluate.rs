//! Evaluation of formulas in a finite interpretation.

use super::{Interpretation, ModelError};
use crate::normalize::clause_to_formula;
use crate::syntax::{Atom, Clause, Formula, Signature, Term, Var};

/// Evaluate a formula by structural recursion.
///
/// Every symbol and free variable of the formula must be interpreted; this is
/// checked before evaluation starts, so a branch skipped by short-circuiting
/// cannot hide an undefined symbol. Quantifiers range over the
/// interpretation's domain and stop at the first element that decides them.
pub fn evaluate(formula: &Formula, interp: &Interpretation) -> Result<bool, ModelError> {
    check_signature(&Signature::from_formula(formula), interp)?;
    if let Some(var) = formula
        .free_variables()
        .into_iter()
        .find(|v| interp.assigned(v).is_none())
    {
        return Err(ModelError::UnboundVariable(var));
    }
    Evaluator::new(interp).formula(formula)
}

/// Whether `formula` holds in `interp`. Same contract as [`evaluate`].
pub fn check_model(formula: &Formula, interp: &Interpretation) -> Result<bool, ModelError> {
    evaluate(formula, interp)
}

/// Whether every clause holds, reading clause variables universally.
pub fn evaluate_clauses(clauses: &[Clause], interp: &Interpretation) -> Result<bool, ModelError> {
    let mut sig = Signature::empty();
    for clause in clauses {
        sig.extend(&Signature::from_clause(clause));
    }
    check_signature(&sig, interp)?;
    for clause in clauses {
        if !Evaluator::new(interp).formula(&clause_to_formula(clause))? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn check_signature(sig: &Signature, interp: &Interpretation) -> Result<(), ModelError> {
    for (name, arity) in &sig.predicates {
        match interp.relation(name) {
            None => return Err(ModelError::UndefinedPredicate(name.clone())),
            Some(r) if r.arity != *arity => {
                return Err(ModelError::ArityMismatch {
                    symbol: name.clone(),
                    expected: r.arity,
                    found: *arity,
                })
            }
            Some(_) => {}
        }
    }
    for (name, arity) in &sig.functions {
        match interp.function(name) {
            Some(f) if f.arity != *arity => {
                return Err(ModelError::ArityMismatch {
                    symbol: name.clone(),
                    expected: f.arity,
                    found: *arity,
                })
            }
            Some(_) => {}
            None if *arity == 0 && interp.contains(name) => {}
            None => return Err(ModelError::UndefinedFunction(name.clone())),
        }
    }
    Ok(())
}

struct Evaluator<'a> {
    interp: &'a Interpretation,
    /// Quantifier bindings, innermost last.
    bound: Vec<(&'a Var, &'a str)>,
}

impl<'a> Evaluator<'a> {
    fn new(interp: &'a Interpretation) -> Self {
        Evaluator {
            interp,
            bound: Vec::new(),
        }
    }

    fn formula(&mut self, formula: &'a Formula) -> Result<bool, ModelError> {
        match formula {
            Formula::True => Ok(true),
            Formula::False => Ok(false),
            Formula::Atom(atom) => self.atom(atom),
            Formula::Not(inner) => Ok(!self.formula(inner)?),
            Formula::And(l, r) => Ok(self.formula(l)? && self.formula(r)?),
            Formula::Or(l, r) => Ok(self.formula(l)? || self.formula(r)?),
            Formula::Implies(l, r) => Ok(!self.formula(l)? || self.formula(r)?),
            Formula::Iff(l, r) => Ok(self.formula(l)? == self.formula(r)?),
            Formula::Forall(var, body) => self.quantifier(var, body, false),
            Formula::Exists(var, body) => self.quantifier(var, body, true),
        }
    }

    /// Universal quantification looks for a false instance, existential for a
    /// true one.
    fn quantifier(&mut self, var: &'a Var, body: &'a Formula, witness: bool) -> Result<bool, ModelError> {
        let interp = self.interp;
        for element in interp.domain() {
            self.bound.push((var, element));
            let value = self.formula(body);
            self.bound.pop();
            if value? == witness {
                return Ok(witness);
            }
        }
        Ok(!witness)
    }

    fn atom(&self, atom: &Atom) -> Result<bool, ModelError> {
        let relation = self
            .interp
            .relation(&atom.predicate)
            .ok_or_else(|| ModelError::UndefinedPredicate(atom.predicate.clone()))?;
        if relation.arity != atom.args.len() {
            return Err(ModelError::ArityMismatch {
                symbol: atom.predicate.clone(),
                expected: relation.arity,
                found: atom.args.len(),
            });
        }
        let args = atom
            .args
            .iter()
            .map(|t| self.term(t))
            .collect::<Result<Vec<String>, _>>()?;
        Ok(relation.tuples.contains(&args))
    }

    fn term(&self, term: &Term) -> Result<String, ModelError> {
        match term {
            Term::Var(var) => self
                .bound
                .iter()
                .rev()
                .find(|(v, _)| *v == var)
                .map(|(_, e)| e.to_string())
                .or_else(|| self.interp.assigned(var).map(str::to_string))
                .ok_or_else(|| ModelError::UnboundVariable(var.clone())),
            Term::App(sym, args) => {
                if let Some(function) = self.interp.function(&sym.name) {
                    if function.arity != args.len() {
                        return Err(ModelError::ArityMismatch {
                            symbol: sym.name.clone(),
                            expected: function.arity,
                            found: args.len(),
                        });
                    }
                    let values = args
                        .iter()
                        .map(|t| self.term(t))
                        .collect::<Result<Vec<String>, _>>()?;
                    return function
                        .table
                        .get(&values)
                        .cloned()
                        .ok_or_else(|| ModelError::UndefinedFunction(sym.name.clone()));
                }
                if args.is_empty() && self.interp.contains(&sym.name) {
                    return Ok(sym.name.clone());
                }
                Err(ModelError::UndefinedFunction(sym.name.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinship() -> Interpretation {
        let mut interp = Interpretation::new(["alice", "bob", "carol"]);
        interp
            .add_relation("Person", 1, [["alice"], ["bob"], ["carol"]])
            .expect("Person");
        interp
            .add_relation("Parent", 2, [["alice", "bob"], ["bob", "carol"], ["carol", "alice"]])
            .expect("Parent");
        interp
    }

    fn everyone_has_a_parent() -> Formula {
        Formula::forall(
            "x",
            Formula::implies(
                Formula::pred("Person", vec![Term::var("x")]),
                Formula::exists("y", Formula::pred("Parent", vec![Term::var("y"), Term::var("x")])),
            ),
        )
    }

    #[test]
    fn test_quantifiers_expand_over_domain() {
        let mut interp = kinship();
        assert_eq!(evaluate(&everyone_has_a_parent(), &interp), Ok(true));
        interp.set_fact("Parent", ["carol", "alice"], false).expect("declared");
        assert_eq!(evaluate(&everyone_has_a_parent(), &interp), Ok(false));
    }

    #[test]
    fn test_connectives() {
        let mut interp = Interpretation::new(Vec::<String>::new());
        interp.add_proposition("Rain", true);
        interp.add_proposition("Wet", false);
        let rain = Formula::prop("Rain");
        let wet = Formula::prop("Wet");
        assert_eq!(evaluate(&Formula::implies(rain.clone(), wet.clone()), &interp), Ok(false));
        assert_eq!(evaluate(&Formula::implies(wet.clone(), rain.clone()), &interp), Ok(true));
        assert_eq!(evaluate(&Formula::iff(wet.clone(), Formula::False), &interp), Ok(true));
        assert_eq!(evaluate(&Formula::or(wet, Formula::negation(rain)), &interp), Ok(false));
    }

    #[test]
    fn test_empty_domain_quantifiers() {
        let mut interp = Interpretation::new(Vec::<String>::new());
        interp.add_relation("P", 1, Vec::<Vec<String>>::new()).expect("P");
        let p = Formula::pred("P", vec![Term::var("x")]);
        assert_eq!(evaluate(&Formula::forall("x", p.clone()), &interp), Ok(true));
        assert_eq!(evaluate(&Formula::exists("x", p), &interp), Ok(false));
    }

    #[test]
    fn test_undefined_symbols_are_errors() {
        let interp = kinship();
        assert_eq!(
            evaluate(&Formula::pred("Child", vec![Term::constant("alice")]), &interp),
            Err(ModelError::UndefinedPredicate("Child".to_string()))
        );
        assert_eq!(
            evaluate(&Formula::pred("Person", vec![Term::constant("dave")]), &interp),
            Err(ModelError::UndefinedFunction("dave".to_string()))
        );
        assert_eq!(
            evaluate(&Formula::pred("Person", vec![Term::var("z")]), &interp),
            Err(ModelError::UnboundVariable(Var::new("z")))
        );
        assert!(matches!(
            evaluate(&Formula::pred("Person", vec![]), &interp),
            Err(ModelError::ArityMismatch { .. })
        ));
    }

    #[test]
    fn test_short_circuit_does_not_hide_undefined_symbols() {
        let interp = kinship();
        let f = Formula::or(
            Formula::pred("Person", vec![Term::constant("alice")]),
            Formula::pred("Child", vec![Term::constant("alice")]),
        );
        assert_eq!(
            evaluate(&f, &interp),
            Err(ModelError::UndefinedPredicate("Child".to_string()))
        );
        assert_eq!(
            check_model(&f, &interp),
            Err(ModelError::UndefinedPredicate("Child".to_string()))
        );

        let g = Formula::and(
            Formula::pred("Person", vec![Term::constant("dave")]),
            Formula::pred("Person", vec![Term::var("z")]),
        );
        assert_eq!(
            evaluate(&g, &interp),
            Err(ModelError::UndefinedFunction("dave".to_string()))
        );
        let h = Formula::or(Formula::True, Formula::pred("Person", vec![Term::var("z")]));
        assert_eq!(
            evaluate(&h, &interp),
            Err(ModelError::UnboundVariable(Var::new("z")))
        );
    }

    #[test]
    fn test_evaluate_clauses_checks_every_clause() {
        let interp = kinship();
        let clauses = vec![
            Clause::new(vec![crate::syntax::Literal::neg("Person", vec![Term::var("x")])]),
            Clause::new(vec![crate::syntax::Literal::pos("Child", vec![Term::var("x")])]),
        ];
        assert_eq!(
            evaluate_clauses(&clauses, &interp),
            Err(ModelError::UndefinedPredicate("Child".to_string()))
        );
    }

    #[test]
    fn test_functions_and_assignment() {
        let mut interp = Interpretation::new(["0", "1"]);
        interp
            .add_function("succ", 1, [(["0"], "1"), (["1"], "0")])
            .expect("succ");
        interp.add_relation("Odd", 1, [["1"]]).expect("Odd");
        interp.add_constant("zero", "0").expect("zero");
        let odd_succ = |t: Term| Formula::pred("Odd", vec![Term::app("succ", vec![t])]);
        assert_eq!(check_model(&odd_succ(Term::constant("zero")), &interp), Ok(true));
        assert_eq!(check_model(&odd_succ(Term::constant("1")), &interp), Ok(false));

        let open = odd_succ(Term::var("n"));
        assert!(matches!(
            check_model(&open, &interp),
            Err(ModelError::UnboundVariable(_))
        ));
        interp.assign(Var::new("n"), "0").expect("assign");
        assert_eq!(check_model(&open, &interp), Ok(true));
    }

    #[test]
    fn test_evaluate_clauses_reads_variables_universally() {
        let interp = kinship();
        let clause = Clause::new(vec![
            crate::syntax::Literal::neg("Person", vec![Term::var("x")]),
            crate::syntax::Literal::pos("Parent", vec![Term::var("x"), Term::var("x")]),
        ]);
        assert_eq!(evaluate_clauses(&[clause], &interp), Ok(false));
        assert_eq!(evaluate_clauses(&[], &interp), Ok(true));
    }
}
