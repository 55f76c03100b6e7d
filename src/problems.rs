//! Knowledge bases run by the demo binary.

use reslog::syntax::{Formula, Term, Var};

pub struct Problem {
    pub name: &'static str,
    pub premises: Vec<Formula>,
    pub query: Formula,
}

fn pred(name: &str, args: &[Term]) -> Formula {
    Formula::pred(name, args.to_vec())
}

fn var(name: &str) -> Term {
    Term::var(name)
}

/// "If it's summer and we're in California, then it doesn't rain."
pub fn summer_in_california() -> Formula {
    Formula::implies(
        Formula::and(Formula::prop("Summer"), Formula::prop("California")),
        Formula::negation(Formula::prop("Rain")),
    )
}

/// "It's wet if and only if it is raining or the sprinklers are on."
pub fn wet_weather() -> Formula {
    Formula::iff(
        Formula::prop("Wet"),
        Formula::or(Formula::prop("Rain"), Formula::prop("Sprinklers")),
    )
}

/// "Either it's day or night (but not both)."
pub fn day_or_night() -> Formula {
    let day = Formula::prop("Day");
    let night = Formula::prop("Night");
    Formula::and(
        Formula::or(day.clone(), night.clone()),
        Formula::negation(Formula::and(day, night)),
    )
}

/// "Every person has a parent."
pub fn everyone_has_a_parent() -> Formula {
    Formula::forall(
        "x",
        Formula::implies(
            pred("Person", &[var("x")]),
            Formula::exists("y", pred("Parent", &[var("x"), var("y")])),
        ),
    )
}

/// "At least one person has no children."
pub fn someone_is_childless() -> Formula {
    Formula::exists(
        "x",
        Formula::and(
            pred("Person", &[var("x")]),
            Formula::negation(Formula::exists("y", pred("Child", &[var("x"), var("y")]))),
        ),
    )
}

/// Father defined from Male and Parent.
pub fn father_definition() -> Formula {
    Formula::forall_all(
        [Var::new("x"), Var::new("y")],
        Formula::iff(
            Formula::and(
                pred("Male", &[var("x")]),
                pred("Parent", &[var("y"), var("x")]),
            ),
            pred("Father", &[var("y"), var("x")]),
        ),
    )
}

/// Granddaughter defined from Female and Child.
pub fn granddaughter_definition() -> Formula {
    Formula::forall_all(
        [Var::new("x"), Var::new("y")],
        Formula::iff(
            pred("Granddaughter", &[var("y"), var("x")]),
            Formula::and(
                pred("Female", &[var("x")]),
                Formula::exists(
                    "z",
                    Formula::and(
                        pred("Child", &[var("y"), var("z")]),
                        pred("Child", &[var("z"), var("x")]),
                    ),
                ),
            ),
        ),
    )
}

pub const SUSPECTS: [&str; 4] = ["mark", "john", "nicole", "susan"];

fn tells_truth(who: &str) -> Formula {
    pred("TellTruth", &[Term::constant(who)])
}

fn crashed(who: &str) -> Formula {
    pred("CrashedServer", &[Term::constant(who)])
}

/// Exactly one of the formulas holds.
fn exactly_one(formulas: &[Formula]) -> Formula {
    let mut at_most_one = Vec::new();
    for (i, a) in formulas.iter().enumerate() {
        for b in &formulas[i + 1..] {
            at_most_one.push(Formula::negation(Formula::and(a.clone(), b.clone())));
        }
    }
    Formula::and(
        Formula::or_all(formulas.iter().cloned()),
        Formula::and_all(at_most_one),
    )
}

/// Mark: "It wasn't me!" John: "It was Nicole!" Nicole: "No, it was Susan!"
/// Susan: "Nicole's a liar." Exactly one of them tells the truth and exactly
/// one crashed the server. Who did it?
pub fn liar_puzzle() -> Problem {
    let premises = vec![
        Formula::iff(tells_truth("mark"), Formula::negation(crashed("mark"))),
        Formula::iff(tells_truth("john"), crashed("nicole")),
        Formula::iff(tells_truth("nicole"), crashed("susan")),
        Formula::iff(tells_truth("susan"), Formula::negation(tells_truth("nicole"))),
        exactly_one(&SUSPECTS.map(tells_truth)),
        exactly_one(&SUSPECTS.map(crashed)),
    ];
    Problem {
        name: "liar puzzle",
        premises,
        query: pred("CrashedServer", &[var("x")]),
    }
}

/// Successor, parity and order axioms. Does every number have a larger even
/// number? The proof needs equality reasoning the prover does not do.
pub fn number_theory() -> Problem {
    let (x, y, z) = (var("x"), var("y"), var("z"));
    let successor = |a: &Term, b: &Term| pred("Successor", &[a.clone(), b.clone()]);
    let larger = |a: &Term, b: &Term| pred("Larger", &[a.clone(), b.clone()]);
    let even = |a: &Term| pred("Even", &[a.clone()]);
    let odd = |a: &Term| pred("Odd", &[a.clone()]);
    let xy = [Var::new("x"), Var::new("y")];

    let premises = vec![
        Formula::forall(
            "x",
            Formula::exists(
                "y",
                Formula::and_all([
                    successor(&x, &y),
                    Formula::negation(Formula::equals(x.clone(), y.clone())),
                    Formula::forall(
                        "z",
                        Formula::implies(successor(&x, &z), Formula::equals(z.clone(), y.clone())),
                    ),
                ]),
            ),
        ),
        Formula::forall(
            "x",
            Formula::and(
                Formula::or(odd(&x), even(&x)),
                Formula::negation(Formula::and(odd(&x), even(&x))),
            ),
        ),
        Formula::forall_all(
            xy.clone(),
            Formula::implies(Formula::and(even(&x), successor(&x, &y)), odd(&y)),
        ),
        Formula::forall_all(
            xy.clone(),
            Formula::implies(Formula::and(odd(&x), successor(&x, &y)), even(&y)),
        ),
        Formula::forall_all(xy, Formula::implies(successor(&x, &y), larger(&y, &x))),
        Formula::forall_all(
            [Var::new("x"), Var::new("y"), Var::new("z")],
            Formula::implies(
                Formula::and(larger(&x, &y), larger(&y, &z)),
                larger(&x, &z),
            ),
        ),
    ];
    let query = Formula::forall(
        "x",
        Formula::exists("y", Formula::and(even(&y), larger(&y, &x))),
    );
    Problem {
        name: "number theory",
        premises,
        query,
    }
}

fn succ(t: Term) -> Term {
    Term::app("succ", vec![t])
}

/// Even(0) and Even(x) → Odd(succ(x)), asking whether `query_depth`
/// successors of 0 is odd.
pub fn peano_parity(query_depth: usize) -> Problem {
    let zero = Term::constant("0");
    let premises = vec![
        pred("Even", &[zero.clone()]),
        Formula::forall(
            "x",
            Formula::implies(pred("Even", &[var("x")]), pred("Odd", &[succ(var("x"))])),
        ),
    ];
    let numeral = (0..query_depth).fold(zero, |t, _| succ(t));
    Problem {
        name: "peano parity",
        premises,
        query: pred("Odd", &[numeral]),
    }
}
