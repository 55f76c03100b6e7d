//! Finite interpretations: a domain plus explicit extensions for every symbol.

use std::collections::{HashMap, HashSet};

use indexmap::IndexSet;

use super::ModelError;
use crate::syntax::Var;

/// Extension of a predicate: the argument tuples that are true.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relation {
    pub arity: usize,
    pub tuples: HashSet<Vec<String>>,
}

/// Extension of a function symbol: a total table over the domain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Function {
    pub arity: usize,
    pub table: HashMap<Vec<String>, String>,
}

/// A finite interpretation.
///
/// Domain elements are named by strings. A 0-ary term with no function entry
/// denotes the domain element of the same name, so constants usually need no
/// explicit table. The domain keeps insertion order, which is the order
/// quantifiers enumerate it in.
#[derive(Debug, Clone, Default)]
pub struct Interpretation {
    domain: IndexSet<String>,
    relations: HashMap<String, Relation>,
    functions: HashMap<String, Function>,
    assignment: HashMap<Var, String>,
}

impl Interpretation {
    pub fn new<S: Into<String>>(domain: impl IntoIterator<Item = S>) -> Self {
        Interpretation {
            domain: domain.into_iter().map(Into::into).collect(),
            ..Interpretation::default()
        }
    }

    pub fn domain(&self) -> impl Iterator<Item = &str> {
        self.domain.iter().map(String::as_str)
    }

    pub fn domain_size(&self) -> usize {
        self.domain.len()
    }

    pub fn contains(&self, element: &str) -> bool {
        self.domain.contains(element)
    }

    /// Declare a predicate with the given true tuples. Every tuple must have
    /// the declared arity and range over the domain. Redefining a predicate
    /// replaces its extension.
    pub fn add_relation<T, S>(
        &mut self,
        name: impl Into<String>,
        arity: usize,
        tuples: impl IntoIterator<Item = T>,
    ) -> Result<(), ModelError>
    where
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let mut relation = Relation {
            arity,
            tuples: HashSet::new(),
        };
        for tuple in tuples {
            let tuple: Vec<String> = tuple.into_iter().map(Into::into).collect();
            self.check_tuple(&name, arity, &tuple)?;
            relation.tuples.insert(tuple);
        }
        self.relations.insert(name, relation);
        Ok(())
    }

    /// [`Self::add_relation`] in builder form.
    pub fn with_relation<T, S>(
        mut self,
        name: impl Into<String>,
        arity: usize,
        tuples: impl IntoIterator<Item = T>,
    ) -> Result<Self, ModelError>
    where
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_relation(name, arity, tuples)?;
        Ok(self)
    }

    /// Declare a 0-ary predicate.
    pub fn add_proposition(&mut self, name: impl Into<String>, value: bool) {
        let mut tuples = HashSet::new();
        if value {
            tuples.insert(Vec::new());
        }
        self.relations
            .insert(name.into(), Relation { arity: 0, tuples });
    }

    /// Set the truth of a single tuple of an already declared predicate.
    pub fn set_fact<S: Into<String>>(
        &mut self,
        name: &str,
        args: impl IntoIterator<Item = S>,
        value: bool,
    ) -> Result<(), ModelError> {
        let tuple: Vec<String> = args.into_iter().map(Into::into).collect();
        let arity = match self.relations.get(name) {
            Some(relation) => relation.arity,
            None => return Err(ModelError::UndefinedPredicate(name.to_string())),
        };
        self.check_tuple(name, arity, &tuple)?;
        if let Some(relation) = self.relations.get_mut(name) {
            if value {
                relation.tuples.insert(tuple);
            } else {
                relation.tuples.remove(&tuple);
            }
        }
        Ok(())
    }

    /// Declare a function symbol by its table. The table must define a value
    /// in the domain for every tuple of domain elements.
    pub fn add_function<T, S, V>(
        &mut self,
        name: impl Into<String>,
        arity: usize,
        table: impl IntoIterator<Item = (T, V)>,
    ) -> Result<(), ModelError>
    where
        T: IntoIterator<Item = S>,
        S: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        let mut function = Function {
            arity,
            table: HashMap::new(),
        };
        for (args, value) in table {
            let args: Vec<String> = args.into_iter().map(Into::into).collect();
            self.check_tuple(&name, arity, &args)?;
            let value = value.into();
            if !self.contains(&value) {
                return Err(ModelError::NotInDomain(value));
            }
            function.table.insert(args, value);
        }
        let expected = self
            .domain
            .len()
            .checked_pow(arity as u32)
            .unwrap_or(usize::MAX);
        if function.table.len() != expected {
            return Err(ModelError::PartialFunction {
                symbol: name,
                defined: function.table.len(),
                expected,
            });
        }
        self.functions.insert(name, function);
        Ok(())
    }

    /// Interpret a constant as a domain element.
    pub fn add_constant(
        &mut self,
        name: impl Into<String>,
        element: impl Into<String>,
    ) -> Result<(), ModelError> {
        let element: String = element.into();
        self.add_function(name, 0, [(Vec::<String>::new(), element)])
    }

    /// Give a free variable a value.
    pub fn assign(&mut self, var: Var, element: impl Into<String>) -> Result<(), ModelError> {
        let element = element.into();
        if !self.contains(&element) {
            return Err(ModelError::NotInDomain(element));
        }
        self.assignment.insert(var, element);
        Ok(())
    }

    pub fn relation(&self, name: &str) -> Option<&Relation> {
        self.relations.get(name)
    }

    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.get(name)
    }

    pub fn assigned(&self, var: &Var) -> Option<&str> {
        self.assignment.get(var).map(String::as_str)
    }

    /// The same interpretation with its domain enumerated in another order.
    /// `order` must list exactly the domain elements.
    pub fn reordered<S: AsRef<str>>(&self, order: &[S]) -> Result<Self, ModelError> {
        let domain: IndexSet<String> = order.iter().map(|s| s.as_ref().to_string()).collect();
        if let Some(missing) = self.domain.iter().find(|e| !domain.contains(*e)) {
            return Err(ModelError::NotInDomain(missing.clone()));
        }
        if let Some(extra) = domain.iter().find(|e| !self.domain.contains(*e)) {
            return Err(ModelError::NotInDomain(extra.clone()));
        }
        Ok(Interpretation {
            domain,
            ..self.clone()
        })
    }

    fn check_tuple(&self, symbol: &str, arity: usize, tuple: &[String]) -> Result<(), ModelError> {
        if tuple.len() != arity {
            return Err(ModelError::ArityMismatch {
                symbol: symbol.to_string(),
                expected: arity,
                found: tuple.len(),
            });
        }
        match tuple.iter().find(|e| !self.contains(e)) {
            Some(element) => Err(ModelError::NotInDomain(element.clone())),
            None => Ok(()),
        }
    }
}
