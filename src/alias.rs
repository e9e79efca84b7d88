//! Names for the elements generated by a set of named generators.
//!
//! An [`AliasGroup`] sits in front of another group. Starting from the identity `e` and a few
//! named generators it multiplies every named element by every generator on both sides, breadth
//! first, and names each new product after the element and generator it came from. Repeated
//! generators are written as powers, so a generator `R` produces `R`, `R2`, `R3`, ... while mixed
//! products read like `RU` or `U2R`.
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use log::{debug, trace, warn};

use crate::error::Error;
use crate::group::Group;
use crate::notation::IDENTITY;
use crate::Rank;

/// How a generator is specified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeneratorSpec {
    /// Text in the parent group's notation.
    Notation(String),
    /// A rank of the parent group.
    Rank(Rank),
}

impl GeneratorSpec {
    pub(crate) fn resolve<G>(&self, name: &str, parent: &G) -> Result<Rank, Error>
    where
        G: Group + ?Sized,
    {
        match self {
            GeneratorSpec::Notation(text) => {
                parent
                    .parse(text)
                    .ok_or_else(|| Error::UnresolvedGenerator {
                        name: name.to_string(),
                        spec: text.clone(),
                    })
            }
            GeneratorSpec::Rank(x) => {
                if parent.contains(x) {
                    Ok(x.clone())
                } else {
                    Err(Error::GeneratorOutOfRange {
                        name: name.to_string(),
                        rank: x.clone(),
                        order: parent.order().clone(),
                    })
                }
            }
        }
    }
}

impl From<&str> for GeneratorSpec {
    fn from(text: &str) -> GeneratorSpec {
        GeneratorSpec::Notation(text.to_string())
    }
}

impl From<String> for GeneratorSpec {
    fn from(text: String) -> GeneratorSpec {
        GeneratorSpec::Notation(text)
    }
}

impl From<Rank> for GeneratorSpec {
    fn from(x: Rank) -> GeneratorSpec {
        GeneratorSpec::Rank(x)
    }
}

impl fmt::Display for GeneratorSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GeneratorSpec::Notation(text) => f.write_str(text),
            GeneratorSpec::Rank(x) => write!(f, "#{}", x),
        }
    }
}

/// A group whose elements carry names derived from generators.
///
/// The names cover exactly the subgroup generated by the generators. That is the whole parent
/// group only if the generators happen to generate it, see [`covers_parent`](Self::covers_parent).
/// Elements outside the subgroup fall back to the parent's notation. No name in the table reads
/// as a different element in the parent's notation, so those fallback names never collide with
/// it and every name parses back to its element.
#[derive(Debug)]
pub struct AliasGroup<G> {
    parent: Rc<G>,
    generators: Vec<(String, Rank)>,
    by_rank: IndexMap<Rank, String>,
    by_name: HashMap<String, Rank>,
}

impl<G: Group> AliasGroup<G> {
    /// Name every element reachable from the given generators.
    ///
    /// Fails if a generator does not resolve against the parent, if a generator name repeats, if
    /// a generator is named `e` or has an empty name, or if its name already means a different
    /// element in the parent's notation.
    pub fn new<I, N, S>(parent: Rc<G>, generators: I) -> Result<AliasGroup<G>, Error>
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<GeneratorSpec>,
    {
        let mut group = AliasGroup {
            parent,
            generators: vec![],
            by_rank: IndexMap::new(),
            by_name: HashMap::new(),
        };
        group.insert(IDENTITY.to_string(), group.parent.id());

        for (name, spec) in generators {
            let name = name.into();
            let spec = spec.into();
            if name.is_empty() {
                return Err(Error::EmptyGeneratorName);
            }
            if name == IDENTITY {
                return Err(Error::ReservedName(name));
            }
            if group.generators.iter().any(|(other, _)| *other == name)
                || group.by_name.contains_key(&name)
            {
                return Err(Error::DuplicateGenerator(name));
            }
            let x = spec.resolve(&name, &*group.parent)?;
            if group.shadows(&name, &x) {
                return Err(Error::ShadowedName(name));
            }
            if let Some(existing) = group.by_rank.get(&x) {
                warn!(
                    "generator {} = {} is already named {}, skipping it",
                    name, spec, existing
                );
                continue;
            }
            group.insert(name.clone(), x.clone());
            group.generators.push((name, x));
        }

        group.discover();
        Ok(group)
    }

    fn insert(&mut self, name: String, x: Rank) {
        trace!("{} = {}", name, self.parent.name(&x));
        self.by_name.insert(name.clone(), x.clone());
        self.by_rank.insert(x, name);
    }

    /// Whether `name` reads as an element other than `x` in the parent's notation.
    fn shadows(&self, name: &str, x: &Rank) -> bool {
        match self.parent.parse(name) {
            Some(y) => y != *x,
            None => false,
        }
    }

    /// Make a generated name for `x` unique.
    fn fresh(&self, mut name: String, x: &Rank) -> String {
        let taken = |name: &str| self.by_name.contains_key(name) || self.shadows(name, x);
        if taken(&name) {
            let original = name.clone();
            while taken(&name) {
                name.push('\'');
            }
            warn!("name {} is already taken, using {}", original, name);
        }
        name
    }

    fn discover(&mut self) {
        let parent = self.parent.clone();
        let generators = self
            .generators
            .iter()
            .map(|(name, x)| (name.clone(), x.clone(), takes_exponent(name, &self.generators)))
            .collect::<Vec<_>>();
        let mut queue = self.by_rank.keys().cloned().collect::<VecDeque<_>>();

        while let Some(element) = queue.pop_front() {
            let element_name = self.by_rank[&element].clone();
            for (generator_name, generator, powers) in generators.iter() {
                let suffixed = parent.mul(&element, generator);
                if !self.by_rank.contains_key(&suffixed) {
                    let name = if *powers {
                        append_power(&element_name, generator_name)
                    } else {
                        format!("{}{}", element_name, generator_name)
                    };
                    let name = self.fresh(name, &suffixed);
                    self.insert(name, suffixed.clone());
                    queue.push_back(suffixed);
                }

                let prefixed = parent.mul(generator, &element);
                if !self.by_rank.contains_key(&prefixed) {
                    let name = if *powers {
                        prepend_power(generator_name, &element_name)
                    } else {
                        format!("{}{}", generator_name, element_name)
                    };
                    let name = self.fresh(name, &prefixed);
                    self.insert(name, prefixed.clone());
                    queue.push_back(prefixed);
                }
            }
        }

        debug!(
            "{} generators name {} of {} elements (covers parent: {})",
            self.generators.len(),
            self.by_rank.len(),
            self.parent.order(),
            self.covers_parent()
        );
    }

    pub fn parent(&self) -> &Rc<G> {
        &self.parent
    }

    /// The generators with their ranks, in the order given.
    ///
    /// Generators whose rank was already named when they were added are not included.
    pub fn generators(&self) -> impl Iterator<Item = (&str, &Rank)> {
        self.generators.iter().map(|(name, x)| (name.as_str(), x))
    }

    /// All named elements in the order they were discovered, starting with `e`.
    pub fn names(&self) -> impl Iterator<Item = (&str, &Rank)> {
        self.by_rank.iter().map(|(x, name)| (name.as_str(), x))
    }

    /// The number of named elements.
    pub fn len(&self) -> usize {
        self.by_rank.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_rank.is_empty()
    }

    /// The element with a given name.
    pub fn lookup(&self, name: &str) -> Option<&Rank> {
        self.by_name.get(name)
    }

    /// The name of an element, if it has one.
    pub fn alias(&self, x: &Rank) -> Option<&str> {
        self.by_rank.get(x).map(String::as_str)
    }

    /// Whether every element of the parent group has a name.
    pub fn covers_parent(&self) -> bool {
        Rank::from(self.by_rank.len()) == *self.parent.order()
    }
}

impl<G: Group> Group for AliasGroup<G> {
    fn order(&self) -> &Rank {
        self.parent.order()
    }

    fn parse(&self, name: &str) -> Option<Rank> {
        match self.by_name.get(name) {
            Some(x) => Some(x.clone()),
            None => self.parent.parse(name),
        }
    }

    fn name(&self, x: &Rank) -> String {
        match self.by_rank.get(x) {
            Some(name) => name.clone(),
            None => self.parent.name(x),
        }
    }

    fn mul(&self, a: &Rank, b: &Rank) -> Rank {
        self.parent.mul(a, b)
    }

    fn inv(&self, x: &Rank) -> Rank {
        self.parent.inv(x)
    }
}

/// Split a leading run of ASCII digits off `text`.
fn split_digits(text: &str) -> (&str, &str) {
    let len = text.bytes().take_while(u8::is_ascii_digit).count();
    text.split_at(len)
}

/// The exponent written by `digits`, where no digits means 1.
fn exponent(digits: &str) -> Option<u64> {
    if digits.is_empty() {
        Some(1)
    } else if digits.starts_with('0') {
        None
    } else {
        digits.parse().ok()
    }
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Whether repeated factors of `generator` can be written as a power.
///
/// A run of digits next to `generator` must always be its exponent. So the generator may not end
/// in a digit and no generator may start with one. Other generators also may not extend
/// `generator` by a digit (`B3` for `B`) or end in digits right after it (`AB2` for `B`).
fn takes_exponent(generator: &str, generators: &[(String, Rank)]) -> bool {
    if generator.ends_with(is_digit) {
        return false;
    }
    generators.iter().all(|(other, _)| {
        if other.starts_with(is_digit) {
            return false;
        }
        if let Some(rest) = other.strip_prefix(generator) {
            if rest.starts_with(is_digit) {
                return false;
            }
        }
        let base = other.trim_end_matches(is_digit);
        base.len() == other.len() || !base.ends_with(generator)
    })
}

/// Name of `name` followed by `generator`, which takes exponents.
fn append_power(name: &str, generator: &str) -> String {
    let base = name.trim_end_matches(is_digit);
    let digits = &name[base.len()..];
    if base.ends_with(generator) {
        if let Some(next) = exponent(digits).and_then(|e| e.checked_add(1)) {
            return format!("{}{}", base, next);
        }
    }
    format!("{}{}", name, generator)
}

/// Name of `generator`, which takes exponents, followed by `name`.
fn prepend_power(generator: &str, name: &str) -> String {
    if let Some(rest) = name.strip_prefix(generator) {
        let (digits, tail) = split_digits(rest);
        if let Some(next) = exponent(digits).and_then(|e| e.checked_add(1)) {
            return format!("{}{}{}", generator, next, tail);
        }
    }
    format!("{}{}", generator, name)
}
