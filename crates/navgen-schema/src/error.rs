use std::{collections::BTreeMap, fmt};
use thiserror::Error as ThisError;

///
/// SetupError
///
/// A single structural problem with the descriptor set. Every variant is
/// fatal for the run that produced it.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum SetupError {
    #[error(
        "graph identifier '{identifier}' derived from route '{second_route}' collides with route '{first_route}'"
    )]
    DuplicateGraphIdentifier {
        identifier: String,
        first_route: String,
        second_route: String,
    },

    #[error("route '{route}' has no letters to derive a graph identifier from")]
    EmptyGraphIdentifier { route: String },

    #[error("{}", illegal_setup_message(route, *count))]
    IllegalGraphSetup { route: String, count: usize },

    #[error("no destinations belong to the root nav graph")]
    MissingRootGraph,

    #[error("value '{value}' in nav graph '{route}' contains a template placeholder token")]
    PlaceholderCollision { route: String, value: String },
}

fn illegal_setup_message(route: &str, count: usize) -> String {
    if count == 0 {
        format!("no start destination found for nav graph '{route}'")
    } else {
        format!("found {count} start destinations in nav graph '{route}', only one is allowed")
    }
}

///
/// ErrorTree
///
/// Validation errors grouped by nav graph route. Issues that are not tied
/// to a single graph live at the top level.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ErrorTree {
    pub messages: Vec<SetupError>,
    pub children: BTreeMap<String, Self>,
}

impl ErrorTree {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
            children: BTreeMap::new(),
        }
    }

    pub fn add(&mut self, err: SetupError) {
        self.messages.push(err);
    }

    /// Record an error against a specific graph route.
    pub fn add_for(&mut self, route: &str, err: SetupError) {
        self.children.entry(route.to_string()).or_default().add(err);
    }

    pub fn add_result(&mut self, res: Result<(), SetupError>) {
        if let Err(err) = res {
            self.add(err);
        }
    }

    pub fn merge(&mut self, other: Self) {
        self.messages.extend(other.messages);
        for (route, child) in other.children {
            self.children.entry(route).or_default().merge(child);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.children.values().all(Self::is_empty)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len() + self.children.values().map(Self::len).sum::<usize>()
    }

    /// Every error in the tree, top-level first, then children by route.
    pub fn iter(&self) -> impl Iterator<Item = &SetupError> {
        let mut out = Vec::with_capacity(self.len());
        self.collect_into(&mut out);

        out.into_iter()
    }

    fn collect_into<'a>(&'a self, out: &mut Vec<&'a SetupError>) {
        out.extend(self.messages.iter());
        for child in self.children.values() {
            child.collect_into(out);
        }
    }

    #[must_use]
    pub fn contains(&self, err: &SetupError) -> bool {
        self.iter().any(|e| e == err)
    }

    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, prefix: &str) -> fmt::Result {
        for msg in &self.messages {
            if prefix.is_empty() {
                writeln!(f, "{msg}")?;
            } else {
                writeln!(f, "{prefix}: {msg}")?;
            }
        }
        for (route, child) in &self.children {
            let prefix = if prefix.is_empty() {
                route.clone()
            } else {
                format!("{prefix}.{route}")
            };
            child.fmt_indented(f, &prefix)?;
        }

        Ok(())
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, "")
    }
}

impl From<SetupError> for ErrorTree {
    fn from(err: SetupError) -> Self {
        let mut tree = Self::new();
        tree.add(err);
        tree
    }
}

///
/// TESTS
///
