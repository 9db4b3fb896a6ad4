use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::ast::Output;

use super::{
    cursor::{Cursor, CursorMut},
    error::ParseError,
    reader::Reader,
};

/// Where in the grammar a rule may fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Top-level blocks: one header or paragraph per line.
    Document,
    /// Block bodies.
    Paragraph,
    /// Inline spans.
    Text,
}

/// Identity of a registered rule singleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleId(pub &'static str);

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// One grammar production: a predicate plus a consumer.
///
/// `matches` is a cheap lookahead and must not consume. `consume` starts on
/// the first character of the construct and leaves the cursor on the first
/// character after it. A consumer reached through a category must move the
/// cursor forward, otherwise the document loop cannot progress.
pub trait Rule: Send + Sync {
    fn id(&self) -> RuleId;

    fn matches(&self, cursor: Cursor<'_>) -> bool;

    fn consume(&self, cursor: &mut CursorMut<'_>, reader: &Reader<'_>)
    -> Result<Output, ParseError>;
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    id: RuleId,
    priority: i32,
    seq: usize,
}

/// Collects rules before parsing starts. Call [`build`](RegistryBuilder::build)
/// to freeze the result into a [`Registry`].
#[derive(Default)]
pub struct RegistryBuilder {
    rules: HashMap<RuleId, Arc<dyn Rule>>,
    slots: HashMap<Category, Vec<Slot>>,
    seq: usize,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule singleton that is only reachable by direct dispatch.
    ///
    /// Registering the same identity again keeps the first instance.
    pub fn register<R: Rule + 'static>(&mut self, rule: R) -> &mut Self {
        let id = rule.id();
        self.rules.entry(id).or_insert_with(|| Arc::new(rule));
        self
    }

    /// Adds a rule and makes it eligible in each of `categories`.
    ///
    /// Within a category, higher `priority` is tried first; equal priorities
    /// keep registration order. A rule already listed for a category is not
    /// listed twice.
    pub fn register_for<R: Rule + 'static>(
        &mut self,
        rule: R,
        categories: &[Category],
        priority: i32,
    ) -> &mut Self {
        let id = rule.id();
        self.register(rule);
        for &category in categories {
            let slots = self.slots.entry(category).or_default();
            if slots.iter().any(|slot| slot.id == id) {
                continue;
            }
            log::debug!("registered rule `{id}` for {category:?} at priority {priority}");
            slots.push(Slot {
                id,
                priority,
                seq: self.seq,
            });
            self.seq += 1;
        }
        self
    }

    /// Freezes the registrations. The returned registry is read-only and can
    /// be shared between threads.
    pub fn build(&mut self) -> Registry {
        let mut checks = HashMap::new();
        for (category, mut slots) in std::mem::take(&mut self.slots) {
            slots.sort_by(|a, b| b.priority.cmp(&a.priority).then(a.seq.cmp(&b.seq)));
            let rules = slots
                .iter()
                .filter_map(|slot| self.rules.get(&slot.id).cloned())
                .collect::<Vec<_>>();
            checks.insert(category, rules);
        }
        Registry {
            states: std::mem::take(&mut self.rules),
            checks,
        }
    }
}

/// Frozen rule tables: category to ordered rules, identity to singleton.
pub struct Registry {
    states: HashMap<RuleId, Arc<dyn Rule>>,
    checks: HashMap<Category, Vec<Arc<dyn Rule>>>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Looks up a rule singleton by identity.
    pub fn get(&self, id: RuleId) -> Option<&dyn Rule> {
        self.states.get(&id).map(|rule| rule.as_ref())
    }

    /// Returns the rules eligible in `category`, highest priority first.
    pub fn rules_for(&self, category: Category) -> impl Iterator<Item = &dyn Rule> + '_ {
        self.checks
            .get(&category)
            .into_iter()
            .flatten()
            .map(|rule| rule.as_ref())
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<_> = self.states.keys().map(|id| id.0).collect();
        ids.sort_unstable();
        f.debug_struct("Registry").field("rules", &ids).finish()
    }
}
