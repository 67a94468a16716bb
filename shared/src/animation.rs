//! Reference intent consumer
//!
//! Keeps the latest intent for every `(element, property)` pair. Applying a
//! new intent for an occupied pair replaces the old one instead of queueing
//! behind it, which is how a renderer is expected to treat intents.

use crate::intent::{Element, Intent, Property, Target};
use std::collections::BTreeMap;
use tracing::trace;

/// Latest intent per animated property
#[derive(Debug, Clone, Default)]
pub struct AnimationBoard {
    active: BTreeMap<(Element, Property), Intent>,
    superseded: u64,
}

impl AnimationBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a batch of intents, returning how many replaced an earlier one
    pub fn apply(&mut self, intents: &[Intent]) -> usize {
        let mut replaced = 0;
        for intent in intents {
            if let Some(previous) = self.active.insert(intent.key(), intent.clone()) {
                trace!(
                    element = ?intent.element,
                    property = ?intent.property,
                    previous = ?previous.cue,
                    next = ?intent.cue,
                    "Intent superseded"
                );
                replaced += 1;
            }
        }
        self.superseded += replaced as u64;
        replaced
    }

    /// Intent currently driving a property
    pub fn current(&self, element: Element, property: Property) -> Option<&Intent> {
        self.active.get(&(element, property))
    }

    /// Value a property settles at once its intent finishes
    pub fn resting_target(&self, element: Element, property: Property) -> Option<Target> {
        self.current(element, property).and_then(Intent::final_target)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Intent> {
        self.active.values()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Total number of replaced intents since creation
    pub fn superseded_total(&self) -> u64 {
        self.superseded
    }
}
