//! Presence sets that make entity creation idempotent within a discovery run.

use std::collections::HashSet;

/// The entity classes tracked by a [`DiscoveryLedger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedgerKind {
    /// Components, keyed by node xname.
    Component,
    /// Redfish Systems, keyed by node xname.
    System,
    /// Redfish Managers, keyed by BMC xname.
    Manager,
}

/// Records which entities a run already created.
///
/// One ledger lives exactly as long as one run; the first node to claim a
/// key wins.
#[derive(Debug, Default)]
pub struct DiscoveryLedger {
    components: HashSet<String>,
    systems: HashSet<String>,
    managers: HashSet<String>,
}

impl DiscoveryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if an entity of `kind` was already created for `key`.
    pub fn present(&self, kind: LedgerKind, key: &str) -> bool {
        self.set(kind).contains(key)
    }

    /// Records that an entity of `kind` was created for `key`.
    pub fn mark(&mut self, kind: LedgerKind, key: impl Into<String>) {
        self.set_mut(kind).insert(key.into());
    }

    /// Number of keys recorded for `kind`.
    pub fn len(&self, kind: LedgerKind) -> usize {
        self.set(kind).len()
    }

    fn set(&self, kind: LedgerKind) -> &HashSet<String> {
        match kind {
            LedgerKind::Component => &self.components,
            LedgerKind::System => &self.systems,
            LedgerKind::Manager => &self.managers,
        }
    }

    fn set_mut(&mut self, kind: LedgerKind) -> &mut HashSet<String> {
        match kind {
            LedgerKind::Component => &mut self.components,
            LedgerKind::System => &mut self.systems,
            LedgerKind::Manager => &mut self.managers,
        }
    }
}
