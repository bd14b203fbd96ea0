//! Per-batch uniqueness tracking with bounded retry.

use std::collections::HashSet;

/// Maximum regeneration attempts before a colliding value is accepted.
const MAX_ATTEMPTS: usize = 1000;

/// Field categories whose values are tracked for uniqueness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Request id.
    RequestId,
    /// Name triple `given|sur|middle`.
    Name,
    /// EDIPI-shaped long identifier.
    Edipi,
    /// National provider identifier.
    Npi,
    /// Secondary id.
    SecId,
    /// Primary email address.
    Email,
}

/// Result of one uniqueness claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    /// The accepted value. Unique within the batch unless `exhausted`.
    pub value: String,
    /// True when every attempt collided and the last candidate was
    /// accepted anyway.
    pub exhausted: bool,
}

/// Tracks values already issued during one generation run.
///
/// Six independent sets, one per [`FieldKind`]. A fresh registry is built
/// for every run, so uniqueness holds within a batch only.
#[derive(Debug, Default)]
pub struct UniquenessRegistry {
    request_ids: HashSet<String>,
    names: HashSet<String>,
    edipis: HashSet<String>,
    npis: HashSet<String>,
    sec_ids: HashSet<String>,
    emails: HashSet<String>,
}

impl UniquenessRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the value was already issued for this category.
    #[must_use]
    pub fn contains(&self, kind: FieldKind, value: &str) -> bool {
        self.set(kind).contains(value)
    }

    /// Records a value as issued for this category.
    pub fn insert(&mut self, kind: FieldKind, value: &str) {
        self.set_mut(kind).insert(value.to_string());
    }

    /// Claims a batch-unique value for the category.
    ///
    /// Calls `produce` up to 1000 times, accepting the first candidate not
    /// yet issued. When every attempt collides the last candidate is
    /// accepted anyway and the claim is flagged `exhausted`; uniqueness is
    /// best-effort, not a hard guarantee. The accepted value is recorded
    /// either way.
    pub fn claim(&mut self, kind: FieldKind, mut produce: impl FnMut() -> String) -> Claim {
        let mut candidate = String::new();
        for _ in 0..MAX_ATTEMPTS {
            candidate = produce();
            if !self.contains(kind, &candidate) {
                self.insert(kind, &candidate);
                return Claim { value: candidate, exhausted: false };
            }
        }
        self.insert(kind, &candidate);
        Claim { value: candidate, exhausted: true }
    }

    fn set(&self, kind: FieldKind) -> &HashSet<String> {
        match kind {
            FieldKind::RequestId => &self.request_ids,
            FieldKind::Name => &self.names,
            FieldKind::Edipi => &self.edipis,
            FieldKind::Npi => &self.npis,
            FieldKind::SecId => &self.sec_ids,
            FieldKind::Email => &self.emails,
        }
    }

    fn set_mut(&mut self, kind: FieldKind) -> &mut HashSet<String> {
        match kind {
            FieldKind::RequestId => &mut self.request_ids,
            FieldKind::Name => &mut self.names,
            FieldKind::Edipi => &mut self.edipis,
            FieldKind::Npi => &mut self.npis,
            FieldKind::SecId => &mut self.sec_ids,
            FieldKind::Email => &mut self.emails,
        }
    }
}
