//! Bus detail store contract and in-memory implementation.

use crate::model::detail::BusDetail;
use crate::model::ids::BusId;
use std::collections::BTreeMap;

/// Store holding editable details keyed by bus.
pub trait DetailRepository {
    fn detail(&self, bus: &BusId) -> Option<&BusDetail>;
    /// Stores the full detail record for `bus`, creating it when absent.
    fn put_detail(&mut self, bus: BusId, detail: BusDetail);
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryDetailRepository {
    details: BTreeMap<BusId, BusDetail>,
}

impl InMemoryDetailRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DetailRepository for InMemoryDetailRepository {
    fn detail(&self, bus: &BusId) -> Option<&BusDetail> {
        self.details.get(bus)
    }

    fn put_detail(&mut self, bus: BusId, detail: BusDetail) {
        self.details.insert(bus, detail);
    }
}
