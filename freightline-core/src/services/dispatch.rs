//! Dispatch service: runs deliveries through the factory and keeps a log of them

use crate::models::{Configuration, Delivery};
use crate::services::logging;
use crate::transport::{TransportFactory, TransportKind, UnknownTransportKind};
use std::collections::VecDeque;

/// Delivery log with FIFO eviction
#[derive(Debug)]
pub struct DispatchService {
    factory: TransportFactory,
    history: VecDeque<Delivery>,
    history_limit: usize,
}

impl DispatchService {
    /// Create a service keeping at most `history_limit` deliveries (minimum 1)
    pub fn new(history_limit: usize) -> Self {
        let history_limit = history_limit.max(1);
        Self {
            factory: TransportFactory::new(),
            history: VecDeque::with_capacity(history_limit),
            history_limit,
        }
    }

    pub fn from_config(config: &Configuration) -> Self {
        Self::new(config.history_limit)
    }

    /// Deliver with a freshly created transport of `kind` and record the result
    pub fn dispatch(&mut self, kind: TransportKind) -> &Delivery {
        let transport = self.factory.create(kind);
        let description = transport.deliver();
        logging::log_delivery(kind, description);

        // Evict oldest deliveries to make room (FIFO)
        while self.history.len() >= self.history_limit {
            self.history.pop_front();
        }

        self.history.push_back(Delivery::new(kind, description));
        self.history
            .back()
            .expect("delivery log holds the delivery just recorded")
    }

    /// Parse `selector` and dispatch it; nothing is recorded on failure
    pub fn dispatch_selector(
        &mut self,
        selector: &str,
    ) -> Result<&Delivery, UnknownTransportKind> {
        let kind = selector.parse::<TransportKind>()?;
        Ok(self.dispatch(kind))
    }

    /// Recorded deliveries, oldest first
    pub fn history(&self) -> impl Iterator<Item = &Delivery> {
        self.history.iter()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// Count of recorded deliveries per kind, in `TransportKind::ALL` order
    pub fn summary(&self) -> Vec<(TransportKind, usize)> {
        TransportKind::ALL
            .into_iter()
            .map(|kind| (kind, self.history.iter().filter(|d| d.kind == kind).count()))
            .collect()
    }
}

impl Default for DispatchService {
    fn default() -> Self {
        Self::from_config(&Configuration::default())
    }
}
