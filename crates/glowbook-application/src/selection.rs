//! Booking selection store.
//!
//! The cart-like set of services a customer is assembling into a
//! booking. Purely in-memory: it resets on restart and is never
//! persisted. Order of first insertion is preserved; adding an already
//! selected service is a no-op.

use glowbook_core::catalog::Service;
use std::sync::{Mutex, MutexGuard};

/// In-memory selection of services, deduplicated by service id.
#[derive(Debug, Default)]
pub struct BookingSelection {
    items: Mutex<Vec<Service>>,
}

impl BookingSelection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> MutexGuard<'_, Vec<Service>> {
        self.items
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Adds a service; ignored when one with the same id is selected.
    pub fn add(&self, service: Service) {
        let mut items = self.guard();
        if !items.iter().any(|item| item.id == service.id) {
            items.push(service);
        }
    }

    /// Removes the service with the given id, if selected.
    pub fn remove(&self, service_id: &str) {
        self.guard().retain(|item| item.id != service_id);
    }

    /// Adds the service when absent, removes it when present.
    pub fn toggle(&self, service: Service) {
        let mut items = self.guard();
        if items.iter().any(|item| item.id == service.id) {
            items.retain(|item| item.id != service.id);
        } else {
            items.push(service);
        }
    }

    /// Replaces the whole selection, deduplicating by id.
    pub fn set_all(&self, services: Vec<Service>) {
        let mut deduped: Vec<Service> = Vec::with_capacity(services.len());
        for service in services {
            if !deduped.iter().any(|item| item.id == service.id) {
                deduped.push(service);
            }
        }
        *self.guard() = deduped;
    }

    /// Empties the selection.
    pub fn clear(&self) {
        self.guard().clear();
    }

    /// The selected services in insertion order.
    pub fn selected(&self) -> Vec<Service> {
        self.guard().clone()
    }

    /// The selected service ids in insertion order.
    pub fn selected_ids(&self) -> Vec<String> {
        self.guard().iter().map(|item| item.id.clone()).collect()
    }

    /// True when the service id is currently selected.
    pub fn contains(&self, service_id: &str) -> bool {
        self.guard().iter().any(|item| item.id == service_id)
    }

    /// Running total of the selection, in whole rupees.
    pub fn total_price(&self) -> u32 {
        self.guard().iter().map(|item| item.price).sum()
    }

    pub fn len(&self) -> usize {
        self.guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glowbook_core::catalog::ServiceCategory;

    fn service(id: &str, price: u32) -> Service {
        Service {
            id: id.to_string(),
            title: format!("Service {id}"),
            category: ServiceCategory::Makeup,
            duration_min: 60,
            price,
            thumbnail_url: None,
            description: None,
            artist_id: None,
        }
    }

    #[test]
    fn test_add_is_idempotent_per_id() {
        let selection = BookingSelection::new();

        selection.add(service("s1", 1000));
        selection.add(service("s1", 1000));

        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_toggle_flips_membership() {
        let selection = BookingSelection::new();

        selection.toggle(service("s1", 1000));
        assert!(selection.contains("s1"));

        selection.toggle(service("s1", 1000));
        assert!(!selection.contains("s1"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let selection = BookingSelection::new();
        selection.add(service("s1", 1000));
        selection.add(service("s2", 2000));

        selection.remove("s1");
        assert_eq!(selection.selected_ids(), vec!["s2".to_string()]);

        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let selection = BookingSelection::new();
        selection.add(service("s2", 2000));
        selection.add(service("s1", 1000));
        selection.add(service("s3", 3000));

        assert_eq!(
            selection.selected_ids(),
            vec!["s2".to_string(), "s1".to_string(), "s3".to_string()]
        );
    }

    #[test]
    fn test_set_all_replaces_and_dedupes() {
        let selection = BookingSelection::new();
        selection.add(service("s9", 99));

        selection.set_all(vec![
            service("s1", 1000),
            service("s2", 2000),
            service("s1", 1000),
        ]);

        assert_eq!(
            selection.selected_ids(),
            vec!["s1".to_string(), "s2".to_string()]
        );
    }

    #[test]
    fn test_total_price_sums_selection() {
        let selection = BookingSelection::new();
        assert_eq!(selection.total_price(), 0);

        selection.add(service("s1", 2500));
        selection.add(service("s2", 3500));
        assert_eq!(selection.total_price(), 6000);
    }
}
