use glowbook_application::{AppContext, AuthSession, BookingSelection};
use glowbook_core::booking::{BookingStatus, NewBooking};
use glowbook_core::config::ApiConfig;
use glowbook_core::{SessionVault, StorefrontApi};
use glowbook_infrastructure::{FileVault, MockApi};
use std::sync::Arc;
use tempfile::TempDir;

fn mock_context(vault: Arc<dyn SessionVault>) -> (Arc<dyn StorefrontApi>, AuthSession) {
    let api: Arc<dyn StorefrontApi> = Arc::new(MockApi::new(Arc::clone(&vault)).without_latency());
    let auth = AuthSession::new(Arc::clone(&api), vault);
    (api, auth)
}

#[tokio::test]
async fn test_register_then_book_then_list() {
    let temp_dir = TempDir::new().unwrap();
    let vault: Arc<dyn SessionVault> = Arc::new(FileVault::new(temp_dir.path()));
    let (api, auth) = mock_context(Arc::clone(&vault));

    // A fresh registration signs the customer in.
    let user = auth
        .register("Asha", "9876543210", "1234")
        .await
        .expect("Should register");
    assert_eq!(user.name, "Asha");
    assert!(auth.is_authenticated().await);
    assert!(auth.token().await.is_some());

    // Book a seeded service for a morning slot.
    let booking = api
        .create_booking(NewBooking {
            service_ids: vec!["s1".to_string()],
            user_id: user.id.clone(),
            start_time: "2026-09-01T11:00:00".to_string(),
        })
        .await
        .expect("Should create booking");
    assert!(!booking.id.is_empty());
    assert_eq!(booking.status, BookingStatus::Pending);

    // The booking shows up when listing for that customer.
    let bookings = api.list_bookings(&user.id).await.expect("Should list");
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].id, booking.id);
    assert_eq!(bookings[0].service_ids, vec!["s1".to_string()]);
}

#[tokio::test]
async fn test_session_survives_restart() {
    let temp_dir = TempDir::new().unwrap();

    let user_id = {
        let vault: Arc<dyn SessionVault> = Arc::new(FileVault::new(temp_dir.path()));
        let (api, auth) = mock_context(Arc::clone(&vault));

        let user = auth
            .register("Asha", "9876543210", "1234")
            .await
            .expect("Should register");
        api.create_booking(NewBooking {
            service_ids: vec!["s2".to_string()],
            user_id: user.id.clone(),
            start_time: "2026-09-02T12:00:00".to_string(),
        })
        .await
        .expect("Should create booking");
        user.id
    };

    // Reopen the same vault root, as a relaunched app would.
    let vault: Arc<dyn SessionVault> = Arc::new(FileVault::new(temp_dir.path()));
    let (api, auth) = mock_context(Arc::clone(&vault));

    let restored = auth.hydrate().await.expect("Should hydrate");
    assert!(restored, "Persisted session should restore");
    assert_eq!(auth.current_user().await.unwrap().id, user_id);

    let bookings = api.list_bookings(&user_id).await.expect("Should list");
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].service_ids, vec!["s2".to_string()]);
}

#[tokio::test]
async fn test_selection_feeds_a_booking() {
    let temp_dir = TempDir::new().unwrap();
    let vault: Arc<dyn SessionVault> = Arc::new(FileVault::new(temp_dir.path()));
    let (api, auth) = mock_context(Arc::clone(&vault));

    let user = auth
        .register("Meera", "9123456780", "4321")
        .await
        .expect("Should register");

    // Pick two services off the catalog, tapping one twice.
    let selection = BookingSelection::new();
    let services = api.fetch_services().await.expect("Should fetch");
    selection.add(services[0].clone());
    selection.add(services[0].clone());
    selection.add(services[1].clone());
    assert_eq!(selection.len(), 2);

    let booking = api
        .create_booking(NewBooking {
            service_ids: selection.selected_ids(),
            user_id: user.id.clone(),
            start_time: "2026-09-03T13:00:00".to_string(),
        })
        .await
        .expect("Should create booking");

    assert_eq!(booking.service_ids.len(), 2);
    selection.clear();
    assert!(selection.is_empty());
}

#[tokio::test]
async fn test_mock_context_from_empty_config() {
    let temp_dir = TempDir::new().unwrap();
    let vault: Arc<dyn SessionVault> = Arc::new(FileVault::new(temp_dir.path()));
    let context = AppContext::new(&ApiConfig { base_url: None }, vault);

    let services = context.api.fetch_services().await.expect("Should fetch");
    assert!(!services.is_empty());
    assert!(!context.auth.is_authenticated().await);
}
