use std::sync::Arc;

use findhelper_api::{ApiError, Location, ServiceProvider, StaticTokenProvider};

use super::update;
use crate::backend::{ApiService, AppConfig};
use crate::message::{AppMessage, BackendEvent, FormMessage};
use crate::model::{App, Modal, FETCH_ERROR_MESSAGE, SUBMIT_ERROR_MESSAGE, SUCCESS_MESSAGE};

fn test_backend() -> ApiService {
    // An empty static token keeps dispatched tasks off the network.
    ApiService::new(&AppConfig::default(), Arc::new(StaticTokenProvider::new("")))
}

fn sample_provider() -> ServiceProvider {
    ServiceProvider {
        fname: "Nimal".to_string(),
        lname: "Perera".to_string(),
        experience: "5".to_string(),
        cost_per_hour: "1500".to_string(),
        availability_time: "WEEKDAYS".to_string(),
        available_locations: "Colombo".to_string(),
        category_name: "Plumbing".to_string(),
    }
}

fn sample_locations() -> Vec<Location> {
    vec![
        Location {
            id: 1,
            location: "Colombo".to_string(),
        },
        Location {
            id: 2,
            location: "Kandy".to_string(),
        },
    ]
}

#[tokio::test]
async fn refresh_bumps_generation_and_marks_loading() {
    let backend = test_backend();
    let mut app = App::new("1");
    let before = app.form.load_generation;

    update(&mut app, &backend, AppMessage::Refresh);

    assert_eq!(app.form.load_generation, before + 1);
    assert!(app.form.loading);
    assert!(app.status_message.is_some());
}

#[tokio::test]
async fn matching_load_event_populates_form() {
    let backend = test_backend();
    let mut app = App::new("1");
    let generation = app.form.begin_load();

    update(
        &mut app,
        &backend,
        AppMessage::Backend(BackendEvent::LoadCompleted {
            generation,
            provider: Box::new(sample_provider()),
            locations: sample_locations(),
        }),
    );

    assert!(!app.form.loading);
    assert_eq!(app.form.fname, "Nimal");
    assert_eq!(app.form.locations.len(), 2);
    assert!(app.form.banner_error.is_none());
}

#[tokio::test]
async fn stale_load_event_is_discarded() {
    let backend = test_backend();
    let mut app = App::new("1");
    let stale = app.form.begin_load();
    let _newer = app.form.begin_load();

    update(
        &mut app,
        &backend,
        AppMessage::Backend(BackendEvent::LoadCompleted {
            generation: stale,
            provider: Box::new(sample_provider()),
            locations: sample_locations(),
        }),
    );

    // The newer load is still pending, so the stale payload must not land.
    assert!(app.form.loading);
    assert_eq!(app.form.fname, "");
    assert!(app.form.locations.is_empty());
}

#[tokio::test]
async fn failed_load_sets_fetch_banner() {
    let backend = test_backend();
    let mut app = App::new("1");
    let generation = app.form.begin_load();

    update(
        &mut app,
        &backend,
        AppMessage::Backend(BackendEvent::LoadFailed {
            generation,
            error: ApiError::NetworkError {
                endpoint: "/api/locations".to_string(),
                detail: "connection refused".to_string(),
            },
        }),
    );

    assert!(!app.form.loading);
    assert_eq!(app.form.banner_error.as_deref(), Some(FETCH_ERROR_MESSAGE));
}

#[tokio::test]
async fn invalid_submit_records_errors_without_dispatch() {
    let backend = test_backend();
    let mut app = App::new("1");
    app.form
        .apply_loaded(sample_provider(), sample_locations());
    app.form.fname = "Nimal123".to_string();

    update(
        &mut app,
        &backend,
        AppMessage::Form(FormMessage::Submit),
    );

    assert!(!app.form.submitting);
    assert!(!app.form.errors.is_empty());
    assert!(app.status_message.is_none());
}

#[tokio::test]
async fn valid_submit_enters_in_flight_state() {
    let backend = test_backend();
    let mut app = App::new("1");
    app.form
        .apply_loaded(sample_provider(), sample_locations());

    update(
        &mut app,
        &backend,
        AppMessage::Form(FormMessage::Submit),
    );

    assert!(app.form.submitting);
    assert!(app.form.errors.is_empty());
}

#[tokio::test]
async fn submit_is_ignored_while_in_flight() {
    let backend = test_backend();
    let mut app = App::new("1");
    app.form
        .apply_loaded(sample_provider(), sample_locations());
    app.form.submitting = true;
    // An invalid edit while in flight must not even be validated.
    app.form.fname = "Nimal123".to_string();

    update(
        &mut app,
        &backend,
        AppMessage::Form(FormMessage::Submit),
    );

    assert!(app.form.submitting);
    assert!(app.form.errors.is_empty());
}

#[tokio::test]
async fn update_success_opens_modal_once() {
    let backend = test_backend();
    let mut app = App::new("1");
    app.form.submitting = true;

    update(
        &mut app,
        &backend,
        AppMessage::Backend(BackendEvent::UpdateSucceeded),
    );

    assert!(!app.form.submitting);
    match &app.modal.active {
        Some(Modal::Success { message }) => assert_eq!(message, SUCCESS_MESSAGE),
        other => panic!("expected success modal, got {other:?}"),
    }

    // Dismissing the modal does not bring it back.
    app.modal.close();
    assert!(!app.modal.is_open());
}

#[tokio::test]
async fn update_failure_sets_submit_banner() {
    let backend = test_backend();
    let mut app = App::new("1");
    app.form.submitting = true;

    update(
        &mut app,
        &backend,
        AppMessage::Backend(BackendEvent::UpdateFailed {
            error: ApiError::ServerError {
                endpoint: "/service-providers/update/1".to_string(),
                status: 500,
                raw_message: Some("boom".to_string()),
            },
        }),
    );

    assert!(!app.form.submitting);
    assert_eq!(app.form.banner_error.as_deref(), Some(SUBMIT_ERROR_MESSAGE));
    assert!(!app.modal.is_open());
}
