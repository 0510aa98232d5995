// roster-console/tests/console_flow.rs
// Screens driven against the in-memory backend over real HTTP

use std::sync::Arc;

use roster_client::{ClientConfig, EmployeeField};
use roster_console::{App, Route, Screen};
use roster_mock::MockState;
use tokio::net::TcpListener;

async fn spawn_app(state: MockState, path: &str) -> App {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(roster_mock::serve(listener, Arc::new(state)));

    let api = ClientConfig::new(format!("http://{addr}"))
        .build_employee_service()
        .unwrap();
    App::new(Arc::new(api), path)
}

async fn settle(app: &mut App) {
    let event = app.next_event().await.unwrap();
    app.apply(event);
}

fn names(app: &App) -> Vec<String> {
    match app.screen() {
        Screen::List(view) => view.employees().iter().map(|e| e.name.clone()).collect(),
        _ => panic!("expected list screen"),
    }
}

#[tokio::test]
async fn test_list_then_delete() {
    let mut app = spawn_app(MockState::seeded(), "/employees").await;
    settle(&mut app).await;
    assert_eq!(names(&app).len(), 3);

    let Screen::List(view) = app.screen_mut() else {
        panic!("expected list screen");
    };
    let id = view.employees()[0].id;
    view.request_delete(id);
    view.confirm_delete();

    // Deleted, then the follow-up fetch
    settle(&mut app).await;
    settle(&mut app).await;

    let remaining = names(&app);
    assert_eq!(remaining.len(), 2);
    assert!(!remaining.contains(&"Ada Lovelace".to_string()));
}

#[tokio::test]
async fn test_edit_prefills_and_saves() {
    let mut app = spawn_app(MockState::seeded(), "/employees/edit/2").await;
    settle(&mut app).await;

    let Screen::Form(view) = app.screen_mut() else {
        panic!("expected form screen");
    };
    assert_eq!(view.value(EmployeeField::Name), "Grace Hopper");
    view.set_value(EmployeeField::Phone, "555-0222");
    assert!(view.submit());

    settle(&mut app).await;
    let Screen::Form(view) = app.screen() else {
        panic!("expected form screen");
    };
    assert_eq!(view.success(), Some("Employee updated successfully"));

    // Back on the list after the redirect delay
    settle(&mut app).await;
    assert_eq!(app.route(), &Route::List);
    settle(&mut app).await;

    let Screen::List(view) = app.screen() else {
        panic!("expected list screen");
    };
    let grace = view
        .employees()
        .iter()
        .find(|e| e.id == Some(2))
        .unwrap();
    assert_eq!(grace.phone, "555-0222");
}

#[tokio::test]
async fn test_edit_missing_record_reports_backend_message() {
    let mut app = spawn_app(MockState::new(), "/employees/edit/42").await;
    settle(&mut app).await;

    let Screen::Form(view) = app.screen() else {
        panic!("expected form screen");
    };
    let error = view.error().unwrap();
    assert!(error.contains("404"));
    assert!(error.contains("Employee not found"));
}
