mod common;

use anyhow::Result;
use httpmock::prelude::*;
use salon_booking::core::ReservationApi;
use salon_booking::domain::model::{AppointmentRequest, NoticeLevel};
use salon_booking::domain::ports::{EmployeeQuery, ServiceQuery};
use salon_booking::BookingError;
use serde_json::json;

fn appointment() -> AppointmentRequest {
    AppointmentRequest {
        specialist: 11,
        services: vec![101],
        date: "2026-10-20".to_string(),
        time: "10:15".to_string(),
        full_name: "Ivan Petrov".to_string(),
        phone: "+79991234567".to_string(),
        user_tg: Some("@ivan".to_string()),
        branch: 2,
    }
}

#[tokio::test]
async fn test_companies_are_unwrapped_from_result() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/companies/");
            then.status(200).json_body(common::companies());
        })
        .await;

    let (client, notifier) = common::client(&server);
    let companies = client.get_companies().await.expect("companies");

    mock.assert_async().await;
    assert_eq!(companies.len(), 2);
    assert_eq!(companies[0].name, "Sharp Cuts");
    assert!(!companies[1].is_active);
    assert!(notifier.notices().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_server_error_becomes_none_and_a_notice() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/branches/company/1/");
            then.status(500);
        })
        .await;

    let (client, notifier) = common::client(&server);
    assert!(client.get_branches_by_company(1).await.is_none());

    mock.assert_async().await;
    let notices = notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Error);
    Ok(())
}

#[tokio::test]
async fn test_malformed_body_becomes_none() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/companies/detail/1/");
            then.status(200).body("<html>maintenance</html>");
        })
        .await;

    let (client, notifier) = common::client(&server);
    assert!(client.get_company_details(1).await.is_none());
    assert_eq!(notifier.errors(), 1);
    Ok(())
}

#[tokio::test]
async fn test_unreachable_host_becomes_none() -> Result<()> {
    let notifier = std::sync::Arc::new(salon_booking::MemoryNotifier::new());
    let client = salon_booking::ReservationClient::new("http://127.0.0.1:9", notifier.clone());

    assert!(client.get_companies().await.is_none());
    assert_eq!(notifier.errors(), 1);
    Ok(())
}

#[tokio::test]
async fn test_employee_filters_are_sent_as_query() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/employees/company/1/")
                .query_param("branch", "2")
                .query_param("services", "101")
                .query_param("is_active", "true");
            then.status(200).json_body(common::employees());
        })
        .await;

    let (client, _) = common::client(&server);
    let query = EmployeeQuery {
        branch: Some(2),
        services: vec![101],
        is_active: Some(true),
    };
    let employees = client.get_employees_by_company(1, &query).await.expect("employees");

    mock.assert_async().await;
    assert_eq!(employees.len(), 2);
    assert_eq!(employees[1].services, vec![100, 101]);
    Ok(())
}

#[tokio::test]
async fn test_services_keep_optional_fields() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/barber-services/company/1/")
                .query_param("employee", "11");
            then.status(200).json_body(common::services());
        })
        .await;

    let (client, _) = common::client(&server);
    let query = ServiceQuery {
        employee: Some(11),
        ..Default::default()
    };
    let services = client.get_services_by_company(1, &query).await.expect("services");

    assert_eq!(services[1].duration.as_deref(), Some("30 min"));
    assert!(services[0].description.is_none());
    Ok(())
}

#[tokio::test]
async fn test_appointment_is_posted_as_single_element_array() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/appointments/create/")
                .json_body(json!([{
                    "specialist": 11,
                    "services": [101],
                    "date": "2026-10-20",
                    "time": "10:15",
                    "full_name": "Ivan Petrov",
                    "phone": "+79991234567",
                    "user_tg": "@ivan",
                    "branch": 2
                }]));
            then.status(201).json_body(json!([{"id": 555, "status": "new"}]));
        })
        .await;

    let (client, _) = common::client(&server);
    let created = client.create_appointment(&appointment()).await.expect("created");

    mock.assert_async().await;
    assert_eq!(created[0]["id"], 555);
    Ok(())
}

#[tokio::test]
async fn test_appointment_error_message_comes_from_body() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/appointments/create/");
            then.status(400).json_body(json!({"error": "Time slot is taken"}));
        })
        .await;

    let (client, notifier) = common::client(&server);
    let err = client.try_create_appointment(&appointment()).await.unwrap_err();

    match err {
        BookingError::Http { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Time slot is taken");
        }
        other => panic!("unexpected error: {other}"),
    }

    assert!(client.create_appointment(&appointment()).await.is_none());
    // The form owns the user-facing message for failed bookings.
    assert!(notifier.notices().is_empty());
    Ok(())
}
