#![allow(dead_code)]

use httpmock::prelude::*;
use httpmock::Mock;
use salon_booking::{MemoryNotifier, ReservationClient};
use serde_json::{json, Value};
use std::sync::Arc;

pub fn companies() -> Value {
    json!({
        "result": [
            {"id": 1, "name": "Sharp Cuts", "headline": "Classic barbering", "ya_grade": "4.9", "is_active": true},
            {"id": 2, "name": "Second Salon", "is_active": false}
        ]
    })
}

pub fn company_detail() -> Value {
    json!({
        "id": 1,
        "name": "Sharp Cuts",
        "headline": "Classic barbering",
        "ya_grade": "4.9",
        "email": "hello@sharp.example",
        "link_inst": "https://instagram.com/sharp",
        "link_vk": null,
        "link_tg": "https://t.me/sharp",
        "link_whatsapp": "",
        "link_fb": "",
        "link_youtube": "",
        "is_active": true
    })
}

pub fn branches() -> Value {
    json!([
        {"id": 1, "company": 1, "name": "Center", "address": "Nevsky 1", "phone_number_main": "+78120000001",
         "opening_time": "09:00:00", "closing_time": "10:00:00", "is_main": false, "is_active": true},
        {"id": 2, "company": 1, "name": "North", "address": "Lenina 5", "landmark": "Next to the metro",
         "opening_time": "10:00:00", "closing_time": "11:00:00", "is_main": true, "is_active": true},
        {"id": 3, "company": 1, "name": "Closed", "address": "Old st 9",
         "opening_time": "09:00:00", "closing_time": "18:00:00", "is_main": false, "is_active": false}
    ])
}

pub fn employees() -> Value {
    json!({
        "result": [
            {"id": 10, "full_name": "Anna Smirnova", "grade": "Senior", "is_active": true, "branch": 1, "services": [100]},
            {"id": 11, "full_name": "Boris Ivanov", "grade": "Master", "is_active": true, "branch": 2, "services": [100, 101]}
        ]
    })
}

pub fn services() -> Value {
    json!({
        "result": [
            {"id": 100, "name": "Haircut", "price": "1500", "is_active": true, "branch": 1, "category": 5},
            {"id": 101, "name": "Beard trim", "price": "800", "is_active": true, "branch": 2, "category": 6, "duration": "30 min"},
            {"id": 102, "name": "Shave", "price": "900", "is_active": true, "branch": 2, "category": 6}
        ]
    })
}

pub fn categories() -> Value {
    json!([
        {"id": 5, "company": 1, "name": "Hair", "is_active": true},
        {"id": 6, "company": 1, "name": "Beard", "is_active": true}
    ])
}

pub fn client(server: &MockServer) -> (ReservationClient, Arc<MemoryNotifier>) {
    let notifier = Arc::new(MemoryNotifier::new());
    let client = ReservationClient::new(server.base_url(), notifier.clone());
    (client, notifier)
}

/// Serves every read-only endpoint for company 1.
pub async fn mock_read_api(server: &MockServer) -> Vec<Mock<'_>> {
    vec![
        server
            .mock_async(|when, then| {
                when.method(GET).path("/companies/");
                then.status(200).json_body(companies());
            })
            .await,
        server
            .mock_async(|when, then| {
                when.method(GET).path("/companies/detail/1/");
                then.status(200).json_body(company_detail());
            })
            .await,
        server
            .mock_async(|when, then| {
                when.method(GET).path("/branches/company/1/");
                then.status(200).json_body(branches());
            })
            .await,
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/employees/company/1/")
                    .query_param("is_active", "true");
                then.status(200).json_body(employees());
            })
            .await,
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/barber-services/company/1/")
                    .query_param("is_active", "true");
                then.status(200).json_body(services());
            })
            .await,
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/service-categories/company/1/")
                    .query_param("is_active", "true");
                then.status(200).json_body(categories());
            })
            .await,
    ]
}
