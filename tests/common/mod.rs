#![allow(dead_code)]

use std::env;

use actix_web::web;
use chrono::Local;
use serde::de::DeserializeOwned;

use dayflow::database::Store;
use dayflow::database::seed::sample_data;
use dayflow::database::storage::Storage;
use dayflow::database::stores::{AuthStore, DataStore};
use dayflow::handlers::shared::ApiResponse;
use dayflow::{AppState, Config};

pub const EMPLOYEE_ID: &str = "1";
pub const HR_ID: &str = "2";
pub const ADMIN_ID: &str = "3";

/// App state over in-memory storage holding the sample data set.
pub fn test_state() -> web::Data<AppState> {
    state_with(sample_data(Local::now().date_naive()))
}

pub fn state_with(data: DataStore) -> web::Data<AppState> {
    web::Data::new(AppState {
        config: Config::test_config(),
        store: Store::new(Storage::memory(), AuthStore::new(), data),
    })
}

/// Makes `user_id` the signed-in identity without going through the login route.
pub async fn sign_in_as(state: &web::Data<AppState>, user_id: &str) {
    let user = state
        .store
        .data()
        .await
        .find_user(user_id)
        .cloned()
        .expect("Sample user should exist");
    state.store.mutate_auth(|auth| auth.login(user)).await;
}

pub fn assert_success_response<T>(body: &[u8]) -> T
where
    T: DeserializeOwned,
{
    let response: ApiResponse<T> =
        serde_json::from_slice(body).expect("Failed to parse JSON response");

    assert!(
        response.success,
        "Expected successful response but got error: {:?}",
        response.message
    );
    response.data.expect("Expected data in successful response")
}

pub fn assert_error_response(body: &[u8]) -> String {
    let response: ApiResponse<serde_json::Value> =
        serde_json::from_slice(body).expect("Failed to parse JSON response");
    assert!(!response.success);
    response.message.unwrap_or_default()
}

pub fn setup_test_env() {
    unsafe {
        env::set_var("RUST_LOG", "debug");
    }
    let _ = env_logger::builder().is_test(true).try_init();
}
