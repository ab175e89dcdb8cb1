use actix_web::{App, http::StatusCode, http::header, test};
use chrono::Local;
use serde_json::Value;

use dayflow::database::models::{Payslip, SalaryStructure};
use dayflow::routes;

mod common;

fn header_value(resp: &actix_web::dev::ServiceResponse, name: header::HeaderName) -> String {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[actix_web::test]
async fn test_payroll_summary_for_hr() {
    common::setup_test_env();
    let state = common::test_state();
    common::sign_in_as(&state, common::HR_ID).await;
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/payroll/summary").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let summary: Value = common::assert_success_response(&test::read_body(resp).await);
    assert_eq!(summary["totalEmployees"], 9);
    assert_eq!(summary["employeesWithSalary"], 2);
    assert_eq!(
        summary["period"],
        Local::now().date_naive().format("%B %Y").to_string()
    );
}

#[actix_web::test]
async fn test_employee_sees_own_payslips_and_salary() {
    let state = common::test_state();
    common::sign_in_as(&state, common::EMPLOYEE_ID).await;
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/payroll/payslips").to_request();
    let resp = test::call_service(&app, req).await;
    let payslips: Vec<Payslip> = common::assert_success_response(&test::read_body(resp).await);
    assert_eq!(payslips.len(), 2);

    let req = test::TestRequest::get().uri("/api/v1/payroll/salary/1").to_request();
    let resp = test::call_service(&app, req).await;
    let salary: SalaryStructure = common::assert_success_response(&test::read_body(resp).await);
    assert_eq!(salary.user_id, common::EMPLOYEE_ID);

    let req = test::TestRequest::get().uri("/api/v1/payroll/salary/4").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::get().uri("/api/v1/payroll/summary").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_salary_overview_is_masked_by_default() {
    let state = common::test_state();
    common::sign_in_as(&state, common::EMPLOYEE_ID).await;
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/payroll/overview").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let hidden: Value = common::assert_success_response(&test::read_body(resp).await);
    assert_eq!(hidden["netSalary"], "₹ ****");
    assert_eq!(hidden["ytdDeductions"], "₹ ****");
    assert_eq!(hidden["bankAccount"], "XXXX XXXX 1234");

    let req = test::TestRequest::get()
        .uri("/api/v1/payroll/overview?showSalary=true")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let shown: Value = common::assert_success_response(&test::read_body(resp).await);
    assert_eq!(shown["netSalary"], "₹1,10,200");
    assert_eq!(shown["ytdEarnings"], "₹2,70,000");
}

#[actix_web::test]
async fn test_download_payslip_as_text_file() {
    let state = common::test_state();
    common::sign_in_as(&state, common::ADMIN_ID).await;
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/payroll/payslips/1/download")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let disposition = header_value(&resp, header::CONTENT_DISPOSITION);
    assert!(disposition.starts_with("attachment"));
    assert!(disposition.contains("payslip_EMP001_"));
    assert!(header_value(&resp, header::CONTENT_TYPE).starts_with("text/plain"));

    let body = test::read_body(resp).await;
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("Employee ID: EMP001"));
    assert!(text.contains("NET SALARY:          ₹1,10,200"));

    // No salary structure on file
    let req = test::TestRequest::get()
        .uri("/api/v1/payroll/payslips/2/download")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let message = common::assert_error_response(&test::read_body(resp).await);
    assert_eq!(message, "No salary data available for this employee");
}

#[actix_web::test]
async fn test_reports_and_dashboard() {
    let state = common::test_state();
    common::sign_in_as(&state, common::HR_ID).await;
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/reports/leave").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let disposition = header_value(&resp, header::CONTENT_DISPOSITION);
    let expected = format!(
        "leave_report_{}.txt",
        Local::now().date_naive().format("%d-%m-%Y")
    );
    assert!(disposition.contains(&expected));
    let text = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(text.starts_with("LEAVE REPORT\n"));
    assert!(text.contains("Total Requests: 3"));

    let req = test::TestRequest::get().uri("/api/v1/reports/bonus").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get().uri("/api/v1/stats/dashboard").to_request();
    let resp = test::call_service(&app, req).await;
    let stats: Value = common::assert_success_response(&test::read_body(resp).await);
    assert!(stats["greeting"].as_str().unwrap().starts_with("Good "));
    assert_eq!(stats["totalEmployees"], 9);
    assert_eq!(stats["pendingLeaveRequests"], 1);
    let present = stats["presentToday"].as_u64().unwrap();
    let on_leave = stats["onLeaveToday"].as_u64().unwrap();
    let absent = stats["absentToday"].as_u64().unwrap();
    assert_eq!(present + on_leave + absent, 9);

    let req = test::TestRequest::get().uri("/api/v1/stats/leave").to_request();
    let resp = test::call_service(&app, req).await;
    let summary: Value = common::assert_success_response(&test::read_body(resp).await);
    assert_eq!(summary["approvedRequests"], 2);
}

#[actix_web::test]
async fn test_reports_are_hr_only() {
    let state = common::test_state();
    common::sign_in_as(&state, common::EMPLOYEE_ID).await;
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/reports/payroll").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}
