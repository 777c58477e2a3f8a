mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;
use wsdl_service::models::SoapResponse;

async fn text(response: reqwest::Response) -> String {
    response.text().await.expect("Failed to read body")
}

#[tokio::test]
async fn valid_request_is_echoed_as_soap_response() {
    let app = TestApp::spawn().await;

    let response = app
        .post_json(&json!({
            "bik": "1234567890",
            "fromDate": "07-11-2018",
            "toDate": "07-18-2019",
            "withDeleted": true
        }))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "text/xml; charset=utf-8"
    );

    let body = text(response).await;
    assert!(body.contains("<bik>1234567890</bik>"));
    assert!(body.contains("<fromDate>07-11-2018</fromDate>"));
    assert!(body.contains("<toDate>07-18-2019</toDate>"));
    assert!(body.contains("<withDeleted>true</withDeleted>"));

    let parsed: SoapResponse = quick_xml::de::from_str(&body).expect("Failed to parse XML");
    assert_eq!(
        parsed,
        SoapResponse {
            bik: "1234567890".to_string(),
            from_date: "07-11-2018".to_string(),
            to_date: "07-18-2019".to_string(),
            with_deleted: true,
        }
    );
}

#[tokio::test]
async fn twelve_character_bik_is_accepted() {
    let app = TestApp::spawn().await;

    let response = app
        .post_json(&json!({
            "bik": "123456789012",
            "fromDate": "01-01-2020",
            "toDate": "02-30-2020",
            "withDeleted": false
        }))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = text(response).await;
    assert!(body.contains("<toDate>02-30-2020</toDate>"));
    assert!(body.contains("<withDeleted>false</withDeleted>"));
}

#[tokio::test]
async fn invalid_bik_and_date_is_rejected_on_bik() {
    let app = TestApp::spawn().await;

    let response = app
        .post_json(&json!({
            "bik": "1234567890111",
            "fromDate": "32-11-2018",
            "toDate": "07-18-2019"
        }))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(text(response).await, "Invalid 'bik' field");
}

#[tokio::test]
async fn each_invalid_field_is_named() {
    let app = TestApp::spawn().await;

    let cases = [
        (
            json!({"bik": "", "fromDate": "07-11-2018", "toDate": "07-18-2019"}),
            "Invalid 'bik' field",
        ),
        (
            json!({"bik": "1234567890", "fromDate": "2018-07-11", "toDate": "07-18-2019"}),
            "Invalid 'fromDate' field",
        ),
        (
            json!({"bik": "1234567890", "fromDate": "07-11-2018", "toDate": "07-32-2019"}),
            "Invalid 'toDate' field",
        ),
        (
            json!({"bik": "1234567890", "fromDate": "13-11-2018", "toDate": "nope"}),
            "Invalid 'fromDate' field",
        ),
    ];

    for (body, expected) in cases {
        let response = app.post_json(&body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(text(response).await, expected, "{body}");
    }
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let app = TestApp::spawn().await;

    for body in [
        r#"{"bik": "1234567890", "#,
        r#"not json"#,
        r#"{"bik": 1234567890, "fromDate": "07-11-2018", "toDate": "07-18-2019"}"#,
        r#"{"bik": "1234567890", "withDeleted": "yes"}"#,
    ] {
        let response = app.post_raw(body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(text(response).await, "Invalid JSON data", "{body}");
    }
}

#[tokio::test]
async fn request_id_is_echoed() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(app.wsdl_url())
        .header("x-request-id", "trace-me")
        .json(&json!({
            "bik": "1234567890",
            "fromDate": "07-11-2018",
            "toDate": "07-18-2019",
            "withDeleted": true
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.headers()["x-request-id"], "trace-me");
}

#[tokio::test]
async fn generated_request_id_is_a_uuid() {
    let app = TestApp::spawn().await;

    let response = app.post_raw("{}").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let id = response.headers()["x-request-id"]
        .to_str()
        .expect("header is ASCII");
    assert!(uuid::Uuid::parse_str(id).is_ok());
}

#[tokio::test]
async fn get_is_method_not_allowed() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(app.wsdl_url())
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_ne!(app.port, 0);
}

#[tokio::test]
async fn body_sent_without_json_content_type_is_accepted() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(app.wsdl_url())
        .header("content-type", "application/x-www-form-urlencoded")
        .body(r#"{"bik":"1234567890","fromDate":"07-11-2018","toDate":"07-18-2019","withDeleted":null}"#)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body = text(response).await;
    assert!(body.contains("<bik>1234567890</bik>"));
    assert!(body.contains("<withDeleted>false</withDeleted>"));
}
