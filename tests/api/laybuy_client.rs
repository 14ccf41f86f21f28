use claims::{assert_err, assert_none, assert_ok, assert_some};
use laybuy_gateway::service::laybuy::{client::RedirectUrlAndToken, error::LaybuyError};
use serde_json::json;
use wiremock::{
    matchers::{any, basic_auth, body_json, method, path},
    Mock, ResponseTemplate,
};

use crate::helpers::{
    spawn_app, API_KEY, LIVE_STORE, MERCHANT_ID, SANDBOX_API_KEY, SANDBOX_MERCHANT_ID,
    SANDBOX_STORE, UNCONFIGURED_STORE,
};

fn laybuy_order() -> serde_json::Value {
    json!({
        "amount": 120.5,
        "currency": "NZD",
        "returnUrl": "https://shop.test/laybuy/return",
        "merchantReference": "000000042",
        "customer": { "firstName": "Kiri", "email": "kiri@shop.test" },
        "items": [{ "id": "sku-1", "description": "Kete", "quantity": 1, "price": 120.5 }]
    })
}

#[tokio::test]
async fn create_order_returns_redirect_url_and_token() {
    let app = spawn_app().await;
    Mock::given(method("POST"))
        .and(path("/order/create"))
        .and(basic_auth(MERCHANT_ID, API_KEY))
        .and(body_json(laybuy_order()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": "SUCCESS",
            "token": "a5Wz9HhCl0ZgOZoeGy1r0tM",
            "paymentUrl": "https://payment.laybuy.com/pay/a5Wz9HhCl0ZgOZoeGy1r0tM"
        })))
        .expect(1)
        .mount(&app.live_server)
        .await;

    let res = app
        .laybuy_client()
        .get_redirect_url_and_token(&laybuy_order(), Some(LIVE_STORE))
        .await;

    let res = assert_some!(assert_ok!(res));
    assert_eq!(
        res,
        RedirectUrlAndToken {
            redirect_url: "https://payment.laybuy.com/pay/a5Wz9HhCl0ZgOZoeGy1r0tM".to_string(),
            token: "a5Wz9HhCl0ZgOZoeGy1r0tM".to_string(),
        }
    );
}

#[tokio::test]
async fn create_order_without_payment_url_or_token_returns_none() {
    let test_cases = vec![
        json!({ "result": "SUCCESS", "token": "", "paymentUrl": "https://payment.laybuy.com/pay/x" }),
        json!({ "result": "SUCCESS", "token": "x", "paymentUrl": "" }),
        json!({ "result": "SUCCESS", "token": "x" }),
        json!({ "result": "ERROR", "error": "Invalid amount" }),
    ];

    for body in test_cases {
        let app = spawn_app().await;
        Mock::given(method("POST"))
            .and(path("/order/create"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .expect(1)
            .mount(&app.live_server)
            .await;

        let res = app
            .laybuy_client()
            .get_redirect_url_and_token(&laybuy_order(), Some(LIVE_STORE))
            .await;
        assert_none!(assert_ok!(res), "expected no redirect for {}", body);
    }
}

#[tokio::test]
async fn confirm_order_returns_order_id() {
    let app = spawn_app().await;
    Mock::given(method("POST"))
        .and(path("/order/confirm"))
        .and(basic_auth(MERCHANT_ID, API_KEY))
        .and(body_json(json!({ "token": "tok-1" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "result": "SUCCESS", "orderId": 42 })),
        )
        .expect(1)
        .mount(&app.live_server)
        .await;

    let res = app
        .laybuy_client()
        .get_confirmation_order_id("tok-1", Some(LIVE_STORE))
        .await;

    assert_eq!(assert_some!(assert_ok!(res)), "42");
}

#[tokio::test]
async fn confirm_order_with_error_result_returns_none() {
    let app = spawn_app().await;
    Mock::given(method("POST"))
        .and(path("/order/confirm"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "result": "ERROR",
            "error": "Token is invalid or has expired"
        })))
        .expect(1)
        .mount(&app.live_server)
        .await;

    let res = app
        .laybuy_client()
        .get_confirmation_order_id("expired", Some(LIVE_STORE))
        .await;

    assert_none!(assert_ok!(res));
}

#[tokio::test]
async fn confirm_order_success_without_order_id_returns_none() {
    let app = spawn_app().await;
    Mock::given(method("POST"))
        .and(path("/order/confirm"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": "SUCCESS" })))
        .expect(1)
        .mount(&app.live_server)
        .await;

    let res = app
        .laybuy_client()
        .get_confirmation_order_id("tok-1", Some(LIVE_STORE))
        .await;

    assert_none!(assert_ok!(res));
}

#[tokio::test]
async fn cancel_order_is_true_only_on_success() {
    let test_cases = vec![
        ("SUCCESS", true),
        ("CANCELLED", false),
        ("ERROR", false),
    ];

    for (result, expected) in test_cases {
        let app = spawn_app().await;
        Mock::given(method("GET"))
            .and(path("/order/cancel/tok-1"))
            .and(basic_auth(MERCHANT_ID, API_KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": result })))
            .expect(1)
            .mount(&app.live_server)
            .await;

        let res = app
            .laybuy_client()
            .cancel_order("tok-1", Some(LIVE_STORE))
            .await;
        assert_eq!(assert_ok!(res), expected, "cancel with result {}", result);
    }
}

#[tokio::test]
async fn refund_order_returns_refund_id() {
    let app = spawn_app().await;
    let refund = json!({ "orderId": 42, "amount": 20.0, "refundReference": "credit-memo-7" });
    Mock::given(method("POST"))
        .and(path("/order/refund"))
        .and(basic_auth(MERCHANT_ID, API_KEY))
        .and(body_json(&refund))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "result": "SUCCESS", "refundId": 7 })),
        )
        .expect(1)
        .mount(&app.live_server)
        .await;

    let res = app
        .laybuy_client()
        .refund_order(&refund, Some(LIVE_STORE))
        .await;

    assert_eq!(assert_ok!(res), Some("7".to_string()));
}

#[tokio::test]
async fn refund_order_with_error_result_fails() {
    let app = spawn_app().await;
    Mock::given(method("POST"))
        .and(path("/order/refund"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": "ERROR",
            "error": "Refund amount exceeds order total"
        })))
        .expect(1)
        .mount(&app.live_server)
        .await;

    let res = app
        .laybuy_client()
        .refund_order(&json!({ "orderId": 42, "amount": 9999 }), Some(LIVE_STORE))
        .await;

    let err = assert_err!(res);
    assert!(matches!(err, LaybuyError::RefundFailed));
    assert_eq!(err.to_string(), "unable to process refund");
}

#[tokio::test]
async fn refund_order_with_non_error_result_is_not_fatal() {
    let test_cases = vec![
        (json!({ "result": "CANCELLED" }), None),
        (json!({ "result": "CANCELLED", "refundId": 3 }), Some("3".to_string())),
        (json!({ "result": "PENDING" }), None),
        (json!({ "refundId": 5 }), Some("5".to_string())),
    ];

    for (body, expected) in test_cases {
        let app = spawn_app().await;
        Mock::given(method("POST"))
            .and(path("/order/refund"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .expect(1)
            .mount(&app.live_server)
            .await;

        let res = app
            .laybuy_client()
            .refund_order(&json!({ "orderId": 42, "amount": 10 }), Some(LIVE_STORE))
            .await;
        assert_eq!(assert_ok!(res), expected, "unexpected refund id for {}", body);
    }
}

#[tokio::test]
async fn check_merchant_order_returns_whole_body() {
    let app = spawn_app().await;
    let body = json!({
        "result": "SUCCESS",
        "orderId": 42,
        "merchantReference": "000000042",
        "amount": 120.5,
        "currency": "NZD"
    });
    Mock::given(method("GET"))
        .and(path("/order/merchant/000000042"))
        .and(basic_auth(MERCHANT_ID, API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&app.live_server)
        .await;

    let res = app
        .laybuy_client()
        .check_merchant_order("000000042", Some(LIVE_STORE))
        .await;

    assert_eq!(assert_some!(assert_ok!(res)), body);
}

#[tokio::test]
async fn check_merchant_order_not_found_returns_none() {
    let app = spawn_app().await;
    Mock::given(method("GET"))
        .and(path("/order/merchant/unknown"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "result": "ERROR",
            "error": "Order not found"
        })))
        .expect(1)
        .mount(&app.live_server)
        .await;

    let res = app
        .laybuy_client()
        .check_merchant_order("unknown", Some(LIVE_STORE))
        .await;

    assert_none!(assert_ok!(res));
}

#[tokio::test]
async fn sandbox_store_uses_sandbox_endpoint_for_every_operation() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&app.live_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/order/create"))
        .and(basic_auth(SANDBOX_MERCHANT_ID, SANDBOX_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": "SUCCESS",
            "token": "sandbox-token",
            "paymentUrl": "https://sandbox-payment.laybuy.com/pay/sandbox-token"
        })))
        .expect(1)
        .mount(&app.sandbox_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/order/confirm"))
        .and(basic_auth(SANDBOX_MERCHANT_ID, SANDBOX_API_KEY))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "result": "SUCCESS", "orderId": 1 })),
        )
        .expect(1)
        .mount(&app.sandbox_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/order/cancel/sandbox-token"))
        .and(basic_auth(SANDBOX_MERCHANT_ID, SANDBOX_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": "SUCCESS" })))
        .expect(1)
        .mount(&app.sandbox_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/order/refund"))
        .and(basic_auth(SANDBOX_MERCHANT_ID, SANDBOX_API_KEY))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "result": "SUCCESS", "refundId": 2 })),
        )
        .expect(1)
        .mount(&app.sandbox_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/order/merchant/000000042"))
        .and(basic_auth(SANDBOX_MERCHANT_ID, SANDBOX_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": "SUCCESS" })))
        .expect(1)
        .mount(&app.sandbox_server)
        .await;

    let client = app.laybuy_client();
    let store = Some(SANDBOX_STORE);
    assert_some!(assert_ok!(
        client.get_redirect_url_and_token(&laybuy_order(), store).await
    ));
    assert_some!(assert_ok!(
        client.get_confirmation_order_id("sandbox-token", store).await
    ));
    assert!(assert_ok!(client.cancel_order("sandbox-token", store).await));
    assert_some!(assert_ok!(
        client.refund_order(&json!({ "orderId": 1 }), store).await
    ));
    assert_some!(assert_ok!(
        client.check_merchant_order("000000042", store).await
    ));
}

#[tokio::test]
async fn unconfigured_store_makes_no_http_call() {
    let app = spawn_app().await;
    for server in [&app.live_server, &app.sandbox_server] {
        Mock::given(any())
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(server)
            .await;
    }

    let client = app.laybuy_client();
    for store in [Some(UNCONFIGURED_STORE), None] {
        let err = assert_err!(client.cancel_order("tok-1", store).await);
        assert!(matches!(err, LaybuyError::NotConfigured { .. }));

        let err = assert_err!(client.get_redirect_url_and_token(&laybuy_order(), store).await);
        assert!(matches!(err, LaybuyError::NotConfigured { .. }));

        let err = assert_err!(client.refund_order(&json!({ "orderId": 1 }), store).await);
        assert!(matches!(err, LaybuyError::NotConfigured { .. }));
    }
}

#[tokio::test]
async fn non_json_response_is_a_decode_error() {
    let app = spawn_app().await;
    Mock::given(method("GET"))
        .and(path("/order/cancel/tok-1"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .expect(1)
        .mount(&app.live_server)
        .await;

    let res = app
        .laybuy_client()
        .cancel_order("tok-1", Some(LIVE_STORE))
        .await;

    assert!(matches!(assert_err!(res), LaybuyError::Decode { .. }));
}

#[tokio::test]
async fn path_changing_token_makes_no_http_call() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": "SUCCESS" })))
        .expect(0)
        .mount(&app.live_server)
        .await;

    let client = app.laybuy_client();
    for token in ["", ".", ".."] {
        let err = assert_err!(client.cancel_order(token, Some(LIVE_STORE)).await);
        assert!(matches!(err, LaybuyError::InvalidPathSegment { .. }));

        let err = assert_err!(client.check_merchant_order(token, Some(LIVE_STORE)).await);
        assert!(matches!(err, LaybuyError::InvalidPathSegment { .. }));
    }
}
