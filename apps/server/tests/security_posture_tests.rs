#![allow(unused)]
#[allow(unused)]
mod support;

use axum::http::{Method, StatusCode};
use support::*;

const BASELINE_HEADERS: [(&str, &str); 4] = [
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "DENY"),
    ("referrer-policy", "no-referrer"),
    ("content-security-policy", "default-src 'none'"),
];

#[tokio::test]
async fn item_and_workload_routes_send_baseline_headers() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            for uri in ["/items/", "/thread-tasks"] {
                let (status, headers, _body) = app.request(Method::GET, uri, None).await?;
                assert_status(status, StatusCode::OK, uri);

                for (name, expected) in BASELINE_HEADERS {
                    assert_eq!(
                        headers.get(name).and_then(|v| v.to_str().ok()),
                        Some(expected),
                        "{uri}: header '{name}'"
                    );
                }
                assert!(
                    headers.get("strict-transport-security").is_none(),
                    "{uri}: HSTS on plain HTTP"
                );
            }
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn error_responses_carry_security_headers() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, headers, _body) = app.request(Method::GET, "/items/1", None).await?;
            assert_status(status, StatusCode::NOT_FOUND, "missing item");
            assert_eq!(
                headers
                    .get("x-content-type-options")
                    .and_then(|v| v.to_str().ok()),
                Some("nosniff")
            );
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn hsts_is_set_behind_https_proxy() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, headers, _body) = app
                .request_with_extra_headers(
                    Method::GET,
                    "/health",
                    None,
                    &[("x-forwarded-proto", "https")],
                )
                .await?;
            assert_status(status, StatusCode::OK, "health");
            assert!(headers.get("strict-transport-security").is_some());
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn cross_origin_item_writes_get_no_cors_grant_without_allowlist() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let payload = to_json_body(&item(7, "widget", 3.5))?;
            let (status, headers, _body) = app
                .request_with_extra_headers(
                    Method::POST,
                    "/items/",
                    Some(payload),
                    &[("origin", "https://elsewhere.example")],
                )
                .await?;
            // The write itself is served; browsers are left to withhold the response.
            assert_status(status, StatusCode::OK, "create item");
            assert!(headers.get("access-control-allow-origin").is_none());
            assert!(headers.get("access-control-allow-credentials").is_none());

            let (_, body) = app.get_json("/items/7").await?;
            assert_eq!(body["name"], "widget");
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn configured_cors_origin_is_allowed() -> anyhow::Result<()> {
    with_test_app_with_config(
        |config| {
            config.server.cors_origins = vec!["https://app.example".to_string()];
        },
        |app| {
            Box::pin(async move {
                let (status, headers, _body) = app
                    .request_with_extra_headers(
                        Method::GET,
                        "/items/",
                        None,
                        &[("origin", "https://app.example")],
                    )
                    .await?;
                assert_status(status, StatusCode::OK, "list items");
                assert_eq!(
                    headers
                        .get("access-control-allow-origin")
                        .and_then(|v| v.to_str().ok()),
                    Some("https://app.example")
                );

                let (_, headers, _body) = app
                    .request_with_extra_headers(
                        Method::GET,
                        "/items/",
                        None,
                        &[("origin", "https://evil.example")],
                    )
                    .await?;
                assert!(headers.get("access-control-allow-origin").is_none());
                Ok(())
            })
        },
    )
    .await
}

#[tokio::test]
async fn oversized_body_is_rejected() -> anyhow::Result<()> {
    with_test_app_with_config(
        |config| {
            config.server.max_request_body_size = 64;
        },
        |app| {
            Box::pin(async move {
                let long_name = "x".repeat(256);
                let payload = item(1, &long_name, 1.0);
                let (status, _headers, _body) = app
                    .request(Method::POST, "/items/", Some(to_json_body(&payload)?))
                    .await?;
                assert_status(status, StatusCode::PAYLOAD_TOO_LARGE, "oversized body");
                Ok(())
            })
        },
    )
    .await
}
