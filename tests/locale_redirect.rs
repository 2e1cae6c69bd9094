//! Integration tests for locale routing at the HTTP boundary.

use std::net::SocketAddr;
use std::time::Duration;

use locale_gateway::config::GatewayConfig;
use locale_gateway::http::HttpServer;
use locale_gateway::lifecycle::Shutdown;

/// Spawn a gateway on the given address with default content.
async fn start_gateway(addr: SocketAddr) -> Shutdown {
    let mut config = GatewayConfig::default();
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    let rx = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    tokio::time::sleep(Duration::from_millis(200)).await;
    shutdown
}

/// Client that never follows redirects, so Location headers are observable.
fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}

fn location(res: &reqwest::Response) -> &str {
    res.headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .expect("redirect should carry a Location header")
}

#[tokio::test]
async fn test_unprefixed_path_redirects_to_default_locale() {
    let addr: SocketAddr = "127.0.0.1:28481".parse().unwrap();
    let shutdown = start_gateway(addr).await;
    let client = client();

    let res = client
        .get(format!("http://{}/services", addr))
        .send()
        .await
        .expect("Gateway unreachable");

    assert_eq!(res.status(), 307);
    assert_eq!(location(&res), "/en/services");

    shutdown.trigger();
}

#[tokio::test]
async fn test_locale_prefixed_paths_pass_through() {
    let addr: SocketAddr = "127.0.0.1:28482".parse().unwrap();
    let shutdown = start_gateway(addr).await;
    let client = client();

    for path in ["/en/services", "/ar/services", "/en", "/ar"] {
        let res = client
            .get(format!("http://{}{}", addr, path))
            .send()
            .await
            .expect("Gateway unreachable");
        assert_eq!(res.status(), 200, "{} should be served, not redirected", path);
    }

    shutdown.trigger();
}

#[tokio::test]
async fn test_root_redirects_to_locale_root() {
    let addr: SocketAddr = "127.0.0.1:28483".parse().unwrap();
    let shutdown = start_gateway(addr).await;
    let client = client();

    let res = client
        .get(format!("http://{}/", addr))
        .send()
        .await
        .expect("Gateway unreachable");

    assert_eq!(res.status(), 307);
    assert_eq!(location(&res), "/en/");

    shutdown.trigger();
}

#[tokio::test]
async fn test_query_string_preserved_across_redirect() {
    let addr: SocketAddr = "127.0.0.1:28484".parse().unwrap();
    let shutdown = start_gateway(addr).await;
    let client = client();

    let res = client
        .get(format!("http://{}/services?ref=nav&utm=footer", addr))
        .send()
        .await
        .expect("Gateway unreachable");

    assert_eq!(res.status(), 307);
    assert_eq!(location(&res), "/en/services?ref=nav&utm=footer");

    shutdown.trigger();
}

#[tokio::test]
async fn test_redirect_target_is_served_on_refetch() {
    let addr: SocketAddr = "127.0.0.1:28485".parse().unwrap();
    let shutdown = start_gateway(addr).await;
    let client = client();

    let res = client
        .get(format!("http://{}/about", addr))
        .send()
        .await
        .expect("Gateway unreachable");
    assert_eq!(res.status(), 307);
    let target = location(&res).to_string();

    // Re-running the rule on its own output must be a fixed point.
    let res = client
        .get(format!("http://{}{}", addr, target))
        .send()
        .await
        .expect("Gateway unreachable");
    assert_eq!(res.status(), 200);

    shutdown.trigger();
}

#[tokio::test]
async fn test_excluded_paths_are_never_rewritten() {
    let addr: SocketAddr = "127.0.0.1:28486".parse().unwrap();
    let shutdown = start_gateway(addr).await;
    let client = client();

    // API and admin surfaces respond directly.
    let res = client
        .get(format!("http://{}/api/health", addr))
        .send()
        .await
        .expect("Gateway unreachable");
    assert_eq!(res.status(), 200);

    let res = client
        .get(format!("http://{}/admin/status", addr))
        .send()
        .await
        .expect("Gateway unreachable");
    assert_eq!(res.status(), 200);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["default_locale"], "en");

    // Static-looking paths fall through to 404 without a redirect.
    for path in ["/favicon.ico", "/logo.png"] {
        let res = client
            .get(format!("http://{}{}", addr, path))
            .send()
            .await
            .expect("Gateway unreachable");
        assert_eq!(res.status(), 404, "{} must not be localized", path);
        assert!(
            res.headers().get("location").is_none(),
            "{} must not carry a Location header",
            path
        );
    }

    shutdown.trigger();
}

#[tokio::test]
async fn test_arabic_page_is_served_rtl() {
    let addr: SocketAddr = "127.0.0.1:28487".parse().unwrap();
    let shutdown = start_gateway(addr).await;
    let client = client();

    let res = client
        .get(format!("http://{}/ar/services", addr))
        .send()
        .await
        .expect("Gateway unreachable");
    assert_eq!(res.status(), 200);
    let body = res.text().await.unwrap();
    assert!(body.contains("dir=\"rtl\""));
    assert!(body.contains("lang=\"ar\""));

    shutdown.trigger();
}

#[tokio::test]
async fn test_missing_page_is_404_not_redirect() {
    let addr: SocketAddr = "127.0.0.1:28488".parse().unwrap();
    let shutdown = start_gateway(addr).await;
    let client = client();

    let res = client
        .get(format!("http://{}/en/no-such-page", addr))
        .send()
        .await
        .expect("Gateway unreachable");
    assert_eq!(res.status(), 404);
    assert!(res.headers().get("location").is_none());

    shutdown.trigger();
}
