//! Wiremock helpers for download tests

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// URL template pointing at the mock server, `{uri}/{version}/{file_name}`
pub fn server_template(server: &MockServer, file_name: &str) -> String {
    format!("{}/{{version}}/{}", server.uri(), file_name)
}

/// Serve an archive at `route`, expecting exactly `times` requests
pub async fn mock_archive(server: &MockServer, route: &str, body: Vec<u8>, times: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body))
        .expect(times)
        .mount(server)
        .await;
}

/// Respond to `route` with 404
pub async fn mock_missing(server: &MockServer, route: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(404))
        .mount(server)
        .await;
}
