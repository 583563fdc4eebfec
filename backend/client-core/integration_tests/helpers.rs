use std::net::TcpListener;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SOURCE: &str =
    "https://tiss.tuwien.ac.at/events/rest/calendar/personal?token=abc123&locale=de";

/// Mount a `/verify` handler answering `template` for `source`.
pub async fn mount_verify(server: &MockServer, source: &str, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/verify"))
        .and(query_param("url", source))
        .respond_with(template)
        .expect(1)
        .mount(server)
        .await;
}

/// Origin of a local port nothing listens on.
pub fn unreachable_origin() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
