use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
use object_store_client::{
    CreateObjectInput, DeleteObjectInput, GetObjectInput, ObjectClient, ObjectError, Transport,
    TransportError, TransportResult,
};
use std::{collections::VecDeque, sync::Arc, sync::Mutex};

#[derive(Debug, Clone)]
struct RecordedRequest {
    method: Method,
    path: String,
    headers: HeaderMap,
    body: Option<Bytes>,
}

/// Records every request and answers from a queue of canned responses.
#[derive(Default)]
struct RecordingTransport {
    requests: Mutex<Vec<RecordedRequest>>,
    responses: Mutex<VecDeque<TransportResult<HeaderMap>>>,
}

impl RecordingTransport {
    fn respond(self, response: TransportResult<HeaderMap>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn issue(
        &self,
        method: Method,
        path: &str,
        headers: HeaderMap,
        body: Option<Bytes>,
    ) -> TransportResult<HeaderMap> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            path: path.to_string(),
            headers,
            body,
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(HeaderMap::new()))
    }
}

fn headers(pairs: &[(&str, &str)]) -> HeaderMap {
    pairs
        .iter()
        .map(|(name, value)| {
            (
                HeaderName::from_bytes(name.as_bytes()).unwrap(),
                HeaderValue::from_str(value).unwrap(),
            )
        })
        .collect()
}

fn not_found(method: Method, path: &str) -> TransportError {
    TransportError::Status {
        method,
        path: path.to_string(),
        status: StatusCode::NOT_FOUND,
    }
}

#[tokio::test]
async fn create_puts_then_reads_back() {
    let transport = Arc::new(
        RecordingTransport::default()
            .respond(Ok(HeaderMap::new()))
            .respond(Ok(headers(&[
                ("Content-Length", "5"),
                ("Content-Type", "text/plain"),
                ("X-Object-Meta-color", "red"),
            ]))),
    );
    let client = ObjectClient::new(transport.clone());

    let input = CreateObjectInput::new("c1", "f.txt")
        .with_body("hello")
        .with_content_type("text/plain")
        .with_metadata("color", "red");
    let object = client.create_object(&input).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);

    let put = &requests[0];
    assert_eq!(put.method, Method::PUT);
    assert_eq!(put.path, "c1/f.txt");
    assert_eq!(put.headers["Content-Type"], "text/plain");
    assert_eq!(put.headers["X-Object-Meta-color"], "red");
    assert_eq!(put.body.as_deref(), Some(&b"hello"[..]));

    let head = &requests[1];
    assert_eq!(head.method, Method::HEAD);
    assert_eq!(head.path, "c1/f.txt");
    assert!(head.body.is_none());

    assert_eq!(object.id, "c1/f.txt");
    assert_eq!(object.container, "c1");
    assert_eq!(object.name, "f.txt");
    assert_eq!(object.content_length, 5);
    assert_eq!(object.content_type, "text/plain");
    assert_eq!(object.metadata["color"], "red");
}

#[tokio::test]
async fn create_without_body_or_copy_source_sends_nothing() {
    let transport = Arc::new(RecordingTransport::default());
    let client = ObjectClient::new(transport.clone());

    let err = client
        .create_object(&CreateObjectInput::new("c1", "f.txt"))
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert_eq!(err.to_string(), "Body cannot be nil");
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn create_with_copy_source_sends_no_body() {
    let transport = Arc::new(RecordingTransport::default());
    let client = ObjectClient::new(transport.clone());

    let input = CreateObjectInput::new("c1", "copy.txt").with_copy_from("c0/f.txt");
    client.create_object(&input).await.unwrap();

    let put = &transport.requests()[0];
    assert_eq!(put.headers["X-Copy-From"], "c0/f.txt");
    assert!(put.body.is_none());
}

#[tokio::test]
async fn create_propagates_transport_failure_without_reading_back() {
    let transport = Arc::new(
        RecordingTransport::default().respond(Err(not_found(Method::PUT, "missing/f.txt"))),
    );
    let client = ObjectClient::new(transport.clone());

    let input = CreateObjectInput::new("missing", "f.txt").with_body("x");
    let err = client.create_object(&input).await.unwrap_err();

    match err {
        ObjectError::Transport(inner) => assert_eq!(inner.status(), Some(StatusCode::NOT_FOUND)),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn get_by_id_splits_identity_from_input() {
    let transport = Arc::new(RecordingTransport::default().respond(Ok(headers(&[
        ("Content-Length", "42"),
        ("X-Trans-Id", "tx42"),
    ]))));
    let client = ObjectClient::new(transport.clone());

    let object = client
        .get_object(&GetObjectInput::by_id("c1/f.txt").with_range("bytes=0-9").with_newest(true))
        .await
        .unwrap();

    assert_eq!(object.id, "c1/f.txt");
    assert_eq!(object.container, "c1");
    assert_eq!(object.name, "f.txt");
    assert_eq!(object.content_length, 42);
    assert_eq!(object.transaction_id, "tx42");

    let head = &transport.requests()[0];
    assert_eq!(head.method, Method::HEAD);
    assert_eq!(head.path, "c1/f.txt");
    assert_eq!(head.headers["Range"], "bytes=0-9");
    assert_eq!(head.headers["X-Newest"], "true");
}

#[tokio::test]
async fn get_by_name_sends_default_range_and_newest() {
    let transport = Arc::new(RecordingTransport::default());
    let client = ObjectClient::new(transport.clone());

    let object = client
        .get_object(&GetObjectInput::by_name("c1", "f.txt"))
        .await
        .unwrap();
    assert_eq!(object.id, "c1/f.txt");

    let head = &transport.requests()[0];
    assert_eq!(head.headers["Range"], "");
    assert_eq!(head.headers["X-Newest"], "false");
}

#[tokio::test]
async fn get_with_malformed_id_fails_before_any_request() {
    let transport = Arc::new(RecordingTransport::default());
    let client = ObjectClient::new(transport.clone());

    for id in ["no-separator", "c1/nested/f.txt"] {
        let err = client.get_object(&GetObjectInput::by_id(id)).await.unwrap_err();
        assert!(err.is_validation(), "{id} should be rejected");
    }
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn get_with_bad_content_length_returns_no_descriptor() {
    let transport = Arc::new(
        RecordingTransport::default().respond(Ok(headers(&[("Content-Length", "abc")]))),
    );
    let client = ObjectClient::new(transport);

    let err = client
        .get_object(&GetObjectInput::by_name("c1", "f.txt"))
        .await
        .unwrap_err();
    assert!(matches!(err, ObjectError::Format { header: "Content-Length", .. }));
}

#[tokio::test]
async fn get_without_identity_is_rejected() {
    let transport = Arc::new(RecordingTransport::default());
    let client = ObjectClient::new(transport.clone());

    let err = client
        .get_object(&GetObjectInput::default())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Either ID or Name and Container must be set");
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn delete_by_id_and_by_name() {
    let transport = Arc::new(RecordingTransport::default());
    let client = ObjectClient::new(transport.clone());

    client
        .delete_object(&DeleteObjectInput::by_id("c1/f.txt"))
        .await
        .unwrap();
    client
        .delete_object(&DeleteObjectInput::by_name("c2", "g.txt"))
        .await
        .unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| r.method == Method::DELETE));
    assert_eq!(requests[0].path, "c1/f.txt");
    assert_eq!(requests[1].path, "c2/g.txt");
    assert!(requests[0].headers.is_empty());
}

#[tokio::test]
async fn delete_propagates_transport_errors() {
    let transport = Arc::new(
        RecordingTransport::default().respond(Err(not_found(Method::DELETE, "c1/gone.txt"))),
    );
    let client = ObjectClient::new(transport);

    let err = client
        .delete_object(&DeleteObjectInput::by_name("c1", "gone.txt"))
        .await
        .unwrap_err();
    assert!(matches!(err, ObjectError::Transport(TransportError::Status { .. })));
}

#[tokio::test]
async fn delete_without_identity_is_rejected() {
    let transport = Arc::new(RecordingTransport::default());
    let client = ObjectClient::new(transport.clone());

    let err = client
        .delete_object(&DeleteObjectInput::default())
        .await
        .unwrap_err();
    assert!(err.is_validation());
    assert!(transport.requests().is_empty());
}
