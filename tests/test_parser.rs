use docroot::http::parser::{ParseError, parse_request_line, read_request};
use docroot::http::request::Method;

#[tokio::test]
async fn test_parse_simple_get_request() {
    let mut req: &[u8] = b"GET /index.html HTTP/1.0\r\nHost: example.com\r\n\r\n";
    let parsed = read_request(&mut req).await.unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.target, "index.html");
}

#[tokio::test]
async fn test_parse_lf_only_lines() {
    let mut req: &[u8] = b"GET /a/b.txt HTTP/1.0\nUser-Agent: nc\n\n";
    let parsed = read_request(&mut req).await.unwrap();

    assert_eq!(parsed.target, "a/b.txt");
}

#[tokio::test]
async fn test_parse_headers_are_discarded() {
    let mut req: &[u8] =
        b"GET /x HTTP/1.0\r\nHost: h\r\nUser-Agent: test-client\r\nAccept: */*\r\n\r\n";
    let parsed = read_request(&mut req).await.unwrap();

    assert_eq!(parsed.target, "x");
    assert!(req.is_empty());
}

#[tokio::test]
async fn test_parse_end_of_stream_ends_headers() {
    let mut req: &[u8] = b"GET /x HTTP/1.0\r\nHost: h\r\n";
    let parsed = read_request(&mut req).await.unwrap();

    assert_eq!(parsed.target, "x");
}

#[tokio::test]
async fn test_parse_empty_stream() {
    let mut req: &[u8] = b"";
    let result = read_request(&mut req).await;

    assert!(matches!(result, Err(ParseError::EmptyRequest)));
}

#[tokio::test]
async fn test_parse_empty_request_line() {
    let mut req: &[u8] = b"\r\nHost: h\r\n\r\n";
    let result = read_request(&mut req).await;

    assert!(matches!(result, Err(ParseError::EmptyRequest)));
}

#[tokio::test]
async fn test_parse_requires_a_header_line() {
    let mut req: &[u8] = b"GET /x HTTP/1.0\r\n\r\n";
    let result = read_request(&mut req).await;
    assert!(matches!(result, Err(ParseError::EmptyRequest)));

    let mut req: &[u8] = b"GET /x HTTP/1.0\r\n";
    let result = read_request(&mut req).await;
    assert!(matches!(result, Err(ParseError::EmptyRequest)));
}

#[tokio::test]
async fn test_parse_non_get_method() {
    let mut req: &[u8] = b"POST /x HTTP/1.0\r\nHost: h\r\n\r\n";
    let result = read_request(&mut req).await;

    assert!(matches!(result, Err(ParseError::BadRequestMethod(_))));
}

#[tokio::test]
async fn test_parse_invalid_utf8_is_io_error() {
    let mut req: &[u8] = b"GET /\xff\xfe HTTP/1.0\r\nHost: h\r\n\r\n";
    let result = read_request(&mut req).await;

    assert!(matches!(result, Err(ParseError::Io(_))));
}

#[test]
fn test_request_line_method_is_case_sensitive() {
    assert!(matches!(
        parse_request_line("get /x HTTP/1.0"),
        Err(ParseError::BadRequestMethod(_))
    ));
}

#[test]
fn test_request_line_whitespace_only() {
    assert!(matches!(
        parse_request_line("   "),
        Err(ParseError::BadRequestMethod(_))
    ));
}

#[test]
fn test_request_line_missing_target() {
    assert!(matches!(
        parse_request_line("GET"),
        Err(ParseError::MissingTarget(_))
    ));
    assert!(matches!(
        parse_request_line("GET   "),
        Err(ParseError::MissingTarget(_))
    ));
}

#[test]
fn test_request_line_trailing_tokens_ignored() {
    let parsed = parse_request_line("GET /file.txt HTTP/1.0 extra junk").unwrap();
    assert_eq!(parsed.target, "file.txt");
    assert_eq!(parsed.request_line, "GET /file.txt HTTP/1.0 extra junk");
}

#[test]
fn test_request_line_without_version() {
    let parsed = parse_request_line("GET /file.txt").unwrap();
    assert_eq!(parsed.target, "file.txt");
}

#[test]
fn test_request_line_query_passes_through() {
    let parsed = parse_request_line("GET /search?q=rust HTTP/1.0").unwrap();
    assert_eq!(parsed.target, "search?q=rust");
}

#[test]
fn test_rejected_request_line_is_kept() {
    match parse_request_line("POST /form HTTP/1.0") {
        Err(ParseError::BadRequestMethod(line)) => assert_eq!(line, "POST /form HTTP/1.0"),
        other => panic!("unexpected result: {:?}", other),
    }
    match parse_request_line("GET") {
        Err(ParseError::MissingTarget(line)) => assert_eq!(line, "GET"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[derive(Clone, Default)]
struct CapturedLog(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

impl std::io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_discarded_headers_logged_at_info() {
    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let mut req: &[u8] = b"GET /x HTTP/1.0\r\nUser-Agent: curl/8.0\r\n\r\n";
    read_request(&mut req).await.unwrap();

    let output = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("User-Agent: curl/8.0"), "log was: {}", output);
}
