use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::info;

use crate::http::request::{Method, ParsedRequest};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("empty request or header lines")]
    EmptyRequest,
    #[error("bad request method: {0}")]
    BadRequestMethod(String),
    #[error("no URL in request: {0}")]
    MissingTarget(String),
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Reads one request off `reader`.
///
/// Consumes the request line, requires at least one header line, then
/// discards headers up to the blank line (or end of stream). Nothing past
/// the header block is read.
pub async fn read_request<R>(reader: &mut R) -> Result<ParsedRequest, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let request_line = match read_line(reader).await? {
        Some(line) if !line.is_empty() => line,
        _ => return Err(ParseError::EmptyRequest),
    };

    let mut header = match read_line(reader).await? {
        Some(line) if !line.is_empty() => line,
        _ => return Err(ParseError::EmptyRequest),
    };

    loop {
        info!(header = %header, "discarding header");
        match read_line(reader).await? {
            Some(line) if !line.is_empty() => header = line,
            _ => break,
        }
    }

    parse_request_line(&request_line)
}

/// Tokenises a request line into method and target.
pub fn parse_request_line(line: &str) -> Result<ParsedRequest, ParseError> {
    let mut parts = line.split_whitespace();

    let method = parts
        .next()
        .and_then(Method::from_str)
        .ok_or_else(|| ParseError::BadRequestMethod(line.to_string()))?;

    let target = parts
        .next()
        .ok_or_else(|| ParseError::MissingTarget(line.to_string()))?;

    Ok(ParsedRequest::new(method, target, line))
}

/// Reads a single line with its CRLF or LF terminator removed.
/// Returns `None` at end of stream.
async fn read_line<R>(reader: &mut R) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    if reader.read_line(&mut line).await? == 0 {
        return Ok(None);
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(Some(line))
}
