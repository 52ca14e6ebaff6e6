use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{info, warn};

use crate::files::StaticFiles;
use crate::http::parser::{ParseError, read_request};
use crate::http::request::ParsedRequest;
use crate::http::response::Response;
use crate::http::writer::{ResponseWriter, status_line};

/// One accepted connection and everything needed to answer it.
///
/// The stream is owned for the whole request/response cycle and dropped
/// (closed) when `run` returns, whatever the outcome.
pub struct Connection<S> {
    stream: BufReader<S>,
    peer: SocketAddr,
    files: Arc<StaticFiles>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(ParsedRequest),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, peer: SocketAddr, files: Arc<StaticFiles>) -> Self {
        Self {
            stream: BufReader::new(stream),
            peer,
            files,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        let result = self.drive().await;
        info!(peer = %self.peer, "Connection closed");
        result
    }

    async fn drive(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    // Malformed requests get no response at all
                    let request = match read_request(&mut self.stream).await {
                        Ok(request) => request,
                        Err(ParseError::Io(e)) => return Err(e.into()),
                        Err(e) => return Err(anyhow::anyhow!("HTTP parse error: {}", e)),
                    };

                    info!(peer = %self.peer, request = %request.request_line, "Request");
                    self.state = ConnectionState::Processing(request);
                }

                ConnectionState::Processing(request) => {
                    let response = self.files.respond(&request.target).await;
                    log_response(self.peer, &response);

                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(self.stream.get_mut()).await?;

                    // HTTP/1.0: one request per connection
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    if let Err(e) = self.stream.get_mut().shutdown().await {
                        warn!(peer = %self.peer, error = %e, "shutdown failed");
                    }
                    break;
                }
            }
        }

        Ok(())
    }
}

fn log_response(peer: SocketAddr, response: &Response) {
    info!(
        peer = %peer,
        status = response.status.as_u16(),
        bytes = response.body.len(),
        "{}",
        status_line(response)
    );
}
