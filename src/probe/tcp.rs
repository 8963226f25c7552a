use std::time::Duration;

use tokio::net::TcpStream;
use tokio::time::timeout;

/// Check whether something accepts TCP connections on `host:port`.
/// Any failure, including the timeout, reads as "not listening". The stream is
/// dropped as soon as the connect completes.
pub async fn check_port_listening(host: &str, port: u16, connect_timeout: Duration) -> bool {
    match timeout(connect_timeout, TcpStream::connect((host, port))).await {
        Ok(Ok(_stream)) => true,
        Ok(Err(e)) => {
            log::debug!("TCP connect to {host}:{port} failed: {e}");
            false
        }
        Err(_) => {
            log::debug!("TCP connect to {host}:{port} timed out after {connect_timeout:?}");
            false
        }
    }
}
