//! HTTP server utility methods

use crate::server::server::HttpServer;
use crate::utils::error::GatewayError;
use std::io::ErrorKind;

impl HttpServer {
    /// Turn a bind failure into an actionable startup error
    pub(crate) fn format_bind_error(
        error: std::io::Error,
        bind_addr: &str,
        port: u16,
    ) -> GatewayError {
        let message = match error.kind() {
            ErrorKind::AddrInUse => format!(
                "Port {port} is already in use.\n  \
                 Find the owner with: lsof -i:{port}\n  \
                 Or start on another port: --port {next} or GATEWAY_PORT={next}",
                next = port.saturating_add(1)
            ),
            ErrorKind::PermissionDenied => format!(
                "Permission denied for port {port}.\n  \
                 Use a non-privileged port (>= 1024), e.g. --port 3000"
            ),
            _ => format!("Failed to bind to {}: {}", bind_addr, error),
        };

        GatewayError::server(message)
    }
}
