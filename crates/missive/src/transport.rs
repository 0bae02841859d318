//! Transport-level failure signals.

use std::fmt;
use std::io;

/// A failure raised below the API layer, carried opaquely inside
/// [`ApiError::Transport`](crate::ApiError::Transport).
///
/// Only the domain, the numeric code and the textual description are exposed,
/// so consumers stay decoupled from whichever HTTP or socket library produced
/// the failure. Well-known `(domain, code)` pairs are published as associated
/// constants; everything else is treated as an unrecognized signal whose
/// description is passed through as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    domain: String,
    code: i32,
    description: String,
}

impl TransportError {
    /// Domain of system-level connectivity failures.
    pub const CONNECTIVITY_DOMAIN: &'static str = "connectivity";

    /// Domain of response-status validation failures.
    pub const VALIDATION_DOMAIN: &'static str = "validation";

    /// Domain of HTTP library failures that fit no recognized condition.
    pub const HTTP_DOMAIN: &'static str = "http";

    /// The device has no usable network.
    pub const NOT_CONNECTED: i32 = 1;
    /// The network is up but the host cannot be reached.
    pub const CANNOT_REACH_HOST: i32 = 2;
    /// The request ran out of time.
    pub const TIMED_OUT: i32 = 3;
    /// An established connection dropped mid-exchange.
    pub const CONNECTION_LOST: i32 = 4;

    /// Build a signal for a foreign `(domain, code)` pair.
    pub fn new(domain: impl Into<String>, code: i32, description: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            code,
            description: description.into(),
        }
    }

    /// The device is offline.
    pub fn not_connected() -> Self {
        Self::connectivity(Self::NOT_CONNECTED, "not connected to the network")
    }

    /// The host is unreachable.
    pub fn cannot_reach_host() -> Self {
        Self::connectivity(Self::CANNOT_REACH_HOST, "cannot reach the host")
    }

    /// The request timed out.
    pub fn timed_out() -> Self {
        Self::connectivity(Self::TIMED_OUT, "request timed out")
    }

    /// The connection was lost mid-request.
    pub fn connection_lost() -> Self {
        Self::connectivity(Self::CONNECTION_LOST, "network connection lost")
    }

    /// The response carried a status outside the acceptable range.
    pub fn unacceptable_status(status: u16) -> Self {
        Self::new(
            Self::VALIDATION_DOMAIN,
            i32::from(status),
            format!("unacceptable response status {status}"),
        )
    }

    fn connectivity(code: i32, description: &str) -> Self {
        Self::new(Self::CONNECTIVITY_DOMAIN, code, description)
    }

    /// Domain the failure belongs to.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Numeric code within the domain.
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Human-readable description recorded at the point of failure.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Classify a failed `reqwest` exchange into a transport signal.
    ///
    /// Timeouts are taken from the library directly; connectivity conditions
    /// are read off the `std::io::Error` buried in the source chain. Anything
    /// unrecognized keeps the library's own description so the caller can
    /// surface it verbatim.
    pub(crate) fn from_reqwest(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            return Self::timed_out();
        }
        if let Some(signal) = source_io_kind(error).and_then(Self::from_io_kind) {
            return signal;
        }
        if error.is_connect() {
            return Self::cannot_reach_host();
        }
        Self::new(Self::HTTP_DOMAIN, 0, error.to_string())
    }

    pub(crate) fn from_io_kind(kind: io::ErrorKind) -> Option<Self> {
        match kind {
            io::ErrorKind::NotConnected
            | io::ErrorKind::NetworkDown
            | io::ErrorKind::NetworkUnreachable => Some(Self::not_connected()),
            io::ErrorKind::ConnectionRefused | io::ErrorKind::HostUnreachable => {
                Some(Self::cannot_reach_host())
            }
            io::ErrorKind::TimedOut => Some(Self::timed_out()),
            io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::BrokenPipe
            | io::ErrorKind::UnexpectedEof => Some(Self::connection_lost()),
            _ => None,
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)
    }
}

impl std::error::Error for TransportError {}

/// Walk the source chain for the underlying I/O error kind, if any.
fn source_io_kind(error: &(dyn std::error::Error + 'static)) -> Option<io::ErrorKind> {
    let mut source = error.source();
    while let Some(current) = source {
        if let Some(io_error) = current.downcast_ref::<io::Error>() {
            return Some(io_error.kind());
        }
        source = current.source();
    }
    None
}
