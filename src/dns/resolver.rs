//! Single-shot stub resolution over a datagram channel.
//!
//! One query, one upstream, one dedicated ephemeral-port socket. The
//! exchange suspends only on send/receive readiness; malformed datagrams
//! are discarded and the receive loop keeps listening, so only the caller's
//! deadline or a send-side failure ends a resolution early.

use crate::dns::message::{Message, Question};
use crate::error::ResolveError;
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Encode buffer for outgoing queries
const SEND_BUFFER_SIZE: usize = 512;
/// Receive buffer for replies
const RECV_BUFFER_SIZE: usize = 1024;

/// A non-blocking datagram endpoint plus one-shot readiness notifications.
///
/// This is the boundary to the reactor: `ready_to_send`/`ready_to_recv`
/// suspend until the endpoint can make progress, and the `try_` primitives
/// have standard `WouldBlock` semantics. Implemented for
/// `tokio::net::UdpSocket`; tests substitute scripted channels.
pub trait DatagramChannel: Send + Sync {
    fn ready_to_send(&self) -> impl Future<Output = io::Result<()>> + Send;
    fn ready_to_recv(&self) -> impl Future<Output = io::Result<()>> + Send;
    fn try_send_to(&self, buf: &[u8], target: SocketAddr) -> io::Result<usize>;
    fn try_recv_from(&self, buf: &mut [u8]) -> io::Result<(usize, SocketAddr)>;
}

impl DatagramChannel for UdpSocket {
    async fn ready_to_send(&self) -> io::Result<()> {
        self.writable().await
    }

    async fn ready_to_recv(&self) -> io::Result<()> {
        self.readable().await
    }

    fn try_send_to(&self, buf: &[u8], target: SocketAddr) -> io::Result<usize> {
        UdpSocket::try_send_to(self, buf, target)
    }

    fn try_recv_from(&self, buf: &mut [u8]) -> io::Result<(usize, SocketAddr)> {
        UdpSocket::try_recv_from(self, buf)
    }
}

/// Resolver for one configured upstream server
pub struct StubResolver {
    upstream: SocketAddr,
}

impl StubResolver {
    pub fn new(upstream: SocketAddr) -> StubResolver {
        StubResolver { upstream }
    }

    pub fn upstream(&self) -> SocketAddr {
        self.upstream
    }

    /// Run one query/response exchange on a fresh ephemeral-port socket.
    ///
    /// The socket is owned by this future, so every exit path (success,
    /// send failure, or the caller's timeout cancelling the future at a
    /// suspension point) releases the handle exactly once.
    pub async fn resolve(&self, query: &Message) -> Result<Message, ResolveError> {
        let bind_addr = if self.upstream.is_ipv4() {
            "0.0.0.0:0"
        } else {
            "[::]:0"
        };
        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(ResolveError::Bind)?;
        self.exchange(&socket, query).await
    }

    /// The exchange protocol over any datagram channel: send the whole
    /// encoded query, then receive until a datagram decodes as a message.
    pub async fn exchange<C: DatagramChannel>(
        &self,
        channel: &C,
        query: &Message,
    ) -> Result<Message, ResolveError> {
        let mut send_buf = [0u8; SEND_BUFFER_SIZE];
        let wire_len = query
            .encode(&mut send_buf)
            .map_err(|_| ResolveError::EncodeOverflow)?;

        let mut sent = 0;
        while sent < wire_len {
            channel.ready_to_send().await.map_err(ResolveError::Io)?;
            match channel.try_send_to(&send_buf[sent..wire_len], self.upstream) {
                Ok(n) => {
                    debug!(bytes = n, upstream = %self.upstream, "sent");
                    sent += n;
                }
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => continue,
                Err(e) => return Err(ResolveError::SendFailed(e)),
            }
        }

        let mut recv_buf = [0u8; RECV_BUFFER_SIZE];
        loop {
            channel.ready_to_recv().await.map_err(ResolveError::Io)?;
            let (len, from) = match channel.try_recv_from(&mut recv_buf) {
                Ok(pair) => pair,
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => continue,
                Err(e) => {
                    debug!(error = %e, "receive failed, still listening");
                    continue;
                }
            };
            if len == 0 {
                debug!(from = %from, "empty datagram, still listening");
                continue;
            }
            // The reply's source address is not checked against the
            // upstream; only the caller's deadline bounds the wait.
            match Message::decode(&recv_buf[..len]) {
                Ok((response, consumed)) => {
                    if consumed < len {
                        warn!(
                            bytes = len,
                            consumed = consumed,
                            from = %from,
                            "datagram has trailing bytes past the message"
                        );
                    }
                    debug!(bytes = len, from = %from, id = response.id, "reply decoded");
                    return Ok(response);
                }
                Err(e) => {
                    debug!(bytes = len, from = %from, error = %e, "undecodable datagram, still listening");
                }
            }
        }
    }
}

/// Convenience front end: build the query for a question and resolve it
/// under a deadline.
pub struct Digger {
    resolver: StubResolver,
}

impl Digger {
    pub fn new(upstream: SocketAddr) -> Digger {
        Digger {
            resolver: StubResolver::new(upstream),
        }
    }

    pub fn upstream(&self) -> SocketAddr {
        self.resolver.upstream()
    }

    /// One dig: QUERY opcode, thread-local random transaction id, single
    /// question. The deadline covers bind, send, and the whole receive
    /// loop; expiry cancels the exchange mid-suspension and still closes
    /// the socket.
    pub async fn dig(&self, question: Question, deadline: Duration) -> Result<Message, ResolveError> {
        let query = Message::begin_query(question, &mut rand::thread_rng());
        debug!(id = query.id, upstream = %self.resolver.upstream(), "query built");
        match tokio::time::timeout(deadline, self.resolver.resolve(&query)).await {
            Ok(result) => result,
            Err(_) => Err(ResolveError::Timeout),
        }
    }
}
