//! RCON client connection.

use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tracing::debug;

use crate::error::RconError;
use crate::packet::{
    read_packet, write_packet, PACKET_TYPE_AUTH_RESPONSE, PACKET_TYPE_COMMAND, PACKET_TYPE_LOGIN,
};
use crate::Console;

/// An authenticated RCON connection.
///
/// Owns the socket for the life of the process; dropping the client closes
/// the connection on every exit path, including fatal-error returns.
#[derive(Debug)]
pub struct RconClient<S> {
    stream: S,
    next_id: i32,
}

impl RconClient<TcpStream> {
    /// Connect over TCP and authenticate.
    pub async fn connect(host: &str, port: u16, password: &str) -> Result<Self, RconError> {
        let stream = TcpStream::connect((host, port)).await?;
        debug!("connected to rcon at {host}:{port}");
        Self::authenticate(stream, password).await
    }
}

impl<S> RconClient<S>
where
    S: AsyncRead + AsyncWrite + Unpin + Send,
{
    /// Run the login handshake over an already-established stream.
    ///
    /// A reply with request id -1 means the password was rejected.
    pub async fn authenticate(stream: S, password: &str) -> Result<Self, RconError> {
        let mut client = Self { stream, next_id: 0 };
        let id = client.fresh_id();
        write_packet(&mut client.stream, id, PACKET_TYPE_LOGIN, password).await?;
        let reply = read_packet(&mut client.stream).await?;
        if reply.request_id == -1 {
            return Err(RconError::AuthFailed);
        }
        if reply.packet_type != PACKET_TYPE_AUTH_RESPONSE || reply.request_id != id {
            return Err(RconError::IdMismatch {
                sent: id,
                got: reply.request_id,
            });
        }
        debug!("rcon authenticated");
        Ok(client)
    }

    /// Send one command and read its response body.
    ///
    /// Exactly one command is in flight at a time; the short administrative
    /// responses this client deals in always fit a single packet.
    pub async fn send(&mut self, cmd: &str) -> Result<String, RconError> {
        let id = self.fresh_id();
        write_packet(&mut self.stream, id, PACKET_TYPE_COMMAND, cmd).await?;
        let reply = read_packet(&mut self.stream).await?;
        if reply.request_id != id {
            return Err(RconError::IdMismatch {
                sent: id,
                got: reply.request_id,
            });
        }
        Ok(reply.body)
    }

    fn fresh_id(&mut self) -> i32 {
        self.next_id = self.next_id.wrapping_add(1).max(1);
        self.next_id
    }
}

#[async_trait::async_trait]
impl<S> Console for RconClient<S>
where
    S: AsyncRead + AsyncWrite + Unpin + Send,
{
    async fn command(&mut self, cmd: &str) -> Result<String, RconError> {
        self.send(cmd).await
    }
}
