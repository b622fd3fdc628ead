//! Source RCON packet framing.
//!
//! A packet on the wire is: i32_le(length) + i32_le(request_id) +
//! i32_le(type) + body bytes + two NUL terminators, where `length` counts
//! everything after itself. Helpers are generic over the stream so tests
//! can run against in-memory duplex pipes.

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::RconError;

/// RCON packet types (client perspective).
pub const PACKET_TYPE_LOGIN: i32 = 3;
pub const PACKET_TYPE_COMMAND: i32 = 2;
pub const PACKET_TYPE_RESPONSE: i32 = 0;
pub const PACKET_TYPE_AUTH_RESPONSE: i32 = 2;

/// Longest body accepted in either direction. Matches the 4096-byte frame
/// bound minus the 10 bytes of header and terminators.
pub const MAX_BODY_LEN: usize = 4086;

/// A decoded RCON packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    pub request_id: i32,
    pub packet_type: i32,
    pub body: String,
}

/// Write one packet to the stream and flush it.
pub async fn write_packet<S>(
    stream: &mut S,
    request_id: i32,
    packet_type: i32,
    body: &str,
) -> Result<(), RconError>
where
    S: AsyncWrite + Unpin,
{
    let body_bytes = body.as_bytes();
    if body_bytes.len() > MAX_BODY_LEN {
        return Err(RconError::BodyTooLong(body_bytes.len()));
    }
    let length = 10 + body_bytes.len() as i32;
    stream.write_all(&length.to_le_bytes()).await?;
    stream.write_all(&request_id.to_le_bytes()).await?;
    stream.write_all(&packet_type.to_le_bytes()).await?;
    stream.write_all(body_bytes).await?;
    stream.write_all(&[0, 0]).await?;
    stream.flush().await?;
    Ok(())
}

/// Read one packet from the stream.
pub async fn read_packet<S>(stream: &mut S) -> Result<Packet, RconError>
where
    S: AsyncRead + Unpin,
{
    let length = read_i32_le(stream).await?;
    if !(10..=4096).contains(&length) {
        return Err(RconError::InvalidLength(length));
    }

    let request_id = read_i32_le(stream).await?;
    let packet_type = read_i32_le(stream).await?;

    // length covers request_id + type + body + 2 NUL terminators
    let body_len = (length - 10) as usize;
    let mut body = vec![0u8; body_len];
    if body_len > 0 {
        stream.read_exact(&mut body).await?;
    }
    let mut term = [0u8; 2];
    stream.read_exact(&mut term).await?;

    Ok(Packet {
        request_id,
        packet_type,
        body: String::from_utf8_lossy(&body).to_string(),
    })
}

async fn read_i32_le<S>(stream: &mut S) -> Result<i32, RconError>
where
    S: AsyncRead + Unpin,
{
    let mut buf = [0u8; 4];
    stream.read_exact(&mut buf).await?;
    Ok(i32::from_le_bytes(buf))
}
