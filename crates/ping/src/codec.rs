//! VarInt-framed packets of the Java edition protocol.

use crate::PingError;
use bytes::{Buf, BufMut, Bytes, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt};

/// Largest packet length expressible in a 3-byte VarInt
pub const MAX_PACKET_LEN: usize = 2_097_151;

const MAX_VARINT_BYTES: usize = 5;

pub fn write_varint(buf: &mut BytesMut, value: i32) {
    let mut value = value as u32;
    loop {
        if value & !0x7f == 0 {
            buf.put_u8(value as u8);
            return;
        }
        buf.put_u8((value & 0x7f) as u8 | 0x80);
        value >>= 7;
    }
}

pub fn read_varint(buf: &mut impl Buf) -> Result<i32, PingError> {
    let mut value: u32 = 0;
    for position in 0..MAX_VARINT_BYTES {
        if !buf.has_remaining() {
            return Err(PingError::InvalidResponse("truncated VarInt".to_string()));
        }
        let byte = buf.get_u8();
        value |= u32::from(byte & 0x7f) << (7 * position);
        if byte & 0x80 == 0 {
            return Ok(value as i32);
        }
    }
    Err(PingError::InvalidResponse("VarInt is longer than 5 bytes".to_string()))
}

async fn read_varint_async<R: AsyncRead + Unpin>(reader: &mut R) -> Result<i32, PingError> {
    let mut value: u32 = 0;
    for position in 0..MAX_VARINT_BYTES {
        let byte = reader.read_u8().await?;
        value |= u32::from(byte & 0x7f) << (7 * position);
        if byte & 0x80 == 0 {
            return Ok(value as i32);
        }
    }
    Err(PingError::InvalidResponse("VarInt is longer than 5 bytes".to_string()))
}

pub fn write_string(buf: &mut BytesMut, value: &str) {
    write_varint(buf, value.len() as i32);
    buf.put_slice(value.as_bytes());
}

pub fn read_string(buf: &mut impl Buf) -> Result<String, PingError> {
    let len = read_varint(buf)?;
    let len = usize::try_from(len)
        .map_err(|_| PingError::InvalidResponse(format!("negative string length {}", len)))?;
    if len > buf.remaining() {
        return Err(PingError::InvalidResponse(format!(
            "string length {} exceeds remaining {} bytes",
            len,
            buf.remaining()
        )));
    }
    let bytes = buf.copy_to_bytes(len);
    String::from_utf8(bytes.to_vec())
        .map_err(|e| PingError::InvalidResponse(format!("string is not UTF-8: {}", e)))
}

/// Prefixes `packet_id` and `body` with their combined VarInt length
pub fn frame(packet_id: i32, body: &[u8]) -> Bytes {
    let mut payload = BytesMut::with_capacity(body.len() + MAX_VARINT_BYTES);
    write_varint(&mut payload, packet_id);
    payload.put_slice(body);

    let mut framed = BytesMut::with_capacity(payload.len() + MAX_VARINT_BYTES);
    write_varint(&mut framed, payload.len() as i32);
    framed.put_slice(&payload);
    framed.freeze()
}

/// Reads one framed packet, returning its id and remaining body
pub async fn read_packet<R: AsyncRead + Unpin>(reader: &mut R) -> Result<(i32, Bytes), PingError> {
    let len = read_varint_async(reader).await?;
    let len = usize::try_from(len)
        .ok()
        .filter(|len| (1..=MAX_PACKET_LEN).contains(len))
        .ok_or_else(|| PingError::InvalidResponse(format!("invalid packet length {}", len)))?;

    let mut payload = vec![0u8; len];
    reader.read_exact(&mut payload).await?;

    let mut payload = Bytes::from(payload);
    let packet_id = read_varint(&mut payload)?;
    Ok((packet_id, payload))
}
