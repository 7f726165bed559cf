//! Deterministic serialization for the invocation envelope.
//!
//! Encoding format (little-endian):
//! - `i32` / `u32` fields are written directly
//! - Strings and byte strings are length-prefixed (u32 LE)
//! - Lists are count-prefixed (u32 LE) then concatenated
//!
//! ```text
//! Request:  [function: str] [arg_count: u32] [arg: str]*
//! Response: [status: i32] [message: str] [payload: bytes]
//! ```
//!
//! Decoders reject truncated input and trailing bytes. Encoders fail rather
//! than truncate a length or count that does not fit in a `u32`.

use alloc::string::String;
use alloc::vec::Vec;
use crate::envelope::{Request, Response};
use crate::error::{CodecError, StatusCode};

/// A cursor for reading bytes during decoding.
struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], CodecError> {
        if n > self.remaining() {
            return Err(CodecError::UnexpectedEof);
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn read_u32(&mut self) -> Result<u32, CodecError> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn read_i32(&mut self) -> Result<i32, CodecError> {
        let bytes = self.read_bytes(4)?;
        Ok(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn read_var_bytes(&mut self) -> Result<Vec<u8>, CodecError> {
        let len = self.read_u32()? as usize;
        Ok(self.read_bytes(len)?.to_vec())
    }

    fn read_string(&mut self) -> Result<String, CodecError> {
        let bytes = self.read_var_bytes()?;
        String::from_utf8(bytes).map_err(|_| CodecError::InvalidUtf8)
    }

    fn finish(&self) -> Result<(), CodecError> {
        match self.remaining() {
            0 => Ok(()),
            n => Err(CodecError::TrailingBytes(n)),
        }
    }
}

// ── Encoding helpers ──

fn write_u32(buf: &mut Vec<u8>, v: u32) {
    buf.extend_from_slice(&v.to_le_bytes());
}

fn write_i32(buf: &mut Vec<u8>, v: i32) {
    buf.extend_from_slice(&v.to_le_bytes());
}

fn write_len(buf: &mut Vec<u8>, len: usize) -> Result<(), CodecError> {
    let len = u32::try_from(len).map_err(|_| CodecError::TooLarge(len))?;
    write_u32(buf, len);
    Ok(())
}

fn write_var_bytes(buf: &mut Vec<u8>, data: &[u8]) -> Result<(), CodecError> {
    write_len(buf, data.len())?;
    buf.extend_from_slice(data);
    Ok(())
}

fn write_string(buf: &mut Vec<u8>, s: &str) -> Result<(), CodecError> {
    write_var_bytes(buf, s.as_bytes())
}

// ── Request encoding ──

/// Encode a `Request` to deterministic bytes.
pub fn encode_request(req: &Request) -> Result<Vec<u8>, CodecError> {
    let size = 8 + req.function.len() + req.args.iter().map(|a| 4 + a.len()).sum::<usize>();
    let mut buf = Vec::with_capacity(size);

    write_string(&mut buf, &req.function)?;
    write_len(&mut buf, req.args.len())?;
    for arg in &req.args {
        write_string(&mut buf, arg)?;
    }

    Ok(buf)
}

/// Decode a `Request` from bytes.
pub fn decode_request(data: &[u8]) -> Result<Request, CodecError> {
    let mut r = Reader::new(data);

    let function = r.read_string()?;
    let arg_count = r.read_u32()? as usize;
    // Every arg needs at least its 4-byte length prefix.
    let mut args = Vec::with_capacity(arg_count.min(r.remaining() / 4));
    for _ in 0..arg_count {
        args.push(r.read_string()?);
    }

    r.finish()?;
    Ok(Request { function, args })
}

// ── Response encoding ──

/// Encode a `Response` to deterministic bytes.
pub fn encode_response(resp: &Response) -> Result<Vec<u8>, CodecError> {
    let mut buf = Vec::with_capacity(12 + resp.message.len() + resp.payload.len());

    write_i32(&mut buf, resp.status.as_i32());
    write_string(&mut buf, &resp.message)?;
    write_var_bytes(&mut buf, &resp.payload)?;

    Ok(buf)
}

/// Decode a `Response` from bytes.
pub fn decode_response(data: &[u8]) -> Result<Response, CodecError> {
    let mut r = Reader::new(data);

    let code = r.read_i32()?;
    let status = StatusCode::from_i32(code).ok_or(CodecError::UnknownStatus(code))?;
    let message = r.read_string()?;
    let payload = r.read_var_bytes()?;

    r.finish()?;
    Ok(Response {
        status,
        message,
        payload,
    })
}
