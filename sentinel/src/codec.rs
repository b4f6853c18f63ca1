//! # Argument Payload Codec
//!
//! Interprets the argument bytes that follow an event header. Arguments are
//! laid out back to back in schema order with no per-argument tag, so the
//! decoder walks [`ArgMeta::arg_type`] over the buffer positionally.
//!
//! ## Wire Layout (little-endian unless noted)
//!
//! | Tag        | Bytes                                                   |
//! |------------|---------------------------------------------------------|
//! | int, uint, mode, dev | 4                                             |
//! | long, ulong, off, size, pointer | 8                                  |
//! | u16        | 2                                                       |
//! | str        | u32 length, then bytes (trailing NUL dropped)           |
//! | str_arr    | u8 count, then `count` strings                          |
//! | bytes      | u32 length, then raw bytes                              |
//! | int_arr2   | 2 × i32                                                 |
//! | cred       | 10 × u32, then 5 × u64                                  |
//! | sockaddr   | u16 family, then the family's kernel struct body        |
//! | args_arr   | u8 count, then `count` × u64                            |
//! | none       | 0                                                       |
//!
//! Socket ports, IPv4 addresses and IPv6 flow info are copied from the
//! kernel structs as-is and therefore arrive in network byte order.

use std::net::{Ipv4Addr, Ipv6Addr};

use sentinel_common::ArgType;
use serde::{Serialize, Serializer};

use crate::domain::DecodeError;
use crate::registry::ArgMeta;

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const AF_UNIX: u16 = libc::AF_UNIX as u16;
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const AF_INET: u16 = libc::AF_INET as u16;
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const AF_INET6: u16 = libc::AF_INET6 as u16;

/// `sun_path` length in `struct sockaddr_un`
pub const UNIX_PATH_MAX: usize = 108;

/// Largest string count a `str_arr` argument can carry
const MAX_STR_ARR: usize = u8::MAX as usize;

// ============================================================================
// Decoded values
// ============================================================================

/// One decoded argument value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ArgValue {
    None,
    Int(i32),
    Uint(u32),
    Long(i64),
    Ulong(u64),
    Off(i64),
    Mode(u32),
    Dev(u32),
    Size(u64),
    Pointer(#[serde(serialize_with = "as_hex")] u64),
    Str(String),
    StrArr(Vec<String>),
    SockAddr(SockAddr),
    Bytes(Vec<u8>),
    U16(u16),
    Cred(Cred),
    IntArr2([i32; 2]),
    ArgsArr(Vec<u64>),
}

impl ArgValue {
    /// The wire tag this value is encoded with
    #[must_use]
    pub fn arg_type(&self) -> ArgType {
        match self {
            ArgValue::None => ArgType::None,
            ArgValue::Int(_) => ArgType::Int,
            ArgValue::Uint(_) => ArgType::Uint,
            ArgValue::Long(_) => ArgType::Long,
            ArgValue::Ulong(_) => ArgType::Ulong,
            ArgValue::Off(_) => ArgType::Off,
            ArgValue::Mode(_) => ArgType::Mode,
            ArgValue::Dev(_) => ArgType::Dev,
            ArgValue::Size(_) => ArgType::Size,
            ArgValue::Pointer(_) => ArgType::Pointer,
            ArgValue::Str(_) => ArgType::Str,
            ArgValue::StrArr(_) => ArgType::StrArr,
            ArgValue::SockAddr(_) => ArgType::SockAddr,
            ArgValue::Bytes(_) => ArgType::Bytes,
            ArgValue::U16(_) => ArgType::U16,
            ArgValue::Cred(_) => ArgType::Cred,
            ArgValue::IntArr2(_) => ArgType::IntArr2,
            ArgValue::ArgsArr(_) => ArgType::ArgsArr,
        }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn as_hex<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{value:#x}"))
}

/// Socket address as captured from the kernel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "sa_family")]
pub enum SockAddr {
    #[serde(rename = "AF_UNIX")]
    Unix { sun_path: String },
    #[serde(rename = "AF_INET")]
    Inet { sin_port: u16, sin_addr: Ipv4Addr },
    #[serde(rename = "AF_INET6")]
    Inet6 { sin6_port: u16, sin6_flowinfo: u32, sin6_addr: Ipv6Addr, sin6_scope_id: u32 },
}

impl SockAddr {
    #[must_use]
    pub fn family(&self) -> u16 {
        match self {
            SockAddr::Unix { .. } => AF_UNIX,
            SockAddr::Inet { .. } => AF_INET,
            SockAddr::Inet6 { .. } => AF_INET6,
        }
    }
}

/// Trimmed task credentials
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Cred {
    pub uid: u32,
    pub gid: u32,
    pub suid: u32,
    pub sgid: u32,
    pub euid: u32,
    pub egid: u32,
    pub fsuid: u32,
    pub fsgid: u32,
    pub user_ns: u32,
    pub securebits: u32,
    pub cap_inheritable: u64,
    pub cap_permitted: u64,
    pub cap_effective: u64,
    pub cap_bset: u64,
    pub cap_ambient: u64,
}

// ============================================================================
// Decoding
// ============================================================================

/// Decode `buf` against `schema`, one value per schema entry
///
/// # Errors
/// Returns [`DecodeError`] if the buffer is too short for the schema, holds
/// malformed strings or socket addresses, or has bytes left over after the
/// last argument
pub fn decode_args(schema: &[ArgMeta], buf: &[u8]) -> Result<Vec<ArgValue>, DecodeError> {
    let mut reader = Reader::new(buf);
    let values = schema
        .iter()
        .map(|arg| reader.value(arg.name, arg.arg_type()))
        .collect::<Result<Vec<_>, _>>()?;

    if reader.remaining() > 0 {
        return Err(DecodeError::TrailingBytes(reader.remaining()));
    }
    Ok(values)
}

struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn take(&mut self, arg: &str, needed: usize) -> Result<&'a [u8], DecodeError> {
        let remaining = self.remaining();
        if needed > remaining {
            return Err(DecodeError::UnexpectedEof { arg: arg.to_string(), needed, remaining });
        }
        let bytes = &self.buf[self.pos..self.pos + needed];
        self.pos += needed;
        Ok(bytes)
    }

    fn array<const N: usize>(&mut self, arg: &str) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(arg, N)?);
        Ok(out)
    }

    fn u8(&mut self, arg: &str) -> Result<u8, DecodeError> {
        self.array::<1>(arg).map(|[b]| b)
    }

    fn u16(&mut self, arg: &str) -> Result<u16, DecodeError> {
        self.array(arg).map(u16::from_le_bytes)
    }

    fn u32(&mut self, arg: &str) -> Result<u32, DecodeError> {
        self.array(arg).map(u32::from_le_bytes)
    }

    fn i32(&mut self, arg: &str) -> Result<i32, DecodeError> {
        self.array(arg).map(i32::from_le_bytes)
    }

    fn u64(&mut self, arg: &str) -> Result<u64, DecodeError> {
        self.array(arg).map(u64::from_le_bytes)
    }

    fn i64(&mut self, arg: &str) -> Result<i64, DecodeError> {
        self.array(arg).map(i64::from_le_bytes)
    }

    fn sized(&mut self, arg: &str) -> Result<&'a [u8], DecodeError> {
        let len = self.u32(arg)? as usize;
        self.take(arg, len)
    }

    fn string(&mut self, arg: &str) -> Result<String, DecodeError> {
        let raw = self.sized(arg)?;
        let raw = raw.strip_suffix(&[0]).unwrap_or(raw);
        utf8(arg, raw)
    }

    fn value(&mut self, arg: &str, ty: ArgType) -> Result<ArgValue, DecodeError> {
        Ok(match ty {
            ArgType::None => ArgValue::None,
            ArgType::Int => ArgValue::Int(self.i32(arg)?),
            ArgType::Uint => ArgValue::Uint(self.u32(arg)?),
            ArgType::Long => ArgValue::Long(self.i64(arg)?),
            ArgType::Ulong => ArgValue::Ulong(self.u64(arg)?),
            ArgType::Off => ArgValue::Off(self.i64(arg)?),
            ArgType::Mode => ArgValue::Mode(self.u32(arg)?),
            ArgType::Dev => ArgValue::Dev(self.u32(arg)?),
            ArgType::Size => ArgValue::Size(self.u64(arg)?),
            ArgType::Pointer => ArgValue::Pointer(self.u64(arg)?),
            ArgType::Str => ArgValue::Str(self.string(arg)?),
            ArgType::StrArr => {
                let count = self.u8(arg)?;
                let items = (0..count).map(|_| self.string(arg)).collect::<Result<_, _>>()?;
                ArgValue::StrArr(items)
            }
            ArgType::SockAddr => ArgValue::SockAddr(self.sockaddr(arg)?),
            ArgType::Bytes => ArgValue::Bytes(self.sized(arg)?.to_vec()),
            ArgType::U16 => ArgValue::U16(self.u16(arg)?),
            ArgType::Cred => ArgValue::Cred(self.cred(arg)?),
            ArgType::IntArr2 => ArgValue::IntArr2([self.i32(arg)?, self.i32(arg)?]),
            ArgType::ArgsArr => {
                let count = self.u8(arg)?;
                let items = (0..count).map(|_| self.u64(arg)).collect::<Result<_, _>>()?;
                ArgValue::ArgsArr(items)
            }
        })
    }

    fn sockaddr(&mut self, arg: &str) -> Result<SockAddr, DecodeError> {
        let family = self.u16(arg)?;
        match family {
            AF_UNIX => {
                let path = self.take(arg, UNIX_PATH_MAX)?;
                let end = path.iter().position(|&b| b == 0).unwrap_or(path.len());
                Ok(SockAddr::Unix { sun_path: utf8(arg, &path[..end])? })
            }
            AF_INET => {
                let sin_port = u16::from_be_bytes(self.array(arg)?);
                let sin_addr = Ipv4Addr::from(self.array::<4>(arg)?);
                self.take(arg, 8)?;
                Ok(SockAddr::Inet { sin_port, sin_addr })
            }
            AF_INET6 => Ok(SockAddr::Inet6 {
                sin6_port: u16::from_be_bytes(self.array(arg)?),
                sin6_flowinfo: u32::from_be_bytes(self.array(arg)?),
                sin6_addr: Ipv6Addr::from(self.array::<16>(arg)?),
                sin6_scope_id: self.u32(arg)?,
            }),
            family => Err(DecodeError::UnsupportedFamily { arg: arg.to_string(), family }),
        }
    }

    fn cred(&mut self, arg: &str) -> Result<Cred, DecodeError> {
        Ok(Cred {
            uid: self.u32(arg)?,
            gid: self.u32(arg)?,
            suid: self.u32(arg)?,
            sgid: self.u32(arg)?,
            euid: self.u32(arg)?,
            egid: self.u32(arg)?,
            fsuid: self.u32(arg)?,
            fsgid: self.u32(arg)?,
            user_ns: self.u32(arg)?,
            securebits: self.u32(arg)?,
            cap_inheritable: self.u64(arg)?,
            cap_permitted: self.u64(arg)?,
            cap_effective: self.u64(arg)?,
            cap_bset: self.u64(arg)?,
            cap_ambient: self.u64(arg)?,
        })
    }
}

fn utf8(arg: &str, raw: &[u8]) -> Result<String, DecodeError> {
    String::from_utf8(raw.to_vec()).map_err(|_| DecodeError::InvalidUtf8 { arg: arg.to_string() })
}

// ============================================================================
// Encoding
// ============================================================================

/// Builds argument payloads in the producer's layout
///
/// Lengths that do not fit their prefix are truncated: strings and byte
/// blobs to `u32::MAX`, string and argument arrays to 255 entries.
#[derive(Debug, Default)]
pub struct ArgEncoder {
    buf: Vec<u8>,
}

impl ArgEncoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn int(&mut self, v: i32) -> &mut Self {
        self.buf.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn uint(&mut self, v: u32) -> &mut Self {
        self.buf.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn long(&mut self, v: i64) -> &mut Self {
        self.buf.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn ulong(&mut self, v: u64) -> &mut Self {
        self.buf.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn u16(&mut self, v: u16) -> &mut Self {
        self.buf.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn bytes(&mut self, v: &[u8]) -> &mut Self {
        let len = u32::try_from(v.len()).unwrap_or(u32::MAX);
        self.uint(len);
        self.buf.extend_from_slice(&v[..len as usize]);
        self
    }

    /// Length-prefixed string including its NUL terminator
    pub fn str(&mut self, v: &str) -> &mut Self {
        let mut raw = Vec::with_capacity(v.len() + 1);
        raw.extend_from_slice(v.as_bytes());
        raw.push(0);
        self.bytes(&raw)
    }

    pub fn str_arr<S: AsRef<str>>(&mut self, items: &[S]) -> &mut Self {
        let count = items.len().min(MAX_STR_ARR);
        self.buf.push(u8::try_from(count).unwrap_or(u8::MAX));
        for item in &items[..count] {
            self.str(item.as_ref());
        }
        self
    }

    pub fn args_arr(&mut self, items: &[u64]) -> &mut Self {
        let count = items.len().min(MAX_STR_ARR);
        self.buf.push(u8::try_from(count).unwrap_or(u8::MAX));
        for &item in &items[..count] {
            self.ulong(item);
        }
        self
    }

    pub fn int_arr2(&mut self, v: [i32; 2]) -> &mut Self {
        self.int(v[0]).int(v[1])
    }

    pub fn sockaddr(&mut self, addr: &SockAddr) -> &mut Self {
        self.u16(addr.family());
        match addr {
            SockAddr::Unix { sun_path } => {
                // Keep room for the terminator
                let path = sun_path.as_bytes();
                let len = path.len().min(UNIX_PATH_MAX - 1);
                let mut raw = [0u8; UNIX_PATH_MAX];
                raw[..len].copy_from_slice(&path[..len]);
                self.buf.extend_from_slice(&raw);
            }
            SockAddr::Inet { sin_port, sin_addr } => {
                self.buf.extend_from_slice(&sin_port.to_be_bytes());
                self.buf.extend_from_slice(&sin_addr.octets());
                self.buf.extend_from_slice(&[0u8; 8]);
            }
            SockAddr::Inet6 { sin6_port, sin6_flowinfo, sin6_addr, sin6_scope_id } => {
                self.buf.extend_from_slice(&sin6_port.to_be_bytes());
                self.buf.extend_from_slice(&sin6_flowinfo.to_be_bytes());
                self.buf.extend_from_slice(&sin6_addr.octets());
                self.uint(*sin6_scope_id);
            }
        }
        self
    }

    pub fn cred(&mut self, c: &Cred) -> &mut Self {
        for id in [
            c.uid, c.gid, c.suid, c.sgid, c.euid, c.egid, c.fsuid, c.fsgid, c.user_ns,
            c.securebits,
        ] {
            self.uint(id);
        }
        for cap in [c.cap_inheritable, c.cap_permitted, c.cap_effective, c.cap_bset, c.cap_ambient]
        {
            self.ulong(cap);
        }
        self
    }

    /// Append any decoded value using its own tag's layout
    pub fn value(&mut self, value: &ArgValue) -> &mut Self {
        match value {
            ArgValue::None => self,
            ArgValue::Int(v) => self.int(*v),
            ArgValue::Uint(v) | ArgValue::Mode(v) | ArgValue::Dev(v) => self.uint(*v),
            ArgValue::Long(v) | ArgValue::Off(v) => self.long(*v),
            ArgValue::Ulong(v) | ArgValue::Size(v) | ArgValue::Pointer(v) => self.ulong(*v),
            ArgValue::Str(v) => self.str(v),
            ArgValue::StrArr(v) => self.str_arr(v),
            ArgValue::SockAddr(v) => self.sockaddr(v),
            ArgValue::Bytes(v) => self.bytes(v),
            ArgValue::U16(v) => self.u16(*v),
            ArgValue::Cred(v) => self.cred(v),
            ArgValue::IntArr2(v) => self.int_arr2(*v),
            ArgValue::ArgsArr(v) => self.args_arr(v),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[must_use]
    pub fn finish(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.buf)
    }
}

/// Encode a full argument list
#[must_use]
pub fn encode_args(values: &[ArgValue]) -> Vec<u8> {
    let mut encoder = ArgEncoder::new();
    for value in values {
        encoder.value(value);
    }
    encoder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(types: &[&'static str]) -> Vec<ArgMeta> {
        const NAMES: [&str; 6] = ["a", "b", "c", "d", "e", "f"];
        types.iter().zip(NAMES).map(|(&ty, name)| ArgMeta::new(name, ty)).collect()
    }

    #[test]
    fn test_fixed_width_scalars() {
        let buf = ArgEncoder::new().int(-3).ulong(0xdead_beef).u16(0o644).finish();
        assert_eq!(buf.len(), 4 + 8 + 2);

        let values = decode_args(&schema(&["int", "void*", "umode_t"]), &buf).unwrap();
        assert_eq!(values, vec![ArgValue::Int(-3), ArgValue::Pointer(0xdead_beef), ArgValue::U16(0o644)]);
    }

    #[test]
    fn test_string_drops_terminator() {
        let buf = ArgEncoder::new().str("/etc/passwd").finish();
        assert_eq!(&buf[..4], &12u32.to_le_bytes());

        let values = decode_args(&schema(&["const char*"]), &buf).unwrap();
        assert_eq!(values, vec![ArgValue::Str("/etc/passwd".to_string())]);
    }

    #[test]
    fn test_string_array() {
        let buf = ArgEncoder::new().str_arr(&["ls", "-la"]).finish();
        let values = decode_args(&schema(&["const char*const*"]), &buf).unwrap();
        assert_eq!(values, vec![ArgValue::StrArr(vec!["ls".into(), "-la".into()])]);
    }

    #[test]
    fn test_inet_sockaddr_is_network_order() {
        let addr = SockAddr::Inet { sin_port: 443, sin_addr: Ipv4Addr::new(10, 0, 0, 1) };
        let buf = ArgEncoder::new().sockaddr(&addr).finish();
        assert_eq!(buf.len(), 16);
        assert_eq!(&buf[2..4], &[0x01, 0xbb]);
        assert_eq!(&buf[4..8], &[10, 0, 0, 1]);

        let values = decode_args(&schema(&["struct sockaddr*"]), &buf).unwrap();
        assert_eq!(values, vec![ArgValue::SockAddr(addr)]);
    }

    #[test]
    fn test_unix_sockaddr_stops_at_nul() {
        let addr = SockAddr::Unix { sun_path: "/run/docker.sock".to_string() };
        let buf = ArgEncoder::new().sockaddr(&addr).finish();
        assert_eq!(buf.len(), 2 + UNIX_PATH_MAX);

        let values = decode_args(&schema(&["struct sockaddr*"]), &buf).unwrap();
        assert_eq!(values, vec![ArgValue::SockAddr(addr)]);
    }

    #[test]
    fn test_unsupported_family() {
        let buf = ArgEncoder::new().u16(17).finish();
        let err = decode_args(&schema(&["struct sockaddr*"]), &buf).unwrap_err();
        assert!(matches!(err, DecodeError::UnsupportedFamily { family: 17, .. }));
    }

    #[test]
    fn test_cred_is_fixed_size() {
        let cred = Cred { uid: 1000, euid: 0, cap_effective: u64::MAX, ..Cred::default() };
        let buf = ArgEncoder::new().cred(&cred).finish();
        assert_eq!(buf.len(), ArgType::CRED_SIZE);

        let values = decode_args(&schema(&["slim_cred_t"]), &buf).unwrap();
        assert_eq!(values, vec![ArgValue::Cred(cred)]);
    }

    #[test]
    fn test_short_buffer_names_argument() {
        let buf = ArgEncoder::new().int(1).finish();
        let err = decode_args(&schema(&["int", "size_t"]), &buf).unwrap_err();
        match err {
            DecodeError::UnexpectedEof { arg, needed, remaining } => {
                assert_eq!(arg, "b");
                assert_eq!(needed, 8);
                assert_eq!(remaining, 0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let buf = ArgEncoder::new().int(1).int(2).finish();
        let err = decode_args(&schema(&["int"]), &buf).unwrap_err();
        assert!(matches!(err, DecodeError::TrailingBytes(4)));
    }

    #[test]
    fn test_invalid_utf8() {
        let buf = ArgEncoder::new().bytes(&[0xff, 0xfe, 0]).finish();
        let err = decode_args(&schema(&["char*"]), &buf).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidUtf8 { .. }));
    }

    #[test]
    fn test_empty_schema_accepts_empty_payload() {
        assert!(decode_args(&[], &[]).unwrap().is_empty());
    }

    #[test]
    fn test_pointer_serializes_as_hex() {
        let json = serde_json::to_string(&ArgValue::Pointer(0x7fff_0000)).unwrap();
        assert_eq!(json, "\"0x7fff0000\"");
    }
}
