use std::fmt;
use std::net::IpAddr;
use super::{field, Record};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Addr {
    pub addr: Option<IpAddr>,
    pub port: u16,
}

/// Direction independent 5-tuple: protocol and both endpoints, lower
/// endpoint first.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Key(pub Option<u8>, pub Addr, pub Addr);

impl Key {
    pub fn new(proto: Option<u8>, a: Addr, b: Addr) -> Self {
        if a <= b {
            Key(proto, a, b)
        } else {
            Key(proto, b, a)
        }
    }
}

impl Record {
    pub fn flow_key(&self) -> Key {
        let addr = |addr: &str, port: &str| Addr {
            addr: self.text(addr).and_then(|a| a.parse().ok()),
            port: self.number(port).map(|p| p as u16).unwrap_or(0),
        };

        let proto = self.number(field::PROTO).map(|p| p as u8);
        let src   = addr(field::SRC_ADDR, field::SRC_PORT);
        let dst   = addr(field::DST_ADDR, field::DST_PORT);

        Key::new(proto, src, dst)
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.addr {
            Some(addr) => write!(f, "{}:{}", addr, self.port),
            None       => write!(f, "?:{}", self.port),
        }
    }
}
