use std::{
    any::Any,
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use log::debug;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    error::{Error, Result},
    order::compare_any,
};

// IANA assigned protocol numbers, plus the provider's "all protocols" value.
const ALL_PROTOCOLS: i32 = -1;
const IPPROTO_ICMP: i32 = 1;
const IPPROTO_IGMP: i32 = 2;
const IPPROTO_TCP: i32 = 6;
const IPPROTO_UDP: i32 = 17;
const IPPROTO_ICMPV6: i32 = 58;

/// An IP protocol number with its canonical keyword, if the number is one
/// of the few protocols security group rules commonly name.
///
/// Equality, ordering and hashing look at the number only; the keyword is a
/// function of the number.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(into = "i32")]
pub struct ProtocolCode {
    number: i32,
    keyword: &'static str,
}

impl ProtocolCode {
    pub const ALL: Self = Self::named(ALL_PROTOCOLS, "All");
    pub const ICMP: Self = Self::named(IPPROTO_ICMP, "ICMP");
    pub const IGMP: Self = Self::named(IPPROTO_IGMP, "IGMP");
    pub const TCP: Self = Self::named(IPPROTO_TCP, "TCP");
    pub const UDP: Self = Self::named(IPPROTO_UDP, "UDP");
    pub const ICMPV6: Self = Self::named(IPPROTO_ICMPV6, "ICMPv6");

    const fn named(number: i32, keyword: &'static str) -> Self {
        Self { number, keyword }
    }

    pub fn from_number(number: i32) -> Self {
        match number {
            ALL_PROTOCOLS => Self::ALL,
            IPPROTO_ICMP => Self::ICMP,
            IPPROTO_IGMP => Self::IGMP,
            IPPROTO_TCP => Self::TCP,
            IPPROTO_UDP => Self::UDP,
            IPPROTO_ICMPV6 => Self::ICMPV6,
            _ => {
                debug!("protocol {number} has no keyword");
                Self::named(number, "")
            }
        }
    }

    /// Parses the token a provider API uses for a rule's protocol.
    ///
    /// Keywords are matched case-sensitively; anything else must be a base-10
    /// protocol number, optionally surrounded by whitespace.
    pub fn from_keyword(token: &str) -> Result<Self> {
        match token {
            "icmp" => Ok(Self::ICMP),
            "tcp" => Ok(Self::TCP),
            "udp" => Ok(Self::UDP),
            "icmpv6" => Ok(Self::ICMPV6),
            _ => {
                debug!("protocol token '{token}' is not a keyword, parsing as number");
                token
                    .trim()
                    .parse::<i32>()
                    .map(Self::from_number)
                    .map_err(|source| Error::InvalidProtocol {
                        token: token.to_string(),
                        source,
                    })
            }
        }
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    /// The canonical keyword, or `""` for protocols outside the table.
    pub fn keyword(&self) -> &'static str {
        self.keyword
    }

    pub fn is_named(&self) -> bool {
        !self.keyword.is_empty()
    }

    pub fn is_all(&self) -> bool {
        self.number == ALL_PROTOCOLS
    }

    /// ICMP and ICMPv6 rules carry a type and code instead of a port range.
    pub fn is_icmp(&self) -> bool {
        self.number == IPPROTO_ICMP || self.number == IPPROTO_ICMPV6
    }

    /// Untyped comparison. Any protocol compares greater than a missing one.
    pub fn compare_any(&self, other: Option<&dyn Any>) -> Result<Ordering> {
        compare_any(other, |that: &Self| self.cmp(that))
    }
}

impl From<i32> for ProtocolCode {
    fn from(number: i32) -> Self {
        Self::from_number(number)
    }
}

impl From<ProtocolCode> for i32 {
    fn from(protocol: ProtocolCode) -> Self {
        protocol.number
    }
}

impl FromStr for ProtocolCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_keyword(s)
    }
}

impl<'de> Deserialize<'de> for ProtocolCode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        i32::deserialize(deserializer).map(Self::from_number)
    }
}

impl PartialEq for ProtocolCode {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for ProtocolCode {}

impl PartialOrd for ProtocolCode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ProtocolCode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.number.cmp(&other.number)
    }
}

impl Hash for ProtocolCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.number.hash(state);
    }
}

impl fmt::Display for ProtocolCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.keyword.is_empty() {
            write!(f, "{}", self.number)
        } else {
            write!(f, "{} ({})", self.number, self.keyword)
        }
    }
}
