use std::fmt;

use serde::{Deserialize, Serialize};

use super::protocol::ProtocolCode;

/// Lower bound of a rule's port range. For ICMP rules the same field holds
/// the ICMP type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FromPort {
    pub number: i32,
    pub is_icmp: bool,
}

impl FromPort {
    pub fn new(number: i32) -> Self {
        Self {
            number,
            is_icmp: false,
        }
    }

    pub fn icmp(number: i32) -> Self {
        Self {
            number,
            is_icmp: true,
        }
    }

    pub fn for_protocol(number: i32, protocol: &ProtocolCode) -> Self {
        Self {
            number,
            is_icmp: protocol.is_icmp(),
        }
    }
}

impl fmt::Display for FromPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_icmp {
            write!(f, "Type {}", self.number)
        } else {
            write!(f, "{}", self.number)
        }
    }
}

/// Upper bound of a rule's port range, or the ICMP code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToPort {
    pub number: i32,
    pub is_icmp: bool,
}

impl ToPort {
    pub fn new(number: i32) -> Self {
        Self {
            number,
            is_icmp: false,
        }
    }

    pub fn icmp(number: i32) -> Self {
        Self {
            number,
            is_icmp: true,
        }
    }

    pub fn for_protocol(number: i32, protocol: &ProtocolCode) -> Self {
        Self {
            number,
            is_icmp: protocol.is_icmp(),
        }
    }
}

impl fmt::Display for ToPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_icmp {
            write!(f, "Code {}", self.number)
        } else {
            write!(f, "{}", self.number)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icmp_labels() {
        assert_eq!(FromPort::icmp(8).to_string(), "Type 8");
        assert_eq!(ToPort::icmp(0).to_string(), "Code 0");
    }

    #[test]
    fn test_plain_ports() {
        assert_eq!(FromPort::new(443).to_string(), "443");
        assert_eq!(ToPort::new(8080).to_string(), "8080");
        assert_eq!(FromPort::new(-1).to_string(), "-1");
    }

    #[test]
    fn test_for_protocol() {
        let icmpv6 = ProtocolCode::ICMPV6;

        assert_eq!(FromPort::for_protocol(128, &icmpv6).to_string(), "Type 128");
        assert_eq!(ToPort::for_protocol(-1, &icmpv6).to_string(), "Code -1");
        assert_eq!(
            FromPort::for_protocol(22, &ProtocolCode::TCP),
            FromPort::new(22)
        );
    }
}
