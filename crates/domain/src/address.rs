use std::net::IpAddr;
use thiserror::Error;

/// Payload could not be read as an IP literal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("not an IP address literal: {literal:?}")]
pub struct AddressDecodeError {
    pub literal: String,
}

/// Decodes a payload into an IP address.
///
/// Colons are not legal in DNS labels, so IPv6 literals arrive with every
/// `:` written as `-` (`2000--1` is `2000::1`). The result is parsed with the
/// strict `IpAddr` grammar: no leading zeros in IPv4 octets, no zone ids,
/// no surrounding garbage.
pub fn decode_address(payload: &str) -> Result<IpAddr, AddressDecodeError> {
    let literal = if payload.contains('-') {
        payload.replace('-', ":")
    } else {
        payload.to_string()
    };

    match literal.parse::<IpAddr>() {
        Ok(addr) => Ok(addr),
        Err(_) => Err(AddressDecodeError { literal }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn test_decode_ipv4() {
        assert_eq!(
            decode_address("192.0.2.7"),
            Ok(IpAddr::V4(Ipv4Addr::new(192, 0, 2, 7)))
        );
    }

    #[test]
    fn test_decode_hyphenated_ipv6() {
        let expected: Ipv6Addr = "2000::1".parse().unwrap();
        assert_eq!(decode_address("2000--1"), Ok(IpAddr::V6(expected)));
    }

    #[test]
    fn test_decode_error_keeps_rewritten_literal() {
        let err = decode_address("not-an-ip").unwrap_err();
        assert_eq!(err.literal, "not:an:ip");
    }
}
