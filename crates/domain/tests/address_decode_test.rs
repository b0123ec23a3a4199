use ipname_domain::decode_address;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

#[test]
fn test_decode_ipv4_literal() {
    let addr = decode_address("1.2.3.4").unwrap();
    assert_eq!(addr, IpAddr::V4(Ipv4Addr::new(1, 2, 3, 4)));
}

#[test]
fn test_decode_hyphen_escaped_ipv6() {
    let addr = decode_address("2000--1").unwrap();
    assert_eq!(addr, IpAddr::V6("2000::1".parse::<Ipv6Addr>().unwrap()));
}

#[test]
fn test_decode_full_ipv6() {
    let addr = decode_address("2001-db8-0-0-0-0-0-1").unwrap();
    assert_eq!(addr, IpAddr::V6(Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 1)));
}

#[test]
fn test_decode_uppercase_hex() {
    let addr = decode_address("FE80--ABCD").unwrap();
    assert_eq!(addr, IpAddr::V6("fe80::abcd".parse::<Ipv6Addr>().unwrap()));
}

#[test]
fn test_decode_ipv4_mapped_ipv6_stays_v6() {
    let addr = decode_address("--ffff-1.2.3.4").unwrap();
    assert!(addr.is_ipv6());
}

#[test]
fn test_decode_empty_payload_fails() {
    assert!(decode_address("").is_err());
}

#[test]
fn test_decode_rejects_garbage() {
    for payload in [
        "www",
        "1.2.3",
        "1.2.3.4.5",
        "256.1.1.1",
        "01.2.3.4",
        " 1.2.3.4",
        "1.2.3.4x",
        "2000---1",
        "fe80--1%eth0",
    ] {
        assert!(decode_address(payload).is_err(), "{:?} should not decode", payload);
    }
}
