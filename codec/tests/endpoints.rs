//! Integration tests for the endpoint wire format.

use bytes::{Buf, BytesMut};
use endpoint_codec::{
    DecodeExt, Encode, EncodeSize, Error, Family, IpEndpoint, Ipv4Endpoint, Ipv6Endpoint,
    ReadExt, Write,
};

const PORT: u16 = 0x1234;

fn check_v6(address: &str, bytes: [u8; 16], expanded: &str) {
    let endpoint = Ipv6Endpoint::parse(address, PORT).unwrap();
    let mut expected = bytes.to_vec();
    expected.extend_from_slice(&[0x34, 0x12]);

    let encoded = endpoint.encode();
    assert_eq!(encoded, &expected[..], "{address}");

    let decoded = Ipv6Endpoint::decode(encoded).unwrap();
    assert_eq!(decoded.family(), Family::V6);
    assert_eq!(decoded.address.to_string(), expanded);
    assert_eq!(decoded.port, PORT);
}

#[test]
fn test_port() {
    assert_eq!(PORT.encode(), &[0x34, 0x12][..]);
    assert_eq!(u16::decode(&[0x34u8, 0x12][..]).unwrap(), PORT);
}

#[test]
fn test_ipv4() {
    let endpoint = Ipv4Endpoint::parse("1.2.3.4", PORT).unwrap();
    let encoded = endpoint.encode();
    assert_eq!(encoded, &[1, 2, 3, 4, 0x34, 0x12][..]);

    let decoded = Ipv4Endpoint::decode(encoded).unwrap();
    assert_eq!(decoded.family(), Family::V4);
    assert_eq!(decoded.address.to_string(), "1.2.3.4");
    assert_eq!(decoded.port, PORT);
}

#[test]
fn test_ipv6() {
    check_v6(
        "1:2:3:4:5:6:7:8",
        [1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 0, 7, 0, 8, 0],
        "1:2:3:4:5:6:7:8",
    );
}

#[test]
fn test_ipv6_abbreviated() {
    check_v6(
        "1:2::7:8",
        [1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 7, 0, 8, 0],
        "1:2:0:0:0:0:7:8",
    );
}

#[test]
fn test_ipv6_prefix_abbreviated() {
    check_v6(
        "::5:6:7:8",
        [0, 0, 0, 0, 0, 0, 0, 0, 5, 0, 6, 0, 7, 0, 8, 0],
        "0:0:0:0:5:6:7:8",
    );
}

#[test]
fn test_ipv6_suffix_abbreviated() {
    check_v6(
        "1:2:3:4::",
        [1, 0, 2, 0, 3, 0, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        "1:2:3:4:0:0:0:0",
    );
}

#[test]
fn test_ipv6_any() {
    check_v6("::", [0; 16], "0:0:0:0:0:0:0:0");
}

#[test]
fn test_ipv6_hex_case() {
    let mut bytes = [0u8; 16];
    bytes[14] = 0xcd;
    bytes[15] = 0xab;
    check_v6("::abcd", bytes, "0:0:0:0:0:0:0:abcd");
    check_v6("::ABCD", bytes, "0:0:0:0:0:0:0:abcd");
}

#[test]
fn test_ip_v4() {
    let endpoint = IpEndpoint::new(Family::V4, "1.2.3.4", PORT).unwrap();
    let encoded = endpoint.encode();
    assert_eq!(encoded, &[4, 1, 2, 3, 4, 0x34, 0x12][..]);
    assert_eq!(IpEndpoint::decode(encoded).unwrap(), endpoint);
}

#[test]
fn test_ip_v6() {
    let endpoint = IpEndpoint::new(Family::V6, "1:2:3:4:5:6:7:8", PORT).unwrap();
    let encoded = endpoint.encode();
    assert_eq!(
        encoded,
        &[6, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 0, 7, 0, 8, 0, 0x34, 0x12][..]
    );
    let decoded = IpEndpoint::decode(encoded).unwrap();
    assert_eq!(decoded, endpoint);
    assert_eq!(decoded.address(), "1:2:3:4:5:6:7:8");
}

#[test]
fn test_ip_unknown_family() {
    let encoded = [5u8, 1, 2, 3, 4, 0x34, 0x12];
    assert_eq!(
        IpEndpoint::decode(&encoded[..]),
        Err(Error::UnknownFamily(5))
    );
}

#[test]
fn test_shared_buffer() {
    // Size once for several fields, write them in order, then read them back in order.
    let fields = [
        IpEndpoint::new(Family::V4, "192.168.1.1", 80).unwrap(),
        IpEndpoint::new(Family::V6, "fe80::1", 443).unwrap(),
        IpEndpoint::new(Family::V4, "10.0.0.1", 0).unwrap(),
    ];
    let size: usize = fields.iter().map(EncodeSize::encode_size).sum();
    assert_eq!(size, 7 + 19 + 7);

    let mut buf = BytesMut::with_capacity(size);
    for field in &fields {
        field.write(&mut buf);
    }
    assert_eq!(buf.len(), size);

    let mut reader = buf.freeze();
    for field in &fields {
        assert_eq!(&IpEndpoint::read(&mut reader).unwrap(), field);
    }
    assert_eq!(reader.remaining(), 0);
}

#[test]
fn test_short_regions() {
    // Every strict prefix of a valid encoding fails without panicking.
    let endpoint = IpEndpoint::new(Family::V6, "2001:db8::ff00:42:8329", 65535).unwrap();
    let encoded = endpoint.encode().freeze();
    for len in 0..encoded.len() {
        assert_eq!(
            IpEndpoint::decode(encoded.slice(..len)),
            Err(Error::OutOfBounds),
            "prefix of {len} bytes"
        );
    }
}
