#![no_main]

use arbitrary::Arbitrary;
use bytes::Bytes;
use endpoint_codec::{
    Decode, DecodeExt, Encode, EncodeSize, Endpoint, Error, Family, IpEndpoint, Ipv4Address,
    Ipv4Endpoint, Ipv6Address, Ipv6Endpoint, ReadExt,
};
use libfuzzer_sys::fuzz_target;
use std::fmt::Debug;

fn roundtrip<T>(value: T)
where
    T: Encode + Decode<Cfg = ()> + PartialEq + Debug,
{
    let encoded = value.encode();
    assert_eq!(value.encode_size(), encoded.len());
    let decoded = T::decode(encoded).expect("Failed to decode a successfully encoded input!");
    assert_eq!(value, decoded);
}

fn roundtrip_ipv4_text(addr: Ipv4Address) {
    let text = addr.to_string();
    let parsed: Ipv4Address = text.parse().expect("Failed to parse formatted Ipv4Address!");
    assert_eq!(addr, parsed);
}

fn roundtrip_ipv6_text(addr: Ipv6Address) {
    // Formatting is fully expanded, so the text itself must also be stable.
    let text = addr.to_string();
    let parsed: Ipv6Address = text.parse().expect("Failed to parse formatted Ipv6Address!");
    assert_eq!(addr, parsed);
    assert_eq!(text, parsed.to_string());

    // The standard library abbreviates; both spellings must parse to the same groups.
    let abbreviated = std::net::Ipv6Addr::from(addr).to_string();
    if !abbreviated.contains('.') {
        let parsed: Ipv6Address = abbreviated
            .parse()
            .expect("Failed to parse abbreviated Ipv6Address!");
        assert_eq!(addr, parsed);
    }
}

fn parse_text(family: Family, text: &str) {
    // Arbitrary text must never panic; accepted text must survive the wire.
    if let Ok(endpoint) = IpEndpoint::new(family, text, 0) {
        roundtrip(endpoint);
    }
}

fn decode_bytes(data: &[u8]) {
    let mut buf = Bytes::copy_from_slice(data);
    match IpEndpoint::read(&mut buf) {
        Ok(endpoint) => {
            let consumed = data.len() - buf.len();
            assert_eq!(consumed, endpoint.encode_size());
            assert_eq!(&endpoint.encode()[..], &data[..consumed]);
        }
        Err(Error::OutOfBounds) | Err(Error::UnknownFamily(_)) => {}
        Err(err) => panic!("unexpected error: {err}"),
    }
}

#[derive(Arbitrary, Debug)]
enum FuzzInput<'a> {
    Bytes(&'a [u8]),
    Text(Family, &'a str),

    Port(u16),
    Family(Family),
    Ipv4(Ipv4Address),
    Ipv6(Ipv6Address),
    Ipv4Endpoint(Ipv4Endpoint),
    Ipv6Endpoint(Ipv6Endpoint),
    Ip(IpEndpoint),
}

fn fuzz(input: FuzzInput) {
    match input {
        FuzzInput::Bytes(data) => decode_bytes(data),
        FuzzInput::Text(family, text) => parse_text(family, text),
        FuzzInput::Port(v) => roundtrip(v),
        FuzzInput::Family(v) => roundtrip(v),
        FuzzInput::Ipv4(v) => {
            roundtrip(v);
            roundtrip_ipv4_text(v);
        }
        FuzzInput::Ipv6(v) => {
            roundtrip(v);
            roundtrip_ipv6_text(v);
        }
        FuzzInput::Ipv4Endpoint(v) => roundtrip::<Endpoint<Ipv4Address>>(v),
        FuzzInput::Ipv6Endpoint(v) => roundtrip::<Endpoint<Ipv6Address>>(v),
        FuzzInput::Ip(v) => roundtrip(v),
    };
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
