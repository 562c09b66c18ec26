use netwalk_common::network::target::Target;
use netwalk_core::{AddressStream, Termination};
use pnet::ipnetwork::{IpNetwork, Ipv4Network, Ipv6Network};
use std::net::{Ipv4Addr, Ipv6Addr};

async fn drain_v4(mut stream: AddressStream<Ipv4Addr>) -> Vec<Ipv4Addr> {
    let mut out = Vec::new();
    while let Some(addr) = stream.next().await {
        out.push(addr);
    }
    assert_eq!(stream.shutdown().await, Some(Termination::Exhausted));
    out
}

fn parse_v4(s: &str) -> netwalk_common::network::cidr::Cidr<Ipv4Addr> {
    match s.parse::<Target>() {
        Ok(Target::V4(cidr)) => cidr,
        other => panic!("expected IPv4 block for {s}, got {other:?}"),
    }
}

/// `ipnetwork` walks the same blocks independently; both must agree on
/// every address.
#[tokio::test]
async fn matches_ipnetwork_iteration() {
    for block in [
        "192.168.1.2/24",
        "10.0.0.5/32",
        "172.16.5.10/22",
        "100.64.0.77/31",
        "255.255.255.0/24",
        "0.0.0.0/28",
    ] {
        let cidr = parse_v4(block);
        let oracle: Ipv4Network = block.parse().unwrap();

        let stream = netwalk_core::enumerate(cidr.base(), cidr.prefix()).unwrap();
        let walked = drain_v4(stream).await;
        let expected: Vec<Ipv4Addr> = oracle.iter().collect();

        assert_eq!(walked, expected, "{block}");
        assert_eq!(walked.first(), Some(&oracle.network()), "{block}");
        assert_eq!(walked.last(), Some(&oracle.broadcast()), "{block}");
        assert_eq!(walked.len() as u128, cidr.size().unwrap(), "{block}");
    }
}

#[tokio::test]
async fn ipv6_block_matches_ipnetwork() {
    let block = "2001:db8::abcd/120";
    let oracle: Ipv6Network = block.parse().unwrap();
    let Ok(Target::V6(cidr)) = block.parse::<Target>() else {
        panic!("expected IPv6 block");
    };

    let mut stream = netwalk_core::enumerate_block(cidr).unwrap();
    let mut walked: Vec<Ipv6Addr> = Vec::new();
    while let Some(addr) = stream.next().await {
        walked.push(addr);
    }

    assert_eq!(walked.len(), 256);
    assert_eq!(walked[0], oracle.network());
    assert_eq!(walked[255], oracle.broadcast());
    let expected: Vec<Ipv6Addr> = oracle.iter().collect();
    assert_eq!(walked, expected);
}

#[tokio::test]
async fn networks_from_pnet_can_be_walked() {
    let net = IpNetwork::V4(Ipv4Network::new(Ipv4Addr::new(10, 20, 30, 40), 29).unwrap());
    let Target::V4(cidr) = Target::try_from(net).unwrap() else {
        panic!("expected IPv4 block");
    };

    let walked = drain_v4(netwalk_core::enumerate_block(cidr).unwrap()).await;
    assert_eq!(walked.len(), 8);
    assert_eq!(walked[0], Ipv4Addr::new(10, 20, 30, 40));
    assert_eq!(walked[7], Ipv4Addr::new(10, 20, 30, 47));
}
