use super::*;

#[test]
fn protocol_lookup() {
    assert_eq!(Some("TCP"), protocol_name(6));
    assert_eq!(None, protocol_name(250));
    assert_eq!(Some(17), protocol_number("udp"));
    assert_eq!(Some(58), protocol_number(" IPV6-ICMP "));
    assert_eq!(None, protocol_number("nope"));
    assert!(protocols().all(|(n, name)| protocol_number(name) == Some(n)));
}

#[test]
fn service_lookup() {
    assert_eq!(Some("https"), service_name(443));
    assert_eq!(None, service_name(12345));
    assert_eq!(Some(22), service_port("SSH"));
    assert_eq!(None, service_port("nope"));
    assert!(services().all(|(p, name)| service_port(name) == Some(p)));
}

#[test]
fn port_labels() {
    assert_eq!("https (443)", format_port(443));
    assert_eq!("12345", format_port(12345));
}
