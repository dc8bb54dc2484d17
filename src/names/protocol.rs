use std::collections::HashMap;
use lazy_static::lazy_static;

const PROTOCOLS: &[(u8, &str)] = &[
    (0,   "HOPOPT"),
    (1,   "ICMP"),
    (2,   "IGMP"),
    (3,   "GGP"),
    (4,   "IPv4"),
    (6,   "TCP"),
    (8,   "EGP"),
    (9,   "IGP"),
    (17,  "UDP"),
    (27,  "RDP"),
    (33,  "DCCP"),
    (41,  "IPv6"),
    (43,  "IPv6-Route"),
    (44,  "IPv6-Frag"),
    (46,  "RSVP"),
    (47,  "GRE"),
    (50,  "ESP"),
    (51,  "AH"),
    (58,  "IPv6-ICMP"),
    (59,  "IPv6-NoNxt"),
    (60,  "IPv6-Opts"),
    (88,  "EIGRP"),
    (89,  "OSPFIGP"),
    (94,  "IPIP"),
    (97,  "ETHERIP"),
    (98,  "ENCAP"),
    (103, "PIM"),
    (108, "IPComp"),
    (112, "VRRP"),
    (115, "L2TP"),
    (132, "SCTP"),
    (136, "UDPLite"),
    (137, "MPLS-in-IP"),
];

lazy_static! {
    static ref BY_NUMBER: HashMap<u8, &'static str> = PROTOCOLS.iter().cloned().collect();
    static ref BY_NAME:   HashMap<String, u8> = PROTOCOLS.iter().map(|(n, name)| {
        (name.to_ascii_lowercase(), *n)
    }).collect();
}

pub fn protocol_name(n: u8) -> Option<&'static str> {
    BY_NUMBER.get(&n).copied()
}

/// Case-insensitive lookup of an IANA protocol name.
pub fn protocol_number(name: &str) -> Option<u8> {
    BY_NAME.get(&name.trim().to_ascii_lowercase()).copied()
}

pub fn protocols() -> impl Iterator<Item = (u8, &'static str)> {
    PROTOCOLS.iter().cloned()
}
