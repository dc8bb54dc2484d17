use std::collections::HashMap;
use lazy_static::lazy_static;

const SERVICES: &[(u16, &str)] = &[
    (20,   "ftp-data"),
    (21,   "ftp"),
    (22,   "ssh"),
    (23,   "telnet"),
    (25,   "smtp"),
    (53,   "domain"),
    (67,   "bootps"),
    (68,   "bootpc"),
    (69,   "tftp"),
    (80,   "http"),
    (88,   "kerberos"),
    (110,  "pop3"),
    (111,  "sunrpc"),
    (123,  "ntp"),
    (137,  "netbios-ns"),
    (143,  "imap"),
    (161,  "snmp"),
    (162,  "snmptrap"),
    (179,  "bgp"),
    (389,  "ldap"),
    (443,  "https"),
    (445,  "microsoft-ds"),
    (514,  "syslog"),
    (587,  "submission"),
    (636,  "ldaps"),
    (993,  "imaps"),
    (995,  "pop3s"),
    (1194, "openvpn"),
    (1433, "ms-sql-s"),
    (1883, "mqtt"),
    (2049, "nfs"),
    (2379, "etcd-client"),
    (2380, "etcd-server"),
    (3306, "mysql"),
    (3389, "ms-wbt-server"),
    (4789, "vxlan"),
    (5432, "postgresql"),
    (5672, "amqp"),
    (6379, "redis"),
    (8080, "http-alt"),
];

lazy_static! {
    static ref BY_PORT: HashMap<u16, &'static str> = SERVICES.iter().cloned().collect();
    static ref BY_NAME: HashMap<&'static str, u16> = SERVICES.iter().map(|(p, name)| {
        (*name, *p)
    }).collect();
}

pub fn service_name(port: u16) -> Option<&'static str> {
    BY_PORT.get(&port).copied()
}

/// Case-insensitive lookup of a well-known service name.
pub fn service_port(name: &str) -> Option<u16> {
    BY_NAME.get(name.trim().to_ascii_lowercase().as_str()).copied()
}

pub fn services() -> impl Iterator<Item = (u16, &'static str)> {
    SERVICES.iter().cloned()
}

/// Display label of a port: `https (443)` when named, the bare number otherwise.
pub fn format_port(port: u16) -> String {
    match service_name(port) {
        Some(name) => format!("{} ({})", name, port),
        None       => port.to_string(),
    }
}
