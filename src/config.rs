use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
};

pub const DEFAULT_PORT: u16 = 8080;

pub fn resolve_addr() -> SocketAddr {
    let ip = env::var("BIND_ADDR")
        .ok()
        .and_then(|value| value.parse::<IpAddr>().ok())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    SocketAddr::new(ip, port)
}
