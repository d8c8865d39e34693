use serde::Serialize;
use std::fmt;
use std::net::{Ipv4Addr, SocketAddrV4};

/// One decoded server entry.
///
/// Owns all of its data; nothing points back into the cache buffer. Two
/// records are equal when every field is equal, which is what region
/// deduplication relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ServerRecord {
    pub name:           String,
    pub ip:             Ipv4Addr,
    pub port:           u16,
    pub map:            String,
    #[serde(rename = "mod")]
    pub mod_name:       String,
    pub game_mode:      String,
    pub players_online: u8,
    pub max_players:    u8,
}

impl ServerRecord {
    pub fn address(&self) -> SocketAddrV4 {
        SocketAddrV4::new(self.ip, self.port)
    }
}

impl fmt::Display for ServerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}) playing {}({}) on {} with {}/{}",
            self.name,
            self.address(),
            self.game_mode,
            self.mod_name,
            self.map,
            self.players_online,
            self.max_players,
        )
    }
}
