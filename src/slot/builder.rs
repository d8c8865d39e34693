//! Compose slot images from field values.
//!
//! Used to build fixtures for tests and benchmarks. The crate never writes
//! cache files back to disk.

use byteorder::{ByteOrder, LittleEndian};
use std::net::Ipv4Addr;

use crate::layout::*;
use crate::record::ServerRecord;

#[derive(Debug, Clone)]
pub struct SlotBuilder {
    record: ServerRecord,
    ping:   u16,
}

impl Default for SlotBuilder {
    fn default() -> Self {
        Self {
            record: ServerRecord {
                name:           String::new(),
                ip:             Ipv4Addr::UNSPECIFIED,
                port:           0,
                map:            String::new(),
                mod_name:       String::new(),
                game_mode:      String::new(),
                players_online: 0,
                max_players:    0,
            },
            ping: 0,
        }
    }
}

impl SlotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_record(record: &ServerRecord) -> Self {
        Self { record: record.clone(), ping: 0 }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.record.name = name.to_owned();
        self
    }

    pub fn address(mut self, ip: Ipv4Addr, port: u16) -> Self {
        self.record.ip = ip;
        self.record.port = port;
        self
    }

    pub fn map(mut self, map: &str) -> Self {
        self.record.map = map.to_owned();
        self
    }

    pub fn mod_name(mut self, mod_name: &str) -> Self {
        self.record.mod_name = mod_name.to_owned();
        self
    }

    pub fn game_mode(mut self, game_mode: &str) -> Self {
        self.record.game_mode = game_mode.to_owned();
        self
    }

    pub fn players(mut self, online: u8, max: u8) -> Self {
        self.record.players_online = online;
        self.record.max_players = max;
        self
    }

    pub fn ping(mut self, ping: u16) -> Self {
        self.ping = ping;
        self
    }

    pub fn build(&self) -> [u8; SLOT_SIZE] {
        let r = &self.record;
        let mut slot = [0u8; SLOT_SIZE];
        slot[IP_OFFSET..IP_OFFSET + 4].copy_from_slice(&r.ip.octets());
        LittleEndian::write_u16(&mut slot[PORT_OFFSET..PORT_OFFSET + 2], r.port);
        slot[PLAYERS_ONLINE_OFFSET] = r.players_online;
        slot[MAX_PLAYERS_OFFSET] = r.max_players;
        slot[QUERIED_FLAG_OFFSET] = 0x01;
        LittleEndian::write_u16(&mut slot[PING_OFFSET..PING_OFFSET + 2], self.ping);
        write_latin1(&mut slot[NAME_OFFSET..NAME_OFFSET + NAME_LEN], &r.name);
        write_latin1(&mut slot[MAP_OFFSET..MAP_OFFSET + MAP_LEN], &r.map);
        write_latin1(&mut slot[MOD_OFFSET..MOD_OFFSET + MOD_LEN], &r.mod_name);
        write_latin1(&mut slot[GAME_MODE_OFFSET..GAME_MODE_OFFSET + GAME_MODE_LEN], &r.game_mode);
        slot
    }
}

/// Copy `text` into `field`, truncating to the field length. Characters
/// outside Latin-1 become `?`; the remainder of the field stays zero.
fn write_latin1(field: &mut [u8], text: &str) {
    for (dst, c) in field.iter_mut().zip(text.chars()) {
        *dst = u8::try_from(c).unwrap_or(b'?');
    }
}
