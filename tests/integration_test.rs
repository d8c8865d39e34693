use servercache::layout::{Region, FAVORITE_COUNT_OFFSET, FILE_SIZE, GENERAL_OFFSET, SLOT_SIZE};
use servercache::slot::SENTINEL_SLOT;
use servercache::{CacheError, DecodeOptions, ServerCache, SlotBuilder};
use std::io::Write;
use std::net::Ipv4Addr;
use tempfile::NamedTempFile;

fn put(data: &mut [u8], region: Region, index: usize, slot: &[u8; SLOT_SIZE]) {
    let at = region.offset() + index * SLOT_SIZE;
    data[at..at + SLOT_SIZE].copy_from_slice(slot);
}

fn write_cache(data: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(data).unwrap();
    file.flush().unwrap();
    file
}

/// Zeroed file with the first general slot a sentinel and the second a
/// real server.
fn example_file() -> Vec<u8> {
    let mut data = vec![0u8; FILE_SIZE];
    put(&mut data, Region::General, 0, &SENTINEL_SLOT);
    let mut slot = [0u8; SLOT_SIZE];
    slot[0x04..0x08].copy_from_slice(&[192, 168, 1, 10]);
    slot[0x08] = 0x20;
    slot[0x09] = 0x71;
    slot[0x31..0x31 + 7].copy_from_slice(b"Server1");
    put(&mut data, Region::General, 1, &slot);
    data
}

#[test]
fn test_open_example_file() {
    // Every other slot is all zeros, so make them sentinels to isolate slot 1.
    let mut data = example_file();
    for i in 2..Region::General.slot_count() {
        put(&mut data, Region::General, i, &SENTINEL_SLOT);
    }
    let file = write_cache(&data);

    let cache = ServerCache::open(file.path()).unwrap();
    assert_eq!(cache.path(), Some(file.path()));

    let servers: Vec<_> = cache.servers().collect();
    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].name, "Server1");
    assert_eq!(servers[0].address().to_string(), "192.168.1.10:28960");
}

#[test]
fn test_zeroed_slots_collapse_into_one_record() {
    // Zeroed slots are not sentinels; they decode to one empty record that
    // deduplication folds together.
    let file = write_cache(&example_file());
    let cache = ServerCache::open(file.path()).unwrap();

    let servers: Vec<_> = cache.servers().collect();
    assert_eq!(servers.len(), 2);
    assert_eq!(servers[0].name, "Server1");
    assert_eq!(servers[1].name, "");
    assert_eq!(servers[1].address().to_string(), "0.0.0.0:0");
}

#[test]
fn test_missing_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("servercache.dat");
    match ServerCache::open(&path) {
        Err(CacheError::PathNotFound(p)) => assert_eq!(p, path),
        other => panic!("expected PathNotFound, got {other:?}"),
    }
}

#[test]
fn test_off_by_one_sizes_rejected() {
    for len in [FILE_SIZE - 1, FILE_SIZE + 1] {
        let file = write_cache(&vec![0u8; len]);
        match ServerCache::open(file.path()) {
            Err(CacheError::InvalidSize { expected, found }) => {
                assert_eq!(expected, FILE_SIZE);
                assert_eq!(found, len);
            }
            other => panic!("expected InvalidSize, got {other:?}"),
        }
    }
}

#[test]
fn test_decoding_is_idempotent() {
    let mut data = vec![0u8; FILE_SIZE];
    for i in 0..50 {
        let slot = if i % 3 == 0 {
            SENTINEL_SLOT
        } else {
            SlotBuilder::new()
                .name(&format!("srv{i}"))
                .address(Ipv4Addr::new(10, 1, 0, i as u8), 28960 + i as u16)
                .players(i as u8, 32)
                .build()
        };
        put(&mut data, Region::General, i, &slot);
    }
    let cache = ServerCache::from_bytes(data).unwrap();

    let first: Vec<_> = cache.servers().collect();
    let second: Vec<_> = cache.servers().collect();
    assert_eq!(first, second);
}

#[test]
fn test_favorites_with_small_stored_count() {
    let mut data = vec![0u8; FILE_SIZE];
    for i in 0..Region::Favorites.slot_count() {
        put(&mut data, Region::Favorites, i, &SENTINEL_SLOT);
    }
    for i in 0..3 {
        let slot = SlotBuilder::new()
            .name(&format!("fav{i}"))
            .address(Ipv4Addr::new(172, 16, 0, i as u8), 28961)
            .map("mp_strike")
            .mod_name("mods/promod")
            .game_mode("sd")
            .players(10, 10)
            .build();
        put(&mut data, Region::Favorites, i, &slot);
    }
    data[FAVORITE_COUNT_OFFSET] = 1;
    let file = write_cache(&data);

    let all = ServerCache::open(file.path()).unwrap();
    assert_eq!(all.header().favorite_count(), 1);
    assert_eq!(all.favorite_servers().count(), 3);

    let options = DecodeOptions { honor_favorite_count: true, ..DecodeOptions::default() };
    let bounded = ServerCache::open_with(file.path(), options).unwrap();
    let favorites: Vec<_> = bounded.favorite_servers().collect();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].mod_name, "mods/promod");
    assert_eq!(
        favorites[0].to_string(),
        "fav0(172.16.0.0:28961) playing sd(mods/promod) on mp_strike with 10/10"
    );
}

#[test]
fn test_header_passthrough() {
    let mut data = example_file();
    data[..GENERAL_OFFSET].copy_from_slice(&[0xA5; 16]);
    let cache = ServerCache::from_bytes(data).unwrap();
    assert_eq!(cache.header().as_bytes(), &[0xA5; 16]);
    assert_eq!(cache.header().to_hex(), "A5".repeat(16));
}
