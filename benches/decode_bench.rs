use criterion::{black_box, criterion_group, criterion_main, Criterion};
use servercache::layout::{Region, FILE_SIZE, SLOT_SIZE};
use servercache::slot::{RawSlot, SENTINEL_SLOT};
use servercache::{ServerCache, SlotBuilder};
use std::net::Ipv4Addr;

fn populated_cache(used: usize) -> ServerCache {
    let mut data = vec![0u8; FILE_SIZE];
    for region in Region::ALL {
        for i in 0..region.slot_count() {
            let at = region.offset() + i * SLOT_SIZE;
            let slot = if i < used {
                SlotBuilder::new()
                    .name(&format!("server {i}"))
                    .address(Ipv4Addr::new(10, (i >> 8) as u8, i as u8, 1), 28960)
                    .map("mp_crossfire")
                    .game_mode("war")
                    .players((i % 32) as u8, 32)
                    .build()
            } else {
                SENTINEL_SLOT
            };
            data[at..at + SLOT_SIZE].copy_from_slice(&slot);
        }
    }
    ServerCache::from_bytes(data).unwrap()
}

fn bench_decode_slot(c: &mut Criterion) {
    let raw = SlotBuilder::new().name("bench").map("mp_bog").build();
    let slot = RawSlot::new(&raw, 0).unwrap();

    c.bench_function("decode_slot", |b| b.iter(|| black_box(slot).decode()));
    c.bench_function("sentinel_check", |b| b.iter(|| black_box(slot).is_sentinel()));
}

fn bench_enumerate(c: &mut Criterion) {
    let sparse = populated_cache(500);
    let full = populated_cache(usize::MAX);

    c.bench_function("servers_sparse_500", |b| b.iter(|| black_box(&sparse).servers().count()));
    c.bench_function("servers_full", |b| b.iter(|| black_box(&full).servers().count()));
    c.bench_function("report_full", |b| b.iter(|| black_box(&full).report(Region::General)));
}

criterion_group!(benches, bench_decode_slot, bench_enumerate);
criterion_main!(benches);
