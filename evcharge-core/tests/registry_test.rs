//! Integration tests for the station registry.
//!
//! Tests:
//! 1. Aggregation over mixed plain and enhanced stations
//! 2. Filtering keeps insertion order
//! 3. Independent registries do not share state
//! 4. Concurrent inserts are all observed

use std::sync::Arc;
use std::thread;

use evcharge_core::components::{create_station, ChargingStation, RenewableEnergyEnhancement};
use evcharge_core::domain::{StationId, TimeSlot};
use evcharge_core::registry::StationRegistry;

fn station(kind: &str, id: u32, capacity_kw: u32) -> Arc<dyn ChargingStation> {
    let slots = vec![TimeSlot::new(9, 17).unwrap()];
    Arc::new(create_station(kind, id, capacity_kw, slots).unwrap())
}

#[test]
fn mixed_registry_aggregates() {
    let reg = StationRegistry::new();
    let fast = station("Fast", 101, 250);
    reg.add(Arc::clone(&fast));
    reg.add(station("Slow", 102, 150));
    reg.add(Arc::new(RenewableEnergyEnhancement::new(fast)));

    assert_eq!(reg.len(), 3);
    assert_eq!(reg.total_capacity(), 650);

    let effs: Vec<i64> = reg
        .stations()
        .iter()
        .map(|s| s.efficiency(5.0).unwrap())
        .collect();
    assert_eq!(effs, vec![2, 1, 52]);
}

#[test]
fn filter_preserves_insertion_order() {
    let reg = StationRegistry::new();
    for (id, cap) in [(5, 500), (1, 100), (4, 400), (2, 200), (3, 300)] {
        reg.add(station("Fast", id, cap));
    }
    let ids: Vec<StationId> = reg
        .filter_by_capacity(250)
        .iter()
        .map(|s| s.id())
        .collect();
    assert_eq!(ids, vec![StationId(5), StationId(4), StationId(3)]);
}

#[test]
fn filter_boundary_is_inclusive() {
    let reg = StationRegistry::new();
    reg.add(station("Fast", 1, 200));
    reg.add(station("Fast", 2, 199));
    assert_eq!(reg.filter_by_capacity(200).len(), 1);
}

#[test]
fn independent_registries() {
    let a = StationRegistry::new();
    let b = StationRegistry::new();
    a.add(station("Fast", 1, 100));
    assert_eq!(a.len(), 1);
    assert!(b.is_empty());
    assert_eq!(b.total_capacity(), 0);
}

#[test]
fn concurrent_adds_are_all_visible() {
    let reg = Arc::new(StationRegistry::new());
    let handles: Vec<_> = (0..8u32)
        .map(|t| {
            let reg = Arc::clone(&reg);
            thread::spawn(move || {
                for i in 0..25u32 {
                    reg.add(station("Slow", t * 100 + i, 10));
                    // Reads interleave with writes and never see a torn entry.
                    assert_eq!(reg.total_capacity() % 10, 0);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(reg.len(), 200);
    assert_eq!(reg.total_capacity(), 2000);
}

#[test]
fn write_all_lists_every_station() {
    let reg = StationRegistry::new();
    let fast = station("Fast", 101, 250);
    reg.add(Arc::clone(&fast));
    reg.add(Arc::new(RenewableEnergyEnhancement::new(fast)));

    let mut out = Vec::new();
    reg.write_all(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(format!("{} + Renewable Energy", lines[0]), lines[1]);
}
