//! Demo: three replicas of a key-value record exchanging writes and using
//! version vectors to decide whether an incoming write supersedes, is
//! superseded by, or conflicts with the stored one.
//!
//! Run with `RUST_LOG=vclock_kit=trace` to see the library's trace events.

use tracing_subscriber::EnvFilter;
use vclock_kit::prelude::*;

#[derive(Clone, Debug)]
struct Record {
    value: String,
    version: VersionVector<&'static str>,
}

/// Applies an incoming write to a replica's stored record.
fn receive(replica: &str, stored: &mut Vec<Record>, incoming: &Record) {
    let mut kept = Vec::new();
    let mut superseded = false;

    for record in stored.drain(..) {
        match incoming.version.compare(&record.version) {
            Occurred::After | Occurred::Identical => {}
            Occurred::Before => {
                superseded = true;
                kept.push(record);
            }
            Occurred::Concurrent => kept.push(record),
        }
    }
    if !superseded {
        kept.push(incoming.clone());
    }
    *stored = kept;

    let values: Vec<&str> = stored.iter().map(|r| r.value.as_str()).collect();
    println!("{replica}: {values:?}");
    if stored.len() > 1 {
        println!("{replica}: conflict detected, {} siblings", stored.len());
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Causal writes across three replicas ===\n");

    let mut alice: Vec<Record> = Vec::new();
    let mut bob: Vec<Record> = Vec::new();
    let mut carol: Vec<Record> = Vec::new();

    // Alice writes first and everyone receives it.
    let first = Record {
        value: "draft".to_string(),
        version: VersionVector::with_key("alice"),
    };
    println!("alice writes {:?} at {}", first.value, first.version);
    for (name, store) in [("alice", &mut alice), ("bob", &mut bob), ("carol", &mut carol)] {
        receive(name, store, &first);
    }

    // Bob edits on top of Alice's write: a causal successor.
    let edit = Record {
        value: "reviewed".to_string(),
        version: first.version.append("bob"),
    };
    println!("\nbob writes {:?} at {}", edit.value, edit.version);
    receive("alice", &mut alice, &edit);
    receive("bob", &mut bob, &edit);

    // Carol, who never saw Bob's edit, writes concurrently.
    let rival = Record {
        value: "rejected".to_string(),
        version: first.version.append("carol"),
    };
    println!("\ncarol writes {:?} at {}", rival.value, rival.version);
    println!(
        "bob's edit vs carol's write: {}",
        edit.version.compare(&rival.version)
    );
    receive("alice", &mut alice, &rival);
    receive("carol", &mut carol, &rival);

    // A stale delivery of the first write changes nothing.
    println!("\nlate delivery of alice's first write");
    receive("alice", &mut alice, &first);

    // Alice resolves the conflict: merge every sibling's version and append.
    let joined = alice
        .iter()
        .fold(VersionVector::new(), |acc, r| acc.merge(&r.version));
    let resolution = Record {
        value: "reviewed (carol objected)".to_string(),
        version: joined.append("alice"),
    };
    println!("\nalice resolves with {:?} at {}", resolution.value, resolution.version);
    for (name, store) in [("alice", &mut alice), ("bob", &mut bob), ("carol", &mut carol)] {
        receive(name, store, &resolution);
    }

    match alice[0].version.try_append(None) {
        Ok(_) => println!("\nunexpected append without a replica id"),
        Err(err) => println!("\nappend without a replica id: {err}"),
    }
}
