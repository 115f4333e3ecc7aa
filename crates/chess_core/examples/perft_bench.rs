//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p chess_core -- [depth] [fen] [--divide]
//!
//! Examples:
//!   # Default: depth 4 over the whole suite
//!   cargo run --release --example perft_bench -p chess_core
//!
//!   # Custom depth and position, with per-move counts
//!   cargo run --release --example perft_bench -p chess_core -- 3 "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1" --divide

use std::env;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chess_core::{Position, divide, perft};

/// Standard test positions for comprehensive profiling
const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Starting position",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ),
    (
        "Kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    ),
    ("Position 3", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1"),
    (
        "Position 4",
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
    ),
    (
        "Position 5",
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
    ),
    (
        "Position 6",
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
    ),
];

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let show_divide = args.iter().any(|a| a == "--divide");
    let positional: Vec<&String> = args.iter().filter(|a| !a.starts_with("--")).collect();

    let depth: u8 = match positional.first() {
        Some(d) => d.parse().with_context(|| format!("invalid depth '{d}'"))?,
        None => 4,
    };

    // If FEN provided, use single position mode
    if let Some(fen) = positional.get(1) {
        run_single_position(fen, depth, show_divide)
    } else {
        run_all_positions(depth)
    }
}

fn nps(nodes: u64, elapsed: Duration) -> f64 {
    if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    }
}

fn run_single_position(fen: &str, depth: u8, show_divide: bool) -> Result<()> {
    let mut pos = Position::from_fen(fen).context("benchmark position")?;

    println!("{pos}");
    println!("Depth: {depth}");
    println!();

    if show_divide {
        let mut total = 0;
        for (mv, nodes) in divide(&mut pos, depth) {
            println!("{mv}: {nodes}");
            total += nodes;
        }
        println!();
        println!("Nodes searched: {total}");
        return Ok(());
    }

    let start = Instant::now();
    let nodes = perft(&mut pos, depth);
    let elapsed = start.elapsed();

    println!("Nodes: {nodes}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {:.0}", nps(nodes, elapsed));
    Ok(())
}

fn run_all_positions(depth: u8) -> Result<()> {
    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = Duration::ZERO;

    for (name, fen) in TEST_POSITIONS {
        let mut pos = Position::from_fen(fen).with_context(|| format!("suite position {name}"))?;

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&mut pos, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        println!(
            " {nodes:>12} nodes in {elapsed:>8.3?} ({:>10.0} nps)",
            nps(nodes, elapsed)
        );
    }

    println!();
    println!("{:=<70}", "");
    println!(
        "TOTAL: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
        nps(total_nodes, total_time)
    );
    Ok(())
}
