//! Greedy selection benchmark for profiling with cargo-flamegraph.
//!
//! Runs many greedy selections on positions from different game phases.
//!
//! Usage:
//!   cargo flamegraph --example selection_bench -p greedy_player

use greedy_player::select_move;
use othello_core::{Board, Side};
use std::time::Instant;

const TEST_POSITIONS: &[(&str, Side, &str)] = &[
    (
        "Opening",
        Side::Black,
        "........ ........ ........ ...WB... ...BW... ........ ........ ........",
    ),
    (
        "Midgame",
        Side::White,
        "........ ..W..... ..WWB... .BBWBB.. ..BWWW.. ...BW... ....B... ........",
    ),
    (
        "Crowded",
        Side::Black,
        "WWWWWB.. WWWBBB.. WWBWBBB. WBWWBWB. WBBWWBB. .BBBWWB. ..BBBW.. ...B....",
    ),
    (
        "Endgame",
        Side::White,
        "BBBBBBBW BBBBBBWW BBWBBWBW BBBWBBBW BBWWWBBW BWBBBBBW BBBBBBB. BBBBBBB.",
    ),
];

const ITERATIONS: usize = 20_000;

fn main() {
    println!("=== Greedy Selection Benchmark ===");
    println!("Iterations per position: {ITERATIONS}");
    println!();

    let mut total_time = std::time::Duration::ZERO;

    for (name, side, rows) in TEST_POSITIONS {
        let diagram = rows.split_whitespace().collect::<Vec<_>>().join("\n");
        let board = match Board::from_diagram(&diagram) {
            Ok(board) => board,
            Err(err) => {
                eprintln!("{name}: {err}");
                continue;
            }
        };

        print!("{name:.<20}");

        let start = Instant::now();
        let mut chosen = None;
        for _ in 0..ITERATIONS {
            chosen = select_move(&board, *side);
        }
        let elapsed = start.elapsed();
        total_time += elapsed;

        let per_sec = if elapsed.as_secs_f64() > 0.0 {
            ITERATIONS as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };
        let mv = chosen.map_or_else(|| "pass".to_string(), |p| p.to_string());
        println!(" {mv:>4}, {per_sec:>10.0} selections/sec ({elapsed:>8.3?})");
    }

    println!();
    println!("{:=<70}", "");
    let avg = if total_time.as_secs_f64() > 0.0 {
        (ITERATIONS * TEST_POSITIONS.len()) as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_time:.3?} ({avg:.0} selections/sec)");
}
