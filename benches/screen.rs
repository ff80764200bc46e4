//! Benchmarks for the byte-feed hot path.
//!
//! Models realistic terminal workloads: plain program output scrolling
//! through the screen, and escape-heavy streams the way curses programs
//! repaint (cursor addressing plus SGR changes on every field). Sizes
//! match real usage:
//!
//! - **80x24**: classic terminal (ssh, tmux panes).
//! - **240x80**: full-screen 4K terminal.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use vt102_core::Term;

/// Terminal sizes that represent real usage.
const SIZES: [(usize, usize); 2] = [
    (24, 80),  // Classic VT102.
    (80, 240), // Full-screen 4K.
];

/// Plain output: full lines of cycling ASCII, CRLF-terminated, enough of
/// them that the screen scrolls continuously.
fn ascii_stream(lines: usize, cols: usize) -> Vec<u8> {
    let mut stream = Vec::new();
    for line in 0..lines * 4 {
        for col in 0..cols {
            stream.push(b'a' + ((line + col) % 26) as u8);
        }
        stream.extend_from_slice(b"\r\n");
    }
    stream
}

/// Escape-heavy output: a curses-style repaint addressing every fourth
/// field with CUP and recoloring it with SGR.
fn csi_stream(lines: usize, cols: usize) -> Vec<u8> {
    let mut stream = Vec::new();
    for line in 0..lines {
        for col in (0..cols.saturating_sub(8)).step_by(8) {
            stream.extend_from_slice(
                format!(
                    "\x1b[{};{}H\x1b[3{};4{}mfield{:02}",
                    line + 1,
                    col + 1,
                    (col / 8) % 8,
                    line % 8,
                    col % 100
                )
                .as_bytes(),
            );
        }
    }
    stream.extend_from_slice(b"\x1b[0m");
    stream
}

fn bench_feed_ascii(c: &mut Criterion) {
    let mut group = c.benchmark_group("feed_ascii");
    for (lines, cols) in SIZES {
        let stream = ascii_stream(lines, cols);
        group.throughput(criterion::Throughput::Bytes(stream.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{cols}x{lines}")),
            &stream,
            |b, stream| {
                let mut term = Term::new(lines, cols).unwrap();
                b.iter(|| {
                    term.feed(black_box(stream));
                });
            },
        );
    }
    group.finish();
}

fn bench_feed_csi(c: &mut Criterion) {
    let mut group = c.benchmark_group("feed_csi");
    for (lines, cols) in SIZES {
        let stream = csi_stream(lines, cols);
        group.throughput(criterion::Throughput::Bytes(stream.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{cols}x{lines}")),
            &stream,
            |b, stream| {
                let mut term = Term::new(lines, cols).unwrap();
                b.iter(|| {
                    term.feed(black_box(stream));
                });
            },
        );
    }
    group.finish();
}

fn bench_scroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll");
    for (lines, cols) in SIZES {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{cols}x{lines}")),
            &(lines, cols),
            |b, &(lines, cols)| {
                let mut term = Term::new(lines, cols).unwrap();
                term.feed(format!("\x1b[{};1H", lines).as_bytes());
                b.iter(|| {
                    for _ in 0..lines {
                        term.feed(black_box(b"\n"));
                    }
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_feed_ascii, bench_feed_csi, bench_scroll);
criterion_main!(benches);
