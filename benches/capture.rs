//! Benchmarks for capture overhead.
//!
//! Compares the wrappers against calling the same code directly.
//! Each benchmark pair does EQUIVALENT work.
//!
//! Run with: cargo bench

use caught::{try_async, try_async_with, try_sync};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use futures::executor::block_on;
use std::future::ready;

// ============================================================
// Test helpers
// ============================================================

#[inline(never)]
fn work(n: u64) -> u64 {
    n.wrapping_mul(31).rotate_left(7)
}

#[inline(never)]
fn fallible(n: u64) -> std::result::Result<u64, &'static str> {
    if n % 2 == 0 {
        Ok(n)
    } else {
        Err("odd")
    }
}

// ============================================================
// 1. SYNC: no panic
// ============================================================

fn bench_sync_direct(c: &mut Criterion) {
    c.bench_function("sync_direct", |b| b.iter(|| black_box(work(black_box(42)))));
}

fn bench_sync_capture(c: &mut Criterion) {
    c.bench_function("sync_capture", |b| {
        b.iter(|| black_box(try_sync(work, (black_box(42),))))
    });
}

// ============================================================
// 2. ASYNC: ready futures
// ============================================================

fn bench_async_direct(c: &mut Criterion) {
    c.bench_function("async_direct", |b| {
        b.iter(|| black_box(block_on(ready(fallible(black_box(3))))))
    });
}

fn bench_async_capture(c: &mut Criterion) {
    c.bench_function("async_capture", |b| {
        b.iter(|| black_box(block_on(try_async(ready(fallible(black_box(3)))))))
    });
}

fn bench_async_capture_callable(c: &mut Criterion) {
    c.bench_function("async_capture_callable", |b| {
        b.iter(|| {
            let fut = try_async_with(|n: u64| ready(fallible(n)), (black_box(3),));
            black_box(block_on(fut))
        })
    });
}

criterion_group!(
    benches,
    bench_sync_direct,
    bench_sync_capture,
    bench_async_direct,
    bench_async_capture,
    bench_async_capture_callable,
);
criterion_main!(benches);
