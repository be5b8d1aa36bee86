// SPDX-License-Identifier: LGPL-3.0-or-later

//! Criterion benchmarks for the resample cursor and render drivers.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sampleshift_dsp::sampling::{render_block, resample_to_rate};
use sampleshift_dsp::{ResampleCursor, SampleBuffer};

const BUF_FRAMES: usize = 48000;
const BLOCK_SIZE: usize = 1024;

/// Generate a deterministic white noise buffer using a simple LCG.
fn white_noise(frames: usize, channels: usize, sample_rate: u32) -> SampleBuffer {
    let mut state: u64 = 0xDEAD_BEEF_CAFE_BABE;
    let data: Vec<f32> = (0..frames * channels)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            ((state >> 33) as i32) as f32 / (i32::MAX as f32)
        })
        .collect();
    SampleBuffer::from_interleaved(&data, channels, sample_rate).unwrap()
}

fn bench_render_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_block");
    let source = white_noise(BUF_FRAMES, 1, 48000);

    for &(name, speed, loop_end) in &[
        ("one_shot", 1.0f32, 0usize),
        ("fractional_rate", 0.97f32, 0usize),
        ("looped", 1.0f32, 4096usize),
    ] {
        let mut dst = vec![0.0f32; BLOCK_SIZE];

        group.bench_function(name, |b| {
            let mut cursor = ResampleCursor::new(&source, 0, speed, 0, loop_end).unwrap();
            cursor.set_pitch(35.0);

            b.iter(|| {
                render_block(black_box(&mut cursor), black_box(&mut dst));
            });
        });
    }

    group.finish();
}

fn bench_resample_to_rate(c: &mut Criterion) {
    let mut group = c.benchmark_group("resample_to_rate");

    for &(name, channels) in &[("mono", 1usize), ("stereo", 2usize)] {
        let source = white_noise(BUF_FRAMES, channels, 48000);

        group.bench_function(name, |b| {
            b.iter(|| resample_to_rate(black_box(&source), black_box(44100)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render_block, bench_resample_to_rate);
criterion_main!(benches);
