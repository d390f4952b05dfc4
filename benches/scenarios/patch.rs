//! Benchmarks for complete graph patches.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use ssm2044::graph::{
    extensions::NodeExt,
    filter::{Ssm2044Node, Ssm2044Param},
    lfo::LfoNode,
    node::{GraphNode, RenderCtx},
    oscillator::OscNode,
};

use crate::BLOCK_SIZES;

pub fn bench_patch(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/patch");
    let ctx = RenderCtx::from_freq(48_000.0, 110.0);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f64; size];

        // Saw into a fixed filter
        let mut plain = OscNode::sawtooth().through(Ssm2044Node::new(800.0, 1.0));
        group.bench_with_input(BenchmarkId::new("saw_filter", size), &size, |b, _| {
            b.iter(|| plain.render_block(black_box(&mut buffer), black_box(&ctx)))
        });

        // The demo patch: slow LFO sweep on the cutoff
        let mut swept = OscNode::sawtooth().through(Ssm2044Node::new(800.0, 1.0).modulate(
            LfoNode::sine(0.25),
            Ssm2044Param::Cutoff,
            600.0,
        ));
        group.bench_with_input(BenchmarkId::new("lfo_sweep", size), &size, |b, _| {
            b.iter(|| swept.render_block(black_box(&mut buffer), black_box(&ctx)))
        });

        // Audio-rate cutoff FM
        let mut fm = OscNode::sawtooth().through(Ssm2044Node::new(1500.0, 2.0).modulate(
            OscNode::sine().with_frequency(220.0),
            Ssm2044Param::Cutoff,
            1000.0,
        ));
        group.bench_with_input(BenchmarkId::new("audio_rate_fm", size), &size, |b, _| {
            b.iter(|| fm.render_block(black_box(&mut buffer), black_box(&ctx)))
        });
    }

    group.finish();
}
