// Copyright 2026 the Cling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use cling_position::{Collisions, Containment, Frame, PixelPosition, Placement, Position};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;

const POSITIONS: [&str; 6] = [
    "center",
    "left top",
    "right-20 bottom+4",
    "50% 10%",
    "100%-1 middle",
    "top left",
];

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement/parse");
    group.throughput(Throughput::Elements(POSITIONS.len() as u64));
    group.bench_function("position", |b| {
        b.iter(|| {
            for s in POSITIONS {
                black_box(Position::parse(black_box(s)).unwrap());
            }
        });
    });
    group.finish();
}

fn frames(len: usize) -> Vec<Frame> {
    let containment = Containment::new(Rect::new(0.0, 0.0, 1_024.0, 768.0));
    (0..len)
        .map(|i| {
            let t = i as f64;
            let anchor = Rect::from_origin_size((t % 97.0, t % 53.0), (50.0 + t % 7.0, 20.0));
            let reference = Rect::from_origin_size((t * 1.5 % 1_200.0, t % 900.0), (200.0, 100.0));
            Frame::new(anchor, reference).with_containment(containment)
        })
        .collect()
}

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement/compute");
    let free = Placement::new(
        Position::parse("right top").unwrap(),
        Position::parse("left top").unwrap(),
    );
    let fitted = free.with_collision(Collisions::FIT);

    for len in [64usize, 1_024, 16_384] {
        let frames = frames(len);
        group.throughput(Throughput::Elements(len as u64));

        for (name, placement) in [("free", free), ("fit", fitted)] {
            group.bench_with_input(BenchmarkId::new(name, len), &frames, |b, frames| {
                b.iter(|| {
                    let mut prior = PixelPosition::ZERO;
                    for frame in frames {
                        prior = placement.compute(frame, prior);
                    }
                    black_box(prior);
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_compute);
criterion_main!(benches);
