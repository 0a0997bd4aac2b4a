// Copyright 2025 the Readalong Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::rc::Rc;

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use readalong_document::{Document, ElementData, ElementId};
use readalong_geometry::first_line_height;
use readalong_hover::control::ControlConfig;
use readalong_hover::engine::HoverEngine;
use readalong_hover::player::HoverPlayer;
use readalong_hover::viewport::Viewport;

const LINE: f64 = 24.0;
const GAP: f64 = 8.0;

/// A single column of `n` paragraphs, each wrapped in a span every third row.
fn gen_column(n: usize) -> (Document, Vec<ElementId>) {
    let mut doc = Document::new();
    let body = doc.insert(None, ElementData::new("body").with_font_size(16.0));
    for i in 0..n {
        let y = i as f64 * (LINE + GAP);
        let p = doc.insert(
            Some(body),
            ElementData::new("p").with_rect(Rect::new(40.0, y, 640.0, y + LINE)),
        );
        if i % 3 == 0 {
            let _ = doc.insert(
                Some(p),
                ElementData::new("span")
                    .with_text("wrapped paragraph text")
                    .with_font_size(20.0),
            );
        } else {
            doc.set_text(p, "plain paragraph text");
        }
    }
    let candidates = doc.select(&["p", "blockquote"]);
    (doc, candidates)
}

fn row_center(i: usize) -> Point {
    Point::new(320.0, i as f64 * (LINE + GAP) + LINE / 2.0)
}

fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_evaluate");
    for &n in &[100_usize, 1_000, 10_000] {
        let (doc, candidates) = gen_column(n);
        group.throughput(Throughput::Elements(n as u64));
        for (label, pt) in [
            ("first", row_center(0)),
            ("middle", row_center(n / 2)),
            ("last", row_center(n - 1)),
            ("miss", Point::new(5.0, 5.0)),
        ] {
            let mut engine = HoverEngine::new();
            group.bench_function(format!("{label}_n{n}"), |b| {
                b.iter(|| {
                    let hit = engine.evaluate(&doc, &candidates, black_box(pt)).is_some();
                    black_box(hit);
                });
            });
        }
    }
    group.finish();
}

fn bench_player_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("player_dispatch");
    for &n in &[100_usize, 1_000] {
        let (doc, candidates) = gen_column(n);
        let viewport = Rc::new(Viewport::new());
        let player = HoverPlayer::start(
            Rc::clone(&viewport),
            Rc::new(RefCell::new(doc)),
            Rc::from(candidates),
            |_: &ElementId| {},
            ControlConfig::default(),
        );
        let pts: Vec<Point> = (0..n).step_by(n / 10).map(row_center).collect();
        group.bench_function(format!("sweep_n{n}"), |b| {
            b.iter(|| {
                for &pt in &pts {
                    viewport.dispatch_pointer_move(pt);
                }
                black_box(player.props());
            });
        });
        player.stop();
    }
    group.finish();
}

fn bench_first_line(c: &mut Criterion) {
    let (doc, candidates) = gen_column(30);
    c.bench_function("first_line_height_30", |b| {
        b.iter(|| {
            let total: f64 = candidates
                .iter()
                .map(|el| first_line_height(&doc, el))
                .sum();
            black_box(total);
        });
    });
}

criterion_group!(benches, bench_engine, bench_player_dispatch, bench_first_line);
criterion_main!(benches);
