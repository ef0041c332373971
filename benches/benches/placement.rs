// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use understory_placement::{
    Measured, PlacementRequest, SidePreference, TooltipConfig, TooltipController, TooltipInput,
    place,
};

fn bench_place(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement/place");
    let viewport = Size::new(1280.0, 800.0);
    let tooltip = Size::new(240.0, 64.0);

    // Trigger positions that resolve to each auto side, plus the fallback.
    let cases = [
        ("top", Rect::new(600.0, 400.0, 680.0, 430.0), tooltip),
        ("bottom", Rect::new(600.0, 0.0, 680.0, 30.0), tooltip),
        ("right", Rect::new(0.0, 0.0, 80.0, 790.0), Size::new(240.0, 900.0)),
        ("fallback", Rect::new(600.0, 400.0, 680.0, 430.0), Size::new(2000.0, 2000.0)),
    ];
    for (name, trigger, size) in cases {
        let request = PlacementRequest::new(trigger, size, viewport).side(SidePreference::Auto);
        group.bench_function(name, |b| b.iter(|| black_box(place(black_box(&request)))));
    }

    group.finish();
}

fn bench_hover_jitter(c: &mut Criterion) {
    let geometry = Measured {
        trigger: Rect::new(100.0, 100.0, 200.0, 130.0),
        tooltip: Size::new(160.0, 40.0),
        viewport: Size::new(1280.0, 800.0),
    };
    let config = TooltipConfig::default().side(SidePreference::Auto);

    c.bench_function("placement/hover_jitter_1k", |b| {
        b.iter_batched(
            || TooltipController::new(config, true),
            |mut tooltip| {
                for step in 0..1_000_u64 {
                    let input = if step % 3 == 0 {
                        TooltipInput::PointerLeave
                    } else {
                        TooltipInput::PointerEnter
                    };
                    black_box(tooltip.handle(input, step * 40, &geometry));
                    black_box(tooltip.tick(step * 40, &geometry));
                }
                tooltip
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_place, bench_hover_jitter);
criterion_main!(benches);
