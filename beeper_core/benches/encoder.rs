use criterion::{Criterion, black_box, criterion_group, criterion_main};

use beeper_core::link::should_report;
use beeper_core::wire::encode_tone;

pub fn bench_encoder(c: &mut Criterion) {
    let mut g = c.benchmark_group("encoder");
    // Allow quick tweaking without CLI flags (Criterion 0.5):
    //   BENCH_SAMPLE_SIZE=10 cargo bench -p beeper_core --bench encoder
    if let Ok(ss) = std::env::var("BENCH_SAMPLE_SIZE") {
        if let Ok(n) = ss.parse::<usize>() {
            g.sample_size(n.max(1));
        }
    } else {
        g.sample_size(50);
    }

    for &hz in &[1u32, 27, 440, 4096, 8192] {
        g.bench_function(format!("encode_tone_{hz}hz"), |b| {
            b.iter(|| encode_tone(black_box(hz), black_box(1000)))
        });
    }

    g.bench_function("encode_tone_sweep", |b| {
        b.iter(|| {
            let mut acc = 0u32;
            for hz in 1..=8192u32 {
                let frame = encode_tone(black_box(hz), black_box(250));
                acc = acc.wrapping_add(u32::from(frame[1]));
            }
            acc
        })
    });

    g.bench_function("should_report_window", |b| {
        b.iter(|| (0u32..64).filter(|&n| should_report(black_box(n))).count())
    });

    g.finish();
}

criterion_group!(encoder, bench_encoder);
criterion_main!(encoder);
