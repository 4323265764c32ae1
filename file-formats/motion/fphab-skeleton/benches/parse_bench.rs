use criterion::{Criterion, criterion_group, criterion_main};
use std::io::Cursor;

use fphab_skeleton::parser::{self, VALUES_PER_LINE};

fn create_test_recording(frames: usize) -> String {
    let mut out = String::new();
    for f in 0..frames {
        out.push_str(&f.to_string());
        for v in 0..VALUES_PER_LINE {
            out.push_str(&format!(" {:.3}", (f * 7 + v) as f64 * 0.25));
        }
        out.push('\n');
    }
    out
}

fn bench_parse_recording(c: &mut Criterion) {
    let recording = create_test_recording(500);

    c.bench_function("parse_recording_500_frames", |b| {
        b.iter(|| {
            let sequence = parser::parse_reader(Cursor::new(recording.as_bytes())).unwrap();
            assert_eq!(sequence.len(), 500);
        })
    });
}

criterion_group!(benches, bench_parse_recording);
criterion_main!(benches);
