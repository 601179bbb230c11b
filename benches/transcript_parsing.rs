use std::fmt::Write;
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use kakao_chat_viewer::parse_transcript;

/// Generate a synthetic export with N messages, mixing senders, multi-line
/// bodies, and media sentinels the way real rooms do.
fn generate_transcript(num_messages: usize) -> String {
    let mut text = String::from("Bench Room\n저장한 날짜 : 2024-01-01 00:00\n");

    for i in 0..num_messages {
        let day = (i % 28) + 1;
        let minute = i % 60;
        match i % 5 {
            0 => {
                writeln!(
                    text,
                    "2024년 1월 {}일 오전 9:{:02}, user{} : message number {}",
                    day,
                    minute,
                    i % 7,
                    i
                )
                .unwrap();
                writeln!(text, "with a second line").unwrap();
            }
            1 => {
                writeln!(text, "2024년 1월 {}일 오후 3:{:02}, user{} : ", day, minute, i % 7)
                    .unwrap();
                writeln!(text, "<사진 1장>").unwrap();
            }
            _ => {
                writeln!(
                    text,
                    "2024년 1월 {}일 오전 9:{:02}, user{} : short message {}",
                    day,
                    minute,
                    i % 7,
                    i
                )
                .unwrap();
            }
        }
    }

    text
}

fn bench_parse_transcript(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_transcript");

    for size in [100, 1_000, 10_000, 50_000].iter() {
        let text = generate_transcript(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| parse_transcript(black_box(&text)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_transcript);
criterion_main!(benches);
