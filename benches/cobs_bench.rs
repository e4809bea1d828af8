//! Criterion benchmark untuk COBS encode/decode
//!
//! Run dengan: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use cobs_frame::{decode, encode, max_encoded_len, Decoder, Encoder, FrameConfig};

const SIZES: [usize; 3] = [64, 1024, 65000];

/// Data tanpa nol: jalur forced flush
fn no_zeros(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 255) as u8 + 1).collect()
}

/// Data dengan nol setiap 8 byte: banyak run pendek
fn dense_zeros(len: usize) -> Vec<u8> {
    (0..len).map(|i| if i % 8 == 0 { 0 } else { i as u8 }).collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for &size in SIZES.iter() {
        group.throughput(Throughput::Bytes(size as u64));

        for (shape, data) in [("no_zeros", no_zeros(size)), ("dense_zeros", dense_zeros(size))] {
            let mut out = vec![0u8; max_encoded_len(size)];
            group.bench_function(format!("{}_{}", shape, size), |b| {
                b.iter(|| encode(&[], black_box(&data), &[], &mut out).unwrap());
            });
        }
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for &size in SIZES.iter() {
        group.throughput(Throughput::Bytes(size as u64));

        for (shape, data) in [("no_zeros", no_zeros(size)), ("dense_zeros", dense_zeros(size))] {
            let mut frame = vec![0u8; max_encoded_len(size)];
            let n = encode(&[], &data, &[], &mut frame).unwrap();
            frame.truncate(n);

            let mut out = vec![0u8; n];
            group.bench_function(format!("{}_{}", shape, size), |b| {
                b.iter(|| decode(black_box(&frame), &mut out).unwrap());
            });
        }
    }

    group.finish();
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    // Frame serial tipikal: header 4 byte, body 256 byte, checksum 4 byte
    let header = [0x01, 0x00, 0x10, 0x00];
    let body = dense_zeros(256);
    let checksum = [0xDE, 0xAD, 0x00, 0xEF];
    group.throughput(Throughput::Bytes((header.len() + body.len() + checksum.len()) as u64));

    group.bench_function("encode_decode_cycle", |b| {
        let mut encoder = Encoder::new(FrameConfig::default()).unwrap();
        let mut decoder = Decoder::new(FrameConfig::default()).unwrap();
        b.iter(|| {
            let frame = encoder
                .encode(black_box(&header), black_box(&body), black_box(&checksum))
                .unwrap();
            black_box(decoder.decode(frame).unwrap().len());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_codec);
criterion_main!(benches);
