use criterion::{Criterion, criterion_group, criterion_main};
use fqview::{FastqReader, RenderOptions, Renderer};
use std::io::{BufReader, sink};

fn bench_render(c: &mut Criterion) {
    let mut data = String::new();
    for i in 0..2000 {
        data.push_str(&format!(
            "@M00123:14:000-ABCDE:1:1101:{i}:1331 1:N:0:1\nACGTACGTACGTACGTNNACGT\n+\n#+5?IIIIIIIIIIIIIII!!I\n"
        ));
    }
    let data: &'static str = Box::leak(data.into_boxed_str());

    c.bench_function("render_2000_records", |b| {
        b.iter(|| {
            let fq = FastqReader::from_bufread(BufReader::new(data.as_bytes()), None);
            let mut r = Renderer::new(sink(), RenderOptions::default());
            r.run("bench", fq).unwrap()
        })
    });

    c.bench_function("render_2000_records_wrapped", |b| {
        b.iter(|| {
            let fq = FastqReader::from_bufread(BufReader::new(data.as_bytes()), None);
            let opts = RenderOptions {
                wrap: 8,
                raw_quality: true,
                ..RenderOptions::default()
            };
            let mut r = Renderer::new(sink(), opts);
            r.run("bench", fq).unwrap()
        })
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
