use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mez_scanner::Scanner;

// A medium-size mez script exercising every token class
const MEZ_SOURCE: &str = "\
~ quarterly report totals
print `opening balances`

q1_sales 1250.75
q2_sales 980
q3_sales 1430.5
q4_sales 1105.25

~ running totals
total q1_sales + q2_sales + q3_sales + q4_sales
spread q4_sales - q1_sales
scaled total * 2

print `totals ready`
print total
print spread

~ threshold checks
total < 10000
total <= 9999
scaled < total * 4
spread <= 500

print `comparisons done`

~ labels for the summary table
label_a `north region`
label_b `south region`
label_c `east region
spans two lines`

count_a 18
count_b 27
count_c 9
weighted count_a * 3 + count_b * 2 + count_c

print `weighted count`
print weighted
";

fn bench_scan_mez(c: &mut Criterion) {
    c.bench_function("scan_mez_medium", |b| {
        b.iter(|| {
            let scanner = Scanner::new(black_box(MEZ_SOURCE));
            black_box(scanner.scan_tokens());
        });
    });
}

criterion_group!(benches, bench_scan_mez);
criterion_main!(benches);
