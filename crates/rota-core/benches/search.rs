use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rota_core::{search, Grid};

/// A sheet shaped like a monthly rota: header rows, then blocks of four rows
/// per day with one code per staff column.
fn rota_grid(days: usize, staff: usize) -> Grid {
    let mut rows: Vec<Vec<String>> = vec![
        vec![String::new(), "Rota".into()],
        vec![],
        vec![String::new(), "2024-01".into()],
        vec![],
        (0..staff).map(|c| if c % 4 == 0 { "Group".into() } else { String::new() }).collect(),
        (0..staff).map(|c| format!("Post {c}")).collect(),
    ];

    for day in 0..days {
        rows.push((0..staff).map(|c| format!("{:09}", day * staff + c)).collect());
        rows.push((0..staff).map(|_| "07:00".to_string()).collect());
        rows.push((0..staff).map(|_| "15:00".to_string()).collect());
        rows.push(vec![String::new(); staff]);
    }

    Grid::from(rows)
}

fn bench_search(c: &mut Criterion) {
    let grid = rota_grid(31, 40);

    c.bench_function("search_single_hit", |b| {
        b.iter(|| search(black_box(&grid), black_box("000000517")))
    });

    c.bench_function("search_many_hits", |b| {
        b.iter(|| search(black_box(&grid), black_box("07")))
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
