//! Benchmarks for registry load and validation.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use waymark_nav::{
    NavigationEntry, NavigationRegistry, NavigationSection, NavigationTree, RedirectRule,
    RedirectTable, check_site,
};

/// Create a tree with `sections` sections of `entries` entries each.
fn create_tree(mount: &str, sections: usize, entries: usize) -> NavigationTree {
    let sections = (0..sections)
        .map(|s| {
            let children = (0..entries)
                .map(|e| {
                    if e % 3 == 0 {
                        NavigationEntry::titled(format!("section-{s}/page-{e}"), format!("Page {e}"))
                    } else {
                        NavigationEntry::page(format!("section-{s}/page-{e}"))
                    }
                })
                .collect();
            NavigationSection::new(format!("Section {s}"), children)
        })
        .collect();
    NavigationTree::new(mount, sections)
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry_load");

    for size in [10, 50, 200] {
        let registry = NavigationRegistry::new([create_tree("/docs/", size, size)]).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &registry, |b, registry| {
            b.iter(|| registry.load("/docs/").unwrap());
        });
    }

    group.finish();
}

fn bench_check(c: &mut Criterion) {
    let registry = NavigationRegistry::new([
        create_tree("/docs/", 20, 20),
        create_tree("/tutorials/", 10, 10),
        create_tree("/guides/", 5, 40),
    ])
    .unwrap();
    let redirects = RedirectTable::new([
        RedirectRule::new("/docs/", "/docs/section-0/page-0"),
        RedirectRule::new("/tutorials/", "/tutorials/section-0/page-0"),
    ])
    .unwrap();

    c.bench_function("check_site", |b| {
        b.iter(|| check_site(&registry, &redirects, None).unwrap());
    });
}

criterion_group!(benches, bench_load, bench_check);
criterion_main!(benches);
