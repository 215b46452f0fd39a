//! Performance benchmarks for blockmark
//!
//! Run with: cargo bench

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use blockmark::{Capabilities, LineTransformer, Options};

/// Sample Markdown documents of various sizes
mod samples {
    pub const TINY: &str = "Hello, **world**!";

    pub const SMALL: &str = r#"# Heading

A paragraph with *emphasis* and **strong** text.

> quoted
>> and nested

|table>
a|b
|<table
"#;

    pub const MEDIUM: &str = r#"# Project Notes

A sample document that exercises every block kind.

## Checklist

- [x] Nested quotes
- [ ] Sectioned tables
- [ ] Lists

### Code Example

```rust
fn main() {
    println!("Hello, world!");
}
```

> Quoted text with *emphasis*.
>> A nested reply.
> Back at the outer level.

|table>
Name|Value
---|---
alpha|**1**
beta|`2`
-|-|-
total|3
|<table

1. First
2. Second
  - nested item
3. Third

---

Thank you for reading!
"#;

    /// Generate a large document by repeating a section
    pub fn large() -> String {
        let section = r#"
## Section Title

This paragraph contains various inline elements like *emphasis*, **strong**,
`code`, ~~struck~~ and [links](https://example.com).

- First bullet point with **bold** text
  - Nested bullet with *italic* text
- Third point with `code`

> A blockquote that spans
> multiple lines.
>> With a nested level.

|table>
H1|H2|H3
- | - | -
a|b|c
d|e|f
|<table

"#;
        section.repeat(50)
    }

    /// Many potential emphasis openers without closers
    pub fn pathological_emphasis() -> String {
        "*a ".repeat(1000) + &"b* ".repeat(1000)
    }

    /// One line quoted far beyond the nesting limit
    pub fn pathological_nested() -> String {
        ">".repeat(1000) + " deep\n"
    }

    /// A long table with many sections
    pub fn many_sections() -> String {
        let mut doc = String::from("|table>\n");
        for i in 0..500 {
            doc.push_str(&format!("row {i}|*cell*|`{i}`\n---|---\n"));
        }
        doc.push_str("|<table\n");
        doc
    }
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    group.throughput(Throughput::Bytes(samples::TINY.len() as u64));
    group.bench_function("tiny", |b| {
        b.iter(|| blockmark::to_html(black_box(samples::TINY)))
    });

    group.throughput(Throughput::Bytes(samples::SMALL.len() as u64));
    group.bench_function("small", |b| {
        b.iter(|| blockmark::to_html(black_box(samples::SMALL)))
    });

    group.throughput(Throughput::Bytes(samples::MEDIUM.len() as u64));
    group.bench_function("medium", |b| {
        b.iter(|| blockmark::to_html(black_box(samples::MEDIUM)))
    });

    let large = samples::large();
    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("large", |b| {
        b.iter(|| blockmark::to_html(black_box(&large)))
    });

    let tables = samples::many_sections();
    group.throughput(Throughput::Bytes(tables.len() as u64));
    group.bench_function("table_sections", |b| {
        b.iter(|| blockmark::to_html(black_box(&tables)))
    });

    group.finish();
}

fn bench_inline(c: &mut Criterion) {
    let mut group = c.benchmark_group("inline");

    let plain = "Hello, this is plain text without any inline markers. ".repeat(20);
    let marked = "Some *em*, **strong**, `code` and a [link](https://x.y). ".repeat(20);
    let transformer = LineTransformer::default();

    group.throughput(Throughput::Bytes(plain.len() as u64));
    group.bench_function("plain_line", |b| {
        b.iter(|| transformer.transform(black_box(&plain)))
    });

    group.throughput(Throughput::Bytes(marked.len() as u64));
    group.bench_function("marked_line", |b| {
        b.iter(|| transformer.transform(black_box(&marked)))
    });

    let disabled = LineTransformer::new(Capabilities::empty());
    group.bench_function("marked_line_disabled", |b| {
        b.iter(|| disabled.transform(black_box(&marked)))
    });

    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let mut group = c.benchmark_group("pathological");
    group.sample_size(20); // Fewer samples for slow cases

    let emphasis = samples::pathological_emphasis();
    group.throughput(Throughput::Bytes(emphasis.len() as u64));
    group.bench_function("emphasis_explosion", |b| {
        b.iter(|| blockmark::to_html(black_box(&emphasis)))
    });

    let nested = samples::pathological_nested();
    group.throughput(Throughput::Bytes(nested.len() as u64));
    group.bench_function("deep_nesting", |b| {
        b.iter(|| blockmark::to_html(black_box(&nested)))
    });

    group.finish();
}

fn bench_buffer_reuse(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer_reuse");

    let input = samples::MEDIUM;
    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function("without_reuse", |b| {
        b.iter(|| blockmark::to_html(black_box(input)))
    });

    group.bench_function("with_reuse", |b| {
        let mut buffer = String::with_capacity(input.len() * 2);
        b.iter(|| {
            blockmark::to_html_into(black_box(input), &mut buffer);
            black_box(&buffer);
        })
    });

    // Capability gating skips predicates and passes entirely
    let options = Options {
        capabilities: Capabilities::empty(),
    };
    group.bench_function("no_capabilities", |b| {
        b.iter(|| blockmark::to_html_with_options(black_box(input), &options))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parsing,
    bench_inline,
    bench_pathological,
    bench_buffer_reuse
);
criterion_main!(benches);
