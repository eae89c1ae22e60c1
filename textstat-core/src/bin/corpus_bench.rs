//! Corpus Benchmarking Tool
//!
//! Measures the throughput of the analysis pipeline on a large text file,
//! such as a book collection or a Wikipedia dump.
//!
//! ## What It Benchmarks
//!
//! 1. **Normalization**: lower-casing, punctuation/digit stripping, whitespace collapsing
//! 2. **Counting**: tokenizing normalized text and building the frequency table
//! 3. **Full Analysis**: raw metrics + normalization + counting + top-N ranking
//!
//! ## Usage
//!
//! ```bash
//! ./target/release/corpus_bench /path/to/corpus.txt
//!
//! # Rank more words in the full analysis
//! ./target/release/corpus_bench /path/to/corpus.txt 20
//! ```
//!
//! ## Example Output
//!
//! ```text
//! === Analyze ===
//! --------------------------------
//! Mode        : Analyze
//! Elapsed     : 0.912 s
//! Throughput  : 0.241 GiB/s
//! Tokens      : 41_892_341
//! Tokens/sec  : 45_934_584
//! --------------------------------
//! ```
//!
//! Build in release mode and use an input of 100MB+ for stable numbers.

use std::env;
use std::path::Path;
use std::time::{Duration, Instant};

use textstat_core::analyzer::{FrequencyTable, TextNormalizer};
use textstat_core::extract::{DocumentFormat, Extractor, TextExtractor};
use textstat_core::{AnalysisConfig, Analyzer};

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

fn main() -> std::io::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: corpus_bench <path> [top_n]");
        std::process::exit(1);
    }

    let path = &args[1];
    let top_n = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(AnalysisConfig::default().top_n);

    println!("Loading file...");
    let input = match TextExtractor.extract(Path::new(path)) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("{} ({} reader)", e, DocumentFormat::Text);
            std::process::exit(1);
        }
    };

    println!("File size: {}", fmt_bytes(input.len() as u64));
    println!("Top N:     {}\n", top_n);

    bench_normalize(&input);
    bench_count(&input);
    bench_analyze(&input, top_n);

    Ok(())
}

fn bench_normalize(input: &str) {
    let normalizer = TextNormalizer::default();
    let mut out = String::with_capacity(input.len());

    println!("=== Normalize ===");

    warmup(|| {
        normalizer.normalize_into(input, &mut out);
    });

    let elapsed = measure(|| {
        normalizer.normalize_into(input, &mut out);
    });

    print_perf("Normalize", input.len(), elapsed, 0);
}

fn bench_count(input: &str) {
    let normalized = TextNormalizer::default().normalize(input);
    let min_chars = AnalysisConfig::default().min_token_chars;

    println!("=== Count (pre-normalized) ===");

    warmup(|| {
        let table = FrequencyTable::from_normalized(&normalized, min_chars);
        std::hint::black_box(table.len());
    });

    let mut tokens = 0u64;
    let elapsed = measure(|| {
        let table = FrequencyTable::from_normalized(&normalized, min_chars);
        tokens = table.total() as u64;
        std::hint::black_box(table.len());
    });

    print_perf("Count", normalized.len(), elapsed, tokens);
}

fn bench_analyze(input: &str, top_n: usize) {
    let mut analyzer = Analyzer::with_config(AnalysisConfig::with_top_n(top_n));

    println!("=== Analyze ===");

    warmup(|| {
        std::hint::black_box(analyzer.analyze_text(input));
    });

    let mut words = 0u64;
    let elapsed = measure(|| {
        let report = analyzer.analyze_text(input);
        words = report.word_count as u64;
        std::hint::black_box(report);
    });

    print_perf("Analyze", input.len(), elapsed, words);
}

fn warmup<F: FnMut()>(mut f: F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(mut f: F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, tokens: u64) {
    let secs = elapsed.as_secs_f64();
    let gib = input_bytes as f64 / (1024.0 * 1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.3} s", secs);
    println!("Throughput  : {:.3} GiB/s", gib / secs);

    if tokens > 0 {
        println!("Tokens      : {}", fmt_count(tokens));
        println!("Tokens/sec  : {}", fmt_count((tokens as f64 / secs) as u64));
    }

    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    if b >= 1024 * 1024 * 1024 {
        format!("{:.2} GiB", b as f64 / (1024.0 * 1024.0 * 1024.0))
    } else if b >= 1024 * 1024 {
        format!("{:.2} MiB", b as f64 / (1024.0 * 1024.0))
    } else if b >= 1024 {
        format!("{:.2} KiB", b as f64 / 1024.0)
    } else {
        format!("{} B", b)
    }
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
