use anyhow::{Context, Result};
use matrix_bench::cli::BenchArgs;
use matrix_bench::kernels::moments;
use matrix_bench::metrics::measure;
use matrix_bench::{logging, report, BenchConfig, Kernel, MetricsRecord, SeededFill};

const KERNEL: Kernel = Kernel::Variance;

fn main() -> Result<()> {
    logging::init();
    let config = BenchConfig::from_args(BenchArgs::parse_for(KERNEL));
    let threads = config.init_thread_pool()?;
    let n = config.n;
    tracing::info!(kernel = KERNEL.binary_name(), n, threads, "starting run");

    let a = SeededFill::default().matrix(n).context("allocating A")?;

    // Both passes are timed.
    let (stats, elapsed) = measure(|| moments(&a));
    std::hint::black_box(&stats);

    let record = MetricsRecord::new(KERNEL, n, elapsed, threads).with_moments(stats);
    report::finish(&config, &record, None)?;
    Ok(())
}
