use anyhow::{Context, Result};
use matrix_bench::cli::BenchArgs;
use matrix_bench::kernels::matvec_into;
use matrix_bench::metrics::measure;
use matrix_bench::{logging, report, BenchConfig, Kernel, MetricsRecord, SeededFill, Vector};

const KERNEL: Kernel = Kernel::MatrixVector;

fn main() -> Result<()> {
    logging::init();
    let config = BenchConfig::from_args(BenchArgs::parse_for(KERNEL));
    let threads = config.init_thread_pool()?;
    let n = config.n;
    tracing::info!(kernel = KERNEL.binary_name(), n, threads, "starting run");

    let mut fill = SeededFill::default();
    let a = fill.matrix(n).context("allocating A")?;
    let b = fill.vector(n).context("allocating B")?;
    let mut c = Vector::zeroed(n).context("allocating C")?;

    let (res, elapsed) = measure(|| matvec_into(&a, &b, &mut c));
    res?;
    std::hint::black_box(&c);

    let record = MetricsRecord::new(KERNEL, n, elapsed, threads);
    report::finish(&config, &record, None)?;
    Ok(())
}
