use anyhow::{Context, Result};
use matrix_bench::cli::BenchArgs;
use matrix_bench::kernels::multiply_transposed_into;
use matrix_bench::metrics::measure;
use matrix_bench::{logging, report, BenchConfig, Kernel, Matrix, MetricsRecord, SeededFill};

const KERNEL: Kernel = Kernel::TransposeMultiply;

fn main() -> Result<()> {
    logging::init();
    let config = BenchConfig::from_args(BenchArgs::parse_for(KERNEL));
    let threads = config.init_thread_pool()?;
    let n = config.n;
    tracing::info!(kernel = KERNEL.binary_name(), n, threads, "starting run");

    let mut fill = SeededFill::default();
    let a = fill.matrix(n).context("allocating A")?;
    let b = fill.matrix(n).context("allocating B")?;
    let mut bt = Matrix::zeroed(n).context("allocating transposed B")?;
    let mut c = Matrix::zeroed(n).context("allocating C")?;

    // Timed region covers the serial transpose and the parallel product.
    let (res, elapsed) = measure(|| multiply_transposed_into(&a, &b, &mut bt, &mut c));
    res?;
    std::hint::black_box(&c);

    let record = MetricsRecord::new(KERNEL, n, elapsed, threads);
    report::finish(&config, &record, report::product_spot(&c))?;
    Ok(())
}
