//! Write sampled directions as `x y z` rows to standard output
//!
//! ```text
//! sphere_points --distribution cosine --count 5000 > ~/raytracer/points.txt
//! ```

use anyhow::Context;
use clap::Parser;
use pointplot_core::logging::enable_tracing;
use pointplot_io::XyzWriter;
use pointplot_sampling::{sample_points, Distribution};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufWriter};
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Sample directions from a density and print them as points")]
struct Args {
    /// Number of points to generate
    #[arg(short, long, default_value_t = 1000)]
    count: usize,

    /// Density to sample: sphere, cosine or sphere-cone
    #[arg(short, long, default_value_t = Distribution::Sphere)]
    distribution: Distribution,

    /// Seed for reproducible output; random when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log at debug level
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    enable_tracing(args.debug);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let pdf = args.distribution.pdf();
    let cloud = sample_points(pdf.as_ref(), args.count, &mut rng);
    info!(count = cloud.len(), distribution = %args.distribution, "sampled points");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    XyzWriter::write_points(&mut out, &cloud).context("failed to write points")?;

    Ok(())
}
