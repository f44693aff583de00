use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "equicube", version)]
struct Cli {
    /// Log progress to stderr.
    #[arg(long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert an equirectangular panorama into six cube face PNGs.
    Convert(ConvertArgs),
    /// Print the projection parameters derived for a source width.
    Params(ParamsArgs),
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input panorama (any format the `image` crate decodes).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output directory for `<stem>_<face>.png`.
    #[arg(long)]
    out_dir: PathBuf,

    /// Stem for output file names. Defaults to the input file stem.
    #[arg(long)]
    stem: Option<String>,

    /// Cubemap config JSON. Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overlap margin in pixels.
    #[arg(long)]
    overlap: Option<f64>,

    /// Override worker threads (capped at six).
    #[arg(long)]
    workers: Option<usize>,

    /// Resampling filter: `nearest` or `bilinear`.
    #[arg(long)]
    filter: Option<equicube::SampleFilter>,

    /// Also write a 4x3 cross atlas as `<stem>_cross.png`.
    #[arg(long, default_value_t = false)]
    cross: bool,
}

#[derive(Parser, Debug)]
struct ParamsArgs {
    /// Source panorama width in pixels.
    #[arg(long)]
    width: u32,

    /// Overlap margin in pixels.
    #[arg(long, default_value_t = equicube::DEFAULT_OVERLAP_MARGIN)]
    overlap: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }
    match cli.cmd {
        Command::Convert(args) => cmd_convert(args),
        Command::Params(args) => cmd_params(args),
    }
}

fn cmd_convert(args: ConvertArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => equicube::CubemapConfig::from_path(path)?,
        None => equicube::CubemapConfig::default(),
    };
    if let Some(overlap) = args.overlap {
        config.overlap_margin = overlap;
    }
    if let Some(workers) = args.workers {
        config.workers = Some(workers);
    }
    if let Some(filter) = args.filter {
        config.filter = filter;
    }

    let stem = match args.stem {
        Some(stem) => stem,
        None => args
            .in_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .context("input path has no file stem; pass --stem")?,
    };

    let source = equicube::load_source(&args.in_path)
        .with_context(|| format!("load panorama '{}'", args.in_path.display()))?;
    let cube = equicube::process_image(source, &config)?;

    for path in cube.save_faces(&args.out_dir, &stem)? {
        eprintln!("wrote {}", path.display());
    }
    if args.cross {
        let path = args.out_dir.join(format!("{stem}_cross.png"));
        equicube::save_png(&cube.to_cross_atlas()?, &path)?;
        eprintln!("wrote {}", path.display());
    }

    let stats = cube.stats();
    eprintln!(
        "face size {} px, fov {:.4} deg, {} workers, {} ms",
        cube.face_size(),
        cube.field_of_view_degrees(),
        stats.workers,
        stats.elapsed.as_millis()
    );
    Ok(())
}

fn cmd_params(args: ParamsArgs) -> anyhow::Result<()> {
    let params = equicube::ProjectionParams::derive(args.width, args.overlap)?;
    println!("{}", serde_json::to_string_pretty(&params)?);
    Ok(())
}
