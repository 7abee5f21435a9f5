use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use favforge::{
    GenerateParams, IconManifest, TransparencyParams, generate_icons_with_manifest,
    make_paths_transparent, make_transparent,
};

use super::args::{CliArgs, Command, GenerateArgs, TransparentArgs};
use super::errors::AppError;

fn init_logging(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();
    }
}

/// Merge a preset (if any) with the flags that were actually given.
fn resolve_generate_params(args: &GenerateArgs) -> Result<GenerateParams, AppError> {
    let mut params = match &args.config {
        Some(path) => {
            info!("Loading generation preset from {:?}", path);
            GenerateParams::from_path(path)?
        }
        None => GenerateParams::default(),
    };

    if let Some(set) = args.set {
        params.icon_set = set;
    }
    if let Some(fit) = args.fit {
        params.fit = fit;
    }
    if let Some(backend) = args.backend {
        params.backend = backend;
    }
    if let Some(program) = &args.magick_program {
        params.magick_program = program.clone();
    }
    if args.transparent {
        params.transparent = true;
    }
    if args.no_transparent {
        params.transparent = false;
    }
    if let Some(threshold) = args.threshold {
        params.threshold = threshold;
    }
    if let Some(webmanifest) = &args.webmanifest {
        params.webmanifest = Some(webmanifest.clone());
    }
    if let Some(prefix) = &args.src_prefix {
        params.src_prefix = prefix.clone();
    }
    if args.fail_fast {
        params.continue_on_error = false;
    }
    Ok(params)
}

fn run_generate(args: GenerateArgs) -> Result<(), AppError> {
    let params = resolve_generate_params(&args)?;
    let manifest = match &args.manifest {
        Some(path) => IconManifest::from_path(path)?,
        None => IconManifest::builtin(params.icon_set),
    };

    info!("Creating PNG icons from {:?}...", args.input);
    let report = generate_icons_with_manifest(&args.input, &args.output_dir, &manifest, &params)?;

    for failure in &report.failed {
        warn!("Failed: {} ({})", failure.name, failure.reason);
    }
    info!("Generated: {}", report.generated.len());
    info!("Errors: {}", report.failed.len());

    if !report.is_complete() {
        return Err(AppError::IncompleteIconSet {
            failed: report.failed.len(),
            total: manifest.len(),
        });
    }
    Ok(())
}

fn run_transparent(args: TransparentArgs) -> Result<(), AppError> {
    if let Some(output) = &args.output {
        if args.paths.len() != 1 {
            return Err(AppError::OutputWithMultipleInputs {
                count: args.paths.len(),
            });
        }
        let input = &args.paths[0];
        if input.is_dir() {
            return Err(AppError::OutputWithDirectory {
                path: input.clone(),
            });
        }
        make_transparent(input, Some(output), args.threshold)?;
        info!("Successfully processed: {:?} -> {:?}", input, output);
        return Ok(());
    }

    let params = TransparencyParams {
        threshold: args.threshold,
        continue_on_error: !args.fail_fast,
    };
    let report = make_paths_transparent(&args.paths, &params)?;

    info!("Processed: {}", report.processed);
    info!("Skipped: {}", report.skipped);
    info!("Errors: {}", report.errors);
    info!(
        "Pixels cleared: {} of {}",
        report.stats.replaced, report.stats.pixels
    );
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    match args.command {
        Command::Generate(generate) => run_generate(generate)?,
        Command::Transparent(transparent) => run_transparent(transparent)?,
    }
    Ok(())
}
