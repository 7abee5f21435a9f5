//! High-level, ergonomic library API: generate icon sets from a source image,
//! and run the transparency pass over single files, directories, or mixed path
//! lists. Prefer these entrypoints over the low-level processing modules.
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::manifest::{IconEntry, IconManifest};
use crate::core::params::{GenerateParams, TransparencyParams};
use crate::core::processing::transparency::{TransparencyStats, apply_transparency};
use crate::error::{Error, Result};
use crate::io::raster::{Rasterizer, rasterizer_for};
use crate::io::source::{SourceImage, decode_raster};
use crate::io::writers::png::write_rgba_png;
use crate::io::writers::webmanifest::{ManifestIcon, write_manifest_icons};
use crate::types::Dimensions;

/// One icon written to disk
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedIcon {
    pub name: String,
    pub path: PathBuf,
    pub size: Dimensions,
    /// Set when the transparency pass ran over this icon
    pub transparency: Option<TransparencyStats>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IconFailure {
    pub name: String,
    pub reason: String,
}

/// Outcome of a generation run
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationReport {
    pub generated: Vec<GeneratedIcon>,
    pub failed: Vec<IconFailure>,
    pub webmanifest: Option<PathBuf>,
}

impl GenerationReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Outcome of a transparency batch
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
    pub stats: TransparencyStats,
}

impl BatchReport {
    fn merge(&mut self, other: BatchReport) {
        self.processed += other.processed;
        self.skipped += other.skipped;
        self.errors += other.errors;
        self.stats.merge(other.stats);
    }
}

/// Generate the built-in icon set selected by `params.icon_set` into `output_dir`.
pub fn generate_icons(
    source: &Path,
    output_dir: &Path,
    params: &GenerateParams,
) -> Result<GenerationReport> {
    let manifest = IconManifest::builtin(params.icon_set);
    generate_icons_with_manifest(source, output_dir, &manifest, params)
}

/// Generate every entry of `manifest` from `source` into `output_dir`.
pub fn generate_icons_with_manifest(
    source: &Path,
    output_dir: &Path,
    manifest: &IconManifest,
    params: &GenerateParams,
) -> Result<GenerationReport> {
    manifest.validate()?;
    let source = SourceImage::open(source)?;
    let rasterizer = rasterizer_for(params.backend, &params.magick_program);
    render_icons(&source, manifest, output_dir, params, rasterizer.as_ref())
}

/// Render and write each manifest entry from an already loaded source.
pub fn render_icons(
    source: &SourceImage,
    manifest: &IconManifest,
    output_dir: &Path,
    params: &GenerateParams,
    rasterizer: &dyn Rasterizer,
) -> Result<GenerationReport> {
    fs::create_dir_all(output_dir)?;
    info!(
        "Generating {} icons from {:?} into {:?} (fit={}, rasterizer={})",
        manifest.len(),
        source.path,
        output_dir,
        params.fit,
        rasterizer.name()
    );

    let mut report = GenerationReport::default();
    for entry in manifest {
        info!("Generating {} ({})...", entry.name, entry.size);
        match render_one(source, entry, output_dir, params, rasterizer) {
            Ok(icon) => {
                info!("Successfully created {:?}", icon.path);
                report.generated.push(icon);
            }
            Err(e) if params.continue_on_error => {
                warn!("Error creating {}: {}", entry.name, e);
                report.failed.push(IconFailure {
                    name: entry.name.clone(),
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        }
    }

    if let Some(name) = params.webmanifest.as_deref() {
        let icons: Vec<ManifestIcon> = report
            .generated
            .iter()
            .map(|icon| ManifestIcon::png(&icon.name, icon.size, &params.src_prefix))
            .collect();
        let path = output_dir.join(name);
        write_manifest_icons(&path, &icons)?;
        report.webmanifest = Some(path);
    }

    info!(
        "Icon generation complete: generated={} failed={}",
        report.generated.len(),
        report.failed.len()
    );
    Ok(report)
}

fn render_one(
    source: &SourceImage,
    entry: &IconEntry,
    output_dir: &Path,
    params: &GenerateParams,
    rasterizer: &dyn Rasterizer,
) -> Result<GeneratedIcon> {
    let mut img = source.render(entry.size, params.fit, rasterizer)?;
    let transparency = if params.transparent {
        Some(apply_transparency(&mut img, params.threshold))
    } else {
        None
    };

    let path = output_dir.join(&entry.name);
    write_rgba_png(&path, &img)?;
    Ok(GeneratedIcon {
        name: entry.name.clone(),
        path,
        size: entry.size,
        transparency,
    })
}

/// Replace near-white pixels of `input` with transparency and save as PNG to
/// `output`, or back over `input` when no output is given.
pub fn make_transparent(
    input: &Path,
    output: Option<&Path>,
    threshold: u8,
) -> Result<TransparencyStats> {
    if !input.is_file() {
        return Err(Error::SourceNotFound {
            path: input.to_path_buf(),
        });
    }
    let output = output.unwrap_or(input);

    let mut img = decode_raster(input)?.to_rgba8();
    let stats = apply_transparency(&mut img, threshold);
    write_rgba_png(output, &img)?;

    info!(
        "Successfully made {:?} transparent ({} of {} pixels)",
        input, stats.replaced, stats.pixels
    );
    Ok(stats)
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"))
}

/// Run the transparency pass in place over every `*.png` directly inside `dir`.
pub fn make_directory_transparent(dir: &Path, params: &TransparencyParams) -> Result<BatchReport> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        paths.push(entry?.path());
    }
    paths.sort();

    info!("Processing PNG files in {:?}", dir);
    let mut report = BatchReport::default();
    for path in paths {
        if !path.is_file() || !is_png(&path) {
            debug!("Skipping non-PNG entry: {:?}", path);
            report.skipped += 1;
            continue;
        }

        match make_transparent(&path, None, params.threshold) {
            Ok(stats) => {
                report.processed += 1;
                report.stats.merge(stats);
            }
            Err(e) if params.continue_on_error => {
                warn!("Error processing {:?}: {}", path, e);
                report.errors += 1;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(report)
}

/// Run the transparency pass over a mix of files and directories.
pub fn make_paths_transparent(paths: &[PathBuf], params: &TransparencyParams) -> Result<BatchReport> {
    let mut report = BatchReport::default();
    for path in paths {
        let outcome = if path.is_dir() {
            make_directory_transparent(path, params)
        } else {
            make_transparent(path, None, params.threshold).map(|stats| BatchReport {
                processed: 1,
                stats,
                ..BatchReport::default()
            })
        };

        match outcome {
            Ok(r) => report.merge(r),
            Err(e) if params.continue_on_error => {
                warn!("Error processing {:?}: {}", path, e);
                report.errors += 1;
            }
            Err(e) => return Err(e),
        }
    }

    info!(
        "Transparency pass complete: processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::raster::ResvgRasterizer;
    use crate::types::{FitMode, IconSet};
    use image::{Rgba, RgbaImage};

    fn white_backed_square() -> RgbaImage {
        RgbaImage::from_fn(64, 64, |x, y| {
            if (16..48).contains(&x) && (16..48).contains(&y) {
                Rgba([20, 60, 200, 255])
            } else {
                Rgba([255, 255, 255, 255])
            }
        })
    }

    #[test]
    fn render_icons_writes_every_entry_at_exact_size() {
        let dir = tempfile::tempdir().unwrap();
        let source = SourceImage::from_rgba(Path::new("mem.png"), white_backed_square());
        let manifest = IconManifest::builtin(IconSet::Essential);
        let params = GenerateParams {
            webmanifest: Some("icons.json".to_string()),
            ..GenerateParams::default()
        };

        let report =
            render_icons(&source, &manifest, dir.path(), &params, &ResvgRasterizer).unwrap();

        assert!(report.is_complete());
        assert_eq!(report.generated.len(), manifest.len());
        for entry in &manifest {
            let img = image::open(dir.path().join(&entry.name)).unwrap();
            assert_eq!((img.width(), img.height()), (entry.size.width, entry.size.height));
        }
        let webmanifest = report.webmanifest.unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(webmanifest).unwrap()).unwrap();
        assert_eq!(json["icons"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn transparent_option_clears_white_corners() {
        let dir = tempfile::tempdir().unwrap();
        let source = SourceImage::from_rgba(Path::new("mem.png"), white_backed_square());
        let manifest =
            IconManifest::new(vec![IconEntry::new("icon.png", Dimensions::square(64))]).unwrap();
        let params = GenerateParams {
            transparent: true,
            fit: FitMode::Stretch,
            ..GenerateParams::default()
        };

        let report =
            render_icons(&source, &manifest, dir.path(), &params, &ResvgRasterizer).unwrap();
        assert!(report.generated[0].transparency.unwrap().replaced > 0);

        let img = image::open(dir.path().join("icon.png")).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(0, 0), &Rgba([255, 255, 255, 0]));
        assert_eq!(img.get_pixel(32, 32), &Rgba([20, 60, 200, 255]));
    }

    #[test]
    fn directory_pass_skips_non_png_entries() {
        let dir = tempfile::tempdir().unwrap();
        white_backed_square()
            .save(dir.path().join("a.png"))
            .unwrap();
        white_backed_square()
            .save(dir.path().join("B.PNG"))
            .unwrap();
        fs::write(dir.path().join("notes.txt"), "hello").unwrap();
        fs::write(dir.path().join("broken.png"), "not a png").unwrap();

        let report =
            make_directory_transparent(dir.path(), &TransparencyParams::default()).unwrap();
        assert_eq!(report.processed, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.errors, 1);
        assert_eq!(report.stats.pixels, 2 * 64 * 64);
    }

    #[test]
    fn fail_fast_stops_on_first_error() {
        let dir = tempfile::tempdir().unwrap();
        let params = TransparencyParams {
            continue_on_error: false,
            ..TransparencyParams::default()
        };
        let missing = vec![dir.path().join("missing.png")];
        let err = make_paths_transparent(&missing, &params).unwrap_err();
        assert!(matches!(err, Error::SourceNotFound { .. }));
    }
}
