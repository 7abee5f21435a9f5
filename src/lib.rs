#![doc = r##"
FAVFORGE — icon set generation for web and app manifests.

This crate turns one source image (PNG or SVG) into the sets of differently-sized PNG
icons that browsers and platforms ask for: favicons, Apple touch icons, Android/web-app
manifest icons and Windows tiles. It also provides a transparency pass that replaces
near-white background pixels with full transparency. It powers the `favforge` CLI and
can be embedded in build scripts or site generators.

Generate a built-in icon set
----------------------------
```rust,no_run
use std::path::Path;
use favforge::{generate_icons, GenerateParams, IconSet};

fn main() -> favforge::Result<()> {
    let params = GenerateParams {
        icon_set: IconSet::Essential,
        webmanifest: Some("icons.json".to_string()),
        src_prefix: "/static/icons".to_string(),
        ..GenerateParams::default()
    };

    let report = generate_icons(Path::new("logo.svg"), Path::new("static/icons"), &params)?;
    println!("generated={} failed={}", report.generated.len(), report.failed.len());
    Ok(())
}
```

Custom manifests
----------------
```rust
use favforge::{Dimensions, IconEntry, IconManifest};

let manifest = IconManifest::from_json_str(
    r#"{"icons": [{"name": "tile.png", "size": [310, 150]}]}"#,
).unwrap();
assert_eq!(manifest.icons[0], IconEntry::new("tile.png", Dimensions::new(310, 150)));
```

Transparency pass
-----------------
```rust,no_run
use std::path::{Path, PathBuf};
use favforge::{make_paths_transparent, make_transparent, TransparencyParams};

fn main() -> favforge::Result<()> {
    // Single file, written back in place
    make_transparent(Path::new("logo.png"), None, 240)?;

    // Files and directories together; per-file errors are counted, not fatal
    let report = make_paths_transparent(
        &[PathBuf::from("logo_small.png"), PathBuf::from("icons/")],
        &TransparencyParams::default(),
    )?;
    println!("processed={} errors={}", report.processed, report.errors);
    Ok(())
}
```

Error handling
--------------
All public functions return `favforge::Result<T>`; match on `favforge::Error` to handle
specific cases, e.g. a missing source or a failing external rasterizer.

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — manifests, parameters and pixel processing primitives.
- [`io`] — source loading, SVG rasterizers and writers.
- [`types`] — shared enums and `Dimensions`.
- [`error`] — crate-level `Error` and `Result`.
"##]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::manifest::{IconEntry, IconManifest, IconSize};
pub use crate::core::params::{DEFAULT_THRESHOLD, GenerateParams, TransparencyParams};
pub use crate::core::processing::transparency::{TransparencyStats, apply_transparency};
pub use error::{Error, Result};
pub use types::{Dimensions, FitMode, IconSet, RasterBackend, SourceKind};

// Readers and rasterizers
pub use io::raster::{MagickRasterizer, Rasterizer, ResvgRasterizer, SvgDocument};
pub use io::source::SourceImage;

// High-level API re-exports
pub use api::{
    BatchReport, GeneratedIcon, GenerationReport, IconFailure, generate_icons,
    generate_icons_with_manifest, make_directory_transparent, make_paths_transparent,
    make_transparent, render_icons,
};
