//! The batch tools driven through the binary.

mod common;

use common::*;
use image::{Rgb, RgbImage};
use pretty_assertions::assert_eq;

fn save_rgb(path: &std::path::Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    RgbImage::from_pixel(width, height, Rgb([90, 60, 30]))
        .save(path)
        .unwrap();
}

#[test]
fn test_svg_creates_recolored_and_padded_variants() {
    let project = TestProject::new();
    project.write("WhiteLogoNoBackground.svg", WHITE_SVG_LOGO);

    let result = project.run(&["svg", "--rasterize", "200"]);

    assert!(result.success, "stderr: {}", result.stderr);
    let plain = std::fs::read_to_string(project.root().join("PatchLogoBlue.svg")).unwrap();
    assert!(plain.contains(r##"<rect fill="#0751cf""##));
    assert!(plain.contains(r##"<circle fill="#0751cf""##));

    let padded =
        std::fs::read_to_string(project.root().join("PatchLogoBlue_Padded.svg")).unwrap();
    assert!(padded.contains(r#"viewBox="0 0 800 800""#));
    assert!(padded.contains(r#"<g transform="translate(8, 20)">"#));

    let raster = image::open(project.root().join("PatchLogoBlue_Padded.png")).unwrap();
    assert_eq!((raster.width(), raster.height()), (200, 200));
    assert!(result
        .stdout
        .contains("Created PatchLogoBlue_Padded.png (200px wide)"));
}

#[test]
fn test_svg_missing_source_fails() {
    let project = TestProject::new();

    let result = project.run(&["svg"]);

    assert!(!result.success);
    assert!(result.stderr.contains("Source SVG not found"));
}

#[test]
fn test_dimensions_json_report() {
    let project = TestProject::new();
    save_rgb(&project.public().join("hero.jpg"), 40, 20);
    save_rgb(&project.public().join("team/portrait.png"), 20, 40);

    let result = project.run(&["dimensions", "--json"]);

    assert!(result.success, "stderr: {}", result.stderr);
    let value: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["path"], "hero.jpg");
    assert_eq!(entries[0]["orientation"], "landscape");
    assert_eq!(entries[1]["path"], "team/portrait.png");
    assert_eq!(entries[1]["orientation"], "portrait");
}

#[test]
fn test_resize_dry_run_leaves_files_alone() {
    let project = TestProject::new();
    project.write("asset-tools.yaml", "resize:\n  max_width: 20\n  min_size_mb: 0.0\n");
    let wide = project.public().join("wide.png");
    save_rgb(&wide, 40, 20);

    let result = project.run(&["resize"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("DRY RUN - No files will be modified"));
    assert!(result.stdout.contains("[WOULD RESIZE] wide.png"));
    assert_eq!(image::image_dimensions(&wide).unwrap(), (40, 20));
}

#[test]
fn test_resize_apply_downscales() {
    let project = TestProject::new();
    project.write("asset-tools.yaml", "resize:\n  max_width: 20\n  min_size_mb: 0.0\n");
    let wide = project.public().join("wide.png");
    let narrow = project.public().join("narrow.png");
    save_rgb(&wide, 40, 20);
    save_rgb(&narrow, 10, 20);

    let result = project.run(&["resize", "--apply"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("APPLYING CHANGES - Resizing images"));
    assert!(result.stdout.contains("Images resized: 1"));
    assert_eq!(image::image_dimensions(&wide).unwrap(), (20, 10));
    assert_eq!(image::image_dimensions(&narrow).unwrap(), (10, 20));
}

#[test]
fn test_resize_reports_errors_and_exits_zero() {
    let project = TestProject::new();
    project.write("asset-tools.yaml", "resize:\n  min_size_mb: 0.0\n");
    project.write("public/broken.jpg", "not a jpeg");

    let result = project.run(&["resize"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("Errors: 1\n  - broken.jpg: "));
}

#[test]
fn test_heic_empty_directory() {
    let project = TestProject::new();

    let result = project.run(&["heic"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(result.stdout, "\nConverted 0 of 0 HEIC files\n");
}

#[test]
fn test_init_writes_default_config_once() {
    let project = TestProject::new();
    let config = project.root().join("asset-tools.yaml");

    let first = project.run(&["init"]);
    assert!(first.success, "stderr: {}", first.stderr);
    let written = std::fs::read_to_string(&config).unwrap();
    assert_eq!(written, asset_tools::models::DEFAULT_CONFIG_YAML);

    std::fs::write(&config, "public_dir: other\n").unwrap();
    let second = project.run(&["init"]);
    assert!(second.success);
    assert!(second.stdout.starts_with("Skipped "));
    assert_eq!(std::fs::read_to_string(&config).unwrap(), "public_dir: other\n");

    let forced = project.run(&["init", "--force"]);
    assert!(forced.success);
    assert_eq!(
        std::fs::read_to_string(&config).unwrap(),
        asset_tools::models::DEFAULT_CONFIG_YAML
    );
}

#[test]
fn test_explicit_missing_config_fails() {
    let project = TestProject::new();

    let result = project.run(&["--config", "/nonexistent/asset-tools.yaml", "dimensions"]);

    assert!(!result.success);
    assert!(result.stderr.contains("Failed to load configuration"));
}

#[test]
fn test_broken_implicit_config_falls_back_to_defaults() {
    let project = TestProject::new();
    project.write("asset-tools.yaml", "logo: [not, a, map\n");

    let result = project.run(&["logo"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.starts_with("Error: Input logo not found at "));
}

#[test]
fn test_status_screen() {
    let project = TestProject::new();

    let result = project.run(&[]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.starts_with("asset-tools v"));
    assert!(result.stdout.contains("Config:       built-in defaults"));
    assert!(result.stdout.contains("WhiteLogoNoBackground.png (missing)"));
    assert!(result.stdout.contains("asset-tools resize"));
}

#[test]
fn test_missing_public_dir_reports_nothing_and_exits_zero() {
    let project = TestProject::new();
    std::fs::remove_dir(project.public()).unwrap();

    let dims = project.run(&["dimensions"]);
    assert!(dims.success, "stderr: {}", dims.stderr);
    assert!(dims.stdout.ends_with("\nTotal: 0 images\n"));

    let resize = project.run(&["resize"]);
    assert!(resize.success, "stderr: {}", resize.stderr);
    assert!(resize.stdout.contains("Found 0 images\n"));
}

#[cfg(unix)]
#[test]
fn test_dimensions_includes_symlinked_images() {
    let project = TestProject::new();
    let real = project.root().join("real/a.png");
    save_rgb(&real, 40, 20);
    std::os::unix::fs::symlink(&real, project.public().join("hero.png")).unwrap();

    let result = project.run(&["dimensions", "--json"]);

    assert!(result.success, "stderr: {}", result.stderr);
    let value: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    assert_eq!(value[0]["path"], "hero.png");
    assert_eq!(value[0]["width"], 40);
}
