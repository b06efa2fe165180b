//! Image resizing
//!
//! Images wider than the limit are scaled down to it, keeping the aspect
//! ratio; narrower images keep their size. Every result is written as PNG.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{GenericImageView, ImageFormat};
use rayon::prelude::*;
use serde::Serialize;

use crate::consts::DEFAULT_MAX_WIDTH;
use crate::error::AppError;

/// Outcome for one input file; failures are isolated per file
#[derive(Debug, Serialize, PartialEq, Eq)]
pub(crate) struct ResizeReport {
    pub(crate) input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) original: Option<(u32, u32)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) resized: Option<(u32, u32)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) error: Option<String>,
}

impl ResizeReport {
    pub(crate) fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Zero falls back to the default limit, like an empty width field
pub(crate) fn effective_max_width(max_width: u32) -> u32 {
    if max_width == 0 {
        DEFAULT_MAX_WIDTH
    } else {
        max_width
    }
}

/// Leading digits of a width field, like a lenient integer parse; anything
/// unparsable or zero means the default
pub(crate) fn parse_max_width(input: &str) -> u32 {
    let digits: String = input
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    effective_max_width(digits.parse().unwrap_or(0))
}

/// Target dimensions for an image of `width`×`height` under `max_width`
pub(crate) fn target_dimensions(width: u32, height: u32, max_width: u32) -> (u32, u32) {
    if width <= max_width {
        return (width, height);
    }
    let scaled = (u64::from(height) * u64::from(max_width)) / u64::from(width);
    (max_width, (scaled as u32).max(1))
}

fn output_path(input: &Path, out_dir: Option<&Path>, tag: Option<&str>) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.trim().is_empty())
        .unwrap_or("image");
    let file_name = match tag {
        Some(tag) => format!("{stem}-{tag}-resized.png"),
        None => format!("{stem}-resized.png"),
    };
    match out_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}

/// One distinct output file per input, in input order.
///
/// A name already claimed by an earlier input is tagged with the source
/// extension (`cat.bmp` -> `cat-bmp-resized.png`), then with a counter.
fn plan_outputs(inputs: &[PathBuf], out_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut taken = HashSet::new();
    inputs
        .iter()
        .map(|input| {
            let mut candidate = output_path(input, out_dir, None);
            let ext = input
                .extension()
                .and_then(|e| e.to_str())
                .filter(|e| !e.is_empty())
                .map(str::to_ascii_lowercase);
            let mut attempt = 1;
            while taken.contains(&candidate) {
                let tag = match (&ext, attempt) {
                    (Some(ext), 1) => ext.clone(),
                    (Some(ext), n) => format!("{ext}-{n}"),
                    (None, n) => (n + 1).to_string(),
                };
                candidate = output_path(input, out_dir, Some(&tag));
                attempt += 1;
            }
            taken.insert(candidate.clone());
            candidate
        })
        .collect()
}

pub(crate) fn resize_file(
    input: &Path,
    max_width: u32,
    output: &Path,
) -> Result<ResizeReport, AppError> {
    let image_err = |source| AppError::Image {
        path: input.display().to_string(),
        source,
    };
    let img = image::open(input).map_err(image_err)?;
    let (width, height) = img.dimensions();
    let (new_width, new_height) = target_dimensions(width, height, max_width);
    let resized = if (new_width, new_height) == (width, height) {
        img
    } else {
        img.resize_exact(new_width, new_height, FilterType::Triangle)
    };

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    resized
        .save_with_format(output, ImageFormat::Png)
        .map_err(image_err)?;
    tracing::debug!(
        input = %input.display(),
        output = %output.display(),
        width = new_width,
        height = new_height,
        "resized image"
    );

    Ok(ResizeReport {
        input: input.display().to_string(),
        output: Some(output.display().to_string()),
        original: Some((width, height)),
        resized: Some((new_width, new_height)),
        error: None,
    })
}

fn is_pattern(s: &str) -> bool {
    s.contains(['*', '?', '['])
}

/// Expand glob patterns; plain paths pass through untouched
pub(crate) fn expand_inputs(inputs: &[String]) -> Result<Vec<PathBuf>, AppError> {
    let mut paths = Vec::new();
    for input in inputs {
        if !is_pattern(input) {
            paths.push(PathBuf::from(input));
            continue;
        }
        let matched: Vec<PathBuf> = glob::glob(input)
            .map_err(|_| AppError::NoImages {
                pattern: input.clone(),
            })?
            .filter_map(Result::ok)
            .filter(|p| p.is_file())
            .collect();
        if matched.is_empty() {
            return Err(AppError::NoImages {
                pattern: input.clone(),
            });
        }
        paths.extend(matched);
    }
    Ok(paths)
}

/// Resize every input in parallel, reporting results in input order
pub(crate) fn resize_all(
    inputs: &[PathBuf],
    max_width: u32,
    out_dir: Option<&Path>,
) -> Vec<ResizeReport> {
    let max_width = effective_max_width(max_width);
    let outputs = plan_outputs(inputs, out_dir);
    inputs
        .par_iter()
        .zip(outputs.par_iter())
        .map(|(input, output)| {
            resize_file(input, max_width, output).unwrap_or_else(|e| ResizeReport {
                input: input.display().to_string(),
                output: None,
                original: None,
                resized: None,
                error: Some(e.to_string()),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn write_png(path: &Path, width: u32, height: u32) {
        RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]))
            .save_with_format(path, ImageFormat::Png)
            .unwrap();
    }

    #[test]
    fn target_keeps_narrow_images() {
        assert_eq!(target_dimensions(640, 480, 800), (640, 480));
        assert_eq!(target_dimensions(800, 600, 800), (800, 600));
    }

    #[test]
    fn target_scales_wide_images_proportionally() {
        assert_eq!(target_dimensions(1600, 1200, 800), (800, 600));
        // 1000 * 333 / 1024 = 325.19 -> floor
        assert_eq!(target_dimensions(1024, 1000, 333), (333, 325));
        assert_eq!(target_dimensions(5000, 1, 100), (100, 1));
    }

    #[test]
    fn zero_width_falls_back_to_default() {
        assert_eq!(effective_max_width(0), DEFAULT_MAX_WIDTH);
        assert_eq!(effective_max_width(320), 320);
    }

    #[test]
    fn parse_max_width_is_lenient() {
        assert_eq!(parse_max_width("640"), 640);
        assert_eq!(parse_max_width(" 1024px "), 1024);
        assert_eq!(parse_max_width("wide"), DEFAULT_MAX_WIDTH);
        assert_eq!(parse_max_width("0"), DEFAULT_MAX_WIDTH);
        assert_eq!(parse_max_width("99999999999"), DEFAULT_MAX_WIDTH);
    }

    #[test]
    fn output_path_uses_stem_and_png() {
        let p = output_path(Path::new("/tmp/photos/cat.jpeg"), None, None);
        assert_eq!(p, PathBuf::from("/tmp/photos/cat-resized.png"));
        let p = output_path(Path::new("cat.jpeg"), Some(Path::new("out")), None);
        assert_eq!(p, PathBuf::from("out/cat-resized.png"));
    }

    #[test]
    fn plan_outputs_never_reuses_a_name() {
        let inputs = [
            PathBuf::from("a/cat.png"),
            PathBuf::from("b/cat.png"),
            PathBuf::from("c/cat.bmp"),
            PathBuf::from("d/cat"),
        ];
        let outputs = plan_outputs(&inputs, Some(Path::new("out")));
        assert_eq!(
            outputs,
            vec![
                PathBuf::from("out/cat-resized.png"),
                PathBuf::from("out/cat-png-resized.png"),
                PathBuf::from("out/cat-bmp-resized.png"),
                PathBuf::from("out/cat-2-resized.png"),
            ]
        );
    }

    #[test]
    fn resize_all_keeps_same_stem_inputs_apart() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("cat.png");
        let bmp = dir.path().join("cat.bmp");
        write_png(&png, 40, 10);
        RgbaImage::from_pixel(20, 20, Rgba([1, 2, 3, 255]))
            .save_with_format(&bmp, ImageFormat::Bmp)
            .unwrap();

        let reports = resize_all(&[png, bmp], 20, None);
        assert!(reports.iter().all(ResizeReport::is_ok));
        assert_ne!(reports[0].output, reports[1].output);

        let first = image::open(dir.path().join("cat-resized.png")).unwrap();
        assert_eq!(first.dimensions(), (20, 5));
        let second = image::open(dir.path().join("cat-bmp-resized.png")).unwrap();
        assert_eq!(second.dimensions(), (20, 20));
    }

    #[test]
    fn resize_file_writes_scaled_png() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("wide.png");
        write_png(&input, 400, 100);

        let output = dir.path().join("wide-resized.png");
        let report = resize_file(&input, 200, &output).unwrap();
        assert_eq!(report.original, Some((400, 100)));
        assert_eq!(report.resized, Some((200, 50)));
        let written = image::open(dir.path().join("wide-resized.png")).unwrap();
        assert_eq!(written.dimensions(), (200, 50));
    }

    #[test]
    fn resize_all_isolates_failures() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.png");
        write_png(&good, 10, 10);
        let bad = dir.path().join("bad.png");
        std::fs::write(&bad, b"not an image").unwrap();

        let reports = resize_all(&[good, bad], 800, None);
        assert_eq!(reports.len(), 2);
        assert!(reports[0].is_ok());
        assert!(!reports[1].is_ok());
        assert!(reports[1].error.as_deref().unwrap().contains("bad.png"));
    }

    #[test]
    fn expand_inputs_globs_and_passes_literals() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("a.png"), 1, 1);
        write_png(&dir.path().join("b.png"), 1, 1);
        let pattern = format!("{}/*.png", dir.path().display());
        let paths = expand_inputs(&[pattern, "missing.png".to_string()]).unwrap();
        assert_eq!(paths.len(), 3);
        assert_eq!(paths[2], PathBuf::from("missing.png"));

        let none = format!("{}/*.gif", dir.path().display());
        assert!(matches!(
            expand_inputs(&[none]),
            Err(AppError::NoImages { .. })
        ));
    }
}
