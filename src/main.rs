use edge_detector::config::detect;
use edge_detector::gray::{gray_to_rgb, rgb_to_gray};
use edge_detector::image::io::{
    load_color_image, save_color_image, save_grayscale_f32, save_grayscale_u8, write_json_file,
};
use edge_detector::image::ImageRgb8;
use edge_detector::{blur, edges, EdgeDetection, EdgeDetector, Result};
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "edge-detector".to_string());
    let config = detect::parse_cli(&program, args)?;

    let image = load_color_image(&config.input_path)?;
    let detector = EdgeDetector::new(config.params);
    let detection = detector.process(&image);

    save_color_image(&gray_to_rgb(&detection.edges), &config.output.image_out)?;

    if let Some(path) = &config.output.json_out {
        write_json_file(path, &detection.report)?;
    }
    if let Some(dir) = &config.output.debug_dir {
        save_debug_artifacts(dir, &image, &detection)?;
    }

    println!(
        "Canny edge detection complete. Output saved as {}",
        config.output.image_out.display()
    );
    Ok(())
}

/// Re-runs the intermediate stages and dumps each grid alongside the report.
fn save_debug_artifacts(dir: &Path, image: &ImageRgb8, detection: &EdgeDetection) -> Result<()> {
    let gray = rgb_to_gray(image);
    save_grayscale_u8(&gray, &dir.join("01_grayscale.png"))?;

    let smoothed = blur::gaussian_blur(&gray);
    save_grayscale_u8(&smoothed, &dir.join("02_blur.png"))?;

    let field = edges::magnitude_direction(&edges::sobel_gradients(&smoothed));
    save_grayscale_f32(&field.magnitude, &dir.join("03_magnitude.png"))?;
    save_grayscale_f32(&field.direction, &dir.join("04_direction.png"))?;

    let suppressed = edges::suppress_nonmaxima(&field);
    save_grayscale_u8(&suppressed, &dir.join("05_nms.png"))?;

    save_grayscale_u8(&detection.edges, &dir.join("06_edges.png"))?;
    write_json_file(&dir.join("report.json"), &detection.report)?;
    Ok(())
}
