use edge_detector::compare::similarity;
use edge_detector::config::compare;
use edge_detector::image::io::load_color_image;
use edge_detector::Result;
use std::env;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "compare_images".to_string());
    let config = compare::parse_cli(&program, args)?;

    let left = load_color_image(&config.left_path)?;
    let right = load_color_image(&config.right_path)?;
    let score = similarity(&left, &right)?;

    println!("The images are {score:.2}% similar.");
    Ok(())
}
