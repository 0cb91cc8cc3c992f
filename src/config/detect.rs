use crate::detector::CannyParams;
use crate::edges::LinkMode;
use crate::error::{Error, Result};
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_FILE: &str = "canny_edges.bmp";

#[derive(Clone, Debug)]
pub struct OutputConfig {
    pub image_out: PathBuf,
    pub json_out: Option<PathBuf>,
    pub debug_dir: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            image_out: PathBuf::from(DEFAULT_OUTPUT_FILE),
            json_out: None,
            debug_dir: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct DetectConfig {
    pub input_path: PathBuf,
    pub output: OutputConfig,
    pub params: CannyParams,
}

pub fn usage(program: &str) -> String {
    format!(
        "Usage: {program} <image> [--low N] [--high N] [--iterative] \
         [--out PATH] [--json PATH] [--debug-dir DIR]"
    )
}

pub fn parse_cli<I>(program: &str, mut args: I) -> Result<DetectConfig>
where
    I: Iterator<Item = String>,
{
    let mut input_path: Option<PathBuf> = None;
    let mut output = OutputConfig::default();
    let mut params = CannyParams::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--low" => params.low_threshold = parse_threshold(program, &mut args, "--low")?,
            "--high" => params.high_threshold = parse_threshold(program, &mut args, "--high")?,
            "--iterative" => params.link_mode = LinkMode::Iterative,
            "--out" => {
                output.image_out = PathBuf::from(require_value(program, &mut args, "--out")?);
            }
            "--json" => {
                output.json_out = Some(PathBuf::from(require_value(program, &mut args, "--json")?));
            }
            "--debug-dir" => {
                output.debug_dir =
                    Some(PathBuf::from(require_value(program, &mut args, "--debug-dir")?));
            }
            other if other.starts_with("--") => {
                return Err(Error::Usage(format!(
                    "unknown flag {other}\n{}",
                    usage(program)
                )));
            }
            _ => {
                if input_path.replace(PathBuf::from(&arg)).is_some() {
                    return Err(Error::Usage(format!(
                        "unexpected extra argument {arg}\n{}",
                        usage(program)
                    )));
                }
            }
        }
    }

    let input_path = input_path.ok_or_else(|| Error::Usage(usage(program)))?;
    if params.low_threshold >= params.high_threshold {
        return Err(Error::Usage(format!(
            "--low must be below --high (got {} and {})",
            params.low_threshold, params.high_threshold
        )));
    }

    Ok(DetectConfig {
        input_path,
        output,
        params,
    })
}

fn require_value<I>(program: &str, args: &mut I, flag: &str) -> Result<String>
where
    I: Iterator<Item = String>,
{
    args.next()
        .ok_or_else(|| Error::Usage(format!("{flag} requires a value\n{}", usage(program))))
}

fn parse_threshold<I>(program: &str, args: &mut I, flag: &str) -> Result<u8>
where
    I: Iterator<Item = String>,
{
    let raw = require_value(program, args, flag)?;
    raw.parse().map_err(|_| {
        Error::Usage(format!(
            "{flag} expects an integer in [0, 255], got {raw}\n{}",
            usage(program)
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<DetectConfig> {
        parse_cli("edge-detector", args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn positional_path_with_defaults() {
        let config = parse(&["photo.bmp"]).unwrap();
        assert_eq!(config.input_path, PathBuf::from("photo.bmp"));
        assert_eq!(config.output.image_out, PathBuf::from(DEFAULT_OUTPUT_FILE));
        assert!(config.output.json_out.is_none());
        assert!(config.output.debug_dir.is_none());
        assert_eq!(config.params.low_threshold, 10);
        assert_eq!(config.params.high_threshold, 75);
        assert_eq!(config.params.link_mode, LinkMode::SingleHop);
    }

    #[test]
    fn flags_override_defaults() {
        let config = parse(&[
            "photo.png",
            "--low",
            "20",
            "--high",
            "120",
            "--iterative",
            "--out",
            "edges.png",
            "--json",
            "report.json",
        ])
        .unwrap();
        assert_eq!(config.params.low_threshold, 20);
        assert_eq!(config.params.high_threshold, 120);
        assert_eq!(config.params.link_mode, LinkMode::Iterative);
        assert_eq!(config.output.image_out, PathBuf::from("edges.png"));
        assert_eq!(config.output.json_out, Some(PathBuf::from("report.json")));
    }

    #[test]
    fn flags_may_precede_the_input_path() {
        let config = parse(&["--low", "5", "photo.bmp"]).unwrap();
        assert_eq!(config.input_path, PathBuf::from("photo.bmp"));
        assert_eq!(config.params.low_threshold, 5);
    }

    #[test]
    fn missing_input_path_is_a_usage_error() {
        assert!(matches!(parse(&[]), Err(Error::Usage(_))));
        assert!(matches!(parse(&["--iterative"]), Err(Error::Usage(_))));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(matches!(
            parse(&["photo.bmp", "--sharpen"]),
            Err(Error::Usage(_))
        ));
    }

    #[test]
    fn extra_positional_argument_is_rejected() {
        assert!(matches!(
            parse(&["one.bmp", "two.bmp"]),
            Err(Error::Usage(_))
        ));
    }

    #[test]
    fn flag_without_value_is_rejected() {
        assert!(matches!(parse(&["photo.bmp", "--low"]), Err(Error::Usage(_))));
        assert!(matches!(parse(&["photo.bmp", "--out"]), Err(Error::Usage(_))));
    }

    #[test]
    fn non_numeric_threshold_is_rejected() {
        assert!(matches!(
            parse(&["photo.bmp", "--high", "lots"]),
            Err(Error::Usage(_))
        ));
    }

    #[test]
    fn inverted_thresholds_are_rejected() {
        assert!(matches!(
            parse(&["photo.bmp", "--low", "80", "--high", "75"]),
            Err(Error::Usage(_))
        ));
        assert!(matches!(
            parse(&["photo.bmp", "--low", "75"]),
            Err(Error::Usage(_))
        ));
    }
}
