use crate::error::{Error, Result};
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct CompareConfig {
    pub left_path: PathBuf,
    pub right_path: PathBuf,
}

pub fn usage(program: &str) -> String {
    format!("Usage: {program} <image> <image>")
}

pub fn parse_cli<I>(program: &str, mut args: I) -> Result<CompareConfig>
where
    I: Iterator<Item = String>,
{
    let left = args.next().map(PathBuf::from);
    let right = args.next().map(PathBuf::from);
    if args.next().is_some() {
        return Err(Error::Usage(usage(program)));
    }
    match (left, right) {
        (Some(left_path), Some(right_path)) => Ok(CompareConfig {
            left_path,
            right_path,
        }),
        _ => Err(Error::Usage(usage(program))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CompareConfig> {
        parse_cli("compare_images", args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn two_paths_parse() {
        let config = parse(&["a.bmp", "b.bmp"]).unwrap();
        assert_eq!(config.left_path, PathBuf::from("a.bmp"));
        assert_eq!(config.right_path, PathBuf::from("b.bmp"));
    }

    #[test]
    fn wrong_arity_is_a_usage_error() {
        assert!(matches!(parse(&[]), Err(Error::Usage(_))));
        assert!(matches!(parse(&["a.bmp"]), Err(Error::Usage(_))));
        assert!(matches!(
            parse(&["a.bmp", "b.bmp", "c.bmp"]),
            Err(Error::Usage(_))
        ));
    }
}
