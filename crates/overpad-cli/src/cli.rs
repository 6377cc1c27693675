use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

use overpad_surface::ScreenSize;

#[derive(Debug, Subcommand, PartialEq)]
pub(crate) enum Command {
    /// Validate a pad definition.
    Check {
        /// The pad definition file
        file: PathBuf,

        /// Screen size to resolve the layout against
        #[clap(long, default_value = "1920x1080", value_parser = parse_screen)]
        screen: ScreenSize,
    },
    /// Print the resolved button layout.
    Layout {
        /// The pad definition file
        file: PathBuf,

        /// Screen size to resolve the layout against
        #[clap(long, default_value = "1920x1080", value_parser = parse_screen)]
        screen: ScreenSize,
    },
}

/// Build and inspect on-screen gamepads from INI definitions.
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// Turn debugging information on
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// The command to run
    #[clap(subcommand)]
    pub command: Command,
}

fn parse_screen(value: &str) -> Result<ScreenSize, String> {
    let Some((width, height)) = value.split_once(['x', 'X']) else {
        return Err(format!("expected WIDTHxHEIGHT, got `{value}`"));
    };
    let width: i32 = width
        .trim()
        .parse()
        .map_err(|_| format!("bad width `{width}`"))?;
    let height: i32 = height
        .trim()
        .parse()
        .map_err(|_| format!("bad height `{height}`"))?;
    if width <= 0 || height <= 0 {
        return Err("screen dimensions must be positive".to_string());
    }
    Ok(ScreenSize { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_width_by_height() {
        let screen = parse_screen("1920x1080").expect("should parse");
        assert_eq!(
            screen,
            ScreenSize {
                width: 1920,
                height: 1080
            }
        );
    }

    #[test]
    fn accepts_an_uppercase_separator() {
        let screen = parse_screen("800X600").expect("should parse");
        assert_eq!(screen.width, 800);
    }

    #[test]
    fn rejects_missing_separator() {
        assert!(parse_screen("1920").is_err());
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        assert!(parse_screen("0x600").is_err());
        assert!(parse_screen("800x-600").is_err());
    }

    #[test]
    fn rejects_junk_dimensions() {
        assert!(parse_screen("wideXtall").is_err());
    }
}
