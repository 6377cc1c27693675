mod cli;
mod logging;

use std::error::Error;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use overpad_gamepad::{load_gamepad, ButtonKind, Gamepad, LoadError};
use overpad_surface::{ScreenSize, SoftwareSurface};

use crate::cli::{Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::setup(cli.verbose, cli.no_color);

    match cli.command {
        Command::Check { file, screen } => check(&file, screen),
        Command::Layout { file, screen } => layout(&file, screen),
    }
}

fn check(file: &Path, screen: ScreenSize) -> ExitCode {
    match load(file, screen) {
        Ok((pad, _)) => {
            print_info!("{}: {} button(s)", file.display(), pad.len());
            ExitCode::SUCCESS
        }
        Err(err) => report(file, &err),
    }
}

fn layout(file: &Path, screen: ScreenSize) -> ExitCode {
    match load(file, screen) {
        Ok((pad, surface)) => {
            for button in &pad {
                let key = button.color_key;
                print_info!(
                    "{:<24} {:<6} x={:<6} y={:<6} {}x{} key #{:02x}{:02x}{:02x}",
                    button.name(),
                    kind_name(&button.kind),
                    button.x(&surface),
                    button.y(&surface),
                    button.width,
                    button.height,
                    key.r,
                    key.g,
                    key.b,
                );
            }
            ExitCode::SUCCESS
        }
        Err(err) => report(file, &err),
    }
}

fn load(
    file: &Path,
    screen: ScreenSize,
) -> Result<(Gamepad<SoftwareSurface>, SoftwareSurface), LoadError> {
    print_debug!("resolving against a {}x{} screen", screen.width, screen.height);
    let mut surface = SoftwareSurface::new(screen.width, screen.height);
    let pad = load_gamepad(file, &mut surface)?;
    Ok((pad, surface))
}

fn kind_name(kind: &ButtonKind) -> &'static str {
    match kind {
        ButtonKind::Unset => "unset",
        ButtonKind::Quit => "quit",
        ButtonKind::Key { .. } => "key",
        ButtonKind::Wheel { .. } => "wheel",
        ButtonKind::Stick { .. } => "stick",
    }
}

fn report(file: &Path, err: &LoadError) -> ExitCode {
    print_error!("{}: {err}", file.display());
    if let LoadError::Invalid { reason, .. } = err {
        let mut source = reason.source();
        while let Some(cause) = source {
            print_error!("  caused by: {cause}");
            source = cause.source();
        }
    }
    ExitCode::FAILURE
}
