#![windows_subsystem = "windows"]

use std::{error::Error, io::Write, path::PathBuf, process, str::FromStr};

use iced::Settings;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

use worknet_ui::{component::text, font, theme};

use worknet_gui::{
    dir::WorknetDirectory,
    gui::{Config, GUI},
    VERSION,
};

#[derive(Debug, PartialEq)]
enum Arg {
    DatadirPath(WorknetDirectory),
}

fn parse_args(args: Vec<String>) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", VERSION);
        process::exit(1);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: worknet [OPTIONS]

Options:
    --datadir <PATH>    Path of worknet datadir
    -v, --version       Display worknet-gui version
    -h, --help          Print help
        "#
        );
        process::exit(1);
    }

    for (i, arg) in args.iter().enumerate() {
        if arg == "--datadir" {
            if let Some(a) = args.get(i + 1) {
                res.push(Arg::DatadirPath(WorknetDirectory::new(PathBuf::from(a))));
            } else {
                return Err("missing arg to --datadir".into());
            }
        } else if arg.contains("--") {
            return Err(format!("unknown option: {}", arg).into());
        }
    }

    Ok(res)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect())?;
    let config = match args.as_slice() {
        [] => {
            let datadir_path = WorknetDirectory::new_default()?;
            Config::new(datadir_path)
        }
        [Arg::DatadirPath(datadir_path)] => Config::new(datadir_path.clone()),
        _ => {
            return Err("Unknown args combination".into());
        }
    };

    let log_level = if let Ok(l) = std::env::var("LOG_LEVEL") {
        Some(LevelFilter::from_str(&l)?)
    } else {
        None
    };

    setup_panic_hook();

    let settings = Settings {
        id: Some("Worknet".to_string()),
        antialiasing: false,
        default_text_size: text::P1_SIZE.into(),
        default_font: font::REGULAR,
        ..Default::default()
    };

    let window_settings = iced::window::Settings {
        min_size: Some(iced::Size {
            width: 1000.0,
            height: 650.0,
        }),
        ..Default::default()
    };

    if let Err(e) = iced::application(GUI::title, GUI::update, GUI::view)
        .theme(|_| theme::Theme::default())
        .scale_factor(GUI::scale_factor)
        .subscription(GUI::subscription)
        .settings(settings)
        .window(window_settings)
        .run_with(move || GUI::new((config, log_level)))
    {
        log::error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or_else(|| "'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        std::io::stdout().flush().expect("Flushing stdout");
        std::process::exit(1);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        assert!(parse_args(vec!["worknet".into(), "--meth".into()]).is_err());
        assert!(parse_args(vec!["worknet".into(), "--datadir".into()]).is_err());
        assert_eq!(
            Some(vec![Arg::DatadirPath(WorknetDirectory::new(
                PathBuf::from("hello")
            ))]),
            parse_args(
                "worknet --datadir hello"
                    .split(' ')
                    .map(|a| a.to_string())
                    .collect()
            )
            .ok()
        );
        assert_eq!(Some(vec![]), parse_args(vec!["worknet".into()]).ok());
    }
}
