use std::error::Error as _;
use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use clap::error::ErrorKind;

use eventsize::cli::Cli;
use eventsize::error::{EventSizeError, exit_code};
use eventsize::model::rank_branches;
use eventsize::repository::{ReadSettings, open_events};
use eventsize::view::{RenderOptions, save_histogram_json, save_svg, write_listing};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exit_code::SUCCESS,
                _ => exit_code::USAGE,
            };
            let _ = err.print();
            process::exit(code);
        }
    };

    if let Err(err) = run(&cli) {
        eprintln!("eventsize: {err}");
        let mut source = err.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = cause.source();
        }
        process::exit(err.exit_code());
    }
}

fn run(cli: &Cli) -> Result<(), EventSizeError> {
    let path = cli
        .data_file
        .as_deref()
        .ok_or(EventSizeError::MissingDataFile)?;

    let settings = ReadSettings {
        no_index_load: cli.no_index_load,
    };
    let tree = open_events(path, settings)?;
    let ranking = rank_branches(&tree);

    let mut stdout = io::stdout().lock();
    write_listing(&mut stdout, path, tree.num_events, &ranking).map_err(|source| {
        EventSizeError::WriteOutput {
            path: PathBuf::from("<stdout>"),
            source,
        }
    })?;

    if let Some(plot_path) = &cli.plot {
        let options = RenderOptions {
            top: cli.plot_top,
            title: format!("{} branch size", tree.name),
            ..RenderOptions::default()
        };
        save_svg(plot_path, &ranking, &options)?;
        eprintln!("wrote plot: {}", plot_path.display());
    }

    if let Some(json_path) = &cli.save_histogram {
        save_histogram_json(json_path, &tree.name, &ranking, cli.plot_top)?;
        eprintln!("wrote histogram data: {}", json_path.display());
    }

    Ok(())
}
