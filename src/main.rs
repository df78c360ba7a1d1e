use std::{fs::File, io, sync::Mutex};

use color_eyre::eyre::WrapErr;
use molar_mass::{molar_mass, periodic_table};
use tracing_subscriber::fmt::MakeWriter;

mod app;
mod cli;
mod ui;

fn main() -> color_eyre::Result<()> {
    // setup
    color_eyre::install()?;
    let args = cli::molar_args().run();
    let interactive = args.formulas.is_empty() && !args.table;

    match &args.log_file {
        Some(path) => {
            let file = File::create(path)
                .wrap_err_with(|| format!("could not create log file {}", path.display()))?;
            init_logging(args.log_level, Mutex::new(file));
        }
        // logging to stderr would draw over the tui
        None if interactive => init_logging(args.log_level, io::sink),
        None => init_logging(args.log_level, io::stderr),
    }

    if args.table {
        for e in periodic_table() {
            println!(
                "{:>3}  {:<2}  {:<14} {:>12.*}",
                e.atomic_number, e.symbol, e.name, args.precision, e.molar_mass
            );
        }
        return Ok(());
    }

    if !interactive {
        for formula in &args.formulas {
            let mass = molar_mass(formula);
            println!("{formula}: {:.*} g/mol", args.precision, mass);
        }
        return Ok(());
    }

    let mut app = app::App::new(args.history, args.precision);
    ui::tui(&mut app)?;

    Ok(())
}

fn init_logging<W>(level: tracing::Level, writer: W)
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(writer)
        .with_ansi(false)
        .init();
}
