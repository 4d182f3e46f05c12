//! colfit - Drop rows from aligned text reports and re-fit the columns.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use colfit::{run, CliArgs, Diagnostics};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let mut diag = match &args.log {
        Some(path) => match Diagnostics::to_file(args.level(), path) {
            Ok(diag) => diag,
            Err(err) => {
                let mut diag = Diagnostics::stderr(args.level());
                diag.error(format_args!("opening log {}: {}", path.display(), err));
                return ExitCode::FAILURE;
            }
        },
        None => Diagnostics::stderr(args.level()),
    };

    let output = match run(&args, &mut diag) {
        Ok(output) => output,
        Err(err) => {
            diag.error(format_args!("{err:#}"));
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout().lock();
    match stdout.write_all(output.as_bytes()).and_then(|()| stdout.flush()) {
        Ok(()) => ExitCode::SUCCESS,
        // Downstream closed the pipe (e.g. `| head`); nothing left to report.
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(err) => {
            diag.error(format_args!("writing output: {err}"));
            ExitCode::FAILURE
        }
    }
}
