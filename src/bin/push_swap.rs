//! `push_swap`: print the operations that sort the given integers.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use push_swap::algs::sort_operations;
use push_swap::input::parse_args;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        return ExitCode::SUCCESS;
    }
    let values = match parse_args(&args) {
        Ok(values) => values,
        Err(e) => {
            log::debug!("rejecting input: {e}");
            eprintln!("Error");
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let written = sort_operations(&values)
        .iter()
        .try_for_each(|op| writeln!(out, "{op}"))
        .and_then(|()| out.flush());
    match written {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
