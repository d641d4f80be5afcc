//! `checker`: read instructions from stdin and report whether they sort the
//! given integers.

use std::io;
use std::process::ExitCode;

use push_swap::checker::check;
use push_swap::input::parse_args;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        return ExitCode::SUCCESS;
    }
    let verdict = parse_args(&args).and_then(|values| check(&values, io::stdin().lock()));
    match verdict {
        Ok(verdict) => {
            println!("{verdict}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("checker failed: {e}");
            eprintln!("Error");
            ExitCode::FAILURE
        }
    }
}
