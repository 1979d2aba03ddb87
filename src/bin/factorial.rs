//! Computes `n!` and prints it in base 16.
//!
//! Reads `n` from standard input, starts from 1 and multiplies by each of
//! `2..=n` in turn, replacing the accumulator every iteration. The previous
//! accumulator drops when it is replaced.

use std::io::{self, Write};
use std::process::ExitCode;

use limbint::BigInt;

fn main() -> ExitCode {
	stderrlog::new().module(module_path!()).verbosity(2).init().ok();

	match run() {
		Ok(()) => ExitCode::SUCCESS,
		Err(message) => {
			log::error!("{}", message);
			ExitCode::FAILURE
		},
	}
}

fn run() -> Result<(), String> {
	print!("Enter n: ");
	io::stdout().flush().map_err(|e| e.to_string())?;

	let mut line = String::new();
	io::stdin().read_line(&mut line).map_err(|e| e.to_string())?;
	let n: u64 = line.trim().parse().map_err(|_| "expected a non-negative integer".to_string())?;

	let mut number = BigInt::try_from_u64(1).map_err(|e| e.to_string())?;
	for i in 2..=n {
		number = number.try_mul_u64(i).map_err(|e| e.to_string())?;
	}

	let stdout = io::stdout();
	let mut out = stdout.lock();
	write!(out, "{}! = ", n).map_err(|e| e.to_string())?;
	number.print_hex(&mut out).map_err(|e| e.to_string())?;
	writeln!(out).map_err(|e| e.to_string())?;
	Ok(())
}
