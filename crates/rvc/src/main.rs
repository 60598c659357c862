//! `rv` - sample and estimate random-variable expressions.

use rvc::{init_tracing, run_args, USAGE};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() || matches!(args[0].as_str(), "help" | "--help" | "-h") {
        println!("{USAGE}");
        return;
    }

    init_tracing();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = run_args(&args, &mut out) {
        eprintln!("error: {err}");
        if err.is_usage() {
            eprintln!();
            eprintln!("{USAGE}");
        }
        std::process::exit(1);
    }
}
