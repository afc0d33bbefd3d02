use std::process;

fn main() {
    if let Err(e) = qrem::cli::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
