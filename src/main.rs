//! lolrus entry point.

fn main() {
    match lolrus::cli::run_cli() {
        Ok(code) => std::process::exit(code),
        Err(error) => {
            eprintln!("Error: {}", error);
            std::process::exit(1);
        }
    }
}
