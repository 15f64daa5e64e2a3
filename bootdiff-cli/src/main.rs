fn main() {
    if let Err(e) = bootdiff_cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
