fn main() {
    if let Err(e) = jsonmend::cli::run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
