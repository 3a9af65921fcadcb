fn main() {
    if let Err(err) = taskdeck::run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
