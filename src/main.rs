fn main() {
    if let Err(err) = compgen::run() {
        compgen::report(&err);
        std::process::exit(1);
    }
}
