use std::io;

fn main() {
    cardduel_cli::logging::init_logging();
    let code = cardduel_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
