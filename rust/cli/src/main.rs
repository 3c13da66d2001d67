use std::io;

fn main() {
    pokerhand_cli::logging::init_logging();
    let code = pokerhand_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
