use std::io::{stderr, stdout};
use std::process::exit;

fn main() {
    let code = klondike_cli::run(std::env::args(), &mut stdout(), &mut stderr());
    exit(code);
}
