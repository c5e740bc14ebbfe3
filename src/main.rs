// xls - A fast, colorized directory listing tool for POSIX systems

use std::process;

fn main() {
    let status = xls::run(std::env::args().skip(1));
    process::exit(status);
}
