use std::process;

fn main() {
    if let Err(e) = gradlespec_cli::main(std::env::args().collect::<Vec<String>>().as_slice()) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
