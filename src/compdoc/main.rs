use clap::Parser;

mod args;
mod cli;

fn main() {
    if let Err(e) = cli::run(args::Cli::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
