#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]

fn main() {
    env_logger::init();
    if let Err(err) = site_grid::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
