use std::io;
use std::process;

use prng_demo::demo;
use prng_demo::SeededRng;

fn main() {
    tracing_subscriber::fmt::init();

    let mut rng = SeededRng::from_time();
    tracing::debug!("seeded generator with {}", rng.seed());

    let mut stdout = io::stdout().lock();
    if let Err(e) = demo::run(&mut stdout, &mut rng) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
