//! rpunchclock main entrypoint.

use rpunchclock::run;

#[tokio::main]
async fn main() {
    println!();
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
