use std::time::Duration;
use tokio::time::{self, Instant};

// The unbounded variant of the periodic-tick demonstration: one tick per
// second until Ctrl-C. The bounded variant runs inside the main suite.
const PERIOD: Duration = Duration::from_secs(1);

#[tokio::main]
async fn main() {
    println!("ticking every {PERIOD:?}, Ctrl-C to stop");

    let mut ticker = time::interval_at(Instant::now() + PERIOD, PERIOD);
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                println!("plonk");
            }
            _ = tokio::signal::ctrl_c() => {
                println!("stopped");
                break;
            }
        }
    }
}
