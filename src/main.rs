//! rsessionstats main entrypoint.

use rsessionstats::run;
use rsessionstats::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
