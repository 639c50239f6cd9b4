//! Ctrl-C handling.

use crate::INTERRUPTED_BANNER;
use tracing::warn;

/// On Ctrl-C: log, print the interrupt banner and exit with status 1.
///
/// A partially copied export folder is left as is.
pub fn install_interrupt_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        warn!("Interrupted by operator (Ctrl-C)");
        println!();
        println!("{}", INTERRUPTED_BANNER);
        std::process::exit(1);
    })
}
