//! `--show-config`: the resolved configuration with the source of each value.
//!
//! # Example Output
//!
//! ```json
//! {
//!   "log_filter": {
//!     "source": "default",
//!     "value": "warn"
//!   },
//!   "seed": {
//!     "source": "cli",
//!     "value": 42
//!   }
//! }
//! ```

use crate::config::ConfigResolved;
use crate::error::CliError;
use std::io::Write;

pub fn handle_show_config(resolved: &ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "log_filter": {
            "value": config.log_filter,
            "source": sources.log_filter,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
