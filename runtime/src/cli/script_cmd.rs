//! `clickmap script` — print the page-context extraction script.

use crate::cli::output;
use crate::script::CLICKABLES_SCRIPT;
use anyhow::Result;

/// Run the script command.
pub fn run() -> Result<()> {
    if output::is_json() {
        return output::print_json(&serde_json::json!({ "script": CLICKABLES_SCRIPT }));
    }
    print!("{CLICKABLES_SCRIPT}");
    Ok(())
}
