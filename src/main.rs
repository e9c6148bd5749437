//! merge-config: fold new custom model entries into an existing config file

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
