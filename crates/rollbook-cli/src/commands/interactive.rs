//! The `rollbook shell` command (also the default).

use std::io;

use anyhow::Result;

use rollbook_core::seed_store;

use crate::commands::SessionArgs;
use crate::shell::Shell;

pub fn execute(session: SessionArgs) -> Result<()> {
    let config = session.load_config()?;
    let mut store = seed_store(&config);
    tracing::info!(
        records = store.len(),
        style = %config.listing_style,
        "starting shell"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell =
        Shell::new(&mut store, stdin.lock(), stdout.lock()).with_style(config.listing_style);

    if config.load_samples && config.show_banner {
        shell.print_banner()?;
    }
    shell.run()?;

    Ok(())
}
