use std::io;

use anyhow::{Context, Result};

use idea_recorder::{logger, Config, Recorder, SystemClock};

fn main() -> Result<()> {
    logger::init_tracing();

    let recorder = Recorder::new(Config::default(), SystemClock);

    let stdin = io::stdin();
    let stdout = io::stdout();
    recorder
        .record(&mut stdin.lock(), &mut stdout.lock())
        .context("failed to record idea")?;

    Ok(())
}
