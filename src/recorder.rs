use std::io::{BufRead, Write};

use tracing::debug;

use crate::config::Config;
use crate::domain::IdeaEntry;
use crate::error::IoFailure;
use crate::journal;
use crate::prompt;
use crate::time::Clock;

pub struct Recorder<C> {
    cfg: Config,
    clock: C,
}

impl<C: Clock> Recorder<C> {
    pub fn new(cfg: Config, clock: C) -> Self {
        Self { cfg, clock }
    }

    /// Prompt -> capture -> stamp -> append -> confirm.
    ///
    /// Each step runs only if the previous one succeeded, so the
    /// confirmation is written iff the entry reached the file.
    pub fn record<R, W>(&self, input: &mut R, output: &mut W) -> Result<IdeaEntry, IoFailure>
    where
        R: BufRead,
        W: Write,
    {
        debug!("recorder.prompt");
        let text = prompt::ask(&self.cfg.prompt, input, output)?;

        let entry = IdeaEntry::new(text, self.clock.now());
        debug!(
            timestamp = %entry.timestamp_str(),
            chars = entry.text.chars().count(),
            "recorder.captured"
        );

        journal::append_entry(&self.cfg.ideas_path, &entry)?;

        prompt::say(&self.cfg.confirmation, output)?;
        debug!(path = %self.cfg.ideas_path.display(), "recorder.saved");

        Ok(entry)
    }
}
