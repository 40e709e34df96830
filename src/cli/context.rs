//! CLI context - bundles settings, flags, and clipboard state.

use std::io::{BufWriter, Write};

use chrono::Local;
use copypasta::{ClipboardContext, ClipboardProvider};
use tracing::debug;
use zeroize::Zeroize;

use super::{CliFlags, prompts, quiet};
use crate::error::{Error, Result};
use crate::pass::{self, Batch};
use crate::settings::Settings;
use crate::{history, tui};

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    /// Parse command-line arguments. Exits with usage on parse errors,
    /// `--help` and `--version`.
    pub fn new(args: Vec<String>, settings: Settings) -> Self {
        use clap::Parser;

        Self {
            settings,
            flags: CliFlags::parse_from(args),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        quiet::set(self.flags.quiet);

        if self.flags.interactive {
            return tui::run(&self.settings);
        }

        let config = self.flags.to_config(&self.settings);
        debug!(?config, "CLI generation config");

        let batch = pass::generate(&config)?;
        if batch.is_widened() {
            prompts::length_widened(
                batch.requested_length(),
                batch.effective_length(),
                config.classes.len(),
            );
        }

        self.emit(&batch)?;

        if let Some(path) = self.flags.output_path(&self.settings) {
            history::append_batch(&path, batch.passwords(), &Local::now())?;
            prompts::passwords_saved(batch.len(), &path);
        }

        if self.settings.show_entropy {
            prompts::entropy_summary(config.entropy_bits());
        }
        Ok(())
    }

    fn emit(&self, batch: &Batch) -> Result<()> {
        if self.flags.clipboard {
            match ClipboardContext::new() {
                Ok(mut ctx) => return copy_to_clipboard(&mut ctx, batch),
                Err(e) => {
                    debug!(error = %e, "Clipboard unavailable");
                    if !prompts::clipboard_fallback_prompt() {
                        return Err(Error::Clipboard(e.to_string()));
                    }
                }
            }
        }
        print_batch(batch)
    }
}

fn copy_to_clipboard(ctx: &mut ClipboardContext, batch: &Batch) -> Result<()> {
    let mut passwords = batch.joined();
    let result = ctx.set_contents(passwords.clone());
    passwords.zeroize();

    result.map_err(|e| Error::Clipboard(e.to_string()))?;
    if let Ok(mut retrieved) = ctx.get_contents() {
        retrieved.zeroize();
    }
    prompts::clipboard_copied();
    Ok(())
}

fn print_batch(batch: &Batch) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for pass in batch {
        writeln!(out, "{pass}")?;
    }
    out.flush()?;
    Ok(())
}
