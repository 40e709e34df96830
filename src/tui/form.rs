//! Interactive generation form.

use chrono::Local;
use tracing::debug;

use super::input::{get_numeric_input, get_text_input, get_yes_no};
use crate::error::{Error, Result};
use crate::history;
use crate::pass::{self, Batch, CharClass, GenerationConfig, entropy};
use crate::settings::Settings;
use crate::terminal::{
    box_bottom, box_line, box_top, clear, print_error, print_warning, reset_terminal,
};

/// Ask for every field, generate, show the batch, offer to save.
/// Esc at any prompt leaves without generating.
pub fn run(settings: &Settings) -> Result<()> {
    reset_terminal();
    clear();

    box_top("Password Generator");
    box_line("Esc cancels, Enter keeps the value shown.");
    box_bottom();
    println!();

    let Some(config) = ask_config(settings) else {
        println!("Cancelled.");
        return Ok(());
    };
    debug!(?config, "Interactive generation config");

    let batch = match pass::generate(&config) {
        Ok(batch) => batch,
        Err(Error::InvalidConfig(reason)) => {
            print_error(&reason);
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    println!();
    if batch.is_widened() {
        print_warning(&format!(
            "Password length ({}) is too short for selected types ({}). Generating with length {}.",
            batch.requested_length(),
            config.classes.len(),
            batch.effective_length()
        ));
        println!();
    }
    show_batch(&batch, &config);

    offer_save(&batch, settings)
}

fn ask_config(settings: &Settings) -> Option<GenerationConfig> {
    let mut config = settings.generation_config();

    config.length = get_numeric_input("Password length", config.length)?;
    config.count = get_numeric_input(
        &format!("Number of passwords (max {})", config.max_count),
        config.count,
    )?;

    config.classes.clear();
    for class in CharClass::ALL {
        let enabled = settings.classes().contains(&class);
        if get_yes_no(class.label(), enabled)? {
            config.classes.insert(class);
        }
    }

    if config.classes.contains(&CharClass::Special) {
        let current = settings.special_chars.as_deref().unwrap_or("");
        let custom = get_text_input("Custom special chars (empty for default)", current)?;
        config.special_chars = (!custom.is_empty()).then_some(custom);
    }

    Some(config)
}

fn show_batch(batch: &Batch, config: &GenerationConfig) {
    let bits = config.entropy_bits();

    box_top("Your Generated Password(s)");
    for pass in batch {
        box_line(pass);
    }
    box_bottom();
    println!(
        "Entropy: {bits:.1} bits ({}) \u{2022} Charset: {} chars",
        entropy::strength(bits),
        config.charset().size()
    );
    println!();
}

fn offer_save(batch: &Batch, settings: &Settings) -> Result<()> {
    let path = history::resolve_path(&settings.output_file);
    let prompt = format!("Save passwords to {}?", path.display());

    if get_yes_no(&prompt, false) == Some(true) {
        history::append_batch(&path, batch.passwords(), &Local::now())?;
        println!("Passwords saved to {}!", path.display());
    }
    Ok(())
}
