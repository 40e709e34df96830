//! Keystroke-level line input for the interactive form.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush};

/// Outcome of one keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    Continue,
    Submit,
    Cancel,
}

/// Apply `key` to `buf`. Characters rejected by `accept` are dropped, so a
/// digits-only field never holds anything else.
fn apply_key(buf: &mut Vec<char>, key: &KeyEvent, accept: fn(char) -> bool) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c' | 'q') if ctrl => KeyAction::Cancel,
        KeyCode::Char('u') if ctrl => {
            buf.clear();
            KeyAction::Continue
        }
        KeyCode::Esc => KeyAction::Cancel,
        KeyCode::Enter => KeyAction::Submit,
        KeyCode::Backspace => {
            buf.pop();
            KeyAction::Continue
        }
        KeyCode::Char(c) if !ctrl && accept(c) => {
            buf.push(c);
            KeyAction::Continue
        }
        _ => KeyAction::Continue,
    }
}

/// Read one line in raw mode, pre-filled with `initial`.
/// Returns `None` on Esc / Ctrl+C / Ctrl+Q.
fn read_filtered(prompt: &str, initial: &str, accept: fn(char) -> bool) -> Option<String> {
    let mut buf: Vec<char> = initial.chars().filter(|&c| accept(c)).collect();

    // Without a terminal there is nothing to edit; keep the default.
    let Ok(guard) = RawModeGuard::new() else {
        return Some(buf.into_iter().collect());
    };

    print!("{prompt}: {}", buf.iter().collect::<String>());
    flush();

    let mut shown = buf.len();
    let mut action = KeyAction::Continue;

    while action == KeyAction::Continue {
        match read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                action = apply_key(&mut buf, &key, accept);

                let text: String = buf.iter().collect();
                print!("\r{prompt}: {}", " ".repeat(shown + 1));
                print!("\r{prompt}: {text}");
                flush();
                shown = buf.len();
            }
            Ok(_) => {}
            Err(_) => action = KeyAction::Cancel,
        }
    }

    drop(guard);
    println!();

    match action {
        KeyAction::Submit => Some(buf.into_iter().collect()),
        _ => None,
    }
}

/// Digits-only entry. Empty input yields 0 so the core can reject it.
pub fn get_numeric_input(prompt: &str, initial_value: usize) -> Option<usize> {
    let initial = if initial_value > 0 {
        initial_value.to_string()
    } else {
        String::new()
    };
    let digits = read_filtered(prompt, &initial, |c| c.is_ascii_digit())?;
    if digits.is_empty() {
        return Some(0);
    }
    Some(digits.parse().unwrap_or(usize::MAX))
}

/// Free text entry.
pub fn get_text_input(prompt: &str, initial_value: &str) -> Option<String> {
    read_filtered(prompt, initial_value, |c| !c.is_control())
}

/// y/n question; Enter keeps `default`.
pub fn get_yes_no(prompt: &str, default: bool) -> Option<bool> {
    let hint = if default { "Y/n" } else { "y/N" };
    let answer = read_filtered(&format!("{prompt} [{hint}]"), "", |c| c.is_alphabetic())?;
    Some(parse_yes_no(&answer, default))
}

fn parse_yes_no(answer: &str, default: bool) -> bool {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    }
}
