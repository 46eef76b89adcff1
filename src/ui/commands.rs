use crate::config::Settings;
use crate::order::chunker::Chunker;
use crate::order::render::OutputFormat;
use crate::ui::theme::HELP;
use colored::Colorize;
use std::num::NonZeroUsize;
use termimad::MadSkin;
use tracing::debug;

pub struct AppState<'a> {
    pub settings: &'a mut Settings,
    pub skin: &'a MadSkin,
}

/// Runs a slash command. Returns `false` when the shell should exit.
///
/// `line` is taken as typed: everything after the first space is the raw
/// argument, so `/sep , ` sets `", "`.
pub fn handle_command(line: &str, state: &mut AppState<'_>) -> bool {
    let line = line.trim_start();
    let (command, raw) = line.split_once(' ').unwrap_or((line.trim_end(), ""));
    let rest = raw.trim();
    debug!(command, args = raw, "slash command");

    match command {
        "/help" => {
            state.skin.print_text(HELP);
        }
        "/exit" | "/quit" => {
            return false;
        }
        "/chunk" => {
            if !rest.is_empty() {
                match parse_chunk_size(rest) {
                    Ok(size) => state.settings.chunk_size = size.get(),
                    Err(e) => {
                        println!("{} {}", "✗".red(), e);
                        return true;
                    }
                }
            }
            println!("{}", format!("Pages per line: {}", state.settings.chunk_size).cyan());
        }
        "/sep" => {
            if !raw.is_empty() {
                state.settings.separator = unquote(raw).to_string();
            }
            println!("{}", format!("Separator: {:?}", state.settings.separator).cyan());
        }
        "/format" => {
            if !rest.is_empty() {
                match rest.parse::<OutputFormat>() {
                    Ok(format) => state.settings.format = format,
                    Err(e) => {
                        println!("{} {}", "✗".red(), e);
                        return true;
                    }
                }
            }
            println!("{}", format!("Output format: {:?}", state.settings.format).cyan());
        }
        "/settings" => {
            let s = &state.settings;
            println!("  chunk_size = {}", s.chunk_size);
            println!("  separator  = {:?}", s.separator);
            println!("  format     = {:?}", s.format);
            println!("  max_pages  = {}", s.max_pages);
        }
        _ => {
            println!("Unknown command: {} (try /help)", command.red());
        }
    }

    true
}

fn parse_chunk_size(raw: &str) -> Result<NonZeroUsize, String> {
    let n = raw.parse::<usize>().map_err(|e| format!("{raw:?}: {e}"))?;
    Chunker::size(n).map_err(|e| e.to_string())
}

/// `"..."` keeps surrounding whitespace inside the quotes.
fn unquote(raw: &str) -> &str {
    let trimmed = raw.trim();
    match trimmed.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
        Some(inner) => inner,
        None => raw,
    }
}
