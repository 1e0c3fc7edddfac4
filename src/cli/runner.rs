//! Read-eval loop driving a `HelpSession` from line commands.

use crate::cli::{Command, USAGE};
use crate::content::Paragraph;
use crate::error::Result;
use crate::help::{EditState, HelpSession, OpenOutcome, SaveOutcome, SaveRejection};
use crate::richtext::{content_to_document, encode_block};
use log::{debug, info};
use std::io::{BufRead, Write};
use std::time::Instant;

/// Run commands from `input` until `quit` or end of input.
///
/// Parse errors are reported on `output` and do not stop the loop. Every line
/// counts as one idle tick for the deferred editor apply.
pub fn run<R: BufRead, W: Write>(
    session: &mut HelpSession,
    input: R,
    output: &mut W,
) -> Result<()> {
    write_status(session, output)?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(document) = session.poll_editor_apply(Instant::now()) {
            debug!("Editor content applied ({} paragraph(s))", document.blocks.len());
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(message) => {
                writeln!(output, "error: {}", message)?;
                continue;
            }
        };

        if command == Command::Quit {
            break;
        }
        execute(session, command, output)?;
        output.flush()?;
    }

    info!("Help session ended");
    Ok(())
}

/// Apply one command and describe the result.
pub fn execute<W: Write>(session: &mut HelpSession, command: Command, output: &mut W) -> Result<()> {
    match command {
        Command::Section(section) => {
            session.select_section(section);
            write_status(session, output)?;
        }
        Command::Subsection(subsection) => {
            if session.select_subsection(subsection) {
                write_status(session, output)?;
            } else {
                let available: Vec<&str> = session
                    .subsection_options()
                    .iter()
                    .map(|s| s.value())
                    .collect();
                writeln!(
                    output,
                    "'{}' is not available here; choose from: {}",
                    subsection,
                    available.join(", ")
                )?;
            }
        }
        Command::Kind(kind) => {
            session.select_content_kind(kind);
            write_status(session, output)?;
        }
        Command::Lang(language) => {
            session.select_language(language);
            write_status(session, output)?;
        }
        Command::List => write_list(session, output)?,
        Command::Show => write_active(session, output)?,
        Command::Open(index) => match session.open_item(index) {
            OpenOutcome::Opened => write_active(session, output)?,
            OpenOutcome::Conflict => {
                let current = session.active_item().map(|item| item.index).unwrap_or(0);
                writeln!(
                    output,
                    "item {} has unsaved changes; use 'discard' to switch or 'keep' to stay",
                    current
                )?;
            }
            OpenOutcome::NotFound => writeln!(output, "no item at index {}", index)?,
        },
        Command::Title(title) => {
            if session.edit_title(title) {
                writeln!(output, "title updated")?;
            } else {
                writeln!(output, "no item is open")?;
            }
        }
        Command::Body(paragraphs) => {
            let content: Vec<Paragraph> = paragraphs.into_iter().map(Paragraph::new).collect();
            if session.edit_content(content_to_document(&content)) {
                writeln!(output, "body updated ({} paragraph(s))", content.len())?;
            } else {
                writeln!(output, "no item is open")?;
            }
        }
        Command::Bold { block, start, end } => {
            if session.toggle_bold(block, start, end) {
                write_draft_body(session, output)?;
            } else {
                writeln!(output, "no paragraph {} in the open item", block)?;
            }
        }
        Command::Save => {
            let message = match session.save_draft() {
                SaveOutcome::Saved => "saved",
                SaveOutcome::Rejected(SaveRejection::EmptyTitle) => "not saved: the title is empty",
                SaveOutcome::Rejected(SaveRejection::EmptyContent) => "not saved: the body is empty",
                SaveOutcome::NoActiveItem => "nothing to save",
            };
            writeln!(output, "{}", message)?;
        }
        Command::Add | Command::Move { .. } | Command::Remove(_)
            if !session.content_kind().is_list() =>
        {
            writeln!(
                output,
                "{} holds a single entry; add, move and remove do not apply",
                session.content_kind()
            )?;
        }
        Command::Add => {
            session.add_item();
            write_list(session, output)?;
        }
        Command::Move { from, to } => {
            session.reorder_items(from, to);
            write_list(session, output)?;
        }
        Command::Remove(index) => {
            session.remove_item(index);
            write_list(session, output)?;
        }
        Command::Discard => {
            if session.discard_and_switch() {
                write_active(session, output)?;
            } else {
                writeln!(output, "no pending switch")?;
            }
        }
        Command::Keep => {
            if session.keep_editing() {
                writeln!(output, "kept editing item {}", active_index(session))?;
            } else {
                writeln!(output, "no pending switch")?;
            }
        }
        Command::Help => {
            for (usage, description) in USAGE {
                writeln!(output, "  {:<20} {}", usage, description)?;
            }
        }
        Command::Quit => {}
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Output
// ─────────────────────────────────────────────────────────────────────────────

fn active_index(session: &HelpSession) -> String {
    session
        .active_item()
        .map(|item| item.index.to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn write_status<W: Write>(session: &HelpSession, output: &mut W) -> Result<()> {
    match session.coordinate() {
        Some(coordinate) => writeln!(
            output,
            "[{} / {} / {}] {} item(s)",
            coordinate,
            session.content_kind(),
            session.language(),
            session.list_projection().len()
        )?,
        None => writeln!(
            output,
            "[{} / {} / {}] no content for this section",
            session.section(),
            session.content_kind(),
            session.language()
        )?,
    }
    Ok(())
}

fn write_list<W: Write>(session: &HelpSession, output: &mut W) -> Result<()> {
    let active = session.active_item().map(|item| item.index);
    let entries = session.list_projection();
    if entries.is_empty() {
        writeln!(output, "(no items)")?;
    }
    for entry in entries {
        let marker = if Some(entry.index) == active { '*' } else { ' ' };
        writeln!(output, "{}{:>3}  {}", marker, entry.index, entry.label)?;
    }
    Ok(())
}

fn write_active<W: Write>(session: &HelpSession, output: &mut W) -> Result<()> {
    let Some(draft) = session.draft() else {
        writeln!(output, "No data for selected")?;
        return Ok(());
    };
    let modified = if draft.is_modified() { " (modified)" } else { "" };
    writeln!(output, "#{} {}{}", draft.item.index, draft.title, modified)?;
    write_draft_body(session, output)?;
    if let EditState::PendingConflict { requested, .. } = session.state() {
        writeln!(output, "pending switch to item {}", requested.index)?;
    }
    Ok(())
}

fn write_draft_body<W: Write>(session: &HelpSession, output: &mut W) -> Result<()> {
    if let Some(draft) = session.draft() {
        for block in &draft.document.blocks {
            writeln!(output, "  | {}", encode_block(block))?;
        }
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
