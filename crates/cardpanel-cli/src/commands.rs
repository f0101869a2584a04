//! Subcommand execution.
//!
//! Commands write their output to any [`Write`] and read confirmations from
//! any [`BufRead`], so they run the same against a terminal and in tests.

use crate::{
    cli::Command,
    config::PanelConfig,
    prompt::confirm,
    render::{write_identifier, write_status, write_view},
};
use anyhow::Context;
use cardpanel_core::CardSource;
use cardpanel_network::CardService;
use cardpanel_panel::{
    LiveResult, LiveSearch, PanelController, StatusLevel, StatusMessage,
    controller::{RESET_PROMPT, removal_prompt},
};
use cardpanel_search::{SearchKind, SearchQuery};
use std::io::{BufRead, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, warn};

/// Run one command. Returns `false` when it ended with an error status.
pub async fn run_command<S>(
    command: Command,
    controller: &mut PanelController<S>,
    config: &PanelConfig,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<bool>
where
    S: CardService + 'static,
{
    let source = command.source(config.default_view);
    debug!(?command, source = %source, "Running command");

    match command {
        Command::Count => {
            let count = controller.count().await.context("Error loading count")?;
            writeln!(out, "Stored cards: {count}")?;
        }
        Command::List { .. } => {
            let view = controller
                .show(source)
                .await
                .with_context(|| load_error(source))?;
            write_view(out, &view)?;
        }
        Command::Search { query, by, .. } => {
            controller.select_view(source);
            let view = controller
                .search(SearchQuery::new(by, &query))
                .await
                .with_context(|| load_error(source))?;
            write_view(out, &view)?;
            return Ok(view.search.is_none_or(|summary| summary.found > 0));
        }
        Command::Live { by, .. } => {
            let mut live = LiveSearch::new(
                controller.service().clone(),
                source,
                config.search_debounce(),
            );
            controller.select_view(source);
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            run_live(controller, &mut live, by, stdin, out).await?;
        }
        Command::Add { id, name } => {
            let status = controller.add_card(&id, &name).await;
            return finish(out, &status);
        }
        Command::Remove { id, yes } => {
            let mut failure = None;
            let status = controller
                .remove_card(&id, |card_id| {
                    yes || confirmed(confirm(&removal_prompt(card_id), input, out), &mut failure)
                })
                .await;
            return conclude(out, status, failure);
        }
        Command::Reset { yes } => {
            let mut failure = None;
            let status = controller
                .reset(|| yes || confirmed(confirm(RESET_PROMPT, input, out), &mut failure))
                .await;
            return conclude(out, status, failure);
        }
        Command::Check { id } => {
            let exists = controller.check_card(&id).await?;
            writeln!(out, "{}", if exists { "Card exists" } else { "Card not found" })?;
            return Ok(exists);
        }
        Command::ShowId { id } => write_identifier(out, &id)?,
    }

    Ok(true)
}

/// Feed lines from `reader` into a live search until end of input.
///
/// An empty line clears the search and shows the whole listing again.
/// `:view` switches between the default and the full listing, and
/// `:by id` or `:by name` changes what the current query is matched against.
pub async fn run_live<S, R>(
    controller: &mut PanelController<S>,
    live: &mut LiveSearch<S>,
    kind: SearchKind,
    reader: R,
    out: &mut impl Write,
) -> anyhow::Result<()>
where
    S: CardService + 'static,
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut kind = kind;
    let mut text = String::new();

    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => match LiveInput::parse(&line) {
                    LiveInput::ToggleView => {
                        live.cancel();
                        let view = controller.toggle_view().await?;
                        live.set_source(controller.session().view());
                        debug!(source = %view.source, "Live search view switched");
                        let view = if text.is_empty() {
                            view
                        } else {
                            controller
                                .refilter(SearchQuery::new(kind, &text))
                                .unwrap_or(view)
                        };
                        write_view(out, &view)?;
                    }
                    LiveInput::SearchBy(Ok(next)) => {
                        kind = next;
                        let query = SearchQuery::new(kind, &text);
                        if !query.is_empty() {
                            live.cancel();
                            match controller.refilter(query.clone()) {
                                Some(view) => write_view(out, &view)?,
                                None => {
                                    live.input(query);
                                }
                            }
                        }
                    }
                    LiveInput::SearchBy(Err(err)) => {
                        warn!(error = %err, "Ignoring search type change");
                        write_status(out, &StatusMessage::from(&err))?;
                    }
                    LiveInput::Query(line) => {
                        text = line;
                        let query = SearchQuery::new(kind, &text);
                        if query.is_empty() {
                            live.input(query);
                            let view = controller.clear_search().await?;
                            write_view(out, &view)?;
                        } else {
                            live.input(query);
                        }
                    }
                },
                None => break,
            },
            Some(result) = live.next_result() => write_live_result(out, result)?,
        }
    }

    // Input ended; show the answer to the last query typed.
    let last = if live.is_pending() {
        live.next_result().await
    } else {
        live.try_next_result()
    };
    if let Some(result) = last {
        write_live_result(out, result)?;
    }

    info!("Live search finished");
    Ok(())
}

/// One line of live-search input.
enum LiveInput {
    ToggleView,
    SearchBy(cardpanel_core::Result<SearchKind>),
    Query(String),
}

impl LiveInput {
    fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed == ":view" {
            return LiveInput::ToggleView;
        }
        match trimmed.strip_prefix(":by ") {
            Some(kind) => LiveInput::SearchBy(kind.parse()),
            None => LiveInput::Query(line.to_string()),
        }
    }
}

fn write_live_result(out: &mut impl Write, result: LiveResult) -> anyhow::Result<()> {
    match result.result {
        Ok(view) => write_view(out, &view)?,
        Err(err) => write_status(out, &StatusMessage::from(&err))?,
    }
    Ok(())
}

/// A prompt that could not be read or written declines, keeping the error.
fn confirmed(answer: std::io::Result<bool>, failure: &mut Option<std::io::Error>) -> bool {
    answer.unwrap_or_else(|err| {
        warn!(error = %err, "Confirmation prompt failed");
        *failure = Some(err);
        false
    })
}

/// Report the outcome of a confirmed operation.
fn conclude(
    out: &mut impl Write,
    status: Option<StatusMessage>,
    failure: Option<std::io::Error>,
) -> anyhow::Result<bool> {
    if let Some(err) = failure {
        return Err(err).context("Failed to read confirmation");
    }

    match status {
        Some(status) => finish(out, &status),
        None => {
            writeln!(out, "Cancelled")?;
            Ok(true)
        }
    }
}

fn finish(out: &mut impl Write, status: &StatusMessage) -> anyhow::Result<bool> {
    write_status(out, status)?;
    Ok(status.level != StatusLevel::Error)
}

fn load_error(source: CardSource) -> &'static str {
    match source {
        CardSource::Defaults => "Error loading default cards",
        CardSource::All => "Error loading cards",
    }
}
