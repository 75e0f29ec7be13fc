use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Args;
use tokio::sync::mpsc;

use super::print_json;
use crate::application::controller::ViewController;
use crate::application::events::UiEvent;
use crate::domain::services::{Clipboard, ImageFetcher};
use crate::domain::validation::FormInput;
use crate::presentation::form::FormDocument;
use crate::presentation::web::templates::{ResultsPageTemplate, render_template};
use crate::presentation::web::views::{ImageCardView, ResultsView};

#[derive(Debug, Args)]
pub struct FetchCommand {
    #[arg(long, default_value = "")]
    pub item_name: String,
    #[arg(long, default_value = "")]
    pub option_name: String,
    /// Direct image URL
    #[arg(long, default_value = "")]
    pub image_url: String,
    /// Product page to scrape images from
    #[arg(long, default_value = "")]
    pub sales_url: String,
    /// Sales channel code, e.g. NAVER
    #[arg(long, default_value = "")]
    pub sales_channel: String,
    /// Print the rendered cards as JSON
    #[arg(long)]
    pub json: bool,
    /// Also write the results as a standalone HTML page
    #[arg(long)]
    pub html: Option<PathBuf>,
    /// Copy the URL of card N (1-based) to the terminal clipboard
    #[arg(long, value_name = "N")]
    pub copy: Option<NonZeroUsize>,
}

impl FetchCommand {
    pub fn input(&self) -> FormInput {
        FormInput {
            item_name: self.item_name.clone(),
            option_name: self.option_name.clone(),
            image_url: self.image_url.clone(),
            sales_url: self.sales_url.clone(),
            sales_channel: self.sales_channel.clone(),
        }
    }
}

pub async fn run(
    fetcher: Arc<dyn ImageFetcher>,
    clipboard: Arc<dyn Clipboard>,
    command: FetchCommand,
) -> Result<()> {
    let controller = ViewController::new(
        FormDocument::with_input(command.input()),
        fetcher,
        clipboard,
    );

    let (tx, rx) = mpsc::channel(4);
    let handle = tokio::spawn(controller.run(rx));

    tx.send(UiEvent::Submit).await?;
    if let Some(number) = command.copy {
        tx.send(UiEvent::CopyUrl(number.get() - 1)).await?;
    }
    drop(tx);

    let doc = handle.await.context("form controller task failed")?;
    report(&doc, &command)
}

fn report(doc: &FormDocument, command: &FetchCommand) -> Result<()> {
    if !doc.field_errors.is_empty() {
        for (field, message) in &doc.field_errors {
            eprintln!("{field}: {message}");
        }
        bail!("form validation failed");
    }

    if let Some(notice) = &doc.global_error {
        bail!("{}", notice.message);
    }

    let Some(results) = &doc.results else {
        bail!("no results were rendered");
    };

    if command.json {
        print_json(results)?;
    } else {
        print!("{}", render_text(results));
    }

    if let Some(number) = command.copy {
        let index = number.get() - 1;
        match results.card(index) {
            Some(_) => eprintln!("#{number}: {}", doc.copy_feedback(index).label()),
            None => eprintln!("#{number}: no such card"),
        }
    }

    if let Some(path) = &command.html {
        let html = render_template(ResultsPageTemplate {
            title: command.item_name.trim().to_string(),
            results: results.clone(),
        })
        .context("failed to render results page")?;
        std::fs::write(path, html)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("Wrote {}", path.display());
    }

    Ok(())
}

pub fn render_text(results: &ResultsView) -> String {
    let mut out = format!(
        "Total loading time: {}ms\n",
        results.total_loading_time_ms
    );

    if results.is_empty() {
        out.push_str("No images found.\n");
        return out;
    }

    for card in &results.cards {
        out.push_str(&card_line(card));
        out.push('\n');
    }
    out
}

fn card_line(card: &ImageCardView) -> String {
    format!(
        "#{} [{}] {}  time={} resolution={} size={}",
        card.number,
        card.source_label,
        card.url,
        card.loading_time,
        card.resolution,
        card.file_size
    )
}
