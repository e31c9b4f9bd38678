use anyhow::Context;
use clap::Subcommand;
use poolplan_core::{budget, export, materials, timeline};
use std::path::{Path, PathBuf};

const DEFAULT_SHARE_BASE: &str = "https://poolplanner.example/plan";

#[derive(Subcommand)]
pub enum ExportSubcommand {
    /// Printable HTML document
    Html {
        /// Write to a file instead of stdout
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,
    },
    /// Plain-text summary
    Text {
        /// Write to a file instead of stdout
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,
    },
    /// mailto: link carrying the plan summary
    Email,
    /// Shareable link encoding the plan
    Share {
        /// Base URL for the link
        #[arg(long, default_value = DEFAULT_SHARE_BASE)]
        base_url: String,
    },
}

fn emit(content: &str, out: Option<&Path>) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}

pub fn run(root: &Path, subcmd: ExportSubcommand) -> anyhow::Result<()> {
    let plan = crate::cmd::current_plan(root);

    match subcmd {
        ExportSubcommand::Html { out } => {
            let html = export::printable_html(
                &plan,
                &budget::calculate(&plan),
                &timeline::calculate(&plan),
                &materials::calculate(&plan),
            );
            emit(&html, out.as_deref())
        }
        ExportSubcommand::Text { out } => {
            let text =
                export::mail_body(&plan, &budget::calculate(&plan), &timeline::calculate(&plan));
            emit(&text, out.as_deref())
        }
        ExportSubcommand::Email => {
            let url =
                export::mailto_url(&plan, &budget::calculate(&plan), &timeline::calculate(&plan));
            println!("{url}");
            Ok(())
        }
        ExportSubcommand::Share { base_url } => {
            let url = export::share_url(&base_url, &plan).context("failed to encode plan")?;
            println!("{url}");
            Ok(())
        }
    }
}
