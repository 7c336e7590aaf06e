//! Scripted editing session against the starter page
//!
//! ```text
//! domedit-playground --config . --script edits.json
//! echo '[{"Delete":{"node_id":"4"}}]' | domedit-playground --script -
//! ```

use anyhow::Context;
use clap::Parser;
use domedit_editor::{outline, starter_tree, Document, EditSession, EditorConfig, Mutation};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Apply a list of mutations to the starter page and print the tree after each one
#[derive(Parser, Debug)]
#[command(name = "domedit-playground")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing domedit.config.json
    #[arg(short, long, default_value = ".")]
    config: PathBuf,

    /// JSON array of mutations ("-" reads stdin); a demo sequence runs when omitted
    #[arg(short, long)]
    script: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = EditorConfig::load(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mutations = match &args.script {
        Some(path) => read_script(path)?,
        None => demo_script(),
    };

    let document = Document::with_config("playground", starter_tree(), &config);
    let mut session = EditSession::with_config("playground", document, &config);

    print!("{}", outline(session.document.tree(), None));

    for mutation in mutations {
        let name = mutation.name();
        let target = mutation.node_id().to_string();

        match session.apply(mutation) {
            Ok(result) => println!("\n{} #{} -> v{}", name, target, result.version),
            Err(err) => println!("\n{} #{} skipped: {}", name, target, err),
        }

        let selected = session.selected().map(|id| id.as_str());
        print!("{}", outline(session.document.tree(), selected));
    }

    Ok(())
}

fn read_script(path: &str) -> anyhow::Result<Vec<Mutation>> {
    let source = if path == "-" {
        std::io::read_to_string(std::io::stdin()).context("Failed to read script from stdin")?
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read script {}", path))?
    };

    serde_json::from_str(&source).context("Script must be a JSON array of mutations")
}

fn demo_script() -> Vec<Mutation> {
    vec![
        Mutation::set_style("2", "color", "tomato"),
        Mutation::set_attribute("5", "textContent", "Press me"),
        Mutation::Wrap {
            node_id: "3".to_string(),
            tag: "section".to_string(),
        },
        Mutation::Duplicate {
            node_id: "4".to_string(),
        },
        Mutation::Unwrap {
            node_id: "2".to_string(),
        },
        Mutation::Unwrap {
            node_id: "4".to_string(),
        },
        Mutation::Delete {
            node_id: "5".to_string(),
        },
    ]
}
