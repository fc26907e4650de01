pub mod commands;
pub mod config;
pub mod corpus;
pub mod db;
pub mod speech;

use anyhow::Context;
use clap::Parser;
use dictation_core::{NullSpeaker, RecordStore, Session, Speaker};
use std::io::{self, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::PracticeOptions;
use crate::config::{Cli, Command};
use crate::db::SqliteStore;
use crate::speech::CommandSpeaker;

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let db_path = cli.db.clone().unwrap_or_else(config::default_db_path);
    tracing::info!(path = %db_path.display(), "opening history database");
    let kv = SqliteStore::open(&db_path)
        .with_context(|| format!("failed to open {}", db_path.display()))?;
    let mut records = RecordStore::load(kv);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Practice(args) => {
            let mut session = Session::new(args.selector_config(), args.seed);
            session.set_corpus(corpus::load_corpus(&cli.corpus));
            session.attach_store(records);

            let mut speaker: Box<dyn Speaker> = if args.no_speech {
                Box::new(NullSpeaker)
            } else {
                Box::new(CommandSpeaker::new(args.tts.clone()))
            };
            let options = PracticeOptions {
                lang: args.lang.clone(),
                show_prompt: args.show_prompt,
            };
            commands::run_practice(&mut session, speaker.as_mut(), &options, &mut input, &mut out)?;
        }
        Command::Progress { all } => {
            let total_words = corpus::load_corpus(&cli.corpus).len();
            commands::show_progress(&records, total_words, config::view(all), &mut out)?;
        }
        Command::Export { format, out: dest } => {
            commands::export_history(&records, format.into(), dest.as_deref(), &mut out)?;
        }
        Command::Import { file } => {
            commands::import_history(&mut records, &file, &mut out)?;
        }
        Command::Reset { yes } => {
            commands::reset_history(&mut records, yes, &mut input, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
