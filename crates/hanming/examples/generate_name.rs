//! Generate a Chinese name from the command line and watch it being revealed.
//!
//! ```sh
//! OPENROUTER_API_KEY=... cargo run -p hanming --example generate_name -- Raymond --style heroic --pref Strength
//! ```
use std::{sync::Arc, time::Duration};

use anyhow::Context;
use clap::Parser;
use hanming::openrouter::OpenRouterAdapterBuilder;
use hanming::types::{
    locale::Language,
    request::{Gender, GenerationRequest, NameStyle},
};
use hanming::{GenerationPhase, NameGenerator, RevealController, RevealOutcome, RevealStage};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(about = "Find a Chinese name for an English one")]
struct Args {
    /// English name to transform.
    name: String,

    /// M, F or N.
    #[arg(long, default_value = "M")]
    gender: Gender,

    /// modern, traditional, heroic or cute.
    #[arg(long, default_value = "modern")]
    style: NameStyle,

    /// Preference tag; repeat for several.
    #[arg(long = "pref")]
    preferences: Vec<String>,

    /// en or zh.
    #[arg(long, default_value = "en")]
    lang: Language,

    #[arg(long, env = "OPENROUTER_BASE_URL")]
    base_url: Option<String>,

    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut builder =
        OpenRouterAdapterBuilder::new_from_env().with_timeout(Duration::from_secs(args.timeout_secs));
    if let Some(base_url) = args.base_url {
        builder = builder.with_base_url(base_url);
    }
    let backend = builder.build().context("building the OpenRouter client")?;

    let controller = Arc::new(
        RevealController::new(NameGenerator::new(backend)).with_language(args.lang),
    );

    let mut request = GenerationRequest::new(args.name)
        .with_gender(args.gender)
        .with_style(args.style);
    for tag in &args.preferences {
        request = request.with_preference(tag);
    }

    let printer = tokio::spawn({
        let mut rx = controller.subscribe();
        let language = args.lang;
        async move {
            let mut last_label = None;
            let mut printed: Option<RevealStage> = None;
            while rx.changed().await.is_ok() {
                let view = rx.borrow_and_update().clone();
                // Snapshots coalesce, so catch up on every stage passed since.
                if let (GenerationPhase::Revealing(stage), Some(shown)) = (view.phase, &view.displayed) {
                    for pending in RevealStage::ORDER
                        .into_iter()
                        .filter(|s| Some(*s) > printed && *s <= stage)
                    {
                        print_stage(pending, shown);
                    }
                    printed = Some(stage);
                    continue;
                }
                let label = view.phase.label(language);
                if label != last_label {
                    if let Some(text) = label {
                        eprintln!("... {text}");
                    }
                    last_label = label;
                }
                if let Some(error) = &view.error {
                    eprintln!("{error}");
                }
            }
        }
    });

    let outcome = controller.generate(request).await;
    drop(controller);
    printer.await.context("printer task")?;

    match outcome? {
        RevealOutcome::Revealed(_) => Ok(()),
        RevealOutcome::Abandoned => anyhow::bail!("generation was superseded"),
    }
}

fn print_stage(stage: RevealStage, shown: &hanming::types::name::GeneratedName) {
    match stage {
        RevealStage::Skeleton => println!("{}", shown.source_name),
        RevealStage::Characters => println!("  {}", shown.characters),
        RevealStage::Romanization => println!("  {}", shown.romanization),
        RevealStage::OverallMeaning => println!("\n{}", shown.overall_meaning),
        RevealStage::CharacterBreakdown => {
            for entry in &shown.character_breakdown {
                println!("  {} ({}): {}", entry.character, entry.romanization, entry.meaning);
            }
        }
        RevealStage::CulturalNote => println!("\n{}", shown.cultural_note),
        RevealStage::SuggestedUses => println!("\nBest for: {}", shown.suggested_uses.join(", ")),
        RevealStage::Alternatives => {
            for alt in &shown.alternatives {
                println!("  or {} ({}): {}", alt.characters, alt.romanization, alt.meaning);
            }
        }
    }
}
