use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lipika::config::Config;
use lipika::language::Language;
use lipika::locale::t;
use lipika::media::SourceDocument;
use lipika::ocr::{OcrProvider, RemoteOcrMode};
use lipika::prefs::PreferenceStore;
use lipika::speech;
use lipika::translate::{TranslationClient, TRANSLATION_FAILED};

#[derive(Parser)]
#[command(name = "lipika")]
#[command(about = "Nepali/Sinhala to English translation and OCR toolkit")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract text from an image or PDF
    Extract {
        /// Path to the image or PDF
        file: PathBuf,
        /// Recognition mode: auto (local engine), printed, or handwritten
        /// (remote endpoints)
        #[arg(long, default_value = "auto")]
        mode: String,
        /// Translate the extracted text to English
        #[arg(long)]
        translate: bool,
        /// Source language of the document
        #[arg(long, default_value = "nepali")]
        from: String,
        /// Speak the result aloud
        #[arg(long)]
        speak: bool,
    },
    /// Translate text to English
    Translate {
        text: String,
        /// Source language
        #[arg(long, default_value = "nepali")]
        from: String,
        /// Speak the translation aloud
        #[arg(long)]
        speak: bool,
    },
    /// List the supported languages
    Languages,
    /// Set the preferred interface language (en, si, ne)
    SetLanguage { tag: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lipika=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let prefs = PreferenceStore::open_default()?;
    let ui = prefs.language();

    match args.command {
        Command::Extract {
            file,
            mode,
            translate,
            from,
            speak,
        } => {
            let document = SourceDocument::from_path(&file)?;
            let provider = OcrProvider::new(&config)?;

            let text = match mode.as_str() {
                "auto" => {
                    let extracted = provider
                        .extract_auto(&document, |pct| {
                            eprint!("\r{pct}%");
                            let _ = std::io::stderr().flush();
                        })
                        .await;
                    eprintln!();
                    extracted
                }
                other => {
                    let remote_mode: RemoteOcrMode = other.parse()?;
                    provider.extract_remote(&document, remote_mode).await
                }
            };
            println!("{text}");

            let source: Language = from.parse()?;
            if translate {
                let client = TranslationClient::new(&config.api)?;
                match client.translate(&text, source, Language::English).await {
                    Ok(Some(translated)) => {
                        println!("{translated}");
                        if speak {
                            speech::speak(&translated, Language::English)?;
                        }
                    }
                    Ok(None) => {}
                    Err(e) => {
                        tracing::warn!("{e}");
                        println!("{TRANSLATION_FAILED}");
                    }
                }
            } else if speak {
                speech::speak(&text, source)?;
            }
        }
        Command::Translate { text, from, speak } => {
            let source: Language = from.parse()?;
            let client = TranslationClient::new(&config.api)?;
            match client.translate(&text, source, Language::English).await {
                Ok(Some(translated)) => {
                    println!("{translated}");
                    if speak {
                        speech::speak(&translated, Language::English)?;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!("{e}");
                    println!("{TRANSLATION_FAILED}");
                }
            }
        }
        Command::Languages => {
            println!("{}:", t(ui, "common.language"));
            for language in Language::ALL {
                println!(
                    "  {:<8} {:<8} {}",
                    language.mbart_code(),
                    language.english_name(),
                    language.native_name()
                );
            }
        }
        Command::SetLanguage { tag } => {
            let language = Language::from_tag(&tag)
                .ok_or_else(|| anyhow::anyhow!("Unknown language tag: {tag} (expected en, si, ne)"))?;
            prefs.set_language(language)?;
            println!("{}: {}", t(ui, "common.language"), language.native_name());
        }
    }

    Ok(())
}
