use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use katsuyo_lib::{
    Config, Dictionary, Dirs, Entry, Language, Lexicon, LexiconRow, LookupError, NO_PASSIVE_FORM,
};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct Args {
    /// Lexicon snapshot to load. Defaults to the configured path.
    #[arg(long)]
    lexicon: Option<PathBuf>,
    /// List suggestions for the typed text instead of conjugating it.
    #[arg(long)]
    suggest: bool,
    /// Scroll offset into the suggestion window.
    #[arg(long, default_value_t = 0)]
    offset: usize,
    /// Display language, `english` or `japanese`. Overrides the configured
    /// value.
    #[arg(long)]
    lang: Option<String>,
    /// Don't print readings next to conjugated forms.
    #[arg(long)]
    no_furigana: bool,
    /// Text to look up: kanji, kana, romaji, or an English meaning.
    #[arg(name = "input")]
    input: Vec<String>,
}

fn main() -> Result<()> {
    let filter = EnvFilter::builder().from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .finish()
        .try_init()?;

    let args = Args::try_parse()?;

    let dirs = Dirs::open()?;
    let config = Config::load(&dirs)?;

    let language = match args.lang.as_deref() {
        Some("english") => Language::English,
        Some("japanese") => Language::Japanese,
        Some(other) => bail!("unsupported language `{other}`"),
        None => config.language,
    };

    let path = args
        .lexicon
        .or(config.lexicon)
        .unwrap_or_else(|| dirs.lexicon_path());

    let data = fs::read_to_string(&path)
        .with_context(|| format!("reading lexicon from {}", path.display()))?;
    let rows: Vec<LexiconRow> = serde_json::from_str(&data)
        .with_context(|| format!("decoding lexicon from {}", path.display()))?;

    let lexicon = Lexicon::from_rows(rows);
    tracing::info!("lexicon holds {} entries", lexicon.len());
    let dictionary = Dictionary::new(lexicon);

    let input = args.input.join(" ");

    if args.suggest {
        for suggestion in dictionary.suggest(&input, args.offset) {
            println!("{}", suggestion.summary);
        }

        return Ok(());
    }

    match dictionary.conjugate(&input) {
        Ok(entry) => print_entry(&entry, language, !args.no_furigana),
        Err(LookupError::NotFound { input }) => {
            println!("{input} was not found in the dictionary.");
        }
        Err(LookupError::Ambiguous { input, candidates }) => {
            println!("{input} matches more than one verb.");

            for candidate in candidates {
                println!("  {candidate}");
            }
        }
        Err(error) => return Err(error.into()),
    }

    Ok(())
}

fn print_entry(entry: &Entry<'_>, language: Language, furigana: bool) {
    let record = entry.record;

    let reading = match language {
        Language::English => &record.romaji,
        Language::Japanese => &record.kana,
    };

    println!("{} [{reading}] - {}", entry.key, record.meaning);

    match language {
        Language::English => {
            println!(
                "{} / {}",
                record.class.name(),
                record.transitivity.name()
            );
        }
        Language::Japanese => {
            println!(
                "{} / {}",
                record.class.name_ja(),
                record.transitivity.name_ja()
            );
        }
    }

    println!();

    for (form, fragments) in entry.conjugations.iter() {
        let label = match language {
            Language::English => form.describe(),
            Language::Japanese => form.label_ja(),
        };

        let text = fragments.text();

        if text == NO_PASSIVE_FORM {
            match language {
                Language::English => println!("{label}: {NO_PASSIVE_FORM}"),
                Language::Japanese if furigana => {
                    println!("{label}: 受身形なし (うけみけいなし)");
                }
                Language::Japanese => println!("{label}: 受身形なし"),
            }

            continue;
        }

        let reading = fragments.reading();

        if furigana && reading != text {
            println!("{label}: {text} ({reading})");
        } else {
            println!("{label}: {text}");
        }
    }
}
