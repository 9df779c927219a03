use clap::{Parser, Subcommand};

use shloka_client::{verse_label, with_error_handling, GitaClient, LabelContext, CHAPTERS};

#[derive(Parser)]
#[command(
    name = "shloka",
    about = "Fetch Bhagavad Gita verses through the shloka proxy"
)]
struct Cli {
    /// Proxy endpoint to talk to.
    #[arg(long, default_value = "http://127.0.0.1:8080/api/gita")]
    endpoint: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the chapter metadata table.
    Chapters,
    /// Fetch all verses of a chapter through a running proxy.
    Fetch {
        /// Chapter number, 1 through 18.
        chapter: u32,
    },
    /// Look up a single verse by its geeta_id (e.g. "2:47").
    Verse { id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::try_init().ok();

    let cli = Cli::parse();
    tracing::debug!(endpoint = %cli.endpoint, "using proxy endpoint");

    let client = GitaClient::with_endpoint(&cli.endpoint);

    match cli.command {
        Command::Chapters => {
            for chapter in CHAPTERS {
                println!("{:>2}  {:<11} {}", chapter.id, chapter.title, chapter.description);
            }
        }
        Command::Fetch { chapter } => {
            let result = with_error_handling(client.fetch_verses_by_chapter(chapter)).await;

            if let Some(verses) = result.data {
                for verse in verses {
                    println!(
                        "{}:{}  {}",
                        verse.chapter,
                        verse_label(LabelContext::Gita, verse.verse),
                        verse.shlok
                    );
                }
            } else if let Some(error) = result.error {
                eprintln!("{}", error.user_message());
                std::process::exit(1);
            }
        }
        Command::Verse { id } => match client.fetch_verse_by_id(&id).await? {
            Some(verse) => println!("{}  {}", verse.geeta_id, verse.shlok),
            None => println!("verse lookup by id is not implemented yet ({id})"),
        },
    }

    Ok(())
}
