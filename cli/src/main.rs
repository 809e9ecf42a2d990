use clap::{Parser, Subcommand};
use facts::{Category, CategoryFilter, Fact, FactDraft, FactId, VoteKind};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid fact: {0}")]
    Invalid(#[from] facts::FactError),
    #[error("server returned {status}: {message}")]
    ServerError { status: u16, message: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "til", about = "Today I Learned API CLI")]
struct Cli {
    #[arg(long, env = "TIL_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the server health endpoint.
    Ping,
    /// List facts, most interesting first.
    List {
        #[arg(long, default_value = "all", value_parser = parse_filter)]
        category: CategoryFilter,
    },
    /// Share a new fact.
    Add {
        #[arg(long)]
        text: String,
        #[arg(long)]
        source: String,
        #[arg(long)]
        category: String,
    },
    /// Vote on a fact.
    Vote {
        id: FactId,
        #[arg(value_parser = parse_vote_kind)]
        kind: VoteKind,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let base_url = cli.base_url.trim_end_matches('/').to_owned();

    match cli.command {
        Command::Ping => {
            let response = client.get(format!("{base_url}/healthz")).send().await?;
            check_status(response).await?;
            println!("ok");
        }
        Command::List { category: filter } => {
            let response = client
                .get(format!("{base_url}/api/facts"))
                .query(&[("category", filter.as_str())])
                .send()
                .await?;
            let facts: Vec<Fact> = serde_json::from_value(check_status(response).await?)?;
            for fact in &facts {
                println!("{}", format_fact(fact));
            }
            eprintln!("{} facts", facts.len());
        }
        Command::Add { text, source, category } => {
            let draft = FactDraft { text, source, category: Some(category) };
            // Fail fast with the same checks the server applies.
            draft.validate(0)?;
            let response = client.post(format!("{base_url}/api/facts")).json(&draft).send().await?;
            let fact: Fact = serde_json::from_value(check_status(response).await?)?;
            println!("{}", format_fact(&fact));
        }
        Command::Vote { id, kind } => {
            let response = client
                .post(format!("{base_url}/api/facts/{id}/vote"))
                .json(&serde_json::json!({ "kind": kind }))
                .send()
                .await?;
            let fact: Fact = serde_json::from_value(check_status(response).await?)?;
            println!("{}", format_fact(&fact));
        }
    }
    Ok(())
}

async fn check_status(response: reqwest::Response) -> Result<Value, CliError> {
    let status = response.status();
    let value = response.json::<Value>().await.unwrap_or(Value::Null);
    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), message: server_message(&value) });
    }
    Ok(value)
}

fn parse_filter(raw: &str) -> Result<CategoryFilter, String> {
    CategoryFilter::parse(raw).map_err(|e| format!("{e}; expected `all` or one of: {}", category_names()))
}

fn parse_vote_kind(raw: &str) -> Result<VoteKind, String> {
    VoteKind::parse(raw).ok_or_else(|| format!("unknown vote kind `{raw}`; expected interesting, mindblowing, or false"))
}

fn category_names() -> String {
    Category::ALL.map(Category::name).join(", ")
}

fn server_message(body: &Value) -> String {
    body.get("error")
        .and_then(Value::as_str)
        .map_or_else(|| body.to_string(), str::to_owned)
}

fn format_fact(fact: &Fact) -> String {
    let disputed = if fact.is_disputed() { "[DISPUTED] " } else { "" };
    format!(
        "#{} [{}] {}{} ({} {} {} {} {} {})",
        fact.id,
        fact.category,
        disputed,
        fact.text,
        VoteKind::Interesting.emoji(),
        fact.votes_interesting,
        VoteKind::Mindblowing.emoji(),
        fact.votes_mindblowing,
        VoteKind::False.emoji(),
        fact.votes_false,
    )
}
