//! Terminal front end for the todo summary API.
//!
//! ```bash
//! todo list
//! todo add "Buy milk" --description "2 litres"
//! todo toggle <id>
//! todo edit <id> "Buy oat milk"
//! todo delete <id>
//! todo summarize
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use todo_summary_client::{ApiClient, DEFAULT_BASE_URL, NoticeLevel, TodoBoard};
use todo_summary_core::{Todo, TodoId};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "Manage todos and send summaries to Slack", long_about = None)]
struct Cli {
    /// API base URL
    #[arg(long, env = "TODO_API_URL", default_value = DEFAULT_BASE_URL, global = true)]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show all todos, newest first
    List,
    /// Add a todo
    Add {
        /// Title
        title: String,
        /// Optional description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Change a todo's title and description
    Edit {
        /// Todo id
        id: TodoId,
        /// New title
        title: String,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Flip a todo between pending and completed
    Toggle {
        /// Todo id
        id: TodoId,
    },
    /// Delete a todo
    Delete {
        /// Todo id
        id: TodoId,
    },
    /// Summarize all todos and send the summary to Slack
    Summarize,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "error".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let board = TodoBoard::new(ApiClient::new(cli.api_url));

    let outcome = run(&board, cli.command).await;
    for notice in board.take_notices() {
        match notice.level {
            NoticeLevel::Success => println!("✔ {}", notice.text),
            NoticeLevel::Error => eprintln!("✘ {}", notice.text),
        }
    }
    outcome
}

async fn run(board: &TodoBoard, command: Commands) -> Result<()> {
    // Every view starts from the server's list.
    if let Err(err) = board.refresh().await {
        let message = board.load_error().unwrap_or_else(|| err.to_string());
        return Err(err).context(message);
    }

    match command {
        Commands::List => print_todos(&board.todos()),
        Commands::Add { title, description } => {
            board.add(&title, description.as_deref()).await?;
            print_todos(&board.todos());
        }
        Commands::Edit {
            id,
            title,
            description,
        } => {
            board.edit(id, &title, description.as_deref()).await?;
            print_todos(&board.todos());
        }
        Commands::Toggle { id } => {
            board.toggle(id).await?;
            print_todos(&board.todos());
        }
        Commands::Delete { id } => {
            board.remove(id).await?;
            print_todos(&board.todos());
        }
        Commands::Summarize => {
            if !board.can_summarize() {
                println!("No todos yet. Add one before generating a summary.");
                return Ok(());
            }
            let summary = board.summarize().await?;
            println!("Generated Summary:\n\n{summary}");
        }
    }
    Ok(())
}

fn print_todos(todos: &[Todo]) {
    if todos.is_empty() {
        println!("No todos yet. Add one to get started!");
        return;
    }
    for todo in todos {
        let mark = if todo.completed { "x" } else { " " };
        println!("[{mark}] {}  {}", todo.title, todo.id);
        if !todo.description.is_empty() {
            println!("      {}", todo.description);
        }
    }
}
