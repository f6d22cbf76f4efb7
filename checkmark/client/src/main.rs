use anyhow::Context;
use checkmark_client::view::{
    CheckmarkDraft, Filter, ItemView, ListView, SortKey, SortOrder, Submission,
};
use checkmark_client::CheckmarkApi;
use checkmark_client::commands::{
    DELETE_ERROR, LOAD_ERROR, SAVE_ERROR, TOGGLE_ERROR, fetch_item,
};
use checkmark_core::{CheckmarkItem, Priority};
use chrono::{NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Keep track of your to-dos.
#[derive(Parser, Debug)]
#[command(name = "checkmark", version)]
struct Cli {
    /// Base URL of the Checkmark API
    #[arg(long, global = true, env = "CHECKMARK_API_URL", default_value = CheckmarkApi::DEFAULT_BASE_URL)]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List checkmarks
    List {
        #[arg(long, value_enum, default_value_t)]
        filter: Filter,
        #[arg(long, value_enum, default_value_t)]
        sort: SortKey,
        #[arg(long, value_enum, default_value_t)]
        order: SortOrder,
    },
    /// Show a single checkmark
    Show { id: i32 },
    /// Create a checkmark
    Create(CreateArgs),
    /// Change fields of an existing checkmark
    Edit {
        id: i32,
        #[command(flatten)]
        changes: EditArgs,
    },
    /// Flip a checkmark between pending and completed
    Toggle { id: i32 },
    /// Delete a checkmark
    Delete {
        id: i32,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Args)]
struct CreateArgs {
    #[arg(long)]
    title: String,
    #[arg(long, default_value = "")]
    description: String,
    /// Due date as YYYY-MM-DD
    #[arg(long, default_value = "")]
    due: String,
    /// Low, Medium or High (or 0-2)
    #[arg(long, default_value_t = Priority::Medium)]
    priority: Priority,
    #[arg(long)]
    completed: bool,
}

#[derive(Debug, Args)]
struct EditArgs {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    description: Option<String>,
    /// Due date as YYYY-MM-DD
    #[arg(long, conflicts_with = "clear_due")]
    due: Option<String>,
    /// Remove the due date
    #[arg(long)]
    clear_due: bool,
    #[arg(long)]
    priority: Option<Priority>,
    #[arg(long)]
    completed: Option<bool>,
}

impl EditArgs {
    fn apply(self, form: &mut CheckmarkDraft) {
        if let Some(title) = self.title {
            form.title = title;
        }
        if let Some(description) = self.description {
            form.description = description;
        }
        if let Some(due) = self.due {
            form.due_date = due;
        }
        if self.clear_due {
            form.due_date.clear();
        }
        if let Some(priority) = self.priority {
            form.priority = priority;
        }
        if let Some(completed) = self.completed {
            form.is_completed = completed;
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let api = CheckmarkApi::new(cli.api_url);
    match run(&api, cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!("{:#}", err);
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(api: &CheckmarkApi, command: Commands) -> anyhow::Result<()> {
    let today = today();
    match command {
        Commands::List {
            filter,
            sort,
            order,
        } => {
            let mut view = load_list(api).await?;
            view.filter = filter;
            view.sort_key = sort;
            view.sort_order = order;
            println!("{}", view.render(today));
        }
        Commands::Show { id } => {
            let item = fetch_item(api, id).await?;
            println!("{}", ItemView::new(&item, today).render());
        }
        Commands::Create(args) => {
            let form = CheckmarkDraft {
                title: args.title,
                description: args.description,
                is_completed: args.completed,
                due_date: args.due,
                priority: args.priority,
                ..CheckmarkDraft::new()
            };
            submit(api, &form, today).await?;
        }
        Commands::Edit { id, changes } => {
            let item = fetch_item(api, id).await?;
            let mut form = CheckmarkDraft::editing(&item);
            changes.apply(&mut form);
            submit(api, &form, today).await?;
        }
        Commands::Toggle { id } => {
            let mut view = load_list(api).await?;
            let item = view
                .find(id)
                .cloned()
                .with_context(|| format!("Checkmark #{} not found", id))?;
            let toggled = CheckmarkItem {
                is_completed: !item.is_completed,
                updated_at: Some(Utc::now()),
                ..item
            };
            api.update(id, &toggled).await.context(TOGGLE_ERROR)?;
            view.apply_toggle(toggled);
            println!("{}", view.render(today));
        }
        Commands::Delete { id, yes } => {
            let mut view = load_list(api).await?;
            let item = view
                .find(id)
                .with_context(|| format!("Checkmark #{} not found", id))?;
            if !yes && !confirm(&format!("Delete \"{}\"?", item.title))? {
                println!("Nothing deleted.");
                return Ok(());
            }
            api.delete(id).await.context(DELETE_ERROR)?;
            view.apply_delete(id);
            println!("{}", view.render(today));
        }
    }
    Ok(())
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Fetches the whole collection, offering a retry after each failure.
async fn load_list(api: &CheckmarkApi) -> anyhow::Result<ListView> {
    loop {
        match api.get_all().await {
            Ok(items) => return Ok(ListView::new(items)),
            Err(err) => {
                tracing::debug!("Fetching checkmarks from {} failed: {}", api.base_url(), err);
                eprintln!("{}", LOAD_ERROR);
                if !confirm("Retry?")? {
                    return Err(anyhow::Error::new(err).context("Gave up loading checkmarks."));
                }
            }
        }
    }
}

async fn submit(api: &CheckmarkApi, form: &CheckmarkDraft, today: NaiveDate) -> anyhow::Result<()> {
    let submission = match form.submit(today) {
        Ok(submission) => submission,
        Err(errors) => {
            for error in &errors {
                eprintln!("  - {}", error);
            }
            anyhow::bail!("The checkmark was not saved.");
        }
    };

    match submission {
        Submission::Create(payload) => {
            let created = api.create(&payload).await.context(SAVE_ERROR)?;
            println!("Created checkmark #{}", created.id);
            println!("{}", ItemView::new(&created, today).render());
        }
        Submission::Update { id, item } => {
            api.update(id, &item).await.context(SAVE_ERROR)?;
            println!("Updated checkmark #{}", id);
            println!("{}", ItemView::new(&item, today).render());
        }
    }
    Ok(())
}

/// Asks a yes/no question on the terminal; anything but "y" means no.
fn confirm(question: &str) -> anyhow::Result<bool> {
    print!("{} [y/N] ", question);
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
