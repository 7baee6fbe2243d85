use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info, warn};

use palhelper_ui::api::ApiClient;
use palhelper_ui::config::{Config, BASE_URL_ENV};
use palhelper_ui::models::{ColumnDraft, FileStore, NotificationKind, Notifier};
use palhelper_ui::ui::AdminTab;
use palhelper_ui::{AdminPanel, CraftingPage};

#[derive(Parser, Debug)]
#[command(
    name = "palhelper",
    version,
    about = "Palworld helper: database admin and crafting calculator"
)]
struct Cli {
    /// Base URL of the palhelper server
    #[arg(long, global = true, env = BASE_URL_ENV)]
    url: Option<String>,

    /// File holding the calculator's saved category filter
    #[arg(long, global = true)]
    state: Option<PathBuf>,

    /// Print only this region of the page, by element id
    #[arg(long, global = true)]
    region: Option<String>,

    /// Remember --url and --state in the config file
    #[arg(long, global = true)]
    save_config: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show every table with its columns
    Schema,
    /// List table names
    Tables,
    /// Show the rows of a table
    Table { name: String },
    /// Run a SQL statement
    Query { sql: String },
    /// Create a table from `name:TYPE[:pk][:notnull][:default=VALUE]` columns
    CreateTable {
        name: String,
        #[arg(long = "column", required = true)]
        columns: Vec<ColumnDraft>,
    },
    /// Insert a row
    Add {
        table: String,
        #[arg(long = "set", value_name = "COLUMN=VALUE")]
        values: Vec<String>,
    },
    /// Update fields of an existing row
    Edit {
        table: String,
        id: i64,
        #[arg(long = "set", value_name = "COLUMN=VALUE")]
        values: Vec<String>,
    },
    /// Delete a row
    Delete {
        table: String,
        id: i64,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
    /// Browse recipes
    Recipes {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        search: Option<String>,
    },
    /// Total the resources for `ID[:QTY]` items
    Calculate {
        #[arg(required = true, value_name = "ID[:QTY]")]
        items: Vec<String>,
    },
}

fn parse_assignment(assignment: &str) -> Result<(&str, &str)> {
    assignment
        .split_once('=')
        .with_context(|| format!("Expected COLUMN=VALUE, got {}", assignment))
}

fn parse_item(item: &str) -> Result<(i64, &str)> {
    let (id, quantity) = item.split_once(':').unwrap_or((item, "1"));
    let id = id
        .trim()
        .parse()
        .with_context(|| format!("Invalid recipe id in {}", item))?;
    Ok((id, quantity))
}

async fn run_admin(cli: &Cli, api: ApiClient) -> Result<(String, Notifier)> {
    let mut admin = AdminPanel::new(api);

    match &cli.command {
        Command::Schema => {
            admin.load_schema().await;
        }
        Command::Tables => {
            admin.show_tab(AdminTab::Tables);
            admin.load_table_list().await;
        }
        Command::Table { name } => {
            admin.show_tab(AdminTab::Tables);
            admin.select_table(name).await;
            admin.load_table_list().await;
        }
        Command::Query { sql } => {
            admin.show_tab(AdminTab::Query);
            admin.set_query(sql);
            admin.execute_query().await;
        }
        Command::CreateTable { name, columns } => {
            admin.show_tab(AdminTab::Create);
            admin.edit_table_form(|form| {
                form.table_name = name.clone();
                form.remove_column(0);
                for column in columns {
                    form.push_column(column.clone());
                }
            });
            admin.create_table().await;
        }
        Command::Add { table, values } => {
            let assignments = values
                .iter()
                .map(|v| parse_assignment(v))
                .collect::<Result<Vec<_>>>()?;

            admin.show_tab(AdminTab::Tables);
            admin.select_table(table).await;
            admin.add_new_record().await;
            if admin.editor().is_open()
                && assignments.iter().all(|(c, v)| admin.set_field(c, v))
            {
                admin.save_record().await;
            }
        }
        Command::Edit { table, id, values } => {
            let assignments = values
                .iter()
                .map(|v| parse_assignment(v))
                .collect::<Result<Vec<_>>>()?;

            admin.show_tab(AdminTab::Tables);
            admin.select_table(table).await;
            admin.edit_record(*id).await;
            if admin.editor().is_open()
                && assignments.iter().all(|(c, v)| admin.set_field(c, v))
            {
                admin.save_record().await;
            }
        }
        Command::Delete { table, id, yes } => {
            if !yes {
                bail!("Refusing to delete record {} from {} without --yes", id, table);
            }
            admin.show_tab(AdminTab::Tables);
            admin.select_table(table).await;
            admin.delete_record(*id).await;
        }
        Command::Recipes { .. } | Command::Calculate { .. } => {
            bail!("{:?} is a crafting command", cli.command)
        }
    }

    let output = match &cli.region {
        Some(region) => admin.page.html(region).to_string(),
        None => admin.render_page(),
    };
    Ok((output, admin.notifier))
}

async fn run_crafting(
    cli: &Cli,
    api: ApiClient,
    state_path: PathBuf,
) -> Result<(String, Notifier)> {
    let store = FileStore::open(&state_path)
        .with_context(|| format!("Failed to open state file {}", state_path.display()))?;
    debug!("Category filter stored in {}", store.path().display());
    let mut crafting = CraftingPage::new(api, Box::new(store));
    crafting.load_recipes().await;

    match &cli.command {
        Command::Recipes { category, search } => {
            if let Some(category) = category {
                crafting.filter_by_category(category);
            }
            if let Some(search) = search {
                crafting.search(search);
            }
        }
        Command::Calculate { items } => {
            let items = items
                .iter()
                .map(|item| parse_item(item))
                .collect::<Result<Vec<_>>>()?;
            for (id, quantity) in items {
                crafting.add_to_cart(id, quantity);
            }
            crafting.calculate_resources().await;
        }
        other => bail!("{:?} is an admin command", other),
    }

    let output = match &cli.region {
        Some(region) => crafting.page.html(region).to_string(),
        None => crafting.render_page(),
    };
    Ok((output, crafting.notifier))
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "palhelper_ui=info,palhelper=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(url) = &cli.url {
        config.base_url = url.clone();
    }
    if let Some(state) = &cli.state {
        config.state_path = Some(state.clone());
    }

    if cli.save_config {
        config.save()?;
        info!("Saved configuration");
    }

    let api = ApiClient::new(&config.base_url)?;
    info!("Using server {}", api.base_url());

    let (output, notifier) = match &cli.command {
        Command::Recipes { .. } | Command::Calculate { .. } => {
            let state_path = match config.state_path.clone() {
                Some(path) => path,
                None => FileStore::default_path()?,
            };
            run_crafting(&cli, api, state_path).await?
        }
        _ => run_admin(&cli, api).await?,
    };

    if let Some(region) = &cli.region {
        if output.is_empty() {
            warn!("Region {} is empty or unknown", region);
        }
    }
    println!("{}", output);

    for notification in notifier.all() {
        eprintln!("[{}] {}", notification.kind.as_str(), notification.message);
    }

    Ok(exit_code(&notifier))
}

/// Failure when the last thing reported to the user was an error.
fn exit_code(notifier: &Notifier) -> ExitCode {
    match notifier.latest() {
        Some(n) if n.kind == NotificationKind::Error => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_item_quantity_defaults_to_one() {
        assert_eq!(parse_item("3").unwrap(), (3, "1"));
        assert_eq!(parse_item("3:2").unwrap(), (3, "2"));
        assert_eq!(parse_item(" 7 :abc").unwrap(), (7, "abc"));
        assert!(parse_item("x:2").is_err());
        assert!(parse_item("").is_err());
    }

    #[test]
    fn test_parse_assignment_splits_on_first_equals() {
        assert_eq!(parse_assignment("name=a=b").unwrap(), ("name", "a=b"));
        assert_eq!(parse_assignment("level=").unwrap(), ("level", ""));
        assert!(parse_assignment("name").is_err());
    }

    #[test]
    fn test_exit_code_follows_last_notification() {
        let mut notifier = Notifier::crafting();
        assert_eq!(exit_code(&notifier), ExitCode::SUCCESS);

        notifier.error("Recipe not found");
        notifier.success("Added Wooden Club x1 to cart");
        assert_eq!(exit_code(&notifier), ExitCode::SUCCESS);

        notifier.error("Failed to calculate resources. Please try again.");
        assert_eq!(exit_code(&notifier), ExitCode::FAILURE);
    }
}
