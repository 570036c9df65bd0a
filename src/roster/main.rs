use clap::Parser;
use directories::ProjectDirs;
use roster::config::RosterConfig;
use roster::editor::{edit_form, FormBuffer};
use roster::error::Result;
use roster::gateway::http::HttpGateway;
use roster::manager::{Event, RecordManager};
use roster::model::FormValues;
use roster::notify::{Notice, NoticeLevel};
use roster::view::{render_notices, render_table};
use std::io::{self, Write};
use std::path::PathBuf;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    manager: RecordManager<HttpGateway>,
    config: RosterConfig,
    config_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { search }) => handle_list(&mut ctx, search),
        Some(Commands::Add { name, age, id }) => handle_add(&mut ctx, name, age, id),
        Some(Commands::Edit {
            id,
            name,
            age,
            no_editor,
        }) => handle_edit(&mut ctx, id, name, age, no_editor),
        Some(Commands::Delete { id, yes }) => handle_delete(&mut ctx, id, yes),
        Some(Commands::Search { term }) => handle_list(&mut ctx, Some(term)),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&mut ctx, None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let proj_dirs =
        ProjectDirs::from("com", "roster", "roster").expect("Could not determine config dir");
    let config_dir = proj_dirs.config_dir().to_path_buf();

    let config = RosterConfig::load(&config_dir).unwrap_or_default();
    let endpoint = cli
        .endpoint
        .clone()
        .unwrap_or_else(|| config.endpoint.clone());

    Ok(AppContext {
        manager: RecordManager::new(HttpGateway::new(endpoint)),
        config,
        config_dir,
    })
}

fn handle_list(ctx: &mut AppContext, search: Option<String>) -> Result<()> {
    ctx.manager.dispatch(Event::Refresh);
    if let Some(term) = search {
        ctx.manager.dispatch(Event::SearchChanged(term));
    }

    print!("{}", render_table(ctx.manager.store().visible()));
    finish(ctx);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, name: String, age: String, id: Option<String>) -> Result<()> {
    ctx.manager.dispatch(Event::Submit(FormValues::new(
        id.unwrap_or_default(),
        name,
        age,
    )));
    finish_with_table(ctx);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    id: String,
    name: Option<String>,
    age: Option<String>,
    no_editor: bool,
) -> Result<()> {
    ctx.manager.dispatch(Event::Refresh);
    ctx.manager.dispatch(Event::EditRequested(id));

    let snapshot = match ctx.manager.form().snapshot() {
        Some(snapshot) => snapshot.clone(),
        // refresh failed or the id is unknown; the notices say which
        None => {
            finish(ctx);
            return Ok(());
        }
    };

    let (new_name, new_age) = if no_editor || name.is_some() || age.is_some() {
        (
            name.unwrap_or_else(|| snapshot.name.clone()),
            age.unwrap_or_else(|| snapshot.age.to_string()),
        )
    } else {
        let initial = FormBuffer::new(&snapshot.name, snapshot.age.to_string());
        let edited = edit_form(&initial)?;
        if edited.is_empty() {
            ctx.manager.dispatch(Event::Cancel);
            println!("Edit cancelled.");
            return Ok(());
        }
        (edited.name, edited.age)
    };

    ctx.manager.dispatch(Event::Submit(FormValues::new(
        snapshot.id.unwrap_or_default(),
        new_name,
        new_age,
    )));
    finish_with_table(ctx);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: String, yes: bool) -> Result<()> {
    ctx.manager.dispatch(Event::Refresh);

    if !yes {
        if let Some(student) = ctx.manager.find_record(&id) {
            if !confirm(&format!(
                "Are you sure you want to delete {}? [y/N] ",
                student.name
            ))? {
                println!("Aborted.");
                return Ok(());
            }
        }
        // unknown ids fall through; the dispatcher reports them
    }

    ctx.manager.dispatch(Event::DeleteRequested(id));
    finish_with_table(ctx);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key.as_deref(), value) {
        (None, _) | (Some("endpoint"), None) => {
            println!("endpoint = {}", ctx.config.endpoint);
        }
        (Some("endpoint"), Some(v)) => {
            ctx.config.endpoint = v;
            ctx.config.save(&ctx.config_dir)?;
            println!("endpoint = {}", ctx.config.endpoint);
        }
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
        }
    }
    Ok(())
}

/// Prints the reloaded table after a mutation, unless it failed.
fn finish_with_table(ctx: &mut AppContext) {
    let notices = ctx.manager.drain_notices();
    if !has_errors(&notices) {
        print!("{}", render_table(ctx.manager.store().visible()));
    }
    print_and_exit_on_error(&notices);
}

fn finish(ctx: &mut AppContext) {
    let notices = ctx.manager.drain_notices();
    print_and_exit_on_error(&notices);
}

fn print_and_exit_on_error(notices: &[Notice]) {
    print!("{}", render_notices(notices));
    if has_errors(notices) {
        std::process::exit(1);
    }
}

fn has_errors(notices: &[Notice]) -> bool {
    notices.iter().any(|n| n.level == NoticeLevel::Error)
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
