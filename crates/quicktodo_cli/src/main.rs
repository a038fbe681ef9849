//! Command-line presentation layer.
//!
//! # Responsibility
//! - Map terminal commands onto the core store operations.
//! - Keep rendering concerns (filtering, sorting, counts) out of the store.

use quicktodo_core::db::open_db;
use quicktodo_core::{
    counts, default_log_level, init_logging, visible, Filter, SortKey, SqliteSlot, Todo,
    TodoPatch, TodoStore,
};
use std::error::Error;
use uuid::Uuid;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first().map(String::as_str) else {
        print_usage();
        return Ok(());
    };

    match command {
        "version" => {
            println!("quicktodo {}", quicktodo_core::core_version());
            return Ok(());
        }
        "help" => {
            print_usage();
            return Ok(());
        }
        _ => {}
    }

    if let Ok(log_dir) = std::env::var("QUICKTODO_LOG_DIR") {
        init_logging(default_log_level(), &log_dir)?;
    }

    let db_path = std::env::var("QUICKTODO_DB").unwrap_or_else(|_| "quicktodo.db".to_string());
    let conn = open_db(&db_path)?;
    let mut store = TodoStore::new(SqliteSlot::try_new(&conn)?);
    store.initialize()?;

    match command {
        "add" => {
            let title = args
                .get(1)
                .map(|raw| raw.trim())
                .filter(|title| !title.is_empty())
                .ok_or("usage: quicktodo add <title> [description]")?;
            let todo = store.create(title, args.get(2).map(String::as_str))?;
            println!("added {}  {}", todo.id, todo.title);
        }
        "list" => {
            let (filter, sort) = parse_list_flags(&args[1..])?;
            render_list(store.todos(), filter, sort);
        }
        "edit" => {
            let id = parse_id(args.get(1))?;
            let title = args
                .get(2)
                .ok_or("usage: quicktodo edit <id> <title> [description]")?;
            let patch = TodoPatch {
                title: Some(title.clone()),
                description: args.get(3).cloned(),
                ..TodoPatch::default()
            };
            let todo = store.update(id, &patch)?;
            println!("updated {}  {}", todo.id, todo.title);
        }
        "toggle" => {
            let id = parse_id(args.get(1))?;
            let todo = store.toggle(id)?;
            let state = if todo.completed { "done" } else { "active" };
            println!("{state} {}  {}", todo.id, todo.title);
        }
        "rm" => {
            let id = parse_id(args.get(1))?;
            if !store.delete(id) {
                return Err(format!("todo not found: {id}").into());
            }
            println!("removed {id}");
        }
        "clear" => {
            let len_before = store.len();
            store.clear_completed();
            println!("cleared {} completed", len_before - store.len());
        }
        other => {
            print_usage();
            return Err(format!("unknown command `{other}`").into());
        }
    }

    Ok(())
}

fn parse_id(raw: Option<&String>) -> Result<Uuid, Box<dyn Error>> {
    let raw = raw.ok_or("missing <id> argument")?;
    Ok(Uuid::parse_str(raw.trim())?)
}

fn parse_list_flags(args: &[String]) -> Result<(Filter, SortKey), Box<dyn Error>> {
    let mut filter = Filter::default();
    let mut sort = SortKey::default();
    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--filter" => {
                let value = iter.next().ok_or("--filter needs a value")?;
                filter = value.parse()?;
            }
            "--sort" => {
                let value = iter.next().ok_or("--sort needs a value")?;
                sort = value.parse()?;
            }
            other => return Err(format!("unknown flag `{other}`").into()),
        }
    }
    Ok((filter, sort))
}

fn render_list(todos: &[Todo], filter: Filter, sort: SortKey) {
    for todo in visible(todos, filter, sort) {
        let mark = if todo.completed { "x" } else { " " };
        match &todo.description {
            Some(description) => {
                println!("[{mark}] {}  {}  ({description})", todo.id, todo.title)
            }
            None => println!("[{mark}] {}  {}", todo.id, todo.title),
        }
    }
    let tally = counts(todos);
    println!(
        "all {} / active {} / completed {}",
        tally.total, tally.active, tally.completed
    );
}

fn print_usage() {
    println!("quicktodo - local task list");
    println!();
    println!("usage:");
    println!("  quicktodo add <title> [description]");
    println!("  quicktodo list [--filter all|active|completed] [--sort date|title]");
    println!("  quicktodo edit <id> <title> [description]");
    println!("  quicktodo toggle <id>");
    println!("  quicktodo rm <id>");
    println!("  quicktodo clear");
    println!("  quicktodo version");
    println!();
    println!("environment:");
    println!("  QUICKTODO_DB       database file path (default: quicktodo.db)");
    println!("  QUICKTODO_LOG_DIR  enable file logging into this directory");
}
