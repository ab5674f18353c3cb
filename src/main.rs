use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use storefront_nav::categories::{build_tree, find_name_by_id};
use storefront_nav::config::NavConfig;
use storefront_nav::format_utils::FormatUtils;
use storefront_nav::logging;
use storefront_nav::routes::{
    active_route_chain, build_breadcrumbs, build_sidebar_menu, is_active, MenuEntry,
};
use storefront_nav::tree_utils::TreeUtils;

#[derive(Parser)]
#[command(name = "storefront-nav", version, about = "Category tree and back-office navigation tools")]
struct Cli {
    /// Route table JSON file, defaults to the built-in admin routes
    #[arg(long, global = true, env = "STOREFRONT_NAV_ROUTES")]
    routes: Option<PathBuf>,

    /// Category list JSON file, bare array or {"data": [...]}
    #[arg(long, global = true, env = "STOREFRONT_NAV_CATEGORIES")]
    categories: Option<PathBuf>,

    /// Label shown for unknown categories
    #[arg(long, global = true, default_value = "N/A")]
    not_found_label: String,

    /// Log filters, e.g. "debug" or "storefront_nav=trace"
    #[arg(long, global = true, env = "STOREFRONT_NAV_LOG", default_value = "warn")]
    log: String,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the category forest
    Tree,
    /// Print the category forest as flat rows
    Flatten {
        /// Shorten names to this many characters
        #[arg(long)]
        width: Option<usize>,
    },
    /// Resolve a category or subcategory name
    Name { id: String },
    /// Breadcrumb trail for a path
    Crumbs { path: String },
    /// Active route chain for a path, current route first
    Chain { path: String },
    /// Sidebar menu, optionally marking the entries active for a path
    Menu {
        #[arg(long)]
        active: Option<String>,
    },
    /// Validate the route table and, when given, the category file
    Check,
    /// Render an API timestamp or date the way listings show it
    Date { raw: String },
}

impl Cli {
    fn config(&self) -> NavConfig {
        NavConfig {
            routes_file: self.routes.clone(),
            categories_file: self.categories.clone(),
            not_found_label: self.not_found_label.clone(),
            log_level: self.log.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();
    logging::init_logger(&config.log_level)?;

    run(&cli, &config)
}

fn run(cli: &Cli, config: &NavConfig) -> Result<()> {
    match &cli.command {
        Command::Tree => {
            let tree = build_tree(&config.categories()?);
            if cli.json {
                print_json(&tree)?;
            } else {
                println!("{}", TreeUtils::render_outline(&tree));
            }
        }
        Command::Flatten { width } => {
            let mut rows = TreeUtils::flatten(&build_tree(&config.categories()?));
            if let Some(width) = width {
                for row in &mut rows {
                    row.name = FormatUtils::shorten(&row.name, *width);
                }
            }
            if cli.json {
                print_json(&rows)?;
            } else {
                for row in rows {
                    println!("{}\t{}\t{}\t{}", row.level, row.id, row.name, row.path);
                }
            }
        }
        Command::Name { id } => {
            let tree = build_tree(&config.categories()?);
            let name = config.display_name(find_name_by_id(Some(id.as_str()), &tree));
            if cli.json {
                print_json(&name)?;
            } else {
                println!("{name}");
            }
        }
        Command::Crumbs { path } => {
            let crumbs = build_breadcrumbs(path, &config.route_table()?);
            if cli.json {
                print_json(&crumbs)?;
            } else {
                let trail: Vec<String> = crumbs
                    .iter()
                    .map(|crumb| match &crumb.path {
                        Some(link) => format!("{} <{link}>", crumb.label),
                        None => crumb.label.clone(),
                    })
                    .collect();
                println!("{}", trail.join(" > "));
            }
        }
        Command::Chain { path } => {
            let chain = active_route_chain(path, &config.route_table()?);
            if cli.json {
                print_json(&chain)?;
            } else {
                for route_path in chain {
                    println!("{route_path}");
                }
            }
        }
        Command::Menu { active } => {
            let table = config.route_table()?;
            let menu = build_sidebar_menu(&table);
            let chain = active
                .as_deref()
                .map(|path| active_route_chain(path, &table))
                .unwrap_or_default();
            if cli.json {
                print_json(&menu)?;
            } else {
                print_menu(&menu, &chain, 0);
            }
        }
        Command::Check => {
            let table = config.route_table()?;
            table.validate()?;
            println!("routes: {} ok", table.len());
            if config.categories_file.is_some() {
                let categories = config.categories()?;
                let tree = build_tree(&categories);
                println!(
                    "categories: {} records, {} roots",
                    TreeUtils::count_nodes(&tree),
                    tree.len()
                );
            }
        }
        Command::Date { raw } => {
            let date = FormatUtils::format_date(raw);
            if cli.json {
                print_json(&date)?;
            } else {
                println!("{date}");
            }
        }
    }

    Ok(())
}

fn print_menu(entries: &[MenuEntry], chain: &[String], depth: usize) {
    for entry in entries {
        let marker = if is_active(entry, chain) { "*" } else { " " };
        println!(
            "{marker} {}{} ({})",
            "  ".repeat(depth),
            entry.label(),
            entry.path()
        );
        print_menu(entry.children(), chain, depth + 1);
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}
