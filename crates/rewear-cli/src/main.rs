use anyhow::Context;
use clap::Parser;
use rewear_core::catalog::{facet, results_summary, toggle_favorite, FilterCriteria, SortKey};
use rewear_core::dashboard::DashboardStats;
use rewear_core::detail::{quote_redemption, request_swap};
use rewear_core::models::{Category, Condition, Item, Size, Style};
use rewear_core::{seed, Config, Exporter, ItemSource, JsonFileSource, ListingDraft, Marketplace, SeedCatalog};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "rewear")]
#[command(version, about = "Browse, list and swap pre-loved clothing", long_about = None)]
struct Cli {
    /// Read items from a JSON file instead of the demo catalog
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Search and filter the catalog
    Browse {
        /// Matches title or category, case-insensitive
        #[arg(short, long, default_value = "")]
        search: String,
        #[arg(long, default_value = "all")]
        category: String,
        #[arg(long, default_value = "all")]
        size: String,
        #[arg(long, default_value = "all")]
        condition: String,
        /// featured, newest, points-low or points-high
        #[arg(long)]
        sort: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Also write the result to a .json, .csv or .md file
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Estimate the points value of an item
    Estimate {
        /// e.g. Outerwear, Shoes, Designer
        category: String,
        /// e.g. "New with Tags", Excellent, Fair
        condition: String,
    },
    /// List a new item
    List {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        condition: String,
        #[arg(long)]
        size: Option<String>,
        /// Casual, Formal, Business, Party, Vintage, Designer or Sustainable
        #[arg(long)]
        style: Option<String>,
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Number of placeholder photos to attach
        #[arg(long, default_value_t = 1)]
        images: usize,
    },
    /// Show item details
    Show { id: u64 },
    /// Request a swap for an item
    Swap { id: u64 },
    /// Quote redeeming an item with points
    Redeem {
        id: u64,
        /// Points balance (defaults to the configured wallet)
        #[arg(long)]
        balance: Option<u32>,
    },
    /// Toggle an item's favorite flag and show the catalog
    Favorite { id: u64 },
    /// Show the demo user's dashboard
    Dashboard,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rewear=info,rewear_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::load().context("Failed to load config")?;

    let catalog_file = cli.catalog.or_else(|| config.catalog.catalog_file.clone());
    let source: Box<dyn ItemSource> = match catalog_file {
        Some(path) => {
            tracing::info!("Using catalog file: {}", path.display());
            Box::new(JsonFileSource::new(path))
        }
        None => Box::new(SeedCatalog),
    };
    let market = Marketplace::new(source);

    match cli.command {
        Some(Commands::Browse {
            search,
            category,
            size,
            condition,
            sort,
            json,
            export,
        }) => {
            let criteria = FilterCriteria {
                search_term: search,
                category: facet(&category),
                size: facet(&size),
                condition: facet(&condition),
                sort_key: sort
                    .as_deref()
                    .map(SortKey::parse)
                    .unwrap_or(config.catalog.default_sort),
            };
            tracing::info!("Browsing with {:?}", criteria);

            let items = market.browse(&criteria)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                print_items(&items);
            }
            if let Some(path) = export {
                Exporter::export_to_file(&items, &path)
                    .with_context(|| format!("Failed to export to {}", path.display()))?;
            }
        }
        Some(Commands::Estimate {
            category,
            condition,
        }) => {
            let points = rewear_core::estimate_points(
                &Category::from_label(&category),
                &Condition::from_label(&condition),
            );
            println!("{} points", points);
        }
        Some(Commands::List {
            title,
            description,
            category,
            condition,
            size,
            style,
            tags,
            images,
        }) => {
            let mut draft = ListingDraft {
                title,
                description,
                category: facet(&category),
                size: size.as_deref().map(Size::from_label),
                condition: facet(&condition),
                style: style.as_deref().and_then(Style::from_label),
                ..ListingDraft::default()
            };
            for tag in &tags {
                if !draft.add_tag(tag) {
                    tracing::warn!("Skipping tag: {}", tag);
                }
            }
            for _ in 0..images {
                draft.add_placeholder_image();
            }
            println!("Estimated points: {}", draft.estimated_points());

            let item = draft.submit(market.next_id()?)?;
            println!(
                "Your {} has been listed and is now available for swapping.",
                item.title
            );
            println!("{}", serde_json::to_string_pretty(&item)?);
        }
        Some(Commands::Show { id }) => {
            let detail = seed::detail_for(&market.find(id)?);
            let item = &detail.item;
            let badge = if item.featured { " [featured]" } else { "" };
            println!("#{} {}{}", item.id, item.title, badge);
            println!(
                "{} | Size {} | {}",
                item.category, item.size, item.condition
            );
            println!("{} points ({})", item.points, detail.availability.label());
            if !detail.description.is_empty() {
                println!("\n{}", detail.description);
            }
            if !detail.tags.is_empty() {
                println!("\nTags: {}", detail.tags.join(", "));
            }
            println!(
                "\nListed by {} ({} swaps)",
                detail.lister.name, detail.lister.total_swaps
            );
        }
        Some(Commands::Swap { id }) => {
            let detail = seed::detail_for(&market.find(id)?);
            let request = request_swap(&detail)?;
            println!("{}", request.message());
        }
        Some(Commands::Redeem { id, balance }) => {
            let detail = seed::detail_for(&market.find(id)?);
            let balance = balance.unwrap_or(config.wallet.starting_balance);
            let quote = quote_redemption(&detail, balance)?;
            println!(
                "Redeem {} for {} points. Balance: {} -> {}",
                detail.item.title, quote.cost, quote.balance_before, quote.balance_after
            );
        }
        Some(Commands::Favorite { id }) => {
            let items = market.browse(&FilterCriteria::new().sort(SortKey::Unsorted))?;
            let before = items.iter().find(|i| i.id == id).map(|i| i.favorited);
            let Some(was_favorited) = before else {
                anyhow::bail!("Item not found: {}", id);
            };
            let items = toggle_favorite(&items, id);
            if was_favorited {
                println!("Removed from favorites");
            } else {
                println!("Added to favorites");
            }
            print_items(&items);
        }
        Some(Commands::Dashboard) => {
            let user = seed::demo_user();
            let listings = seed::owned_listings();
            let history = seed::activity_history();
            let stats = DashboardStats::compute(&listings, &history);

            println!("[{}] Welcome back, {}!", user.initials(), user.name);
            println!("Member since {} | {} points available\n", user.join_date, user.points);
            println!(
                "Items listed: {} | Successful swaps: {} | Total favorites: {}\n",
                stats.items_listed, stats.successful_swaps, stats.total_favorites
            );

            println!("My items:");
            for listing in &listings {
                println!(
                    "  #{} {} - {} pts [{}] {} views, {} ♥",
                    listing.item.id,
                    listing.item.title,
                    listing.item.points,
                    listing.status.label(),
                    listing.views,
                    listing.favorites
                );
            }

            println!("\nHistory:");
            for activity in &history {
                let with = activity
                    .with_user
                    .as_ref()
                    .map(|u| format!("with {} • ", u))
                    .unwrap_or_default();
                println!(
                    "  {} {} ({}{}) {} [{}]",
                    activity.kind.symbol(),
                    activity.headline(),
                    with,
                    activity.date,
                    activity.points_label(),
                    activity.status.label()
                );
            }
        }
        None => {
            println!("No command specified. Try --help");
        }
    }

    Ok(())
}

fn print_items(items: &[Item]) {
    println!("{}", results_summary(items.len()));
    if items.is_empty() {
        println!("No items found. Try adjusting your search or filters.");
        return;
    }
    for item in items {
        let star = if item.featured { "★" } else { " " };
        let heart = if item.favorited { "♥" } else { " " };
        println!(
            "{}{} #{:<3} {:<24} {:<12} {:<9} {:<14} {:>4} pts",
            star,
            heart,
            item.id,
            item.title,
            item.category.label(),
            item.size.label(),
            item.condition.label(),
            item.points
        );
    }
}
