//! `histdom`: command-line browser for the Histórico Domino backend.

use std::fmt::Display;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use histdom_client::{ClientConfig, DominoClient};
use histdom_core::pagination::PageState;
use histdom_core::query::{FilterCondition, ListQuery, SortDirection};
use histdom_core::types::{ClubCode, DbId};

#[derive(Parser)]
#[command(name = "histdom")]
#[command(about = "Browse Histórico Domino clubs, players, championships and results")]
struct Cli {
    /// Backend base URL; overrides HISTDOM_API_URL.
    #[arg(long, global = true)]
    api_url: Option<String>,
    /// Print JSON instead of plain rows.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct PageArgs {
    /// 1-based page number.
    #[arg(long, default_value_t = 1)]
    page: usize,
    /// Items per page; defaults to HISTDOM_PAGE_SIZE.
    #[arg(long)]
    page_size: Option<usize>,
}

#[derive(Subcommand)]
enum Command {
    /// List clubs.
    Clubs {
        #[command(flatten)]
        paging: PageArgs,
    },
    /// Show one club and its players.
    Club { code: String },
    /// List players, optionally only those of one club.
    Players {
        #[arg(long)]
        club: Option<String>,
        #[command(flatten)]
        paging: PageArgs,
    },
    /// List championship types.
    Types,
    /// List championships, newest first.
    Championships {
        #[command(flatten)]
        paging: PageArgs,
    },
    /// List result rows, with optional filters and sort.
    Results {
        /// Filter as FIELD:OPERATOR:VALUE, e.g. `pg:gte:1`. Repeatable.
        #[arg(long = "where", value_name = "FIELD:OP:VALUE")]
        conditions: Vec<String>,
        #[arg(long)]
        sort_by: Option<String>,
        /// Sort descending.
        #[arg(long)]
        desc: bool,
        #[command(flatten)]
        paging: PageArgs,
    },
    /// Player ranking for one championship.
    Standings {
        #[arg(long = "type")]
        championship_type: DbId,
        #[arg(long)]
        nch: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "histdom_client=info,histdom_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // --- Configuration ---
    let config = ClientConfig::from_env_with_url(cli.api_url.as_deref())
        .context("Failed to load configuration")?;
    tracing::info!(base_url = %config.base_url, page_size = config.page_size, "Loaded client configuration");

    let client = DominoClient::new(config).context("Failed to build HTTP client")?;
    let output = Output { json: cli.json };

    match cli.command {
        Command::Clubs { paging } => list_clubs(&client, &paging, output).await,
        Command::Club { code } => show_club(&client, ClubCode::new(code), output).await,
        Command::Players { club, paging } => list_players(&client, club, &paging, output).await,
        Command::Types => list_types(&client, output).await,
        Command::Championships { paging } => list_championships(&client, &paging, output).await,
        Command::Results {
            conditions,
            sort_by,
            desc,
            paging,
        } => list_results(&client, &conditions, sort_by, desc, &paging, output).await,
        Command::Standings {
            championship_type,
            nch,
        } => show_standings(&client, championship_type, nch, output).await,
    }
}

#[derive(Clone, Copy)]
struct Output {
    json: bool,
}

impl Output {
    /// Print `value` as JSON when requested; returns whether it did.
    fn json<T: Serialize>(self, value: &T) -> Result<bool> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        }
        Ok(self.json)
    }
}

fn page_query(client: &DominoClient, paging: &PageArgs) -> ListQuery {
    let size = paging.page_size.unwrap_or(client.config().page_size);
    ListQuery::page(paging.page, size)
}

fn print_footer(paging: &PageState) {
    println!(
        "-- page {} of {} ({} total)",
        paging.current_page(),
        paging.total_pages(),
        paging.total_items()
    );
}

fn or_dash<T: Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| "-".to_string())
}

async fn list_clubs(client: &DominoClient, paging: &PageArgs, output: Output) -> Result<()> {
    let store = client.club_store();
    store
        .fetch_all(page_query(client, paging))
        .await
        .context("Failed to list clubs")?;

    let clubs = store.items();
    if output.json(&clubs)? {
        return Ok(());
    }
    for club in &clubs {
        println!("{:<8} {}", club.code, club.name);
    }
    print_footer(&store.page_state());
    Ok(())
}

async fn show_club(client: &DominoClient, code: ClubCode, output: Output) -> Result<()> {
    let clubs = client.club_store();
    let club = clubs
        .fetch_by_key(&code)
        .await
        .with_context(|| format!("Failed to load club {code}"))?;

    let players = client.player_store();
    players
        .fetch_by_club(&code)
        .await
        .with_context(|| format!("Failed to load players of club {code}"))?;
    let members = players.sorted_by_name();

    if output.json(&serde_json::json!({ "club": club, "players": members }))? {
        return Ok(());
    }
    println!("{} {} (province {})", club.code, club.name, club.province_code);
    for player in &members {
        println!("  {:<9} {}", player.idfed, player.display_name());
    }
    println!("-- {} players", members.len());
    Ok(())
}

async fn list_players(
    client: &DominoClient,
    club: Option<String>,
    paging: &PageArgs,
    output: Output,
) -> Result<()> {
    let store = client.player_store();
    match &club {
        Some(code) => store
            .fetch_by_club(&ClubCode::new(code.as_str()))
            .await
            .with_context(|| format!("Failed to list players of club {code}"))?,
        None => store
            .fetch_all(page_query(client, paging))
            .await
            .context("Failed to list players")?,
    }

    let players = store.sorted_by_name();
    if output.json(&players)? {
        return Ok(());
    }
    for player in &players {
        println!(
            "{:<9} {:<32} {}",
            player.idfed,
            player.display_name(),
            player.club_code
        );
    }
    if club.is_none() {
        print_footer(&store.page_state());
    }
    Ok(())
}

async fn list_types(client: &DominoClient, output: Output) -> Result<()> {
    let store = client.championship_type_store();
    store
        .fetch_all(ListQuery::default())
        .await
        .context("Failed to list championship types")?;

    let types = store.items();
    if output.json(&types)? {
        return Ok(());
    }
    for kind in &types {
        println!("{:>3} {} {}", kind.id, kind.code, kind.name);
    }
    Ok(())
}

async fn list_championships(client: &DominoClient, paging: &PageArgs, output: Output) -> Result<()> {
    let store = client.championship_store();
    store
        .fetch_all(page_query(client, paging))
        .await
        .context("Failed to list championships")?;

    let championships = store.sorted_by_date();
    if output.json(&championships)? {
        return Ok(());
    }
    for championship in &championships {
        println!(
            "{} {:>4} {:<32} {}",
            championship.start_date,
            or_dash(&championship.nch),
            championship.name,
            or_dash(&championship.championship_type_name)
        );
    }
    print_footer(&store.page_state());
    Ok(())
}

async fn list_results(
    client: &DominoClient,
    conditions: &[String],
    sort_by: Option<String>,
    desc: bool,
    paging: &PageArgs,
    output: Output,
) -> Result<()> {
    let mut query = page_query(client, paging);
    for raw in conditions {
        let condition =
            FilterCondition::parse(raw).with_context(|| format!("Invalid --where '{raw}'"))?;
        query = query.with_condition(condition);
    }
    if let Some(field) = sort_by {
        let direction = if desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        query = query.sorted_by(field, direction);
    }

    let store = client.result_store();
    store
        .fetch_all(query)
        .await
        .context("Failed to list results")?;

    let rows = store.items();
    if output.json(&rows)? {
        return Ok(());
    }
    for row in &rows {
        println!(
            "{} {:>4} {:<9} {:<32} game {:>2} pg {} dif {:>4} pt {}",
            row.championship_date,
            row.nch,
            row.player_idfed,
            row.player_display_name(),
            or_dash(&row.game),
            or_dash(&row.games_won),
            or_dash(&row.point_difference),
            or_dash(&row.total_points)
        );
    }
    print_footer(&store.page_state());
    Ok(())
}

async fn show_standings(
    client: &DominoClient,
    championship_type: DbId,
    nch: i64,
    output: Output,
) -> Result<()> {
    let store = client.result_store();
    store
        .fetch_by_championship(championship_type, nch)
        .await
        .with_context(|| format!("Failed to load results of championship {championship_type}/{nch}"))?;

    let standings = store.standings();
    if output.json {
        let rows: Vec<_> = standings
            .iter()
            .map(|s| {
                serde_json::json!({
                    "idfed": s.idfed,
                    "name": s.display_name,
                    "club": s.club_code,
                    "games": s.games_played,
                    "wins": s.wins,
                    "point_difference": s.point_difference,
                    "total_points": s.total_points,
                })
            })
            .collect();
        output.json(&rows)?;
        return Ok(());
    }

    for (rank, standing) in standings.iter().enumerate() {
        println!(
            "{:>3}. {:<9} {:<32} games {:>2} wins {:>2} dif {:>5} pt {}",
            rank + 1,
            standing.idfed,
            standing.display_name,
            standing.games_played,
            standing.wins,
            standing.point_difference,
            standing.total_points
        );
    }
    Ok(())
}
