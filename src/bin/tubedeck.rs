use eyre::Context;
use std::io::IsTerminal;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tubedeck::backend::RestFavoritesTable;
use tubedeck::library::{FavoriteKind, FavoritesTable, LibraryStore};
use tubedeck::notify::TerminalNotifier;
use tubedeck::player::PlayerPage;
use tubedeck::shorts::ShortsFeed;
use tubedeck::youtube_api::{format_count, format_date};
use tubedeck::{AppConfig, setup_clients};

const USAGE: &str = "\
usage: tubedeck <command> [args]

commands:
  home                    trending videos
  search <query>          search for videos
  shorts                  browse the short-form feed
  player <video-id>       video details, channel, and comments
  library                 your saved videos and favorited channels
  save <video-id>         save a video to your library
  unsave <video-id>       remove a video from your library
  favorite <channel-id>   add a channel to your favorites
  unfavorite <channel-id> remove a channel from your favorites
  settings                show the resolved configuration

environment:
  TUBEDECK_BACKEND_URL      backend project URL (required)
  TUBEDECK_BACKEND_KEY      backend publishable key (required)
  TUBEDECK_USER             signed-in user id (optional)
  TUBEDECK_YOUTUBE_API_KEY  override the backend-provided API key (optional)";

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_ansi(std::io::stdout().is_terminal())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(command) = args.next() else {
        eprintln!("{USAGE}");
        std::process::exit(2);
    };

    if command == "help" || command == "--help" || command == "-h" {
        println!("{USAGE}");
        return Ok(());
    }

    let config = AppConfig::from_env()?;

    if command == "settings" {
        let session = config.session();
        println!("account:          {}", match session.current_user() {
            Some(user) => user.as_str(),
            None => "(not signed in)",
        });
        println!("backend:          {}", config.backend_url);
        println!("youtube api key:  {}", config.youtube_key_source());
        return Ok(());
    }

    let (yt, backend) = setup_clients(&config).await?;
    let table = RestFavoritesTable::new(backend);
    let session = config.session();

    match command.as_str() {
        "home" => {
            let videos = yt.trending_videos(15).await.context("fetch trending videos")?;
            for video in &videos {
                let views = video
                    .statistics
                    .as_ref()
                    .and_then(|s| s.view_count.as_deref())
                    .map(format_count)
                    .unwrap_or_else(|| "N/A".to_string());
                println!(
                    "{}  {} — {} ({} views, {})",
                    video.id,
                    video.snippet.title,
                    video.snippet.channel_title,
                    views,
                    format_date(video.snippet.published_at),
                );
            }
        }
        "search" => {
            let query = args.next().ok_or_else(|| eyre::eyre!("search needs a query"))?;
            let results = yt.search_videos(&query, 15).await.context("search videos")?;
            if results.is_empty() {
                println!("no results for {query:?}");
            }
            for result in &results {
                println!(
                    "{}  {} — {} ({})",
                    result.id.video_id,
                    result.snippet.title,
                    result.snippet.channel_title,
                    format_date(result.snippet.published_at),
                );
            }
        }
        "shorts" => {
            let mut feed = ShortsFeed::load(&yt).await.context("load shorts feed")?;
            if feed.is_empty() {
                println!("no short videos available");
                return Ok(());
            }
            loop {
                // The terminal stands in for the swipe feed: print every
                // short in cursor order with its watch URL.
                let short = feed.current().expect("cursor is always valid");
                println!(
                    "{} — {}\n    {}",
                    short.snippet.title,
                    short.snippet.channel_title,
                    feed.watch_url().expect("current short has a URL"),
                );
                if !feed.next() {
                    break;
                }
            }
        }
        "player" => {
            let video_id = args.next().ok_or_else(|| eyre::eyre!("player needs a video id"))?;
            let page = PlayerPage::load(&yt, &table, &video_id)
                .await
                .context("load player page")?;

            let snippet = &page.video.snippet;
            println!("{}", snippet.title);
            println!(
                "{} · published {}",
                snippet.channel_title,
                format_date(snippet.published_at)
            );
            if let Some(stats) = &page.video.statistics {
                println!(
                    "{} views · {} likes",
                    stats.view_count.as_deref().map(format_count).unwrap_or_else(|| "N/A".into()),
                    stats.like_count.as_deref().map(format_count).unwrap_or_else(|| "N/A".into()),
                );
            }
            println!(
                "saved: {} · channel favorited: {}",
                if page.video_saved { "yes" } else { "no" },
                if page.favorite_channel { "yes" } else { "no" },
            );

            if let Some(channel) = &page.channel {
                let subscribers = channel
                    .statistics
                    .as_ref()
                    .and_then(|s| s.subscriber_count.as_deref())
                    .map(format_count)
                    .unwrap_or_else(|| "N/A".to_string());
                println!("\nchannel: {} ({} subscribers)", channel.snippet.title, subscribers);
            }

            if !page.comments.is_empty() {
                println!("\ncomments:");
                for thread in &page.comments {
                    let comment = &thread.snippet.top_level_comment.snippet;
                    println!(
                        "  {} ({}): {}",
                        comment.author_display_name,
                        format_date(comment.published_at),
                        comment.text_display,
                    );
                }
            }
        }
        "library" => {
            let mut store = LibraryStore::new(table, TerminalNotifier);
            if store.fetch_library(&session).await.is_err() {
                std::process::exit(1);
            }

            println!("saved videos:");
            if store.videos().is_empty() {
                println!("  (none)");
            }
            for row in store.videos() {
                println!("  {}  {} — {}", row.id, row.display_title(), row.channel_title);
            }

            println!("favorited channels:");
            if store.channels().is_empty() {
                println!("  (none)");
            }
            for row in store.channels() {
                println!("  {}  {}", row.id, row.display_title());
            }
        }
        "save" => {
            let video_id = args.next().ok_or_else(|| eyre::eyre!("save needs a video id"))?;
            let video = yt.get_video(&video_id).await.context("fetch video details")?;
            let mut store = LibraryStore::new(table, TerminalNotifier);
            if store.save_video(&session, &(&video).into()).await.is_err() {
                std::process::exit(1);
            }
        }
        "unsave" => {
            let video_id = args.next().ok_or_else(|| eyre::eyre!("unsave needs a video id"))?;
            let Some(row) = table
                .find(&video_id, FavoriteKind::Video)
                .await
                .context("look up saved video")?
            else {
                println!("video {video_id} is not in your library");
                return Ok(());
            };
            let mut store = LibraryStore::new(table, TerminalNotifier);
            if store.remove_video(&session, &row.id).await.is_err() {
                std::process::exit(1);
            }
        }
        "favorite" => {
            let channel_id = args.next().ok_or_else(|| eyre::eyre!("favorite needs a channel id"))?;
            let channel = yt.get_channel(&channel_id).await.context("fetch channel details")?;
            let mut store = LibraryStore::new(table, TerminalNotifier);
            if store
                .favorite_channel(&session, &(&channel).into())
                .await
                .is_err()
            {
                std::process::exit(1);
            }
        }
        "unfavorite" => {
            let channel_id = args.next().ok_or_else(|| eyre::eyre!("unfavorite needs a channel id"))?;
            let Some(row) = table
                .find(&channel_id, FavoriteKind::Channel)
                .await
                .context("look up favorited channel")?
            else {
                println!("channel {channel_id} is not in your favorites");
                return Ok(());
            };
            let mut store = LibraryStore::new(table, TerminalNotifier);
            if store.remove_channel(&session, &row.id).await.is_err() {
                std::process::exit(1);
            }
        }
        other => {
            eprintln!("unknown command: {other}\n\n{USAGE}");
            std::process::exit(2);
        }
    }

    Ok(())
}
