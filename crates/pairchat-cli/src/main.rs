//! pairchat — terminal front-end for the chat-matching service.

use tracing_subscriber::EnvFilter;

use pairchat_client::{ChatClient, SearchOutcome, SearchRequest};
use pairchat_core::ClientConfig;

mod room;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("search") => {
            if args.len() < 5 {
                eprintln!("Usage: pairchat search <my-gender> <search-gender> <topic>");
                std::process::exit(1);
            }
            run_search(&args[2], &args[3], &args[4]).await
        }
        Some("room") => {
            if args.len() < 3 {
                eprintln!("Usage: pairchat room <room-id>");
                std::process::exit(1);
            }
            let client = connect().await?;
            room::run(&client, &args[2]).await
        }
        Some("online") => run_online().await,
        Some("help") | Some("--help") | Some("-h") | None => {
            print_help();
            Ok(())
        }
        Some(other) => {
            eprintln!("Unknown command: {}. Use 'pairchat help' for usage.", other);
            std::process::exit(1);
        }
    }
}

fn print_help() {
    println!("pairchat — anonymous topic chat");
    println!();
    println!("Usage: pairchat <command>");
    println!();
    println!("Commands:");
    println!("  search <my-gender> <search-gender> <topic>   Find a partner and enter the room");
    println!("  room <room-id>                               Enter an existing room");
    println!("  online                                       Show how many chats are online");
    println!("  help                                         Show this help message");
}

/// Build a client from the environment and run the cookie handshake.
async fn connect() -> anyhow::Result<ChatClient> {
    let mut client = ChatClient::new(ClientConfig::from_env());
    client.handshake().await?;
    Ok(client)
}

async fn run_search(my_gender: &str, search_gender: &str, topic: &str) -> anyhow::Result<()> {
    let client = connect().await?;

    let request = SearchRequest {
        my_gender: my_gender.to_string(),
        search_gender: search_gender.to_string(),
        topic: topic.to_string(),
    };

    match client.search(&request).await? {
        SearchOutcome::Matched { room_id } => {
            println!("Room found: {}", client.room_url(&room_id));
            room::run(&client, &room_id).await
        }
        SearchOutcome::NoRoomFound => {
            // The blocking notice the original page showed as an alert.
            eprintln!("No room was found");
            std::process::exit(1);
        }
        SearchOutcome::Rejected { .. } => {
            // Already reported on the error log channel.
            std::process::exit(1);
        }
    }
}

async fn run_online() -> anyhow::Result<()> {
    let client = ChatClient::new(ClientConfig::from_env());
    let count = client.users_in_chat().await?;
    println!("{} chats online", count);
    Ok(())
}
