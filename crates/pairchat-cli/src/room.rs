//! Interactive room loop — the terminal stand-in for the original room page.

use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

use pairchat_client::ChatClient;

const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Join a room, then multiplex stdin lines with a history poll until the
/// chat ends. A typed line posts a message; `/quit` ends the chat.
pub async fn run(client: &ChatClient, room_id: &str) -> anyhow::Result<()> {
    client.join_room(room_id).await?;

    println!(
        "Connected to room {}. Type to chat, /quit to leave.",
        room_id
    );

    let own_session = client.session_id().unwrap_or_default().to_string();
    let mut printed = 0usize;
    let mut partner_joined = false;

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    let mut poll = tokio::time::interval(POLL_INTERVAL);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line? {
                    Some(line) => {
                        let line = line.trim();
                        if line == "/quit" {
                            client.end_chat(room_id).await?;
                            println!("Chat ended");
                            return Ok(());
                        }
                        if line.is_empty() {
                            continue;
                        }
                        if let Err(e) = client.post_message(room_id, line).await {
                            warn!("message not delivered: {}", e);
                        }
                    }
                    // stdin closed
                    None => {
                        client.end_chat(room_id).await?;
                        return Ok(());
                    }
                }
            }
            _ = poll.tick() => {
                let history = match client.messages(room_id).await {
                    Ok(h) => h,
                    Err(e) => {
                        // The room is deleted once the partner ends the chat.
                        println!("Chat ended ({})", e);
                        return Ok(());
                    }
                };

                if history.second_user_joined && !partner_joined {
                    partner_joined = true;
                    println!("A partner joined the chat");
                }

                for message in history.messages.iter().skip(printed) {
                    let who = if message.session_id == own_session {
                        "you"
                    } else {
                        "partner"
                    };
                    println!("[{}] {}: {}", message.timestamp, who, message.message);
                }
                printed = history.messages.len();
            }
        }
    }
}
