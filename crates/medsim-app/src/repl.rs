//! Interactive read-respond-print loop around a `ConversationSession`.

use std::io::{self, BufRead, Write};

use medsim_ai::{classify, AiClient, ConversationSession};
use tracing::{debug, info};

pub const BANNER: &str = "Chatbot is running! Type 'exit' to stop.";
pub const FAREWELL: &str = "Chatbot: Goodbye!";

/// Commands that end the session, compared case-insensitively.
pub const EXIT_COMMANDS: &[&str] = &["exit", "quit", "خروج"];

pub fn is_exit_command(input: &str) -> bool {
    let lowered = input.trim().to_lowercase();
    EXIT_COMMANDS.contains(&lowered.as_str())
}

/// Run the loop until an exit command or end of input.
pub async fn run<R: BufRead, W: Write>(
    session: &mut ConversationSession,
    client: &dyn AiClient,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    writeln!(output, "{BANNER}")?;

    let mut line = String::new();
    loop {
        write!(output, "You: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("end of input");
            writeln!(output)?;
            writeln!(output, "{FAREWELL}")?;
            break;
        }

        let user_input = line.trim();
        if is_exit_command(user_input) {
            writeln!(output, "{FAREWELL}")?;
            break;
        }

        let lang = classify(user_input);
        let reply = session.respond(client, user_input, lang).await;
        writeln!(output, "Chatbot: {reply}")?;
    }

    info!(turns = session.turn_count(), "session ended");
    Ok(())
}
