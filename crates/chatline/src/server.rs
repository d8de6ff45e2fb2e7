//! Chat state for connected players.
//!
//! Everything players see goes through [`Session`] packets and is localized
//! on their client. The console gets the fallback rendering of the same
//! messages.

use crate::console::ConsoleSink;
use crate::error::{ServerError, ServerResult};
use crate::outbound::{ChatPacket, Session};
use chatline_config::Config;
use chatline_i18n::locale::parse_locale_or_default;
use chatline_i18n::{
    translate, Translated, MESSAGE_COMMAND_SYNTAX, MESSAGE_COMMAND_UNKNOWN, MESSAGE_COMMAND_USAGE,
    MESSAGE_JOIN, MESSAGE_QUIT, MESSAGE_SERVER_DISCONNECT,
};
use tracing::{debug, info};

/// Usage line shown for an empty command.
const COMMAND_USAGE: &str = "/<command> [arguments]";

/// Server-side chat state.
#[derive(Debug)]
pub struct ChatServer {
    config: Config,
    sessions: Vec<Session>,
    console: ConsoleSink,
}

impl ChatServer {
    /// Creates a new server with no players online.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_console(config, ConsoleSink::default())
    }

    /// Creates a new server with a custom console sink.
    #[must_use]
    pub fn with_console(config: Config, console: ConsoleSink) -> Self {
        info!("Starting {}", config.server.name);
        Self {
            config,
            sessions: Vec::new(),
            console,
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Names of online players, in join order.
    #[must_use]
    pub fn players(&self) -> Vec<&str> {
        self.sessions.iter().map(Session::name).collect()
    }

    /// The session of an online player.
    #[must_use]
    pub fn session(&self, name: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.name() == name)
    }

    /// Take every packet queued for every player.
    pub fn drain(&mut self) -> Vec<(String, ChatPacket)> {
        self.sessions
            .iter_mut()
            .flat_map(|session| {
                let name = session.name().to_string();
                session
                    .drain()
                    .into_iter()
                    .map(move |packet| (name.clone(), packet))
            })
            .collect()
    }

    /// Add a player and announce them to everyone, including themselves.
    ///
    /// An unparseable `locale_code` falls back to the default locale.
    pub fn join(&mut self, name: &str, locale_code: &str) -> ServerResult<()> {
        if self.session(name).is_some() {
            return Err(ServerError::AlreadyOnline(name.to_string()));
        }
        let max = self.config.server.maximum_players;
        if max > 0 && self.sessions.len() >= max {
            return Err(ServerError::Full { max });
        }

        let locale = parse_locale_or_default(locale_code);
        debug!(player = name, %locale, "player joined");
        self.sessions.push(Session::new(name, locale));
        self.broadcast(&MESSAGE_JOIN.fill([name]));
        Ok(())
    }

    /// Remove a player and announce it to the others.
    pub fn quit(&mut self, name: &str) -> ServerResult<()> {
        let index = self
            .sessions
            .iter()
            .position(|s| s.name() == name)
            .ok_or_else(|| ServerError::UnknownPlayer(name.to_string()))?;
        self.sessions.remove(index);

        debug!(player = name, "player left");
        self.broadcast(&MESSAGE_QUIT.fill([name]));
        Ok(())
    }

    /// Send a message to every player and the console.
    pub fn broadcast(&mut self, message: &Translated) {
        self.console.log(message);
        for session in &mut self.sessions {
            session.send_translation(message);
        }
    }

    /// Run a command line for a player. Output and failures are sent to
    /// that player only.
    pub fn command(&mut self, player: &str, line: &str) -> ServerResult<()> {
        let outcome = self.dispatch(line);
        let session = self
            .sessions
            .iter_mut()
            .find(|s| s.name() == player)
            .ok_or_else(|| ServerError::UnknownPlayer(player.to_string()))?;

        match outcome {
            Ok(output) => session.send_raw(output),
            Err(reason) => {
                debug!(player, %reason, "command failed");
                session.send_translation(&reason);
            }
        }
        Ok(())
    }

    /// Execute a command line. The error is the message explaining the
    /// failure to the player.
    pub fn dispatch(&self, line: &str) -> Result<String, Translated> {
        let line = line.trim_start().trim_start_matches('/');
        let (name, args) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line, ""));

        match name {
            "" => Err(MESSAGE_COMMAND_USAGE.fill([COMMAND_USAGE])),
            "list" => {
                let args = args.trim();
                if !args.is_empty() {
                    let (at, after) = args.split_once(char::is_whitespace).unwrap_or((args, ""));
                    return Err(translate!(MESSAGE_COMMAND_SYNTAX, "/list ", at, after));
                }
                Ok(self.list_line())
            }
            unknown => Err(MESSAGE_COMMAND_UNKNOWN.fill([unknown])),
        }
    }

    /// Disconnect everyone, returning the packet each player is sent.
    ///
    /// The configured shutdown message is sent as-is; without one, players
    /// get the localized default disconnect message.
    pub fn shutdown(&mut self) -> Vec<(String, ChatPacket)> {
        let custom = self.config.server.shutdown_message().map(str::to_string);
        let default = translate!(MESSAGE_SERVER_DISCONNECT);

        match &custom {
            Some(text) => info!("Shutting down: {}", self.console.render_text(text)),
            None => {
                self.console.log(&default);
            }
        }

        self.sessions
            .drain(..)
            .map(|session| {
                let packet = custom.as_ref().map_or_else(
                    || ChatPacket::translation(&default, session.locale()),
                    ChatPacket::raw,
                );
                (session.name().to_string(), packet)
            })
            .collect()
    }

    fn list_line(&self) -> String {
        let max = match self.config.server.maximum_players {
            0 => "unlimited".to_string(),
            n => n.to_string(),
        };
        format!(
            "There are {}/{} players online: {}",
            self.sessions.len(),
            max,
            self.players().join(", ")
        )
    }
}
