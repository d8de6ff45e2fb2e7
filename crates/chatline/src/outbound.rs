//! Outbound chat packets and per-player delivery.
//!
//! The transport encodes [`ChatPacket`] values; this module only decides
//! what goes into them. A translation packet always carries the resolved
//! identifier together with its parameters, since the client needs both to
//! produce the localized line.

use chatline_i18n::{LanguageIdentifier, Translated};
use serde::{Deserialize, Serialize};

/// How the client should treat [`ChatPacket::message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PacketKind {
    /// Display the message as-is.
    Raw,
    /// Look the message up in the client's language resources and
    /// substitute the parameters.
    Translation,
}

/// A chat line ready for the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPacket {
    /// Packet kind.
    pub kind: PacketKind,
    /// Rendered text or translation identifier.
    pub message: String,
    /// Parameters substituted by the client, empty for raw packets.
    pub parameters: Vec<String>,
}

impl ChatPacket {
    /// Build a translation packet for a recipient using `locale`.
    #[must_use]
    pub fn translation(message: &Translated, locale: &LanguageIdentifier) -> Self {
        Self {
            kind: PacketKind::Translation,
            message: message.resolve(locale),
            parameters: message.params().to_vec(),
        }
    }

    /// Build a packet carrying text rendered on the server.
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            kind: PacketKind::Raw,
            message: text.into(),
            parameters: Vec::new(),
        }
    }

    /// Whether the client must localize this packet.
    #[must_use]
    pub fn needs_translation(&self) -> bool {
        self.kind == PacketKind::Translation
    }

    /// The packet as JSON, for debugging transports.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// A connected player and the packets queued for them.
#[derive(Debug, Clone)]
pub struct Session {
    name: String,
    locale: LanguageIdentifier,
    outbox: Vec<ChatPacket>,
}

impl Session {
    /// Create a session for a player with their reported locale.
    pub fn new(name: impl Into<String>, locale: LanguageIdentifier) -> Self {
        Self {
            name: name.into(),
            locale,
            outbox: Vec::new(),
        }
    }

    /// Player name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Locale the client reported.
    #[must_use]
    pub const fn locale(&self) -> &LanguageIdentifier {
        &self.locale
    }

    /// Queue a translated message for client-side localization.
    pub fn send_translation(&mut self, message: &Translated) {
        let packet = ChatPacket::translation(message, &self.locale);
        tracing::trace!(player = %self.name, message = %packet.message, "queued translation");
        self.outbox.push(packet);
    }

    /// Queue text rendered on the server.
    pub fn send_raw(&mut self, text: impl Into<String>) {
        self.outbox.push(ChatPacket::raw(text));
    }

    /// Packets queued so far.
    #[must_use]
    pub fn pending(&self) -> &[ChatPacket] {
        &self.outbox
    }

    /// Take every queued packet.
    pub fn drain(&mut self) -> Vec<ChatPacket> {
        std::mem::take(&mut self.outbox)
    }
}
