//! Command dispatch for the `giphy` binary.

use crate::error::{GiphyError, Result};
use crate::opener::UrlOpener;
use crate::source::GifSource;
use crate::types::MediaUrls;
use std::io::Write;

/// Command table shown in the usage text.
pub const COMMANDS_HELP: &str = "Commands:
\tsearch, s           [args]
\tgif, id             [args]
\trandom, rand, r     [args]
\ttranslate, trans, t [args]
\ttrending, trend, tr [args]";

/// The five operations reachable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Search by query.
    Search,
    /// Fetch by id.
    Gif,
    /// Random GIF, optionally by tag.
    Random,
    /// Phrase translation.
    Translate,
    /// Trending GIFs.
    Trending,
}

impl Command {
    /// Resolves a command token or one of its aliases.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "search" | "s" => Some(Self::Search),
            "gif" | "id" => Some(Self::Gif),
            "random" | "rand" | "r" => Some(Self::Random),
            "translate" | "trans" | "t" => Some(Self::Translate),
            "trending" | "trend" | "tr" => Some(Self::Trending),
            _ => None,
        }
    }

    /// Canonical token.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Gif => "gif",
            Self::Random => "random",
            Self::Translate => "translate",
            Self::Trending => "trending",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a dispatch did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No known command; usage was printed.
    Usage,
    /// URLs printed, one per line.
    Printed(Vec<String>),
}

/// Maps a command token to a [`GifSource`] call and prints the result.
pub struct Dispatcher<'a> {
    source: &'a dyn GifSource,
    opener: Option<&'a dyn UrlOpener>,
    usage: String,
}

impl<'a> Dispatcher<'a> {
    /// Creates a dispatcher printing [`COMMANDS_HELP`] as usage.
    pub fn new(source: &'a dyn GifSource) -> Self {
        Self {
            source,
            opener: None,
            usage: COMMANDS_HELP.to_string(),
        }
    }

    /// Opens every printed URL with `opener`.
    pub fn opener(mut self, opener: &'a dyn UrlOpener) -> Self {
        self.opener = Some(opener);
        self
    }

    /// Replaces the usage text.
    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    /// Runs `token` with positional `args`, writing output to `out`.
    ///
    /// An unknown or missing token prints usage and is not an error.
    pub async fn execute<W: Write>(
        &self,
        token: Option<&str>,
        args: &[String],
        out: &mut W,
    ) -> Result<Outcome> {
        let Some(command) = token.and_then(Command::from_token) else {
            if let Some(token) = token {
                tracing::debug!(token, "unknown command");
            }
            writeln!(out, "{}", self.usage)?;
            return Ok(Outcome::Usage);
        };

        let urls = self.fetch(command, args).await?;
        if urls.is_empty() {
            return Err(GiphyError::EmptyResult(format!(
                "no image URL in {command} response"
            )));
        }

        for url in &urls {
            writeln!(out, "{url}")?;
            if let Some(opener) = self.opener {
                if let Err(e) = opener.open(url) {
                    tracing::warn!(url = %url, "{e}");
                    writeln!(out, "{e}")?;
                }
            }
        }

        Ok(Outcome::Printed(urls))
    }

    async fn fetch(&self, command: Command, args: &[String]) -> Result<Vec<String>> {
        let joined = args.join(" ");
        match command {
            Command::Search => Ok(owned(&self.source.search(&joined).await?)),
            Command::Gif => {
                let id = args
                    .first()
                    .ok_or_else(|| GiphyError::InvalidArgument("missing Giphy id".into()))?;
                Ok(owned(&self.source.gif(id).await?))
            }
            Command::Random => {
                let tag = Some(joined.as_str()).filter(|t| !t.trim().is_empty());
                Ok(owned(&self.source.random(tag).await?))
            }
            Command::Translate => Ok(owned(&self.source.translate(&joined).await?)),
            Command::Trending => Ok(owned(&self.source.trending().await?)),
        }
    }
}

fn owned<T: MediaUrls>(result: &T) -> Vec<String> {
    result.media_urls().into_iter().map(str::to_owned).collect()
}
