//! Background music on/off state.

use thiserror::Error;
use tracing::debug;

/// Why a playback request did not start the music.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// The environment refuses to start audio without a user gesture.
    #[error("autoplay blocked")]
    AutoplayBlocked,

    #[error("playback failed: {0}")]
    Failed(String),
}

/// A media element that can be started and paused.
pub trait Playback {
    fn play(&mut self) -> Result<(), PlaybackError>;
    fn pause(&mut self);
}

/// Tracks whether music is audible. A refused `play` is a normal outcome and
/// only leaves the flag at `false`.
#[derive(Debug)]
pub struct MusicToggle<P: Playback> {
    player: P,
    playing: bool,
}

impl<P: Playback> MusicToggle<P> {
    pub fn new(player: P) -> Self {
        MusicToggle {
            player,
            playing: false,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Attempt to start playing without user interaction.
    pub fn autoplay(&mut self) -> bool {
        self.try_play()
    }

    /// Pause when playing, otherwise try to play. Returns the new flag.
    pub fn toggle(&mut self) -> bool {
        if self.playing {
            self.player.pause();
            self.playing = false;
            false
        } else {
            self.try_play()
        }
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    fn try_play(&mut self) -> bool {
        self.playing = match self.player.play() {
            Ok(()) => true,
            Err(err) => {
                debug!(%err, "music not started, waiting for user action");
                false
            }
        };
        self.playing
    }
}
