use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Directory that holds the PCM device nodes.
pub const DEVICE_DIR: &str = "/dev/snd";

/// Literal prefix every PCM device-node name starts with.
const NODE_PREFIX: &str = "pcmC";

/// Stream direction of a PCM device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Capture,
    Playback,
}

impl Direction {
    /// Trailing marker character in the device-node name.
    pub fn marker(self) -> char {
        match self {
            Self::Capture => 'c',
            Self::Playback => 'p',
        }
    }

    fn from_marker(marker: char) -> Option<Self> {
        match marker {
            'c' => Some(Self::Capture),
            'p' => Some(Self::Playback),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Capture => "capture",
            Self::Playback => "playback",
        })
    }
}

/// Address of one PCM device: card index, device index, and direction.
///
/// The identity maps deterministically to a device-node name of the form
/// `pcmC<card>D<device><marker>` with plain decimal indices and a trailing
/// `c` (capture) or `p` (playback).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PcmIdentity {
    pub card: u32,
    pub device: u32,
    pub direction: Direction,
}

impl PcmIdentity {
    pub fn new(card: u32, device: u32, direction: Direction) -> Self {
        Self {
            card,
            device,
            direction,
        }
    }

    /// Device-node filename, e.g. `pcmC0D1c`.
    pub fn node_name(&self) -> String {
        format!(
            "{NODE_PREFIX}{}D{}{}",
            self.card,
            self.device,
            self.direction.marker()
        )
    }

    /// Absolute path of the device node under [`DEVICE_DIR`].
    pub fn device_path(&self) -> PathBuf {
        PathBuf::from(DEVICE_DIR).join(self.node_name())
    }

    /// Parse a device-node filename of the form `pcmC<card>D<device><c|p>`.
    ///
    /// Any deviation yields `None`: wrong prefix, missing `D` separator,
    /// empty or non-decimal index runs, an unknown trailing marker, or an
    /// index that does not fit in `u32` (overflow rejects instead of
    /// wrapping). There are no partial results.
    pub fn parse_node_name(name: &str) -> Option<Self> {
        let rest = name.strip_prefix(NODE_PREFIX)?;
        let (indices, marker) = split_last_char(rest)?;
        let direction = Direction::from_marker(marker)?;
        // First `D` after the prefix separates the index runs; a second
        // one lands in the device run and fails the digit check below.
        let (card, device) = indices.split_once('D')?;
        Some(Self {
            card: parse_index(card)?,
            device: parse_index(device)?,
            direction,
        })
    }
}

impl fmt::Display for PcmIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.node_name())
    }
}

fn split_last_char(s: &str) -> Option<(&str, char)> {
    let mut chars = s.chars();
    let last = chars.next_back()?;
    Some((chars.as_str(), last))
}

/// Decimal index run: non-empty, ASCII digits only, must fit in `u32`.
/// `str::parse` alone is not enough because it admits a leading `+`.
fn parse_index(run: &str) -> Option<u32> {
    if run.is_empty() || !run.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    run.parse().ok()
}
