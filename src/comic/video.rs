//! Locating the playlist, mp4 and timing file in a comic's video directory

use anyhow::Result;
use std::path::Path;
use tracing::debug;

use super::model::VideoSource;
use crate::listing::list_sorted;

/// Result of inspecting a video directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoScan {
    /// Playlist first, mp4 second
    Found(Vec<VideoSource>),
    MissingDir,
    Empty,
    NoPlaylist,
    NoMp4,
}

impl VideoScan {
    /// Operator-facing explanation for anything but `Found`
    pub fn problem(&self, id: &str) -> Option<String> {
        let msg = match self {
            VideoScan::Found(_) => return None,
            VideoScan::MissingDir => format!(
                "The requested directory doesn't contain a directory called video: {}. Please try again.",
                id
            ),
            VideoScan::Empty => "The video directory is empty. Please put a .mp4 video and a m3u8 playlist with corresponding ts files inside first.".to_string(),
            VideoScan::NoPlaylist => "The video directory doesn't contain a m3u8 playlist. Please put it inside with corresponding ts files.".to_string(),
            VideoScan::NoMp4 => "The video directory doesn't contain an mp4 file. Please put it inside first.".to_string(),
        };
        Some(msg)
    }
}

/// Pick the first `.m3u8` and first `.mp4` (natural order) from `dir`
pub fn scan(dir: &Path) -> Result<VideoScan> {
    if !dir.is_dir() {
        return Ok(VideoScan::MissingDir);
    }

    let files = list_sorted(dir)?;
    if files.is_empty() {
        return Ok(VideoScan::Empty);
    }

    let Some(playlist) = files.iter().find(|f| f.contains(".m3u8")) else {
        return Ok(VideoScan::NoPlaylist);
    };
    let Some(mp4) = files.iter().find(|f| f.contains(".mp4")) else {
        return Ok(VideoScan::NoMp4);
    };

    debug!(playlist = %playlist, mp4 = %mp4, "found video sources");
    Ok(VideoScan::Found(vec![
        VideoSource::hls(playlist),
        VideoSource::mp4(mp4),
    ]))
}

/// First file in `dir` whose name contains `pattern`
pub fn find_vtt(dir: &Path, pattern: &str) -> Result<Option<String>> {
    Ok(list_sorted(dir)?.into_iter().find(|f| f.contains(pattern)))
}
