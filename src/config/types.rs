use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub media: MediaConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MediaConfig {
    /// URL prefix every media route is mounted under (e.g. `/media`)
    #[serde(default = "default_base_route")]
    pub base_route: String,

    /// Directory scanned for media at startup
    #[serde(default = "default_media_path")]
    pub media_path: PathBuf,
}

pub(crate) fn default_base_route() -> String {
    "/media".to_string()
}
pub(crate) fn default_media_path() -> PathBuf {
    PathBuf::from("./media")
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            base_route: default_base_route(),
            media_path: default_media_path(),
        }
    }
}

impl MediaConfig {
    /// Media root with a leading `~` expanded to the home directory.
    pub fn resolved_media_path(&self) -> PathBuf {
        let raw = self.media_path.to_string_lossy();
        PathBuf::from(shellexpand::tilde(raw.as_ref()).as_ref())
    }
}
