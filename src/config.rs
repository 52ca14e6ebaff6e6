use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 35350;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_ROOT: &str = "./";

/// How accepted connections are scheduled. Fixed at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThreadingMode {
    /// Handle each connection to completion before accepting the next
    Single,
    /// Spawn one task per accepted connection
    #[default]
    Multi,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Always ends with `/` once loaded through `Config`.
    pub root: String,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: DEFAULT_ROOT.to_string(),
        }
    }
}

/// Server configuration, built once at startup and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
    pub threading: ThreadingMode,
}

/// Command line: `docroot [PORT [ROOT]]`.
#[derive(Debug, Parser)]
#[command(name = "docroot", version, about = "Minimal static file HTTP/1.0 server")]
pub struct Args {
    /// Port to listen on
    #[arg(env = "DOCROOT_PORT")]
    pub port: Option<u16>,

    /// Directory files are served from
    #[arg(env = "DOCROOT_ROOT")]
    pub root: Option<String>,

    /// Address to bind
    #[arg(long, env = "DOCROOT_HOST")]
    pub host: Option<String>,

    /// Connection scheduling model
    #[arg(long, value_enum, env = "DOCROOT_THREADING")]
    pub threading: Option<ThreadingMode>,

    /// YAML file with `server`, `static_files` and `threading` sections
    #[arg(short, long, env = "DOCROOT_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from the process command line and environment.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Layers command line values over the YAML file (if any) and defaults.
    pub fn from_args(args: Args) -> anyhow::Result<Self> {
        let mut cfg = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(port) = args.port {
            cfg.server.port = port;
        }
        if let Some(root) = args.root {
            cfg.static_files.root = root;
        }
        if let Some(host) = args.host {
            cfg.server.host = host;
        }
        if let Some(threading) = args.threading {
            cfg.threading = threading;
        }

        cfg.static_files.root = normalize_root(cfg.static_files.root);
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_yaml(&text).with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        let mut cfg: Config = serde_yaml::from_str(text)?;
        cfg.static_files.root = normalize_root(cfg.static_files.root);
        Ok(cfg)
    }
}

/// Appends `/` to a root path that lacks one.
pub fn normalize_root(mut root: String) -> String {
    if !root.ends_with('/') {
        root.push('/');
    }
    root
}
