//! Factory configuration

use std::path::PathBuf;

/// Environment variable holding extra libVLC arguments, whitespace separated
pub const ARGS_ENV: &str = "VLCR_ARGS";
/// Environment variable libVLC reads its plugin directory from
pub const PLUGIN_PATH_ENV: &str = "VLC_PLUGIN_PATH";

/// Application identity reported to the platform (audio policy, MPRIS...)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AppId {
    /// Reverse-DNS identifier, e.g. `org.example.player`
    pub id: String,
    pub version: String,
    pub icon: String,
}

/// Configuration used to create a [`crate::MediaPlayerFactory`]
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FactoryConfig {
    /// Explicit libVLC shared library (None = search `LIBVLC_PATH` and the
    /// platform defaults)
    pub library_path: Option<PathBuf>,
    /// Arguments passed to `libvlc_new`, e.g. `--no-video-title-show`
    pub args: Vec<String>,
    /// Plugin directory exported as `VLC_PLUGIN_PATH` before initialisation,
    /// unless the variable is already set. This changes the environment of
    /// the whole process, see the `plugin_path` builder method.
    pub plugin_path: Option<PathBuf>,
    /// Application name and HTTP user agent
    pub user_agent: Option<(String, String)>,
    pub app_id: Option<AppId>,
    /// Adds `--quiet` to silence libVLC's own logging
    pub quiet: bool,
}

impl FactoryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `LIBVLC_PATH`, `VLC_PLUGIN_PATH` and `VLCR_ARGS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            library_path: non_empty(vlcr_sys::loader::LIBVLC_PATH_ENV).map(PathBuf::from),
            args: non_empty(ARGS_ENV)
                .map(|v| v.split_whitespace().map(str::to_string).collect())
                .unwrap_or_default(),
            plugin_path: non_empty(PLUGIN_PATH_ENV).map(PathBuf::from),
            ..Self::default()
        }
    }

    pub fn library_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.library_path = Some(path.into());
        self
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Sets the plugin directory.
    ///
    /// The factory exports it with `std::env::set_var`, which affects the
    /// whole process and races with other threads reading the environment
    /// (including C code calling `getenv`). Create the factory before
    /// spawning such threads, or set `VLC_PLUGIN_PATH` yourself at startup.
    pub fn plugin_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.plugin_path = Some(path.into());
        self
    }

    pub fn user_agent(mut self, name: impl Into<String>, http: impl Into<String>) -> Self {
        self.user_agent = Some((name.into(), http.into()));
        self
    }

    pub fn app_id(
        mut self,
        id: impl Into<String>,
        version: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        self.app_id = Some(AppId {
            id: id.into(),
            version: version.into(),
            icon: icon.into(),
        });
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Final argument vector for `libvlc_new`
    pub fn argv(&self) -> Vec<String> {
        let mut argv = self.args.clone();
        if self.quiet && !argv.iter().any(|a| a == "--quiet" || a == "-q") {
            argv.push("--quiet".to_string());
        }
        argv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_builder() {
        let config = FactoryConfig::new()
            .arg("--no-video-title-show")
            .args(["--network-caching=500"])
            .user_agent("vlcr", "vlcr/0.1")
            .quiet(true);
        assert_eq!(
            config.argv(),
            vec!["--no-video-title-show", "--network-caching=500", "--quiet"]
        );
        assert_eq!(
            config.user_agent,
            Some(("vlcr".to_string(), "vlcr/0.1".to_string()))
        );
    }

    #[test]
    fn test_quiet_not_duplicated() {
        let config = FactoryConfig::new().arg("--quiet").quiet(true);
        assert_eq!(config.argv(), vec!["--quiet"]);
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("LIBVLC_PATH", "/opt/vlc/lib/libvlc.so.5"),
            ("VLCR_ARGS", "  --no-audio   --verbose=2 "),
            ("VLC_PLUGIN_PATH", ""),
        ]
        .into_iter()
        .collect();
        let config = FactoryConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(
            config.library_path,
            Some(PathBuf::from("/opt/vlc/lib/libvlc.so.5"))
        );
        assert_eq!(config.args, vec!["--no-audio", "--verbose=2"]);
        assert_eq!(config.plugin_path, None);
        assert!(!config.quiet);
    }
}
