//! Live reload of an on-disk layout config.

use eframe::egui;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use responsive_layout::{ConfigError, LayoutConfig};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};

/// Watches a config file and reloads it whenever it is written.
pub struct ConfigWatcher {
    /// Reload results from the file watcher thread
    update_rx: Receiver<Result<LayoutConfig, ConfigError>>,
    /// The watcher must be kept alive for events to fire
    _watcher: RecommendedWatcher,
    path: PathBuf,
}

impl ConfigWatcher {
    /// Starts watching `path`.
    ///
    /// Returns `None` if the file doesn't exist or watching fails.
    pub fn new(path: &Path, ctx: egui::Context) -> Option<Self> {
        let path = path.canonicalize().ok()?;
        let dir = path.parent()?.to_path_buf();

        let (update_tx, update_rx) = mpsc::channel();

        let watched = path.clone();
        let mut watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
            match res {
                Ok(event) => {
                    // Editors either rewrite the file or rename a new one over it
                    if matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_))
                        && event.paths.iter().any(|p| p == &watched)
                    {
                        log::debug!("Layout config changed: {}", watched.display());
                        let _ = update_tx.send(LayoutConfig::load(&watched));
                        ctx.request_repaint();
                    }
                }
                Err(err) => log::warn!("Config watcher error: {err}"),
            }
        })
        .ok()?;

        watcher.watch(&dir, RecursiveMode::NonRecursive).ok()?;

        log::info!("Watching layout config: {}", path.display());

        Some(Self {
            update_rx,
            _watcher: watcher,
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the most recent reload result since the last poll, if any.
    pub fn poll(&mut self) -> Option<Result<LayoutConfig, ConfigError>> {
        let mut latest = None;
        loop {
            match self.update_rx.try_recv() {
                Ok(result) => latest = Some(result),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    log::warn!("Config watcher channel disconnected");
                    break;
                }
            }
        }
        latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::{Duration, Instant};

    const VALID: &str = r#"(
        title: "Reloaded",
        menu: [(id: "dashboard", label: "Dashboard", icon: "D")],
    )"#;

    /// Polls until a reload result matches `accept` or five seconds pass.
    ///
    /// A single write can surface as several events, the first of which may
    /// see a truncated file.
    fn wait_for_reload(
        watcher: &mut ConfigWatcher,
        accept: impl Fn(&Result<LayoutConfig, ConfigError>) -> bool,
    ) -> Option<Result<LayoutConfig, ConfigError>> {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if let Some(result) = watcher.poll()
                && accept(&result)
            {
                return Some(result);
            }
            thread::sleep(Duration::from_millis(50));
        }
        None
    }

    fn watched_file(contents: &str) -> (tempfile::TempDir, PathBuf, ConfigWatcher) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.ron");
        std::fs::write(&path, contents).unwrap();
        let watcher = ConfigWatcher::new(&path, egui::Context::default()).unwrap();
        (dir, path, watcher)
    }

    #[test]
    fn missing_file_is_not_watched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.ron");
        assert!(ConfigWatcher::new(&path, egui::Context::default()).is_none());
    }

    #[test]
    fn nothing_to_report_before_a_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.ron");
        std::fs::write(&path, "()").unwrap();

        let mut watcher = ConfigWatcher::new(&path, egui::Context::default()).unwrap();
        assert_eq!(watcher.path(), path.canonicalize().unwrap());
        assert!(watcher.poll().is_none());
    }

    #[test]
    fn writing_a_valid_config_reloads_it() {
        let (_dir, path, mut watcher) = watched_file("()");

        std::fs::write(&path, VALID).unwrap();

        let reloaded = wait_for_reload(&mut watcher, Result::is_ok)
            .expect("no reload after a valid write")
            .unwrap();
        assert_eq!(reloaded.title, "Reloaded");
        assert_eq!(reloaded.section_label("dashboard"), Some("Dashboard"));
    }

    #[test]
    fn writing_invalid_ron_reports_a_parse_error() {
        let (_dir, path, mut watcher) = watched_file(VALID);

        std::fs::write(&path, "(menu: [").unwrap();

        let result = wait_for_reload(&mut watcher, |result| {
            matches!(result, Err(ConfigError::Parse(_)))
        });
        assert!(result.is_some(), "no parse error after an invalid write");
    }
}
