//! Continuous mode: re-generate declaration files as stylesheet modules are
//! added or changed under the input root.

use crate::error::Result;
use crate::generator::TypeGenerator;
use crate::logger::LOG_TAG;
use crate::scanner::Scanner;
use globset::GlobMatcher;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::Path;
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Wait after a change event before re-reading the file, so an external
/// writer has a chance to finish flushing.
pub const CHANGE_DEBOUNCE: Duration = Duration::from_millis(10);

pub struct TypeWatcher {
    generator: Arc<TypeGenerator>,
    debounce: Duration,
}

impl TypeWatcher {
    pub fn new(generator: TypeGenerator) -> Self {
        Self {
            generator: Arc::new(generator),
            debounce: CHANGE_DEBOUNCE,
        }
    }

    /// Override the change-event debounce delay
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Watch the input root and generate on matching add/change events.
    ///
    /// Blocks for the lifetime of the watch; it only returns when the event
    /// channel disconnects. There is no unsubscribe contract beyond process
    /// termination. Removed stylesheet files are ignored, so stale
    /// declaration files are left behind.
    pub fn watch(&self) -> Result<()> {
        let options = self.generator.options();
        let input_root = options.input_root();
        let matcher = Scanner::matcher(&options.glob_pattern)?;

        let (tx, rx) = mpsc::channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: std::result::Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    let _ = tx.send(event);
                }
            },
            notify::Config::default(),
        )?;
        watcher.watch(&input_root, RecursiveMode::Recursive)?;

        self.generator.logger().info(&format!(
            "{} Watching {} {}",
            LOG_TAG, options.input_dir, options.glob_pattern
        ));

        for event in rx {
            self.handle_event(&event, &input_root, &matcher);
        }

        Ok(())
    }

    /// Dispatch one file-system event. Add events generate immediately;
    /// change events each schedule their own independent delayed task, so
    /// rapid edits may trigger overlapping generations. That is tolerated:
    /// generation is idempotent and the final write reflects the last-read
    /// state.
    fn handle_event(&self, event: &Event, input_root: &Path, matcher: &GlobMatcher) {
        let immediate = match event.kind {
            EventKind::Create(_) => true,
            EventKind::Modify(_) => false,
            _ => return,
        };

        for path in &event.paths {
            let Ok(relative) = path.strip_prefix(input_root) else {
                continue;
            };
            if !matcher.is_match(relative) {
                continue;
            }

            if immediate {
                self.generate_logged(path);
            } else {
                let generator = Arc::clone(&self.generator);
                let path = path.clone();
                let debounce = self.debounce;
                thread::spawn(move || {
                    thread::sleep(debounce);
                    if let Err(err) = generator.generate_file(&path) {
                        generator.logger().error(&format!("{} {}", LOG_TAG, err));
                    }
                });
            }
        }
    }

    fn generate_logged(&self, path: &Path) {
        if let Err(err) = self.generator.generate_file(path) {
            self.generator
                .logger()
                .error(&format!("{} {}", LOG_TAG, err));
        }
    }
}
