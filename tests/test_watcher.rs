mod common;

use common::TestProject;
use css_typegen::{TypeGenerator, TypeWatcher};
use std::fs;
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

fn wait_for(path: &Path, timeout: Duration) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if path.exists() {
            return true;
        }
        thread::sleep(Duration::from_millis(50));
    }
    false
}

#[test]
fn test_watch_generates_for_new_and_changed_files() {
    let project = TestProject::new();
    let options = project.options();

    let watcher = TypeWatcher::new(TypeGenerator::new(options));
    thread::spawn(move || {
        let _ = watcher.watch();
    });

    // Give the watcher a moment to register before producing events.
    thread::sleep(Duration::from_millis(300));

    fs::write(project.path("live.module.css"), ".first {}\n").unwrap();
    assert!(wait_for(
        &project.path("live.module.css.d.ts"),
        Duration::from_secs(5)
    ));

    let initial = project.read("live.module.css.d.ts");
    assert!(initial.contains("'first'"));

    // Change the file; the debounced regeneration should pick it up.
    fs::write(project.path("live.module.css"), ".first {}\n.second {}\n").unwrap();
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        let content = project.read("live.module.css.d.ts");
        if content.contains("'second'") {
            break;
        }
        assert!(Instant::now() < deadline, "regeneration never happened");
        thread::sleep(Duration::from_millis(50));
    }
}

#[test]
fn test_watch_ignores_non_matching_files() {
    let project = TestProject::new();
    let options = project.options();

    let watcher = TypeWatcher::new(TypeGenerator::new(options));
    thread::spawn(move || {
        let _ = watcher.watch();
    });
    thread::sleep(Duration::from_millis(300));

    fs::write(project.path("notes.txt"), "nothing to type here").unwrap();
    // Give any (wrong) generation plenty of time to happen.
    thread::sleep(Duration::from_millis(700));

    assert!(!project.path("notes.txt.d.ts").exists());
}
