//! Record-replay round trip of a full linking run.
//!
//! 1. Link a real scratch project through a recording context.
//! 2. Replay the cassette with the project deleted.
//! 3. Assert the replayed run produces the same document and report.

use invlink::cassette::format::Cassette;
use invlink::cassette::session::FS_CASSETTE;
use invlink::config::LinkerConfig;
use invlink::context::ServiceContext;
use invlink::inventory;

const INVENTORY: &str = "- **core/**\n  - User.java — model\n  - ghost.txt — missing\n- README.md — top\n";

#[test]
fn recorded_run_replays_identically_without_the_tree() {
    let project = tempfile::TempDir::new().unwrap();
    std::fs::create_dir_all(project.path().join("core")).unwrap();
    std::fs::write(project.path().join("core/User.java"), "").unwrap();
    std::fs::write(project.path().join("README.md"), "").unwrap();
    let inventory_path = project.path().join("WORKSPACE_INVENTORY.md");
    std::fs::write(&inventory_path, INVENTORY).unwrap();
    let config = LinkerConfig { inventory: inventory_path, root: project.path().to_path_buf() };

    // --- Phase 1: record ---
    let cassettes = tempfile::TempDir::new().unwrap();
    let (ctx, session) = ServiceContext::recording_at(cassettes.path(), &config.inventory).unwrap();
    let live_report = inventory::link_in_place(ctx.fs.as_ref(), &config).unwrap();
    drop(ctx);
    let session_dir = session.finish().unwrap();
    let linked_text = std::fs::read_to_string(&config.inventory).unwrap();

    let cassette_path = session_dir.join(FS_CASSETTE);
    let cassette = Cassette::load(&cassette_path).unwrap();
    let methods: Vec<&str> = cassette.interactions.iter().map(|i| i.method.as_str()).collect();
    assert_eq!(methods, vec!["read_to_string", "exists", "exists", "exists", "write"]);

    // --- Phase 2: replay with the tree gone ---
    drop(project);
    let ctx = ServiceContext::replaying(&cassette_path).unwrap();
    let outcome = inventory::preview(ctx.fs.as_ref(), &config).unwrap();

    assert_eq!(outcome.report.linked, live_report.linked);
    assert_eq!(outcome.report.unresolved.len(), 1);
    assert_eq!(outcome.document, linked_text);
    assert!(outcome.document.contains("[User.java](core/User.java)"));
    assert!(outcome.document.contains("[README.md](README.md)"));
}

#[test]
fn replaying_twice_is_deterministic() {
    let yaml = r#"
name: hand-written
recorded_at: 2025-06-15T10:00:00Z
inventory: /project/WORKSPACE_INVENTORY.md
interactions:
  - seq: 0
    port: fs
    method: read_to_string
    input: { path: /project/WORKSPACE_INVENTORY.md }
    output: { ok: "- **core/**\n  - Order.java — entity\n" }
  - seq: 1
    port: fs
    method: exists
    input: { path: /project/core/Order.java }
    output: true
"#;
    let cassette = Cassette::from_yaml(yaml).unwrap();
    let config = LinkerConfig {
        inventory: "/project/WORKSPACE_INVENTORY.md".into(),
        root: "/project".into(),
    };

    let first = inventory::preview(ServiceContext::replaying_cassette(&cassette).fs.as_ref(), &config)
        .unwrap();
    let second = inventory::preview(ServiceContext::replaying_cassette(&cassette).fs.as_ref(), &config)
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(first.document, "- **core/**\n  - [Order.java](core/Order.java) — entity\n");
}
