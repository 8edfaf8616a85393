use patcher::{FileOutcome, FlowerInstall, TemplateState};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const BASE: &str = "<html>\n  <body>\n    {% block content %}{% end %}\n  </body>\n</html>\n";
const NAVBAR: &str = r#"<ul class="navbar-nav mr-auto">
  <li class="nav-item"><a class="nav-link" href="{{ reverse_url('workers') }}">Workers</a></li>
  <li class="nav-item"><a class="nav-link" href="{{ reverse_url('tasks') }}">Tasks</a></li>
  <li class="nav-item"><a class="nav-link" href="{{ reverse_url('broker') }}">Broker</a></li>
</ul>
"#;
const BROKER: &str = "<table><tr><th>Queue</th><th>Messages</th><th>Unacked</th></tr></table>\n";

fn fake_flower() -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    let templates = dir.path().join("templates");
    fs::create_dir_all(&templates).unwrap();
    fs::create_dir_all(dir.path().join("static")).unwrap();
    fs::write(templates.join("base.html"), BASE).unwrap();
    fs::write(templates.join("navbar.html"), NAVBAR).unwrap();
    fs::write(templates.join("broker.html"), BROKER).unwrap();
    dir
}

fn read(root: &Path, file: &str) -> String {
    fs::read_to_string(root.join("templates").join(file)).unwrap()
}

fn outcome(report: &patcher::PatchReport, file: &str) -> FileOutcome {
    report
        .files
        .iter()
        .find(|(name, _)| *name == file)
        .map(|(_, outcome)| *outcome)
        .expect("file reported")
}

#[test]
fn rejects_directory_without_templates() {
    let dir = TempDir::new().unwrap();
    assert!(FlowerInstall::new(dir.path()).is_err());
}

#[test]
fn patch_tags_templates_and_injects_loader() {
    let flower = fake_flower();
    let install = FlowerInstall::new(flower.path()).unwrap();

    let report = install.patch(None).unwrap();

    assert!(report.backup_created);
    assert_eq!(outcome(&report, "base.html"), FileOutcome::Patched);
    assert_eq!(outcome(&report, "navbar.html"), FileOutcome::Patched);
    assert_eq!(outcome(&report, "tasks.html"), FileOutcome::Missing);

    let base = read(flower.path(), "base.html");
    assert!(base.contains("<!-- flower-i18n -->"));
    assert!(base.contains("{{ static_url('i18n/web.js') }}"));
    assert!(base.find("flower-i18n").unwrap() < base.find("</body>").unwrap());

    let navbar = read(flower.path(), "navbar.html");
    assert!(navbar.contains(r#"href="{{ reverse_url('workers') }}" data-i18n="nav.workers">Workers</a>"#));
    assert_eq!(navbar.matches("data-i18n=").count(), 3);

    let broker = read(flower.path(), "broker.html");
    assert!(broker.contains(r#"<th data-i18n="broker.unacked">Unacked</th>"#));

    // Backup holds the untouched originals.
    let backup = fs::read_to_string(flower.path().join("templates_backup/navbar.html")).unwrap();
    assert_eq!(backup, NAVBAR);
}

#[test]
fn patching_twice_changes_nothing() {
    let flower = fake_flower();
    let install = FlowerInstall::new(flower.path()).unwrap();
    install.patch(None).unwrap();
    let first = read(flower.path(), "navbar.html");
    let first_base = read(flower.path(), "base.html");

    let report = install.patch(None).unwrap();

    assert!(!report.backup_created);
    assert_eq!(outcome(&report, "base.html"), FileOutcome::AlreadyPatched);
    assert_eq!(outcome(&report, "navbar.html"), FileOutcome::AlreadyPatched);
    assert_eq!(read(flower.path(), "navbar.html"), first);
    assert_eq!(read(flower.path(), "base.html"), first_base);
}

#[test]
fn unpatch_restores_originals_and_removes_bundle() {
    let flower = fake_flower();
    let bundle = TempDir::new().unwrap();
    fs::write(bundle.path().join("web.js"), "export default function init() {}").unwrap();
    fs::create_dir_all(bundle.path().join("assets")).unwrap();
    fs::write(bundle.path().join("assets/web_bg.wasm"), [0u8, 97, 115, 109]).unwrap();

    let install = FlowerInstall::new(flower.path()).unwrap();
    let report = install.patch(Some(bundle.path())).unwrap();
    assert_eq!(report.bundle_files, 2);
    assert!(flower.path().join("static/i18n/assets/web_bg.wasm").is_file());

    install.unpatch().unwrap();

    assert_eq!(read(flower.path(), "base.html"), BASE);
    assert_eq!(read(flower.path(), "navbar.html"), NAVBAR);
    assert!(!flower.path().join("static/i18n").exists());
}

#[test]
fn bundle_without_entry_is_rejected() {
    let flower = fake_flower();
    let bundle = TempDir::new().unwrap();
    let install = FlowerInstall::new(flower.path()).unwrap();
    let err = install.install_bundle(bundle.path()).unwrap_err();
    assert!(err.to_string().contains("web.js"));
}

#[test]
fn status_reports_each_template() {
    let flower = fake_flower();
    let install = FlowerInstall::new(flower.path()).unwrap();

    let before = install.status().unwrap();
    assert!(before.contains(&("navbar.html", TemplateState::Unpatched)));
    assert!(before.contains(&("worker.html", TemplateState::Missing)));

    install.patch(None).unwrap();
    let after = install.status().unwrap();
    assert!(after.contains(&("base.html", TemplateState::Patched)));
    assert!(after.contains(&("broker.html", TemplateState::Patched)));
    assert!(after.contains(&("worker.html", TemplateState::Missing)));
}

#[test]
fn base_without_body_is_reported_as_unanchored() {
    let flower = fake_flower();
    let headless = "<html>{% block content %}{% end %}</html>\n";
    fs::write(flower.path().join("templates/base.html"), headless).unwrap();
    let install = FlowerInstall::new(flower.path()).unwrap();

    let report = install.patch(None).unwrap();

    assert_eq!(outcome(&report, "base.html"), FileOutcome::NoAnchor);
    assert_eq!(read(flower.path(), "base.html"), headless);
    assert_eq!(outcome(&report, "navbar.html"), FileOutcome::Patched);
}
