use crate::rules::{self, TemplateRules, TEMPLATES};
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Present in `base.html` once the loader is injected.
pub const BASE_MARKER: &str = "flower-i18n";
/// Present in a page template once any key is injected.
pub const TAG_MARKER: &str = "data-i18n=";
/// Directory under Flower's `static/` that receives the wasm bundle.
pub const BUNDLE_DIR: &str = "i18n";
/// Module script emitted by the wasm build.
pub const BUNDLE_ENTRY: &str = "web.js";

const BASE_TEMPLATE: &str = "base.html";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Patched,
    AlreadyPatched,
    Missing,
    /// Present, but the markup the patch anchors on is not there.
    NoAnchor,
}

/// What `status` found for a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateState {
    Patched,
    Unpatched,
    Missing,
}

#[derive(Debug, Default)]
pub struct PatchReport {
    pub backup_created: bool,
    pub files: Vec<(&'static str, FileOutcome)>,
    pub bundle_files: usize,
}

/// An installed Flower package directory.
pub struct FlowerInstall {
    root: PathBuf,
}

impl FlowerInstall {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.join("templates").is_dir() {
            bail!("{} has no templates/ directory", root.display());
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn templates(&self) -> PathBuf {
        self.root.join("templates")
    }

    pub fn backup(&self) -> PathBuf {
        self.root.join("templates_backup")
    }

    pub fn bundle(&self) -> PathBuf {
        self.root.join("static").join(BUNDLE_DIR)
    }

    /// Copy `templates/` aside once. Later calls keep the first copy.
    pub fn backup_templates(&self) -> Result<bool> {
        if self.backup().exists() {
            tracing::info!("backup already exists at {}", self.backup().display());
            return Ok(false);
        }
        copy_tree(&self.templates(), &self.backup())?;
        tracing::info!("backed up templates to {}", self.backup().display());
        Ok(true)
    }

    pub fn restore_templates(&self) -> Result<bool> {
        if !self.backup().exists() {
            tracing::warn!("no backup found at {}", self.backup().display());
            return Ok(false);
        }
        if self.templates().exists() {
            fs::remove_dir_all(self.templates())
                .with_context(|| format!("removing {}", self.templates().display()))?;
        }
        copy_tree(&self.backup(), &self.templates())?;
        tracing::info!("restored templates from backup");
        Ok(true)
    }

    /// Load the bundle from `base.html`, just before `</body>`.
    pub fn patch_base(&self) -> Result<FileOutcome> {
        let path = self.templates().join(BASE_TEMPLATE);
        let Some(content) = read_template(&path)? else {
            return Ok(FileOutcome::Missing);
        };
        if content.contains(BASE_MARKER) {
            return Ok(FileOutcome::AlreadyPatched);
        }
        if !content.contains("</body>") {
            return Ok(FileOutcome::NoAnchor);
        }

        let loader = loader_snippet();
        let patched = content.replacen("</body>", &format!("{loader}\n  </body>"), 1);
        write_template(&path, &patched)?;
        Ok(FileOutcome::Patched)
    }

    pub fn patch_template(&self, rules: &TemplateRules) -> Result<FileOutcome> {
        let path = self.templates().join(rules.file);
        let Some(content) = read_template(&path)? else {
            return Ok(FileOutcome::Missing);
        };
        if content.contains(TAG_MARKER) {
            return Ok(FileOutcome::AlreadyPatched);
        }

        let (patched, hits) = rules::apply(rules, &content);
        if hits < rules.tags.len() {
            tracing::debug!(
                file = rules.file,
                hits,
                expected = rules.tags.len(),
                "some markup was not found; this Flower version may differ"
            );
        }
        write_template(&path, &patched)?;
        Ok(FileOutcome::Patched)
    }

    /// Copy the built wasm bundle into `static/i18n/`.
    pub fn install_bundle(&self, from: &Path) -> Result<usize> {
        if !from.join(BUNDLE_ENTRY).is_file() {
            bail!("{} does not contain {BUNDLE_ENTRY}", from.display());
        }
        let copied = copy_tree(from, &self.bundle())?;
        tracing::info!("copied {copied} bundle files to {}", self.bundle().display());
        Ok(copied)
    }

    pub fn patch(&self, bundle: Option<&Path>) -> Result<PatchReport> {
        tracing::info!("patching Flower at {}", self.root.display());
        let mut report = PatchReport {
            backup_created: self.backup_templates()?,
            ..PatchReport::default()
        };

        let outcome = self.patch_base()?;
        log_outcome(BASE_TEMPLATE, outcome);
        report.files.push((BASE_TEMPLATE, outcome));
        for rules in TEMPLATES {
            let outcome = self.patch_template(rules)?;
            log_outcome(rules.file, outcome);
            report.files.push((rules.file, outcome));
        }

        if let Some(bundle) = bundle {
            report.bundle_files = self.install_bundle(bundle)?;
        }
        Ok(report)
    }

    pub fn unpatch(&self) -> Result<()> {
        tracing::info!("removing Flower i18n patches");
        self.restore_templates()?;
        if self.bundle().exists() {
            fs::remove_dir_all(self.bundle())
                .with_context(|| format!("removing {}", self.bundle().display()))?;
            tracing::info!("removed {}", self.bundle().display());
        }
        Ok(())
    }

    /// Whether each known template carries its marker.
    pub fn status(&self) -> Result<Vec<(&'static str, TemplateState)>> {
        let mut files = Vec::with_capacity(TEMPLATES.len() + 1);
        let checks = std::iter::once((BASE_TEMPLATE, BASE_MARKER))
            .chain(TEMPLATES.iter().map(|rules| (rules.file, TAG_MARKER)));
        for (file, marker) in checks {
            let state = match read_template(&self.templates().join(file))? {
                None => TemplateState::Missing,
                Some(content) if content.contains(marker) => TemplateState::Patched,
                Some(_) => TemplateState::Unpatched,
            };
            files.push((file, state));
        }
        Ok(files)
    }
}

/// Markup appended to `base.html`.
pub fn loader_snippet() -> String {
    format!(
        r#"
    <!-- {BASE_MARKER} -->
    <script type="module">
      import init from "{{{{ static_url('{BUNDLE_DIR}/{BUNDLE_ENTRY}') }}}}";
      init();
    </script>"#
    )
}

fn log_outcome(file: &str, outcome: FileOutcome) {
    match outcome {
        FileOutcome::Patched => tracing::info!("patched {file}"),
        FileOutcome::AlreadyPatched => tracing::info!("{file} already patched"),
        FileOutcome::Missing => tracing::warn!("{file} not found"),
        FileOutcome::NoAnchor => tracing::warn!("{file} has no </body> to anchor the loader"),
    }
}

fn read_template(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    fs::read_to_string(path)
        .map(Some)
        .with_context(|| format!("reading {}", path.display()))
}

fn write_template(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("writing {}", path.display()))
}

/// Recursively copy `from` into `to`. Returns the number of files copied.
fn copy_tree(from: &Path, to: &Path) -> Result<usize> {
    let mut copied = 0;
    for entry in WalkDir::new(from) {
        let entry = entry.with_context(|| format!("walking {}", from.display()))?;
        let relative = entry.path().strip_prefix(from)?;
        let target = to.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("creating {}", target.display()))?;
        } else {
            fs::copy(entry.path(), &target).with_context(|| {
                format!("copying {} to {}", entry.path().display(), target.display())
            })?;
            copied += 1;
        }
    }
    Ok(copied)
}
