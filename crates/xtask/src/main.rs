use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Crates the domain must never pull in
const FORBIDDEN_DOMAIN_DEPS: &[&str] = &[
    "dioxus",
    "dioxus-desktop",
    "tokio",
    "reqwest",
    "gloo-net",
    "web-sys",
    "tracing",
    "lootlens-player",
];

const DOMAIN_CRATE: &str = "lootlens-domain";

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    manifest_path: PathBuf,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata output")?;

    let domain = metadata
        .packages
        .iter()
        .find(|p| p.name == DOMAIN_CRATE)
        .with_context(|| format!("{DOMAIN_CRATE} not found in workspace"))?;

    let mut violations = forbidden_dependencies(domain);

    let src = domain
        .manifest_path
        .parent()
        .map(|dir| dir.join("src"))
        .context("domain manifest has no parent directory")?;
    violations.extend(forbidden_imports(&src)?);

    if violations.is_empty() {
        println!("arch-check: {DOMAIN_CRATE} is clean");
        Ok(())
    } else {
        for violation in &violations {
            eprintln!("arch-check: {violation}");
        }
        anyhow::bail!("{} architecture violation(s)", violations.len())
    }
}

fn forbidden_dependencies(package: &Package) -> Vec<String> {
    package
        .dependencies
        .iter()
        .filter(|dep| FORBIDDEN_DOMAIN_DEPS.contains(&dep.name.as_str()))
        .map(|dep| format!("{} depends on {}", package.name, dep.name))
        .collect()
}

/// `use` statements naming a forbidden crate anywhere under `dir`
fn forbidden_imports(dir: &Path) -> anyhow::Result<Vec<String>> {
    let pattern = FORBIDDEN_DOMAIN_DEPS
        .iter()
        .map(|name| name.replace('-', "_"))
        .collect::<Vec<_>>()
        .join("|");
    let re = regex_lite::Regex::new(&format!(r"^\s*(pub\s+)?use\s+::?({pattern})\b"))
        .context("building import pattern")?;

    let mut violations = Vec::new();
    let mut stack = vec![dir.to_path_buf()];
    while let Some(path) = stack.pop() {
        for entry in std::fs::read_dir(&path)
            .with_context(|| format!("reading {}", path.display()))?
        {
            let entry_path = entry?.path();
            if entry_path.is_dir() {
                stack.push(entry_path);
                continue;
            }
            if entry_path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
                continue;
            }
            let text = std::fs::read_to_string(&entry_path)
                .with_context(|| format!("reading {}", entry_path.display()))?;
            for (line_no, line) in text.lines().enumerate() {
                if re.is_match(line) {
                    violations.push(format!(
                        "{}:{}: {}",
                        entry_path.display(),
                        line_no + 1,
                        line.trim()
                    ));
                }
            }
        }
    }
    Ok(violations)
}
