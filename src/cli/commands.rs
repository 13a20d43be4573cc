//! Command implementations

use super::GobjectArgs;
use crate::config::LoaderConfig;
use crate::fragment::{self, FragmentLoader, Navigation, Page};
use crate::gobject::{self, ClassSpec, Skeleton};
use crate::idents::IdentifierExtractor;
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Scan a source file for accessor identifiers
pub fn idents(path: &Path) -> Result<BTreeSet<String>> {
    let extractor = IdentifierExtractor::new()?;
    extractor.extract_file(path)
}

/// A navigation link click replayed by the fragment command
#[derive(Debug, Clone, Serialize)]
pub struct ClickRecord {
    pub href: String,
    pub navigation: Navigation,
}

/// Final page state after replaying a navigation session
#[derive(Debug, Clone, Serialize)]
pub struct FragmentReport {
    /// Location the session started from
    pub location: String,
    /// Clicks in the order they were made
    pub clicks: Vec<ClickRecord>,
    /// Href of the active link, if any
    pub active: Option<String>,
    /// Section shown after the navigation element
    pub section: Option<String>,
    /// Rendered page body
    pub html: String,
    /// Page structure: links and body nodes
    pub page: Page,
}

/// Load the initial section for `location`, then replay `clicks` in order
pub async fn fragment(
    site: &str,
    location: &str,
    clicks: &[String],
    config: LoaderConfig,
) -> Result<FragmentReport> {
    let source = fragment::source_for(site)?;
    let page = Arc::new(Mutex::new(config.build_page()));
    let loader = FragmentLoader::new(Arc::clone(&page), source, config);

    loader.init(location).await;

    let mut records = Vec::with_capacity(clicks.len());
    for href in clicks {
        let navigation = loader
            .click_href(href)
            .await
            .with_context(|| format!("Failed to follow link {:?}", href))?;
        records.push(ClickRecord {
            href: href.clone(),
            navigation,
        });
    }

    let page = page
        .lock()
        .map_err(|_| anyhow::anyhow!("Page state is poisoned"))?;

    Ok(FragmentReport {
        location: location.to_string(),
        clicks: records,
        active: page
            .active_link()
            .and_then(|i| page.link(i))
            .map(|link| link.href.clone()),
        section: page.current_section().map(str::to_string),
        html: page.render(&loader.config().active_class),
        page: page.clone(),
    })
}

/// Print a fragment report as text
pub fn print_report_text(report: &FragmentReport) {
    println!("Location: {}", report.location);
    for click in &report.clicks {
        let outcome = match click.navigation {
            Navigation::Proceed => "loaded",
            Navigation::Prevent => "already active",
        };
        println!("Click {}: {}", click.href, outcome);
    }
    if let Some(ref active) = report.active {
        println!("Active: {}", active);
    }
    if report.section.is_none() {
        println!("No section loaded");
    }
    println!();
    print!("{}", report.html);
}

/// Print a fragment report as JSON
pub fn print_report_json(report: &FragmentReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{}", json);
    Ok(())
}

/// Build a class spec from command arguments
pub fn class_spec(args: &GobjectArgs) -> Result<ClassSpec> {
    let mut spec = ClassSpec::from_camel(&args.class_camel)?;

    if let Some(ref lower) = args.class_lower {
        spec.class_lower = lower.clone();
    }
    if let Some(ref package) = args.package {
        spec.package_upper = package.clone();
    }
    if let Some(ref object) = args.object {
        spec.object_upper = object.clone();
    }
    spec.parent = args.parent.clone();
    spec.parent_camel = args.parent_camel.clone();
    spec.private = args.private;
    spec.props = args.props;
    spec.dispose = args.dispose;
    spec.finalize = args.finalize;

    Ok(spec)
}

/// Generated class skeleton and where it was written, if anywhere
#[derive(Debug, Clone, Serialize)]
pub struct GobjectOutput {
    pub spec: ClassSpec,
    pub skeleton: Skeleton,
    pub written: Option<(PathBuf, PathBuf)>,
}

/// Generate a class skeleton, writing it to `output_dir` if given
pub fn gobject(spec: &ClassSpec, output_dir: Option<&Path>) -> Result<GobjectOutput> {
    let skeleton = gobject::generate(spec)?;

    let written = match output_dir {
        Some(dir) => Some(skeleton.write_to(dir)?),
        None => None,
    };

    Ok(GobjectOutput {
        spec: spec.clone(),
        skeleton,
        written,
    })
}

/// Print a generated skeleton as text: status lines if written, else the code
pub fn print_gobject_text(output: &GobjectOutput) {
    match output.written {
        Some((ref header, ref source)) => {
            println!("✓ Wrote {:?}", header);
            println!("✓ Wrote {:?}", source);
        }
        None => {
            println!("{}", output.skeleton.header);
            println!("{}", output.skeleton.source);
        }
    }
}

/// Print a generated skeleton as JSON
pub fn print_gobject_json(output: &GobjectOutput) -> Result<()> {
    let json = serde_json::to_string_pretty(output)?;
    println!("{}", json);
    Ok(())
}

/// Show the effective loader configuration, or write it to `path`
pub fn config(config: &LoaderConfig, write: Option<&Path>) -> Result<String> {
    if let Some(path) = write {
        config.save(path)?;
        tracing::info!(path = ?path, "configuration written");
    }

    toml::to_string_pretty(config).context("Failed to serialize configuration")
}
