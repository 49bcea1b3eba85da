//! Static site build.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── prepare_output()  ──► clear output dir when --clean
//!     │
//!     ├── rayon::join
//!     │       ├── render_pages()  ──► <route>/index.html, 404.html,
//!     │       │                       projects/<skill slug>/index.html
//!     │       └── copy_assets()   ──► assets/** → output/**
//!     │
//!     ├── generator::data     ──► _data/projects.json, _data/skills.json
//!     └── generator::sitemap  ──► sitemap.xml (needs [base] url)
//! ```
//!
//! A static host cannot read `?skill=`, so every skill a page links to gets a
//! pre-filtered Projects page of its own, and built pages link there.

use crate::{
    catalog::Catalog,
    config::SiteConfig,
    generator::{data, sitemap},
    log,
    route::{Route, Selection, skill_slug},
    utils::minify::{MinifyType, minify},
    view::{self, PageContext},
};
use anyhow::{Context, Result, anyhow};
use rayon::prelude::*;
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::atomic::{AtomicBool, Ordering},
};
use walkdir::WalkDir;

/// File name of the not-found page, picked up by most static hosts.
pub const NOT_FOUND_PAGE: &str = "404.html";

/// Summary of a finished build.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildReport {
    pub pages: usize,
    pub assets: usize,
    pub sitemap: bool,
}

/// Build the entire site, rendering pages and copying assets in parallel.
pub fn build_site(config: &SiteConfig, catalog: &Catalog) -> Result<BuildReport> {
    let output = &config.build.output;
    prepare_output(output, config.build.clean)?;

    let asset_files = collect_all_files(&config.build.assets);
    let has_error = AtomicBool::new(false);

    log!("build"; "rendering pages...");
    let (pages, assets) = rayon::join(
        || render_pages(config, catalog, &has_error),
        || copy_assets(config, &asset_files, &has_error),
    );
    let pages = pages?;
    let assets = assets?;

    data::write_to_disk(catalog, &output.join(data::DATA_DIR))?;
    let sitemap = sitemap::build_sitemap(config, &Route::navigation())?;

    let report = BuildReport { pages, assets, sitemap };
    log!("build"; "done: {} pages, {} assets -> {}", report.pages, report.assets, output.display());
    Ok(report)
}

/// Create the output directory, removing old content first if `clean`.
fn prepare_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output).with_context(|| {
            format!("Failed to clear output directory: {}", output.display())
        })?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))
}

/// Output file for a route: `/` → `index.html`, `/about` → `about/index.html`,
/// a skill selection → `projects/<slug>/index.html`.
pub fn page_output_path(output: &Path, route: &Route) -> PathBuf {
    match route {
        Route::NotFound(_) => output.join(NOT_FOUND_PAGE),
        Route::Projects(selection) => match selection.skill() {
            Some(skill) => output.join("projects").join(skill_slug(skill)).join("index.html"),
            None => output.join("projects").join("index.html"),
        },
        _ => output
            .join(route.path().trim_start_matches('/'))
            .join("index.html"),
    }
}

/// Every page of the static site: navigation pages, the 404 page and one
/// Projects page per linked skill.
///
/// Skills sharing a slug share the page of the first one.
fn site_routes(catalog: &Catalog) -> Vec<Route> {
    let mut routes = Route::navigation().to_vec();
    routes.push(Route::NotFound("/404".to_owned()));

    let mut slugs = HashMap::new();
    for skill in catalog.linked_skills() {
        let slug = skill_slug(skill);
        if let Some(first) = slugs.get(&slug) {
            log!("build"; "skills `{}` and `{}` share the page projects/{}/", first, skill, slug);
            continue;
        }
        routes.push(Route::Projects(Selection::of(skill)));
        slugs.insert(slug, skill);
    }
    routes
}

fn render_pages(config: &SiteConfig, catalog: &Catalog, has_error: &AtomicBool) -> Result<usize> {
    let ctx = PageContext::for_static_site(config, catalog);
    let routes = site_routes(catalog);

    routes.par_iter().try_for_each(|route| {
        if has_error.load(Ordering::Relaxed) {
            return Err(anyhow!("Aborted"));
        }
        write_page(config, ctx, route).inspect_err(|e| {
            if !has_error.swap(true, Ordering::Relaxed) {
                log!("error"; "{}: {:#}", route.path(), e);
            }
        })
    })?;

    Ok(routes.len())
}

fn write_page(config: &SiteConfig, ctx: PageContext<'_>, route: &Route) -> Result<()> {
    let path = page_output_path(&config.build.output, route);
    let html = view::render(route, ctx).into_string();
    let html = minify(MinifyType::Html(html.as_bytes()), config);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, &*html).with_context(|| format!("Failed to write {}", path.display()))
}

fn copy_assets(config: &SiteConfig, files: &[PathBuf], has_error: &AtomicBool) -> Result<usize> {
    files.par_iter().try_for_each(|path| {
        if has_error.load(Ordering::Relaxed) {
            return Err(anyhow!("Aborted"));
        }
        copy_asset(path, config).inspect_err(|e| {
            if !has_error.swap(true, Ordering::Relaxed) {
                log!("error"; "{}: {:#}", path.display(), e);
            }
        })
    })?;

    Ok(files.len())
}

/// Copy one file from the assets directory, keeping its relative path.
fn copy_asset(path: &Path, config: &SiteConfig) -> Result<()> {
    let relative = path.strip_prefix(&config.build.assets)?;
    let dest = config.build.output.join(relative);

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(path, &dest)
        .with_context(|| format!("Failed to copy {} to {}", path.display(), dest.display()))?;
    Ok(())
}

/// All regular files below `dir`. A missing directory yields nothing.
pub fn collect_all_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .collect()
}
