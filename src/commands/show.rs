use std::fmt::Write;

use console::style;

use crate::{
    api::{
        gateway::Gateway,
        modrinth::{ModrinthAPI, Project, Version},
    },
    error::Result,
};

pub fn show_project<G: Gateway>(api: &ModrinthAPI<G>, id: &str) -> Result<()> {
    print!("{}", format_project(&api.get_project(id)?));
    Ok(())
}

pub fn show_version<G: Gateway>(api: &ModrinthAPI<G>, id: &str) -> Result<()> {
    print!("{}", format_version(&api.get_version(id)?));
    Ok(())
}

pub fn welcome<G: Gateway>(api: &ModrinthAPI<G>) -> Result<()> {
    let res = api.welcome()?;
    match res.get("about").and_then(|about| about.as_str()) {
        Some(about) => println!("{about}"),
        None => println!("{}", serde_json::to_string_pretty(&res)?),
    }
    Ok(())
}

fn format_project(project: &Project) -> String {
    let mut out = String::new();
    writeln!(
        &mut out,
        "{} {}",
        style(project.title.as_deref().unwrap_or(&project.id)).bold(),
        style(format!("({})", project.id)).dim()
    ).unwrap();
    if let Some(slug) = &project.slug {
        writeln!(&mut out, "slug: {slug}").unwrap();
    }
    out
}

fn format_version(version: &Version) -> String {
    let mut out = String::new();
    writeln!(
        &mut out,
        "{} {}",
        style(version.name.as_deref().unwrap_or(&version.id)).bold(),
        style(format!("({})", version.id)).dim()
    ).unwrap();
    if let Some(number) = &version.version_number {
        writeln!(&mut out, "version: {number}").unwrap();
    }
    if let Some(project_id) = &version.project_id {
        writeln!(&mut out, "project: {project_id}").unwrap();
    }
    for file in &version.files {
        let primary = if file.primary { style(" (primary)").green() } else { style("") };
        writeln!(&mut out, "  {}{primary} {}", file.filename, style(format!("{} bytes", file.size)).dim()).unwrap();
    }
    out
}
