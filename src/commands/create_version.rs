use std::fs;

use console::style;
use tracing::info;

use crate::{
    api::{
        gateway::Gateway,
        modrinth::{CreateVersion, DependencyType, ModrinthAPI, RequestedStatus},
    },
    cli::CreateVersionArgs,
    error::{Error, Result},
    util::dependency::resolve_dependency,
};

pub fn create_version<G: Gateway>(api: &ModrinthAPI<G>, args: CreateVersionArgs, dryrun: bool) -> Result<()> {
    // everything that can be checked locally goes before the first request
    let requested_status = match args.requested_status {
        Some(status) => status,
        None => RequestedStatus::try_from(args.status)?,
    };
    let changelog = fs::read_to_string(&args.changelog_path).map_err(|err| {
        Error::Config(format!("Couldn't read changelog {}, {err}", args.changelog_path.display()))
    })?;

    info!("Mapping project {}", args.project);
    let project_id = api.resolve_project(&args.project)?.id;
    info!("Mapped project {} to {project_id}", args.project);

    info!("Mapping dependencies");
    let tokens = [
        (DependencyType::Embedded, &args.embedded_dep),
        (DependencyType::Incompatible, &args.incompatible_dep),
        (DependencyType::Optional, &args.optional_dep),
        (DependencyType::Required, &args.required_dep),
    ];
    let dependencies = tokens
        .into_iter()
        .flat_map(|(kind, tokens)| tokens.iter().map(move |token| (kind, token)))
        .map(|(kind, token)| resolve_dependency(api, token, kind))
        .collect();

    let version = CreateVersion {
        name: args.name,
        version_number: args.version_number,
        changelog,
        dependencies,
        game_versions: args.game_version,
        version_type: args.version_type,
        loaders: args.loader,
        featured: args.featured,
        status: args.status,
        requested_status,
        project_id,
        file_paths: args.file_path,
    };

    log_summary(&version, &args.changelog_path.display().to_string());

    if dryrun {
        info!("Dry run mode enabled, skipping upload of {}", version.metadata()?);
        return Ok(());
    }

    info!("Calling create_version...");
    let created = api.create_version(&version)?;
    info!("Upload result: {created:?}");
    println!(
        "Created {} {}",
        style(created.name.as_deref().unwrap_or(&version.name)).bold(),
        style(format!("({})", created.id)).dim()
    );
    Ok(())
}

fn log_summary(version: &CreateVersion, changelog_path: &str) {
    info!("Upload info:");
    info!(" - Project ID: {}", version.project_id);
    info!(" - Name: {}", version.name);
    info!(" - Version: {}", version.version_number.as_deref().unwrap_or("<none>"));
    info!(" - Version Type: {:?}", version.version_type);
    info!(" - Changelog Path: {changelog_path}");
    info!(" - Game Versions: {:?}", version.game_versions);
    info!(" - Loaders: {:?}", version.loaders);
    info!(" - Featured: {}", version.featured);
    info!(" - Status: {:?} (requested {:?})", version.status, version.requested_status);
    info!(" - Dependencies: {:?}", version.dependencies);
    info!(" - Files: {:?}", version.file_parts());
}
