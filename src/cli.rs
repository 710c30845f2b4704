use std::path::PathBuf;

use clap::Parser;

use crate::component::{ComponentSpec, create_component};
use crate::config::load_config;
use crate::error::{CompgenError, Result};
use crate::hooks::hooks_from_config;
use crate::index::{IndexUpdate, parent_index_path, update_parent_index};
use crate::ui;

pub const USAGE: &str = "Usage: compgen <name> <directory>";

/// CLI argument parser definition.
#[derive(Parser)]
#[command(
    name = "compgen",
    version,
    about = "Scaffold a component with styles, an index and a story"
)]
pub struct Cli {
    /// Component name, used verbatim for file and import paths
    #[arg(allow_hyphen_values = true)]
    pub name: Option<String>,
    /// Directory holding the parent index.ts
    pub directory: Option<PathBuf>,
    #[arg(hide = true)]
    pub extra: Vec<String>,
}

/// Generates the component and registers it in the parent index.
pub fn run_generate(cli: Cli) -> Result<()> {
    let (Some(name), Some(directory)) = (cli.name, cli.directory) else {
        return Err(CompgenError::Usage);
    };

    let spec = ComponentSpec::new(&name, directory)
        .map_err(|err| err.during("Error creating component"))?;
    let config =
        load_config(&spec.target_dir).map_err(|err| err.during("Error loading config"))?;
    let hooks = hooks_from_config(&config.hooks);

    let paths = create_component(&spec, &hooks)
        .map_err(|err| err.during("Error creating component"))?;
    ui::success(&format!("Created component {}", spec.capitalized_name));
    for file in paths.files() {
        ui::created(file);
    }

    let index_path = parent_index_path(&spec.target_dir);
    match update_parent_index(&spec.name, &spec.target_dir)
        .map_err(|err| err.during("Error updating main index"))?
    {
        IndexUpdate::Added => ui::success(&format!("Exported from {}", index_path.display())),
        IndexUpdate::AlreadyPresent => {
            ui::info(&format!("Already exported from {}", index_path.display()))
        }
    }
    Ok(())
}
