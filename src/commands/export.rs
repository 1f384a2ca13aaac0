use std::path::Path;

use owo_colors::{OwoColorize, Stream};

use super::load_console;
use crate::config::Config;
use crate::error::Result;
use crate::export::{ArtifactSink, DirectorySink, ExportFormat};

/// Export all tickets in `format` into `dir`
pub async fn cmd_export(format: ExportFormat, dir: &Path) -> Result<()> {
    let config = Config::load()?;
    let console = load_console(&config).await?;

    let artifact = console.export(format)?;
    let path = DirectorySink::new(dir).deliver(&artifact)?;

    println!(
        "{} {}",
        "Exported".if_supports_color(Stream::Stdout, |t| t.green()),
        path.display()
    );
    Ok(())
}
