use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;
use crate::inject::{ClientEnv, inject};

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to read {}", path.display())]
    ReadInput { path: PathBuf, source: io::Error },
    #[error("failed to create output directory {}", path.display())]
    CreateOutputDir { path: PathBuf, source: io::Error },
    #[error("failed to write {}", path.display())]
    WriteOutput { path: PathBuf, source: io::Error },
    #[error("failed to encode page settings")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct BuildReport {
    pub output_path: PathBuf,
    pub bytes_written: usize,
    pub client_id_replaced: bool,
    pub head_found: bool,
}

pub fn build_site(config: &Config) -> Result<BuildReport, BuildError> {
    let html = fs::read_to_string(&config.input).map_err(|source| BuildError::ReadInput {
        path: config.input.clone(),
        source,
    })?;
    debug!(path = %config.input.display(), bytes = html.len(), "read source page");

    let injection = inject(&html, ClientEnv::from(config))?;
    if !injection.client_id_replaced {
        warn!(path = %config.input.display(), "no client id attribute found; left unchanged");
    }
    if !injection.head_found {
        warn!(path = %config.input.display(), "no </head> found; settings script not injected");
    }

    fs::create_dir_all(&config.out_dir).map_err(|source| BuildError::CreateOutputDir {
        path: config.out_dir.clone(),
        source,
    })?;

    let output_path = config.output_path();
    fs::write(&output_path, &injection.html).map_err(|source| BuildError::WriteOutput {
        path: output_path.clone(),
        source,
    })?;
    debug!(path = %output_path.display(), bytes = injection.html.len(), "wrote built page");

    Ok(BuildReport {
        output_path,
        bytes_written: injection.html.len(),
        client_id_replaced: injection.client_id_replaced,
        head_found: injection.head_found,
    })
}
