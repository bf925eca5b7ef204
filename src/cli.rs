// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "cad-viewer")]
#[command(about = "3D model viewer with a navigation cube", long_about = None)]
pub struct Cli {
    /// Model files to browse (.stl, .gltf, .glb, .step)
    pub models: Vec<PathBuf>,

    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Hide the help overlay and project slider
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Camera transition duration in milliseconds
    #[arg(long = "duration-ms")]
    pub duration_ms: Option<u64>,

    /// Distance from the origin for canonical views
    #[arg(long)]
    pub standoff: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_models_and_flags() {
        let cli = Cli::parse_from(["cad-viewer", "a.stl", "b.glb", "--no-ui"]);
        assert_eq!(cli.models, vec![PathBuf::from("a.stl"), PathBuf::from("b.glb")]);
        assert!(cli.no_ui);
        assert!(cli.config.is_none());
    }

    #[test]
    fn defaults_without_arguments() {
        let cli = Cli::parse_from(["cad-viewer"]);
        assert!(cli.models.is_empty());
        assert!(!cli.no_ui);
        assert_eq!(cli.duration_ms, None);
        assert_eq!(cli.standoff, None);
    }
}
