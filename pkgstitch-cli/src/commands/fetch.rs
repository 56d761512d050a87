//! Fetch command - download a manifest's pieces into one file.

use std::path::PathBuf;

use pkgstitch::config::DownloadConfig;
use pkgstitch::download::{Assembler, AssemblyReport};
use pkgstitch::normalize::{default_output_name, normalize_manifest_url};
use tracing::info;

use crate::error::CliError;
use crate::progress::ConsoleProgress;

/// Arguments for the fetch command.
pub struct FetchArgs {
    pub url: String,
    pub output: Option<PathBuf>,
    pub user_agent: Option<String>,
}

impl FetchArgs {
    /// Manifest URL after rewriting known package URLs.
    pub fn manifest_url(&self) -> String {
        normalize_manifest_url(&self.url)
    }

    /// Output path: `-o` if given, otherwise derived from the manifest URL.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(default_output_name(&self.manifest_url())))
    }

    pub fn config(&self) -> DownloadConfig {
        match &self.user_agent {
            Some(user_agent) => DownloadConfig::default().with_user_agent(user_agent.clone()),
            None => DownloadConfig::default(),
        }
    }
}

/// Run the fetch command.
pub fn run(args: FetchArgs, progress: ConsoleProgress) -> Result<AssemblyReport, CliError> {
    let manifest_url = args.manifest_url();
    let output = args.output_path();

    if manifest_url != args.url {
        info!(from = %args.url, to = %manifest_url, "Rewrote package URL to manifest URL");
    }

    let assembler = Assembler::from_config(args.config())?;
    let report = assembler.assemble(&manifest_url, &output, &progress)?;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(url: &str, output: Option<&str>) -> FetchArgs {
        FetchArgs {
            url: url.to_string(),
            output: output.map(PathBuf::from),
            user_agent: None,
        }
    }

    #[test]
    fn test_output_derived_from_normalized_url() {
        let args = args("http://h/dir/UP0001-GAME_sc.pkg", None);
        assert_eq!(args.manifest_url(), "http://h/dir/UP0001-GAME.json");
        assert_eq!(args.output_path(), PathBuf::from("UP0001-GAME.pkg"));
    }

    #[test]
    fn test_explicit_output_wins() {
        let args = args("http://h/dir/game.json", Some("/tmp/custom.bin"));
        assert_eq!(args.output_path(), PathBuf::from("/tmp/custom.bin"));
    }

    #[test]
    fn test_user_agent_override() {
        let mut args = args("http://h/game.json", None);
        assert_eq!(args.config().user_agent, "Mozilla/5.0");

        args.user_agent = Some("curl/8.0".to_string());
        assert_eq!(args.config().user_agent, "curl/8.0");
    }

    #[test]
    fn test_unreachable_manifest_is_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let temp = tempfile::TempDir::new().unwrap();
        let output = temp.path().join("out.pkg");
        let args = FetchArgs {
            url: format!("http://127.0.0.1:{}/game.json", port),
            output: Some(output.clone()),
            user_agent: None,
        };

        let result = run(args, ConsoleProgress::new(indicatif::ProgressBar::hidden()));

        assert!(matches!(result, Err(CliError::Fetch(_))));
        assert!(output.exists());
    }
}
