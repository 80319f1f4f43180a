mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use htnorm_manifest::{CheckError, KeyPath, ManifestKind, VersionCheck};

#[derive(Parser, Debug)]
#[command(name = "htnorm-verify", version, about = "Check htnorm's version against a packaging manifest")]
struct Args {
    #[arg(long, default_value = "./pyproject.toml", help = "Manifest to read")]
    manifest: PathBuf,
    #[arg(long, help = "Dotted key path to the version, overrides --kind")]
    key: Option<String>,
    #[arg(long, value_enum, help = "Manifest layout (detected from the manifest contents when omitted)")]
    kind: Option<Kind>,
    #[arg(long, help = "Version to compare against [default: the linked htnorm version]")]
    expected: Option<String>,
    #[arg(long, help = "Output machine-readable JSON")]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    Pyproject,
    Cargo,
    CargoWorkspace,
}

impl From<Kind> for ManifestKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Pyproject => ManifestKind::Pyproject,
            Kind::Cargo => ManifestKind::Cargo,
            Kind::CargoWorkspace => ManifestKind::CargoWorkspace,
        }
    }
}

fn build_check(args: &Args) -> Result<VersionCheck, CheckError> {
    let expected = args.expected.as_deref().unwrap_or(htnorm::VERSION);
    let check = VersionCheck::new(expected, args.manifest.clone());

    Ok(match (&args.key, args.kind) {
        (Some(key), _) => check.with_key_path(key.parse::<KeyPath>()?),
        (None, Some(kind)) => check.with_kind(kind.into()),
        (None, None) => check.with_detected_kind(),
    })
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    // stdout carries the result; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let outcome = build_check(&args).and_then(|check| {
        tracing::debug!("Checking {:?} in {:?}", check.key_path(), check.manifest_path());
        check.run()
    });

    match outcome {
        Ok(report) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&output::success(report))?);
            } else {
                println!("{}", output::human(&report));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&output::failure(&e))?);
            } else {
                eprintln!("htnorm-verify: {}", e);
            }
            let code = u8::try_from(e.kind().code()).unwrap_or(1);
            Ok(ExitCode::from(code))
        }
    }
}
