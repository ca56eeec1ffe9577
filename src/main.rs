use bomship::cli::{Args, Command};
use bomship::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(exit_code_for(&e).as_i32());
    }
}

/// A rejected upload gets its own exit code so CI pipelines can
/// distinguish "server said no" from local/transport failures.
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<BomshipError>() {
        Some(BomshipError::RemoteRejected { .. }) => ExitCode::UploadRejected,
        _ => ExitCode::ApplicationError,
    }
}

fn run() -> Result<()> {
    let args = Args::parse_args();

    match args.command {
        Command::Version {
            properties,
            lenient,
            output,
        } => run_version(properties, lenient, output),
        Command::Upload {
            bom,
            uri,
            api_key,
            project,
            trust_all,
            ignore_failures,
        } => run_upload(UploadRequest {
            bom_file: bom,
            uri,
            api_key,
            project_id: project,
            trust_all,
            ignore_failures,
        }),
    }
}

fn run_version(properties: PathBuf, lenient: bool, output: Option<PathBuf>) -> Result<()> {
    let mode = if lenient {
        LoadMode::Lenient
    } else {
        LoadMode::Strict
    };
    let props = PropertySource::load(&properties, mode)?;
    let record = resolve(&props, &ProcessEnv);

    eprintln!("📦 Resolved version {}", record);

    let json = serde_json::to_string_pretty(&record)?;
    match output {
        Some(path) => fs::write(&path, json + "\n").map_err(|e| {
            BomshipError::RecordWrite {
                path,
                details: e.to_string(),
            }
            .into()
        }),
        None => {
            println!("{}", json);
            Ok(())
        }
    }
}

fn run_upload(request: UploadRequest) -> Result<()> {
    eprintln!("📤 Uploading BOM {} to {}", request.bom_file.display(), request.uri);
    if request.trust_all {
        eprintln!("⚠️  Warning: certificate validation disabled (--trust-all)");
    }

    let uploader = BomUploader::new(request.trust_all)?;
    uploader.upload(&request)?;
    Ok(())
}
