//! Command runners for optimize, check and formats

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use log::debug;
use tokio::fs;

use crate::application::ports::ConfigStore;
use crate::application::{
    OptimizeAudioUseCase, OptimizeCallbacks, OptimizeError, OptimizeInput, OptimizeOutput,
};
use crate::domain::audio::{AudioInfo, RatePlan, MAX_DURATION_SECS};
use crate::domain::config::AppConfig;
use crate::domain::size::ByteSize;
use crate::domain::upload::{
    optimized_file_name, AudioFile, UploadPolicy, UploadRejection, ALL_FORMATS,
};
use crate::infrastructure::{SymphoniaDecoder, XdgConfigStore};

use super::args::OptimizeOptions;
use super::presenter::{format_size_against, Presenter};

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variable overriding the configured size ceiling
pub const MAX_SIZE_ENV: &str = "AUDIO_SLIM_MAX_SIZE";

/// Run the optimize command
pub async fn run_optimize(options: OptimizeOptions) -> ExitCode {
    let mut presenter = Presenter::new();

    let file_name = match file_name_of(&options.input) {
        Some(name) => name,
        None => {
            presenter.error(&format!("Not a file: {}", options.input.display()));
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let output_path = resolve_output_path(
        &options.input,
        options.output.as_deref(),
        options.output_dir.as_deref(),
    );
    if !options.overwrite && output_path.exists() {
        presenter.error(&format!(
            "Output file already exists: {} (use --force to overwrite)",
            output_path.display()
        ));
        return ExitCode::from(EXIT_ERROR);
    }

    let data = match fs::read(&options.input).await {
        Ok(data) => data,
        Err(e) => {
            presenter.error(&format!(
                "Failed to read {}: {}",
                options.input.display(),
                e
            ));
            return ExitCode::from(EXIT_ERROR);
        }
    };
    debug!("read {} bytes from {}", data.len(), options.input.display());

    presenter.start_spinner(&format!("Decoding {}...", file_name));
    let callbacks = spinner_callbacks(&presenter);

    let input = OptimizeInput {
        file: AudioFile::new(file_name, data),
        max_size: options.max_size,
    };
    let use_case = OptimizeAudioUseCase::new(SymphoniaDecoder::new());

    let result = tokio::task::spawn_blocking(move || use_case.execute(input, &callbacks)).await;

    let output = match result {
        Ok(Ok(output)) => output,
        Ok(Err(e)) => {
            presenter.spinner_fail("Optimization failed");
            presenter.error(&e.to_string());
            if let OptimizeError::SizeExceeded { actual, limit } = e {
                presenter.info(&format_size_against(actual, limit));
            }
            return ExitCode::from(EXIT_ERROR);
        }
        Err(e) => {
            presenter.spinner_fail("Optimization failed");
            presenter.error(&format!("Optimization task failed: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if let Err(e) = write_output(&output_path, &output).await {
        presenter.spinner_fail("Could not save the optimized file");
        presenter.error(&e);
        return ExitCode::from(EXIT_ERROR);
    }
    presenter.spinner_success(&format!("Saved {}", output_path.display()));

    let report = &output.report;
    if report.truncated {
        presenter.warn(&format!(
            "Audio was longer than {} seconds and has been truncated",
            MAX_DURATION_SECS
        ));
    }

    if options.json {
        match serde_json::to_string_pretty(report) {
            Ok(json) => presenter.output(&json),
            Err(e) => {
                presenter.error(&format!("Failed to serialize report: {}", e));
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        presenter.compression_summary(report);
        presenter.output(&output_path.to_string_lossy());
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Run the check command: can the file be uploaded without optimizing?
pub async fn run_check(input: &Path, max_size: ByteSize) -> ExitCode {
    let presenter = Presenter::new();

    let file_name = match file_name_of(input) {
        Some(name) => name,
        None => {
            presenter.error(&format!("Not a file: {}", input.display()));
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let size = match fs::metadata(input).await {
        Ok(meta) => ByteSize::from_bytes(meta.len()),
        Err(e) => {
            presenter.error(&format!("Failed to read {}: {}", input.display(), e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match UploadPolicy::new(max_size).check(&file_name, size) {
        Ok(format) => {
            presenter.success(&format!(
                "{} can be uploaded as-is ({}, {})",
                file_name,
                format.mime_type(),
                format_size_against(size, max_size)
            ));
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(rejection @ UploadRejection::TooLarge { .. }) => {
            presenter.warn(&rejection.to_string());
            presenter.info(&format!(
                "Run 'audio-slim optimize {}' to shrink it to {}",
                input.display(),
                optimized_file_name(&file_name)
            ));
            ExitCode::from(EXIT_ERROR)
        }
        Err(rejection) => {
            presenter.error(&rejection.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Print the accepted upload formats
pub fn list_formats() -> ExitCode {
    let presenter = Presenter::new();
    for format in ALL_FORMATS {
        presenter.format_entry(*format);
    }
    ExitCode::from(EXIT_SUCCESS)
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring config file {}: {}", store.path().display(), e);
            AppConfig::empty()
        }
    };

    let env_config = AppConfig {
        max_size: env::var(MAX_SIZE_ENV).ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}

/// Where the optimized file goes: explicit path, else the derived name
/// inside `output_dir`, else next to the input.
pub fn resolve_output_path(
    input: &Path,
    output: Option<&Path>,
    output_dir: Option<&Path>,
) -> PathBuf {
    if let Some(path) = output {
        return path.to_path_buf();
    }

    let name = optimized_file_name(&file_name_of(input).unwrap_or_default());
    match output_dir {
        Some(dir) => dir.join(name),
        None => input
            .parent()
            .map(|p| p.join(&name))
            .unwrap_or_else(|| PathBuf::from(&name)),
    }
}

fn file_name_of(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}

fn spinner_callbacks(presenter: &Presenter) -> OptimizeCallbacks {
    let Some(spinner) = presenter.spinner_handle() else {
        return OptimizeCallbacks::default();
    };

    let (decoded, rate, encoded) = (spinner.clone(), spinner.clone(), spinner);
    OptimizeCallbacks {
        on_decoded: Some(Box::new(move |info: &AudioInfo| {
            decoded.set_message(format!(
                "Decoded {:.1}s at {} Hz, mixing down...",
                info.duration_secs, info.sample_rate
            ));
        })),
        on_rate_selected: Some(Box::new(move |plan: &RatePlan| {
            rate.set_message(format!("Resampling to {} Hz...", plan.target_rate()));
        })),
        on_encoded: Some(Box::new(move |size: ByteSize| {
            encoded.set_message(format!("Encoded {}", size));
        })),
        ..Default::default()
    }
}

async fn write_output(path: &Path, output: &OptimizeOutput) -> Result<(), String> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
    }
    fs::write(path, output.file.data())
        .await
        .map_err(|e| format!("Failed to write {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_defaults_next_to_input() {
        let path = resolve_output_path(Path::new("/data/talk.m4a"), None, None);
        assert_eq!(path, PathBuf::from("/data/talk_optimized.wav"));
    }

    #[test]
    fn output_in_configured_dir() {
        let path = resolve_output_path(
            Path::new("/data/talk.final.m4a"),
            None,
            Some(Path::new("/out")),
        );
        assert_eq!(path, PathBuf::from("/out/talk.final_optimized.wav"));
    }

    #[test]
    fn explicit_output_wins() {
        let path = resolve_output_path(
            Path::new("talk.m4a"),
            Some(Path::new("x.wav")),
            Some(Path::new("/out")),
        );
        assert_eq!(path, PathBuf::from("x.wav"));
    }

    #[test]
    fn bare_file_name_stays_relative() {
        let path = resolve_output_path(Path::new("memo.ogg"), None, None);
        assert_eq!(path, PathBuf::from("memo_optimized.wav"));
    }
}
