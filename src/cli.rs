//! Command line interface for Springdrift

use crate::animation::SpringAnimation;
use crate::config::{ConfigError, SpringDriftConfig};
use crate::physics::integrators::SpringIntegrator;
use crate::physics::math::Scalar;
use crate::presets::{PresetError, PresetRegistry};
use bevy::log::{debug, info, warn};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("BUILD_DATE"),
    ")"
);

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Invalid preset: {0}")]
    InvalidPreset(#[from] PresetError),
    #[error("Frame rate must be positive and finite, got {0}")]
    InvalidFrameRate(Scalar),
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Springdrift - simulate a damped spring and print its trajectory as CSV
#[derive(Parser, Debug)]
#[command(version, long_version = LONG_VERSION, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (TOML format)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Named spring preset (e.g., default, gentle, wobbly, stiff)
    #[arg(short, long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Spring stiffness (overrides config file and preset)
    #[arg(short = 'k', long, value_name = "VALUE")]
    pub spring: Option<Scalar>,

    /// Friction coefficient (overrides config file and preset)
    #[arg(short, long, value_name = "VALUE")]
    pub friction: Option<Scalar>,

    /// Starting value
    #[arg(long, value_name = "VALUE", default_value_t = 1.0, allow_negative_numbers = true)]
    pub from: Scalar,

    /// Target value
    #[arg(long, value_name = "VALUE", default_value_t = 0.0, allow_negative_numbers = true)]
    pub to: Scalar,

    /// Initial velocity
    #[arg(long, value_name = "VALUE", default_value_t = 0.0, allow_negative_numbers = true)]
    pub velocity: Scalar,

    /// Frames per second (overrides config file)
    #[arg(short = 'r', long, value_name = "FPS")]
    pub frame_rate: Option<Scalar>,

    /// Maximum simulated seconds (overrides config file)
    #[arg(short, long, value_name = "SECONDS")]
    pub duration: Option<Scalar>,

    /// Rest threshold for displacement and velocity (overrides config file)
    #[arg(short, long, value_name = "VALUE")]
    pub epsilon: Option<Scalar>,

    /// List available presets and exit
    #[arg(long)]
    pub list_presets: bool,

    /// Write the effective configuration to the --config file (or the user
    /// configuration file) and exit
    #[arg(long)]
    pub save_config: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Outcome of a simulation run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// Frames written, excluding the initial state
    pub frames: usize,
    pub elapsed: Scalar,
    pub settled: bool,
}

/// Text listing of the presets in a registry
pub fn format_presets(registry: &PresetRegistry) -> String {
    let mut listing = String::from("Available presets:\n");
    for name in registry.list_available() {
        if let Ok(preset) = registry.get(&name) {
            let parameters = preset.parameters;
            listing.push_str(&format!(
                "  - {name} (spring {}, friction {}): {}\n",
                parameters.spring, parameters.friction, preset.description
            ));
        }
    }

    let aliases = registry.list_aliases();
    if !aliases.is_empty() {
        listing.push_str("\nAliases:\n");
        for (alias, target) in aliases {
            listing.push_str(&format!("  - {alias} -> {target}\n"));
        }
    }

    listing
}

/// Handles the --list-presets flag by printing available presets
pub fn handle_list_presets() {
    print!("{}", format_presets(&PresetRegistry::default()));
}

/// Loads configuration from file or defaults, then applies command-line overrides
pub fn load_and_apply_config(
    args: &Args,
    registry: &PresetRegistry,
) -> Result<SpringDriftConfig, CliError> {
    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path.display());
        SpringDriftConfig::load(config_path)?
    } else {
        SpringDriftConfig::load_from_user_config()
    };

    if let Some(preset) = &args.preset {
        registry.get(preset)?;
        info!("Using spring preset: {preset}");
        config.spring.preset = Some(preset.clone());
    }

    // Raw constants refine whatever the preset resolved to
    if args.spring.is_some() || args.friction.is_some() {
        let resolved = config.spring.parameters(registry)?;
        config.spring.preset = None;
        config.spring.spring = args.spring.unwrap_or(resolved.spring);
        config.spring.friction = args.friction.unwrap_or(resolved.friction);
        info!(
            "Overriding spring constants to: spring {}, friction {}",
            config.spring.spring, config.spring.friction
        );
    }

    if let Some(frame_rate) = args.frame_rate {
        info!("Overriding frame rate to: {frame_rate}");
        config.animation.frame_rate = frame_rate;
    }

    if let Some(duration) = args.duration {
        info!("Overriding maximum duration to: {duration}");
        config.animation.max_duration = duration;
    }

    if let Some(epsilon) = args.epsilon {
        info!("Overriding rest epsilon to: {epsilon}");
        config.animation.rest_epsilon = epsilon;
    }

    Ok(config)
}

/// Handles the --save-config flag, returning where the configuration went
pub fn handle_save_config(args: &Args) -> Result<PathBuf, CliError> {
    let config = load_and_apply_config(args, &PresetRegistry::default())?;
    let path = match &args.config {
        Some(path) => path.clone(),
        None => SpringDriftConfig::user_config_path().ok_or(ConfigError::NoConfigDirectory)?,
    };

    config.save(&path)?;
    info!("Saved configuration to {}", path.display());
    Ok(path)
}

/// Animate a scalar spring as configured and write `time,value,velocity` rows
pub fn run(args: &Args, out: &mut impl Write) -> Result<RunSummary, CliError> {
    let registry = PresetRegistry::default();
    let config = load_and_apply_config(args, &registry)?;

    let frame_rate = config.animation.frame_rate;
    if !(frame_rate.is_finite() && frame_rate > 0.0) {
        return Err(CliError::InvalidFrameRate(frame_rate));
    }

    let parameters = config.spring.parameters(&registry)?;
    let dt = config.animation.time_step();
    if dt > parameters.stable_time_step_limit() {
        warn!(
            "Frame step {dt:.4}s exceeds the stability limit {:.4}s for spring {}; \
             the animation will diverge",
            parameters.stable_time_step_limit(),
            parameters.spring
        );
    }
    let integrator = SpringIntegrator::new(parameters);
    debug!(
        "Integrating with {} (order {}): spring {} friction {} (damping ratio {:.3}), dt {dt:.4}s",
        integrator.name(),
        integrator.convergence_order(),
        parameters.spring,
        parameters.friction,
        parameters.damping_ratio()
    );

    let animation = SpringAnimation::new(integrator, args.from, args.to)
        .with_velocity(args.velocity)
        .with_rest_epsilon(config.animation.rest_epsilon);

    writeln!(out, "time,value,velocity")?;
    writeln!(out, "{:.6},{:.6},{:.6}", 0.0, animation.value(), animation.velocity())?;

    let mut summary = RunSummary {
        frames: 0,
        elapsed: 0.0,
        settled: false,
    };
    for frame in animation.frames(dt, config.animation.max_duration) {
        writeln!(
            out,
            "{:.6},{:.6},{:.6}",
            frame.time, frame.value, frame.velocity
        )?;
        summary.frames += 1;
        summary.elapsed = frame.time;
        summary.settled = frame.at_rest;
    }

    if summary.settled {
        info!(
            "Settled after {} frames ({:.3}s)",
            summary.frames, summary.elapsed
        );
    } else {
        warn!(
            "Did not settle within {:.3}s",
            config.animation.max_duration
        );
    }

    Ok(summary)
}
