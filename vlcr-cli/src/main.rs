//! vlcr CLI Tool
//!
//! Command-line interface for inspecting and playing media through libVLC.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::{Duration, Instant};
use vlcr::{FactoryConfig, MediaPlayer, MediaPlayerEvent, MediaPlayerFactory};
use vlcr_core::time::{format_time, parse_time};
use vlcr_core::{DiscovererCategory, MediaInfo, ParseFlags, TrackDetails};

#[derive(Parser)]
#[command(name = "vlcr")]
#[command(about = "Inspect and play media through libVLC")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// libVLC shared library to load instead of searching for one
    #[arg(long = "lib", value_name = "PATH", global = true)]
    library: Option<PathBuf>,

    /// Extra argument passed to libVLC, may be repeated
    #[arg(
        long = "vlc-arg",
        value_name = "ARG",
        allow_hyphen_values = true,
        global = true
    )]
    vlc_args: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a media and show its metadata and tracks
    Info {
        /// Media location or local path
        mrl: String,

        /// Print the information as JSON
        #[arg(long)]
        json: bool,

        /// Parse timeout in seconds
        #[arg(long, default_value = "10")]
        timeout: u64,
    },

    /// Play a media until it ends
    Play {
        /// Media location or local path
        mrl: String,

        /// Start position (ss, mm:ss or hh:mm:ss)
        #[arg(long, value_parser = parse_time_arg)]
        start: Option<i64>,

        /// Audio volume (0-200)
        #[arg(long)]
        volume: Option<i32>,

        /// Equalizer preset name, see `vlcr presets`
        #[arg(long)]
        equalizer: Option<String>,

        /// Restart the media each time it finishes
        #[arg(long)]
        repeat: bool,
    },

    /// Save a video frame to an image file
    Snapshot {
        /// Media location or local path
        mrl: String,

        /// Output image path, the format follows the extension
        #[arg(short, long)]
        output: PathBuf,

        /// Position of the frame (ss, mm:ss or hh:mm:ss)
        #[arg(long, value_parser = parse_time_arg, default_value = "0")]
        at: i64,

        /// Output width, 0 keeps the aspect ratio of the height
        #[arg(long, default_value = "0")]
        width: u32,

        /// Output height, 0 keeps the aspect ratio of the width
        #[arg(long, default_value = "0")]
        height: u32,

        /// Seconds to wait for the first video frame
        #[arg(long, default_value = "10")]
        timeout: u64,
    },

    /// List equalizer presets and bands
    Presets,

    /// List audio outputs and their devices
    Outputs,

    /// List audio and video filter modules
    Modules {
        /// Only list one kind of filter
        #[arg(long, value_enum)]
        kind: Option<ModuleKind>,
    },

    /// List media and renderer discovery services
    Discoverers,

    /// Show the libVLC version
    Version,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModuleKind {
    Audio,
    Video,
}

fn parse_time_arg(text: &str) -> Result<i64, vlcr_core::Error> {
    parse_time(text)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = FactoryConfig::from_env()
        .args(cli.vlc_args.iter().cloned())
        .quiet(cli.verbose == 0);
    if let Some(library) = &cli.library {
        config = config.library_path(library);
    }

    match cli.command {
        Commands::Info { mrl, json, timeout } => {
            show_info(&config, &mrl, json, Duration::from_secs(timeout))?
        }
        Commands::Play {
            mrl,
            start,
            volume,
            equalizer,
            repeat,
        } => play(&config, &mrl, start, volume, equalizer.as_deref(), repeat)?,
        Commands::Snapshot {
            mrl,
            output,
            at,
            width,
            height,
            timeout,
        } => snapshot(
            &config,
            &mrl,
            output,
            at,
            (width, height),
            Duration::from_secs(timeout),
        )?,
        Commands::Presets => list_presets(&config)?,
        Commands::Outputs => list_outputs(&config)?,
        Commands::Modules { kind } => list_modules(&config, kind)?,
        Commands::Discoverers => list_discoverers(&config)?,
        Commands::Version => show_version(&config)?,
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn open(config: &FactoryConfig) -> Result<MediaPlayerFactory> {
    MediaPlayerFactory::new(config).context("Failed to initialise libVLC")
}

fn show_info(config: &FactoryConfig, mrl: &str, json: bool, timeout: Duration) -> Result<()> {
    let factory = open(config)?;
    let media = factory
        .new_media::<&str>(mrl, &[])
        .context("Failed to create media")?;

    let parsed = media
        .parse_sync(ParseFlags::LOCAL | ParseFlags::NETWORK, Some(timeout))
        .context("Failed to parse media")?;
    if !parsed {
        tracing::warn!(mrl, "Parsing did not complete, information may be partial");
    }

    let info = media.info().context("Failed to read media information")?;
    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        print_info(&info);
    }
    Ok(())
}

fn print_info(info: &MediaInfo) {
    println!("=== Media ===");
    println!("Title: {}", info.display_name());
    println!("MRL: {}", info.mrl);
    if let Some(media_type) = info.media_type {
        println!("Type: {:?}", media_type);
    }
    println!("Duration: {}", info.formatted_duration());
    if let Some(status) = info.parsed_status {
        println!("Parse status: {:?}", status);
    }

    if !info.meta.is_empty() {
        println!();
        println!("=== Meta ===");
        for (key, value) in &info.meta {
            println!("{:?}: {}", key, value);
        }
    }

    println!();
    println!("=== Tracks ({}) ===", info.tracks.len());
    for track in &info.tracks {
        let language = track.language.as_deref().unwrap_or("-");
        let details = match &track.details {
            TrackDetails::Audio(audio) => {
                format!("{} ch, {} Hz", audio.channels, audio.rate)
            }
            TrackDetails::Video(video) => match video.frame_rate() {
                Some(fps) => format!("{}x{} @ {:.3} fps", video.width, video.height, fps),
                None => format!("{}x{}", video.width, video.height),
            },
            TrackDetails::Text(text) => text.encoding.clone().unwrap_or_default(),
            TrackDetails::Unknown => String::new(),
        };
        println!(
            "#{} {:?} [{}] lang={} {}",
            track.id,
            track.track_type,
            track.codec_name(),
            language,
            details
        );
    }
}

enum Outcome {
    Finished,
    Stopped,
    Failed,
}

fn play(
    config: &FactoryConfig,
    mrl: &str,
    start: Option<i64>,
    volume: Option<i32>,
    equalizer: Option<&str>,
    repeat: bool,
) -> Result<()> {
    let factory = open(config)?;
    let player = factory
        .new_media_player()
        .context("Failed to create media player")?;

    if let Some(name) = equalizer {
        let equalizer = factory
            .new_equalizer_from_preset(name)
            .context("Failed to load equalizer preset")?;
        player.audio().set_equalizer(Some(&equalizer))?;
    }
    player.controls().set_repeat(repeat)?;

    let (tx, rx) = mpsc::sync_channel(8);
    let handle = player.events().add_listener(move |event: &MediaPlayerEvent| {
        let outcome = match event {
            MediaPlayerEvent::Finished => Outcome::Finished,
            MediaPlayerEvent::Stopped => Outcome::Stopped,
            MediaPlayerEvent::Error => Outcome::Failed,
            _ => return,
        };
        let _ = tx.try_send(outcome);
    });

    let options: Vec<String> = start
        .map(|ms| vec![format!(":start-time={:.3}", ms as f64 / 1000.0)])
        .unwrap_or_default();
    if !player
        .media()
        .start(mrl, &options)
        .context("Failed to start playback")?
    {
        bail!("libVLC could not play {}", mrl);
    }
    if let Some(volume) = volume {
        player.audio().set_volume(volume)?;
    }

    let title = player
        .media()
        .info()
        .map(|info| info.display_name().to_string())
        .unwrap_or_else(|_| mrl.to_string());
    println!("Playing: {}", title);

    let result = wait_for_end(&player, &rx, repeat);
    println!();
    player.events().remove_listener(handle);
    result
}

fn wait_for_end(player: &MediaPlayer, rx: &mpsc::Receiver<Outcome>, repeat: bool) -> Result<()> {
    loop {
        match rx.recv_timeout(Duration::from_millis(500)) {
            Ok(Outcome::Finished) if repeat => continue,
            Ok(Outcome::Finished) | Ok(Outcome::Stopped) => return Ok(()),
            Ok(Outcome::Failed) => bail!("Playback failed"),
            Err(RecvTimeoutError::Timeout) => {
                let status = player.status();
                let time = status.time()?.unwrap_or(0);
                let length = status.length()?.unwrap_or(-1);
                print!("\r{} / {}", format_time(time), format_time(length));
                std::io::stdout().flush()?;
            }
            Err(RecvTimeoutError::Disconnected) => return Ok(()),
        }
    }
}

fn snapshot(
    config: &FactoryConfig,
    mrl: &str,
    output: PathBuf,
    at: i64,
    (width, height): (u32, u32),
    timeout: Duration,
) -> Result<()> {
    let config = config.clone().args(["--vout=dummy", "--no-audio"]);
    let factory = open(&config)?;
    let player = factory
        .new_media_player()
        .context("Failed to create media player")?;

    let options = [format!(":start-time={:.3}", at as f64 / 1000.0)];
    if !player
        .media()
        .start_timeout(mrl, &options, timeout)
        .context("Failed to start playback")?
    {
        bail!("libVLC could not play {}", mrl);
    }

    let deadline = Instant::now() + timeout;
    while player.status().video_outputs()? == 0 {
        if Instant::now() >= deadline {
            bail!("No video output appeared for {}", mrl);
        }
        std::thread::sleep(Duration::from_millis(100));
    }

    let image = player
        .snapshots()
        .get(width, height)
        .context("Failed to take snapshot")?;
    image.save(&output).context("Failed to write snapshot")?;
    println!(
        "Saved {}x{} frame to {}",
        image.width(),
        image.height(),
        output.display()
    );

    vlcr::MediaPlayerStopLatch::new(&player)
        .timeout(Duration::from_secs(5))
        .stop()?;
    Ok(())
}

fn list_presets(config: &FactoryConfig) -> Result<()> {
    let factory = open(config)?;

    println!("=== Bands ===");
    for (index, frequency) in factory.equalizer_bands()?.iter().enumerate() {
        println!("{:2}: {} Hz", index, frequency);
    }

    println!();
    println!("=== Presets ===");
    for name in factory.equalizer_presets()? {
        let equalizer = factory.new_equalizer_from_preset(&name)?;
        let amps: Vec<String> = equalizer.amps().iter().map(|a| format!("{:.1}", a)).collect();
        println!(
            "{:<20} preamp {:>5.1}  [{}]",
            name,
            equalizer.preamp(),
            amps.join(" ")
        );
    }
    Ok(())
}

fn list_outputs(config: &FactoryConfig) -> Result<()> {
    let factory = open(config)?;
    for output in factory.audio_outputs()? {
        println!("{} - {}", output.name, output.description);
        for device in &output.devices {
            println!("    {} ({})", device.description, device.device_id);
        }
    }
    Ok(())
}

fn list_modules(config: &FactoryConfig, kind: Option<ModuleKind>) -> Result<()> {
    let factory = open(config)?;
    let sections = [
        (ModuleKind::Audio, "Audio filters"),
        (ModuleKind::Video, "Video filters"),
    ];
    for (section, title) in sections {
        if kind.is_some_and(|k| k != section) {
            continue;
        }
        let modules = match section {
            ModuleKind::Audio => factory.audio_filters()?,
            ModuleKind::Video => factory.video_filters()?,
        };
        println!("=== {} ({}) ===", title, modules.len());
        for module in modules {
            let description = module
                .long_name
                .as_deref()
                .or(module.short_name.as_deref())
                .unwrap_or("");
            println!("{:<24} {}", module.name, description);
        }
        println!();
    }
    Ok(())
}

fn list_discoverers(config: &FactoryConfig) -> Result<()> {
    let factory = open(config)?;
    for category in DiscovererCategory::ALL {
        let services = factory.media_discoverers(*category)?;
        println!("=== {:?} ({}) ===", category, services.len());
        for service in services {
            println!("{:<24} {}", service.name, service.long_name);
        }
        println!();
    }

    let renderers = factory.renderer_discoverers()?;
    println!("=== Renderers ({}) ===", renderers.len());
    for service in renderers {
        println!("{:<24} {}", service.name, service.long_name);
    }
    Ok(())
}

fn show_version(config: &FactoryConfig) -> Result<()> {
    let factory = open(config)?;
    println!("vlcr {}", env!("CARGO_PKG_VERSION"));
    println!("libVLC {}", factory.version()?);
    println!("Compiler: {}", factory.compiler()?);
    println!("Changeset: {}", factory.changeset()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "vlcr",
            "info",
            "a.mkv",
            "-vv",
            "--vlc-arg",
            "--no-video-title-show",
            "--lib",
            "/opt/vlc/libvlc.so",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.vlc_args, vec!["--no-video-title-show".to_string()]);
        assert_eq!(cli.library, Some(PathBuf::from("/opt/vlc/libvlc.so")));
    }

    #[test]
    fn snapshot_time_is_parsed() {
        let cli =
            Cli::try_parse_from(["vlcr", "snapshot", "a.mkv", "-o", "f.png", "--at", "1:02.5"])
                .unwrap();
        match cli.command {
            Commands::Snapshot { at, width, .. } => {
                assert_eq!(at, 62_500);
                assert_eq!(width, 0);
            }
            _ => panic!("expected snapshot"),
        }
    }

    #[test]
    fn invalid_start_time_is_rejected() {
        assert!(Cli::try_parse_from(["vlcr", "play", "a.mkv", "--start", "1:75"]).is_err());
    }
}
