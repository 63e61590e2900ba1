use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use video_library::loader::builtin_catalog;
use video_library::{Session, SessionConfig, VideoPlayer};

#[derive(Parser, Debug)]
#[command(name = "video-player")]
#[command(about = "Interactive video library and playlist manager", long_about = None)]
struct Args {
    /// Read commands from this file instead of standard input
    #[arg(short = 's', long)]
    script: Option<String>,

    /// Seed for PLAY_RANDOM (reproducible picks)
    #[arg(long)]
    seed: Option<u64>,

    /// Don't print the "YT> " prompt
    #[arg(long)]
    no_prompt: bool,

    /// Echo each command (handy with --script)
    #[arg(long)]
    echo: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = SessionConfig::new().with_echo(args.echo);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if args.no_prompt {
        config = config.with_prompt("");
    }

    let player = VideoPlayer::new(builtin_catalog());
    log::info!("Catalog loaded: {} videos", player.number_of_videos());

    let input: Box<dyn BufRead> = match args.script {
        Some(script) => {
            // Expand ~ in the path
            let path = PathBuf::from(shellexpand::tilde(&script).as_ref());
            log::info!("Reading commands from {:?}", path);
            let file = File::open(&path)
                .with_context(|| format!("Failed to open command script: {:?}", path))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let mut session = Session::new(config, player, input, io::stdout().lock());
    session.run()
}
