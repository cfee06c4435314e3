use std::path::PathBuf;

use anyhow::Result;
use candwin_core::CandidateWindow;
use candwin_helper::{ConsoleCaret, ConsoleRenderer, EofPolicy, Settings, init_logging, transport};
use clap::Parser;
use tracing::info;

/// Table-style candidate window helper
#[derive(Parser, Debug)]
#[command(name = "candwin-tbl")]
#[command(about = "Candidate window helper driven over stdin", long_about = None)]
struct Args {
    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    verbose: bool,

    /// Configuration file (default: ~/.config/candwin/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Screen width used for popup placement
    #[arg(long)]
    screen_width: Option<i32>,

    /// Screen height used for popup placement
    #[arg(long)]
    screen_height: Option<i32>,

    /// What to do when the engine closes stdin
    #[arg(long, value_enum)]
    on_eof: Option<EofPolicy>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut settings = Settings::load_or_default(args.config.as_deref());
    if let Some(width) = args.screen_width {
        settings.screen.width = width;
    }
    if let Some(height) = args.screen_height {
        settings.screen.height = height;
    }
    if let Some(on_eof) = args.on_eof {
        settings.transport.on_eof = on_eof;
    }

    let mut window = CandidateWindow::with_screen(settings.label_table(), settings.screen_size());
    let mut renderer = ConsoleRenderer::new(std::io::stdout());
    let mut caret = ConsoleCaret::default();

    info!(
        "Starting candwin-tbl (screen {}x{}, on EOF: {:?})",
        settings.screen.width, settings.screen.height, settings.transport.on_eof
    );
    transport::run(
        tokio::io::stdin(),
        &mut window,
        &mut renderer,
        &mut caret,
        settings.transport.on_eof,
    )
    .await
}
