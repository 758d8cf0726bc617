use artistmap::colors::ColorScheme;
use artistmap::display::{display_map_info, display_map_results};
use artistmap::progress::TraversalBar;
use artistmap::prompt::PromptError;
use artistmap::render::open_in_browser;
use artistmap::*;
use clap::Parser;
use std::io;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Lets LASTFM_API_KEY come from a .env file.
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(args.verbose);
    let colors = ColorScheme::new(!args.no_color);

    match run(args, &colors) {
        Ok(()) | Err(AppError::Prompt(PromptError::Aborted)) => {}
        Err(error) => {
            eprintln!("{} {}", colors.error("❌ Error:"), error);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "artistmap=debug,artistmap_core=debug"
    } else {
        "artistmap=warn,artistmap_core=warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(args: Args, colors: &ColorScheme) -> Result<(), AppError> {
    let api_key = require_api_key(&args)?;

    let config = {
        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), io::stdout());
        resolve_config(&args, &mut prompter)?
    };
    debug!(?config, "resolved configuration");

    let app = ArtistMapApp::new(LastFmClient::new(api_key)?, config);

    if !args.quiet {
        display_map_info(app.config(), colors);
    }

    let progress = TraversalBar::new(!args.quiet);
    let result = app.build_map(&progress)?;

    let options = OutputOptions::from_args(&args);
    app.write_outputs(&result, &options)?;

    display_map_results(&result, &options.html_path, colors, args.verbose, args.quiet);

    if !args.no_open {
        open_in_browser(&options.html_path);
    }

    Ok(())
}
