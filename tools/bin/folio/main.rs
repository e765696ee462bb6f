use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand, arg, command};
use tracing::{Level, debug, info};

use common::{
    Site,
    config::{SiteConfig, read_config},
    contact::{ContactForm, FormValues},
    layout::{Clock, FixedClock, SystemClock, compose},
    nav::NavController,
    style::stylesheet,
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// site config file (defaults to the bundled config)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// more logging (repeat for trace output)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// report configuration defects
    Check,

    /// print the stylesheet generated from the design tokens
    Css,

    /// print the composed page as json
    Render {
        /// viewport width in css pixels
        #[arg(short, long, default_value_t = 1280.0)]
        width: f64,

        /// compose with the mobile overlay toggled open
        #[arg(long)]
        open: bool,

        /// footer year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
    },

    /// show what the contact form would post, or which fields block it
    Submit {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        message: String,
    },
}

fn load_config(path: Option<PathBuf>) -> Result<SiteConfig> {
    match path {
        Some(path) => read_config(path),
        None => {
            debug!("using bundled config");
            SiteConfig::bundled()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.config)?;

    match cli.command {
        Commands::Check => {
            let defects = config.validate();

            if defects.is_empty() {
                println!("config ok");
            } else {
                for defect in &defects {
                    println!("defect: {defect}");
                }
                anyhow::bail!("found {} defect(s)", defects.len());
            }
        }
        Commands::Css => {
            let site = Site::new(config)?;

            print!("{}", stylesheet(site.tokens()));
        }
        Commands::Render { width, open, year } => {
            let site = Site::new(config)?;

            let mut nav = NavController::new();
            if open {
                nav.toggle();
            }

            let bp = site.tokens().breakpoints.classify(width);
            info!(width, %bp, open, "composing page");

            let fixed;
            let clock: &dyn Clock = match year {
                Some(year) => {
                    fixed = FixedClock(year);
                    &fixed
                }
                None => &SystemClock,
            };

            let page = compose(&site, &nav, bp, clock);

            println!("{}", serde_json::to_string_pretty(&page)?);
        }
        Commands::Submit {
            name,
            email,
            message,
        } => {
            let site = Site::new(config)?;
            let form = ContactForm::new(&site.content().contact);

            let values = FormValues::new()
                .with("name", &name)
                .with("email", &email)
                .with("message", &message);

            match form.submit(&values) {
                Ok(post) => {
                    println!("{} {}", post.method, post.action);
                    for (field, value) in post.fields {
                        println!("  {field} = {value:?}");
                    }
                }
                Err(blocked) => anyhow::bail!("submission blocked: {blocked}"),
            }
        }
    }

    Ok(())
}
