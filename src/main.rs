use clap::{Parser, Subcommand};
use slice_preview::breakpoint::Breakpoint;
use slice_preview::i18n::Lang;
use slice_preview::{config, output, preview, style};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "slice-preview")]
#[command(about = "Inline-style previews of site slices at mobile and desktop widths")]
#[command(long_about = "\
Inline-style previews of site slices at mobile and desktop widths

Each slice is rendered with its Tailwind classes resolved to inline CSS and
written to a standalone HTML file showing a 375px and a 1440px frame.

Examples:
  slice-preview render HomeHero
  slice-preview render HomeHero en
  slice-preview render HomeHero pl output.html
  slice-preview resolve \"flex flex-col lg:flex-row\" --breakpoint desktop

Run 'slice-preview gen-config' to generate a documented slice-preview.toml.")]
#[command(version)]
struct Cli {
    /// Directory containing slice-preview.toml
    #[arg(long, default_value = ".", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a slice preview to an HTML file
    Render {
        /// Slice name, e.g. HomeHero
        slice: String,
        /// Content language (pl or en); defaults to the configured language
        lang: Option<Lang>,
        /// Output file; defaults to <slice>-preview.html
        output: Option<PathBuf>,
    },
    /// Resolve a class list to inline CSS
    Resolve {
        /// Space-separated utility classes
        classes: String,
        /// Breakpoint to resolve for
        #[arg(long, short, default_value = "mobile")]
        breakpoint: Breakpoint,
        /// Print the style map as JSON
        #[arg(long)]
        json: bool,
    },
    /// List known slices
    List,
    /// Print a stock slice-preview.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Render {
            slice,
            lang,
            output: output_file,
        } => {
            let config = config::load_config(&cli.config)?;
            let lang = lang.unwrap_or(config.default_lang);
            let output_file = output_file.unwrap_or_else(|| preview::default_output_name(&slice));
            let document = preview::build_preview(&slice, lang, &config)?;
            preview::write_preview(&output_file, &document)?;
            let shown = std::path::absolute(&output_file).unwrap_or(output_file);
            output::print_render_summary(&slice, lang, &shown, &config.preview);
        }
        Command::Resolve {
            classes,
            breakpoint,
            json,
        } => {
            let config = config::load_config(&cli.config)?;
            let styles = style::resolve(&classes, breakpoint);
            if json {
                println!("{}", serde_json::to_string_pretty(&styles)?);
            } else {
                output::print_resolved(&classes, breakpoint, &styles, &config.design_variables());
            }
        }
        Command::List => {
            output::print_slice_list();
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
