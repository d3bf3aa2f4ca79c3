use std::fs;
use std::path::Path;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Report, Result, WrapErr};

use clearfield::{DemoOptions, FieldAttrs, FieldDemo, IconScale};

#[derive(Debug, Parser)]
#[command(
    name = "clearfield-demo",
    version,
    about = "Interactive demo of the clearfield text input"
)]
struct Cli {
    /// Clear-icon size tier: small, normal or big (divisors 3, 2, 1 also work)
    #[arg(short = 's', long = "icon-scale", value_name = "SCALE")]
    icon_scale: Option<IconScale>,

    /// Initial field text
    #[arg(short = 't', long = "text", value_name = "TEXT")]
    text: Option<String>,

    /// Placeholder shown while the field is empty
    #[arg(long = "placeholder", value_name = "TEXT")]
    placeholder: Option<String>,

    /// Field attributes: JSON file path or inline payload
    #[arg(short = 'a', long = "attrs", value_name = "SPEC")]
    attrs: Option<String>,

    /// Title shown above the field
    #[arg(long = "title", value_name = "TEXT")]
    title: Option<String>,

    /// Event-poll tick in milliseconds
    #[arg(long = "tick-ms", value_name = "MS", default_value_t = 250)]
    tick_ms: u64,

    /// How long each clear notification stays on the status line
    #[arg(long = "toast-ms", value_name = "MS", default_value_t = 2500)]
    toast_ms: u64,

    /// Hide the key help footer
    #[arg(long = "no-help")]
    no_help: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let mut attrs = match cli.attrs.as_deref() {
        Some(spec) => load_attrs(spec)?,
        None => FieldAttrs::default(),
    };
    if let Some(scale) = cli.icon_scale {
        attrs.icon_scale = scale;
    }
    if let Some(text) = cli.text {
        attrs.text = text;
    }
    if let Some(placeholder) = cli.placeholder {
        attrs.placeholder = Some(placeholder);
    }

    let options = DemoOptions {
        tick_rate: Duration::from_millis(cli.tick_ms),
        toast_duration: Duration::from_millis(cli.toast_ms),
        show_help: !cli.no_help,
    };

    let mut demo = FieldDemo::from_attrs(attrs).with_options(options);
    if let Some(title) = cli.title {
        demo = demo.with_title(title);
    }
    demo.run().map_err(Report::msg)
}

/// A spec names a file when one exists at that path; otherwise it is taken as
/// an inline JSON payload.
fn load_attrs(spec: &str) -> Result<FieldAttrs> {
    let raw = if Path::new(spec).is_file() {
        fs::read_to_string(spec).wrap_err_with(|| format!("failed to read attrs file {spec}"))?
    } else {
        spec.to_string()
    };
    FieldAttrs::from_json(&raw).map_err(Report::msg)
}
