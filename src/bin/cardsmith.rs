use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

use cardsmith::output::{file, preview};
use cardsmith::{
    AppConfig, CropPolicy, RenderRequest, SourceImage, TemplateCatalog, TemplateRegistry,
};

#[derive(Parser, Debug)]
#[command(name = "cardsmith", version)]
struct Cli {
    /// Log per-layer decisions.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the templates of a catalogue.
    Templates(TemplatesArgs),
    /// Render one card as a PNG.
    Render(RenderArgs),
    /// Search the local icon pack for logos.
    Icons(IconsArgs),
}

#[derive(Args, Debug)]
struct CatalogArgs {
    /// Template catalogue JSON. Defaults to the config's catalogue, then the builtin one.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Settings file.
    #[arg(long, default_value = cardsmith::config::CONFIG_FILE)]
    config: PathBuf,
}

#[derive(Args, Debug)]
struct TemplatesArgs {
    #[command(flatten)]
    catalog: CatalogArgs,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Template id, e.g. "Template 1".
    #[arg(long)]
    template: String,

    /// Poster image.
    #[arg(long)]
    poster: Option<PathBuf>,

    /// Logo image.
    #[arg(long)]
    logo: Option<PathBuf>,

    /// Crop policy: center, edge-a (top/left), edge-b (bottom/right) or manual.
    #[arg(long, default_value = "center")]
    crop: CropPolicy,

    /// Manual crop offset in [0, 1000].
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u16).range(0..=1000))]
    offset: u16,

    /// Directory template backgrounds are resolved against.
    #[arg(long)]
    assets: Option<PathBuf>,

    #[command(flatten)]
    catalog: CatalogArgs,

    /// Exact output PNG path.
    #[arg(long, conflicts_with_all = ["out_dir", "title"])]
    out: Option<PathBuf>,

    /// Output directory for a timestamped file name.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Card title used for the timestamped file name.
    #[arg(long)]
    title: Option<String>,

    /// Also write a letterboxed preview: `WxH PATH`.
    #[arg(long, num_args = 2, value_names = ["WxH", "PATH"])]
    preview: Option<Vec<String>>,
}

#[derive(Args, Debug)]
struct IconsArgs {
    /// Case-insensitive file name fragment.
    #[arg(long)]
    query: String,

    /// Icon pack root. Defaults to the config's icon pack directory.
    #[arg(long)]
    root: Option<PathBuf>,

    /// Settings file.
    #[arg(long, default_value = cardsmith::config::CONFIG_FILE)]
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Templates(args) => cmd_templates(args),
        Command::Render(args) => cmd_render(args),
        Command::Icons(args) => cmd_icons(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: &Path) -> anyhow::Result<AppConfig> {
    AppConfig::load(path).with_context(|| format!("load config '{}'", path.display()))
}

fn load_catalog(args: &CatalogArgs, config: &AppConfig) -> anyhow::Result<TemplateCatalog> {
    match args.catalog.as_ref().or(config.template_catalog.as_ref()) {
        Some(path) => TemplateCatalog::from_path(path)
            .with_context(|| format!("load template catalogue '{}'", path.display())),
        None => Ok(TemplateCatalog::builtin()),
    }
}

fn cmd_templates(args: TemplatesArgs) -> anyhow::Result<()> {
    let config = load_config(&args.catalog.config)?;
    let catalog = load_catalog(&args.catalog, &config)?;
    catalog.validate()?;
    for t in &catalog.templates {
        match &t.background {
            Some(bg) => println!("{}\t{}\t{bg}", t.id, t.mode()),
            None => println!("{}\t{}", t.id, t.mode()),
        }
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let config = load_config(&args.catalog.config)?;
    let catalog = load_catalog(&args.catalog, &config)?;

    let assets_root = args
        .assets
        .clone()
        .or_else(|| config.assets_root.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    let registry = TemplateRegistry::prepare(catalog, &assets_root)?;

    let poster = args
        .poster
        .as_deref()
        .map(|p| SourceImage::from_path(p).with_context(|| format!("load poster '{}'", p.display())))
        .transpose()?;
    let logo = args
        .logo
        .as_deref()
        .map(|p| SourceImage::from_path(p).with_context(|| format!("load logo '{}'", p.display())))
        .transpose()?;

    let mut request = RenderRequest::new(&args.template).crop(args.crop, args.offset);
    if let Some(p) = &poster {
        request = request.poster(p);
    }
    if let Some(l) = &logo {
        request = request.logo(l);
    }

    let card = cardsmith::render_required(&registry, &request)?;

    let written = match &args.out {
        Some(path) => {
            file::write_png(&card, path)?;
            path.clone()
        }
        None => {
            let dir = args
                .out_dir
                .clone()
                .or_else(|| config.output_directory.clone())
                .unwrap_or_else(|| PathBuf::from("."));
            let now = chrono::Local::now().naive_local();
            file::write_card(&card, &dir, args.title.as_deref(), now)?
        }
    };

    if let Some(preview_args) = &args.preview {
        let [size, path] = preview_args.as_slice() else {
            anyhow::bail!("--preview takes WxH and a path");
        };
        let (w, h) = parse_dims(size)?;
        let boxed = preview::letterbox(&card, w, h)?;
        file::write_png(&boxed, Path::new(path))?;
        eprintln!("wrote preview {path}");
    }

    println!("{}", written.display());
    println!("sha256={}", file::pixel_digest(&card));
    Ok(())
}

fn cmd_icons(args: IconsArgs) -> anyhow::Result<()> {
    let config = load_config(&args.config)?;
    let root = args
        .root
        .or(config.icon_pack_directory)
        .context("no icon pack directory: pass --root or set icon_pack_directory")?;
    let hits = cardsmith::assets::icon_pack::search_icon_pack(&root, &args.query)?;
    if hits.is_empty() {
        eprintln!("no icons matching '{}' under {}", args.query, root.display());
    }
    for p in hits {
        println!("{}", p.display());
    }
    Ok(())
}

fn parse_dims(s: &str) -> anyhow::Result<(u32, u32)> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .with_context(|| format!("expected WxH, got '{s}'"))?;
    let w = w.trim().parse().with_context(|| format!("preview width '{w}'"))?;
    let h = h.trim().parse().with_context(|| format!("preview height '{h}'"))?;
    Ok((w, h))
}
