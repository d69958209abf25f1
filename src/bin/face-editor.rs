use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "face-editor", version)]
struct Cli {
    /// Log debug output to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Restore a face from a URL fragment and print it as JSON.
    Decode(DecodeArgs),
    /// Encode a face JSON file as a URL fragment.
    Encode(EncodeArgs),
    /// Print the projected gallery sections for a fragment.
    Sections(SectionsArgs),
    /// Generate a random face and print its fragment.
    Random(RandomArgs),
}

#[derive(Parser, Debug)]
struct DecodeArgs {
    /// Fragment text, with or without the leading `#`.
    #[arg(long)]
    fragment: String,

    /// Treat the page as opened by a window with this id.
    #[arg(long)]
    opener: Option<String>,

    /// Seed for the fallback generator.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

#[derive(Parser, Debug)]
struct EncodeArgs {
    /// Input face config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Prefix the fragment with this parent key.
    #[arg(long)]
    parent_key: Option<i64>,
}

#[derive(Parser, Debug)]
struct SectionsArgs {
    /// Fragment text; a random face is used when omitted.
    #[arg(long, default_value = "")]
    fragment: String,

    /// Shape catalog JSON (`category -> [variant, ...]`); the bundled one is used when omitted.
    #[arg(long)]
    shapes: Option<PathBuf>,

    /// Session options JSON.
    #[arg(long)]
    opts: Option<PathBuf>,

    /// Seed for the fallback generator.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

#[derive(Parser, Debug)]
struct RandomArgs {
    /// Generator seed.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Session options JSON (its shuffle sets drive the generator).
    #[arg(long)]
    opts: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Decode(args) => cmd_decode(args),
        Command::Encode(args) => cmd_encode(args),
        Command::Sections(args) => cmd_sections(args),
        Command::Random(args) => cmd_random(args),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn generator(
    shapes: face_editor::ShapeCatalog,
    seed: u64,
) -> anyhow::Result<face_editor::CatalogGenerator> {
    let catalog = face_editor::Catalog::builtin().context("build control catalog")?;
    Ok(face_editor::CatalogGenerator::new(catalog, shapes, seed))
}

fn read_opts(path: Option<&Path>) -> anyhow::Result<face_editor::SessionOpts> {
    match path {
        Some(p) => face_editor::SessionOpts::from_path(p)
            .with_context(|| format!("load session options '{}'", p.display())),
        None => Ok(face_editor::SessionOpts::default()),
    }
}

fn cmd_decode(args: DecodeArgs) -> anyhow::Result<()> {
    let generator = generator(face_editor::ShapeCatalog::builtin(), args.seed)?;
    let loaded = face_editor::load_session(
        &args.fragment,
        args.opener.map(face_editor::OpenerHandle::new),
        &generator,
        &face_editor::ShuffleOptions::default(),
    );
    if !loaded.restored {
        eprintln!("fragment could not be restored; generated a new face");
    }
    let out = serde_json::json!({
        "restored": loaded.restored,
        "linkage": loaded.linkage,
        "faceConfig": loaded.face,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn cmd_encode(args: EncodeArgs) -> anyhow::Result<()> {
    let face = face_editor::FaceConfig::from_path(&args.in_path)
        .with_context(|| format!("load face config '{}'", args.in_path.display()))?;
    let payload = face_editor::encode_face(&face);
    match args.parent_key {
        Some(key) => println!("#{key},{payload}"),
        None => println!("#{payload}"),
    }
    Ok(())
}

fn cmd_sections(args: SectionsArgs) -> anyhow::Result<()> {
    let shapes = match &args.shapes {
        Some(p) => face_editor::ShapeCatalog::from_path(p)
            .with_context(|| format!("load shape catalog '{}'", p.display()))?,
        None => face_editor::ShapeCatalog::builtin(),
    };
    let opts = read_opts(args.opts.as_deref())?;
    let catalog = face_editor::Catalog::builtin().context("build control catalog")?;
    let generator = generator(shapes.clone(), args.seed)?;

    let session = face_editor::EditorSession::with_catalog(
        face_editor::MemoryHost::new(args.fragment),
        &generator,
        &catalog,
        &shapes,
        opts,
    )?;
    println!("{}", serde_json::to_string_pretty(session.sections())?);
    Ok(())
}

fn cmd_random(args: RandomArgs) -> anyhow::Result<()> {
    use face_editor::FaceGenerator as _;

    let opts = read_opts(args.opts.as_deref())?;
    let generator = generator(face_editor::ShapeCatalog::builtin(), args.seed)?;
    let face = generator.generate(&opts.shuffle);
    println!("#{}", face_editor::encode_face(&face));
    Ok(())
}
