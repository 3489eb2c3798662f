use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use prancheta::{init_logging, DocumentCodec, EditorConfig, TacticalBoard, BUILD_DATE, VERSION};

const USAGE: &str = "usage: prancheta [--config <file>] <command>

commands:
  new <out.json>                create an empty board document
  info <doc.json>               summarize a board document
  render <doc.json> <out.png>   rasterize a board document";

fn load_config(explicit: Option<&Path>) -> anyhow::Result<EditorConfig> {
    match explicit {
        Some(path) => EditorConfig::load_from_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => {
            let path = EditorConfig::default_path()?;
            EditorConfig::load_or_default(&path)
                .with_context(|| format!("loading config {}", path.display()))
        }
    }
}

fn cmd_new(config: EditorConfig, out: &Path) -> anyhow::Result<()> {
    let mut board = TacticalBoard::new(Vec::new(), config)?;
    board
        .save_to_file(out)
        .with_context(|| format!("writing {}", out.display()))?;
    println!("created {} ({})", out.display(), board.meta().id);
    Ok(())
}

fn cmd_info(path: &Path) -> anyhow::Result<()> {
    let doc = DocumentCodec::load_from_file(path)
        .with_context(|| format!("reading {}", path.display()))?;

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for item in &doc.items {
        *counts.entry(item.item_type().as_str()).or_default() += 1;
    }

    println!("id:         {}", doc.id);
    println!(
        "field:      {} x {}",
        doc.field_dimensions.width, doc.field_dimensions.height
    );
    println!("background: {}", doc.background_color);
    if let Some(created) = doc.created_at {
        println!("created:    {}", created.to_rfc3339());
    }
    if let Some(updated) = doc.updated_at {
        println!("updated:    {}", updated.to_rfc3339());
    }
    println!("items:      {}", doc.items.len());
    for (kind, n) in counts {
        println!("  {kind:<12}{n}");
    }
    Ok(())
}

fn cmd_render(config: EditorConfig, input: &Path, output: &Path) -> anyhow::Result<()> {
    let doc = DocumentCodec::load_from_file(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let board = TacticalBoard::from_document(&doc, config)?;

    let options = board.render_options();
    let image = prancheta::render_to_image(board.scene(), board.viewport(), &options);
    image
        .save(output)
        .with_context(|| format!("writing {}", output.display()))?;
    tracing::info!(
        "Rendered {} items to {} ({}x{})",
        board.scene().len(),
        output.display(),
        image.width(),
        image.height()
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let mut config_path: Option<PathBuf> = None;
    if let Some(i) = args.iter().position(|a| a == "--config") {
        if i + 1 >= args.len() {
            bail!("--config needs a file\n\n{USAGE}");
        }
        config_path = Some(PathBuf::from(args.remove(i + 1)));
        args.remove(i);
    }

    let argv: Vec<&str> = args.iter().map(String::as_str).collect();
    match argv.as_slice() {
        ["--version"] => {
            println!("prancheta {VERSION} (built {BUILD_DATE})");
            Ok(())
        }
        ["new", out] => cmd_new(load_config(config_path.as_deref())?, Path::new(out)),
        ["info", doc] => cmd_info(Path::new(doc)),
        ["render", doc, out] => cmd_render(
            load_config(config_path.as_deref())?,
            Path::new(doc),
            Path::new(out),
        ),
        _ => bail!("{USAGE}"),
    }
}
