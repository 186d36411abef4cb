use anyhow::{anyhow, Context};
use board::FONTS;
use clap::{Parser, Subcommand};
use dotfont_core::{FontRegistry, Region};
use fs_storage::FsStorage;
use std::path::PathBuf;
use tracing::{event, Level};

mod board;
mod fs_storage;
mod render;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
    /// Directory container paths are resolved against
    #[arg(short = 'd', long, value_name = "DIR", default_value = ".")]
    font_dir: PathBuf,
    #[arg(short)]
    verbosity: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Show which GBK zone a character falls in
    Classify {
        #[arg(value_name = "HEX")]
        hex: String,
    },
    /// Print the glyphs for a GBK encoded byte string
    Render {
        #[arg(short, long)]
        font: String,
        #[arg(value_name = "HEX")]
        hex: String,
    },
    /// Print a font's character cell size
    Extent {
        #[arg(short, long)]
        font: String,
    },
    /// List the board's fonts and whether their containers open
    Fonts,
}

fn parse_hex(hex: &str) -> anyhow::Result<Vec<u8>> {
    let compact = hex
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>();
    hex::decode(compact).with_context(|| format!("{hex:?} is not a hex byte string"))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if cli.verbosity {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .finish();
    // use that subscriber to process traces emitted after this point
    tracing::subscriber::set_global_default(subscriber)?;

    let mut registry = FontRegistry::new(FsStorage::new(&cli.font_dir), &FONTS);

    match cli.command {
        Command::Classify { hex } => {
            let bytes = parse_hex(&hex)?;
            let c1 = *bytes.first().ok_or(anyhow!("need at least one byte"))?;
            let c2 = bytes.get(1).copied().unwrap_or(0);
            let region = Region::classify(c1, c2);
            println!(
                "{:02x}{:02x}: {:?} ({} bytes)",
                c1,
                c2,
                region,
                region.byte_width().bytes()
            );
        }
        Command::Render { font, hex } => {
            let text = parse_hex(&hex)?;
            event!(Level::DEBUG, font = font.as_str(), bytes = text.len(), "rendering");
            let rendered = render::render_text(&mut registry, &font, &text)
                .map_err(|(offset, e)| anyhow!("character at byte {offset}: {e}"))?;
            for c in rendered {
                let bytes = &text[c.offset..(c.offset + c.width.bytes()).min(text.len())];
                println!("{} (+{})", hex::encode(bytes), c.width.bytes());
                match c.art {
                    Some(art) => print!("{art}"),
                    None => println!("absent"),
                }
            }
        }
        Command::Extent { font } => {
            let (width, height) = registry.glyph_extent(&font);
            println!("{font}: {width}x{height}");
        }
        Command::Fonts => {
            for font in FONTS {
                let opened = registry
                    .find_font(font.name)
                    .is_some_and(|slot| slot.is_open());
                println!(
                    "{:8} {:?} {}x{} {} ({})",
                    font.name,
                    font.format,
                    font.width,
                    font.height,
                    registry.storage().container_path(font.path).display(),
                    if opened { "ok" } else { "missing" }
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hex_with_spaces() {
        assert_eq!(parse_hex("b0a1 41").unwrap(), [0xB0, 0xA1, 0x41]);
        assert!(parse_hex("b0a").is_err());
        assert!(parse_hex("zz").is_err());
    }

    #[test]
    fn cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
        let cli = Cli::parse_from(["dotfont", "-d", "/tmp", "render", "-f", "song16", "b0a1"]);
        assert!(matches!(cli.command, Command::Render { ref font, .. } if font == "song16"));
        assert_eq!(cli.font_dir, PathBuf::from("/tmp"));
    }
}
