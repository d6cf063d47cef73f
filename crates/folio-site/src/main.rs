mod content;
mod page;

use std::path::Path;

use anyhow::Context;
use folio_engine::logging::{init_logging, LoggingConfig};
use folio_ui::Application;

use crate::content::palette;
use crate::page::Page;

/// Candidate files per face, most preferred first.
const FACES: [(&str, &[&str]); 4] = [
    // First registered, so it is the default face.
    ("sans", &[
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    ]),
    ("serif", &[
        "/usr/share/fonts/TTF/PlayfairDisplay-Regular.ttf",
        "/usr/share/fonts/truetype/playfair-display/PlayfairDisplay-Regular.ttf",
        "/usr/share/fonts/TTF/DejaVuSerif.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSerif.ttf",
        "/usr/share/fonts/dejavu/DejaVuSerif.ttf",
        "/usr/share/fonts/noto/NotoSerif-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSerif-Regular.ttf",
    ]),
    ("serif-italic", &[
        "/usr/share/fonts/TTF/PlayfairDisplay-Italic.ttf",
        "/usr/share/fonts/truetype/playfair-display/PlayfairDisplay-Italic.ttf",
        "/usr/share/fonts/TTF/DejaVuSerif-Italic.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSerif-Italic.ttf",
        "/usr/share/fonts/dejavu/DejaVuSerif-Italic.ttf",
        "/usr/share/fonts/noto/NotoSerif-Italic.ttf",
        "/usr/share/fonts/truetype/noto/NotoSerif-Italic.ttf",
    ]),
    ("mono", &[
        "/usr/share/fonts/TTF/SpaceMono-Regular.ttf",
        "/usr/share/fonts/truetype/space-mono/SpaceMono-Regular.ttf",
        "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
        "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
        "/usr/share/fonts/noto/NotoSansMono-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSansMono-Regular.ttf",
    ]),
];

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());
    let font_dir = std::env::var("FOLIO_FONT_DIR").ok();

    let mut app = Application::new()
        .title("Tanveer Singh")
        .size(1280.0, 800.0)
        .background(palette::paper())
        .hide_os_cursor(true);

    for (name, candidates) in FACES {
        let bytes = match font_dir.as_deref() {
            Some(dir) => font_from_dir(Path::new(dir), name)?,
            None => None,
        };
        match bytes.or_else(|| load_font(candidates)) {
            Some(bytes) => app = app.font(name, bytes),
            None => log::warn!("no font file found for '{name}'; falling back to the default face"),
        }
    }

    app.run_widget(|fonts, surface| Page::new(fonts, surface).into())
}

/// `<dir>/<face>.ttf`, when present. An unreadable file is an error.
fn font_from_dir(dir: &Path, name: &str) -> anyhow::Result<Option<Vec<u8>>> {
    let path = dir.join(format!("{name}.ttf"));
    if !path.is_file() {
        return Ok(None);
    }
    let bytes = std::fs::read(&path).with_context(|| format!("reading font {}", path.display()))?;
    log::debug!("using font {}", path.display());
    Ok(Some(bytes))
}

fn load_font(candidates: &[&str]) -> Option<Vec<u8>> {
    candidates.iter().find_map(|p| {
        let bytes = std::fs::read(p).ok()?;
        log::debug!("using font {p}");
        Some(bytes)
    })
}
