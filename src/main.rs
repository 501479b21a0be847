use miette::{IntoDiagnostic, Result};

/// Draw the cat-in-a-hat scene and write the SVG to the path given as the
/// first argument, or to stdout when no path is given.
fn main() -> Result<()> {
    let svg = polycat::render_scene(800.0, 800.0)?;
    match std::env::args().nth(1) {
        Some(path) => std::fs::write(&path, svg).into_diagnostic()?,
        None => print!("{}", svg),
    }
    Ok(())
}
