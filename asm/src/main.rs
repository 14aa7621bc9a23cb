use color_print::cprintln;

use asm24::error::Error;
use asm24::first_pass::first_pass;
use asm24::second_pass::second_pass;
use asm24::unit::Unit;
use asm24::{diag, output, preprocess};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input files, base names without the `.as` extension
    #[clap(required = true)]
    input: Vec<String>,
}

fn main() {
    use clap::Parser;

    let args = Args::parse();
    for base in &args.input {
        println!("Processing {base}.as");
        if let Err(err) = assemble(base) {
            cprintln!("<red,bold>error</>: {err}");
        }
    }
}

/// Run the full pipeline for one base name. Stage diagnostics stop the
/// file after the stage that produced them; the returned error covers file
/// I/O only, so the caller can move on to the next input either way.
fn assemble(base: &str) -> Result<(), Error> {
    let as_name = format!("{base}.as");
    let am_name = format!("{base}.am");

    let source = std::fs::read_to_string(&as_name)
        .map_err(|err| Error::FileOpen(as_name.clone(), err))?;

    let (expanded, msgs) = preprocess::expand(&as_name, &source);
    std::fs::write(&am_name, &expanded)
        .map_err(|err| Error::FileCreate(am_name.clone(), err))?;
    if !msgs.is_empty() {
        diag::dump(&msgs);
        return Ok(());
    }

    let mut unit = Unit::new();
    let msgs = first_pass(&am_name, &expanded, &mut unit);
    if !msgs.is_empty() {
        diag::dump(&msgs);
        return Ok(());
    }

    let msgs = second_pass(&am_name, &expanded, &mut unit);
    if !msgs.is_empty() {
        diag::dump(&msgs);
        return Ok(());
    }

    write_listing(&format!("{base}.ob"), Some(output::object_file(&unit)))?;
    write_listing(&format!("{base}.ent"), output::entries_file(&unit))?;
    write_listing(&format!("{base}.ext"), output::externals_file(&unit))?;
    Ok(())
}

fn write_listing(name: &str, content: Option<String>) -> Result<(), Error> {
    match content {
        Some(text) => {
            std::fs::write(name, text).map_err(|err| Error::FileWrite(name.to_string(), err))
        }
        None => Ok(()),
    }
}
