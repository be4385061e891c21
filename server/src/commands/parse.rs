use color_eyre::eyre::WrapErr;

use crate::Result;

pub(crate) fn print_parsed(input: &str) -> Result<()> {
    let parsed = cookbook::parse_handwriting(input)
        .wrap_err_with(|| format!("Couldn't parse {input:?} as a recipe name"))?;

    println!("{parsed}");

    Ok(())
}
