//! blockmark CLI - render Markdown to HTML
//!
//! Usage: `blockmark [--disable NAME]... [FILE|-]`

use std::io::{self, Read, Write};

use blockmark::{Capabilities, Options};

fn main() -> io::Result<()> {
    let mut options = Options::default();
    let mut path = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--disable" {
            let name = args
                .next()
                .ok_or_else(|| invalid_input("--disable requires a capability name".to_owned()))?;
            let capability = Capabilities::from_cli_name(&name)
                .ok_or_else(|| invalid_input(format!("unknown capability `{name}`")))?;
            options = options.without(capability);
        } else {
            path = Some(arg);
        }
    }

    // Read from a file, or stdin for `-` / no argument
    let input = match path.as_deref() {
        Some(p) if p != "-" => std::fs::read_to_string(p)?,
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let html = blockmark::to_html_with_options(&input, &options);
    io::stdout().write_all(html.as_bytes())?;

    Ok(())
}

fn invalid_input(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, message)
}
