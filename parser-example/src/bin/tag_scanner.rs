//! Template tag scanner
//!
//! Finds `{name}` placeholders in a URL template with the low-level scanner,
//! then fills them from `name=value` bindings. Substituted values are
//! percent-encoded so the result stays a valid URL.
//!
//! Usage: `tag-scanner [TEMPLATE] [NAME=VALUE]...`. Without a template a
//! built-in one is rendered with sample bindings.

use clap::Parser;
use matcher_framework::{
    char_class, characters, choice, one_or_more, CharClass, Recognizer, ScanError, Scanner,
    Stream,
};
use parser_framework::escape::encode_uri_component;
use std::collections::HashMap;

const DEFAULT_TEMPLATE: &str = "https://example.com/{ lang }/search?q={query}&page={page}";

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "tag-scanner", about = "Fill {name} placeholders in a URL template.")]
struct Args {
    /// URL template with `{name}` placeholders.
    template: Option<String>,

    /// Placeholder values as NAME=VALUE.
    #[arg(value_parser = parse_binding)]
    bindings: Vec<(String, String)>,
}

fn parse_binding(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got {:?}", arg)),
    }
}

/// One placeholder found in the template.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Tag<'s> {
    /// The whole `{...}` group, braces included.
    group: Stream<'s>,
    /// The placeholder name, or `None` if the group holds no identifier.
    name: Option<Stream<'s>>,
}

fn identifier() -> Recognizer {
    one_or_more(choice([
        char_class(CharClass::ALPHANUMERIC),
        characters(&['_']),
    ]))
}

/// Collects every balanced `{...}` group in the text.
fn scan_tags<'s>(scanner: &'s Scanner, ident: &Recognizer) -> Result<Vec<Tag<'s>>, ScanError> {
    let mut tags = Vec::new();
    let mut cursor = scanner.stream();
    let mut group = scanner.stream();

    while cursor.seek_bounds(&mut group, '{', '}') {
        // Look inside the braces.
        let mut inner = group;
        inner.set(group.pos() + 1, group.end() - 1)?;
        inner.skip_ws();

        let mut name = inner;
        let found = inner.seek(ident, &mut name);
        if found {
            inner.jump(&name)?;
            inner.skip_ws();
        }
        let name = (found && inner.is_empty()).then_some(name);
        tags.push(Tag { group, name });
    }
    Ok(tags)
}

fn render(template: &str, bindings: &HashMap<String, String>) -> Result<String, ScanError> {
    let scanner = Scanner::new(template);
    let ident = identifier();
    let tags = scan_tags(&scanner, &ident)?;

    let mut out = String::with_capacity(template.len());
    let mut last = 0;
    for tag in &tags {
        out.push_str(&template[last..tag.group.pos()]);
        last = tag.group.end();

        let Some(name) = &tag.name else {
            eprintln!(
                "warning: {}: malformed placeholder {}",
                tag.group.position(),
                tag.group
            );
            out.push_str(tag.group.as_str());
            continue;
        };
        match bindings.get(name.as_str()) {
            Some(value) => out.push_str(&encode_uri_component(value)),
            None => {
                eprintln!("warning: {}: no value for {}", name.position(), name);
                out.push_str(tag.group.as_str());
            }
        }
    }
    out.push_str(&template[last..]);
    Ok(out)
}

fn main() {
    let args = Args::parse();
    let (template, bindings): (String, HashMap<String, String>) = match args.template {
        Some(template) => (template, args.bindings.into_iter().collect()),
        None => (
            DEFAULT_TEMPLATE.to_string(),
            [("lang", "en"), ("query", "tea & biscuits"), ("page", "2")]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        ),
    };

    match render(&template, &bindings) {
        Ok(url) => println!("{}", url),
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    }
}
