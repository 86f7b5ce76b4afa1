//! Extended manual text (`--manual`)

use console::style;

use super::RunContext;

const SECTIONS: &[(&str, &str)] = &[
    (
        "DESCRIPTION",
        "\
Reads a source file written in any language and keeps only its DocBlocks,
the comments delimited by '/**' and '*/'. Below each DocBlock one line is
added that declares the documented class, function or variable in PHP
syntax, so Doxygen can parse the result as PHP. Every other line of the
source is replaced by an empty line, so DocBlocks keep their line numbers.",
    ),
    (
        "TAGS",
        "\
Only '@class', '@fn' and '@var' are recognized, written with '@' (not '\\').
Other Doxygen commands may appear in a DocBlock and are passed through.
When a DocBlock holds several of these tags, the first one in the order
@class, @fn, @var decides the declaration.

@class <name>        emits  class <name>{}
@fn <name>(<args>)   emits  function <name>(<args>){}
@var <name>          emits  var <name>;

Keep the rest of the tag line empty: everything up to the end of the line
becomes part of the declaration. Members of a class need '@memberof <class>'.",
    ),
    (
        "DOXYGEN CONFIGURATION",
        "\
Register the filter for the languages Doxygen does not know, and map those
extensions to PHP, e.g. for JavaScript sources:

FILTER_PATTERNS   = *.js=docblock-filter
EXTENSION_MAPPING = js=PHP",
    ),
];

pub fn render(ctx: &RunContext) -> String {
    let mut out = String::new();

    push_heading(&mut out, "NAME");
    push_body(&mut out, &format!("docblock-filter {}", ctx.version));
    push_body(&mut out, "Doxygen input filter for languages Doxygen does not support.");

    push_heading(&mut out, "USAGE");
    push_body(&mut out, "docblock-filter <input_file>");
    push_body(&mut out, "docblock-filter <options>");

    for (heading, body) in SECTIONS {
        push_heading(&mut out, heading);
        for line in body.lines() {
            push_body(&mut out, line);
        }
    }

    out
}

fn push_heading(out: &mut String, heading: &str) {
    out.push('\n');
    out.push_str(&format!("{}\n", style(heading).white().bold()));
}

fn push_body(out: &mut String, line: &str) {
    if line.is_empty() {
        out.push('\n');
    } else {
        out.push_str(&format!("    {}\n", line));
    }
}
