//! Renders the textual content of a `.d.ts` declaration file from an
//! ordered list of already-quoted class-name literals.

/// Native line separator for the host platform.
pub const LINE_ENDING: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Suffix appended to the (optionally extension-stripped) input file name to
/// form the declaration file name.
pub const DECLARATION_SUFFIX: &str = ".d.ts";

const HEADER: &[&str] = &[
    "/*",
    " *  This file is automatically generated by css-typegen",
    " */",
    "",
];

/// Produces the full declaration-file text for the given declarations, each
/// already formatted as a quoted string literal (e.g. `'foo-bar'`).
///
/// Pure and deterministic given the input order; callers sort beforehand.
/// An empty list renders the `never` forms so an explicitly empty stylesheet
/// is distinguishable from a missing declaration file. Output always ends
/// with a trailing [`LINE_ENDING`].
pub fn render(declarations: &[String]) -> String {
    let mut lines: Vec<String> = HEADER.iter().map(|l| l.to_string()).collect();

    if declarations.is_empty() {
        lines.push("export type Keys = never;".to_string());
        lines.push("export type Css = never;".to_string());
    } else {
        lines.push(format!("export type Keys = {};", declarations.join(" | ")));
        lines.push("export type Css = { [key in Keys]: string };".to_string());
    }

    lines.push(String::new());
    lines.push("declare const css: Css;".to_string());
    lines.push("export default css;".to_string());

    lines.join(LINE_ENDING) + LINE_ENDING
}

/// Wraps a token in single quotes for use as a string-literal type member.
pub fn quote(token: &str) -> String {
    format!("'{}'", token)
}
