//! Report header printed at the top of the summary.

use owo_colors::{OwoColorize, Stream};

use crate::adapter::inbound::cli::output;

/// Banner title line.
pub const TITLE: &str = "The Path-E-Tech Management EMPLOYEE STATISTICS";

/// Width of the rules framing the banner.
const WIDTH: usize = 65;

/// Office scene drawn under the title (ASCII art signed jgs and jrm).
const ART: &[&str] = &[
    r#"    (`'`'`'`')"#,
    r#"     |      |"#,
    r#"     |      |"#,
    r#"    (|-()()-|)"#,
    r#"     | (__) |"#,
    r#"     |      |"#,
    r#"     |______|"#,
    r#"    /._/\/\_.\                            .------."#,
    r#"   /  , /\    \                          ( ______ )"#,
    r#"  ; / \\|| __  ;                         (________)"#,
    r#"  |-|  './ \/|-|                         (  water )"#,
    r#"  \ |   |    | /                         (--------)"#,
    r#"   '\___|____/`           .-""-.         ( ______ )"#,
    r#"     |--LI--|           .'      \         \_    _/"#,
    r#"     |  |   |          //  |-()()         __|__|__"#,
    r#"     |  |   |         ; |  |  () |    ___/        \"#,
    r#"     |  |   |         | `" `     |    |  |  ____  |"#,
    r#"     |  |   |       ,_|   | |    |    |  | | || | |"#,
    r#"     |  |   |       `-;   (_}    ;    |__| |____| |"#,
    r#"     |  |   |          '.,   __.'      \/|        |"#,
    r#" jgs |__|___|            / /|  |         |        |"#,
    r#"..----'=||='----.   jgs / / |  |         |        | jrm"#,
    r#" `""""`"  "`""""`      (__) (__)         |________|"#,
];

const BORDER: &str = ":*~*:._.:*~*:._.:*~*:._.:*~*:._.:*~*:._.:*~*:._.:*~*:._";

#[derive(Clone, Copy, PartialEq, Eq)]
enum Style {
    Rule,
    Title,
    Art,
}

/// Banner lines with how each one is styled.
fn render() -> Vec<(Style, String)> {
    let mut lines = vec![
        (Style::Rule, "=".repeat(WIDTH)),
        (Style::Title, format!(" {TITLE} ")),
        (Style::Rule, "-".repeat(WIDTH)),
    ];
    lines.extend(ART.iter().map(|line| (Style::Art, (*line).to_string())));
    lines.push((Style::Rule, BORDER.to_string()));
    lines.push((Style::Rule, "=".repeat(WIDTH)));
    lines
}

/// Print the banner.
///
/// Skipped in quiet mode; in JSON mode the plain lines are emitted as a
/// `banner` object.
pub fn print_banner() {
    let lines = render();

    if output::is_json() {
        let plain: Vec<String> = lines.into_iter().map(|(_, line)| line).collect();
        output::lines("banner", &plain);
        return;
    }
    if output::is_quiet() {
        return;
    }

    for (style, line) in &lines {
        match style {
            Style::Title => println!(
                "{}",
                line.if_supports_color(Stream::Stdout, |t| t.bold().blue().to_string())
            ),
            Style::Rule => println!(
                "{}",
                line.if_supports_color(Stream::Stdout, |t| t.bright_black())
            ),
            Style::Art => println!("{line}"),
        }
    }
}
