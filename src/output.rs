/// Rendering of advice for the terminal
///
/// Pretty text for humans, JSON for scripts and shell hooks.

use crate::advisor::{Advice, Suggestion};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

/// Render the advice for `command` in the chosen format
///
/// The returned text always ends with a newline.
pub fn render(command: &str, advice: &Advice, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(render_pretty(command, advice)),
        OutputFormat::Json => render_json(advice),
    }
}

fn render_pretty(command: &str, advice: &Advice) -> String {
    let mut out = String::new();

    match advice {
        Advice::Exact(found) => {
            out.push_str(&format!(
                "The program \"{}\" can be found in the following snaps:\n",
                command
            ));
            for s in found {
                out.push_str(&format!(" * {}\n", s.snap()));
            }
            out.push_str("Try: snap install <selected snap>\n");
        }
        Advice::Misspelled(found) => {
            out.push_str(&format!("No command \"{}\" found, did you mean:\n", command));
            for s in found {
                out.push_str(&format!(
                    " Command \"{}\" from snap \"{}\"\n",
                    s.command(),
                    s.snap()
                ));
            }
        }
        Advice::NotFound => {
            out.push_str(&format!("{}: command not found\n", command));
        }
    }

    out
}

fn render_json(advice: &Advice) -> Result<String> {
    let found: &[Suggestion] = match advice {
        Advice::Exact(found) | Advice::Misspelled(found) => found,
        Advice::NotFound => &[],
    };

    let mut out = serde_json::to_string(found)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hello_pair() -> Vec<Suggestion> {
        vec![
            Suggestion::new("hello", "hello").unwrap(),
            Suggestion::new("hello-wcm", "hello").unwrap(),
        ]
    }

    #[test]
    fn test_exact_pretty() {
        let out = render("hello", &Advice::Exact(hello_pair()), OutputFormat::Pretty).unwrap();
        assert_eq!(
            out,
            "The program \"hello\" can be found in the following snaps:\n \
             * hello\n \
             * hello-wcm\n\
             Try: snap install <selected snap>\n"
        );
    }

    #[test]
    fn test_exact_json() {
        let out = render("hello", &Advice::Exact(hello_pair()), OutputFormat::Json).unwrap();
        assert_eq!(
            out,
            "[{\"Snap\":\"hello\",\"Command\":\"hello\"},{\"Snap\":\"hello-wcm\",\"Command\":\"hello\"}]\n"
        );
    }

    #[test]
    fn test_misspelled_pretty() {
        let out = render("helo", &Advice::Misspelled(hello_pair()), OutputFormat::Pretty).unwrap();
        assert_eq!(
            out,
            "No command \"helo\" found, did you mean:\n \
             Command \"hello\" from snap \"hello\"\n \
             Command \"hello\" from snap \"hello-wcm\"\n"
        );
    }

    #[test]
    fn test_not_found() {
        let pretty = render("xyzzy", &Advice::NotFound, OutputFormat::Pretty).unwrap();
        assert_eq!(pretty, "xyzzy: command not found\n");

        let json = render("xyzzy", &Advice::NotFound, OutputFormat::Json).unwrap();
        assert_eq!(json, "[]\n");
    }
}
